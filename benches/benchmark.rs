//! Performance benchmarks for rs-serp-artworks.
//!
//! Run with: `cargo bench`
//!
//! A synthetic results page with a carousel of `CARDS` artwork cards plus
//! navigation noise, extracted in both modes.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use rs_serp_artworks::{extract_with_options, Options};

const CARDS: [usize; 3] = [10, 50, 200];

fn results_page(cards: usize) -> String {
    let mut html = String::from(
        r#"<!DOCTYPE html><html><head><meta charset="utf-8"></head><body>
        <div role="navigation"><a href="/search?q=art&tbm=isch">Images</a></div>
        <div role="main"><div data-attrid="works">"#,
    );
    for i in 0..cards {
        let year = 1400 + i % 600;
        html.push_str(&format!(
            r#"<a href="/search?sca_esv=9b1e&amp;q=Artwork+{i}&amp;stick=H4s">
                 <img src="data:image/png;base64,iVBORw0KGgo{i:04}" data-src="https://tbn.example/{i}.jpg">
                 <div><div>Artwork {i}</div><div>["{year}","Museum {i}"]</div></div>
               </a>"#
        ));
    }
    html.push_str(r#"</div><a href="/search?q=art&start=10">See more</a></div></body></html>"#);
    html
}

fn bench_modes(c: &mut Criterion) {
    let mut group = c.benchmark_group("extract");

    for cards in CARDS {
        let page = results_page(cards);
        group.throughput(Throughput::Bytes(page.len() as u64));

        let strict = Options::strict();
        group.bench_with_input(BenchmarkId::new("strict", cards), &page, |b, page| {
            b.iter(|| extract_with_options(black_box(page), &strict));
        });

        let lenient = Options::lenient();
        group.bench_with_input(BenchmarkId::new("lenient", cards), &page, |b, page| {
            b.iter(|| extract_with_options(black_box(page), &lenient));
        });
    }

    group.finish();
}

criterion_group!(benches, bench_modes);
criterion_main!(benches);
