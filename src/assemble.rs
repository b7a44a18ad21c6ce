//! Final record assembly.
//!
//! Strict output keeps anchor scan order. Lenient output is deduplicated,
//! image-backfilled, sorted by name and stripped of bookkeeping.

use std::collections::HashSet;

use tracing::debug;

use crate::extractor::images::Backfill;
use crate::extractor::lenient::Candidate;
use crate::record::ArtworkRecord;

/// Keep successful outcomes in scan order.
pub fn assemble_strict<E>(
    outcomes: impl IntoIterator<Item = Result<ArtworkRecord, E>>,
) -> Vec<ArtworkRecord> {
    outcomes.into_iter().filter_map(Result::ok).collect()
}

/// Drop later candidates repeating an earlier `(name, link)` pair.
#[must_use]
pub fn dedupe(candidates: Vec<Candidate>) -> Vec<Candidate> {
    let mut seen: HashSet<(String, String)> = HashSet::with_capacity(candidates.len());
    candidates
        .into_iter()
        .filter(|c| {
            let fresh = seen.insert((c.name.clone(), c.link.clone()));
            if !fresh {
                debug!(name = %c.name, link = %c.link, "dropping duplicate candidate");
            }
            fresh
        })
        .collect()
}

/// Give image-less candidates the next unused inline image from the markup.
///
/// Candidates are visited in their current order, so call this before
/// sorting to keep the assignment in document order.
pub fn backfill_images(candidates: &mut [Candidate], markup: &str) {
    if candidates.iter().all(|c| !c.image.is_empty()) {
        return;
    }

    let mut backfill = Backfill::new(markup, candidates.iter().map(|c| c.image.as_str()));
    for candidate in candidates.iter_mut().filter(|c| c.image.is_empty()) {
        let Some(literal) = backfill.next_unused() else {
            break;
        };
        debug!(name = %candidate.name, "backfilled image from markup");
        candidate.image = literal;
    }
}

/// Stable sort by lowercase name (scan index breaks ties) and strip
/// bookkeeping.
#[must_use]
pub fn sort_and_strip(mut candidates: Vec<Candidate>) -> Vec<ArtworkRecord> {
    candidates.sort_by_cached_key(|c| (c.name.to_lowercase(), c.index));
    candidates.into_iter().map(Candidate::into_record).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn candidate(index: usize, name: &str, link: &str) -> Candidate {
        Candidate {
            index,
            name: name.to_string(),
            href: link.trim_start_matches("https://www.google.com").to_string(),
            link: link.to_string(),
            image: String::new(),
            years: Vec::new(),
        }
    }

    #[test]
    fn strict_keeps_order_and_drops_skips() {
        let outcomes: Vec<Result<ArtworkRecord, &str>> = vec![
            Ok(ArtworkRecord { name: "B".into(), ..ArtworkRecord::default() }),
            Err("skip"),
            Ok(ArtworkRecord { name: "A".into(), ..ArtworkRecord::default() }),
        ];
        let names: Vec<String> = assemble_strict(outcomes).into_iter().map(|r| r.name).collect();
        assert_eq!(names, vec!["B", "A"]);
    }

    #[test]
    fn dedupe_keeps_first_occurrence() {
        let mut first = candidate(0, "Mona Lisa", "https://www.google.com/search?q=a");
        first.years = vec!["1503".to_string()];
        let second = candidate(1, "Mona Lisa", "https://www.google.com/search?q=a");
        let other_link = candidate(2, "Mona Lisa", "https://www.google.com/search?q=b");

        let kept = dedupe(vec![first, second, other_link]);
        assert_eq!(kept.len(), 2);
        assert_eq!(kept[0].index, 0);
        assert_eq!(kept[0].years, vec!["1503"]);
        assert_eq!(kept[1].index, 2);
    }

    #[test]
    fn backfill_in_document_order_without_reuse() {
        let a = "data:image/png;base64,AAAA";
        let b = "data:image/png;base64,BBBB";
        let c = "data:image/png;base64,CCCC";
        let markup = format!("<img src=\"{a}\"><script>x='{b}';y='{c}';</script>");

        let mut with_image = candidate(0, "Has image", "https://www.google.com/search?q=1");
        with_image.image = a.to_string();
        let mut candidates = vec![
            with_image,
            candidate(1, "First", "https://www.google.com/search?q=2"),
            candidate(2, "Second", "https://www.google.com/search?q=3"),
            candidate(3, "Third", "https://www.google.com/search?q=4"),
        ];

        backfill_images(&mut candidates, &markup);
        let images: Vec<&str> = candidates.iter().map(|c| c.image.as_str()).collect();
        assert_eq!(images, vec![a, b, c, ""]);
    }

    #[test]
    fn sort_is_case_insensitive_and_stable() {
        let records = sort_and_strip(vec![
            candidate(0, "water Lilies", "l0"),
            candidate(1, "Guernica", "l1"),
            candidate(2, "guernica", "l2"),
            candidate(3, "Amor Vincit Omnia", "l3"),
        ]);
        let links: Vec<&str> = records.iter().map(|r| r.link.as_str()).collect();
        assert_eq!(links, vec!["l3", "l1", "l2", "l0"]);
        assert!(records.iter().all(|r| r.extensions.is_some()));
    }
}
