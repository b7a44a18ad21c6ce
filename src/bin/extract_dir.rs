/// Batch runner over a directory of saved pages.
/// Prints per-file record counts; useful for spotting pages whose layout
/// the strict extractor no longer recognises.
use std::fs;
use std::path::PathBuf;

use clap::Parser;
use rs_serp_artworks::{extract_file, Mode, Options};

#[derive(Parser)]
#[command(name = "extract_dir", about = "Extract artworks from every saved page in a directory")]
struct Cli {
    /// Directory containing .html/.htm files
    dir: PathBuf,

    /// Extraction mode: strict or lenient
    #[arg(short, long, default_value_t = Mode::Strict)]
    mode: Mode,

    /// Max number of files to process
    #[arg(short = 'n', long)]
    limit: Option<usize>,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "warn".into()),
        )
        .init();

    let cli = Cli::parse();
    let options = Options {
        mode: cli.mode,
        ..Options::default()
    };

    let mut pages: Vec<PathBuf> = fs::read_dir(&cli.dir)?
        .filter_map(Result::ok)
        .map(|e| e.path())
        .filter(|p| {
            p.extension()
                .is_some_and(|ext| {
                    ext.eq_ignore_ascii_case("html") || ext.eq_ignore_ascii_case("htm")
                })
        })
        .collect();
    pages.sort();

    let limit = cli.limit.unwrap_or(usize::MAX);
    let mut total_records = 0usize;
    let mut empty = 0usize;
    let mut failed = 0usize;

    for path in pages.iter().take(limit) {
        match extract_file(path, &options) {
            Ok(records) => {
                if records.is_empty() {
                    empty += 1;
                }
                total_records += records.len();
                println!("{:>5}  {}", records.len(), path.display());
            }
            Err(e) => {
                failed += 1;
                println!("  ERR  {}: {e}", path.display());
            }
        }
    }

    eprintln!(
        "Processed {} files ({} mode): {} records, {} without records, {} failed",
        pages.len().min(limit),
        cli.mode,
        total_records,
        empty,
        failed
    );
    Ok(())
}
