//! Extract artwork records from one saved search-result page and write them
//! as a JSON array.

use std::fs;
use std::io::{self, Write};
use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use rs_serp_artworks::{extract_file, ArtworkRecord, Mode, Options};

#[derive(Parser)]
#[command(
    name = "extract_artworks",
    about = "Extract artwork records from a saved Google results page"
)]
struct Cli {
    /// Saved HTML page
    input: PathBuf,

    /// Extraction mode: strict or lenient
    #[arg(short, long, default_value_t = Mode::Strict)]
    mode: Mode,

    /// Site origin prefixed onto result links
    #[arg(long, default_value = rs_serp_artworks::options::DEFAULT_ORIGIN)]
    origin: String,

    /// Write JSON here instead of stdout
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Pretty-print the JSON
    #[arg(long)]
    pretty: bool,

    /// Print a short summary to stderr
    #[arg(long)]
    summary: bool,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    let cli = Cli::parse();
    let options = Options {
        mode: cli.mode,
        origin: cli.origin,
        ..Options::default()
    };

    let records = extract_file(&cli.input, &options)
        .with_context(|| format!("extracting {}", cli.input.display()))?;

    let json = if cli.pretty {
        serde_json::to_string_pretty(&records)?
    } else {
        serde_json::to_string(&records)?
    };

    match &cli.output {
        Some(path) => fs::write(path, json.as_bytes())
            .with_context(|| format!("writing {}", path.display()))?,
        None => {
            let mut stdout = io::stdout().lock();
            stdout.write_all(json.as_bytes())?;
            stdout.write_all(b"\n")?;
        }
    }

    if cli.summary {
        print_summary(&records, cli.mode);
    }
    Ok(())
}

fn print_summary(records: &[ArtworkRecord], mode: Mode) {
    let with_image = records.iter().filter(|r| r.has_image()).count();
    let with_extensions = records.iter().filter(|r| !r.extensions().is_empty()).count();

    eprintln!("{} records ({mode} mode)", records.len());
    eprintln!("  with image:      {with_image}");
    eprintln!("  with extensions: {with_extensions}");
    for record in records.iter().take(5) {
        let extensions = record.extensions().join(", ");
        if extensions.is_empty() {
            eprintln!("  - {}", record.name);
        } else {
            eprintln!("  - {} [{extensions}]", record.name);
        }
    }
}
