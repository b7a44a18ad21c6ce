//! Extraction pipeline.
//!
//! Locator → validator → per-anchor extractor → assembler, run once over an
//! already-parsed document. Nothing is shared between runs.

use tracing::{debug, info};

use crate::assemble;
use crate::dom::{self, Document};
use crate::error::{Error, Result};
use crate::extractor::{lenient, rules, strict};
use crate::link::LENIENT_MARKER;
use crate::locator::{locate_anchors, HrefPattern};
use crate::options::{Mode, Options};
use crate::record::ArtworkRecord;

/// Parse `html` and run the pipeline selected by `options.mode`.
pub(crate) fn extract_records(html: &str, options: &Options) -> Result<Vec<ArtworkRecord>> {
    options.validate()?;
    if html.trim().is_empty() {
        return Err(Error::EmptyDocument);
    }

    let document = dom::parse(html);
    Ok(run(&document, html, options))
}

/// Run the pipeline over a document parsed by the caller.
///
/// Lenient image backfill reads the serialized document as its markup.
pub(crate) fn extract_from_document(
    document: &Document,
    options: &Options,
) -> Result<Vec<ArtworkRecord>> {
    options.validate()?;
    let markup = match options.mode {
        Mode::Strict => String::new(),
        Mode::Lenient => document.html().to_string(),
    };
    Ok(run(document, &markup, options))
}

fn run(document: &Document, markup: &str, options: &Options) -> Vec<ArtworkRecord> {
    match options.mode {
        Mode::Strict => run_strict(document, options),
        Mode::Lenient => run_lenient(document, markup, options),
    }
}

fn run_strict(document: &Document, options: &Options) -> Vec<ArtworkRecord> {
    let anchors = locate_anchors(
        document,
        HrefPattern::Prefix(&options.anchor_prefix),
        &options.main_selector,
    );

    let outcomes = anchors.iter().map(|anchor| {
        strict::extract_anchor(anchor, options).inspect_err(|reason| {
            debug!(%reason, href = ?dom::get_attribute(anchor, "href"), "skipping anchor");
        })
    });
    let records = assemble::assemble_strict(outcomes);

    info!(
        mode = %options.mode,
        anchors = anchors.len(),
        records = records.len(),
        "extraction finished"
    );
    records
}

fn run_lenient(document: &Document, markup: &str, options: &Options) -> Vec<ArtworkRecord> {
    let anchors = locate_anchors(
        document,
        HrefPattern::Contains(LENIENT_MARKER),
        &options.main_selector,
    );

    let candidates: Vec<lenient::Candidate> = anchors
        .iter()
        .enumerate()
        .filter_map(|(index, anchor)| lenient::collect_candidate(anchor, index, options))
        .filter(|candidate| match rules::first_rejection(candidate, options) {
            Some(rejection) => {
                debug!(%rejection, name = %candidate.name, "rejecting candidate");
                false
            }
            None => true,
        })
        .collect();

    let mut candidates = assemble::dedupe(candidates);
    if options.backfill_images {
        assemble::backfill_images(&mut candidates, markup);
    }
    let records = assemble::sort_and_strip(candidates);

    info!(
        mode = %options.mode,
        anchors = anchors.len(),
        records = records.len(),
        "extraction finished"
    );
    records
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_document_is_an_input_error() {
        assert!(matches!(
            extract_records("  \n ", &Options::default()),
            Err(Error::EmptyDocument)
        ));
    }

    #[test]
    fn invalid_origin_is_an_input_error() {
        let options = Options {
            origin: "not a url".to_string(),
            ..Options::default()
        };
        assert!(matches!(
            extract_records("<a href=\"/search?sca_esv=1\"></a>", &options),
            Err(Error::InvalidOrigin(_))
        ));
    }

    #[test]
    fn page_without_anchors_yields_nothing() {
        let records = extract_records(
            "<html><body><p>No results</p></body></html>",
            &Options::default(),
        );
        assert!(records.is_ok_and(|r| r.is_empty()));
    }
}
