//! Strict pipeline tests against saved-page shaped HTML.

#![allow(clippy::expect_used)] // expect() is appropriate in tests for clear panic messages

use rs_serp_artworks::{extract, extract_bytes, extract_with_options, ArtworkRecord, Options};

const ORIGIN: &str = "https://www.google.com";

/// Trimmed-down artworks carousel as saved from a results page.
const CAROUSEL: &str = r#"
<!DOCTYPE html>
<html lang="en">
<head><meta charset="utf-8"><title>leonardo da vinci artworks - Google Search</title></head>
<body>
  <div id="searchform">
    <a href="/search?sca_esv=5a7c&q=leonardo&tbm=isch">Images</a>
  </div>
  <div id="rcnt">
    <div role="main">
      <div class="Cz5hV" data-attrid="kc:/visual_art/visual_artist:works">
        <a class="klitem" href="/search?sca_esv=5a7c&amp;q=Mona+Lisa&amp;stick=H4sI">
          <img class="taFZJe" src="data:image/gif;base64,R0lGODlhAQABAIAAAP" data-src="https://encrypted-tbn0.gstatic.com/mona.jpg" alt="">
          <div class="kltat">
            <div class="JjtOHd">Mona Lisa</div>
            <div class="ellip">["1503","Louvre"]</div>
          </div>
        </a>
        <a class="klitem" href="/search?sca_esv=5a7c&amp;q=The+Last+Supper&amp;stick=H4sI">
          <img src="https://encrypted-tbn0.gstatic.com/supper.jpg" alt="">
          <div class="kltat">
            <div class="JjtOHd">The Last Supper</div>
            <div class="ellip">1498</div>
          </div>
        </a>
        <a class="klitem" href="/search?sca_esv=5a7c&amp;q=Lady+with+an+Ermine">
          <img src="https://encrypted-tbn0.gstatic.com/ermine.jpg" alt="">
          <div class="kltat">
            <div class="JjtOHd">Lady with an Ermine</div>
          </div>
          <span class="badge">New</span>
        </a>
        <a class="klitem" href="/search?sca_esv=5a7c&amp;q=Salvator+Mundi">
          <img alt="">
          <div class="kltat">
            <div class="JjtOHd">Salvator &amp; Mundi</div>
          </div>
        </a>
        <a class="klitem" href="/search?sca_esv=&amp;q=Vitruvian+Man">
          <img src="https://encrypted-tbn0.gstatic.com/vitruvian.jpg" alt="">
          <div class="kltat"><div>Vitruvian Man</div><div>["1490"]</div></div>
        </a>
      </div>
      <a href="/search?sca_esv=5a7c&amp;q=leonardo+da+vinci+artworks&amp;start=10">More artworks</a>
    </div>
  </div>
</body>
</html>
"#;

fn names(records: &[ArtworkRecord]) -> Vec<&str> {
    records.iter().map(|r| r.name.as_str()).collect()
}

#[test]
fn carousel_cards_in_document_order() {
    let records = extract(CAROUSEL).expect("extraction failed");
    assert_eq!(names(&records), vec!["Mona Lisa", "The Last Supper", "Salvator & Mundi"]);
}

#[test]
fn two_sections_with_json_array() {
    let records = extract(CAROUSEL).expect("extraction failed");
    let mona = &records[0];
    assert_eq!(mona.link, format!("{ORIGIN}/search?sca_esv=5a7c&q=Mona+Lisa&stick=H4sI"));
    assert_eq!(mona.image, "https://encrypted-tbn0.gstatic.com/mona.jpg");
    assert_eq!(mona.extensions, Some(vec!["1503".to_string(), "Louvre".to_string()]));
}

#[test]
fn plain_text_extension_is_single_entry() {
    let records = extract(CAROUSEL).expect("extraction failed");
    assert_eq!(records[1].extensions(), ["1498"]);
}

#[test]
fn stray_third_child_skips_card() {
    let records = extract(CAROUSEL).expect("extraction failed");
    assert!(!names(&records).contains(&"Lady with an Ermine"));
}

#[test]
fn empty_session_value_skips_card() {
    let records = extract(CAROUSEL).expect("extraction failed");
    assert!(!names(&records).contains(&"Vitruvian Man"));
}

#[test]
fn single_section_has_no_extensions_key() {
    let records = extract(CAROUSEL).expect("extraction failed");
    let salvator = records
        .iter()
        .find(|r| r.name == "Salvator & Mundi")
        .expect("card missing");
    assert_eq!(salvator.extensions, None);
    assert_eq!(salvator.image, "");

    let json = serde_json::to_value(salvator).expect("serialize");
    let keys: Vec<&String> = json.as_object().expect("object").keys().collect();
    assert_eq!(keys.len(), 3);
    assert!(json.get("extensions").is_none());
    assert_eq!(json["image"], serde_json::json!(""));
}

#[test]
fn every_link_has_origin_and_session() {
    let records = extract(CAROUSEL).expect("extraction failed");
    for record in &records {
        assert!(record.link.starts_with(&format!("{ORIGIN}/search")), "{}", record.link);
        let query = record.link.split_once('?').map(|(_, q)| q).unwrap_or_default();
        let session = url::form_urlencoded::parse(query.as_bytes())
            .find(|(k, _)| k == "sca_esv")
            .map(|(_, v)| v.into_owned());
        assert!(session.is_some_and(|v| !v.is_empty()), "{}", record.link);
    }
}

#[test]
fn extensions_never_present_but_empty() {
    let records = extract(CAROUSEL).expect("extraction failed");
    assert!(records
        .iter()
        .all(|r| r.extensions.as_ref().is_none_or(|e| !e.is_empty())));
}

#[test]
fn output_never_exceeds_matching_anchors() {
    let records = extract(CAROUSEL).expect("extraction failed");
    let doc = rs_serp_artworks::dom::parse(CAROUSEL);
    let matching = doc.select(r#"[role="main"] a[href^="/search?sca_esv="]"#).length();
    assert_eq!(matching, 6);
    assert!(records.len() <= matching);
}

#[test]
fn extraction_is_idempotent() {
    let first = extract(CAROUSEL).expect("extraction failed");
    let second = extract(CAROUSEL).expect("extraction failed");
    assert_eq!(first, second);
}

#[test]
fn main_scope_excludes_search_form_links() {
    let records = extract(CAROUSEL).expect("extraction failed");
    assert!(records.iter().all(|r| !r.link.contains("tbm=isch")));
}

#[test]
fn custom_origin_is_prefixed() {
    let options = Options {
        origin: "https://www.google.co.uk/".to_string(),
        ..Options::default()
    };
    let records = extract_with_options(CAROUSEL, &options).expect("extraction failed");
    assert!(records
        .iter()
        .all(|r| r.link.starts_with("https://www.google.co.uk/search?sca_esv=")));
}

#[test]
fn page_without_main_role_is_scanned_whole() {
    let html = r#"<html><body>
        <a href="/search?sca_esv=1&q=Sunflowers"><img src="s.jpg"><div><div>Sunflowers</div></div></a>
    </body></html>"#;
    let records = extract(html).expect("extraction failed");
    assert_eq!(names(&records), vec!["Sunflowers"]);
    assert_eq!(records[0].extensions, None);
}

#[test]
fn malformed_json_extension_kept_raw() {
    let html = r#"<div role="main">
        <a href="/search?sca_esv=1&q=x"><img src="a.jpg"><div><div>The Kiss</div><div>[1907, Belvedere]</div></div></a>
    </div>"#;
    let records = extract(html).expect("extraction failed");
    assert_eq!(records[0].extensions(), ["[1907, Belvedere]"]);
}

#[test]
fn byte_input_is_decoded() {
    let html = b"<meta charset=\"windows-1252\"><div role=\"main\">\
        <a href=\"/search?sca_esv=1&q=x\"><img src=\"a.jpg\"><div><div>Caf\xE9 Terrace at Night</div></div></a></div>";
    let records = extract_bytes(html).expect("extraction failed");
    assert_eq!(records[0].name, "Café Terrace at Night");
}
