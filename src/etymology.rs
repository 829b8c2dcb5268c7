//! Converts Wordnik etymology fragments (`<ety>...</ety>`) into Discord markdown.

use quick_xml::events::Event;
use quick_xml::Reader;
use thiserror::Error;
use tracing::warn;

pub const ETYMOLOGY_PARSE_FAILED: &str = "⚠️ Failed to parse etymology.";

const ROOT_TAG: &[u8] = b"ety";

/// Inline tags replaced by markdown emphasis, in replacement order.
const MARKUP: [(&str, &str); 4] = [
    ("<ets>", "**"),
    ("</ets>", "**"),
    ("<er>", "*"),
    ("</er>", "*"),
];

#[derive(Debug, Error)]
pub enum EtymologyParseError {
    #[error("malformed XML: {0}")]
    Xml(#[from] quick_xml::Error),
    #[error("expected <ety> root element, found <{0}>")]
    UnexpectedRoot(String),
    #[error("fragment has no root element")]
    MissingRoot,
    #[error("<ety> element is never closed")]
    Unterminated,
}

/// Formats one etymology fragment for display. Never fails: a fragment that
/// cannot be parsed becomes [`ETYMOLOGY_PARSE_FAILED`].
pub fn format_etymology(fragment: &str) -> String {
    match inner_content(fragment) {
        Ok(content) => render_markup(content),
        Err(e) => {
            warn!("Error parsing etymology XML: {}", e);
            ETYMOLOGY_PARSE_FAILED.to_string()
        }
    }
}

/// Replaces the emphasis tags with markdown and flattens newlines.
/// Applying it to its own output is a no-op.
pub fn render_markup(content: &str) -> String {
    let mut output = content.to_string();
    for (tag, markdown) in MARKUP {
        output = output.replace(tag, markdown);
    }
    output.replace('\n', " ")
}

/// Returns the raw (unescaped) markup between `<ety>` and `</ety>`.
/// Anything before the root other than prolog and whitespace is skipped,
/// anything after it is ignored.
pub fn inner_content(fragment: &str) -> Result<&str, EtymologyParseError> {
    let mut reader = Reader::from_str(fragment);
    let mut depth = 0usize;
    let mut start = 0usize;

    loop {
        match reader.read_event()? {
            Event::Start(e) if depth == 0 => {
                if e.local_name().as_ref() != ROOT_TAG {
                    return Err(EtymologyParseError::UnexpectedRoot(
                        String::from_utf8_lossy(e.name().as_ref()).into_owned(),
                    ));
                }
                depth = 1;
                start = reader.buffer_position() as usize;
            }
            Event::Empty(e) if depth == 0 => {
                if e.local_name().as_ref() != ROOT_TAG {
                    return Err(EtymologyParseError::UnexpectedRoot(
                        String::from_utf8_lossy(e.name().as_ref()).into_owned(),
                    ));
                }
                return Ok("");
            }
            Event::Start(_) => depth += 1,
            Event::End(_) if depth == 0 => return Err(EtymologyParseError::MissingRoot),
            Event::End(_) => {
                depth -= 1;
                if depth == 0 {
                    let after = reader.buffer_position() as usize;
                    let end = fragment[start..after]
                        .rfind("</")
                        .map_or(start, |offset| start + offset);
                    return Ok(&fragment[start..end]);
                }
            }
            Event::Eof if depth == 0 => return Err(EtymologyParseError::MissingRoot),
            Event::Eof => return Err(EtymologyParseError::Unterminated),
            _ => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn replaces_emphasis_tags() {
        let fragment = "<ety>[<ets>Latin</ets> <er>lucens</er>, shining.]</ety>";
        assert_eq!(format_etymology(fragment), "[**Latin** *lucens*, shining.]");
    }

    #[test]
    fn collapses_newlines() {
        let fragment = "<ety>From\nOld English\n<ets>leoht</ets></ety>";
        assert_eq!(format_etymology(fragment), "From Old English **leoht**");
    }

    #[test]
    fn fragment_without_known_tags_is_passed_through() {
        let fragment = "<ety>Of <i>unknown</i> origin.</ety>";
        assert_eq!(format_etymology(fragment), "Of <i>unknown</i> origin.");
    }

    #[test]
    fn empty_root_yields_empty_text() {
        assert_eq!(format_etymology("<ety/>"), "");
        assert_eq!(format_etymology("<ety></ety>"), "");
    }

    #[test]
    fn leading_prolog_is_skipped() {
        let fragment = "<?xml version=\"1.0\"?>\n<ety>plain</ety>trailing";
        assert_eq!(format_etymology(fragment), "plain");
    }

    #[test]
    fn malformed_fragments_yield_placeholder() {
        for fragment in [
            "",
            "not xml at all",
            "<ety>never closed",
            "<ety><ets>crossed</er></ety>",
            "<etymology>wrong root</etymology>",
        ] {
            assert_eq!(format_etymology(fragment), ETYMOLOGY_PARSE_FAILED, "{fragment:?}");
        }
    }

    #[test]
    fn wrong_root_is_reported() {
        let err = inner_content("<def>x</def>").unwrap_err();
        assert!(matches!(err, EtymologyParseError::UnexpectedRoot(ref name) if name == "def"));
    }

    #[test]
    fn markup_rendering_is_idempotent() {
        let once = render_markup("<ets>a</ets>\n<er>b</er>");
        assert_eq!(render_markup(&once), once);
    }

    #[test]
    fn converted_text_survives_second_pass() {
        let once = format_etymology("<ety><ets>Greek</ets> <er>logos</er>\nword</ety>");
        let twice = format_etymology(&format!("<ety>{once}</ety>"));
        assert_eq!(once, twice);
    }
}
