use crate::error::ExtractionError;
use quick_xml::events::Event;
use quick_xml::Reader;
use std::fs::File;
use std::io::Read;
use std::path::Path;
use zip::ZipArchive;

const DOCUMENT_PART: &str = "word/document.xml";

/// Read every paragraph of a Word (OOXML) document, in document order.
///
/// Legacy binary `.doc` files are not zip containers and fail here.
pub fn extract_paragraphs(path: &Path) -> Result<Vec<String>, ExtractionError> {
    let file = File::open(path).map_err(|source| ExtractionError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let mut archive = ZipArchive::new(file)
        .map_err(|e| ExtractionError::Docx(format!("not a Word document archive: {e}")))?;

    let mut xml = String::new();
    archive
        .by_name(DOCUMENT_PART)
        .map_err(|e| ExtractionError::Docx(format!("missing {DOCUMENT_PART}: {e}")))?
        .read_to_string(&mut xml)
        .map_err(|e| ExtractionError::Docx(format!("failed to read {DOCUMENT_PART}: {e}")))?;

    parse_document_xml(&xml)
}

/// Collect paragraph text from the main document part.
///
/// Only paragraphs that are direct children of `w:body` are returned, so
/// table cells are skipped. Text runs (`w:t`) are concatenated per
/// paragraph; tabs and breaks become `\t` and `\n`. Paragraphs nested
/// inside another one (text boxes) contribute no text.
pub fn parse_document_xml(xml: &str) -> Result<Vec<String>, ExtractionError> {
    let mut reader = Reader::from_str(xml);
    let mut paragraphs = Vec::new();
    let mut depth = 0usize;
    let mut body_depth: Option<usize> = None;
    let mut current: Option<String> = None;
    let mut nested = 0usize;
    let mut in_text_node = false;

    loop {
        match reader.read_event() {
            Ok(Event::Start(ref e)) => {
                depth += 1;
                match e.name().as_ref() {
                    b"w:body" => body_depth = Some(depth),
                    b"w:p" if current.is_some() => nested += 1,
                    b"w:p" if body_depth.is_some_and(|d| depth == d + 1) => {
                        current = Some(String::new())
                    }
                    b"w:t" => in_text_node = true,
                    other if nested == 0 => push_control(&mut current, other),
                    _ => {}
                }
            }
            Ok(Event::Empty(ref e)) => match e.name().as_ref() {
                b"w:p" => {
                    if current.is_none() && body_depth.is_some_and(|d| depth == d) {
                        paragraphs.push(String::new());
                    }
                }
                other if nested == 0 => push_control(&mut current, other),
                _ => {}
            },
            Ok(Event::Text(e)) if in_text_node && nested == 0 => {
                let value = e
                    .unescape()
                    .map_err(|err| ExtractionError::Docx(err.to_string()))?;
                if let Some(p) = current.as_mut() {
                    p.push_str(&value);
                }
            }
            Ok(Event::End(ref e)) => {
                match e.name().as_ref() {
                    b"w:t" => in_text_node = false,
                    b"w:p" if nested > 0 => nested -= 1,
                    b"w:p" => paragraphs.extend(current.take()),
                    b"w:body" => body_depth = None,
                    _ => {}
                }
                depth = depth.saturating_sub(1);
            }
            Ok(Event::Eof) => break,
            Err(err) => {
                return Err(ExtractionError::Docx(format!(
                    "failed to parse document XML at byte {}: {err}",
                    reader.error_position()
                )))
            }
            _ => {}
        }
    }

    Ok(paragraphs)
}

fn push_control(current: &mut Option<String>, name: &[u8]) {
    let Some(p) = current.as_mut() else {
        return;
    };
    match name {
        b"w:tab" => p.push('\t'),
        b"w:br" | b"w:cr" => p.push('\n'),
        _ => {}
    }
}
