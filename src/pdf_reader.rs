use std::collections::BTreeMap;
use std::path::Path;

use encoding_rs::UTF_16BE;
use lopdf::content::Content;
use lopdf::{Document, Object, ObjectId};

use crate::error::ExtractError;
use crate::model::PageText;
use crate::options::PageSelection;
use crate::table_detect::split_line_into_cells;

#[derive(Debug, Clone, Copy)]
pub(crate) enum PdfInput<'a> {
    Path(&'a Path),
    Bytes(&'a [u8]),
}

impl PdfInput<'_> {
    fn load(self) -> Result<Document, ExtractError> {
        Ok(match self {
            Self::Path(path) => Document::load(path)?,
            Self::Bytes(bytes) => Document::load_mem(bytes)?,
        })
    }

    fn whole_text(self) -> Option<String> {
        match self {
            Self::Path(path) => pdf_extract::extract_text(path).ok(),
            Self::Bytes(bytes) => pdf_extract::extract_text_from_mem(bytes).ok(),
        }
    }
}

fn split_text_into_pages(raw_text: &str) -> Vec<String> {
    let mut pages = raw_text
        .split('\u{000C}')
        .map(str::to_string)
        .collect::<Vec<_>>();
    if pages.last().is_some_and(String::is_empty) {
        pages.pop();
    }
    pages
}

fn looks_decoding_broken(text: &str) -> bool {
    let total = text.chars().count();
    if total == 0 {
        return false;
    }

    let replacement = text.matches('\u{FFFD}').count();
    let control = text
        .chars()
        .filter(|ch| ch.is_control() && !matches!(ch, '\n' | '\r' | '\t'))
        .count();

    text.contains("?Identity-H Unimplemented?") || replacement * 8 > total || control * 5 > total
}

fn decode_pdf_bytes(encoding: Option<&str>, bytes: &[u8]) -> String {
    let decoded = Document::decode_text(encoding, bytes);
    if !looks_decoding_broken(&decoded) {
        return decoded;
    }

    let utf16_hint = encoding.is_some_and(|name| {
        let lower = name.to_ascii_lowercase();
        ["utf16", "ucs2", "identity-h", "unicode"]
            .iter()
            .any(|marker| lower.contains(marker))
    });
    let has_bom = bytes.starts_with(&[0xFE, 0xFF]);
    if has_bom || utf16_hint {
        let body = if has_bom { &bytes[2..] } else { bytes };
        let (utf16, had_errors) = UTF_16BE.decode_without_bom_handling(body);
        if !had_errors && !utf16.is_empty() {
            return utf16.into_owned();
        }
    }

    String::from_utf8_lossy(bytes).into_owned()
}

// Offer tables are multi-column text, so favour candidates with many splittable lines.
fn extraction_quality_score(text: &str) -> i64 {
    if text.trim().is_empty() {
        return i64::MIN / 4;
    }

    let mut non_empty_lines = 0_i64;
    let mut multi_cell_lines = 0_i64;
    for line in text.lines().filter(|line| !line.trim().is_empty()) {
        non_empty_lines += 1;
        if split_line_into_cells(line).len() >= 3 {
            multi_cell_lines += 1;
        }
    }

    let broken_penalty = if looks_decoding_broken(text) { 800 } else { 0 };
    multi_cell_lines * 50 + non_empty_lines - broken_penalty
}

fn extract_text_from_page_content(document: &Document, page_id: ObjectId) -> Option<String> {
    fn collect_text(text: &mut String, encoding: Option<&str>, operands: &[Object]) {
        for operand in operands {
            match operand {
                Object::String(bytes, _) => text.push_str(&decode_pdf_bytes(encoding, bytes)),
                Object::Array(items) => collect_text(text, encoding, items),
                // Large negative kerning in TJ arrays marks a visual gap between cells.
                Object::Integer(value) if *value < -100 => text.push_str("  "),
                _ => {}
            }
        }
    }

    let raw_content = document.get_page_content(page_id).ok()?;
    let content = Content::decode(&raw_content).ok()?;
    let encodings = document
        .get_page_fonts(page_id)
        .into_iter()
        .map(|(name, font)| (name, font.get_font_encoding()))
        .collect::<BTreeMap<Vec<u8>, &str>>();

    let mut lines = Vec::new();
    let mut current = String::new();
    let mut current_encoding = None;
    for operation in content.operations {
        match operation.operator.as_str() {
            "Tf" => {
                current_encoding = operation
                    .operands
                    .first()
                    .and_then(|operand| operand.as_name().ok())
                    .and_then(|font_name| encodings.get(font_name).copied());
            }
            "Tj" | "TJ" | "'" | "\"" => {
                collect_text(&mut current, current_encoding, &operation.operands);
            }
            "T*" | "Td" | "TD" | "ET" => {
                if !current.trim().is_empty() {
                    lines.push(std::mem::take(&mut current));
                }
            }
            _ => {}
        }
    }

    if !current.trim().is_empty() {
        lines.push(current);
    }

    (!lines.is_empty()).then(|| lines.join("\n"))
}

pub(crate) fn read_pdf_pages(
    input: PdfInput<'_>,
    page_selection: Option<&PageSelection>,
) -> Result<Vec<PageText>, ExtractError> {
    let document = input.load()?;
    let pages_map = document.get_pages();

    let extracted_pages = input
        .whole_text()
        .map(|text| split_text_into_pages(&text))
        .filter(|pages| pages.len() == pages_map.len());

    let mut pages = Vec::new();
    for (index, (page_no, page_id)) in pages_map.iter().enumerate() {
        if page_selection.is_some_and(|selection| !selection.contains(*page_no)) {
            continue;
        }

        let mut candidates = Vec::new();
        if let Some(text) = extracted_pages
            .as_ref()
            .and_then(|all| all.get(index).cloned())
            .filter(|text| !text.trim().is_empty())
        {
            candidates.push(text);
        }
        if let Some(text) = extract_text_from_page_content(&document, *page_id) {
            candidates.push(text);
        }
        if let Some(text) = document
            .extract_text(&[*page_no])
            .ok()
            .filter(|text| !text.trim().is_empty())
        {
            candidates.push(text);
        }

        let text = candidates
            .into_iter()
            .max_by_key(|text| extraction_quality_score(text))
            .unwrap_or_default();

        pages.push(PageText {
            page_number: *page_no,
            text,
        });
    }

    if pages.is_empty() {
        return Err(ExtractError::NoPagesSelected);
    }

    Ok(pages)
}

#[cfg(test)]
mod tests {
    use super::{extraction_quality_score, looks_decoding_broken, split_text_into_pages};

    #[test]
    fn splits_form_feed_delimited_pages() {
        let pages = split_text_into_pages("p1\u{000C}p2\u{000C}");
        assert_eq!(pages, vec!["p1", "p2"]);
    }

    #[test]
    fn flags_replacement_heavy_text_as_broken() {
        assert!(looks_decoding_broken("\u{FFFD}\u{FFFD}ab"));
        assert!(!looks_decoding_broken("Oasis of the Seas\tMiami\n"));
        assert!(!looks_decoding_broken(""));
    }

    #[test]
    fn prefers_text_with_table_lines() {
        let tabular = "Offer Code  Ship  Departure Port\n25A01  Oasis  Miami";
        let flat = "Offer Code Ship Departure Port 25A01 Oasis Miami";
        assert!(extraction_quality_score(tabular) > extraction_quality_score(flat));
    }
}
