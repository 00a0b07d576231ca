mod align;
pub mod catalog;
mod clean;
pub mod download;
mod error;
mod header;
mod json_out;
mod merge;
mod model;
mod options;
mod pdf_reader;
mod schema;
mod source;
mod table_detect;
mod transform;
mod warning;

use std::path::Path;

use crate::json_out::{write_json, write_json_to_string};

pub use error::ExtractError;
pub use merge::{DocumentResult, process_pages};
pub use model::{Cell, Column, NORMALIZED_COLUMNS, OfferRecord, PageTables, RawRow, TableBlock};
pub use options::{DEFAULT_MIN_COLS, ExtractOptions, PageSelection};
pub use source::{GridSource, PdfTableSource, TableSource};
pub use warning::{ExtractWarning, WarningCode as ExtractWarningCode};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractionReport {
    pub row_count: usize,
    pub table_count: usize,
    pub skipped_tables: usize,
    pub warnings: Vec<ExtractWarning>,
}

impl ExtractionReport {
    fn from_result(result: &DocumentResult) -> Self {
        Self {
            row_count: result.records.len(),
            table_count: result.table_count,
            skipped_tables: result.skipped_tables,
            warnings: result.warnings.clone(),
        }
    }
}

/// Pulls every table out of `source` and reconciles it into offer records.
///
/// # Errors
///
/// Only fails when the source itself cannot produce its grids; table-level
/// problems are reported as warnings.
pub fn process_source(
    source: &impl TableSource,
) -> Result<(Vec<OfferRecord>, ExtractionReport), ExtractError> {
    let pages = source.extract_tables()?;
    let result = process_pages(&pages);
    let report = ExtractionReport::from_result(&result);
    Ok((result.records, report))
}

/// Serializes records as a pretty-printed JSON array.
///
/// # Errors
///
/// Returns an error when serialization fails.
pub fn records_to_json_string(records: &[OfferRecord]) -> Result<String, ExtractError> {
    write_json_to_string(records)
}

/// Extracts offers from a PDF and writes them to `output_json`.
///
/// Nothing is written when the document yields no records; the report then
/// has `row_count == 0` and an `EmptyDocumentResult` warning.
///
/// # Errors
///
/// Returns an error when the PDF cannot be read or the output cannot be written.
pub fn extract_pdf_to_json(
    input_pdf: &Path,
    output_json: &Path,
    options: &ExtractOptions,
) -> Result<ExtractionReport, ExtractError> {
    let source = PdfTableSource::from_path(input_pdf, options.clone());
    let (records, report) = process_source(&source)?;
    if !records.is_empty() {
        write_json(output_json, &records)?;
    }
    Ok(report)
}

/// # Errors
///
/// Returns an error when the PDF bytes cannot be parsed.
pub fn extract_pdf_bytes_to_json_string(
    input_pdf: &[u8],
    options: &ExtractOptions,
) -> Result<(Option<String>, ExtractionReport), ExtractError> {
    let source = PdfTableSource::from_bytes(input_pdf, options.clone());
    let (records, report) = process_source(&source)?;
    let json = if records.is_empty() {
        None
    } else {
        Some(write_json_to_string(&records)?)
    };
    Ok((json, report))
}
