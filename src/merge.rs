use tracing::debug;

use crate::align::{align_rows, label_row};
use crate::clean::clean_rows;
use crate::header::locate_header;
use crate::model::{OfferRecord, PageTables, TableBlock};
use crate::schema::{ItineraryLayout, canonical_label, itinerary_layout, normalize_row};
use crate::transform::transform_row;
use crate::warning::{ExtractWarning, WarningCode};

/// Records of one document in page, table and row order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DocumentResult {
    pub records: Vec<OfferRecord>,
    /// Blocks that yielded a header.
    pub table_count: usize,
    /// Blocks skipped for lack of a header.
    pub skipped_tables: usize,
    pub warnings: Vec<ExtractWarning>,
}

fn block_records(
    page: u32,
    table_id: usize,
    block: &TableBlock,
    warnings: &mut Vec<ExtractWarning>,
) -> Option<Vec<OfferRecord>> {
    let rows = clean_rows(block);
    let Some(header_index) = locate_header(&rows) else {
        warnings.push(
            ExtractWarning::new(WarningCode::NoHeaderFound, "no offer header row in table")
                .with_page(page)
                .with_table_id(table_id),
        );
        return None;
    };

    let labels = rows[header_index]
        .cells
        .iter()
        .map(|label| canonical_label(label))
        .collect::<Vec<_>>();
    let layout = itinerary_layout(&labels);
    if layout == ItineraryLayout::Ambiguous {
        warnings.push(
            ExtractWarning::new(
                WarningCode::AmbiguousItinerary,
                "table has both Itinerary and Nights/Destination columns; using the separate columns",
            )
            .with_page(page)
            .with_table_id(table_id),
        );
    }

    let aligned = align_rows(labels.len(), &rows[header_index + 1..]);
    if let Some(mismatch) = aligned.mismatch {
        warnings.push(
            ExtractWarning::new(
                WarningCode::ColumnCountMismatch,
                format!(
                    "data row {} has {} cells but the header has {}; dropping the rest of the table",
                    mismatch.row_index + 1,
                    mismatch.found,
                    mismatch.expected
                ),
            )
            .with_page(page)
            .with_table_id(table_id),
        );
    }

    Some(
        aligned
            .rows
            .iter()
            .map(|row| transform_row(normalize_row(&label_row(&labels, row), layout)))
            .collect(),
    )
}

/// Runs every table block through the pipeline and concatenates the results.
#[must_use]
pub fn process_pages(pages: &[PageTables]) -> DocumentResult {
    let mut result = DocumentResult::default();

    for page in pages {
        for (index, block) in page.tables.iter().enumerate() {
            let table_id = index + 1;
            match block_records(page.page, table_id, block, &mut result.warnings) {
                Some(records) => {
                    debug!(page = page.page, table_id, rows = records.len(), "table accepted");
                    result.table_count += 1;
                    result.records.extend(records);
                }
                None => {
                    debug!(page = page.page, table_id, "table skipped");
                    result.skipped_tables += 1;
                }
            }
        }
    }

    if result.records.is_empty() {
        result.warnings.push(ExtractWarning::new(
            WarningCode::EmptyDocumentResult,
            "no offer table data found in document",
        ));
    }

    result
}

#[cfg(test)]
mod tests {
    use super::process_pages;
    use crate::model::PageTables;
    use crate::warning::WarningCode;

    fn grid(rows: &[&[&str]]) -> Vec<Vec<Option<String>>> {
        rows.iter()
            .map(|row| {
                row.iter()
                    .map(|cell| (!cell.is_empty()).then(|| (*cell).to_string()))
                    .collect()
            })
            .collect()
    }

    #[test]
    fn skips_block_without_header_and_keeps_others() {
        let pages = vec![PageTables {
            page: 1,
            tables: vec![
                grid(&[&["Terms", "and", "conditions"]]),
                grid(&[
                    &["Offer Code", "Ship", "Departure Port", "Itinerary"],
                    &["25A01", "Oasis of the Seas®", "Miami", "7 Night Caribbean"],
                ]),
            ],
        }];

        let result = process_pages(&pages);
        assert_eq!(result.records.len(), 1);
        assert_eq!(result.table_count, 1);
        assert_eq!(result.skipped_tables, 1);
        assert_eq!(result.records[0].ship, "Oasis of the Seas");
        assert_eq!(result.records[0].nights, "7");
        assert_eq!(result.warnings[0].code, WarningCode::NoHeaderFound);
        assert_eq!(result.warnings[0].table_id, Some(1));
    }

    #[test]
    fn reports_empty_document() {
        let result = process_pages(&[PageTables {
            page: 1,
            tables: vec![grid(&[&["nothing", "to", "see"]])],
        }]);
        assert!(result.records.is_empty());
        assert_eq!(
            result.warnings.last().map(|warning| warning.code),
            Some(WarningCode::EmptyDocumentResult)
        );
    }

    #[test]
    fn warns_once_for_ambiguous_itinerary_block() {
        let pages = vec![PageTables {
            page: 2,
            tables: vec![grid(&[
                &["Offer Code", "Ship", "Departure Port", "Itinerary", "Nights"],
                &["25C01", "Allure", "Galveston", "5 Night Mexico", "5"],
                &["25C02", "Allure", "Galveston", "4 Night Mexico", "4"],
            ])],
        }];

        let result = process_pages(&pages);
        assert_eq!(result.records.len(), 2);
        assert_eq!(result.records[0].nights, "5");
        assert_eq!(result.records[0].destination, "");
        let ambiguous = result
            .warnings
            .iter()
            .filter(|warning| warning.code == WarningCode::AmbiguousItinerary)
            .count();
        assert_eq!(ambiguous, 1);
    }
}
