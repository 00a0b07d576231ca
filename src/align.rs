use std::collections::HashMap;

use crate::clean::CleanRow;

/// A data row narrower than the header it sits under.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct ColumnMismatch {
    pub row_index: usize,
    pub found: usize,
    pub expected: usize,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct AlignedRows {
    pub rows: Vec<Vec<String>>,
    pub mismatch: Option<ColumnMismatch>,
}

/// Fits every row to the header width and stops at the first narrow row.
///
/// Wide rows are cut down. Rows whose only missing cells are trailing blanks are
/// padded back with empty strings. A row that had fewer cells than the header
/// before cleaning is narrow.
pub(crate) fn align_rows(header_width: usize, data_rows: &[CleanRow]) -> AlignedRows {
    let mut rows = Vec::with_capacity(data_rows.len());

    for (row_index, row) in data_rows.iter().enumerate() {
        if row.width < header_width {
            return AlignedRows {
                rows,
                mismatch: Some(ColumnMismatch {
                    row_index,
                    found: row.width,
                    expected: header_width,
                }),
            };
        }
        let mut cells = row.cells.clone();
        cells.resize(header_width, String::new());
        rows.push(cells);
    }

    AlignedRows {
        rows,
        mismatch: None,
    }
}

/// Pairs header labels with the cells of one aligned row. The first duplicate label wins.
pub(crate) fn label_row<'a>(labels: &'a [String], row: &'a [String]) -> HashMap<&'a str, &'a str> {
    let mut mapping = HashMap::with_capacity(labels.len());
    for (label, value) in labels.iter().zip(row) {
        mapping.entry(label.as_str()).or_insert(value.as_str());
    }
    mapping
}

#[cfg(test)]
mod tests {
    use super::{ColumnMismatch, align_rows, label_row};
    use crate::clean::CleanRow;

    fn strings(values: &[&str]) -> Vec<String> {
        values.iter().map(|value| (*value).to_string()).collect()
    }

    fn row(values: &[&str]) -> CleanRow {
        CleanRow {
            cells: strings(values),
            width: values.len(),
        }
    }

    #[test]
    fn truncates_wide_rows() {
        let aligned = align_rows(2, &[row(&["a", "b", "c"]), row(&["d", "e"])]);
        assert_eq!(aligned.rows, vec![strings(&["a", "b"]), strings(&["d", "e"])]);
        assert_eq!(aligned.mismatch, None);
    }

    #[test]
    fn pads_rows_that_lost_only_trailing_blanks() {
        let trimmed = CleanRow {
            cells: strings(&["d"]),
            width: 3,
        };
        let aligned = align_rows(3, &[row(&["a", "b", "c"]), trimmed, row(&["f", "g", "h"])]);
        assert_eq!(
            aligned.rows,
            vec![
                strings(&["a", "b", "c"]),
                strings(&["d", "", ""]),
                strings(&["f", "g", "h"]),
            ]
        );
        assert_eq!(aligned.mismatch, None);
    }

    #[test]
    fn narrow_row_discards_the_rest_of_the_block() {
        let aligned = align_rows(
            3,
            &[row(&["a", "b", "c"]), row(&["d", "e"]), row(&["f", "g", "h"])],
        );
        assert_eq!(aligned.rows, vec![strings(&["a", "b", "c"])]);
        assert_eq!(
            aligned.mismatch,
            Some(ColumnMismatch {
                row_index: 1,
                found: 2,
                expected: 3,
            })
        );
    }

    #[test]
    fn keeps_first_of_duplicate_labels() {
        let labels = strings(&["Ship", "Ship"]);
        let values = strings(&["Oasis", "Allure"]);
        let mapping = label_row(&labels, &values);
        assert_eq!(mapping.get("Ship"), Some(&"Oasis"));
    }
}
