use crate::model::{Cell, RawRow};

/// A trimmed row. `width` is the cell count before trailing blanks were dropped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct CleanRow {
    pub cells: Vec<String>,
    pub width: usize,
}

fn cell_text(cell: &Cell) -> &str {
    cell.as_deref().map_or("", str::trim)
}

/// Trims every cell, drops trailing blanks, and returns `None` when nothing is left.
pub(crate) fn clean_row(row: &[Cell]) -> Option<CleanRow> {
    let filled = row
        .iter()
        .rposition(|cell| !cell_text(cell).is_empty())?
        + 1;

    Some(CleanRow {
        cells: row[..filled]
            .iter()
            .map(|cell| cell_text(cell).to_string())
            .collect(),
        width: row.len(),
    })
}

pub(crate) fn clean_rows(rows: &[RawRow]) -> Vec<CleanRow> {
    rows.iter().filter_map(|row| clean_row(row)).collect()
}
