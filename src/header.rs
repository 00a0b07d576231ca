use crate::clean::CleanRow;

pub(crate) const HEADER_PREFIX: [&str; 3] = ["Offer Code", "Ship", "Departure Port"];

/// Index of the first row whose leading cells match [`HEADER_PREFIX`], ignoring case.
pub(crate) fn locate_header(rows: &[CleanRow]) -> Option<usize> {
    rows.iter().position(|row| {
        row.cells.len() >= HEADER_PREFIX.len()
            && row
                .cells
                .iter()
                .zip(HEADER_PREFIX)
                .all(|(cell, expected)| cell.to_lowercase() == expected.to_lowercase())
    })
}
