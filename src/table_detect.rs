use std::sync::LazyLock;

use regex::Regex;

use crate::model::{PageTables, PageText, RawRow, TableBlock};

static CELL_GAP: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\t|\s{2,}").expect("hardcoded cell gap regex is valid"));

/// Splits a text line on tabs and runs of two or more spaces.
pub(crate) fn split_line_into_cells(line: &str) -> Vec<String> {
    CELL_GAP
        .split(line.trim())
        .map(str::trim)
        .filter(|cell| !cell.is_empty())
        .map(str::to_string)
        .collect()
}

fn flush_block(rows: &mut Vec<RawRow>, tables: &mut Vec<TableBlock>) {
    if rows.len() >= 2 {
        tables.push(std::mem::take(rows));
    } else {
        rows.clear();
    }
}

fn detect_tables_in_page(page: &PageText, min_cols: usize) -> Vec<TableBlock> {
    let mut tables = Vec::new();
    let mut current_rows = Vec::new();

    for line in page.text.lines() {
        let cells = split_line_into_cells(line);
        if cells.len() >= min_cols {
            current_rows.push(cells.into_iter().map(Some).collect());
        } else {
            flush_block(&mut current_rows, &mut tables);
        }
    }

    flush_block(&mut current_rows, &mut tables);
    tables
}

/// Groups consecutive multi-cell lines of every page into table blocks.
pub(crate) fn detect_tables(pages: &[PageText], min_cols: usize) -> Vec<PageTables> {
    pages
        .iter()
        .map(|page| PageTables {
            page: page.page_number,
            tables: detect_tables_in_page(page, min_cols),
        })
        .collect()
}
