use std::collections::BTreeSet;
use std::str::FromStr;

use crate::error::ExtractError;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageSelection {
    pages: BTreeSet<u32>,
}

impl PageSelection {
    #[must_use]
    pub fn contains(&self, page: u32) -> bool {
        self.pages.contains(&page)
    }
}

fn parse_page(token: &str, what: &str) -> Result<u32, ExtractError> {
    let page = token
        .trim()
        .parse::<u32>()
        .map_err(|_| ExtractError::InvalidPageSelection(format!("invalid {what}: '{token}'")))?;
    if page == 0 {
        return Err(ExtractError::InvalidPageSelection(
            "pages are 1-based".to_string(),
        ));
    }
    Ok(page)
}

impl FromStr for PageSelection {
    type Err = ExtractError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let mut pages = BTreeSet::new();
        for token in value.split(',').map(str::trim).filter(|s| !s.is_empty()) {
            match token.split_once('-') {
                Some((start, end)) => {
                    let start = parse_page(start, "page range start")?;
                    let end = parse_page(end, "page range end")?;
                    if end < start {
                        return Err(ExtractError::InvalidPageSelection(format!(
                            "invalid range '{token}': end is before start"
                        )));
                    }
                    pages.extend(start..=end);
                }
                None => {
                    pages.insert(parse_page(token, "page number")?);
                }
            }
        }

        if pages.is_empty() {
            return Err(ExtractError::InvalidPageSelection(
                "page selection cannot be empty".to_string(),
            ));
        }

        Ok(Self { pages })
    }
}

/// Minimum cells a text line needs to count as a table row.
pub const DEFAULT_MIN_COLS: usize = 3;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractOptions {
    pub pages: Option<PageSelection>,
    pub min_cols: usize,
}

impl Default for ExtractOptions {
    fn default() -> Self {
        Self {
            pages: None,
            min_cols: DEFAULT_MIN_COLS,
        }
    }
}
