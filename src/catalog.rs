//! Offer document codes published for a month, and where to fetch them.

use std::fmt::{Display, Formatter};
use std::str::FromStr;

use chrono::{Datelike, Local, NaiveDate};
use url::Url;

use crate::error::ExtractError;

pub const DEFAULT_BASE_URL: &str =
    "https://www.royalcaribbean.com/content/dam/royal/resources/pdf/casino/offers/";

/// The `YYMM` prefix shared by every document of one offer month.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct OfferMonth {
    year: i32,
    month: u32,
}

impl OfferMonth {
    #[must_use]
    pub fn following(date: NaiveDate) -> Self {
        if date.month() == 12 {
            Self {
                year: date.year() + 1,
                month: 1,
            }
        } else {
            Self {
                year: date.year(),
                month: date.month() + 1,
            }
        }
    }

    /// The month after today, which is when new offer sheets are published for.
    #[must_use]
    pub fn next() -> Self {
        Self::following(Local::now().date_naive())
    }
}

impl Display for OfferMonth {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:02}{:02}", self.year.rem_euclid(100), self.month)
    }
}

impl FromStr for OfferMonth {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let value = value.trim();
        if value.len() != 4 || !value.bytes().all(|byte| byte.is_ascii_digit()) {
            return Err(format!("invalid offer month '{value}', expected YYMM"));
        }

        let year: i32 = value[..2]
            .parse()
            .map_err(|_| format!("invalid year in '{value}'"))?;
        let month: u32 = value[2..]
            .parse()
            .map_err(|_| format!("invalid month in '{value}'"))?;
        if !(1..=12).contains(&month) {
            return Err(format!("month out of range in '{value}'"));
        }

        Ok(Self {
            year: 2000 + year,
            month,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogEntry {
    pub code: String,
    pub url: Url,
}

impl CatalogEntry {
    #[must_use]
    pub fn file_name(&self, extension: &str) -> String {
        format!("{}.{extension}", self.code)
    }
}

/// `A01..A12`, `A02A`, `A03A`, then `C01..C09`, `C02A`, `C03A`, each prefixed with the month.
#[must_use]
pub fn document_codes(month: OfferMonth) -> Vec<String> {
    let series = [("A", 12_u32), ("C", 9_u32)];
    let mut codes = Vec::new();

    for (letter, count) in series {
        codes.extend((1..=count).map(|number| format!("{month}{letter}{number:02}")));
        codes.push(format!("{month}{letter}02A"));
        codes.push(format!("{month}{letter}03A"));
    }

    codes
}

/// # Errors
///
/// Returns an error when `base_url` is not a valid absolute URL.
pub fn catalog(base_url: &str, month: OfferMonth) -> Result<Vec<CatalogEntry>, ExtractError> {
    let mut base = Url::parse(base_url)?;
    if !base.path().ends_with('/') {
        let path = format!("{}/", base.path());
        base.set_path(&path);
    }

    document_codes(month)
        .into_iter()
        .map(|code| {
            let url = base.join(&format!("{code}.pdf"))?;
            Ok(CatalogEntry { code, url })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::{DEFAULT_BASE_URL, OfferMonth, catalog, document_codes};

    fn date(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).expect("valid date")
    }

    #[test]
    fn following_month_rolls_over_year() {
        assert_eq!(OfferMonth::following(date(2025, 12, 31)).to_string(), "2601");
        assert_eq!(OfferMonth::following(date(2026, 1, 31)).to_string(), "2602");
    }

    #[test]
    fn parses_yymm() {
        let month: OfferMonth = "2611".parse().expect("month should parse");
        assert_eq!(month, OfferMonth::following(date(2026, 10, 16)));
        assert!("2613".parse::<OfferMonth>().is_err());
        assert!("26-1".parse::<OfferMonth>().is_err());
    }

    #[test]
    fn generates_series_in_publication_order() {
        let codes = document_codes("2611".parse().expect("month should parse"));
        assert_eq!(codes.len(), 25);
        assert_eq!(codes[0], "2611A01");
        assert_eq!(codes[11], "2611A12");
        assert_eq!(codes[12], "2611A02A");
        assert_eq!(codes[13], "2611A03A");
        assert_eq!(codes[14], "2611C01");
        assert_eq!(codes[24], "2611C03A");
    }

    #[test]
    fn joins_codes_onto_base_url() {
        let month = "2611".parse().expect("month should parse");
        let entries = catalog(DEFAULT_BASE_URL, month).expect("catalog should build");
        assert_eq!(
            entries[0].url.as_str(),
            "https://www.royalcaribbean.com/content/dam/royal/resources/pdf/casino/offers/2611A01.pdf"
        );

        let entries = catalog("https://example.com/offers", month).expect("catalog should build");
        assert_eq!(entries[0].url.as_str(), "https://example.com/offers/2611A01.pdf");
        assert_eq!(entries[0].file_name("json"), "2611A01.json");
    }
}
