#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WarningCode {
    NoHeaderFound,
    ColumnCountMismatch,
    AmbiguousItinerary,
    EmptyDocumentResult,
}

/// A non-fatal diagnostic raised while turning table blocks into records.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractWarning {
    pub code: WarningCode,
    pub message: String,
    pub page: Option<u32>,
    pub table_id: Option<usize>,
}

impl ExtractWarning {
    #[must_use]
    pub fn new(code: WarningCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            page: None,
            table_id: None,
        }
    }

    #[must_use]
    pub fn with_page(mut self, page: u32) -> Self {
        self.page = Some(page);
        self
    }

    #[must_use]
    pub fn with_table_id(mut self, table_id: usize) -> Self {
        self.table_id = Some(table_id);
        self
    }
}
