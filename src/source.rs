use std::path::{Path, PathBuf};

use crate::error::ExtractError;
use crate::model::PageTables;
use crate::options::ExtractOptions;
use crate::pdf_reader::{PdfInput, read_pdf_pages};
use crate::table_detect::detect_tables;

/// Anything that can hand over the raw table grids of one document, page by page.
pub trait TableSource {
    /// Pages in document order, each with its tables in reading order.
    ///
    /// # Errors
    ///
    /// Returns an error when the underlying document cannot be read.
    fn extract_tables(&self) -> Result<Vec<PageTables>, ExtractError>;
}

/// Grids that are already in memory.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GridSource {
    pages: Vec<PageTables>,
}

impl GridSource {
    #[must_use]
    pub fn new(pages: Vec<PageTables>) -> Self {
        Self { pages }
    }
}

impl TableSource for GridSource {
    fn extract_tables(&self) -> Result<Vec<PageTables>, ExtractError> {
        Ok(self.pages.clone())
    }
}

#[derive(Debug, Clone)]
enum PdfData {
    File(PathBuf),
    Memory(Vec<u8>),
}

/// Text-layout table detection over a PDF file or buffer.
#[derive(Debug, Clone)]
pub struct PdfTableSource {
    data: PdfData,
    options: ExtractOptions,
}

impl PdfTableSource {
    #[must_use]
    pub fn from_path(path: impl AsRef<Path>, options: ExtractOptions) -> Self {
        Self {
            data: PdfData::File(path.as_ref().to_path_buf()),
            options,
        }
    }

    #[must_use]
    pub fn from_bytes(bytes: impl Into<Vec<u8>>, options: ExtractOptions) -> Self {
        Self {
            data: PdfData::Memory(bytes.into()),
            options,
        }
    }
}

impl TableSource for PdfTableSource {
    fn extract_tables(&self) -> Result<Vec<PageTables>, ExtractError> {
        if self.options.min_cols < 3 {
            return Err(ExtractError::InvalidOption(
                "min_cols must be at least 3".to_string(),
            ));
        }

        let input = match &self.data {
            PdfData::File(path) => PdfInput::Path(path),
            PdfData::Memory(bytes) => PdfInput::Bytes(bytes),
        };
        let pages = read_pdf_pages(input, self.options.pages.as_ref())?;
        Ok(detect_tables(&pages, self.options.min_cols))
    }
}
