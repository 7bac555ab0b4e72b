//! Table extraction.
//!
//! [`TableExtractor`] is the seam between the pipeline and whatever finds
//! tables in a PDF. [`PdfplumberExtractor`] is the production
//! implementation backed by `pdfplumber`.

use std::ops::RangeInclusive;
use std::path::Path;

use pdf2xlsx_core::{CellValue, RawTable};
use pdfplumber::{Pdf, TableSettings};
use tracing::debug;

use crate::error::{ConvertError, Result};

/// Tables found on one page.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ExtractedPage {
    /// 1-indexed page number.
    pub page_number: usize,
    /// Tables in detection order.
    pub tables: Vec<RawTable>,
}

/// Source of raw tables.
pub trait TableExtractor {
    /// Extract tables from the PDF at `path`.
    ///
    /// `pages` holds inclusive 0-indexed page spans; `None` means every
    /// page. Pages are returned in ascending order, each at most once.
    fn extract(
        &self,
        path: &Path,
        pages: Option<&[RangeInclusive<usize>]>,
    ) -> Result<Vec<ExtractedPage>>;
}

/// Extracts tables with `pdfplumber`'s table finder.
#[derive(Debug, Clone, Default)]
pub struct PdfplumberExtractor {
    settings: TableSettings,
}

impl PdfplumberExtractor {
    /// Create an extractor with the given detection settings.
    pub fn new(settings: TableSettings) -> Self {
        Self { settings }
    }

    /// The detection settings in use.
    pub fn settings(&self) -> &TableSettings {
        &self.settings
    }
}

impl TableExtractor for PdfplumberExtractor {
    fn extract(
        &self,
        path: &Path,
        pages: Option<&[RangeInclusive<usize>]>,
    ) -> Result<Vec<ExtractedPage>> {
        let pdf = Pdf::open_file(path, None)?;
        let indices = select_pages(pages, pdf.page_count())?;

        let mut extracted = Vec::with_capacity(indices.len());
        for index in indices {
            let page = pdf.page(index)?;
            let tables: Vec<RawTable> = page
                .find_tables(&self.settings)
                .into_iter()
                .map(|table| {
                    table
                        .rows
                        .into_iter()
                        .map(|row| row.into_iter().map(|cell| CellValue::from(cell.text)).collect())
                        .collect()
                })
                .collect();

            debug!(page = index + 1, tables = tables.len(), "extracted tables");
            extracted.push(ExtractedPage {
                page_number: index + 1,
                tables,
            });
        }

        Ok(extracted)
    }
}

/// Resolve optional page spans against the document's page count.
///
/// Spans are checked against the page count before they are expanded, so no
/// span expands past the end of the document. The result is sorted and free
/// of duplicates.
pub fn select_pages(
    pages: Option<&[RangeInclusive<usize>]>,
    page_count: usize,
) -> Result<Vec<usize>> {
    let Some(spans) = pages else {
        return Ok((0..page_count).collect());
    };

    for span in spans {
        if span.start() > span.end() {
            return Err(ConvertError::InvalidPageRange(format!(
                "page {} comes after page {}",
                span.start() + 1,
                span.end() + 1
            )));
        }
        if *span.end() >= page_count {
            return Err(ConvertError::InvalidPageRange(format!(
                "page {} exceeds document page count ({page_count})",
                span.end() + 1
            )));
        }
    }

    let mut selected: Vec<usize> = spans.iter().flat_map(|span| span.clone()).collect();
    selected.sort_unstable();
    selected.dedup();
    Ok(selected)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn select_all_pages() {
        assert_eq!(select_pages(None, 3).unwrap(), vec![0, 1, 2]);
    }

    #[test]
    fn select_no_pages_from_empty_document() {
        assert!(select_pages(None, 0).unwrap().is_empty());
    }

    #[test]
    fn select_spans_sorted_and_deduped() {
        assert_eq!(
            select_pages(Some(&[2..=2, 0..=1, 1..=2]), 3).unwrap(),
            vec![0, 1, 2]
        );
    }

    #[test]
    fn select_beyond_end_is_error() {
        let err = select_pages(Some(&[0..=0, 5..=5]), 3).unwrap_err();
        assert!(matches!(err, ConvertError::InvalidPageRange(_)));
        assert!(err.to_string().contains("page 6 exceeds"));
    }

    #[test]
    fn huge_span_rejected_without_expanding() {
        let err = select_pages(Some(&[0..=99_999_999_999]), 3).unwrap_err();
        assert!(err.to_string().contains("page 100000000000 exceeds"));
    }

    #[test]
    fn reversed_span_is_error() {
        let err = select_pages(Some(&[2..=1]), 3).unwrap_err();
        assert!(matches!(err, ConvertError::InvalidPageRange(_)));
    }

    #[test]
    fn missing_file_is_pdf_error() {
        let extractor = PdfplumberExtractor::default();
        let err = extractor
            .extract(Path::new("/nonexistent/file.pdf"), None)
            .unwrap_err();
        assert!(matches!(err, ConvertError::Pdf(_)));
    }
}
