//! The conversion pipeline: extract → assemble → expand → coerce → write.

use std::path::PathBuf;

use pdf2xlsx_core::transform;
use tracing::{debug, info};

use crate::config::ConvertConfig;
use crate::error::{ConvertError, Result};
use crate::extract::{PdfplumberExtractor, TableExtractor};
use crate::xlsx::{SpreadsheetWriter, XlsxWriter};

/// What a successful run produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConversionSummary {
    /// Pages read.
    pub pages: usize,
    /// Tables found across all pages.
    pub tables: usize,
    /// Rows before expansion.
    pub source_rows: usize,
    /// Rows written.
    pub output_rows: usize,
    /// Columns written.
    pub columns: usize,
    /// Columns that were coerced to numbers (0-indexed).
    pub numeric_columns: Vec<usize>,
    /// The workbook that was written.
    pub output: PathBuf,
}

/// Run one conversion with explicit collaborators.
///
/// The input must exist. All extraction and transformation happens before
/// the output directory or file is touched, so a failing run leaves no
/// workbook behind.
pub fn convert_with<E, W>(extractor: &E, writer: &W, config: &ConvertConfig) -> Result<ConversionSummary>
where
    E: TableExtractor + ?Sized,
    W: SpreadsheetWriter + ?Sized,
{
    if !config.input.is_file() {
        return Err(ConvertError::InputNotFound(config.input.clone()));
    }

    let pages = extractor.extract(&config.input, config.pages.as_deref())?;
    let page_count = pages.len();
    let tables: Vec<_> = pages.into_iter().flat_map(|page| page.tables).collect();
    let table_count = tables.len();
    let source_rows: usize = tables.iter().map(Vec::len).sum();
    debug!(pages = page_count, tables = table_count, rows = source_rows, "extraction finished");

    let coerced = transform(tables);
    let grid = coerced.grid;
    for col in &coerced.numeric_columns {
        debug!(column = col, "coerced column to numbers");
    }
    info!(rows = grid.height(), columns = grid.width(), "assembled output grid");

    if let Some(parent) = config.output.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }
    writer.write(&grid, &config.output)?;
    info!(path = %config.output.display(), "saved workbook");

    Ok(ConversionSummary {
        pages: page_count,
        tables: table_count,
        source_rows,
        output_rows: grid.height(),
        columns: grid.width(),
        numeric_columns: coerced.numeric_columns,
        output: config.output.clone(),
    })
}

/// Run one conversion with the `pdfplumber` extractor and the xlsx writer.
pub fn convert(config: &ConvertConfig) -> Result<ConversionSummary> {
    let extractor = PdfplumberExtractor::new(config.table_settings.clone());
    convert_with(&extractor, &XlsxWriter::default(), config)
}
