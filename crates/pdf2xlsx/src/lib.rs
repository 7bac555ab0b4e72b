//! pdf2xlsx: Convert tables found in PDF documents into an xlsx workbook.
//!
//! This is the public API facade crate. It re-exports the algorithms from
//! pdf2xlsx-core and wires them between a table extractor and a spreadsheet
//! writer.
//!
//! # Architecture
//!
//! - **pdf2xlsx-core**: normalization, grid assembly, row expansion, coercion
//! - **pdf2xlsx** (this crate): extractor seam over `pdfplumber`, xlsx
//!   writer, run configuration and the pipeline
//!
//! # Example
//!
//! ```ignore
//! let config = PathLayout::default().resolve("report.pdf");
//! let summary = pdf2xlsx::convert(&config)?;
//! println!("{} rows written to {}", summary.output_rows, summary.output.display());
//! ```

mod config;
mod error;
mod extract;
mod pipeline;
mod xlsx;

pub use config::{ConvertConfig, OUTPUT_EXTENSION, PathLayout};
pub use error::{ConvertError, Result};
pub use extract::{ExtractedPage, PdfplumberExtractor, TableExtractor, select_pages};
pub use pipeline::{ConversionSummary, convert, convert_with};
pub use xlsx::{SpreadsheetWriter, XlsxWriter, column_name, escape_xml};

pub use pdf2xlsx_core::{
    CellValue, CoercedGrid, Grid, Number, RawTable, Row, assemble_grid, coerce_columns,
    expand_rows, normalize_cell, transform,
};
pub use pdfplumber::{Strategy, TableSettings};
