//! Run configuration.

use std::ops::RangeInclusive;
use std::path::{Path, PathBuf};

use pdfplumber::TableSettings;

/// Extension of the written workbook.
pub const OUTPUT_EXTENSION: &str = "xlsx";

/// Everything a single conversion run needs.
#[derive(Debug, Clone)]
pub struct ConvertConfig {
    /// PDF to read.
    pub input: PathBuf,
    /// Workbook to write. Its parent directory is created if missing.
    pub output: PathBuf,
    /// Table detection settings passed to the extractor.
    pub table_settings: TableSettings,
    /// Inclusive 0-indexed page spans to read. `None` reads every page.
    pub pages: Option<Vec<RangeInclusive<usize>>>,
}

impl ConvertConfig {
    /// Create a config with default table settings, reading every page.
    pub fn new(input: impl Into<PathBuf>, output: impl Into<PathBuf>) -> Self {
        Self {
            input: input.into(),
            output: output.into(),
            table_settings: TableSettings::default(),
            pages: None,
        }
    }

    /// Replace the table detection settings.
    pub fn with_table_settings(mut self, settings: TableSettings) -> Self {
        self.table_settings = settings;
        self
    }

    /// Restrict the run to the given 0-indexed page spans.
    pub fn with_pages(mut self, pages: Option<Vec<RangeInclusive<usize>>>) -> Self {
        self.pages = pages;
        self
    }
}

/// Where input PDFs are looked up and where workbooks are written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathLayout {
    /// Directory user-supplied file names are resolved against.
    pub input_dir: PathBuf,
    /// Directory the workbook is written to.
    pub output_dir: PathBuf,
}

impl Default for PathLayout {
    fn default() -> Self {
        Self {
            input_dir: PathBuf::from("input"),
            output_dir: PathBuf::from("output"),
        }
    }
}

impl PathLayout {
    /// Create a layout from explicit directories.
    pub fn new(input_dir: impl Into<PathBuf>, output_dir: impl Into<PathBuf>) -> Self {
        Self {
            input_dir: input_dir.into(),
            output_dir: output_dir.into(),
        }
    }

    /// Resolve a file name into a run configuration.
    ///
    /// The input is `input_dir/<name>`; the output is
    /// `output_dir/<base name without extension>.xlsx`. An absolute name
    /// replaces the input directory entirely.
    pub fn resolve(&self, file_name: &str) -> ConvertConfig {
        let input = self.input_dir.join(file_name.trim());
        let output = self.output_dir.join(output_file_name(&input));
        ConvertConfig::new(input, output)
    }
}

fn output_file_name(input: &Path) -> String {
    let stem = input
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();
    format!("{stem}.{OUTPUT_EXTENSION}")
}
