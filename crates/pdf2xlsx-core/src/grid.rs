//! Grid assembly.
//!
//! Flattens the tables of every page into one rectangular [`Grid`]. Page and
//! table boundaries are dropped; rows keep their extraction order.

use crate::normalize::normalize_cell;
use crate::value::CellValue;

/// One row of cells.
pub type Row = Vec<CellValue>;

/// A table as yielded by the extractor: rows of raw cells.
pub type RawTable = Vec<Row>;

/// A rectangular sequence of rows.
///
/// Every row has exactly [`Grid::width`] cells; shorter rows are padded with
/// [`CellValue::Absent`] on construction.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Grid {
    rows: Vec<Row>,
    width: usize,
}

impl Grid {
    /// Build a grid, padding every row to the widest row's length.
    pub fn from_rows(mut rows: Vec<Row>) -> Self {
        let width = rows.iter().map(Vec::len).max().unwrap_or(0);
        for row in &mut rows {
            row.resize(width, CellValue::Absent);
        }
        Self { rows, width }
    }

    /// Number of columns.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Number of rows.
    pub fn height(&self) -> usize {
        self.rows.len()
    }

    /// Returns `true` if the grid has no rows.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// All rows, top to bottom.
    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    /// The cells of column `index`, top to bottom.
    ///
    /// Yields nothing when `index` is out of range.
    pub fn column(&self, index: usize) -> impl Iterator<Item = &CellValue> + '_ {
        self.rows.iter().filter_map(move |row| row.get(index))
    }

    /// Consume the grid and return its rows.
    pub fn into_rows(self) -> Vec<Row> {
        self.rows
    }
}

/// Normalize every cell of every table and assemble the result into a grid.
///
/// An empty input (or tables without rows) yields an empty grid of width 0.
pub fn assemble_grid<I>(tables: I) -> Grid
where
    I: IntoIterator<Item = RawTable>,
{
    let rows: Vec<Row> = tables
        .into_iter()
        .flatten()
        .map(|row| row.into_iter().map(normalize_cell).collect())
        .collect();
    Grid::from_rows(rows)
}
