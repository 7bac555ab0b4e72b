//! Row expansion.
//!
//! Each cell is decoded into a list of values by splitting on
//! [`SEPARATOR`]; each row then becomes as many output rows as its longest
//! list, with position `j` of every list feeding output row `j`.
//!
//! The separator is matched literally. Text that happens to contain `", "`
//! in the source PDF is split as well; there is no way to tell it apart from
//! an encoded multi-value cell.

use crate::grid::{Grid, Row};
use crate::normalize::SEPARATOR;
use crate::value::CellValue;

/// Decode one encoded cell into its list of values.
///
/// Text containing [`SEPARATOR`] is split into two or more text values
/// (no numeric re-parsing). Anything else becomes a one-element list holding
/// the value unchanged.
pub fn split_cell(cell: CellValue) -> Vec<CellValue> {
    match cell {
        CellValue::Text(text) if text.contains(SEPARATOR) => {
            text.split(SEPARATOR).map(CellValue::text).collect()
        }
        other => vec![other],
    }
}

/// Expand one row into one or more rows.
///
/// The number of output rows is the longest split list in the row, and at
/// least 1 (a row without columns still yields one empty row). Shorter lists
/// contribute [`CellValue::Absent`] past their end.
pub fn expand_row(row: Row) -> Vec<Row> {
    let mut lists: Vec<_> = row
        .into_iter()
        .map(|cell| split_cell(cell).into_iter())
        .collect();
    let max_len = lists.iter().map(ExactSizeIterator::len).max().unwrap_or(1);

    (0..max_len)
        .map(|_| {
            lists
                .iter_mut()
                .map(|values| values.next().unwrap_or_default())
                .collect()
        })
        .collect()
}

/// Expand every row of the grid, preserving source-row order.
pub fn expand_rows(grid: Grid) -> Grid {
    let rows: Vec<Row> = grid.into_rows().into_iter().flat_map(expand_row).collect();
    Grid::from_rows(rows)
}
