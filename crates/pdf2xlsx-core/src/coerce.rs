//! Per-column numeric coercion.
//!
//! Values that went through normalization and expansion are text again.
//! A column is turned back into numbers only when every value in it is
//! compatible with a number; otherwise it is left exactly as it was.
//!
//! Compatibility rules:
//! - [`CellValue::Absent`] and blank text are missing values and compatible.
//! - [`CellValue::Number`] is compatible.
//! - Other text must satisfy [`parse_as_number`].
//!
//! A coerced column holds one numeric type: integers are widened to floats
//! when the column also holds a float or a missing value. A column with no
//! numeric value at all is left untouched.

use crate::grid::{Grid, Row};
use crate::value::{CellValue, Number, NumberParseError, parse_as_number};

/// The result of [`coerce_columns`].
#[derive(Debug, Clone, PartialEq, Default)]
pub struct CoercedGrid {
    /// The grid with numeric columns replaced.
    pub grid: Grid,
    /// Indices of the columns that were coerced, ascending.
    pub numeric_columns: Vec<usize>,
}

/// `Ok(None)` for a missing value, `Ok(Some(_))` for a number.
fn classify(value: &CellValue) -> Result<Option<Number>, NumberParseError> {
    match value {
        CellValue::Absent => Ok(None),
        CellValue::Number(n) => Ok(Some(*n)),
        CellValue::Text(t) if t.trim().is_empty() => Ok(None),
        CellValue::Text(t) => parse_as_number(t).map(Some),
    }
}

/// Try to coerce one column.
///
/// Returns the replacement values, or `None` if the column must stay as is.
pub fn coerce_column<'a, I>(values: I) -> Option<Vec<CellValue>>
where
    I: IntoIterator<Item = &'a CellValue>,
{
    let parsed: Vec<Option<Number>> = values
        .into_iter()
        .map(classify)
        .collect::<Result<_, _>>()
        .ok()?;

    if parsed.iter().all(Option::is_none) {
        return None;
    }

    let widen = parsed.iter().any(|n| n.is_none_or(Number::is_float));

    Some(
        parsed
            .into_iter()
            .map(|n| match n {
                None => CellValue::Absent,
                Some(n) if widen => CellValue::Number(Number::Float(n.as_f64())),
                Some(n) => CellValue::Number(n),
            })
            .collect(),
    )
}

/// Coerce every column of the grid independently.
pub fn coerce_columns(grid: Grid) -> CoercedGrid {
    let width = grid.width();
    let mut rows: Vec<Row> = grid.into_rows();
    let mut numeric_columns = Vec::new();

    for col in 0..width {
        let Some(values) = coerce_column(rows.iter().map(|row| &row[col])) else {
            continue;
        };
        for (row, value) in rows.iter_mut().zip(values) {
            row[col] = value;
        }
        numeric_columns.push(col);
    }

    CoercedGrid {
        grid: Grid::from_rows(rows),
        numeric_columns,
    }
}
