//! pdf2xlsx-core: Backend-independent data types and algorithms.
//!
//! This crate turns raw table cells extracted from a PDF into the grid that
//! ends up in the spreadsheet:
//!
//! - [`normalize`]: whitespace tokenization of text cells and re-encoding as a
//!   `", "`-joined string
//! - [`grid`]: flattening all extracted tables into one rectangular [`Grid`]
//! - [`expand`]: unzipping multi-valued cells into consecutive output rows
//! - [`coerce`]: all-or-nothing numeric reinterpretation per column
//!
//! It has no external dependencies.

pub mod coerce;
pub mod expand;
pub mod grid;
pub mod normalize;
pub mod value;

pub use coerce::{CoercedGrid, coerce_column, coerce_columns};
pub use expand::{expand_row, expand_rows, split_cell};
pub use grid::{Grid, RawTable, Row, assemble_grid};
pub use normalize::{SEPARATOR, Token, encode_tokens, normalize_cell, tokenize};
pub use value::{
    CellValue, Number, NumberParseError, ascii_numeral, format_float, parse_as_number,
};

/// Run the in-memory part of the pipeline: assemble, expand, coerce.
///
/// Page and table boundaries are not retained; every row of every table is
/// concatenated in the order given.
pub fn transform<I>(tables: I) -> CoercedGrid
where
    I: IntoIterator<Item = RawTable>,
{
    let grid = assemble_grid(tables);
    coerce_columns(expand_rows(grid))
}
