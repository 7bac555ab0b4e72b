//! Cell normalization.
//!
//! PDF table cells often merge several values into one string because of
//! layout (e.g. `"3 12.5 total"`). Normalization splits such text on
//! whitespace, types each fragment, and re-encodes the fragments joined with
//! [`SEPARATOR`] so the cell can later be unzipped into several rows by
//! [`crate::expand`].

use std::fmt;

use crate::value::{CellValue, Number, ascii_numeral};

/// Separator placed between the rendered tokens of a normalized cell.
pub const SEPARATOR: &str = ", ";

/// A whitespace-delimited fragment of a text cell.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Token<'a> {
    /// A fragment that parsed as a number.
    Number(Number),
    /// A fragment kept as its original text.
    Text(&'a str),
}

impl fmt::Display for Token<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Token::Number(n) => n.fmt(f),
            Token::Text(s) => f.write_str(s),
        }
    }
}

/// Type a single fragment.
///
/// A fragment containing `.` is only ever tried as a float, anything else
/// only as an integer. Digits of any script and underscores between digits
/// are accepted, see [`ascii_numeral`].
fn classify(fragment: &str) -> Token<'_> {
    let parsed = ascii_numeral(fragment).and_then(|ascii| {
        if ascii.contains('.') {
            ascii.parse::<f64>().ok().map(Number::Float)
        } else {
            ascii.parse::<i64>().ok().map(Number::Int)
        }
    });
    parsed.map_or(Token::Text(fragment), Token::Number)
}

/// Split text on runs of whitespace and type each fragment.
pub fn tokenize(text: &str) -> Vec<Token<'_>> {
    text.split_whitespace().map(classify).collect()
}

/// Render tokens and join them with [`SEPARATOR`].
pub fn encode_tokens(tokens: &[Token<'_>]) -> String {
    let mut out = String::new();
    for (i, token) in tokens.iter().enumerate() {
        if i > 0 {
            out.push_str(SEPARATOR);
        }
        out.push_str(&token.to_string());
    }
    out
}

/// Normalize one raw cell into its encoded form.
///
/// Non-text values are returned unchanged. Text is tokenized and re-encoded;
/// text with no tokens becomes the empty string.
pub fn normalize_cell(cell: CellValue) -> CellValue {
    match cell {
        CellValue::Text(text) => CellValue::Text(encode_tokens(&tokenize(&text))),
        other => other,
    }
}
