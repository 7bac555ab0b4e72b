//! Cell values threaded through every pipeline stage.
//!
//! A table cell is either missing, a number, or text. The extractor only ever
//! produces [`CellValue::Absent`] and [`CellValue::Text`]; numbers appear once
//! a column has been coerced.

use std::fmt;

/// A numeric cell value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Number {
    /// A whole number.
    Int(i64),
    /// A floating-point number.
    Float(f64),
}

impl Number {
    /// Returns the value as `f64`, widening integers.
    pub fn as_f64(self) -> f64 {
        match self {
            Number::Int(i) => i as f64,
            Number::Float(f) => f,
        }
    }

    /// Returns `true` for [`Number::Float`].
    pub fn is_float(self) -> bool {
        matches!(self, Number::Float(_))
    }
}

impl fmt::Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Number::Int(i) => write!(f, "{i}"),
            Number::Float(v) => f.write_str(&format_float(*v)),
        }
    }
}

/// A single table cell.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum CellValue {
    /// No value (empty or merged-away cell, or padding).
    #[default]
    Absent,
    /// A numeric value.
    Number(Number),
    /// A text value.
    Text(String),
}

impl CellValue {
    /// Build a text cell.
    pub fn text(s: impl Into<String>) -> Self {
        CellValue::Text(s.into())
    }

    /// Returns `true` for [`CellValue::Absent`].
    pub fn is_absent(&self) -> bool {
        matches!(self, CellValue::Absent)
    }

    /// Returns the text of a [`CellValue::Text`] cell.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            CellValue::Text(s) => Some(s),
            _ => None,
        }
    }

    /// Returns the number of a [`CellValue::Number`] cell.
    pub fn as_number(&self) -> Option<Number> {
        match self {
            CellValue::Number(n) => Some(*n),
            _ => None,
        }
    }
}

impl From<Option<String>> for CellValue {
    fn from(value: Option<String>) -> Self {
        value.map_or(CellValue::Absent, CellValue::Text)
    }
}

impl From<&str> for CellValue {
    fn from(value: &str) -> Self {
        CellValue::text(value)
    }
}

impl From<Number> for CellValue {
    fn from(value: Number) -> Self {
        CellValue::Number(value)
    }
}

impl fmt::Display for CellValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CellValue::Absent => Ok(()),
            CellValue::Number(n) => n.fmt(f),
            CellValue::Text(s) => f.write_str(s),
        }
    }
}

/// Error returned by [`parse_as_number`] for text that is not a number.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NumberParseError {
    input: String,
}

impl NumberParseError {
    fn new(input: &str) -> Self {
        Self {
            input: input.to_string(),
        }
    }

    /// The text that failed to parse.
    pub fn input(&self) -> &str {
        &self.input
    }
}

impl fmt::Display for NumberParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "cannot parse {:?} as a number", self.input)
    }
}

impl std::error::Error for NumberParseError {}

/// First code point of every run of ten decimal digits (general category
/// `Nd`, Unicode 15.0), ascending.
const DECIMAL_ZEROS: [u32; 68] = [
    0x0030, 0x0660, 0x06F0, 0x07C0, 0x0966, 0x09E6, 0x0A66, 0x0AE6,
    0x0B66, 0x0BE6, 0x0C66, 0x0CE6, 0x0D66, 0x0DE6, 0x0E50, 0x0ED0,
    0x0F20, 0x1040, 0x1090, 0x17E0, 0x1810, 0x1946, 0x19D0, 0x1A80,
    0x1A90, 0x1B50, 0x1BB0, 0x1C40, 0x1C50, 0xA620, 0xA8D0, 0xA900,
    0xA9D0, 0xA9F0, 0xAA50, 0xABF0, 0xFF10, 0x104A0, 0x10D30, 0x11066,
    0x110F0, 0x11136, 0x111D0, 0x112F0, 0x11450, 0x114D0, 0x11650, 0x116C0,
    0x11730, 0x118E0, 0x11950, 0x11C50, 0x11D50, 0x11DA0, 0x11F50, 0x16A60,
    0x16AC0, 0x16B50, 0x1D7CE, 0x1D7D8, 0x1D7E2, 0x1D7EC, 0x1D7F6, 0x1E140,
    0x1E2F0, 0x1E4F0, 0x1E950, 0x1FBF0,
];

/// Value of a decimal digit from any script.
fn decimal_digit(c: char) -> Option<u8> {
    if c.is_ascii_digit() {
        return Some(c as u8 - b'0');
    }
    let cp = c as u32;
    let run = DECIMAL_ZEROS.partition_point(|&zero| zero <= cp).checked_sub(1)?;
    let offset = cp - DECIMAL_ZEROS[run];
    (offset < 10).then_some(offset as u8)
}

/// Rewrite a numeral into the ASCII form Rust's number parsers accept.
///
/// Decimal digits of any script (`"１２"`, `"٣"`) become ASCII digits and
/// single underscores between two digits are dropped (`"1_000"`). Returns
/// `None` when an underscore is not surrounded by digits. Everything else is
/// copied unchanged for the parser to judge.
pub fn ascii_numeral(text: &str) -> Option<String> {
    let chars: Vec<char> = text.chars().collect();
    let mut out = String::with_capacity(text.len());
    for (i, &c) in chars.iter().enumerate() {
        if c == '_' {
            let before = i.checked_sub(1).and_then(|j| chars.get(j));
            let after = chars.get(i + 1);
            let between_digits = before.and_then(|&b| decimal_digit(b)).is_some()
                && after.and_then(|&a| decimal_digit(a)).is_some();
            if !between_digits {
                return None;
            }
            continue;
        }
        match decimal_digit(c) {
            Some(d) => out.push(char::from(b'0' + d)),
            None => out.push(c),
        }
    }
    Some(out)
}

/// Parse text as an integer or, failing that, a float.
///
/// Surrounding whitespace is ignored. Digits go through [`ascii_numeral`].
/// Exponents and the special values `inf` and `nan` are accepted by the
/// float branch.
pub fn parse_as_number(text: &str) -> Result<Number, NumberParseError> {
    let ascii = ascii_numeral(text.trim()).ok_or_else(|| NumberParseError::new(text))?;
    if let Ok(i) = ascii.parse::<i64>() {
        return Ok(Number::Int(i));
    }
    ascii
        .parse::<f64>()
        .map(Number::Float)
        .map_err(|_| NumberParseError::new(text))
}

/// Render a float in shortest round-trip form.
///
/// Positional notation is used for decimal exponents in `-4..16`, always with
/// a fractional part (`3.0`). Outside that range the output is scientific
/// with a signed, at least two-digit exponent (`1e+16`, `1.5e-05`).
pub fn format_float(value: f64) -> String {
    if value.is_nan() {
        return "nan".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "inf" } else { "-inf" }.to_string();
    }

    let sci = format!("{value:e}");
    let Some((mantissa, exp)) = sci.split_once('e') else {
        return sci;
    };
    let exp: i32 = exp.parse().unwrap_or(0);

    if (-4..16).contains(&exp) {
        let mut s = format!("{value}");
        if !s.contains('.') {
            s.push_str(".0");
        }
        s
    } else {
        let sign = if exp < 0 { '-' } else { '+' };
        format!("{mantissa}e{sign}{:02}", exp.abs())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn format_float_whole_number_keeps_fraction() {
        assert_eq!(format_float(3.0), "3.0");
        assert_eq!(format_float(-2.0), "-2.0");
    }

    #[test]
    fn format_float_shortest_digits() {
        assert_eq!(format_float(12.5), "12.5");
        assert_eq!(format_float(0.1), "0.1");
        assert_eq!(format_float(1.10), "1.1");
    }

    #[test]
    fn format_float_negative_zero() {
        assert_eq!(format_float(-0.0), "-0.0");
    }

    #[test]
    fn format_float_small_positional_boundary() {
        assert_eq!(format_float(0.0001), "0.0001");
        assert_eq!(format_float(0.00001), "1e-05");
        assert_eq!(format_float(0.000015), "1.5e-05");
    }

    #[test]
    fn format_float_large_positional_boundary() {
        assert_eq!(format_float(1e15), "1000000000000000.0");
        assert_eq!(format_float(1e16), "1e+16");
        assert_eq!(format_float(1.5e17), "1.5e+17");
        assert_eq!(format_float(1e100), "1e+100");
    }

    #[test]
    fn format_float_non_finite() {
        assert_eq!(format_float(f64::INFINITY), "inf");
        assert_eq!(format_float(f64::NEG_INFINITY), "-inf");
        assert_eq!(format_float(f64::NAN), "nan");
    }

    #[test]
    fn number_display() {
        assert_eq!(Number::Int(-42).to_string(), "-42");
        assert_eq!(Number::Float(2.5).to_string(), "2.5");
    }

    #[test]
    fn parse_as_number_prefers_int() {
        assert_eq!(parse_as_number("12"), Ok(Number::Int(12)));
        assert_eq!(parse_as_number("-7"), Ok(Number::Int(-7)));
    }

    #[test]
    fn parse_as_number_float_forms() {
        assert_eq!(parse_as_number("3.0"), Ok(Number::Float(3.0)));
        assert_eq!(parse_as_number("1e3"), Ok(Number::Float(1000.0)));
        assert!(matches!(parse_as_number("inf"), Ok(Number::Float(f)) if f.is_infinite()));
    }

    #[test]
    fn parse_as_number_trims_whitespace() {
        assert_eq!(parse_as_number("  5 "), Ok(Number::Int(5)));
    }

    #[test]
    fn parse_as_number_accepts_unicode_digits() {
        assert_eq!(parse_as_number("１２"), Ok(Number::Int(12)));
        assert_eq!(parse_as_number("３.５"), Ok(Number::Float(3.5)));
        assert_eq!(parse_as_number("٣"), Ok(Number::Int(3)));
        assert_eq!(parse_as_number("-１"), Ok(Number::Int(-1)));
    }

    #[test]
    fn parse_as_number_underscores_between_digits() {
        assert_eq!(parse_as_number("1_000"), Ok(Number::Int(1000)));
        assert_eq!(parse_as_number("1_000.2_5"), Ok(Number::Float(1000.25)));
        assert!(parse_as_number("_1").is_err());
        assert!(parse_as_number("1_").is_err());
        assert!(parse_as_number("1__0").is_err());
        assert!(parse_as_number("1_.5").is_err());
    }

    #[test]
    fn ascii_numeral_rewrites_digits_only() {
        assert_eq!(ascii_numeral("１２３").as_deref(), Some("123"));
        assert_eq!(ascii_numeral("𝟗").as_deref(), Some("9"));
        // full-width punctuation and non-decimal numerals are left alone
        assert_eq!(ascii_numeral("３．５").as_deref(), Some("3．5"));
        assert_eq!(ascii_numeral("²").as_deref(), Some("²"));
        assert_eq!(ascii_numeral("abc").as_deref(), Some("abc"));
    }

    #[test]
    fn decimal_digit_table_bounds() {
        assert_eq!(decimal_digit('0'), Some(0));
        assert_eq!(decimal_digit('\u{FF19}'), Some(9));
        assert_eq!(decimal_digit('\u{FF1A}'), None);
        assert_eq!(decimal_digit('\u{1FBF9}'), Some(9));
        assert_eq!(decimal_digit('a'), None);
        assert_eq!(decimal_digit('\u{002F}'), None);
    }

    #[test]
    fn parse_as_number_rejects_text() {
        let err = parse_as_number("foo").unwrap_err();
        assert_eq!(err.input(), "foo");
        assert_eq!(err.to_string(), "cannot parse \"foo\" as a number");
        assert!(parse_as_number("").is_err());
        assert!(parse_as_number("1, 2").is_err());
    }

    #[test]
    fn cell_value_from_option() {
        assert_eq!(CellValue::from(None::<String>), CellValue::Absent);
        assert_eq!(
            CellValue::from(Some("x".to_string())),
            CellValue::Text("x".to_string())
        );
    }

    #[test]
    fn cell_value_accessors() {
        assert!(CellValue::Absent.is_absent());
        assert_eq!(CellValue::text("a").as_text(), Some("a"));
        assert_eq!(CellValue::Absent.as_text(), None);
        assert_eq!(
            CellValue::Number(Number::Int(1)).as_number(),
            Some(Number::Int(1))
        );
    }

    #[test]
    fn cell_value_display() {
        assert_eq!(CellValue::Absent.to_string(), "");
        assert_eq!(CellValue::text("abc").to_string(), "abc");
        assert_eq!(CellValue::Number(Number::Float(4.0)).to_string(), "4.0");
    }
}
