//! Cell values as a spreadsheet host hands them over.
//!
//! A cell is empty, a boolean, a number or text. The engine never assumes a
//! particular type: coordinates are read from the text form of any cell and
//! flags go through [`CellValue::as_flag`].

use serde::{Deserialize, Serialize};
use std::borrow::Cow;

/// A single cell value.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CellValue {
    #[default]
    Empty,
    Bool(bool),
    Number(f64),
    Text(String),
}

impl CellValue {
    /// Types raw CSV text the way a spreadsheet would show it.
    ///
    /// Blank text is `Empty`, plain decimal numbers are `Number`, everything
    /// else stays `Text`. `TRUE`/`FALSE` stay text; [`as_flag`](Self::as_flag)
    /// reads them either way.
    pub fn infer(raw: &str) -> Self {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return CellValue::Empty;
        }

        let numeric_chars = trimmed
            .chars()
            .all(|c| c.is_ascii_digit() || matches!(c, '-' | '+' | '.' | 'e' | 'E'));
        if numeric_chars {
            if let Ok(n) = trimmed.parse::<f64>() {
                if n.is_finite() {
                    return CellValue::Number(n);
                }
            }
        }

        CellValue::Text(raw.to_string())
    }

    /// Returns true for empty cells and empty text.
    pub fn is_empty(&self) -> bool {
        match self {
            CellValue::Empty => true,
            CellValue::Text(s) => s.is_empty(),
            _ => false,
        }
    }

    /// Text form of the cell, used for coordinate extraction and price cleanup.
    pub fn as_text(&self) -> Cow<'_, str> {
        match self {
            CellValue::Empty => Cow::Borrowed(""),
            CellValue::Bool(true) => Cow::Borrowed("true"),
            CellValue::Bool(false) => Cow::Borrowed("false"),
            CellValue::Number(n) => Cow::Owned(n.to_string()),
            CellValue::Text(s) => Cow::Borrowed(s),
        }
    }

    /// Coerces the cell to a checkbox flag.
    ///
    /// True for boolean true, the number 1, or text equal to `TRUE` or
    /// `VERDADERO` ignoring ASCII case. Text is not trimmed.
    pub fn as_flag(&self) -> bool {
        match self {
            CellValue::Bool(b) => *b,
            CellValue::Number(n) => *n == 1.0,
            CellValue::Text(s) => s.eq_ignore_ascii_case("TRUE") || s.eq_ignore_ascii_case("VERDADERO"),
            CellValue::Empty => false,
        }
    }
}

impl From<&str> for CellValue {
    fn from(value: &str) -> Self {
        CellValue::Text(value.to_string())
    }
}

impl From<String> for CellValue {
    fn from(value: String) -> Self {
        CellValue::Text(value)
    }
}

impl From<bool> for CellValue {
    fn from(value: bool) -> Self {
        CellValue::Bool(value)
    }
}

impl From<f64> for CellValue {
    fn from(value: f64) -> Self {
        CellValue::Number(value)
    }
}

impl std::fmt::Display for CellValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.as_text())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_true_values() {
        assert!(CellValue::from("VERDADERO").as_flag());
        assert!(CellValue::from("verdadero").as_flag());
        assert!(CellValue::from("true").as_flag());
        assert!(CellValue::from("TRUE").as_flag());
        assert!(CellValue::Number(1.0).as_flag());
        assert!(CellValue::Bool(true).as_flag());
    }

    #[test]
    fn test_false_values() {
        assert!(!CellValue::from("").as_flag());
        assert!(!CellValue::Empty.as_flag());
        assert!(!CellValue::Number(0.0).as_flag());
        assert!(!CellValue::from("false").as_flag());
        assert!(!CellValue::from("FALSO").as_flag());
        assert!(!CellValue::Bool(false).as_flag());
        assert!(!CellValue::Number(2.0).as_flag());
    }

    #[test]
    fn test_flag_text_is_not_trimmed() {
        assert!(!CellValue::from(" TRUE").as_flag());
        // Text "1" is not the number 1
        assert!(!CellValue::from("1").as_flag());
    }

    #[test]
    fn test_infer() {
        assert_eq!(CellValue::infer(""), CellValue::Empty);
        assert_eq!(CellValue::infer("   "), CellValue::Empty);
        assert_eq!(CellValue::infer("1"), CellValue::Number(1.0));
        assert_eq!(CellValue::infer("-23.5"), CellValue::Number(-23.5));
        assert_eq!(CellValue::infer("TRUE"), CellValue::from("TRUE"));
        assert_eq!(CellValue::infer("-23.5, -65.1"), CellValue::from("-23.5, -65.1"));
        assert_eq!(CellValue::infer("nan"), CellValue::from("nan"));
        assert_eq!(CellValue::infer("inf"), CellValue::from("inf"));
    }

    #[test]
    fn test_inferred_one_is_a_flag() {
        assert!(CellValue::infer("1").as_flag());
        assert!(!CellValue::infer("0").as_flag());
    }

    #[test]
    fn test_as_text() {
        assert_eq!(CellValue::Empty.as_text(), "");
        assert_eq!(CellValue::Number(1000.0).as_text(), "1000");
        assert_eq!(CellValue::Number(-23.5).as_text(), "-23.5");
        assert_eq!(CellValue::Bool(true).as_text(), "true");
        assert_eq!(CellValue::from("$ 1.200").as_text(), "$ 1.200");
    }

    #[test]
    fn test_json_cells() {
        let cells: Vec<CellValue> =
            serde_json::from_str(r#"[null, true, 1, "-23.1, -65.2"]"#).unwrap();
        assert_eq!(
            cells,
            vec![
                CellValue::Empty,
                CellValue::Bool(true),
                CellValue::Number(1.0),
                CellValue::from("-23.1, -65.2"),
            ]
        );
    }
}
