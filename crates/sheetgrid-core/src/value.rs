//! Cell value types

use std::fmt;

/// Represents the decoded value of a single spreadsheet cell
///
/// The provider only ever returns strings, numbers, booleans, or nothing;
/// absent and null cells both decode to [`CellValue::Empty`].
#[derive(Debug, Clone, PartialEq, Default)]
pub enum CellValue {
    /// Empty cell (absent or null in the provider response)
    #[default]
    Empty,

    /// Boolean value
    Bool(bool),

    /// Numeric value (all numbers stored as f64)
    Number(f64),

    /// String value
    Text(String),
}

impl CellValue {
    /// Create a new text value
    pub fn text<S: Into<String>>(s: S) -> Self {
        CellValue::Text(s.into())
    }

    /// Check if the cell is empty
    pub fn is_empty(&self) -> bool {
        matches!(self, CellValue::Empty)
    }

    /// Try to get the value as a number
    pub fn as_number(&self) -> Option<f64> {
        match self {
            CellValue::Number(n) => Some(*n),
            CellValue::Bool(true) => Some(1.0),
            CellValue::Bool(false) => Some(0.0),
            _ => None,
        }
    }

    /// Try to get the value as a boolean
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            CellValue::Bool(b) => Some(*b),
            CellValue::Number(n) => Some(*n != 0.0),
            _ => None,
        }
    }

    /// Try to get the value as a string slice
    pub fn as_str(&self) -> Option<&str> {
        match self {
            CellValue::Text(s) => Some(s),
            _ => None,
        }
    }

    /// Get the type name for error messages
    pub fn type_name(&self) -> &'static str {
        match self {
            CellValue::Empty => "empty",
            CellValue::Bool(_) => "boolean",
            CellValue::Number(_) => "number",
            CellValue::Text(_) => "text",
        }
    }
}

impl fmt::Display for CellValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CellValue::Empty => write!(f, ""),
            CellValue::Bool(b) => write!(f, "{}", if *b { "TRUE" } else { "FALSE" }),
            CellValue::Number(n) => write!(f, "{}", n),
            CellValue::Text(s) => write!(f, "{}", s),
        }
    }
}

impl From<bool> for CellValue {
    fn from(b: bool) -> Self {
        CellValue::Bool(b)
    }
}

impl From<i32> for CellValue {
    fn from(n: i32) -> Self {
        CellValue::Number(n as f64)
    }
}

impl From<i64> for CellValue {
    fn from(n: i64) -> Self {
        CellValue::Number(n as f64)
    }
}

impl From<f64> for CellValue {
    fn from(n: f64) -> Self {
        CellValue::Number(n)
    }
}

impl From<&str> for CellValue {
    fn from(s: &str) -> Self {
        CellValue::text(s)
    }
}

impl From<String> for CellValue {
    fn from(s: String) -> Self {
        CellValue::Text(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cell_value_conversions() {
        assert_eq!(CellValue::from(42), CellValue::Number(42.0));
        assert_eq!(CellValue::from(3.14), CellValue::Number(3.14));
        assert_eq!(CellValue::from(true), CellValue::Bool(true));

        let s = CellValue::from("hello");
        assert_eq!(s.as_str(), Some("hello"));
    }

    #[test]
    fn test_cell_value_as_number() {
        assert_eq!(CellValue::Number(42.0).as_number(), Some(42.0));
        assert_eq!(CellValue::Bool(true).as_number(), Some(1.0));
        assert_eq!(CellValue::Bool(false).as_number(), Some(0.0));
        assert_eq!(CellValue::text("hello").as_number(), None);
        assert_eq!(CellValue::Empty.as_number(), None);
    }

    #[test]
    fn test_empty_displays_as_empty_string() {
        assert_eq!(CellValue::Empty.to_string(), "");
        assert_eq!(CellValue::default(), CellValue::Empty);
    }

    #[test]
    fn test_display() {
        assert_eq!(CellValue::Number(5.0).to_string(), "5");
        assert_eq!(CellValue::Bool(true).to_string(), "TRUE");
        assert_eq!(CellValue::text("Geralt").to_string(), "Geralt");
    }
}
