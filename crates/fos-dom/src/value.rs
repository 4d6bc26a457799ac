//! Script-facing values
//!
//! The dynamic value type stored in IDL properties and host objects, with
//! the truthiness and string conversion rules script code expects.

use std::fmt;

/// Dynamic property value
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Value {
    #[default]
    Undefined,
    Null,
    Bool(bool),
    Number(f64),
    String(String),
}

impl Value {
    /// Script truthiness: `undefined`, `null`, `false`, `0`, `NaN` and `""` are falsy.
    pub fn is_truthy(&self) -> bool {
        match self {
            Value::Undefined | Value::Null => false,
            Value::Bool(b) => *b,
            Value::Number(n) => *n != 0.0 && !n.is_nan(),
            Value::String(s) => !s.is_empty(),
        }
    }

    #[inline]
    pub fn is_undefined(&self) -> bool {
        matches!(self, Value::Undefined)
    }

    /// Borrow the string payload, if any
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s),
            _ => None,
        }
    }

    /// Convert for a string-typed DOM facet. `undefined` and `null` become `""`.
    pub fn to_dom_string(&self) -> String {
        match self {
            Value::Undefined | Value::Null => String::new(),
            Value::Bool(b) => b.to_string(),
            Value::Number(n) => format_number(*n),
            Value::String(s) => s.clone(),
        }
    }
}

fn format_number(n: f64) -> String {
    if n.is_nan() {
        "NaN".to_string()
    } else if n.is_infinite() {
        let s = if n > 0.0 { "Infinity" } else { "-Infinity" };
        s.to_string()
    } else if n == 0.0 {
        // -0 prints as "0"
        "0".to_string()
    } else if n == n.trunc() && n.abs() < 1e21 {
        format!("{:.0}", n)
    } else {
        format!("{}", n)
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Undefined => f.write_str("undefined"),
            Value::Null => f.write_str("null"),
            other => f.write_str(&other.to_dom_string()),
        }
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::String(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::String(s)
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<f64> for Value {
    fn from(n: f64) -> Self {
        Value::Number(n)
    }
}

impl From<i32> for Value {
    fn from(n: i32) -> Self {
        Value::Number(n.into())
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(v: Option<T>) -> Self {
        v.map_or(Value::Undefined, Into::into)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truthiness() {
        assert!(!Value::Undefined.is_truthy());
        assert!(!Value::Null.is_truthy());
        assert!(!Value::Bool(false).is_truthy());
        assert!(!Value::Number(0.0).is_truthy());
        assert!(!Value::Number(f64::NAN).is_truthy());
        assert!(!Value::from("").is_truthy());

        assert!(Value::Bool(true).is_truthy());
        assert!(Value::Number(-1.0).is_truthy());
        assert!(Value::from("0").is_truthy());
    }

    #[test]
    fn test_dom_string() {
        assert_eq!(Value::Undefined.to_dom_string(), "");
        assert_eq!(Value::Null.to_dom_string(), "");
        assert_eq!(Value::Bool(true).to_dom_string(), "true");
        assert_eq!(Value::Number(42.0).to_dom_string(), "42");
        assert_eq!(Value::Number(-0.0).to_dom_string(), "0");
        assert_eq!(Value::Number(1.5).to_dom_string(), "1.5");
        assert_eq!(Value::Number(-7.0).to_dom_string(), "-7");
        assert_eq!(Value::Number(1e20).to_dom_string(), "100000000000000000000");
        assert_eq!(Value::Number(-1e20).to_dom_string(), "-100000000000000000000");
        assert_eq!(Value::Number(f64::INFINITY).to_dom_string(), "Infinity");
        assert_eq!(Value::from("abc").to_dom_string(), "abc");
    }

    #[test]
    fn test_display() {
        assert_eq!(Value::Undefined.to_string(), "undefined");
        assert_eq!(Value::Null.to_string(), "null");
        assert_eq!(Value::from(7).to_string(), "7");
    }

    #[test]
    fn test_from_option() {
        assert_eq!(Value::from(None::<&str>), Value::Undefined);
        assert_eq!(Value::from(Some("x")), Value::from("x"));
    }
}
