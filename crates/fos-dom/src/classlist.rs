//! DOMTokenList (classList)
//!
//! Space-separated token set backing an element's `class` attribute.

use crate::DomError;

/// DOMTokenList for managing space-separated tokens (e.g., classList)
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DOMTokenList {
    tokens: Vec<String>,
}

impl DOMTokenList {
    /// Create empty token list
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse from space-separated string, dropping duplicates
    pub fn from_string(s: &str) -> Self {
        let mut list = Self::new();
        for token in s.split_whitespace() {
            if !list.contains(token) {
                list.tokens.push(token.to_string());
            }
        }
        list
    }

    /// Get number of tokens
    pub fn length(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// Check if token exists
    pub fn contains(&self, token: &str) -> bool {
        self.tokens.iter().any(|t| t == token)
    }

    /// Add a token. Returns `true` if the list changed.
    pub fn add(&mut self, token: &str) -> Result<bool, DomError> {
        validate(token)?;
        if self.contains(token) {
            return Ok(false);
        }
        self.tokens.push(token.to_string());
        Ok(true)
    }

    /// Remove a token. Returns `true` if the list changed.
    pub fn remove(&mut self, token: &str) -> Result<bool, DomError> {
        validate(token)?;
        let before = self.tokens.len();
        self.tokens.retain(|t| t != token);
        Ok(self.tokens.len() != before)
    }

    /// Get value as string
    pub fn value(&self) -> String {
        self.tokens.join(" ")
    }

    /// Set from string
    pub fn set_value(&mut self, value: &str) {
        *self = Self::from_string(value);
    }
}

fn validate(token: &str) -> Result<(), DomError> {
    if token.is_empty() || token.chars().any(char::is_whitespace) {
        return Err(DomError::InvalidToken(token.to_string()));
    }
    Ok(())
}

impl std::fmt::Display for DOMTokenList {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.value())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_string() {
        let list = DOMTokenList::from_string("btn btn-primary  active btn");
        assert_eq!(list.length(), 3);
        assert!(list.contains("btn"));
        assert!(list.contains("btn-primary"));
        assert_eq!(list.value(), "btn btn-primary active");
    }

    #[test]
    fn test_add_remove() {
        let mut list = DOMTokenList::new();
        assert!(list.add("foo").unwrap());
        assert!(list.add("bar").unwrap());
        assert!(!list.add("foo").unwrap());
        assert_eq!(list.length(), 2);

        assert!(list.remove("foo").unwrap());
        assert!(!list.remove("foo").unwrap());
        assert_eq!(list.value(), "bar");
    }

    #[test]
    fn test_invalid_tokens() {
        let mut list = DOMTokenList::new();
        assert_eq!(list.add(""), Err(DomError::InvalidToken(String::new())));
        assert!(list.add("two words").is_err());
        assert!(list.remove("a\tb").is_err());
        assert!(list.is_empty());
    }
}
