//! Inline style declaration
//!
//! The `style` facet of an element: an ordered list of declarations kept in
//! sync with the `style` attribute.

use crate::hyphenate;

/// CSSStyleDeclaration for an element's inline style
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CssStyleDeclaration {
    /// (kebab-case property, value)
    declarations: Vec<(String, String)>,
}

impl CssStyleDeclaration {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse `prop: value; prop: value` text. Malformed entries are skipped.
    pub fn parse(css_text: &str) -> Self {
        let mut style = Self::new();
        style.set_css_text(css_text);
        style
    }

    pub fn len(&self) -> usize {
        self.declarations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.declarations.is_empty()
    }

    /// Get a property value; accepts camelCase or kebab-case names.
    /// Returns `""` when the property is not set.
    pub fn get_property_value(&self, property: &str) -> &str {
        let property = hyphenate(property);
        self.declarations
            .iter()
            .find(|(name, _)| *name == property)
            .map(|(_, value)| value.as_str())
            .unwrap_or("")
    }

    /// Set a property; an empty value removes the declaration.
    pub fn set_property(&mut self, property: &str, value: &str) {
        let property = hyphenate(property);
        let value = value.trim();

        if value.is_empty() {
            self.declarations.retain(|(name, _)| *name != property);
            return;
        }

        match self.declarations.iter_mut().find(|(name, _)| *name == property) {
            Some(entry) => entry.1 = value.to_string(),
            None => self.declarations.push((property, value.to_string())),
        }
    }

    /// Remove a property, returning its old value
    pub fn remove_property(&mut self, property: &str) -> Option<String> {
        let property = hyphenate(property);
        let index = self.declarations.iter().position(|(name, _)| *name == property)?;
        Some(self.declarations.remove(index).1)
    }

    /// Serialize to `style` attribute text
    pub fn css_text(&self) -> String {
        self.declarations
            .iter()
            .map(|(name, value)| format!("{}: {};", name, value))
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// Replace all declarations from `style` attribute text
    pub fn set_css_text(&mut self, css_text: &str) {
        self.declarations.clear();
        for decl in css_text.split(';') {
            if let Some((name, value)) = decl.split_once(':') {
                let name = name.trim();
                if !name.is_empty() {
                    self.set_property(name, value);
                }
            }
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.declarations.iter().map(|(n, v)| (n.as_str(), v.as_str()))
    }
}
