//! Name casing
//!
//! Conversions between dashed/underscored names and camelCase, as used by
//! dataset keys, CSSOM property names and script-facing property names.

/// Convert a word-separated name to camelCase.
///
/// Any non-alphanumeric character is a word boundary and is dropped; the
/// character following it is uppercased. The first word keeps its case, so
/// `foo-bar` becomes `fooBar` and `-webkit-transform` becomes `WebkitTransform`.
pub fn camelize(name: &str) -> String {
    let mut result = String::with_capacity(name.len());
    let mut capitalize_next = false;

    for c in name.chars() {
        if !c.is_alphanumeric() {
            capitalize_next = true;
        } else if capitalize_next {
            result.extend(c.to_uppercase());
            capitalize_next = false;
        } else {
            result.push(c);
        }
    }

    result
}

/// Convert a camelCase name to kebab-case.
///
/// Custom properties (`--name`) are returned untouched.
pub fn hyphenate(name: &str) -> String {
    if name.starts_with("--") {
        return name.to_string();
    }

    let mut result = String::with_capacity(name.len() + 4);

    for c in name.chars() {
        if c.is_uppercase() {
            result.push('-');
            result.extend(c.to_lowercase());
        } else {
            result.push(c);
        }
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_camelize() {
        assert_eq!(camelize("foo-bar"), "fooBar");
        assert_eq!(camelize("data-user-id"), "dataUserId");
        assert_eq!(camelize("first_name"), "firstName");
        assert_eq!(camelize("simple"), "simple");
        assert_eq!(camelize("alreadyCamel"), "alreadyCamel");
    }

    #[test]
    fn test_camelize_boundaries() {
        assert_eq!(camelize("-webkit-transform"), "WebkitTransform");
        assert_eq!(camelize("a--b"), "aB");
        assert_eq!(camelize("trailing-"), "trailing");
        assert_eq!(camelize("h1-title"), "h1Title");
        assert_eq!(camelize(""), "");
    }

    #[test]
    fn test_hyphenate() {
        assert_eq!(hyphenate("backgroundColor"), "background-color");
        assert_eq!(hyphenate("color"), "color");
        assert_eq!(hyphenate("font-size"), "font-size");
        assert_eq!(hyphenate("WebkitTransform"), "-webkit-transform");
        assert_eq!(hyphenate("--mainColor"), "--mainColor");
    }
}
