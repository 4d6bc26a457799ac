//! Markup serialization for the `innerHTML` facet

use crate::{DomTree, NodeData, NodeId};

/// Serialize the children of `parent`
pub(crate) fn serialize_children(tree: &DomTree, parent: NodeId) -> String {
    let mut out = String::new();
    for (id, _) in tree.children(parent) {
        serialize_node(tree, id, &mut out);
    }
    out
}

fn serialize_node(tree: &DomTree, id: NodeId, out: &mut String) {
    let Some(node) = tree.get(id) else {
        return;
    };

    match &node.data {
        NodeData::Element(elem) => {
            out.push('<');
            out.push_str(elem.tag());
            for (name, value) in elem.attributes() {
                out.push(' ');
                out.push_str(name);
                out.push_str("=\"");
                escape_into(value, true, out);
                out.push('"');
            }
            out.push('>');
            if elem.is_void() {
                return;
            }
            for (child, _) in tree.children(id) {
                serialize_node(tree, child, out);
            }
            out.push_str("</");
            out.push_str(elem.tag());
            out.push('>');
        }
        NodeData::Text(text) => escape_into(text, false, out),
        NodeData::Comment(text) => {
            out.push_str("<!--");
            out.push_str(text);
            out.push_str("-->");
        }
        NodeData::RawMarkup(markup) => out.push_str(markup),
        NodeData::Document | NodeData::Object(_) => {}
    }
}

fn escape_into(text: &str, attribute: bool, out: &mut String) {
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '\u{a0}' => out.push_str("&nbsp;"),
            '"' if attribute => out.push_str("&quot;"),
            '<' if !attribute => out.push_str("&lt;"),
            '>' if !attribute => out.push_str("&gt;"),
            _ => out.push(c),
        }
    }
}

/// Character data of an unparsed fragment: tags and comments dropped,
/// character references decoded
pub(crate) fn fragment_text(markup: &str) -> String {
    let mut out = String::with_capacity(markup.len());
    let mut rest = markup;
    while let Some(pos) = rest.find(['<', '&']) {
        out.push_str(&rest[..pos]);
        rest = &rest[pos..];
        if rest.starts_with('&') {
            match decode_reference(rest) {
                Some((c, len)) => {
                    out.push(c);
                    rest = &rest[len..];
                }
                None => {
                    out.push('&');
                    rest = &rest[1..];
                }
            }
        } else {
            match markup_len(rest) {
                Some(len) => rest = &rest[len..],
                None => {
                    out.push('<');
                    rest = &rest[1..];
                }
            }
        }
    }
    out.push_str(rest);
    out
}

/// Length of the tag or comment at the start of `s`, `None` when the `<`
/// is plain text. Unterminated markup runs to the end of the fragment.
fn markup_len(s: &str) -> Option<usize> {
    if let Some(body) = s.strip_prefix("<!--") {
        return Some(body.find("-->").map_or(s.len(), |end| end + "<!---->".len()));
    }

    let starts_tag = s[1..]
        .chars()
        .next()
        .is_some_and(|c| c.is_ascii_alphabetic() || matches!(c, '/' | '!' | '?'));
    if !starts_tag {
        return None;
    }

    // quoted attribute values may contain '>'
    let mut quote = None;
    for (i, c) in s.char_indices().skip(1) {
        match (quote, c) {
            (None, '"' | '\'') => quote = Some(c),
            (Some(q), c) if c == q => quote = None,
            (None, '>') => return Some(i + 1),
            _ => {}
        }
    }
    Some(s.len())
}

/// Decode the character reference at the start of `s` (`&amp;`, `&#60;`,
/// `&#x3C;`). Returns the character and the length consumed.
fn decode_reference(s: &str) -> Option<(char, usize)> {
    let end = s[1..].find(';')? + 1;
    let name = &s[1..end];
    let body = name.strip_prefix('#').unwrap_or(name);
    if body.is_empty() || !body.bytes().all(|b| b.is_ascii_alphanumeric()) {
        return None;
    }

    let c = if name.starts_with('#') {
        let code = match body.strip_prefix(['x', 'X']) {
            Some(hex) => u32::from_str_radix(hex, 16).ok()?,
            None => body.parse().ok()?,
        };
        char::from_u32(code)?
    } else {
        match name {
            "amp" => '&',
            "lt" => '<',
            "gt" => '>',
            "quot" => '"',
            "apos" => '\'',
            "nbsp" => '\u{a0}',
            _ => return None,
        }
    };
    Some((c, end + 1))
}
