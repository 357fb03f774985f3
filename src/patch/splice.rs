//! Text splice primitives
//!
//! Pure functions: locate an anchor, check how often it occurs, splice at
//! the located boundary and return the new content. Patches are built from
//! these so each step stays testable without touching the filesystem.
//!
//! Tag lookups are ASCII case-insensitive. Lowercasing ASCII never changes
//! byte lengths, so offsets found in the lowered copy are valid in the
//! original text.

use std::ops::Range;

/// Outcome of looking up a CSS rule block by its selector
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BlockLookup {
    /// Exactly one block, with byte offsets of its braces
    Found(RuleBlock),
    NotFound,
    Ambiguous(usize),
    /// The selector was found but its `{` has no matching `}`
    Unterminated,
}

/// Byte offsets of a single CSS rule block
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RuleBlock {
    pub selector_start: usize,
    pub open_brace: usize,
    pub close_brace: usize,
}

impl RuleBlock {
    /// Declarations between the braces
    pub fn body<'a>(&self, css: &'a str) -> &'a str {
        &css[self.open_brace + 1..self.close_brace]
    }
}

/// Insert `text` at byte offset `at`
pub fn insert_at(content: &str, at: usize, text: &str) -> String {
    let mut out = String::with_capacity(content.len() + text.len());
    out.push_str(&content[..at]);
    out.push_str(text);
    out.push_str(&content[at..]);
    out
}

/// Replace the byte range with `replacement`
pub fn splice(content: &str, range: Range<usize>, replacement: &str) -> String {
    let mut out = String::with_capacity(content.len() + replacement.len());
    out.push_str(&content[..range.start]);
    out.push_str(replacement);
    out.push_str(&content[range.end..]);
    out
}

/// Locate the rule block whose whole selector is `selector`
///
/// A match must start a rule (preceded only by whitespace after the start of
/// the file, a `}` or a comment end) and be followed by optional whitespace
/// and `{`. Descendant selectors such as `section div.figure` or
/// `div.figure img` are therefore not matches.
pub fn find_rule_block(css: &str, selector: &str) -> BlockLookup {
    let candidates: Vec<(usize, usize)> = css
        .match_indices(selector)
        .filter_map(|(start, _)| {
            let before = css[..start].trim_end();
            let starts_rule = before.is_empty() || before.ends_with('}') || before.ends_with("*/");
            if !starts_rule {
                return None;
            }
            let after = &css[start + selector.len()..];
            let gap = after.len() - after.trim_start().len();
            after
                .trim_start()
                .starts_with('{')
                .then_some((start, start + selector.len() + gap))
        })
        .collect();

    match candidates.as_slice() {
        [] => BlockLookup::NotFound,
        [(selector_start, open_brace)] => match matching_brace(css, *open_brace) {
            Some(close_brace) => BlockLookup::Found(RuleBlock {
                selector_start: *selector_start,
                open_brace: *open_brace,
                close_brace,
            }),
            None => BlockLookup::Unterminated,
        },
        many => BlockLookup::Ambiguous(many.len()),
    }
}

/// Offset of the `}` closing the block opened at `open`
///
/// Braces inside `/* ... */` comments and quoted strings do not count. An
/// unclosed comment or string leaves the block unterminated.
fn matching_brace(css: &str, open: usize) -> Option<usize> {
    let bytes = css.as_bytes();
    let mut depth = 0usize;
    let mut i = open;

    while i < bytes.len() {
        match bytes[i] {
            b'/' if bytes.get(i + 1) == Some(&b'*') => {
                let len = css[i + 2..].find("*/")?;
                i += 2 + len + 2;
                continue;
            }
            quote @ (b'"' | b'\'') => {
                i += 1;
                while *bytes.get(i)? != quote {
                    if bytes[i] == b'\\' {
                        i += 1;
                    }
                    i += 1;
                }
            }
            b'{' => depth += 1,
            b'}' => {
                depth -= 1;
                if depth == 0 {
                    return Some(i);
                }
            }
            _ => {}
        }
        i += 1;
    }
    None
}

/// Locate the first opening tag `<name ...>`
///
/// Returns the range covering `<` through `>` inclusive.
pub fn find_open_tag(html: &str, name: &str) -> Option<Range<usize>> {
    let lowered = html.to_ascii_lowercase();
    let needle = format!("<{}", name.to_ascii_lowercase());

    let mut from = 0;
    while let Some(found) = lowered[from..].find(&needle) {
        let start = from + found;
        let after = start + needle.len();
        let boundary = lowered[after..].chars().next();
        if matches!(boundary, Some(c) if c == '>' || c == '/' || c.is_ascii_whitespace()) {
            let end = lowered[after..].find('>')? + after + 1;
            return Some(start..end);
        }
        from = after;
    }
    None
}

/// Locate the first closing tag `</name>` at or after `from`
pub fn find_close_tag(html: &str, name: &str, from: usize) -> Option<Range<usize>> {
    let lowered = html[from..].to_ascii_lowercase();
    let needle = format!("</{}>", name.to_ascii_lowercase());
    lowered
        .find(&needle)
        .map(|offset| from + offset..from + offset + needle.len())
}

/// Locate the last closing tag `</name>`
pub fn rfind_close_tag(html: &str, name: &str) -> Option<Range<usize>> {
    let lowered = html.to_ascii_lowercase();
    let needle = format!("</{}>", name.to_ascii_lowercase());
    lowered
        .rfind(&needle)
        .map(|start| start..start + needle.len())
}

/// Set an attribute on an opening tag's text
///
/// An existing value (double or single quoted) is replaced. Otherwise the
/// attribute is added right after the tag name. Namespaced lookalikes such
/// as `xml:lang` are left alone when setting `lang`.
pub fn set_attribute(tag: &str, attr: &str, value: &str) -> String {
    if let Some(range) = attribute_value_range(tag, attr) {
        return splice(tag, range, value);
    }

    let name_end = tag
        .char_indices()
        .skip(1)
        .find(|(_, c)| c.is_ascii_whitespace() || *c == '>' || *c == '/')
        .map_or(tag.len(), |(i, _)| i);
    insert_at(tag, name_end, &format!(" {attr}=\"{value}\""))
}

/// Byte range of an attribute's value inside an opening tag, quotes excluded
///
/// Whitespace is allowed around `=`.
pub fn attribute_value_range(tag: &str, attr: &str) -> Option<Range<usize>> {
    let lowered = tag.to_ascii_lowercase();
    let name = attr.to_ascii_lowercase();

    let mut from = 0;
    while let Some(found) = lowered[from..].find(&name) {
        let start = from + found;
        from = start + name.len();

        let preceded_by_space = lowered[..start]
            .chars()
            .next_back()
            .is_some_and(|c| c.is_ascii_whitespace());
        if !preceded_by_space {
            continue;
        }
        let Some(value) = lowered[from..].trim_start().strip_prefix('=') else {
            continue;
        };
        let value = value.trim_start();
        let value_start = lowered.len() - value.len();

        let quote = value.chars().next()?;
        if quote == '"' || quote == '\'' {
            let close = value[1..].find(quote)?;
            return Some(value_start + 1..value_start + 1 + close);
        }
        let len = value
            .find(|c: char| c.is_ascii_whitespace() || c == '>' || c == '/')
            .unwrap_or(value.len());
        return Some(value_start..value_start + len);
    }
    None
}
