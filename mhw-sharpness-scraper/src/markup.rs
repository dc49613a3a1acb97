//! Permissive tag scanner for listing pages.
//!
//! The alternate source serves HTML that does not survive a strict parser
//! (unbalanced cells, stray attributes), so instead of building a DOM we
//! pattern-match one opening tag at a time and let the caller walk forward
//! through the document. Closing tags are never matched; [`content_of`]
//! simply reads up to the next `</`.
//!
//! All positions are byte offsets into the scanned text.

use std::collections::HashMap;
use std::sync::LazyLock;

use regex::Regex;

/// One opening or self-closing tag: `<name key key=value key="v" key='v'>`.
static TAG_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r#"<(?P<name>\w+)(?P<attrs>(?:\s+[\w:-]+(?:\s*=\s*(?:"[^"]*"|'[^']*'|[^\s"'<>]+))?)*)\s*/?\s*>"#,
    )
    .expect("static pattern")
});

/// A single attribute inside the `attrs` group of [`TAG_PATTERN`].
static ATTR_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?P<key>[\w:-]+)(?:\s*=\s*(?:"(?P<dq>[^"]*)"|'(?P<sq>[^']*)'|(?P<bare>[^\s"'<>]+)))?"#)
        .expect("static pattern")
});

/// A matched tag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tag {
    /// Lowercased tag name.
    pub name: String,
    /// Attributes keyed by lowercased name, quotes stripped. Attributes
    /// written without a value map to an empty string. When a key repeats
    /// the first occurrence wins.
    pub attributes: HashMap<String, String>,
    /// Offset of the opening `<`.
    pub start: usize,
    /// Length of the whole match.
    pub len: usize,
}

impl Tag {
    /// Offset just past the closing `>`.
    pub fn end(&self) -> usize {
        self.start + self.len
    }

    pub fn is(&self, name: &str) -> bool {
        self.name == name
    }

    pub fn attr(&self, key: &str) -> Option<&str> {
        self.attributes.get(key).map(String::as_str)
    }

    /// The `class` attribute split on whitespace, duplicates removed,
    /// first-seen order kept.
    pub fn classes(&self) -> Vec<&str> {
        let mut classes: Vec<&str> = Vec::new();
        for class in self.attr("class").unwrap_or_default().split_whitespace() {
            if !classes.contains(&class) {
                classes.push(class);
            }
        }
        classes
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.attr("class")
            .is_some_and(|c| c.split_whitespace().any(|x| x == class))
    }

    pub fn has_any_class(&self) -> bool {
        self.attr("class")
            .is_some_and(|c| c.split_whitespace().next().is_some())
    }

    /// First class starting with `prefix`, e.g. `kr3` for `"kr"`.
    pub fn class_with_prefix(&self, prefix: &str) -> Option<&str> {
        self.attr("class")?
            .split_whitespace()
            .find(|c| c.starts_with(prefix))
    }

    /// Whether the `href` attribute starts with `prefix`.
    pub fn href_starts_with(&self, prefix: &str) -> bool {
        self.attr("href").is_some_and(|h| h.starts_with(prefix))
    }
}

/// Find the first tag at or after `from`.
///
/// Returns `None` when no further tag exists or `from` is past the end.
pub fn next_tag(text: &str, from: usize) -> Option<Tag> {
    if from >= text.len() || !text.is_char_boundary(from) {
        return None;
    }
    let caps = TAG_PATTERN.captures_at(text, from)?;
    let whole = caps.get(0)?;

    let mut attributes = HashMap::new();
    if let Some(attrs) = caps.name("attrs") {
        for attr in ATTR_PATTERN.captures_iter(attrs.as_str()) {
            let key = attr["key"].to_lowercase();
            let value = attr
                .name("dq")
                .or_else(|| attr.name("sq"))
                .or_else(|| attr.name("bare"))
                .map(|m| m.as_str().to_string())
                .unwrap_or_default();
            attributes.entry(key).or_insert(value);
        }
    }

    Some(Tag {
        name: caps["name"].to_lowercase(),
        attributes,
        start: whole.start(),
        len: whole.len(),
    })
}

/// Skip forward to the next tag satisfying `predicate`.
///
/// The cursor is moved past every tag examined, including the returned one.
/// When nothing matches, the cursor ends at the end of the text.
pub fn find<P>(text: &str, cursor: &mut usize, mut predicate: P) -> Option<Tag>
where
    P: FnMut(&Tag) -> bool,
{
    while let Some(tag) = next_tag(text, *cursor) {
        *cursor = tag.end();
        if predicate(&tag) {
            return Some(tag);
        }
    }
    *cursor = text.len();
    None
}

/// Text between the end of `tag` and the next closing-tag marker `</`.
pub fn content_of<'a>(text: &'a str, tag: &Tag) -> Option<&'a str> {
    let rest = text.get(tag.end()..)?;
    let close = rest.find("</")?;
    Some(&rest[..close])
}

/// Split an inline `style` attribute into lowercased property/value pairs.
///
/// Returns `None` when a declaration has no `:`.
pub fn parse_style(style: &str) -> Option<HashMap<String, String>> {
    let mut properties = HashMap::new();
    for declaration in style.split(';') {
        let declaration = declaration.trim();
        if declaration.is_empty() {
            continue;
        }
        let (key, value) = declaration.split_once(':')?;
        properties.insert(key.trim().to_lowercase(), value.trim().to_lowercase());
    }
    Some(properties)
}

/// A cursor over a document, for callers that walk it tag by tag.
#[derive(Debug, Clone)]
pub struct Scanner<'a> {
    text: &'a str,
    pos: usize,
}

impl<'a> Scanner<'a> {
    pub fn new(text: &'a str) -> Self {
        Self { text, pos: 0 }
    }

    pub fn position(&self) -> usize {
        self.pos
    }

    /// The next tag, whatever it is.
    pub fn next_tag(&mut self) -> Option<Tag> {
        let tag = next_tag(self.text, self.pos)?;
        self.pos = tag.end();
        Some(tag)
    }

    pub fn find<P>(&mut self, predicate: P) -> Option<Tag>
    where
        P: FnMut(&Tag) -> bool,
    {
        find(self.text, &mut self.pos, predicate)
    }

    pub fn content(&self, tag: &Tag) -> Option<&'a str> {
        content_of(self.text, tag)
    }

    /// Text from the cursor up to (not including) the next `marker`,
    /// without moving the cursor.
    pub fn until(&self, marker: &str) -> Option<&'a str> {
        let rest = &self.text[self.pos..];
        rest.find(marker).map(|end| &rest[..end])
    }
}

#[cfg(test)]
#[path = "tests/markup_tests.rs"]
mod tests;
