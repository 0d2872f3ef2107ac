//! Low-level markup assembly primitives.
//!
//! The navigation builders assemble fragments by hand rather than going
//! through the page template engine, so escaping discipline lives here:
//! [`escape`] for text and attribute values, [`content_tag`] and [`link_to`]
//! for element assembly. Functions taking an `inner_html` parameter expect
//! already-safe markup; everything else is escaped on the way in.

use std::fmt::Write;

/// HTML-escape a string for safe output in text or attribute position.
#[must_use]
pub fn escape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// An insertion-ordered attribute list.
///
/// Attribute values are escaped at render time. An empty `class` value is
/// dropped rather than emitted as `class=""`.
#[derive(Debug, Clone, Default)]
pub struct Attrs {
    entries: Vec<(String, String)>,
}

impl Attrs {
    /// Create an empty attribute list.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set an attribute, replacing any existing value for the same name.
    pub fn set(&mut self, name: &str, value: impl Into<String>) -> &mut Self {
        let value = value.into();
        if let Some(entry) = self.entries.iter_mut().find(|(n, _)| n == name) {
            entry.1 = value;
        } else {
            self.entries.push((name.to_string(), value));
        }
        self
    }

    /// Set a `data-` attribute.
    pub fn data(&mut self, key: &str, value: impl Into<String>) -> &mut Self {
        self.set(&format!("data-{key}"), value)
    }

    /// Append a class token to the `class` attribute.
    pub fn append_class(&mut self, class: &str) -> &mut Self {
        if class.is_empty() {
            return self;
        }
        match self.entries.iter_mut().find(|(n, _)| n == "class") {
            Some((_, existing)) if !existing.is_empty() => {
                existing.push(' ');
                existing.push_str(class);
            }
            Some((_, existing)) => existing.push_str(class),
            None => self.entries.push(("class".to_string(), class.to_string())),
        }
        self
    }

    /// Look up an attribute value.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_str())
    }

    /// Render as ` name="value"` pairs (leading space included when non-empty).
    #[must_use]
    pub fn render(&self) -> String {
        let mut out = String::new();
        for (name, value) in &self.entries {
            if name == "class" && value.is_empty() {
                continue;
            }
            let _ = write!(out, " {name}=\"{}\"", escape(value));
        }
        out
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for Attrs {
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        Self {
            entries: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

/// Wrap already-safe inner HTML in an element.
#[must_use]
pub fn content_tag(tag: &str, inner_html: &str, attrs: &Attrs) -> String {
    format!("<{tag}{}>{inner_html}</{tag}>", attrs.render())
}

/// An anchor with escaped link text.
#[must_use]
pub fn link_to(text: &str, url: &str, attrs: &Attrs) -> String {
    link_to_raw(&escape(text), url, attrs)
}

/// An anchor whose body is already-safe markup.
#[must_use]
pub fn link_to_raw(inner_html: &str, url: &str, attrs: &Attrs) -> String {
    let mut all = Attrs::new();
    all.set("href", url);
    for (name, value) in &attrs.entries {
        all.set(name, value.clone());
    }
    content_tag("a", inner_html, &all)
}
