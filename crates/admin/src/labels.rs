//! UI string lookup.
//!
//! The host application may ship a translation table; the navigation layer
//! only needs a lookup seam. A miss falls back to [`titleize`]d keys, so an
//! English-only deployment needs no table at all.

use std::collections::HashMap;

use serde::Deserialize;

/// The translation/lookup seam.
pub trait Labels {
    /// Look up the display string for `key`, or `None` to use the default.
    fn lookup(&self, key: &str) -> Option<String>;

    /// The display string for `key`: the looked-up value, else `titleize(key)`.
    fn display(&self, key: &str) -> String {
        self.lookup(key).unwrap_or_else(|| titleize(key))
    }
}

/// No translation table; every key falls back to its titleized form.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoLabels;

impl Labels for NoLabels {
    fn lookup(&self, _key: &str) -> Option<String> {
        None
    }
}

/// A static translation table.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(transparent)]
pub struct StaticLabels {
    entries: HashMap<String, String>,
}

impl Labels for StaticLabels {
    fn lookup(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }
}

impl StaticLabels {
    /// Load a table from a JSON object of `key: display string` pairs.
    ///
    /// # Errors
    ///
    /// Returns the underlying serde error when the JSON is malformed.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for StaticLabels {
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        Self {
            entries: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

/// Turn a resource key into a display label: `tax_categories` becomes
/// `Tax Categories`.
#[must_use]
pub fn titleize(key: &str) -> String {
    key.split(['_', ' '])
        .filter(|word| !word.is_empty())
        .map(|word| {
            let mut chars = word.chars();
            chars.next().map_or_else(String::new, |first| {
                first.to_uppercase().collect::<String>() + chars.as_str()
            })
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Singularize a resource key with naive English rules.
///
/// Good enough for admin resource names (`orders` -> `order`,
/// `categories` -> `category`); not a general inflector.
#[must_use]
pub fn singularize(key: &str) -> String {
    if let Some(stem) = key.strip_suffix("ies") {
        return format!("{stem}y");
    }
    if key.ends_with("ss") {
        return key.to_string();
    }
    key.strip_suffix('s').unwrap_or(key).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_titleize_single_word() {
        assert_eq!(titleize("products"), "Products");
    }

    #[test]
    fn test_titleize_underscores() {
        assert_eq!(titleize("tax_categories"), "Tax Categories");
        assert_eq!(titleize("gift_card_batches"), "Gift Card Batches");
    }

    #[test]
    fn test_titleize_degenerate() {
        assert_eq!(titleize(""), "");
        assert_eq!(titleize("__"), "");
    }

    #[test]
    fn test_no_labels_falls_back() {
        assert_eq!(NoLabels.display("stock_items"), "Stock Items");
    }

    #[test]
    fn test_static_labels_hit_and_miss() {
        let labels: StaticLabels = [("products", "Produkte")].into_iter().collect();
        assert_eq!(labels.display("products"), "Produkte");
        assert_eq!(labels.display("orders"), "Orders");
    }

    #[test]
    fn test_singularize() {
        assert_eq!(singularize("orders"), "order");
        assert_eq!(singularize("categories"), "category");
        assert_eq!(singularize("address"), "address");
        assert_eq!(singularize("inventory"), "inventory");
    }

    #[test]
    fn test_static_labels_from_json() {
        let labels = StaticLabels::from_json(r#"{"edit": "Bearbeiten"}"#).unwrap();
        assert_eq!(labels.display("edit"), "Bearbeiten");
        assert!(StaticLabels::from_json("[1,2]").is_err());
    }
}
