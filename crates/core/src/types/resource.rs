//! Resource symbols.

use serde::{Deserialize, Serialize};

/// A short identifier naming a domain entity type (e.g. `products`).
///
/// Resource symbols are the currency of the navigation layer: tabs cover one
/// or more of them, registries key descriptors by them, and the current
/// controller reports one.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ResourceSymbol(String);

impl ResourceSymbol {
    /// Create a new resource symbol.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    /// Get the underlying name.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

// Lets symbol-keyed maps be queried with a plain `&str`.
impl std::borrow::Borrow<str> for ResourceSymbol {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for ResourceSymbol {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for ResourceSymbol {
    fn from(name: &str) -> Self {
        Self(name.to_string())
    }
}

impl From<String> for ResourceSymbol {
    fn from(name: String) -> Self {
        Self(name)
    }
}

impl PartialEq<str> for ResourceSymbol {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for ResourceSymbol {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resource_symbol_display() {
        let sym = ResourceSymbol::from("products");
        assert_eq!(sym.to_string(), "products");
        assert_eq!(sym.as_str(), "products");
    }

    #[test]
    fn test_resource_symbol_str_eq() {
        let sym = ResourceSymbol::from("orders");
        assert_eq!(sym, "orders");
    }

    #[test]
    fn test_symbol_keyed_map_str_lookup() {
        use std::collections::HashMap;

        let mut map: HashMap<ResourceSymbol, i32> = HashMap::new();
        map.insert(ResourceSymbol::from("products"), 1);
        assert_eq!(map.get("products"), Some(&1));
        assert_eq!(map.get("orders"), None);
    }

    #[test]
    fn test_serde_transparent() {
        let sym: ResourceSymbol = serde_json::from_str("\"taxons\"").unwrap();
        assert_eq!(sym, "taxons");
        assert_eq!(serde_json::to_string(&sym).unwrap(), "\"taxons\"");
    }
}
