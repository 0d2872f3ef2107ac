//! Render context and the routing seam.
//!
//! Instead of reading ambient request/controller globals, every builder call
//! receives an explicit [`RenderContext`] describing where in the admin panel
//! the current request landed. URL resolution goes through the
//! [`RouteResolver`] trait so the host's router stays out of this crate.

use std::collections::HashMap;

use clementine_core::ResourceSymbol;

/// Where the current request landed, for computing selected/active states.
#[derive(Debug, Clone)]
pub struct RenderContext {
    /// Full path of the current request (e.g. `/admin/products/5/edit`).
    pub current_path: String,
    /// Resource symbol of the controller serving the request (e.g. `products`).
    pub current_controller: ResourceSymbol,
    /// Mount point of the admin panel. Prefix match rules resolve under it.
    pub admin_prefix: String,
}

impl RenderContext {
    /// Context for a request at `path` served by `controller`, with the
    /// default `/admin` mount point.
    #[must_use]
    pub fn new(path: &str, controller: &str) -> Self {
        Self {
            current_path: path.to_string(),
            current_controller: ResourceSymbol::from(controller),
            admin_prefix: "/admin".to_string(),
        }
    }

    /// Override the admin mount point.
    #[must_use]
    pub fn with_admin_prefix(mut self, prefix: &str) -> Self {
        self.admin_prefix = prefix.to_string();
        self
    }
}

/// The route-name-to-URL seam.
///
/// `None` is not an error: a tab whose route the host does not expose simply
/// renders nothing.
pub trait RouteResolver {
    /// Resolve a route name (e.g. `admin_products`) to a path.
    fn path_for(&self, route: &str) -> Option<String>;
}

/// A static route table.
#[derive(Debug, Clone, Default)]
pub struct RouteTable {
    routes: HashMap<String, String>,
}

impl RouteTable {
    /// Create an empty route table.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add or replace a route.
    pub fn insert(&mut self, route: &str, path: &str) {
        self.routes.insert(route.to_string(), path.to_string());
    }
}

impl RouteResolver for RouteTable {
    fn path_for(&self, route: &str) -> Option<String> {
        self.routes.get(route).cloned()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for RouteTable {
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        Self {
            routes: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}
