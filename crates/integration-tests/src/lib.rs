//! Shared fixtures for admin navigation integration tests.
//!
//! Builds the registry, route table, and label table the way a host
//! application would at startup, so the tests under `tests/` exercise the
//! full wiring rather than hand-rolled stubs.

#![cfg_attr(not(test), forbid(unsafe_code))]

use clementine_admin::{ResourceRegistry, RouteTable, StaticLabels};

/// Registry document a host application might ship as configuration.
pub const REGISTRY_JSON: &str = r#"[
    {"resource": "orders", "guard": "Order"},
    {"resource": "products", "guard": "Product"},
    {"resource": "customers", "guard": "Customer"},
    {"resource": "promotions", "guard": "Promotion"},
    {"resource": "configurations", "route": "admin_settings"}
]"#;

/// Load the standard test registry.
///
/// # Panics
///
/// Panics when [`REGISTRY_JSON`] is out of sync with the loader.
#[must_use]
pub fn registry() -> ResourceRegistry {
    ResourceRegistry::from_json(REGISTRY_JSON).expect("registry fixture must parse")
}

/// Route table matching the standard test registry.
#[must_use]
pub fn routes() -> RouteTable {
    [
        ("admin_orders", "/admin/orders"),
        ("admin_products", "/admin/products"),
        ("admin_customers", "/admin/customers"),
        ("admin_promotions", "/admin/promotions"),
        ("admin_settings", "/admin/configurations"),
    ]
    .into_iter()
    .collect()
}

/// A small translation table overriding a couple of defaults.
#[must_use]
pub fn labels() -> StaticLabels {
    [("promotions", "Promos"), ("delete", "Remove")]
        .into_iter()
        .collect()
}
