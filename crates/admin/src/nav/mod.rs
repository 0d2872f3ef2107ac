//! Navigation components for the admin panel.
//!
//! [`Navigation`] is the entry point: construct one per render from the
//! startup-populated [`ResourceRegistry`], the host's route resolver and
//! ability, a label table, and the current request's [`RenderContext`], then
//! call its render methods to produce HTML fragments.
//!
//! Every render method is a synchronous pure function of those inputs.
//! Nothing here returns `Result`: a tab whose resource the current user may
//! not administer, or whose route the host does not expose, renders as the
//! empty string.

pub mod buttons;
pub mod context;
pub mod links;
pub mod menu;
pub mod registry;
pub mod tabs;

pub use buttons::{ButtonLinkOptions, ButtonOptions, LinkMethod};
pub use context::{RenderContext, RouteResolver, RouteTable};
pub use links::{LinkOptions, icon};
pub use registry::{RegistryError, ResourceDescriptor, ResourceRegistry};
pub use tabs::{MatchRule, TabOptions};

use clementine_core::Ability;

use crate::labels::Labels;

/// Builder for admin navigation markup.
///
/// Borrows its collaborators; cheap to construct per render.
pub struct Navigation<'a> {
    registry: &'a ResourceRegistry,
    routes: &'a dyn RouteResolver,
    ability: &'a dyn Ability,
    labels: &'a dyn Labels,
    ctx: &'a RenderContext,
}

impl<'a> Navigation<'a> {
    /// Create a navigation builder for one render.
    #[must_use]
    pub fn new(
        registry: &'a ResourceRegistry,
        routes: &'a dyn RouteResolver,
        ability: &'a dyn Ability,
        labels: &'a dyn Labels,
        ctx: &'a RenderContext,
    ) -> Self {
        Self {
            registry,
            routes,
            ability,
            labels,
            ctx,
        }
    }
}

#[cfg(test)]
pub(crate) mod test_support {
    //! Shared fixtures for navigation tests.

    use clementine_core::{Ability, Action};

    use super::{RenderContext, ResourceDescriptor, ResourceRegistry, RouteTable};

    /// Ability that permits everything.
    pub struct AllowAll;

    impl Ability for AllowAll {
        fn can(&self, _action: Action, _resource: &str) -> bool {
            true
        }
    }

    /// Ability that denies `admin` on one subject.
    pub struct DenyAdminOn(pub &'static str);

    impl Ability for DenyAdminOn {
        fn can(&self, action: Action, resource: &str) -> bool {
            !(action == Action::Admin && resource == self.0)
        }
    }

    pub fn registry() -> ResourceRegistry {
        [
            ResourceDescriptor::new("products").guarded_by("Product"),
            ResourceDescriptor::new("orders").guarded_by("Order"),
            ResourceDescriptor::new("reports").route("admin_reporting"),
        ]
        .into_iter()
        .collect()
    }

    pub fn routes() -> RouteTable {
        [
            ("admin_products", "/admin/products"),
            ("admin_orders", "/admin/orders"),
            ("admin_reporting", "/admin/reports"),
        ]
        .into_iter()
        .collect()
    }

    pub fn ctx_at(path: &str, controller: &str) -> RenderContext {
        RenderContext::new(path, controller)
    }
}
