//! Admin tab rendering.
//!
//! A tab covers one or more resource symbols and renders as a list item
//! wrapping a link, with a `selected` class when the current request falls
//! inside the tab's territory. Visibility is permission-gated: a resource
//! whose descriptor carries a guard is suppressed entirely when the current
//! ability denies `admin` on it.

use clementine_core::Action;
use regex::Regex;
use tracing::debug;

use crate::html::{self, Attrs};

use super::{LinkOptions, Navigation};

/// Rule deciding when a tab shows as selected.
#[derive(Debug, Clone)]
pub enum MatchRule {
    /// Selected when the regex matches the current request path.
    Regex(Regex),
    /// Selected when the current path starts with `{admin_prefix}{prefix}`.
    ///
    /// `/products` matches `/admin/products`, `/admin/products/5/variants`,
    /// and so on.
    Prefix(String),
}

impl MatchRule {
    /// A regex match rule.
    ///
    /// # Errors
    ///
    /// Returns the underlying [`regex::Error`] for an invalid pattern.
    pub fn regex(pattern: &str) -> Result<Self, regex::Error> {
        Ok(Self::Regex(Regex::new(pattern)?))
    }

    /// A path-prefix match rule, resolved under the admin mount point.
    #[must_use]
    pub fn prefix(prefix: &str) -> Self {
        Self::Prefix(prefix.to_string())
    }
}

/// Options for [`Navigation::tab`].
///
/// All fields are overrides; an empty `TabOptions` renders the conventional
/// tab for the resource list.
#[derive(Debug, Clone, Default)]
pub struct TabOptions {
    label: Option<String>,
    route: Option<String>,
    url: Option<String>,
    icon: Option<String>,
    css_class: Option<String>,
    match_path: Option<MatchRule>,
}

impl TabOptions {
    /// Create empty options.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Override the label key (otherwise the first resource symbol).
    #[must_use]
    pub fn label(mut self, label: &str) -> Self {
        self.label = Some(label.to_string());
        self
    }

    /// Override the route name (otherwise taken from the registry).
    #[must_use]
    pub fn route(mut self, route: &str) -> Self {
        self.route = Some(route.to_string());
        self
    }

    /// Link to a raw URL, bypassing route resolution.
    #[must_use]
    pub fn url(mut self, url: &str) -> Self {
        self.url = Some(url.to_string());
        self
    }

    /// Prefix the label with a glyph icon.
    #[must_use]
    pub fn icon(mut self, icon: &str) -> Self {
        self.icon = Some(icon.to_string());
        self
    }

    /// Extra CSS class on the list item.
    #[must_use]
    pub fn css_class(mut self, class: &str) -> Self {
        self.css_class = Some(class.to_string());
        self
    }

    /// Control the selected state with an explicit match rule.
    #[must_use]
    pub fn match_path(mut self, rule: MatchRule) -> Self {
        self.match_path = Some(rule);
        self
    }
}

impl Navigation<'_> {
    /// Render an admin tab covering `resources`.
    ///
    /// Returns the empty string when `resources` is empty, when the first
    /// resource's guard denies the `admin` capability, or when no destination
    /// URL can be resolved.
    #[must_use]
    pub fn tab(&self, resources: &[&str], options: &TabOptions) -> String {
        let Some(first) = resources.first() else {
            return String::new();
        };

        // The permission gate is keyed by the first resource symbol, not the
        // label override.
        if let Some(descriptor) = self.registry.descriptor(first)
            && let Some(guard) = &descriptor.guard
            && !self.ability.can(Action::Admin, guard)
        {
            return String::new();
        }

        let destination = match &options.url {
            Some(url) => url.clone(),
            None => {
                let route = options
                    .route
                    .clone()
                    .unwrap_or_else(|| self.registry.route_name(first));
                match self.routes.path_for(&route) {
                    Some(url) => url,
                    None => {
                        debug!(route, "no path for route, tab suppressed");
                        return String::new();
                    }
                }
            }
        };

        let label_key = options.label.as_deref().unwrap_or(first);
        let label = self.labels.display(label_key);

        let link = match &options.icon {
            Some(icon) => {
                self.link_to_with_icon(icon, &label, &destination, &LinkOptions::new())
            }
            None => html::link_to(&label, &destination, &Attrs::new()),
        };

        let selected = match &options.match_path {
            Some(MatchRule::Regex(re)) => re.is_match(&self.ctx.current_path),
            Some(MatchRule::Prefix(prefix)) => self
                .ctx
                .current_path
                .starts_with(&format!("{}{prefix}", self.ctx.admin_prefix)),
            None => resources.contains(&self.ctx.current_controller.as_str()),
        };

        let mut attrs = Attrs::new();
        if selected {
            attrs.append_class("selected");
        }
        if let Some(class) = &options.css_class {
            attrs.append_class(class);
        }
        html::content_tag("li", &link, &attrs)
    }
}
