//! Action links: edit/delete/clone/new buttons and generic icon links.
//!
//! These are pure templating: fixed CSS class conventions, a fixed
//! `data-action` identifier per operation, and labels routed through the
//! label table with English fallbacks.

use crate::html::{self, Attrs};

use super::Navigation;

/// Fixed styling for resource action links.
const ACTION_LINK_CLASS: &str = "btn btn-default btn-sm";

/// Options for [`Navigation::link_to_with_icon`].
#[derive(Debug, Clone, Default)]
pub struct LinkOptions {
    class: Option<String>,
    no_text: bool,
    title: Option<String>,
    name: Option<String>,
    data: Vec<(String, String)>,
}

impl LinkOptions {
    /// Create empty options.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Override the link's label (used by [`Navigation::link_to_delete`]).
    #[must_use]
    pub fn name(mut self, name: &str) -> Self {
        self.name = Some(name.to_string());
        self
    }

    /// CSS class prepended to the fixed `icon_link with-tip` classes.
    #[must_use]
    pub fn class(mut self, class: &str) -> Self {
        self.class = Some(class.to_string());
        self
    }

    /// Drop the visible label; it moves to the `title` attribute instead.
    #[must_use]
    pub const fn no_text(mut self) -> Self {
        self.no_text = true;
        self
    }

    /// Explicit `title` attribute.
    #[must_use]
    pub fn title(mut self, title: &str) -> Self {
        self.title = Some(title.to_string());
        self
    }

    /// Add a `data-` attribute.
    #[must_use]
    pub fn data(mut self, key: &str, value: &str) -> Self {
        self.data.push((key.to_string(), value.to_string()));
        self
    }
}

/// A `<span>` carrying a glyphicon.
pub(super) fn glyph(icon_name: &str) -> String {
    let mut attrs = Attrs::new();
    attrs.set("class", format!("glyphicon glyphicon-{icon_name}"));
    html::content_tag("span", "", &attrs)
}

/// An `<i>` element for a raw icon class, or nothing.
#[must_use]
pub fn icon(icon_name: Option<&str>) -> String {
    icon_name.map_or_else(String::new, |name| {
        let mut attrs = Attrs::new();
        attrs.set("class", name);
        html::content_tag("i", "", &attrs)
    })
}

impl Navigation<'_> {
    /// A glyph-prefixed link.
    ///
    /// The visible text is wrapped in `<span class="text">`; with
    /// [`LinkOptions::no_text`] the label becomes the link's `title` and the
    /// class gains `no-text`.
    #[must_use]
    pub fn link_to_with_icon(
        &self,
        icon_name: &str,
        text: &str,
        url: &str,
        options: &LinkOptions,
    ) -> String {
        let mut attrs = Attrs::new();
        if let Some(class) = &options.class {
            attrs.append_class(class);
        }
        attrs.append_class("icon_link with-tip");
        if options.no_text {
            attrs.append_class("no-text");
            attrs.set("title", text);
        }
        if let Some(title) = &options.title {
            attrs.set("title", title.clone());
        }
        for (key, value) in &options.data {
            attrs.data(key, value.clone());
        }

        let mut body = glyph(icon_name);
        if !options.no_text {
            body.push(' ');
            let mut text_attrs = Attrs::new();
            text_attrs.set("class", "text");
            body.push_str(&html::content_tag("span", &html::escape(text), &text_attrs));
        }
        html::link_to_raw(&body, url, &attrs)
    }

    /// Edit button for a resource at `url`.
    ///
    /// `options` pass through to the underlying icon link (`no_text`,
    /// `title`, extra `data-` attributes); the class and `data-action` are
    /// fixed.
    #[must_use]
    pub fn link_to_edit(&self, url: &str, options: &LinkOptions) -> String {
        self.action_link("pencil", "edit", "edit", url, options)
    }

    /// Clone button for a resource; posts nowhere itself, the host wires
    /// `data-action="clone"` to its duplication endpoint.
    #[must_use]
    pub fn link_to_clone(&self, url: &str, options: &LinkOptions) -> String {
        self.action_link("share", "clone", "clone", url, options)
    }

    /// New-record button.
    #[must_use]
    pub fn link_to_new(&self, url: &str) -> String {
        self.action_link("plus", "new", "new", url, &LinkOptions::new())
    }

    /// Delete button for a resource at `url`.
    ///
    /// Always carries a `data-confirm` prompt; [`LinkOptions::name`]
    /// overrides the label.
    #[must_use]
    pub fn link_to_delete(&self, url: &str, options: &LinkOptions) -> String {
        let label = options
            .name
            .clone()
            .unwrap_or_else(|| self.labels.display("delete"));
        let confirm = self
            .labels
            .lookup("are_you_sure")
            .unwrap_or_else(|| "Are you sure?".to_string());
        let options = options
            .clone()
            .class(&format!("{ACTION_LINK_CLASS} delete-resource"))
            .data("confirm", &confirm)
            .data("action", "remove");
        self.link_to_with_icon("remove", &label, url, &options)
    }

    fn action_link(
        &self,
        icon_name: &str,
        label_key: &str,
        action: &str,
        url: &str,
        extra: &LinkOptions,
    ) -> String {
        let options = extra.clone().class(ACTION_LINK_CLASS).data("action", action);
        self.link_to_with_icon(icon_name, &self.labels.display(label_key), url, &options)
    }
}

#[cfg(test)]
mod tests {
    use super::super::test_support::{AllowAll, ctx_at, registry, routes};
    use super::*;
    use crate::labels::{NoLabels, StaticLabels};

    fn with_nav<R>(f: impl FnOnce(&Navigation<'_>) -> R) -> R {
        let registry = registry();
        let routes = routes();
        let ctx = ctx_at("/admin/products", "products");
        let nav = Navigation::new(&registry, &routes, &AllowAll, &NoLabels, &ctx);
        f(&nav)
    }

    #[test]
    fn test_link_to_edit() {
        let html = with_nav(|nav| nav.link_to_edit("/admin/products/5/edit", &LinkOptions::new()));
        assert!(html.starts_with(r#"<a href="/admin/products/5/edit""#));
        assert!(html.contains(r#"data-action="edit""#));
        assert!(html.contains("btn btn-default btn-sm icon_link with-tip"));
        assert!(html.contains("glyphicon-pencil"));
        assert!(html.contains(r#"<span class="text">Edit</span>"#));
    }

    #[test]
    fn test_link_to_edit_options_pass_through() {
        let html = with_nav(|nav| {
            nav.link_to_edit(
                "/admin/products/5/edit",
                &LinkOptions::new().no_text().data("toggle", "tooltip"),
            )
        });
        assert!(html.contains("no-text"));
        assert!(html.contains(r#"title="Edit""#));
        assert!(html.contains(r#"data-toggle="tooltip""#));
        // The fixed action identifier survives alongside caller data.
        assert!(html.contains(r#"data-action="edit""#));
        assert!(!html.contains(r#"<span class="text">"#));
    }

    #[test]
    fn test_link_to_clone() {
        let html = with_nav(|nav| nav.link_to_clone("/admin/products/5/clone", &LinkOptions::new()));
        assert!(html.contains(r#"data-action="clone""#));
        assert!(html.contains("glyphicon-share"));
    }

    #[test]
    fn test_link_to_clone_no_text_option() {
        let html = with_nav(|nav| {
            nav.link_to_clone("/admin/products/5/clone", &LinkOptions::new().no_text())
        });
        assert!(html.contains("no-text"));
        assert!(html.contains(r#"title="Clone""#));
    }

    #[test]
    fn test_link_to_new() {
        let html = with_nav(|nav| nav.link_to_new("/admin/products/new"));
        assert!(html.contains(r#"data-action="new""#));
        assert!(html.contains("glyphicon-plus"));
    }

    #[test]
    fn test_link_to_delete_always_confirms() {
        let html = with_nav(|nav| nav.link_to_delete("/admin/products/5", &LinkOptions::new()));
        assert!(html.contains(r#"data-confirm="Are you sure?""#));
        assert!(html.contains(r#"data-action="remove""#));
        assert!(html.contains("delete-resource"));
        assert!(html.contains(r#"<span class="text">Delete</span>"#));
    }

    #[test]
    fn test_link_to_delete_custom_name_and_translated_confirm() {
        let registry = registry();
        let routes = routes();
        let ctx = ctx_at("/admin/products", "products");
        let labels: StaticLabels = [("are_you_sure", "Sicher?")].into_iter().collect();
        let nav = Navigation::new(&registry, &routes, &AllowAll, &labels, &ctx);
        let html =
            nav.link_to_delete("/admin/products/5", &LinkOptions::new().name("Remove product"));
        assert!(html.contains(r#"data-confirm="Sicher?""#));
        assert!(html.contains(r#"<span class="text">Remove product</span>"#));
    }

    #[test]
    fn test_link_to_with_icon_no_text() {
        let html = with_nav(|nav| {
            nav.link_to_with_icon(
                "pencil",
                "Edit",
                "/admin/products/5/edit",
                &LinkOptions::new().no_text(),
            )
        });
        assert!(html.contains("no-text"));
        assert!(html.contains(r#"title="Edit""#));
        assert!(!html.contains(r#"<span class="text">"#));
    }

    #[test]
    fn test_icon_helper() {
        assert_eq!(icon(Some("fa fa-truck")), r#"<i class="fa fa-truck"></i>"#);
        assert_eq!(icon(None), "");
    }
}
