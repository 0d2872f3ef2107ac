//! Buttons and button-styled links.
//!
//! [`Navigation::button_link_to`] carries the one real branch here: a
//! non-GET, non-remote action cannot be a plain anchor, so it renders as a
//! small form with a method override and a submit button inside.

use serde::{Deserialize, Serialize};

use crate::html::{self, Attrs};
use crate::labels::singularize;

use super::Navigation;
use super::links::glyph;

/// HTTP method requested for a button-styled link.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LinkMethod {
    #[default]
    Get,
    Post,
    Put,
    Patch,
    Delete,
}

impl std::fmt::Display for LinkMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Get => write!(f, "get"),
            Self::Post => write!(f, "post"),
            Self::Put => write!(f, "put"),
            Self::Patch => write!(f, "patch"),
            Self::Delete => write!(f, "delete"),
        }
    }
}

/// Options for [`Navigation::button`].
#[derive(Debug, Clone, Default)]
pub struct ButtonOptions {
    class: Option<String>,
    data: Vec<(String, String)>,
}

impl ButtonOptions {
    /// Create empty options.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// CSS class appended to the fixed `btn btn-primary` classes.
    #[must_use]
    pub fn class(mut self, class: &str) -> Self {
        self.class = Some(class.to_string());
        self
    }

    /// Add a `data-` attribute.
    #[must_use]
    pub fn data(mut self, key: &str, value: &str) -> Self {
        self.data.push((key.to_string(), value.to_string()));
        self
    }
}

/// Options for [`Navigation::button_link_to`].
#[derive(Debug, Clone, Default)]
pub struct ButtonLinkOptions {
    method: LinkMethod,
    remote: bool,
    icon: Option<String>,
    class: Option<String>,
    data_update: Option<String>,
}

impl ButtonLinkOptions {
    /// Create empty options (GET, not remote).
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// HTTP method for the action.
    #[must_use]
    pub const fn method(mut self, method: LinkMethod) -> Self {
        self.method = method;
        self
    }

    /// Mark the action as an asynchronous (remote) request; keeps the anchor
    /// form even for non-GET methods.
    #[must_use]
    pub const fn remote(mut self) -> Self {
        self.remote = true;
        self
    }

    /// Prefix the label with a glyph icon.
    #[must_use]
    pub fn icon(mut self, icon: &str) -> Self {
        self.icon = Some(icon.to_string());
        self
    }

    /// CSS class appended to the base `btn` class (default `btn-default`).
    #[must_use]
    pub fn class(mut self, class: &str) -> Self {
        self.class = Some(class.to_string());
        self
    }

    /// Explicit `data-update` target for remote responses.
    #[must_use]
    pub fn data_update(mut self, target: &str) -> Self {
        self.data_update = Some(target.to_string());
        self
    }
}

impl Navigation<'_> {
    /// A primary-styled `<button>`, optionally glyph-prefixed.
    ///
    /// `button_type` defaults to `submit`.
    #[must_use]
    pub fn button(
        &self,
        text: &str,
        icon_name: Option<&str>,
        button_type: Option<&str>,
        options: &ButtonOptions,
    ) -> String {
        let mut attrs = Attrs::new();
        attrs.set("type", button_type.unwrap_or("submit"));
        attrs.append_class("btn btn-primary");
        if let Some(class) = &options.class {
            attrs.append_class(class);
        }
        for (key, value) in &options.data {
            attrs.data(key, value.clone());
        }

        let mut body = String::new();
        if let Some(icon_name) = icon_name {
            body.push_str(&glyph(icon_name));
            body.push(' ');
        }
        body.push_str(&html::escape(text));
        html::content_tag("button", &body, &attrs)
    }

    /// A button-styled action: an anchor, unless a non-GET method without the
    /// remote flag forces a form-based submission.
    #[must_use]
    pub fn button_link_to(&self, text: &str, url: &str, options: &ButtonLinkOptions) -> String {
        if options.method != LinkMethod::Get && !options.remote {
            let button = self.button(
                text,
                options.icon.as_deref(),
                None,
                &ButtonOptions {
                    class: options.class.clone(),
                    data: Vec::new(),
                },
            );
            return form_tag(url, options.method, &button);
        }

        let mut attrs = Attrs::new();
        attrs.append_class("btn");
        attrs.append_class(options.class.as_deref().unwrap_or("btn-default"));
        let update = options
            .data_update
            .clone()
            .or_else(|| options.remote.then(|| derive_data_update(url)).flatten());
        if let Some(target) = update {
            attrs.data("update", target);
        }

        let mut body = String::new();
        if let Some(icon_name) = &options.icon {
            body.push_str(&glyph(icon_name));
            body.push(' ');
        }
        body.push_str(&html::escape(text));
        html::link_to_raw(&body, url, &attrs)
    }
}

/// A form posting to `url`, with a `_method` override for methods the
/// browser cannot submit natively.
fn form_tag(url: &str, method: LinkMethod, inner_html: &str) -> String {
    let mut attrs = Attrs::new();
    attrs.set("action", url);
    attrs.set("method", "post");
    let mut body = String::new();
    if method != LinkMethod::Post {
        let mut hidden = Attrs::new();
        hidden.set("type", "hidden");
        hidden.set("name", "_method");
        hidden.set("value", method.to_string());
        body.push_str(&format!("<input{}>", hidden.render()));
    }
    body.push_str(inner_html);
    html::content_tag("form", &body, &attrs)
}

/// Derive a `data-update` target from the URL's last two path segments:
/// `/admin/products/new` becomes `new_product`.
fn derive_data_update(url: &str) -> Option<String> {
    let mut segments = url.split('/').filter(|s| !s.is_empty()).rev();
    let action = segments.next()?;
    let object = segments.next()?;
    Some(format!("{action}_{}", singularize(object)))
}
