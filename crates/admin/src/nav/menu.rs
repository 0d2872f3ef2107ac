//! Configuration menu rows and sidebar items.

use crate::html::{self, Attrs};
use crate::labels::singularize;

use super::Navigation;

impl Navigation<'_> {
    /// A table row for the configurations index: a link cell and a
    /// description cell.
    #[must_use]
    pub fn configurations_menu_item(&self, text: &str, url: &str, description: &str) -> String {
        let link = html::link_to(text, url, &Attrs::new());
        format!(
            "<tr><td>{link}</td><td>{}</td></tr>",
            html::escape(description)
        )
    }

    /// A sidebar item for the configurations section, marked `active` when
    /// the URL points at the current controller's index or edit page.
    #[must_use]
    pub fn configurations_sidebar_menu_item(&self, text: &str, url: &str) -> String {
        let controller = self.ctx.current_controller.as_str();
        let active = url.ends_with(controller)
            || url.ends_with(&format!("{controller}/edit"))
            || url.ends_with(&format!("{}/edit", singularize(controller)));

        let mut attrs = Attrs::new();
        if active {
            attrs.append_class("active");
        }
        html::content_tag("li", &html::link_to(text, url, &Attrs::new()), &attrs)
    }
}
