//! Page skeletons satisfying the catalog and detail markup contract.
//!
//! Site generation proper happens elsewhere; these builders produce the
//! minimum markup the renderer and controller bind to, with initial
//! statuses supplied by the caller's status query.

use serde::{Deserialize, Serialize};
use vmc_core::Action;
use vmc_model::Status;

use crate::detail::ControlStyle;
use crate::dom::{
    CARD_CLASS, CHECKOUT_CLASS, DISABLED_ATTR, Document, Element, PRESSED_ATTR, SLUG_ATTR,
    STATUS_AREA_CLASS, STATUS_ATTR, STATUS_CLASS, TOGGLE_ATTR, TOGGLE_CLASS,
};
use crate::presentation::{legacy_checkout_view, toggle_view};

/// A catalog machine.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Machine {
    pub slug: String,
    pub name: String,
}

impl Machine {
    pub fn new(slug: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            slug: slug.into(),
            name: name.into(),
        }
    }
}

/// Catalog section: one card per machine.
pub fn catalog_section(machines: &[Machine], status_of: impl Fn(&str) -> Status) -> Element {
    machines.iter().fold(
        Element::new("section").with_class("catalog"),
        |section, machine| {
            section.with_child(
                Element::new("article")
                    .with_class(CARD_CLASS)
                    .with_attr(SLUG_ATTR, machine.slug.as_str())
                    .with_child(Element::new("h2").with_text(machine.name.as_str()))
                    .with_child(status_display(status_of(&machine.slug))),
            )
        },
    )
}

/// Detail section for one machine.
pub fn detail_section(machine: &Machine, status: Status, style: ControlStyle) -> Element {
    let mut area = Element::new("div")
        .with_class(STATUS_AREA_CLASS)
        .with_child(status_display(status));
    match style {
        ControlStyle::Toggles => {
            for action in Action::ALL {
                let view = toggle_view(action, status);
                let mut button = Element::new("button")
                    .with_class(TOGGLE_CLASS)
                    .with_attr(SLUG_ATTR, machine.slug.as_str())
                    .with_attr(TOGGLE_ATTR, action.toggle_kind())
                    .with_attr(PRESSED_ATTR, view.pressed.unwrap_or(false).to_string())
                    .with_text(view.label);
                if view.disabled {
                    button = button.with_attr(DISABLED_ATTR, "");
                }
                area = area.with_child(button);
            }
        }
        ControlStyle::Legacy => {
            let view = legacy_checkout_view(status);
            let mut button = Element::new("button")
                .with_class(CHECKOUT_CLASS)
                .with_attr(SLUG_ATTR, machine.slug.as_str())
                .with_text(view.label);
            if view.disabled {
                button = button.with_attr(DISABLED_ATTR, "");
            }
            area = area.with_child(button);
        }
    }
    Element::new("section")
        .with_class("machine")
        .with_child(Element::new("h1").with_text(machine.name.as_str()))
        .with_child(area)
}

/// Wrap sections into a page body.
pub fn page(sections: impl IntoIterator<Item = Element>) -> Document {
    Document::new(
        sections
            .into_iter()
            .fold(Element::new("body"), Element::with_child),
    )
}

fn status_display(status: Status) -> Element {
    Element::new("p")
        .with_class(STATUS_CLASS)
        .with_attr(STATUS_ATTR, status.as_str())
        .with_text(status.label())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalog_markup() {
        let machines = [Machine::new("apple-iie", "Apple IIe")];
        let doc = page([catalog_section(&machines, |_| Status::CheckedOut)]);
        assert_eq!(
            doc.to_html(),
            "<body><section class=\"catalog\"><article class=\"card\" data-slug=\"apple-iie\">\
             <h2>Apple IIe</h2>\
             <p class=\"status\" data-status=\"checked-out\">Checked out</p>\
             </article></section></body>"
        );
    }

    #[test]
    fn legacy_detail_markup_is_disabled_during_repair() {
        let machine = Machine::new("pet-2001", "Commodore PET 2001");
        let doc = page([detail_section(&machine, Status::Repairing, ControlStyle::Legacy)]);
        assert!(doc.to_html().contains(
            "<button class=\"checkout-btn\" data-slug=\"pet-2001\" disabled>Repairing</button>"
        ));
    }
}
