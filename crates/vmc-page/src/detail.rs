//! Detail page controller.
//!
//! Binds to the single machine whose controls appear on the page, projects
//! its status onto those controls, and turns commands into persisted
//! transitions.

use vmc_core::{Action, apply_action, legacy_checkout, set_status, status_of};
use vmc_model::{State, Status};
use vmc_persistence::{StateStore, StorageBackend};

use crate::catalog::{render_catalog, write_status};
use crate::dom::{
    CARD_CLASS, CHECKOUT_CLASS, DISABLED_ATTR, Document, Element, NodeId, PRESSED_ATTR,
    STATUS_CLASS, TOGGLE_ATTR, TOGGLE_CLASS,
};
use crate::input::{Command, Trigger};
use crate::presentation::{ButtonView, legacy_checkout_view, toggle_view};

/// Which kind of controls the page carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControlStyle {
    /// Independent available and repairing toggles.
    Toggles,
    /// One checkout/return button.
    Legacy,
}

/// A status change that was applied and saved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transition {
    pub slug: String,
    pub from: Status,
    pub to: Status,
}

/// Result of handling one command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// The state was updated, saved, and re-rendered.
    Applied(Transition),
    /// The command did not apply: another machine, or the legacy control
    /// pressed during repair.
    Ignored,
    /// The new state could not be saved; the page was left as it was.
    SaveFailed,
}

/// Controller for one machine's detail controls.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetailController {
    slug: String,
    style: ControlStyle,
}

impl DetailController {
    /// Bind to the machine named by the page's first toggle, or failing
    /// that its first legacy checkout control.
    ///
    /// Returns `None` on pages without detail controls.
    pub fn discover(document: &Document) -> Option<Self> {
        let bound = |class: &str| {
            document
                .select(|e| e.has_class(class) && e.slug().is_some())
                .first()
                .and_then(|id| document.get(id))
                .and_then(Element::slug)
                .map(str::to_owned)
        };
        if let Some(slug) = bound(TOGGLE_CLASS) {
            return Some(Self::new(slug, ControlStyle::Toggles));
        }
        bound(CHECKOUT_CLASS).map(|slug| Self::new(slug, ControlStyle::Legacy))
    }

    pub fn new(slug: impl Into<String>, style: ControlStyle) -> Self {
        Self {
            slug: slug.into(),
            style,
        }
    }

    pub fn slug(&self) -> &str {
        &self.slug
    }

    pub fn style(&self) -> ControlStyle {
        self.style
    }

    /// Project `status` onto this machine's controls and status display.
    pub fn render(&self, document: &mut Document, status: Status) {
        for id in self.controls(document, TOGGLE_CLASS) {
            let action = document
                .get(&id)
                .and_then(|e| e.attr(TOGGLE_ATTR))
                .and_then(Action::from_toggle_kind);
            if let Some(action) = action {
                apply_view(document, &id, toggle_view(action, status));
            }
        }
        for id in self.controls(document, CHECKOUT_CLASS) {
            apply_view(document, &id, legacy_checkout_view(status));
        }
        if let Some(display) = detail_status_display(document) {
            write_status(document, &display, status);
        }
    }

    /// Apply `command`: reload, transition, save, then re-render the detail
    /// controls and any catalog cards on the page.
    ///
    /// A failed save is logged and leaves the document untouched.
    pub fn handle<B: StorageBackend>(
        &self,
        document: &mut Document,
        store: &StateStore<B>,
        command: &Command,
    ) -> Outcome {
        if command.slug != self.slug {
            tracing::debug!(slug = %command.slug, bound = %self.slug, "Command for another machine");
            return Outcome::Ignored;
        }

        let mut state = store.load();
        let from = status_of(&state, &self.slug);
        let (control, to) = match command.trigger {
            Trigger::Toggle(action) => (action.as_str(), apply_action(from, action)),
            Trigger::LegacyCheckout => ("checkout", legacy_checkout(from)),
        };
        if to == from {
            tracing::debug!(slug = %self.slug, control, "Checkout control is inactive during repair");
            return Outcome::Ignored;
        }

        set_status(&mut state, &self.slug, to);
        if let Err(e) = store.save(&state) {
            tracing::error!(slug = %self.slug, control, "Failed to save status: {}", e);
            return Outcome::SaveFailed;
        }
        tracing::info!(slug = %self.slug, control, %from, %to, "Status changed");

        self.project(document, &state);
        Outcome::Applied(Transition {
            slug: self.slug.clone(),
            from,
            to,
        })
    }

    /// Re-render both surfaces from `state`.
    pub fn project(&self, document: &mut Document, state: &State) {
        self.render(document, status_of(state, &self.slug));
        render_catalog(document, state);
    }

    fn controls(&self, document: &Document, class: &str) -> Vec<NodeId> {
        document.select(|e| e.has_class(class) && e.slug() == Some(self.slug.as_str()))
    }
}

fn apply_view(document: &mut Document, id: &NodeId, view: ButtonView) {
    let Some(element) = document.get_mut(id) else {
        return;
    };
    element.set_text(view.label);
    match view.pressed {
        Some(pressed) => element.set_attr(PRESSED_ATTR, pressed.to_string()),
        None => element.remove_attr(PRESSED_ATTR),
    }
    element.toggle_attr(DISABLED_ATTR, view.disabled);
}

/// The first status display that is not part of a catalog card.
fn detail_status_display(document: &Document) -> Option<NodeId> {
    let cards = document.select_class(CARD_CLASS);
    document
        .select_class(STATUS_CLASS)
        .into_iter()
        .find(|id| !cards.iter().any(|card| id.is_descendant_of(card)))
}
