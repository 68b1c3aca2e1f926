//! Input adapter: page events to status commands.

use vmc_core::Action;

use crate::dom::{CHECKOUT_CLASS, Document, Element, NodeId, TOGGLE_ATTR, TOGGLE_CLASS};

/// Keys relevant to control activation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Enter,
    Space,
    Other,
}

impl Key {
    /// True for keys that press a focused button.
    pub fn activates(self) -> bool {
        matches!(self, Key::Enter | Key::Space)
    }
}

/// Events delivered by the page's event loop.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// The document finished loading.
    DomContentLoaded,
    /// A click on the element at the given id.
    Click(NodeId),
    /// A key press while the element at the given id has focus.
    KeyDown(NodeId, Key),
}

/// Which control produced a command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Trigger {
    Toggle(Action),
    LegacyCheckout,
}

/// A status change requested for one machine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Command {
    pub slug: String,
    pub trigger: Trigger,
}

/// Resolve the command an event asks for.
///
/// Only clicks and activating keys on (or inside) a control that carries a
/// slug produce a command. Toggles with an unknown kind produce none. The
/// disabled flag is presentation only: the transition rules decide what a
/// toggle does in every status.
pub fn command_for(document: &Document, event: &Event) -> Option<Command> {
    let target = match event {
        Event::Click(target) => target,
        Event::KeyDown(target, key) if key.activates() => target,
        _ => return None,
    };
    let control_id = document.closest(target, is_control)?;
    let control = document.get(&control_id)?;
    let slug = control.slug()?.to_string();
    let trigger = if control.has_class(TOGGLE_CLASS) {
        Trigger::Toggle(Action::from_toggle_kind(control.attr(TOGGLE_ATTR)?)?)
    } else {
        Trigger::LegacyCheckout
    };
    Some(Command { slug, trigger })
}

pub(crate) fn is_control(element: &Element) -> bool {
    element.has_class(TOGGLE_CLASS) || element.has_class(CHECKOUT_CLASS)
}
