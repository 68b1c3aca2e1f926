//! Control presentation derived from a machine's status.
//!
//! Nothing here is stored: every label and flag follows from the current
//! [`Status`] alone.

use vmc_core::Action;
use vmc_model::Status;

/// How a single control should look.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ButtonView {
    pub label: &'static str,
    /// Pressed flag, `None` for controls without a pressed state.
    pub pressed: Option<bool>,
    pub disabled: bool,
}

/// Presentation of the toggle bound to `action`.
pub fn toggle_view(action: Action, status: Status) -> ButtonView {
    match action {
        Action::ToggleAvailable => available_toggle_view(status),
        Action::ToggleRepairing => repair_toggle_view(status),
    }
}

/// "Check Out" / "Return", disabled while repairing.
pub fn available_toggle_view(status: Status) -> ButtonView {
    let checked_out = status == Status::CheckedOut;
    ButtonView {
        label: if checked_out { "Return" } else { "Check Out" },
        pressed: Some(checked_out),
        disabled: status == Status::Repairing,
    }
}

/// "Mark As Repairing" / "Repaired", disabled while checked out.
pub fn repair_toggle_view(status: Status) -> ButtonView {
    let repairing = status == Status::Repairing;
    ButtonView {
        label: if repairing { "Repaired" } else { "Mark As Repairing" },
        pressed: Some(repairing),
        disabled: status == Status::CheckedOut,
    }
}

/// Single checkout/return control used by older detail pages.
pub fn legacy_checkout_view(status: Status) -> ButtonView {
    let label = match status {
        Status::Repairing => "Repairing",
        Status::CheckedOut => "Return",
        Status::Available => "Check out",
    };
    ButtonView {
        label,
        pressed: None,
        disabled: status == Status::Repairing,
    }
}
