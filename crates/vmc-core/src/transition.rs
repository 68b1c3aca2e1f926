//! Pure status transition rules.
//!
//! The two toggles are independent two-way switches rather than one
//! three-way cycle:
//!
//! | current     | toggle-available | toggle-repairing |
//! |-------------|------------------|------------------|
//! | available   | checked-out      | repairing        |
//! | checked-out | available        | repairing        |
//! | repairing   | available        | available        |
//!
//! Repair takes precedence over a checkout, and leaving repair always
//! lands on available, never back on checked-out.

use chrono::NaiveDate;

use vmc_model::{Entry, State, Status};

use crate::action::Action;

/// Current status of `slug`; available when there is no entry.
pub fn status_of(state: &State, slug: &str) -> Status {
    state.get(slug).map_or(Status::Available, Entry::status)
}

/// Set the status of `slug`, dated today.
///
/// See [`set_status_on`].
pub fn set_status(state: &mut State, slug: &str, status: Status) {
    set_status_on(state, slug, status, today());
}

/// Set the status of `slug` as of `date`.
///
/// Available removes the entry; any other status replaces it. The caller
/// persists the state.
pub fn set_status_on(state: &mut State, slug: &str, status: Status, date: NaiveDate) {
    match Entry::new(status, date) {
        Some(entry) => {
            state.insert(slug, entry);
        }
        None => {
            state.remove(slug);
        }
    }
}

/// Next status after `action`.
pub fn apply_action(current: Status, action: Action) -> Status {
    match (current, action) {
        (Status::Available, Action::ToggleAvailable) => Status::CheckedOut,
        (Status::CheckedOut, Action::ToggleAvailable) => Status::Available,
        (Status::Repairing, Action::ToggleAvailable) => Status::Available,
        (Status::Available | Status::CheckedOut, Action::ToggleRepairing) => Status::Repairing,
        (Status::Repairing, Action::ToggleRepairing) => Status::Available,
    }
}

/// Next status for an action given by name; unknown names change nothing.
pub fn apply_raw_action(current: Status, action: &str) -> Status {
    match action.parse::<Action>() {
        Ok(action) => apply_action(current, action),
        Err(_) => {
            tracing::debug!(action, "Ignoring unrecognized action");
            current
        }
    }
}

/// Next status for the single legacy checkout/return control.
///
/// The control only moves between available and checked-out and does
/// nothing while the machine is being repaired.
pub fn legacy_checkout(current: Status) -> Status {
    match current {
        Status::Repairing => Status::Repairing,
        other => apply_action(other, Action::ToggleAvailable),
    }
}

/// Today's calendar date in UTC, the day stored entries are stamped with.
pub fn today() -> NaiveDate {
    chrono::Utc::now().date_naive()
}
