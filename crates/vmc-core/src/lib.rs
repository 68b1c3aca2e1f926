//! Status transition engine.
//!
//! Everything here is pure: functions take the current [`vmc_model::State`]
//! or [`vmc_model::Status`] and compute the next one. Loading and saving is
//! the caller's job.

pub mod action;
pub mod transition;

pub use action::Action;
pub use transition::{
    apply_action, apply_raw_action, legacy_checkout, set_status, set_status_on, status_of, today,
};
