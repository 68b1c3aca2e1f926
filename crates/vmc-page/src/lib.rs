//! Page surfaces for machine statuses.
//!
//! - [`dom`]: the document tree the surfaces render into
//! - [`catalog`]: status projection onto catalog cards
//! - [`detail`]: the detail page controller
//! - [`input`]: events to commands
//! - [`page`]: bootstrap and event dispatch
//! - [`template`]: page skeletons

pub mod catalog;
pub mod detail;
pub mod dom;
pub mod input;
pub mod page;
pub mod presentation;
pub mod template;

pub use catalog::render_catalog;
pub use detail::{ControlStyle, DetailController, Outcome, Transition};
pub use dom::{Document, Element, NodeId};
pub use input::{Command, Event, Key, Trigger, command_for};
pub use page::Page;
pub use presentation::ButtonView;
pub use template::{Machine, catalog_section, detail_section, page};
