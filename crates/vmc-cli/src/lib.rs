//! CLI library components for the vintage machine catalog.

pub mod config;
pub mod logging;
pub mod session;
