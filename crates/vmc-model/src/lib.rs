//! Data model for the vintage machine catalog.
//!
//! - [`Status`]: the three legal availability statuses
//! - [`Entry`]: persisted record of a non-available machine
//! - [`State`]: slug to entry mapping, the single source of truth

pub mod entry;
pub mod state;
pub mod status;

pub use entry::Entry;
pub use state::State;
pub use status::{Status, format_status, normalize_status};

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn state_serializes_as_plain_mapping() {
        let date = NaiveDate::from_ymd_opt(2024, 1, 15).unwrap();
        let state: State = [
            ("zx-spectrum", Entry::new(Status::Repairing, date).unwrap()),
            ("apple-iie", Entry::new(Status::CheckedOut, date).unwrap()),
        ]
        .into_iter()
        .collect();
        let json = serde_json::to_string(&state).expect("serialize state");
        assert_eq!(
            json,
            r#"{"apple-iie":{"status":"checked-out","date":"2024-01-15"},"zx-spectrum":{"status":"repairing","date":"2024-01-15"}}"#
        );
    }
}
