//! Conversion between [`State`] and its persisted JSON form.
//!
//! Persisted layout, one value under one key:
//!
//! ```text
//! { "<slug>": { "status": "checked-out" | "repairing", "date": "YYYY-MM-DD" } }
//! ```
//!
//! Decoding is lenient and never fails. A blob that is not a JSON object
//! decodes to an empty state. Within an object, each entry is decoded on
//! its own and a malformed one only makes its slug available. Entries in
//! the older `{ "checkedOut": true, "date": ... }` shape are read as
//! checked out.

use chrono::NaiveDate;
use serde_json::{Map, Value};

use vmc_model::{Entry, State, Status, normalize_status};

use crate::error::{PersistenceError, Result};

const DATE_FORMAT: &str = "%Y-%m-%d";

/// Serialize the full state.
pub fn encode_state(state: &State) -> Result<String> {
    serde_json::to_string(state).map_err(|source| PersistenceError::Serialization { source })
}

/// Decode a persisted blob, degrading anything unreadable to available.
pub fn decode_state(blob: &str) -> State {
    let value: Value = match serde_json::from_str(blob) {
        Ok(value) => value,
        Err(e) => {
            tracing::warn!("Stored statuses are not valid JSON, treating all as available: {}", e);
            return State::new();
        }
    };

    let Value::Object(entries) = value else {
        if !value.is_null() {
            tracing::warn!("Stored statuses are not a mapping, treating all as available");
        }
        return State::new();
    };

    entries
        .iter()
        .filter_map(|(slug, raw)| match decode_entry(raw) {
            Some(entry) => Some((slug.as_str(), entry)),
            None => {
                tracing::debug!(slug = %slug, "Stored entry dropped, machine is available");
                None
            }
        })
        .collect()
}

fn decode_entry(raw: &Value) -> Option<Entry> {
    let fields = raw.as_object()?;
    let status = entry_status(fields);
    let date = fields
        .get("date")
        .and_then(Value::as_str)
        .and_then(|date| NaiveDate::parse_from_str(date, DATE_FORMAT).ok())?;
    Entry::new(status, date)
}

fn entry_status(fields: &Map<String, Value>) -> Status {
    match fields.get("status") {
        Some(status) => normalize_status(status.as_str()),
        None if fields.get("checkedOut") == Some(&Value::Bool(true)) => Status::CheckedOut,
        None => Status::Available,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 5, d).unwrap()
    }

    #[test]
    fn decodes_current_shape() {
        let state = decode_state(
            r#"{"apple-iie":{"status":"checked-out","date":"2024-05-02"},
                "altair-8800":{"status":"repairing","date":"2024-05-03"}}"#,
        );
        assert_eq!(state.len(), 2);
        assert_eq!(state.get("apple-iie").unwrap().status(), Status::CheckedOut);
        assert_eq!(state.get("altair-8800").unwrap().date(), day(3));
    }

    #[test]
    fn migrates_legacy_checked_out_flag() {
        let state = decode_state(
            r#"{"pet-2001":{"checkedOut":true,"date":"2024-05-01"},
                "kim-1":{"checkedOut":false,"date":"2024-05-01"}}"#,
        );
        assert_eq!(state.get("pet-2001").unwrap().status(), Status::CheckedOut);
        assert!(!state.contains("kim-1"));
    }

    #[test]
    fn explicit_status_wins_over_legacy_flag() {
        let state = decode_state(r#"{"pet-2001":{"status":"bogus","checkedOut":true,"date":"2024-05-01"}}"#);
        assert!(state.is_empty());
    }

    #[test]
    fn malformed_entries_only_drop_themselves() {
        let state = decode_state(
            r#"{"ok":{"status":"repairing","date":"2024-05-04"},
                "unknown":{"status":"lost","date":"2024-05-04"},
                "available":{"status":"available","date":"2024-05-04"},
                "no-date":{"status":"repairing"},
                "bad-date":{"status":"repairing","date":"May 4th"},
                "scalar":"repairing",
                "null":null}"#,
        );
        assert_eq!(state.len(), 1);
        assert_eq!(state.get("ok").unwrap().date(), day(4));
    }

    #[test]
    fn unreadable_blobs_decode_empty() {
        for blob in ["", "not json", "{", "null", "[]", "\"checked-out\"", "42"] {
            assert!(decode_state(blob).is_empty(), "{blob:?}");
        }
    }

    #[test]
    fn encode_writes_current_shape() {
        let mut state = State::new();
        state.insert("pet-2001", Entry::new(Status::CheckedOut, day(1)).unwrap());
        let blob = encode_state(&state).unwrap();
        assert_eq!(blob, r#"{"pet-2001":{"status":"checked-out","date":"2024-05-01"}}"#);
    }
}
