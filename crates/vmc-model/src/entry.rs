//! Persisted record of a machine that is not available.

use chrono::NaiveDate;
use serde::Serialize;

use crate::status::Status;

/// Status of a non-available machine and the day it entered that status.
///
/// An entry never holds [`Status::Available`]: availability is expressed by
/// the absence of an entry, which keeps the stored form minimal and makes
/// "available" the outcome of any dropped or malformed record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Entry {
    status: Status,
    date: NaiveDate,
}

impl Entry {
    /// Create an entry, or `None` when `status` is available.
    pub fn new(status: Status, date: NaiveDate) -> Option<Self> {
        status.is_stored().then_some(Self { status, date })
    }

    pub fn status(&self) -> Status {
        self.status
    }

    /// Calendar date the status was set (serialized as `YYYY-MM-DD`).
    pub fn date(&self) -> NaiveDate {
        self.date
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 3, 1).unwrap()
    }

    #[test]
    fn available_has_no_entry() {
        assert!(Entry::new(Status::Available, day()).is_none());
    }

    #[test]
    fn serializes_status_and_iso_date() {
        let entry = Entry::new(Status::Repairing, day()).unwrap();
        let json = serde_json::to_string(&entry).unwrap();
        assert_eq!(json, r#"{"status":"repairing","date":"2024-03-01"}"#);
    }
}
