//! Availability status of a catalog machine.
//!
//! Exactly three statuses exist. Anything that is not one of the three
//! canonical spellings normalizes to [`Status::Available`], so malformed
//! input always lands on the safe default.

use serde::Serialize;
use std::fmt;
use std::str::FromStr;

/// Availability status of a single machine.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Status {
    /// On the shelf. Never stored explicitly.
    #[default]
    Available,
    /// Lent out to a visitor.
    CheckedOut,
    /// Out of service for repair.
    Repairing,
}

impl Status {
    /// All statuses, in display order.
    pub const ALL: [Status; 3] = [Status::Available, Status::CheckedOut, Status::Repairing];

    /// Returns the machine-readable value used in storage and DOM attributes.
    pub fn as_str(&self) -> &'static str {
        match self {
            Status::Available => "available",
            Status::CheckedOut => "checked-out",
            Status::Repairing => "repairing",
        }
    }

    /// Returns the human label shown in status displays.
    pub fn label(&self) -> &'static str {
        match self {
            Status::Available => "Available",
            Status::CheckedOut => "Checked out",
            Status::Repairing => "Repairing",
        }
    }

    /// Returns true for statuses that must be persisted as an entry.
    pub fn is_stored(&self) -> bool {
        !matches!(self, Status::Available)
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Status {
    type Err = String;

    /// Strict parse of the canonical spelling. Use [`normalize_status`]
    /// where unknown values should fall back to available.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "available" => Ok(Status::Available),
            "checked-out" => Ok(Status::CheckedOut),
            "repairing" => Ok(Status::Repairing),
            _ => Err(format!("Unknown status: {s}")),
        }
    }
}

/// Map a raw value onto a legal status.
///
/// `None`, the empty string, and anything outside the three canonical
/// spellings yield [`Status::Available`]. Matching is exact: `"Repairing"`
/// is not a legal value.
pub fn normalize_status(raw: Option<&str>) -> Status {
    raw.and_then(|value| value.parse().ok()).unwrap_or_default()
}

/// Display label for a status.
pub fn format_status(status: Status) -> &'static str {
    status.label()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalizes_legal_values_unchanged() {
        for status in Status::ALL {
            assert_eq!(normalize_status(Some(status.as_str())), status);
        }
    }

    #[test]
    fn normalizes_everything_else_to_available() {
        for raw in [None, Some(""), Some("foo"), Some("Repairing"), Some(" checked-out")] {
            assert_eq!(normalize_status(raw), Status::Available, "{raw:?}");
        }
    }

    #[test]
    fn labels() {
        assert_eq!(format_status(Status::Available), "Available");
        assert_eq!(format_status(Status::CheckedOut), "Checked out");
        assert_eq!(format_status(Status::Repairing), "Repairing");
    }

    #[test]
    fn serde_uses_kebab_case() {
        let json = serde_json::to_string(&Status::CheckedOut).unwrap();
        assert_eq!(json, "\"checked-out\"");
    }
}
