//! User actions on a machine's status.

use std::fmt;
use std::str::FromStr;

/// One of the two independent status toggles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    /// Check out or return the machine.
    ToggleAvailable,
    /// Send the machine to repair or mark it repaired.
    ToggleRepairing,
}

impl Action {
    pub const ALL: [Action; 2] = [Action::ToggleAvailable, Action::ToggleRepairing];

    pub fn as_str(&self) -> &'static str {
        match self {
            Action::ToggleAvailable => "toggle-available",
            Action::ToggleRepairing => "toggle-repairing",
        }
    }

    /// Toggle-kind discriminator carried by toggle controls.
    pub fn toggle_kind(&self) -> &'static str {
        match self {
            Action::ToggleAvailable => "available",
            Action::ToggleRepairing => "repairing",
        }
    }

    /// Resolve a control's toggle kind, `None` when unrecognized.
    pub fn from_toggle_kind(kind: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|action| action.toggle_kind() == kind)
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Action {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|action| action.as_str() == s)
            .ok_or_else(|| format!("Unknown action: {s}"))
    }
}
