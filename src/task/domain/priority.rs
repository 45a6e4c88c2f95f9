//! Task priority levels.

use super::TaskDomainError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Urgency of a task, ordered from most to least urgent.
///
/// The numeric value doubles as the persisted representation and as the sort
/// key: `1` sorts before `4`.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(try_from = "u8", into = "u8")]
pub enum Priority {
    /// Priority 1.
    Urgent = 1,
    /// Priority 2.
    High = 2,
    /// Priority 3.
    Medium = 3,
    /// Priority 4, used when nothing else is chosen.
    #[default]
    Low = 4,
}

impl Priority {
    /// All priorities from most to least urgent.
    pub const ALL: [Self; 4] = [Self::Urgent, Self::High, Self::Medium, Self::Low];

    /// Returns the numeric level (`1..=4`).
    #[must_use]
    pub const fn value(self) -> u8 {
        self as u8
    }

    /// Looks up a priority by numeric level.
    #[must_use]
    pub const fn from_value(value: u8) -> Option<Self> {
        match value {
            1 => Some(Self::Urgent),
            2 => Some(Self::High),
            3 => Some(Self::Medium),
            4 => Some(Self::Low),
            _ => None,
        }
    }

    /// Returns the short label shown next to a task.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Urgent => "P1",
            Self::High => "P2",
            Self::Medium => "P3",
            Self::Low => "P4",
        }
    }
}

impl TryFrom<u8> for Priority {
    type Error = TaskDomainError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::from_value(value).ok_or(TaskDomainError::InvalidPriority(value))
    }
}

impl From<Priority> for u8 {
    fn from(priority: Priority) -> Self {
        priority.value()
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
