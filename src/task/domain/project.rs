//! Fixed project catalogue.
//!
//! Projects are a small predefined set used for filtering and display. They
//! are not created or deleted at runtime, so the catalogue is a static table.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifier of one of the predefined projects.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProjectId {
    /// Catch-all project for tasks without a more specific home.
    #[default]
    Inbox,
    /// Personal errands and chores.
    Personal,
    /// Work items.
    Work,
    /// Shopping lists.
    Shopping,
}

impl ProjectId {
    /// Returns the canonical storage representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Inbox => "inbox",
            Self::Personal => "personal",
            Self::Work => "work",
            Self::Shopping => "shopping",
        }
    }

    /// Parses a stored project identifier.
    ///
    /// Returns `None` for identifiers that are not part of the catalogue;
    /// callers loading legacy data fall back to [`ProjectId::Inbox`].
    #[must_use]
    pub fn from_storage(value: &str) -> Option<Self> {
        PROJECTS
            .iter()
            .map(|project| project.id)
            .find(|id| id.as_str().eq_ignore_ascii_case(value.trim()))
    }

    /// Returns the catalogue entry for this identifier.
    #[must_use]
    pub const fn project(self) -> &'static Project {
        match self {
            Self::Inbox => &INBOX,
            Self::Personal => &PERSONAL,
            Self::Work => &WORK,
            Self::Shopping => &SHOPPING,
        }
    }
}

impl fmt::Display for ProjectId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A named, coloured task category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Project {
    /// Project identifier.
    pub id: ProjectId,
    /// Display name.
    pub name: &'static str,
    /// Display colour as a `#rrggbb` hex string.
    pub color: &'static str,
}

impl Project {
    /// Returns every predefined project in display order.
    #[must_use]
    pub const fn all() -> &'static [Self] {
        &PROJECTS
    }
}

const INBOX: Project = Project {
    id: ProjectId::Inbox,
    name: "Inbox",
    color: "#808080",
};

const PERSONAL: Project = Project {
    id: ProjectId::Personal,
    name: "Personal",
    color: "#4a90d9",
};

const WORK: Project = Project {
    id: ProjectId::Work,
    name: "Work",
    color: "#e2574c",
};

const SHOPPING: Project = Project {
    id: ProjectId::Shopping,
    name: "Shopping",
    color: "#50b86c",
};

const PROJECTS: [Project; 4] = [INBOX, PERSONAL, WORK, SHOPPING];
