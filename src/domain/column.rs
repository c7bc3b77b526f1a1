use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

/// One of the three fixed lanes of the board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ColumnKey {
    ToDo,
    OnProgress,
    Completed,
}

impl ColumnKey {
    /// All columns in display order
    pub const ALL: [ColumnKey; 3] = [Self::ToDo, Self::OnProgress, Self::Completed];

    /// Key used in persisted snapshots and drag payloads
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::ToDo => "toDo",
            Self::OnProgress => "onProgress",
            Self::Completed => "completed",
        }
    }

    /// Header label shown above the column
    pub fn label(&self) -> &'static str {
        match self {
            Self::ToDo => "To Do",
            Self::OnProgress => "On Progress",
            Self::Completed => "Done",
        }
    }

    /// Accent colour of the column marker (hex)
    pub fn accent(&self) -> &'static str {
        match self {
            Self::ToDo => "#5030E5",
            Self::OnProgress => "#FFA500",
            Self::Completed => "#76A5EA",
        }
    }
}

impl FromStr for ColumnKey {
    type Err = crate::error::CardboardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "toDo" => Ok(Self::ToDo),
            "onProgress" => Ok(Self::OnProgress),
            "completed" => Ok(Self::Completed),
            _ => Err(crate::error::CardboardError::InvalidColumn(s.to_string())),
        }
    }
}

/// Formats the persisted key (`toDo`), which `FromStr` parses back.
/// Headers use [`ColumnKey::label`].
impl fmt::Display for ColumnKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
