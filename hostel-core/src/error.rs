//! Error types for hostel-core.

use std::path::PathBuf;

use thiserror::Error;

use crate::types::{RollNumber, RoomId};

/// All errors that can arise from registry, persistence and config operations.
#[derive(Debug, Error)]
pub enum HostelError {
    /// Booking referenced a room id outside the inventory or already occupied.
    #[error("Room {room} is either not available or does not exist.")]
    RoomUnavailable { room: RoomId },

    /// No student with this roll number is on the roster.
    #[error("Student with roll number {roll} not found.")]
    StudentNotFound { roll: RollNumber },

    /// No student with this exact name is on the roster.
    #[error("Student with name '{name}' not found.")]
    StudentNameNotFound { name: String },

    /// The roster file could not be opened, read or written.
    #[error("cannot access roster file {path}: {source}")]
    Persistence {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// YAML parse error on the config file, with the file path.
    #[error("failed to parse config at {path}: {source}")]
    ConfigParse {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },

    /// Config values that cannot describe a hostel (e.g. zero rooms).
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// `dirs::home_dir()` returned `None`: cannot locate `~/.hostel/`.
    #[error("cannot determine home directory; set $HOME or equivalent")]
    HomeNotFound,

    /// Room states and student assignments disagree.
    #[error("registry is inconsistent: {0}")]
    Inconsistent(String),
}

/// Convenience constructor for [`HostelError::Persistence`].
pub(crate) fn io_err(path: impl Into<PathBuf>, source: std::io::Error) -> HostelError {
    HostelError::Persistence {
        path: path.into(),
        source,
    }
}
