//! Roster file codec.
//!
//! # Format
//!
//! ```text
//! <name> <roll_number> <room_id|NA>
//! ```
//!
//! One student per line, fields separated by a single space. Lines are split
//! on whitespace when read, so a name containing whitespace does not survive
//! a save/load cycle (see [`StudentName::is_persistable`]).
//!
//! Rooms are not stored; the inventory is rebuilt from the configured room
//! count and the students' room ids.

use std::path::Path;

use thiserror::Error;

use crate::error::{io_err, HostelError};
use crate::types::{RollNumber, RoomId, Student, StudentName};

/// Token written for a student with no room.
pub const NOT_ASSIGNED: &str = "NA";

/// One decoded roster line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RosterRecord {
    pub name: StudentName,
    pub roll: RollNumber,
    pub room: Option<RoomId>,
}

/// Outcome of loading a roster file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadReport {
    /// The file was absent or could not be opened.
    NoPriorData,
    Loaded { loaded: usize, skipped: usize },
}

/// Why a single line could not be decoded.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LineError {
    #[error("expected 3 fields, found {0}")]
    FieldCount(usize),

    #[error("invalid roll number '{0}'")]
    Roll(String),

    #[error("invalid room id '{0}'")]
    Room(String),

    #[error("line is not valid UTF-8")]
    Encoding,
}

// ---------------------------------------------------------------------------
// Encode
// ---------------------------------------------------------------------------

pub fn encode_student(student: &Student) -> String {
    match student.room {
        Some(room) => format!("{} {} {}", student.name, student.roll, room),
        None => format!("{} {} {}", student.name, student.roll, NOT_ASSIGNED),
    }
}

/// The whole file body: one newline-terminated line per student.
pub fn encode_roster(students: &[Student]) -> String {
    students
        .iter()
        .map(|s| encode_student(s) + "\n")
        .collect()
}

// ---------------------------------------------------------------------------
// Decode
// ---------------------------------------------------------------------------

/// Decode one line. Blank lines yield `Ok(None)`.
pub fn decode_line(line: &str) -> Result<Option<RosterRecord>, LineError> {
    let fields: Vec<&str> = line.split_whitespace().collect();
    let [name, roll, room] = fields.as_slice() else {
        return if fields.is_empty() {
            Ok(None)
        } else {
            Err(LineError::FieldCount(fields.len()))
        };
    };

    let roll = roll
        .parse::<i64>()
        .map(RollNumber)
        .map_err(|_| LineError::Roll((*roll).to_owned()))?;
    let room = if *room == NOT_ASSIGNED {
        None
    } else {
        let id = room
            .parse::<u32>()
            .map_err(|_| LineError::Room((*room).to_owned()))?;
        Some(RoomId(id))
    };

    Ok(Some(RosterRecord {
        name: StudentName::from(*name),
        roll,
        room,
    }))
}

/// Decode one raw line from the file. A line that is not UTF-8 is an error
/// for that line only.
pub fn decode_raw_line(raw: &[u8]) -> Result<Option<RosterRecord>, LineError> {
    let raw = raw.strip_suffix(b"\r").unwrap_or(raw);
    let line = std::str::from_utf8(raw).map_err(|_| LineError::Encoding)?;
    decode_line(line)
}

// ---------------------------------------------------------------------------
// File I/O
// ---------------------------------------------------------------------------

/// Read the raw roster bytes. Returns `Ok(None)` if the file does not exist.
///
/// Content is not validated here; see [`decode_raw_line`].
pub fn read_roster_at(path: &Path) -> Result<Option<Vec<u8>>, HostelError> {
    match std::fs::read(path) {
        Ok(contents) => Ok(Some(contents)),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
        Err(e) => Err(io_err(path, e)),
    }
}

/// Truncate and rewrite the roster file. Creates the parent directory if needed.
pub fn write_roster_at(path: &Path, students: &[Student]) -> Result<(), HostelError> {
    if let Some(dir) = path.parent().filter(|d| !d.as_os_str().is_empty()) {
        std::fs::create_dir_all(dir).map_err(|e| io_err(dir, e))?;
    }
    std::fs::write(path, encode_roster(students)).map_err(|e| io_err(path, e))
}
