//! Domain types for the hostel registry.
//!
//! A [`Student`] refers to its room by [`RoomId`] only; the room itself is
//! owned by the [`Hostel`](crate::registry::Hostel) inventory.

use std::fmt;

use serde::Serialize;

// ---------------------------------------------------------------------------
// Newtypes
// ---------------------------------------------------------------------------

/// A 1-based room identifier, fixed when the inventory is created.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct RoomId(pub u32);

impl fmt::Display for RoomId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl From<u32> for RoomId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

/// A student's roll number. Not guaranteed unique across the roster.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct RollNumber(pub i64);

impl fmt::Display for RollNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl From<i64> for RollNumber {
    fn from(n: i64) -> Self {
        Self(n)
    }
}

/// A student's display name, compared exactly (case-sensitive) on search.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct StudentName(pub String);

impl StudentName {
    /// Whether the name survives the whitespace-split roster file format.
    pub fn is_persistable(&self) -> bool {
        !self.0.is_empty() && !self.0.chars().any(char::is_whitespace)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for StudentName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl From<String> for StudentName {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for StudentName {
    fn from(s: &str) -> Self {
        Self(s.to_owned())
    }
}

// ---------------------------------------------------------------------------
// Room
// ---------------------------------------------------------------------------

/// Binary availability of a room.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RoomStatus {
    #[default]
    Available,
    Occupied,
}

impl fmt::Display for RoomStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RoomStatus::Available => write!(f, "Available"),
            RoomStatus::Occupied => write!(f, "Occupied"),
        }
    }
}

/// One unit of inventory.
///
/// `book` and `free` flip the status unconditionally; the registry checks
/// availability before calling them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Room {
    pub id: RoomId,
    pub status: RoomStatus,
}

impl Room {
    pub fn new(id: RoomId) -> Self {
        Self {
            id,
            status: RoomStatus::Available,
        }
    }

    pub fn is_available(&self) -> bool {
        self.status == RoomStatus::Available
    }

    pub fn book(&mut self) {
        self.status = RoomStatus::Occupied;
    }

    pub fn free(&mut self) {
        self.status = RoomStatus::Available;
    }
}

impl fmt::Display for Room {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Room ID: {} | Status: {}", self.id, self.status)
    }
}

// ---------------------------------------------------------------------------
// Student
// ---------------------------------------------------------------------------

/// A roster entry holding at most one room.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Student {
    pub name: StudentName,
    pub roll: RollNumber,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub room: Option<RoomId>,
}

impl Student {
    pub fn new(name: impl Into<StudentName>, roll: impl Into<RollNumber>) -> Self {
        Self {
            name: name.into(),
            roll: roll.into(),
            room: None,
        }
    }

    /// Record `room` as this student's assignment. The caller books the room.
    pub fn assign_room(&mut self, room: RoomId) {
        self.room = Some(room);
    }

    /// Clear the assignment, returning the room to release (if any).
    pub fn vacate_room(&mut self) -> Option<RoomId> {
        self.room.take()
    }
}

impl fmt::Display for Student {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Name: {} | Roll Number: {} | Room ID: ", self.name, self.roll)?;
        match self.room {
            Some(room) => write!(f, "{room}"),
            None => write!(f, "Not assigned"),
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
