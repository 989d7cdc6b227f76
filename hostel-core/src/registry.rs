//! The hostel registry: a fixed room inventory plus the student roster.
//!
//! # Consistency
//!
//! A room is `Occupied` exactly when one roster student holds its id. Every
//! mutating method here preserves that; [`Hostel::verify_consistency`]
//! checks it.
//!
//! # Lookup order
//!
//! Rooms are keyed by [`RoomId`] (never by position) and iterate in id
//! order. Students keep insertion order, and roll-number / name lookups
//! take the first match in that order.

use std::collections::{BTreeMap, HashSet};
use std::fmt;
use std::path::Path;

use serde::Serialize;

use crate::codec::{self, LoadReport, RosterRecord};
use crate::config::HostelConfig;
use crate::error::HostelError;
use crate::types::{RollNumber, Room, RoomId, Student, StudentName};

// ---------------------------------------------------------------------------
// Views
// ---------------------------------------------------------------------------

/// Rooms split into available and occupied, each in id order.
#[derive(Debug, Clone)]
pub struct RoomListing<'a> {
    pub available: Vec<&'a Room>,
    pub occupied: Vec<&'a Room>,
}

impl fmt::Display for RoomListing<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Available Rooms:")?;
        for room in &self.available {
            writeln!(f, "{room}")?;
        }
        writeln!(f, "Occupied Rooms:")?;
        for room in &self.occupied {
            writeln!(f, "{room}")?;
        }
        Ok(())
    }
}

/// Headline counts for list output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Occupancy {
    pub rooms: usize,
    pub available: usize,
    pub occupied: usize,
    pub students: usize,
}

/// A student removed by [`Hostel::vacate`], with the room that was freed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Vacancy {
    pub student: Student,
    pub released: Option<RoomId>,
}

// ---------------------------------------------------------------------------
// Hostel
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Hostel {
    rooms: BTreeMap<RoomId, Room>,
    students: Vec<Student>,
}

impl Hostel {
    /// A hostel with rooms `1..=num_rooms`, all available, and no students.
    pub fn new(num_rooms: u32) -> Self {
        let rooms = (1..=num_rooms)
            .map(|id| (RoomId(id), Room::new(RoomId(id))))
            .collect();
        Self {
            rooms,
            students: Vec::new(),
        }
    }

    pub fn from_config(config: &HostelConfig) -> Self {
        Self::new(config.rooms)
    }

    pub fn rooms(&self) -> impl Iterator<Item = &Room> {
        self.rooms.values()
    }

    pub fn room(&self, id: RoomId) -> Option<&Room> {
        self.rooms.get(&id)
    }

    pub fn students(&self) -> &[Student] {
        &self.students
    }

    pub fn available_rooms(&self) -> impl Iterator<Item = &Room> {
        self.rooms.values().filter(|r| r.is_available())
    }

    pub fn occupied_rooms(&self) -> impl Iterator<Item = &Room> {
        self.rooms.values().filter(|r| !r.is_available())
    }

    pub fn room_listing(&self) -> RoomListing<'_> {
        RoomListing {
            available: self.available_rooms().collect(),
            occupied: self.occupied_rooms().collect(),
        }
    }

    pub fn occupancy(&self) -> Occupancy {
        let available = self.available_rooms().count();
        Occupancy {
            rooms: self.rooms.len(),
            available,
            occupied: self.rooms.len() - available,
            students: self.students.len(),
        }
    }

    /// First roster entry with this roll number.
    pub fn find_by_roll(&self, roll: RollNumber) -> Option<&Student> {
        self.students.iter().find(|s| s.roll == roll)
    }

    // -----------------------------------------------------------------------
    // Mutations
    // -----------------------------------------------------------------------

    /// Book `room` for a new student `(name, roll)`.
    ///
    /// Fails with [`HostelError::RoomUnavailable`] if the room does not exist
    /// or is occupied; nothing changes in that case. Roll numbers are not
    /// checked for uniqueness.
    pub fn book(
        &mut self,
        name: impl Into<StudentName>,
        roll: impl Into<RollNumber>,
        room: RoomId,
    ) -> Result<&Student, HostelError> {
        let Some(target) = self.rooms.get_mut(&room).filter(|r| r.is_available()) else {
            return Err(HostelError::RoomUnavailable { room });
        };
        target.book();

        let mut student = Student::new(name, roll);
        student.assign_room(room);
        tracing::debug!(room = %room, roll = %student.roll, "room booked");

        let idx = self.students.len();
        self.students.push(student);
        Ok(&self.students[idx])
    }

    /// Remove the first student with `roll` and free their room.
    pub fn vacate(&mut self, roll: RollNumber) -> Result<Vacancy, HostelError> {
        let Some(pos) = self.students.iter().position(|s| s.roll == roll) else {
            return Err(HostelError::StudentNotFound { roll });
        };
        let mut student = self.students.remove(pos);
        let released = student.vacate_room();
        if let Some(room) = released.and_then(|id| self.rooms.get_mut(&id)) {
            room.free();
        }
        tracing::debug!(roll = %roll, room = ?released, "room vacated");

        // Hand back the record as it stood before release.
        student.room = released;
        Ok(Vacancy { student, released })
    }

    /// First student whose name equals `name` exactly.
    pub fn search_by_name(&self, name: &str) -> Result<&Student, HostelError> {
        self.students
            .iter()
            .find(|s| s.name.as_str() == name)
            .ok_or_else(|| HostelError::StudentNameNotFound {
                name: name.to_owned(),
            })
    }

    // -----------------------------------------------------------------------
    // Persistence
    // -----------------------------------------------------------------------

    /// Append the roster stored at `path`.
    ///
    /// A missing file, or one that cannot be read at all, yields
    /// [`LoadReport::NoPriorData`]. Bad content never does: lines that are
    /// malformed, not UTF-8, unassigned (`NA`), or point at a room that is
    /// unknown or already taken are skipped one by one.
    pub fn load_from(&mut self, path: &Path) -> Result<LoadReport, HostelError> {
        let contents = match codec::read_roster_at(path) {
            Ok(Some(contents)) => contents,
            Ok(None) => {
                tracing::info!(path = %path.display(), "no roster file; starting empty");
                return Ok(LoadReport::NoPriorData);
            }
            Err(err) => {
                tracing::warn!(error = %err, "roster file unreadable; starting empty");
                return Ok(LoadReport::NoPriorData);
            }
        };

        let mut loaded = 0;
        let mut skipped = 0;
        for (idx, line) in contents.split(|b| *b == b'\n').enumerate() {
            let lineno = idx + 1;
            let record = match codec::decode_raw_line(line) {
                Ok(Some(record)) => record,
                Ok(None) => continue,
                Err(err) => {
                    tracing::warn!(line = lineno, error = %err, "skipping malformed roster line");
                    skipped += 1;
                    continue;
                }
            };
            match self.admit(record) {
                Ok(()) => loaded += 1,
                Err(reason) => {
                    tracing::warn!(line = lineno, reason, "skipping roster line");
                    skipped += 1;
                }
            }
        }

        self.verify_consistency()?;
        tracing::info!(path = %path.display(), loaded, skipped, "roster loaded");
        Ok(LoadReport::Loaded { loaded, skipped })
    }

    /// Truncate `path` and write one line per roster student, in order.
    pub fn save_to(&self, path: &Path) -> Result<usize, HostelError> {
        codec::write_roster_at(path, &self.students)?;
        tracing::info!(path = %path.display(), students = self.students.len(), "roster saved");
        Ok(self.students.len())
    }

    fn admit(&mut self, record: RosterRecord) -> Result<(), &'static str> {
        let Some(id) = record.room else {
            return Err("student has no room assigned");
        };
        let Some(room) = self.rooms.get_mut(&id) else {
            return Err("room id outside the inventory");
        };
        if !room.is_available() {
            return Err("room already occupied by an earlier line");
        }
        room.book();
        let mut student = Student::new(record.name, record.roll);
        student.assign_room(id);
        self.students.push(student);
        Ok(())
    }

    // -----------------------------------------------------------------------
    // Invariant
    // -----------------------------------------------------------------------

    /// Check that occupied rooms and student assignments are in one-to-one
    /// correspondence.
    pub fn verify_consistency(&self) -> Result<(), HostelError> {
        let mut held = HashSet::new();
        for student in &self.students {
            let Some(id) = student.room else {
                return Err(HostelError::Inconsistent(format!(
                    "student {} holds no room",
                    student.roll
                )));
            };
            match self.rooms.get(&id) {
                None => {
                    return Err(HostelError::Inconsistent(format!(
                        "student {} holds unknown room {id}",
                        student.roll
                    )))
                }
                Some(room) if room.is_available() => {
                    return Err(HostelError::Inconsistent(format!(
                        "room {id} is held by student {} but marked available",
                        student.roll
                    )))
                }
                Some(_) => {}
            }
            if !held.insert(id) {
                return Err(HostelError::Inconsistent(format!(
                    "room {id} is held by more than one student"
                )));
            }
        }
        if let Some(orphan) = self.occupied_rooms().find(|r| !held.contains(&r.id)) {
            return Err(HostelError::Inconsistent(format!(
                "room {} is occupied but held by no student",
                orphan.id
            )));
        }
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Unit tests
// ---------------------------------------------------------------------------
