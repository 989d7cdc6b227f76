//! Hostel core library: room inventory, student roster, persistence.
//!
//! - [`types`]: newtypes and the `Room` / `Student` records
//! - [`registry`]: the [`Hostel`] registry (book / vacate / search / list)
//! - [`codec`]: line-oriented roster file format, load and save
//! - [`config`]: [`HostelConfig`] and its optional YAML file
//! - [`error`]: [`HostelError`]

pub mod codec;
pub mod config;
pub mod error;
pub mod registry;
pub mod types;

pub use codec::{LoadReport, RosterRecord};
pub use config::HostelConfig;
pub use error::HostelError;
pub use registry::{Hostel, Occupancy, RoomListing, Vacancy};
pub use types::{RollNumber, Room, RoomId, RoomStatus, Student, StudentName};
