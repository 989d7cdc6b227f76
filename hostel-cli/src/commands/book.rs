//! `hostel book <name> --roll <n> --room <id>`

use anyhow::{bail, Result};
use clap::Args;

use hostel_core::{HostelConfig, RollNumber, RoomId, StudentName};

/// Book a room for a new student.
#[derive(Args, Debug)]
pub struct BookArgs {
    /// Student name; a single word, since the roster file is space-separated.
    pub name: String,

    /// Student roll number.
    #[arg(long, allow_negative_numbers = true)]
    pub roll: i64,

    /// Room id to book (1-based).
    #[arg(long)]
    pub room: u32,
}

impl BookArgs {
    pub fn run(self, config: &HostelConfig) -> Result<()> {
        let name = StudentName::from(self.name);
        if !name.is_persistable() {
            bail!("student name '{name}' must be a single word without spaces");
        }

        let (mut hostel, report) = super::open(config)?;
        super::ensure_nothing_skipped(report, config)?;
        let room = RoomId(self.room);
        hostel.book(name.clone(), RollNumber(self.roll), room)?;
        super::save(&hostel, config)?;

        println!("Room {room} booked successfully for {name}.");
        Ok(())
    }
}
