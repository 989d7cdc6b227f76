//! `hostel vacate <roll>`

use anyhow::Result;
use clap::Args;

use hostel_core::{HostelConfig, RollNumber};

/// Vacate the room held by a roll number.
#[derive(Args, Debug)]
pub struct VacateArgs {
    /// Roll number of the student leaving. The first match on the roster is removed.
    #[arg(allow_negative_numbers = true)]
    pub roll: i64,
}

impl VacateArgs {
    pub fn run(self, config: &HostelConfig) -> Result<()> {
        let (mut hostel, report) = super::open(config)?;
        super::ensure_nothing_skipped(report, config)?;
        let roll = RollNumber(self.roll);
        hostel.vacate(roll)?;
        super::save(&hostel, config)?;

        println!("Room vacated successfully for roll number {roll}.");
        Ok(())
    }
}
