//! `hostel search <name>`

use anyhow::Result;
use clap::Args;

use hostel_core::HostelConfig;

/// Find a student's room by exact, case-sensitive name.
#[derive(Args, Debug)]
pub struct SearchArgs {
    pub name: String,
}

impl SearchArgs {
    pub fn run(self, config: &HostelConfig) -> Result<()> {
        let (hostel, _) = super::open(config)?;
        let student = hostel.search_by_name(&self.name)?;
        println!("Student found:");
        println!("{student}");
        Ok(())
    }
}
