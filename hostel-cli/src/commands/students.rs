//! `hostel students`: roster table or JSON.

use anyhow::{Context, Result};
use clap::Args;
use serde::Serialize;
use tabled::{settings::Style, Table, Tabled};

use hostel_core::{HostelConfig, Occupancy, Student};

/// Arguments for `hostel students`.
#[derive(Args, Debug)]
pub struct StudentsArgs {
    /// Emit machine-readable JSON.
    #[arg(long)]
    pub json: bool,
}

#[derive(Serialize)]
struct RosterJson<'a> {
    summary: Occupancy,
    students: &'a [Student],
}

#[derive(Tabled)]
struct StudentRow {
    #[tabled(rename = "name")]
    name: String,
    #[tabled(rename = "roll number")]
    roll: i64,
    #[tabled(rename = "room")]
    room: String,
}

impl StudentsArgs {
    pub fn run(self, config: &HostelConfig) -> Result<()> {
        let (hostel, _) = super::open(config)?;

        if self.json {
            let payload = RosterJson {
                summary: hostel.occupancy(),
                students: hostel.students(),
            };
            println!(
                "{}",
                serde_json::to_string_pretty(&payload).context("failed to serialize roster JSON")?
            );
            return Ok(());
        }

        super::rooms::print_summary(hostel.occupancy());
        if hostel.students().is_empty() {
            println!("No students registered.");
            return Ok(());
        }
        let rows: Vec<StudentRow> = hostel
            .students()
            .iter()
            .map(|s| StudentRow {
                name: s.name.to_string(),
                roll: s.roll.0,
                room: s
                    .room
                    .map_or_else(|| "Not assigned".to_string(), |r| r.to_string()),
            })
            .collect();
        let mut table = Table::new(rows);
        table.with(Style::rounded());
        println!("{table}");
        Ok(())
    }
}
