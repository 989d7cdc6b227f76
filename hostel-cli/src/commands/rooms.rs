//! `hostel rooms`: room inventory table.

use anyhow::Result;
use clap::Args;
use colored::Colorize;
use tabled::{settings::Style, Table, Tabled};

use hostel_core::{HostelConfig, Occupancy, Room, RoomStatus};

/// Arguments for `hostel rooms`.
#[derive(Args, Debug)]
pub struct RoomsArgs {
    /// Show only rooms that can be booked.
    #[arg(long)]
    pub available: bool,
}

#[derive(Tabled)]
struct RoomRow {
    #[tabled(rename = "room")]
    room: u32,
    #[tabled(rename = "status")]
    status: String,
}

impl RoomsArgs {
    pub fn run(self, config: &HostelConfig) -> Result<()> {
        let (hostel, _) = super::open(config)?;
        print_summary(hostel.occupancy());

        let listing = hostel.room_listing();
        println!("{}", "Available Rooms".bold());
        print_rooms(&listing.available);
        if !self.available {
            println!("{}", "Occupied Rooms".bold());
            print_rooms(&listing.occupied);
        }
        Ok(())
    }
}

pub(crate) fn print_summary(occupancy: Occupancy) {
    println!(
        "Hostel | {} rooms | {} available | {} occupied | {} students",
        occupancy.rooms, occupancy.available, occupancy.occupied, occupancy.students,
    );
}

fn print_rooms(rooms: &[&Room]) {
    if rooms.is_empty() {
        println!("  (none)");
        return;
    }
    let rows: Vec<RoomRow> = rooms
        .iter()
        .map(|room| RoomRow {
            room: room.id.0,
            status: status_label(room.status),
        })
        .collect();
    let mut table = Table::new(rows);
    table.with(Style::rounded());
    println!("{table}");
}

fn status_label(status: RoomStatus) -> String {
    match status {
        RoomStatus::Available => status.to_string().green().to_string(),
        RoomStatus::Occupied => status.to_string().red().to_string(),
    }
}
