//! Interactive numbered menu over stdin/stdout.
//!
//! The loop is generic over `BufRead` / `Write` so it can be driven from
//! in-memory buffers. Exit (choice 6) and end of input both save the roster.

use std::io::{self, BufRead, Write};
use std::path::Path;

use anyhow::Result;

use hostel_core::{Hostel, HostelConfig, LoadReport, RollNumber, RoomId, StudentName};

const BANNER: &str = "----------## Hostel Accommodation System ##----------";
const RULE: &str = "--------------------------------------------------------";

pub fn run(config: &HostelConfig) -> Result<()> {
    let (mut hostel, report) = super::open(config)?;
    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut out = stdout.lock();
    writeln!(out, "{}", load_message(report))?;
    if let LoadReport::Loaded { skipped, .. } = report {
        if skipped > 0 {
            writeln!(
                out,
                "Warning: {skipped} line(s) in the data file could not be loaded and will not be saved."
            )?;
        }
    }
    run_with(&mut hostel, &config.data_file, stdin.lock(), out)
}

fn load_message(report: LoadReport) -> &'static str {
    match report {
        LoadReport::NoPriorData => "No existing data file found. Starting with no bookings.",
        LoadReport::Loaded { .. } => "Data loaded successfully from file.",
    }
}

pub fn run_with<R: BufRead, W: Write>(
    hostel: &mut Hostel,
    data_file: &Path,
    input: R,
    out: W,
) -> Result<()> {
    let mut session = Session { hostel, input, out };
    loop {
        session.print_menu()?;
        let Some(choice) = session.read_line()? else {
            writeln!(session.out)?;
            break;
        };
        match choice.trim() {
            "1" => write!(session.out, "{}", session.hostel.room_listing())?,
            "2" => session.show_students()?,
            "3" => session.book()?,
            "4" => session.vacate()?,
            "5" => session.search()?,
            "6" => break,
            _ => writeln!(
                session.out,
                "Invalid choice. Please enter a number between 1 and 6."
            )?,
        }
    }
    session.save(data_file)
}

struct Session<'a, R, W> {
    hostel: &'a mut Hostel,
    input: R,
    out: W,
}

/// Result of prompting for a value.
enum Answer<T> {
    Value(T),
    Invalid,
    Eof,
}

impl<R: BufRead, W: Write> Session<'_, R, W> {
    fn print_menu(&mut self) -> io::Result<()> {
        writeln!(self.out, "{BANNER}")?;
        writeln!(self.out, "1. Display Available Rooms")?;
        writeln!(self.out, "2. Display All Students and Rooms")?;
        writeln!(self.out, "3. Book a Room")?;
        writeln!(self.out, "4. Vacate a Room")?;
        writeln!(self.out, "5. Search Room by Student Name")?;
        writeln!(self.out, "6. Exit")?;
        writeln!(self.out, "{RULE}")?;
        write!(self.out, "Enter your choice (1-6): ")?;
        self.out.flush()
    }

    /// One line without its terminator, or `None` at end of input.
    fn read_line(&mut self) -> io::Result<Option<String>> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        let trimmed = line.trim_end_matches(['\n', '\r']).len();
        line.truncate(trimmed);
        Ok(Some(line))
    }

    fn prompt(&mut self, label: &str) -> io::Result<Option<String>> {
        write!(self.out, "{label}")?;
        self.out.flush()?;
        self.read_line()
    }

    fn prompt_number<T: std::str::FromStr>(&mut self, label: &str) -> io::Result<Answer<T>> {
        let Some(raw) = self.prompt(label)? else {
            return Ok(Answer::Eof);
        };
        match raw.trim().parse() {
            Ok(value) => Ok(Answer::Value(value)),
            Err(_) => {
                writeln!(self.out, "Invalid input '{}'. Please enter a number.", raw.trim())?;
                Ok(Answer::Invalid)
            }
        }
    }

    fn show_students(&mut self) -> io::Result<()> {
        writeln!(self.out, "All Students:")?;
        for student in self.hostel.students() {
            writeln!(self.out, "{student}")?;
        }
        Ok(())
    }

    fn book(&mut self) -> io::Result<()> {
        let Some(name) = self.prompt("Enter student's name: ")? else {
            return Ok(());
        };
        let name = StudentName::from(name.trim());
        if !name.is_persistable() {
            writeln!(
                self.out,
                "Student name must be a single word without spaces."
            )?;
            return Ok(());
        }
        let Answer::Value(roll) = self.prompt_number::<i64>("Enter student's roll number: ")? else {
            return Ok(());
        };
        let Answer::Value(room) = self.prompt_number::<u32>("Enter room ID to book: ")? else {
            return Ok(());
        };

        let room = RoomId(room);
        match self.hostel.book(name.clone(), RollNumber(roll), room) {
            Ok(_) => writeln!(self.out, "Room {room} booked successfully for {name}."),
            Err(err) => writeln!(self.out, "{err}"),
        }
    }

    fn vacate(&mut self) -> io::Result<()> {
        let Answer::Value(roll) =
            self.prompt_number::<i64>("Enter student's roll number to vacate room: ")?
        else {
            return Ok(());
        };
        let roll = RollNumber(roll);
        match self.hostel.vacate(roll) {
            Ok(_) => writeln!(self.out, "Room vacated successfully for roll number {roll}."),
            Err(err) => writeln!(self.out, "{err}"),
        }
    }

    fn search(&mut self) -> io::Result<()> {
        let Some(name) = self.prompt("Enter student's name to search: ")? else {
            return Ok(());
        };
        match self.hostel.search_by_name(name.trim()) {
            Ok(student) => {
                writeln!(self.out, "Student found:")?;
                writeln!(self.out, "{student}")
            }
            Err(err) => writeln!(self.out, "{err}"),
        }
    }

    /// A failed save is reported, not propagated: exit still succeeds.
    fn save(&mut self, data_file: &Path) -> Result<()> {
        match self.hostel.save_to(data_file) {
            Ok(_) => writeln!(self.out, "Data saved successfully to file.")?,
            Err(err) => {
                tracing::error!(error = %err, "roster save failed");
                writeln!(self.out, "Error saving data to file.")?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;
    use tempfile::TempDir;

    fn drive(hostel: &mut Hostel, data_file: &Path, script: &str) -> String {
        let mut out = Vec::new();
        run_with(hostel, data_file, Cursor::new(script.to_owned()), &mut out).expect("menu");
        String::from_utf8(out).expect("utf8")
    }

    #[test]
    fn book_list_and_exit_saves_roster() {
        let dir = TempDir::new().expect("tempdir");
        let data = dir.path().join("hostel_data.txt");
        let mut hostel = Hostel::new(3);

        let out = drive(&mut hostel, &data, "3\nAlice\n1\n2\n1\n6\n");

        assert!(out.contains("Room 2 booked successfully for Alice."), "{out}");
        assert!(out.contains("Occupied Rooms:\nRoom ID: 2 | Status: Occupied"), "{out}");
        assert!(out.contains("Data saved successfully to file."), "{out}");
        assert_eq!(std::fs::read_to_string(&data).expect("read"), "Alice 1 2\n");
    }

    #[test]
    fn conflicting_booking_reports_unavailable() {
        let dir = TempDir::new().expect("tempdir");
        let data = dir.path().join("hostel_data.txt");
        let mut hostel = Hostel::new(3);

        let out = drive(&mut hostel, &data, "3\nAlice\n1\n2\n3\nBob\n2\n2\n6\n");

        assert!(out.contains("Room 2 is either not available or does not exist."), "{out}");
        assert_eq!(hostel.students().len(), 1);
    }

    #[test]
    fn vacate_then_search_reports_not_found() {
        let dir = TempDir::new().expect("tempdir");
        let data = dir.path().join("hostel_data.txt");
        let mut hostel = Hostel::new(3);
        hostel.book("Alice", 1, RoomId(2)).expect("book");

        let out = drive(&mut hostel, &data, "4\n1\n5\nAlice\n6\n");

        assert!(out.contains("Room vacated successfully for roll number 1."), "{out}");
        assert!(out.contains("Student with name 'Alice' not found."), "{out}");
        assert!(hostel.room(RoomId(2)).is_some_and(|r| r.is_available()));
    }

    #[test]
    fn invalid_choice_and_bad_numbers_reprompt() {
        let dir = TempDir::new().expect("tempdir");
        let data = dir.path().join("hostel_data.txt");
        let mut hostel = Hostel::new(2);

        let out = drive(&mut hostel, &data, "9\nabc\n3\nBob\nxyz\n6\n");

        assert_eq!(
            out.matches("Invalid choice. Please enter a number between 1 and 6.").count(),
            2
        );
        assert!(out.contains("Invalid input 'xyz'. Please enter a number."), "{out}");
        assert!(hostel.students().is_empty());
    }

    #[test]
    fn booked_and_searched_names_are_trimmed_alike() {
        let dir = TempDir::new().expect("tempdir");
        let data = dir.path().join("hostel_data.txt");
        let mut hostel = Hostel::new(2);

        let out = drive(&mut hostel, &data, "3\nAlice \n1\n1\n5\n  Alice \n6\n");

        assert!(out.contains("Student found:\nName: Alice | Roll Number: 1 | Room ID: 1"), "{out}");
    }

    #[test]
    fn names_with_spaces_are_refused() {
        let dir = TempDir::new().expect("tempdir");
        let data = dir.path().join("hostel_data.txt");
        let mut hostel = Hostel::new(2);

        let out = drive(&mut hostel, &data, "3\nMary Jane\n6\n");

        assert!(out.contains("single word without spaces"), "{out}");
        assert!(hostel.students().is_empty());
    }

    #[test]
    fn end_of_input_still_saves() {
        let dir = TempDir::new().expect("tempdir");
        let data = dir.path().join("hostel_data.txt");
        let mut hostel = Hostel::new(2);

        let out = drive(&mut hostel, &data, "3\nAlice\n5\n1\n");

        assert!(out.contains("Data saved successfully to file."), "{out}");
        assert_eq!(std::fs::read_to_string(&data).expect("read"), "Alice 5 1\n");
    }

    #[test]
    fn save_failure_is_reported_not_fatal() {
        let dir = TempDir::new().expect("tempdir");
        // A directory cannot be opened as a file for writing.
        let mut hostel = Hostel::new(1);

        let out = drive(&mut hostel, dir.path(), "6\n");

        assert!(out.contains("Error saving data to file."), "{out}");
    }

    #[test]
    fn load_messages() {
        assert!(load_message(LoadReport::NoPriorData).starts_with("No existing data file"));
        assert_eq!(
            load_message(LoadReport::Loaded { loaded: 0, skipped: 0 }),
            "Data loaded successfully from file."
        );
    }
}
