//! Save/load roundtrip tests for the roster file.
//!
//! Each `#[case]` gets its own temp dir: no shared state.

use assert_fs::prelude::*;
use hostel_core::{Hostel, LoadReport, RollNumber, RoomId};
use predicates::prelude::predicate;
use rstest::rstest;

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

type Booking = (&'static str, i64, u32);

fn hostel_with(rooms: u32, bookings: &[Booking]) -> Hostel {
    let mut hostel = Hostel::new(rooms);
    for &(name, roll, room) in bookings {
        hostel.book(name, roll, RoomId(room)).expect("book");
    }
    hostel
}

fn triples(hostel: &Hostel) -> Vec<(String, i64, Option<u32>)> {
    hostel
        .students()
        .iter()
        .map(|s| (s.name.0.clone(), s.roll.0, s.room.map(|r| r.0)))
        .collect()
}

fn availability(hostel: &Hostel) -> Vec<bool> {
    hostel.rooms().map(|r| r.is_available()).collect()
}

// ---------------------------------------------------------------------------
// Parameterised roundtrip
// ---------------------------------------------------------------------------

#[rstest]
#[case("empty", 3, vec![])]
#[case("single", 3, vec![("Alice", 1, 2)])]
#[case("out_of_id_order", 5, vec![("Erin", 5, 5), ("Bob", 2, 1), ("Dave", 4, 3)])]
#[case("full_house", 2, vec![("A", 1, 1), ("B", 2, 2)])]
#[case("duplicate_rolls", 4, vec![("Twin", 7, 1), ("Twin2", 7, 4)])]
#[case("unicode_names", 3, vec![("Zoë", 10, 3), ("日本", 11, 1)])]
fn roster_roundtrip(#[case] label: &str, #[case] rooms: u32, #[case] bookings: Vec<Booking>) {
    let dir = assert_fs::TempDir::new().expect("tempdir");
    let file = dir.child("hostel_data.txt");

    let original = hostel_with(rooms, &bookings);
    let written = original
        .save_to(file.path())
        .unwrap_or_else(|e| panic!("[{label}] save failed: {e}"));
    assert_eq!(written, bookings.len(), "[{label}] written count");

    let mut restored = Hostel::new(rooms);
    let report = restored
        .load_from(file.path())
        .unwrap_or_else(|e| panic!("[{label}] load failed: {e}"));
    assert_eq!(
        report,
        LoadReport::Loaded { loaded: bookings.len(), skipped: 0 },
        "[{label}] load report"
    );
    assert_eq!(triples(&original), triples(&restored), "[{label}] roster");
    assert_eq!(availability(&original), availability(&restored), "[{label}] rooms");
    restored.verify_consistency().expect("consistent after load");
}

// ---------------------------------------------------------------------------
// File format
// ---------------------------------------------------------------------------

#[test]
fn save_writes_one_line_per_student_in_roster_order() {
    let dir = assert_fs::TempDir::new().expect("tempdir");
    let file = dir.child("hostel_data.txt");

    let hostel = hostel_with(5, &[("Carol", 3, 4), ("Alice", 1, 2)]);
    hostel.save_to(file.path()).expect("save");

    file.assert("Carol 3 4\nAlice 1 2\n");
}

#[test]
fn save_truncates_previous_contents() {
    let dir = assert_fs::TempDir::new().expect("tempdir");
    let file = dir.child("hostel_data.txt");
    file.write_str("Stale 1 1\nStale 2 2\nStale 3 3\n").expect("seed");

    let mut hostel = hostel_with(3, &[("Fresh", 9, 3)]);
    hostel.vacate(RollNumber(9)).expect("vacate");
    hostel.save_to(file.path()).expect("save");

    file.assert(predicate::str::is_empty());
}

#[test]
fn save_creates_missing_parent_directory() {
    let dir = assert_fs::TempDir::new().expect("tempdir");
    let file = dir.child("nested").child("roster.txt");

    hostel_with(2, &[("Alice", 1, 1)]).save_to(file.path()).expect("save");

    file.assert(predicate::path::exists());
    file.assert(predicate::str::contains("Alice 1 1"));
}

#[test]
fn names_with_spaces_do_not_survive_roundtrip() {
    let dir = assert_fs::TempDir::new().expect("tempdir");
    let file = dir.child("hostel_data.txt");

    hostel_with(2, &[("Mary Jane", 1, 1)]).save_to(file.path()).expect("save");

    let mut restored = Hostel::new(2);
    let report = restored.load_from(file.path()).expect("load");
    assert_eq!(report, LoadReport::Loaded { loaded: 0, skipped: 1 });
    assert!(restored.students().is_empty());
}

#[test]
fn hand_written_na_line_is_tolerated() {
    let dir = assert_fs::TempDir::new().expect("tempdir");
    let file = dir.child("hostel_data.txt");
    file.write_str("Ghost 4 NA\nAlice 1 1\n").expect("seed");

    let mut hostel = Hostel::new(2);
    let report = hostel.load_from(file.path()).expect("load");
    assert_eq!(report, LoadReport::Loaded { loaded: 1, skipped: 1 });
    assert!(hostel.find_by_roll(RollNumber(4)).is_none());
    assert_eq!(hostel.occupancy().occupied, 1);
}

#[test]
fn non_utf8_line_is_skipped_and_valid_students_survive_resave() {
    let dir = assert_fs::TempDir::new().expect("tempdir");
    let file = dir.child("hostel_data.txt");
    file.write_binary(b"Alice 1 1\nZo\xeb 2 2\nCarol 3 3\n").expect("seed");

    let mut hostel = Hostel::new(3);
    let report = hostel.load_from(file.path()).expect("load");
    assert_eq!(report, LoadReport::Loaded { loaded: 2, skipped: 1 });
    assert!(hostel.room(RoomId(2)).expect("room 2").is_available());

    hostel.save_to(file.path()).expect("save");
    file.assert("Alice 1 1\nCarol 3 3\n");
}

#[test]
fn roster_path_that_cannot_be_read_starts_empty() {
    let dir = assert_fs::TempDir::new().expect("tempdir");
    let not_a_file = dir.child("roster_dir");
    not_a_file.create_dir_all().expect("mkdir");

    let mut hostel = Hostel::new(2);
    let report = hostel.load_from(not_a_file.path()).expect("load");
    assert_eq!(report, LoadReport::NoPriorData);
    assert!(hostel.students().is_empty());
}
