#![forbid(unsafe_code)]
#![cfg(feature = "serde")]
use chrono::NaiveTime;
use roulement::{
    config::{load_plan, save_plan, Plan},
    generate, io, MonthTarget, Roster, ShiftDefinition,
};
use std::fs;
use tempfile::tempdir;

#[test]
fn import_workers_and_shifts_from_csv() {
    let dir = tempdir().unwrap();
    let people = dir.path().join("people.csv");
    let shifts = dir.path().join("shifts.csv");
    fs::write(&people, "name\nAlice\n Bob \n").unwrap();
    fs::write(
        &shifts,
        "name,start,end,people_required,is_night\n\
         Morning,08:00,16:00,2,no\n\
         Night,00:00,08:00,abc,yes\n\
         ,09:00,17:00,1\n",
    )
    .unwrap();

    let roster = io::import_workers_csv(&people).unwrap();
    assert_eq!(roster.names(), ["Alice", "Bob"]);

    let defs = io::import_shifts_csv(&shifts).unwrap();
    assert_eq!(defs.len(), 3);
    assert_eq!(defs[0].people_required, 2);
    assert!(!defs[0].is_night);
    assert_eq!(defs[1].people_required, 1);
    assert!(defs[1].is_night);
    assert_eq!(defs[2].name, "");
    assert_eq!(defs[1].duration_minutes(), 8 * 60);
}

#[test]
fn duplicate_worker_in_csv_fails() {
    let dir = tempdir().unwrap();
    let people = dir.path().join("people.csv");
    fs::write(&people, "name\nAlice\nAlice\n").unwrap();
    assert!(io::import_workers_csv(&people).is_err());
}

#[test]
fn bad_time_in_shift_csv_fails() {
    let dir = tempdir().unwrap();
    let shifts = dir.path().join("shifts.csv");
    fs::write(&shifts, "name,start,end,people_required\nMorning,8h,16:00,2\n").unwrap();
    assert!(io::import_shifts_csv(&shifts).is_err());
}

#[test]
fn export_schedule_as_spreadsheet_csv() {
    let dir = tempdir().unwrap();
    let out = dir.path().join("schedule.csv");
    let roster = Roster::from_names(["Alice", "Bob", "Carol"]).unwrap();
    let schedule = generate(&roster, &ShiftDefinition::defaults(3), 2024, 2).unwrap();
    io::export_schedule_csv(&out, &schedule).unwrap();

    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(false)
        .from_path(&out)
        .unwrap();
    let rows: Vec<csv::StringRecord> = rdr.records().map(Result::unwrap).collect();
    assert_eq!(rows.len(), 4);
    assert_eq!(rows[0].len(), 1 + 29 + 2);
    assert_eq!(&rows[0][1], "1 Thu");
    assert_eq!(&rows[0][29], "29 Thu");
    assert_eq!(&rows[1][0], "Alice");

    for (row, grid_row) in rows[1..].iter().zip(schedule.grid.rows()) {
        let total: u32 = row[30].parse().unwrap();
        assert_eq!(total, schedule.totals_for(&grid_row.worker).unwrap().total_shifts);
        assert_eq!(&row[1], grid_row.days[0].label());
    }
}

#[test]
fn export_schedule_json_roundtrip() {
    let dir = tempdir().unwrap();
    let out = dir.path().join("schedule.json");
    let roster = Roster::from_names(["Alice", "Bob"]).unwrap();
    let schedule = generate(&roster, &ShiftDefinition::defaults(2), 2024, 3).unwrap();
    io::export_schedule_json(&out, &schedule).unwrap();

    let loaded: roulement::Schedule =
        serde_json::from_slice(&fs::read(&out).unwrap()).unwrap();
    assert_eq!(loaded, schedule);
}

#[test]
fn plan_file_roundtrip() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("plan.json");
    let mut plan = Plan::sample(3);
    plan.month = Some("2024-02".into());
    save_plan(&path, &plan).unwrap();

    let loaded = load_plan(&path).unwrap();
    assert_eq!(loaded, plan);
    assert_eq!(loaded.target().unwrap(), MonthTarget::new(2024, 2));
    assert_eq!(loaded.shifts[2].start, NaiveTime::from_hms_opt(0, 0, 0).unwrap());
    assert!(loaded.shifts[2].is_night);
}

#[test]
fn plan_with_bad_month_is_rejected() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("plan.json");
    fs::write(&path, r#"{"month":"2024-13","workers":["Alice"]}"#).unwrap();
    assert!(load_plan(&path).is_err());
}
