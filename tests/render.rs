#![forbid(unsafe_code)]
use chrono::NaiveTime;
use roulement::{generate, GridRenderer, Roster, ShiftDefinition, TextTable};

fn t(h: u32) -> NaiveTime {
    NaiveTime::from_hms_opt(h, 0, 0).unwrap()
}

fn sample() -> roulement::Schedule {
    let roster = Roster::from_names(["Ann", "Ben", "Cid"]).unwrap();
    let shifts = [
        ShiftDefinition::new("Day", t(9), t(17), 1, false),
        ShiftDefinition::new("Night", t(0), t(8), 1, true),
    ];
    generate(&roster, &shifts, 2021, 2).unwrap()
}

#[test]
fn text_table_february_2021() {
    let out = TextTable::default().render(&sample());
    insta::assert_snapshot!(out, @r"
Schedule for February 2021
Worker | 1 Mon   | 2 Tue    | 3 Wed    | 4 Thu    | 5 Fri    | 6 Sat    | 7 Sun    | 8 Mon   | 9 Tue    | 10 Wed   | 11 Thu   | 12 Fri   | 13 Sat   | 14 Sun   | 15 Mon  | 16 Tue   | 17 Wed   | 18 Thu   | 19 Fri   | 20 Sat   | 21 Sun   | 22 Mon  | 23 Tue   | 24 Wed   | 25 Thu   | 26 Fri   | 27 Sat   | 28 Sun
-------+---------+----------+----------+----------+----------+----------+----------+---------+----------+----------+----------+----------+----------+----------+---------+----------+----------+----------+----------+----------+----------+---------+----------+----------+----------+----------+----------+---------
Ann    | Day     | Night    | Rest Day | Rest Day | Day      | Day      | Day Off  | Night   | Rest Day | Rest Day | Day      | Night    | Rest Day | Rest Day | Day     | Night    | Rest Day | Rest Day | Day      | Day      | Day Off  | Night   | Rest Day | Rest Day | Day      | Night    | Rest Day | Rest Day
Ben    | Night   | Rest Day | Rest Day | Day      | Night    | Rest Day | Rest Day | Day     | Night    | Rest Day | Rest Day | Day      | Day      | Day Off  | Night   | Rest Day | Rest Day | Day      | Night    | Rest Day | Rest Day | Day     | Day      | Day      | Night    | Rest Day | Rest Day | Day Off
Cid    | Day Off | Day      | Day      | Night    | Rest Day | Rest Day | Day      | Day Off | Day      | Day      | Night    | Rest Day | Rest Day | Day      | Day Off | Day      | Day      | Night    | Rest Day | Rest Day | Day      | Day Off | Night    | Rest Day | Rest Day | Day      | Day      | Day

Monthly distribution:
Ann: 14 total shifts (6 night shifts)
Ben: 14 total shifts (6 night shifts)
Cid: 16 total shifts (4 night shifts)
");
}

#[test]
fn text_table_without_totals() {
    let out = TextTable { show_totals: false }.render(&sample());
    let lines: Vec<&str> = out.lines().collect();
    assert_eq!(lines.len(), 6);
    assert_eq!(lines[0], "Schedule for February 2021");
    assert!(lines[1].starts_with("Worker | 1 Mon   | 2 Tue    |"));
    assert!(lines[1].ends_with("| 28 Sun"));
    assert!(lines[5].starts_with("Cid    | Day Off | Day      |"));
    assert!(!out.contains("Monthly distribution"));
}
