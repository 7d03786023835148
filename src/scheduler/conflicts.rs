use super::{assignment, calendar, ScheduleError, ScheduleOptions, Violation, ViolationKind};
use crate::grid::Schedule;
use crate::model::{DayState, ShiftDefinition};
use chrono::Duration;

pub(super) fn audit(
    schedule: &Schedule,
    shifts: &[ShiftDefinition],
    opts: ScheduleOptions,
) -> Result<Vec<Violation>, ScheduleError> {
    let resolved = assignment::resolve_shifts(shifts)?;
    let first = schedule
        .target
        .first_day()
        .ok_or(ScheduleError::InvalidMonth {
            year: schedule.target.year,
            month: schedule.target.month,
        })?;
    let days = schedule.grid.days();
    let mut out = Vec::new();

    for row in schedule.grid.rows() {
        let mut week = 0u32;
        let mut month = 0u32;
        let violation = |day, kind| Violation {
            worker: row.worker.clone(),
            day,
            kind,
        };

        for (day, state) in row.days.iter().enumerate() {
            if calendar::is_week_start(first + Duration::days(day as i64)) {
                week = 0;
            }
            let DayState::Assigned(name) = state else {
                continue;
            };
            let Some(shift) = resolved.iter().find(|s| &s.name == name) else {
                out.push(violation(day, ViolationKind::UnknownShift));
                continue;
            };

            week += 1;
            month += 1;
            if week == opts.max_shifts_per_week + 1 {
                out.push(violation(day, ViolationKind::WeeklyCap));
            }
            if month == opts.max_shifts_per_month + 1 {
                out.push(violation(day, ViolationKind::MonthlyCap));
            }

            if shift.is_night {
                let rest_end = (day + 1 + opts.night_rest_days as usize).min(days);
                for next in day + 1..rest_end {
                    if row.days[next] != DayState::Rest {
                        out.push(violation(next, ViolationKind::MissingNightRest));
                    }
                }
            }
        }
    }

    Ok(out)
}
