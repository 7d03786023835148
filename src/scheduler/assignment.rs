use super::{calendar, MonthlyCounter, ScheduleError, ScheduleOptions, Scheduler, WeeklyCounter};
use crate::grid::{AssignmentGrid, Schedule, Shortfall, WorkerTotals};
use crate::model::{DayState, MonthTarget, Roster, ShiftDefinition, DAY_OFF_LABEL, REST_DAY_LABEL};
use chrono::Duration;

/// Créneau normalisé : nom définitif, effectif >= 1.
#[derive(Debug, Clone)]
pub(super) struct ResolvedShift {
    pub(super) name: String,
    pub(super) people: u32,
    pub(super) is_night: bool,
}

/// Normalise les définitions ; un nom réservé ou déjà pris est refusé.
pub(super) fn resolve_shifts(defs: &[ShiftDefinition]) -> Result<Vec<ResolvedShift>, ScheduleError> {
    let mut out: Vec<ResolvedShift> = Vec::with_capacity(defs.len());
    for (index, def) in defs.iter().enumerate() {
        let trimmed = def.name.trim();
        let name = if trimmed.is_empty() {
            format!("Shift {}", index + 1)
        } else {
            trimmed.to_string()
        };
        if name.eq_ignore_ascii_case(DAY_OFF_LABEL) || name.eq_ignore_ascii_case(REST_DAY_LABEL) {
            return Err(ScheduleError::InvalidShiftDefinition {
                index,
                reason: format!("shift name {name:?} is reserved"),
            });
        }
        // une cellule de la grille doit désigner un seul créneau
        if out.iter().any(|s| s.name == name) {
            return Err(ScheduleError::InvalidShiftDefinition {
                index,
                reason: format!("shift name {name:?} is already used"),
            });
        }
        let people = u32::try_from(def.people_required.max(1)).unwrap_or(u32::MAX);
        out.push(ResolvedShift {
            name,
            people,
            is_night: def.is_night,
        });
    }
    Ok(out)
}

pub(super) fn generate(
    scheduler: &Scheduler,
    roster: &Roster,
    defs: &[ShiftDefinition],
    target: MonthTarget,
) -> Result<Schedule, ScheduleError> {
    if roster.is_empty() {
        return Err(ScheduleError::EmptyRoster);
    }
    let invalid_month = || ScheduleError::InvalidMonth {
        year: target.year,
        month: target.month,
    };
    let first = target.first_day().ok_or_else(invalid_month)?;
    let days = target.days_in_month().ok_or_else(invalid_month)? as usize;
    let shifts = resolve_shifts(defs)?;
    let opts = scheduler.options;

    let workers = roster.len();
    let mut grid = AssignmentGrid::new(roster.iter(), days);
    let mut weekly = vec![WeeklyCounter::default(); workers];
    let mut monthly = vec![MonthlyCounter::default(); workers];
    let mut shortfalls = Vec::new();

    for day in 0..days {
        let date = first + Duration::days(day as i64);
        if calendar::is_week_start(date) {
            weekly.iter_mut().for_each(WeeklyCounter::reset_week);
        }

        // repos dû après une nuit
        for (w, week) in weekly.iter_mut().enumerate() {
            if week.rest_days_needed > 0 && *grid.state(w, day) == DayState::Unassigned {
                grid.set(w, day, DayState::Rest);
                week.rest_days_needed -= 1;
                week.days_off_this_week += 1;
            }
        }

        for shift in &shifts {
            let mut pool: Vec<usize> = (0..workers)
                .filter(|&w| is_eligible(grid.state(w, day), &weekly[w], &monthly[w], opts))
                .collect();
            // tri stable : à charge égale, l'ordre du roster départage
            pool.sort_by_key(|&w| (monthly[w].total_shifts, weekly[w].shifts_this_week));

            let mut assigned = 0u32;
            for &w in pool.iter().take(shift.people as usize) {
                grid.set(w, day, DayState::Assigned(shift.name.clone()));
                weekly[w].shifts_this_week += 1;
                monthly[w].total_shifts += 1;
                if shift.is_night {
                    weekly[w].rest_days_needed = opts.night_rest_days;
                    monthly[w].night_shifts += 1;
                }
                assigned += 1;
            }

            if assigned < shift.people {
                #[cfg(feature = "logging")]
                tracing::warn!(
                    day = day + 1,
                    shift = %shift.name,
                    required = shift.people,
                    assigned,
                    "understaffed shift"
                );
                shortfalls.push(Shortfall {
                    day,
                    shift: shift.name.clone(),
                    required: shift.people,
                    assigned,
                });
            }
        }

        // les jours de repos ont déjà été comptés ci-dessus
        for (w, week) in weekly.iter_mut().enumerate() {
            if *grid.state(w, day) == DayState::Unassigned {
                week.days_off_this_week += 1;
            }
        }
    }

    let totals = roster
        .iter()
        .zip(monthly)
        .map(|(worker, counter)| WorkerTotals {
            worker: worker.to_string(),
            counter,
        })
        .collect();

    #[cfg(feature = "logging")]
    tracing::debug!(
        month = %target,
        workers,
        shifts = shifts.len(),
        shortfalls = shortfalls.len(),
        "schedule generated"
    );

    Ok(Schedule {
        target,
        grid,
        totals,
        shortfalls,
    })
}

/// Libre ce jour-là, sous les plafonds, et encore capable de prendre ses jours off de la semaine.
fn is_eligible(
    state: &DayState,
    week: &WeeklyCounter,
    month: &MonthlyCounter,
    opts: ScheduleOptions,
) -> bool {
    if *state != DayState::Unassigned {
        return false;
    }
    if week.shifts_this_week >= opts.max_shifts_per_week {
        return false;
    }
    if month.total_shifts >= opts.max_shifts_per_month {
        return false;
    }

    let elapsed = i64::from(week.shifts_this_week) + i64::from(week.days_off_this_week);
    let remaining_days = 7 - elapsed;
    let remaining_off = i64::from(opts.min_days_off_per_week) - i64::from(week.days_off_this_week);
    remaining_off <= remaining_days - 1
}
