mod assignment;
pub mod calendar;
mod conflicts;
mod types;

pub use types::{
    MonthlyCounter, ScheduleError, ScheduleOptions, Violation, ViolationKind, WeeklyCounter,
};

use crate::grid::Schedule;
use crate::model::{MonthTarget, Roster, ShiftDefinition};

/// Scheduler : génère un planning mensuel à partir d'un roster et de créneaux.
///
/// Le calcul est pur : aucun état ne survit d'un appel à l'autre.
#[derive(Debug, Default, Clone, Copy)]
pub struct Scheduler {
    options: ScheduleOptions,
}

impl Scheduler {
    pub fn new(options: ScheduleOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> ScheduleOptions {
        self.options
    }

    /// Affectation gloutonne « moins chargé d'abord », jour par jour, créneau par créneau.
    pub fn generate(
        &self,
        roster: &Roster,
        shifts: &[ShiftDefinition],
        target: MonthTarget,
    ) -> Result<Schedule, ScheduleError> {
        assignment::generate(self, roster, shifts, target)
    }

    /// Vérifie a posteriori un planning contre les options de ce scheduler.
    pub fn audit(
        &self,
        schedule: &Schedule,
        shifts: &[ShiftDefinition],
    ) -> Result<Vec<Violation>, ScheduleError> {
        conflicts::audit(schedule, shifts, self.options)
    }
}

/// Raccourci avec les options par défaut.
pub fn generate(
    roster: &Roster,
    shifts: &[ShiftDefinition],
    year: i32,
    month: u32,
) -> Result<Schedule, ScheduleError> {
    if roster.is_empty() {
        return Err(ScheduleError::EmptyRoster);
    }
    let target =
        MonthTarget::new(year, month).ok_or(ScheduleError::InvalidMonth { year, month })?;
    Scheduler::default().generate(roster, shifts, target)
}

pub fn audit(
    schedule: &Schedule,
    shifts: &[ShiftDefinition],
    options: ScheduleOptions,
) -> Result<Vec<Violation>, ScheduleError> {
    conflicts::audit(schedule, shifts, options)
}
