use thiserror::Error;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Options de génération
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ScheduleOptions {
    pub max_shifts_per_week: u32,
    pub max_shifts_per_month: u32,
    pub min_days_off_per_week: u32,
    /// Jours de repos accordés après une nuit.
    pub night_rest_days: u32,
}

impl Default for ScheduleOptions {
    fn default() -> Self {
        Self {
            max_shifts_per_week: 4,
            max_shifts_per_month: 21,
            min_days_off_per_week: 2,
            night_rest_days: 2,
        }
    }
}

/// Compteurs remis à zéro chaque lundi (sauf le repos dû, qui court d'une semaine à l'autre).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WeeklyCounter {
    pub shifts_this_week: u32,
    pub days_off_this_week: u32,
    pub rest_days_needed: u32,
}

impl WeeklyCounter {
    pub(super) fn reset_week(&mut self) {
        self.shifts_this_week = 0;
        self.days_off_this_week = 0;
    }
}

/// Totaux du mois pour une personne.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct MonthlyCounter {
    pub total_shifts: u32,
    pub night_shifts: u32,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ScheduleError {
    #[error("roster is empty: add at least one worker")]
    EmptyRoster,
    #[error("invalid month: {year}-{month}")]
    InvalidMonth { year: i32, month: u32 },
    #[error("invalid shift definition #{index}: {reason}")]
    InvalidShiftDefinition { index: usize, reason: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum ViolationKind {
    /// La cellule nomme un créneau absent des définitions.
    UnknownShift,
    WeeklyCap,
    MonthlyCap,
    MissingNightRest,
}

/// Écart détecté a posteriori sur un planning.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Violation {
    pub worker: String,
    /// Jour (index 0) où l'écart est constaté.
    pub day: usize,
    pub kind: ViolationKind,
}
