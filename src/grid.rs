use crate::model::{DayState, MonthTarget};
use crate::scheduler::MonthlyCounter;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Ligne du planning : une personne et ses états jour par jour.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct GridRow {
    pub worker: String,
    pub days: Vec<DayState>,
}

/// Grille personne × jour, dans l'ordre du roster.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct AssignmentGrid {
    days: usize,
    rows: Vec<GridRow>,
}

impl AssignmentGrid {
    /// Grille où tout le monde est en `Unassigned`.
    pub fn new<'a, I>(workers: I, days: usize) -> Self
    where
        I: IntoIterator<Item = &'a str>,
    {
        let rows = workers
            .into_iter()
            .map(|w| GridRow {
                worker: w.to_string(),
                days: vec![DayState::Unassigned; days],
            })
            .collect();
        Self { days, rows }
    }

    pub fn days(&self) -> usize {
        self.days
    }

    pub fn rows(&self) -> &[GridRow] {
        &self.rows
    }

    pub fn row(&self, worker: &str) -> Option<&GridRow> {
        self.rows.iter().find(|r| r.worker == worker)
    }

    pub fn cell(&self, worker: &str, day: usize) -> Option<&DayState> {
        self.row(worker).and_then(|r| r.days.get(day))
    }

    /// Personnes affectées à `shift` le jour `day`, dans l'ordre du roster.
    pub fn assigned_on(&self, day: usize, shift: &str) -> Vec<&str> {
        self.rows
            .iter()
            .filter(|r| r.days.get(day).and_then(DayState::shift_name) == Some(shift))
            .map(|r| r.worker.as_str())
            .collect()
    }

    pub(crate) fn state(&self, row: usize, day: usize) -> &DayState {
        &self.rows[row].days[day]
    }

    pub(crate) fn set(&mut self, row: usize, day: usize, state: DayState) {
        self.rows[row].days[day] = state;
    }
}

/// Totaux mensuels d'une personne (affichage informatif).
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct WorkerTotals {
    pub worker: String,
    #[cfg_attr(feature = "serde", serde(flatten))]
    pub counter: MonthlyCounter,
}

/// Créneau pourvu en dessous de l'effectif demandé.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Shortfall {
    pub day: usize,
    pub shift: String,
    pub required: u32,
    pub assigned: u32,
}

/// Résultat d'une génération.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Schedule {
    pub target: MonthTarget,
    pub grid: AssignmentGrid,
    pub totals: Vec<WorkerTotals>,
    pub shortfalls: Vec<Shortfall>,
}

impl Schedule {
    pub fn totals_for(&self, worker: &str) -> Option<&MonthlyCounter> {
        self.totals
            .iter()
            .find(|t| t.worker == worker)
            .map(|t| &t.counter)
    }

    pub fn is_fully_staffed(&self) -> bool {
        self.shortfalls.is_empty()
    }
}
