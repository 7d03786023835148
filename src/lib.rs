#![forbid(unsafe_code)]
//! Roulement — planification mensuelle d'équipes tournantes (sans BD).
//!
//! - Affectation gloutonne « moins chargé d'abord », déterministe.
//! - Plafonds hebdomadaire et mensuel, deux jours off par semaine visés.
//! - Repos obligatoire après une nuit.
//! - Rendu texte, export CSV/JSON en dehors du cœur de calcul.

pub mod grid;
pub mod model;
pub mod render;
pub mod scheduler;

#[cfg(feature = "serde")]
pub mod config;
#[cfg(feature = "serde")]
pub mod io;

pub use grid::{AssignmentGrid, GridRow, Schedule, Shortfall, WorkerTotals};
pub use model::{DayState, MonthTarget, Roster, RosterError, ShiftDefinition};
pub use render::{GridRenderer, TextTable};
pub use scheduler::{
    audit, generate, MonthlyCounter, ScheduleError, ScheduleOptions, Scheduler, Violation,
    ViolationKind,
};

#[cfg(feature = "serde")]
pub use config::{load_plan, save_plan, Plan};
