use crate::io::write_atomic;
use crate::model::{MonthTarget, Roster, ShiftDefinition};
use crate::scheduler::ScheduleOptions;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Fichier de plan JSON : personnes, créneaux, options et mois visé.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Plan {
    /// `YYYY-MM` ; mois courant si absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub month: Option<String>,
    #[serde(default)]
    pub workers: Roster,
    #[serde(default)]
    pub shifts: Vec<ShiftDefinition>,
    #[serde(default)]
    pub options: ScheduleOptions,
}

impl Plan {
    /// Plan d'exemple avec les créneaux par défaut.
    pub fn sample(shift_count: usize) -> Self {
        let workers = Roster::from_names(["Alice", "Bob", "Carol", "Dave"]).unwrap_or_default();
        Self {
            month: Some(MonthTarget::current().to_string()),
            workers,
            shifts: ShiftDefinition::defaults(shift_count),
            options: ScheduleOptions::default(),
        }
    }

    pub fn target(&self) -> Result<Option<MonthTarget>> {
        self.month
            .as_deref()
            .map(|m| m.parse::<MonthTarget>().context("plan month"))
            .transpose()
    }
}

pub fn load_plan<P: AsRef<Path>>(path: P) -> Result<Plan> {
    let path = path.as_ref();
    let data = fs::read(path).with_context(|| format!("reading plan {}", path.display()))?;
    let plan: Plan = serde_json::from_slice(&data)
        .with_context(|| format!("parsing plan {}", path.display()))?;
    plan.target()?;
    Ok(plan)
}

pub fn save_plan<P: AsRef<Path>>(path: P, plan: &Plan) -> Result<()> {
    let json = serde_json::to_vec_pretty(plan)?;
    write_atomic(path.as_ref(), &json)
}
