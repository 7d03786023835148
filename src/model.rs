use chrono::{Datelike, Local, NaiveDate, NaiveTime};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Libellé d'une journée non travaillée.
pub const DAY_OFF_LABEL: &str = "Day Off";
/// Libellé d'une journée de récupération après une nuit.
pub const REST_DAY_LABEL: &str = "Rest Day";

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RosterError {
    #[error("worker name cannot be empty")]
    EmptyName,
    #[error("worker already exists: {0}")]
    Duplicate(String),
    #[error("unknown worker: {0}")]
    Unknown(String),
    #[error("worker index out of range: {0}")]
    OutOfRange(usize),
}

/// Liste ordonnée des personnes planifiables (noms uniques, sensibles à la casse).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(
    feature = "serde",
    serde(try_from = "Vec<String>", into = "Vec<String>")
)]
pub struct Roster {
    workers: Vec<String>,
}

impl TryFrom<Vec<String>> for Roster {
    type Error = RosterError;

    fn try_from(names: Vec<String>) -> Result<Self, Self::Error> {
        Self::from_names(names)
    }
}

impl From<Roster> for Vec<String> {
    fn from(roster: Roster) -> Self {
        roster.workers
    }
}

impl Roster {
    pub fn new() -> Self {
        Self::default()
    }

    /// Construit un roster en ajoutant les noms dans l'ordre ; échoue au premier rejet.
    pub fn from_names<I, S>(names: I) -> Result<Self, RosterError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut roster = Self::new();
        for name in names {
            roster.add(name.as_ref())?;
        }
        Ok(roster)
    }

    /// Ajoute une personne en fin de liste. Le nom est nettoyé des espaces.
    pub fn add(&mut self, name: &str) -> Result<(), RosterError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(RosterError::EmptyName);
        }
        if self.contains(name) {
            return Err(RosterError::Duplicate(name.to_string()));
        }
        self.workers.push(name.to_string());
        Ok(())
    }

    pub fn remove(&mut self, name: &str) -> Result<String, RosterError> {
        let pos = self
            .workers
            .iter()
            .position(|w| w == name)
            .ok_or_else(|| RosterError::Unknown(name.to_string()))?;
        Ok(self.workers.remove(pos))
    }

    pub fn remove_at(&mut self, index: usize) -> Result<String, RosterError> {
        if index >= self.workers.len() {
            return Err(RosterError::OutOfRange(index));
        }
        Ok(self.workers.remove(index))
    }

    pub fn contains(&self, name: &str) -> bool {
        self.workers.iter().any(|w| w == name)
    }

    pub fn len(&self) -> usize {
        self.workers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.workers.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.workers.iter().map(String::as_str)
    }

    pub fn names(&self) -> &[String] {
        &self.workers
    }
}

/// Définition d'un créneau quotidien récurrent.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ShiftDefinition {
    #[cfg_attr(feature = "serde", serde(default))]
    pub name: String,
    #[cfg_attr(feature = "serde", serde(with = "hhmm"))]
    pub start: NaiveTime,
    #[cfg_attr(feature = "serde", serde(with = "hhmm"))]
    pub end: NaiveTime,
    /// Effectif demandé ; une valeur <= 0 est ramenée à 1 lors de la génération.
    #[cfg_attr(feature = "serde", serde(default = "one"))]
    pub people_required: i64,
    #[cfg_attr(feature = "serde", serde(default))]
    pub is_night: bool,
}

#[cfg(feature = "serde")]
fn one() -> i64 {
    1
}

impl ShiftDefinition {
    pub fn new<N: Into<String>>(
        name: N,
        start: NaiveTime,
        end: NaiveTime,
        people_required: i64,
        is_night: bool,
    ) -> Self {
        Self {
            name: name.into(),
            start,
            end,
            people_required,
            is_night,
        }
    }

    /// Créneaux proposés par défaut : matin, après-midi, nuit, puis `Shift N` 09:00-17:00.
    pub fn defaults(count: usize) -> Vec<Self> {
        let stock = [
            ("Morning", 8, 16, false),
            ("Afternoon", 16, 0, false),
            ("Night", 0, 8, true),
        ];
        (0..count)
            .map(|i| {
                let (name, start, end, night) = stock
                    .get(i)
                    .map(|&(n, s, e, night)| (n.to_string(), s, e, night))
                    .unwrap_or_else(|| (format!("Shift {}", i + 1), 9, 17, false));
                Self::new(name, hour(start), hour(end), 2, night)
            })
            .collect()
    }

    /// Durée en minutes ; un créneau dont la fin précède le début passe minuit.
    pub fn duration_minutes(&self) -> i64 {
        let minutes = (self.end - self.start).num_minutes();
        if minutes <= 0 {
            minutes + 24 * 60
        } else {
            minutes
        }
    }
}

fn hour(h: u32) -> NaiveTime {
    NaiveTime::from_hms_opt(h, 0, 0).unwrap_or(NaiveTime::MIN)
}

/// État d'une personne pour une journée donnée.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(
    feature = "serde",
    serde(rename_all = "snake_case", tag = "state", content = "shift")
)]
pub enum DayState {
    Unassigned,
    Rest,
    Assigned(String),
}

impl DayState {
    pub fn is_off(&self) -> bool {
        !matches!(self, DayState::Assigned(_))
    }

    pub fn shift_name(&self) -> Option<&str> {
        match self {
            DayState::Assigned(name) => Some(name),
            _ => None,
        }
    }

    pub fn label(&self) -> &str {
        match self {
            DayState::Unassigned => DAY_OFF_LABEL,
            DayState::Rest => REST_DAY_LABEL,
            DayState::Assigned(name) => name,
        }
    }
}

impl fmt::Display for DayState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("invalid month: {input}")]
pub struct MonthParseError {
    pub input: String,
}

const MONTH_NAMES: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// Mois cible d'une génération (calendrier grégorien proleptique).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct MonthTarget {
    pub year: i32,
    pub month: u32,
}

impl MonthTarget {
    /// `None` si le mois sort de 1-12 ou si l'année n'est pas représentable.
    pub fn new(year: i32, month: u32) -> Option<Self> {
        NaiveDate::from_ymd_opt(year, month, 1)?;
        Some(Self { year, month })
    }

    /// Mois courant selon l'horloge locale.
    pub fn current() -> Self {
        let today = Local::now().date_naive();
        Self {
            year: today.year(),
            month: today.month(),
        }
    }

    pub fn first_day(&self) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(self.year, self.month, 1)
    }

    pub fn days_in_month(&self) -> Option<u32> {
        crate::scheduler::calendar::days_in_month(self.year, self.month)
    }

    /// Ex. `February 2024`.
    pub fn label(&self) -> String {
        let name = self
            .month
            .checked_sub(1)
            .and_then(|i| MONTH_NAMES.get(i as usize))
            .copied()
            .unwrap_or("?");
        format!("{name} {}", self.year)
    }
}

impl fmt::Display for MonthTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month)
    }
}

impl FromStr for MonthTarget {
    type Err = MonthParseError;

    /// Format `YYYY-MM`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let err = || MonthParseError {
            input: s.to_string(),
        };
        let (y, m) = s.trim().split_once('-').ok_or_else(err)?;
        let year: i32 = y.parse().map_err(|_| err())?;
        let month: u32 = m.parse().map_err(|_| err())?;
        Self::new(year, month).ok_or_else(err)
    }
}

#[cfg(feature = "serde")]
mod hhmm {
    use chrono::NaiveTime;
    use serde::{de::Error, Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(t: &NaiveTime, s: S) -> Result<S::Ok, S::Error> {
        s.collect_str(&t.format("%H:%M"))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<NaiveTime, D::Error> {
        let raw = String::deserialize(d)?;
        super::parse_time(&raw).ok_or_else(|| D::Error::custom(format!("invalid time: {raw}")))
    }
}

/// Accepte `HH:MM` ou `HH:MM:SS`.
pub fn parse_time(raw: &str) -> Option<NaiveTime> {
    let raw = raw.trim();
    NaiveTime::parse_from_str(raw, "%H:%M")
        .or_else(|_| NaiveTime::parse_from_str(raw, "%H:%M:%S"))
        .ok()
}
