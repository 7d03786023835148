use chrono::{Datelike, NaiveDate};

/// Nombre de jours du mois (`None` si le mois ou l'année sont hors bornes).
pub fn days_in_month(year: i32, month: u32) -> Option<u32> {
    let first = NaiveDate::from_ymd_opt(year, month, 1)?;
    let next = if month == 12 {
        NaiveDate::from_ymd_opt(year.checked_add(1)?, 1, 1)?
    } else {
        NaiveDate::from_ymd_opt(year, month + 1, 1)?
    };
    u32::try_from(next.signed_duration_since(first).num_days()).ok()
}

/// 0 = dimanche .. 6 = samedi.
pub fn day_of_week(date: NaiveDate) -> u32 {
    date.weekday().num_days_from_sunday()
}

pub(super) fn is_week_start(date: NaiveDate) -> bool {
    day_of_week(date) == 1
}
