use crate::grid::Schedule;
use crate::model::MonthTarget;
use chrono::Duration;
use std::fmt::Write as _;

/// Permet de customiser le rendu d'un planning (texte, HTML, etc.).
pub trait GridRenderer {
    fn render(&self, schedule: &Schedule) -> String;
}

/// Tableau texte aligné, une ligne par personne.
#[derive(Debug, Clone, Copy)]
pub struct TextTable {
    /// Ajoute la répartition mensuelle sous le tableau.
    pub show_totals: bool,
}

impl Default for TextTable {
    fn default() -> Self {
        Self { show_totals: true }
    }
}

impl GridRenderer for TextTable {
    fn render(&self, schedule: &Schedule) -> String {
        let mut header = vec!["Worker".to_string()];
        header.extend(day_headers(schedule.target));

        let body: Vec<Vec<&str>> = schedule
            .grid
            .rows()
            .iter()
            .map(|row| {
                std::iter::once(row.worker.as_str())
                    .chain(row.days.iter().map(|d| d.label()))
                    .collect()
            })
            .collect();

        let mut widths: Vec<usize> = header.iter().map(|h| h.chars().count()).collect();
        for row in &body {
            for (w, cell) in widths.iter_mut().zip(row) {
                *w = (*w).max(cell.chars().count());
            }
        }

        let mut out = String::new();
        let _ = writeln!(out, "Schedule for {}", schedule.target.label());
        push_line(&mut out, header.iter().map(String::as_str), &widths);
        let rule: Vec<String> = widths.iter().map(|w| "-".repeat(*w)).collect();
        let _ = writeln!(out, "{}", rule.join("-+-"));
        for row in &body {
            push_line(&mut out, row.iter().copied(), &widths);
        }

        if self.show_totals {
            let _ = writeln!(out, "\nMonthly distribution:");
            for t in &schedule.totals {
                let _ = writeln!(
                    out,
                    "{}: {} total shifts ({} night shifts)",
                    t.worker, t.counter.total_shifts, t.counter.night_shifts
                );
            }
        }
        out
    }
}

fn push_line<'a, I>(out: &mut String, cells: I, widths: &[usize])
where
    I: Iterator<Item = &'a str>,
{
    let padded: Vec<String> = cells
        .zip(widths)
        .map(|(cell, &w)| format!("{cell:<w$}"))
        .collect();
    out.push_str(padded.join(" | ").trim_end());
    out.push('\n');
}

/// En-têtes de colonnes `1 Mon`, `2 Tue`, ... pour le mois cible.
pub fn day_headers(target: MonthTarget) -> Vec<String> {
    let (Some(first), Some(days)) = (target.first_day(), target.days_in_month()) else {
        return Vec::new();
    };
    let mut buf = itoa::Buffer::new();
    (0..days)
        .map(|offset| {
            let date = first + Duration::days(i64::from(offset));
            let mut label = String::from(buf.format(offset + 1));
            label.push(' ');
            label.push_str(&date.format("%a").to_string());
            label
        })
        .collect()
}
