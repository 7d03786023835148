use crate::grid::Schedule;
use crate::model::{parse_time, Roster, ShiftDefinition};
use crate::render::day_headers;
use anyhow::{bail, Context};
use csv::{ReaderBuilder, WriterBuilder};
use std::io::Write;
use std::path::Path;
use tempfile::NamedTempFile;

/// Import de personnes depuis CSV: header `name`
pub fn import_workers_csv<P: AsRef<Path>>(path: P) -> anyhow::Result<Roster> {
    let mut rdr = ReaderBuilder::new().has_headers(true).from_path(path)?;
    let mut roster = Roster::new();
    for (line, rec) in rdr.records().enumerate() {
        let rec = rec?;
        let name = rec.get(0).context("missing name")?.trim();
        if name.is_empty() {
            bail!("invalid worker row {} (empty)", line + 1);
        }
        roster.add(name)?;
    }
    Ok(roster)
}

/// Import de créneaux: header `name,start,end,people_required[,is_night]` (heures `HH:MM`)
pub fn import_shifts_csv<P: AsRef<Path>>(path: P) -> anyhow::Result<Vec<ShiftDefinition>> {
    let mut rdr = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_path(path)?;
    let mut out = Vec::new();
    for rec in rdr.records() {
        let rec = rec?;
        let name = rec.get(0).context("missing name")?.trim().to_string();
        let start = rec.get(1).context("missing start")?;
        let end = rec.get(2).context("missing end")?;
        let start = parse_time(start).with_context(|| format!("invalid start time: {start}"))?;
        let end = parse_time(end).with_context(|| format!("invalid end time: {end}"))?;
        // effectif illisible => 1, comme une saisie de formulaire
        let people = rec
            .get(3)
            .and_then(|p| p.trim().parse::<i64>().ok())
            .unwrap_or(1);
        let is_night = match rec.get(4).map(str::trim) {
            Some(flag) if !flag.is_empty() => parse_bool(flag)
                .with_context(|| format!("invalid is_night value for shift {name:?}"))?,
            _ => false,
        };
        out.push(ShiftDefinition::new(name, start, end, people, is_night));
    }
    Ok(out)
}

fn parse_bool(s: &str) -> anyhow::Result<bool> {
    match s.to_ascii_lowercase().as_str() {
        "true" | "1" | "yes" | "y" => Ok(true),
        "false" | "0" | "no" | "n" => Ok(false),
        _ => bail!("expected boolean"),
    }
}

/// Export CSV (tableur): `Worker,1 Mon,...,total_shifts,night_shifts`
pub fn export_schedule_csv<P: AsRef<Path>>(path: P, schedule: &Schedule) -> anyhow::Result<()> {
    let mut w = WriterBuilder::new().has_headers(false).from_writer(Vec::new());

    let mut header = vec!["Worker".to_string()];
    header.extend(day_headers(schedule.target));
    header.push("total_shifts".into());
    header.push("night_shifts".into());
    w.write_record(&header)?;

    for row in schedule.grid.rows() {
        let totals = schedule.totals_for(&row.worker).copied().unwrap_or_default();
        let mut record: Vec<String> = Vec::with_capacity(row.days.len() + 3);
        record.push(row.worker.clone());
        record.extend(row.days.iter().map(|d| d.label().to_string()));
        record.push(totals.total_shifts.to_string());
        record.push(totals.night_shifts.to_string());
        w.write_record(&record)?;
    }

    let data = w
        .into_inner()
        .map_err(|e| anyhow::anyhow!("flushing csv buffer: {}", e.error()))?;
    write_atomic(path.as_ref(), &data)
}

/// Export JSON du planning (jolie mise en forme)
pub fn export_schedule_json<P: AsRef<Path>>(path: P, schedule: &Schedule) -> anyhow::Result<()> {
    let json = serde_json::to_vec_pretty(schedule)?;
    write_atomic(path.as_ref(), &json)
}

/// Écrit via un fichier temporaire voisin puis renomme.
pub(crate) fn write_atomic(path: &Path, data: &[u8]) -> anyhow::Result<()> {
    let dir = match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    };
    let mut tmp = NamedTempFile::new_in(dir).with_context(|| "creating temp file")?;
    tmp.write_all(data)?;
    tmp.flush()?;
    tmp.as_file().sync_all()?;
    tmp.persist(path)
        .with_context(|| format!("atomic rename to {}", path.display()))?;
    Ok(())
}
