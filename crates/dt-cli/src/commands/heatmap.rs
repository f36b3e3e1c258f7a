//! Heatmap command: renders the 365-day activity grid as text.

use std::io::Write;

use anyhow::Result;
use chrono::{NaiveDate, Weekday};
use dt_core::{Entry, HeatLevel, heatmap};

const WEEKDAY_ROWS: [(Weekday, &str); 7] = [
    (Weekday::Sun, "Sun"),
    (Weekday::Mon, "Mon"),
    (Weekday::Tue, "Tue"),
    (Weekday::Wed, "Wed"),
    (Weekday::Thu, "Thu"),
    (Weekday::Fri, "Fri"),
    (Weekday::Sat, "Sat"),
];

/// Shaded block per severity tier, in Less → More order.
const fn glyph(level: HeatLevel) -> char {
    match level {
        HeatLevel::None => '·',
        HeatLevel::Light => '░',
        HeatLevel::Medium => '▒',
        HeatLevel::High => '▓',
        HeatLevel::Peak => '█',
    }
}

pub fn run<W: Write>(writer: &mut W, entries: &[Entry], today: NaiveDate) -> Result<()> {
    let map = heatmap(entries, today);
    let weeks = map.weeks();

    // Month header: place each label at the column containing its cell,
    // skipping labels that would overlap the previous one.
    let mut column_starts = Vec::with_capacity(weeks.len());
    let mut offset = 0;
    for week in &weeks {
        column_starts.push(offset);
        offset += week.len();
    }
    let mut header = vec![' '; weeks.len()];
    for label in map.month_labels() {
        let column = column_starts
            .iter()
            .rposition(|&start| start <= label.index)
            .unwrap_or(0);
        if header[column.saturating_sub(1)..].iter().take(4).all(|&c| c == ' ')
            && column + label.label.len() <= header.len()
        {
            for (i, c) in label.label.chars().enumerate() {
                header[column + i] = c;
            }
        }
    }

    writeln!(writer, "Activity heatmap (last 365 days)")?;
    writeln!(writer)?;
    writeln!(writer, "     {}", header.iter().collect::<String>())?;

    for (weekday, label) in WEEKDAY_ROWS {
        let row: String = weeks
            .iter()
            .map(|week| {
                week.iter()
                    .find(|cell| cell.weekday == weekday)
                    .map_or(' ', |cell| glyph(cell.level()))
            })
            .collect();
        writeln!(writer, "{label}  {row}")?;
    }

    writeln!(writer)?;
    writeln!(writer, "Less ·░▒▓█ More")?;
    Ok(())
}
