//! Text rendering for the roster screen.
//!
//! Everything here builds strings; nothing touches the terminal directly.
//! Rows carry the record's original roster index in the leading column, which
//! is the handle `remove`/`details` take.

use colored::Colorize;

use crate::models::AstronautRecord;
use crate::scale;
use crate::view::{build_view, destination_counts, ViewEntry, ViewState};

/// Shown instead of the table when the roster is empty.
pub const EMPTY_ROSTER_NOTICE: &str =
    "No crew members yet. Run `astro signup` to add astronauts.";

const HEADERS: [&str; 6] = ["#", "Name", "Role", "Destination", "Experience", "Email"];
const COLUMN_GAP: usize = 2;

/// Columns below this width stop shrinking and truncate instead.
const MIN_COLUMN_WIDTH: usize = 4;

/// Terminal width in columns, from `$COLUMNS` with an 80-column fallback.
pub fn terminal_columns() -> usize {
    std::env::var("COLUMNS")
        .ok()
        .and_then(|v| v.parse().ok())
        .filter(|&c| c > 0)
        .unwrap_or(80)
}

/// The full roster screen: table (or empty notice), crew summary, and the
/// destination counters.
pub fn render_roster(roster: &[AstronautRecord], state: &ViewState, columns: usize) -> String {
    if roster.is_empty() {
        return format!("{EMPTY_ROSTER_NOTICE}\n{}", render_summary(0));
    }

    let view = build_view(roster, state);
    let mut out = render_table(&view, columns);
    out.push('\n');
    out.push_str(&render_summary(roster.len()));
    out.push('\n');
    out.push_str(&render_counters(roster, view.len()));
    out
}

pub fn render_summary(total: usize) -> String {
    format!("Total Crew Members: {total}")
}

/// The counters block: a total line (with the visible count when a filter is
/// hiding rows) and one badge per destination, busiest first.
pub fn render_counters(roster: &[AstronautRecord], visible: usize) -> String {
    let total = roster.len();
    let mut line = format!("Total Crew: {total}");
    if visible != total {
        line.push_str(&format!(" (showing {visible})"));
    }

    let badges = destination_counts(roster)
        .iter()
        .map(|badge| {
            format!("{} ×{}", badge.destination, badge.count)
                .cyan()
                .to_string()
        })
        .collect::<Vec<_>>()
        .join("  ");

    format!("{line}\n{badges}")
}

/// Every populated field of one record, one per line. Optional fields are
/// omitted when empty.
pub fn render_details(record: &AstronautRecord) -> String {
    let mut lines = vec![
        format!("Name: {}", record.name),
        format!("Role: {}", record.role),
        format!("Destination: {}", record.destination),
        format!("Experience: {}", record.experience),
    ];
    if !record.snack.is_empty() {
        lines.push(format!("Fav snack: {}", record.snack));
    }
    if !record.motto.is_empty() {
        lines.push(format!("Motto: {}", record.motto));
    }
    if !record.email.is_empty() {
        lines.push(format!("Email: {}", record.email));
    }
    lines.join("\n")
}

fn render_table(view: &[ViewEntry], columns: usize) -> String {
    let mut widths: Vec<usize> = HEADERS.iter().map(|h| h.chars().count()).collect();
    for entry in view {
        for (width, cell) in widths.iter_mut().zip(row_cells(entry)) {
            *width = (*width).max(cell.chars().count());
        }
    }

    // Natural width vs. terminal width decides the uniform shrink. The index
    // column is exempt so action targets stay readable.
    let natural: usize = widths.iter().sum::<usize>() + COLUMN_GAP * (widths.len() - 1);
    let factor = scale::shrink_factor(natural, 1, columns, 1);
    if factor < 1.0 {
        for width in widths.iter_mut().skip(1) {
            *width = ((*width as f64) * factor) as usize;
            *width = (*width).max(MIN_COLUMN_WIDTH);
        }
    }

    let gap = " ".repeat(COLUMN_GAP);
    let header = HEADERS
        .iter()
        .zip(&widths)
        .map(|(h, &w)| pad(h, w))
        .collect::<Vec<_>>()
        .join(&gap);
    let rule = "-".repeat(header.chars().count());

    let mut out = format!("{}\n{rule}\n", header.bold());
    for entry in view {
        let row = row_cells(entry)
            .iter()
            .zip(&widths)
            .map(|(cell, &w)| pad(&fit(cell, w), w))
            .collect::<Vec<_>>()
            .join(&gap);
        out.push_str(row.trim_end());
        out.push('\n');
    }
    out
}

fn row_cells(entry: &ViewEntry) -> [String; 6] {
    let r = &entry.record;
    [
        entry.original_index.to_string(),
        r.name.clone(),
        r.role.clone(),
        r.destination.clone(),
        r.experience.clone(),
        r.email.clone(),
    ]
}

fn pad(text: &str, width: usize) -> String {
    format!("{text:<width$}")
}

fn fit(text: &str, width: usize) -> String {
    if text.chars().count() <= width {
        return text.to_string();
    }
    if width == 0 {
        return String::new();
    }
    let mut clipped: String = text.chars().take(width - 1).collect();
    clipped.push('…');
    clipped
}
