//! The pure roster view pipeline.
//!
//! [`build_view`] maps (roster, filter, sort) to a list of view entries, each
//! tagged with its position in the *unfiltered* roster. That original index
//! is the only handle used to mutate the underlying record later, so
//! filtering and sorting can never redirect a remove at the wrong row.

pub mod table;

use std::collections::BTreeMap;

use clap::ValueEnum;

use crate::models::AstronautRecord;

/// Sortable roster columns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum SortKey {
    Name,
    Role,
    Destination,
    Experience,
    Email,
}

impl SortKey {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Role => "role",
            Self::Destination => "destination",
            Self::Experience => "experience",
            Self::Email => "email",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s.to_ascii_lowercase().as_str() {
            "name" => Some(Self::Name),
            "role" => Some(Self::Role),
            "destination" => Some(Self::Destination),
            "experience" => Some(Self::Experience),
            "email" => Some(Self::Email),
            _ => None,
        }
    }

    /// The record field this key sorts on.
    pub fn field<'a>(&self, record: &'a AstronautRecord) -> &'a str {
        match self {
            Self::Name => &record.name,
            Self::Role => &record.role,
            Self::Destination => &record.destination,
            Self::Experience => &record.experience,
            Self::Email => &record.email,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SortDir {
    #[default]
    Ascending,
    Descending,
}

impl SortDir {
    pub fn flipped(self) -> Self {
        match self {
            Self::Ascending => Self::Descending,
            Self::Descending => Self::Ascending,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Ascending => "ascending",
            Self::Descending => "descending",
        }
    }
}

/// Transient UI state of the roster view.
#[derive(Debug, Clone, Default)]
pub struct ViewState {
    pub filter: String,
    pub sort: Option<(SortKey, SortDir)>,
}

impl ViewState {
    /// Header-click semantics: the same key flips direction, a new key resets
    /// to ascending.
    pub fn toggle_sort(&mut self, key: SortKey) {
        self.sort = match self.sort {
            Some((current, dir)) if current == key => Some((key, dir.flipped())),
            _ => Some((key, SortDir::Ascending)),
        };
    }
}

/// One rendered row: a record plus its position in the full roster.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewEntry {
    pub original_index: usize,
    pub record: AstronautRecord,
}

/// Filter and sort the roster into the list of entries to render.
///
/// The filter is a case-insensitive substring match OR-combined over name,
/// role, destination, email, and motto. Sorting is a stable, case-insensitive
/// lexical comparison of the chosen field.
pub fn build_view(roster: &[AstronautRecord], state: &ViewState) -> Vec<ViewEntry> {
    let mut view: Vec<ViewEntry> = roster
        .iter()
        .enumerate()
        .map(|(original_index, record)| ViewEntry {
            original_index,
            record: record.clone(),
        })
        .collect();

    let query = state.filter.trim().to_lowercase();
    if !query.is_empty() {
        view.retain(|entry| {
            let r = &entry.record;
            [&r.name, &r.role, &r.destination, &r.email, &r.motto]
                .iter()
                .any(|field| field.to_lowercase().contains(&query))
        });
    }

    if let Some((key, dir)) = state.sort {
        view.sort_by(|a, b| {
            let va = key.field(&a.record).to_lowercase();
            let vb = key.field(&b.record).to_lowercase();
            match dir {
                SortDir::Ascending => va.cmp(&vb),
                SortDir::Descending => vb.cmp(&va),
            }
        });
    }

    view
}

/// A destination badge: how many crew members are headed there.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DestinationCount {
    pub destination: String,
    pub count: usize,
}

/// Group the full roster by trimmed destination; empty destinations bucket
/// under "Unknown". Ordered by descending count, ties by ascending name.
pub fn destination_counts(roster: &[AstronautRecord]) -> Vec<DestinationCount> {
    let mut counts: BTreeMap<String, usize> = BTreeMap::new();
    for record in roster {
        let destination = record.destination.trim();
        let destination = if destination.is_empty() {
            "Unknown"
        } else {
            destination
        };
        *counts.entry(destination.to_string()).or_default() += 1;
    }

    // BTreeMap iteration is name-ascending; the stable sort keeps that order
    // between equal counts.
    let mut badges: Vec<DestinationCount> = counts
        .into_iter()
        .map(|(destination, count)| DestinationCount { destination, count })
        .collect();
    badges.sort_by(|a, b| b.count.cmp(&a.count));
    badges
}
