//! The roster record store.
//!
//! Persistence is a single slot: one file holding the whole roster as a JSON
//! array. Reads are self-healing — an absent slot, unreadable file, malformed
//! JSON, or a JSON value that is not an array all come back as an empty
//! roster, with the failure logged rather than surfaced. Writes replace the
//! whole slot; a failed write is logged and dropped, so the in-memory view
//! and the persisted view may diverge until the next successful write.
//!
//! There is no locking. The store is read-modify-write and assumes one user,
//! one process; concurrent appends can lose one of the writes.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Result;

use crate::models::AstronautRecord;

/// File name of the roster slot inside the data directory.
pub const STORAGE_FILE_NAME: &str = "astronauts.json";

pub struct RosterStore {
    path: PathBuf,
}

impl RosterStore {
    pub fn open(path: PathBuf) -> Result<Self> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        Ok(Self { path })
    }

    pub fn open_default() -> Result<Self> {
        let dirs = directories::ProjectDirs::from("", "", "astro-roster")
            .ok_or_else(|| anyhow::anyhow!("Could not determine data directory"))?;
        Self::open(dirs.data_dir().join(STORAGE_FILE_NAME))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Decode the full roster. Never fails: anything that does not decode to
    /// a JSON array of records yields an empty roster.
    pub fn read_all(&self) -> Vec<AstronautRecord> {
        let raw = match fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => return Vec::new(),
            Err(err) => {
                tracing::warn!(path = %self.path.display(), %err, "failed to read roster slot");
                return Vec::new();
            }
        };

        match serde_json::from_str::<Vec<AstronautRecord>>(&raw) {
            Ok(roster) => roster,
            Err(err) => {
                tracing::warn!(
                    path = %self.path.display(),
                    %err,
                    "roster slot does not hold a JSON array, treating as empty"
                );
                Vec::new()
            }
        }
    }

    /// Replace the whole slot. A failed write is logged and dropped.
    pub fn write_all(&self, roster: &[AstronautRecord]) {
        let text = match serde_json::to_string(roster) {
            Ok(text) => text,
            Err(err) => {
                tracing::warn!(%err, "failed to encode roster");
                return;
            }
        };

        if let Err(err) = fs::write(&self.path, text) {
            tracing::warn!(path = %self.path.display(), %err, "failed to save roster slot");
        }
    }

    /// Append one record to the end of the roster.
    pub fn append(&self, record: AstronautRecord) {
        let mut roster = self.read_all();
        roster.push(record);
        self.write_all(&roster);
    }

    /// The record at `index` in the full roster, if any.
    pub fn get(&self, index: usize) -> Option<AstronautRecord> {
        self.read_all().into_iter().nth(index)
    }

    /// Splice out the record at `index` in the full roster. Out-of-range is a
    /// no-op.
    pub fn remove(&self, index: usize) -> Option<AstronautRecord> {
        let mut roster = self.read_all();
        if index >= roster.len() {
            return None;
        }
        let removed = roster.remove(index);
        self.write_all(&roster);
        Some(removed)
    }

    /// Wipe the roster.
    pub fn clear(&self) {
        self.write_all(&[]);
    }
}
