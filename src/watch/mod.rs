//! The interactive roster session.
//!
//! One `tokio::select!` loop multiplexes stdin commands, the debounced
//! filter, the backdrop rotation timer, and a width poll. Mutations always
//! address the full roster by original index and the screen is redrawn from
//! freshly read storage after each one, so a stale view can never redirect an
//! action.

use std::time::Duration;

use anyhow::Result;
use colored::Colorize;
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::time::{interval_at, Instant, MissedTickBehavior};

use crate::debounce::Debouncer;
use crate::models::AstronautRecord;
use crate::rotator::{Rotator, ROTATION_INTERVAL};
use crate::store::RosterStore;
use crate::view::{table, SortKey, ViewState};

/// Quiet period before a filter change triggers a redraw.
const FILTER_SETTLE: Duration = Duration::from_millis(200);

/// Quiet period before a width change triggers a relayout.
const RESIZE_SETTLE: Duration = Duration::from_millis(100);

/// How often the terminal width is re-measured.
const RESIZE_POLL: Duration = Duration::from_secs(1);

/// Approximate layout units per terminal column, for the rotator's viewport
/// width threshold.
const CELL_WIDTH_UNITS: u32 = 8;

const HELP: &str = "\
Commands:
  /TEXT            filter the roster (case-insensitive substring); `/` clears
  sort KEY         toggle sorting by name|role|destination|experience|email
  details INDEX    show every recorded field for one crew member
  remove INDEX     remove a crew member (asks for confirmation)
  clear            remove the entire roster (asks for confirmation)
  pause | resume   hold / release the backdrop rotation
  help             this text
  quit             leave the session";

/// One parsed input line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Filter(String),
    Sort(SortKey),
    Details(usize),
    Remove(usize),
    Clear,
    Pause,
    Resume,
    Help,
    Quit,
}

/// Parse an input line; `None` means unrecognized.
pub fn parse_command(line: &str) -> Option<Command> {
    let line = line.trim();
    if let Some(rest) = line.strip_prefix('/') {
        return Some(Command::Filter(rest.trim().to_string()));
    }

    let mut parts = line.split_whitespace();
    let head = parts.next()?;
    let arg = parts.next();
    match head {
        "sort" => arg.and_then(SortKey::parse).map(Command::Sort),
        "details" | "d" => arg.and_then(|a| a.parse().ok()).map(Command::Details),
        "remove" | "rm" => arg.and_then(|a| a.parse().ok()).map(Command::Remove),
        "clear" => Some(Command::Clear),
        "pause" => Some(Command::Pause),
        "resume" => Some(Command::Resume),
        "help" | "?" => Some(Command::Help),
        "quit" | "q" | "exit" => Some(Command::Quit),
        _ => None,
    }
}

pub fn is_yes(answer: &str) -> bool {
    matches!(answer.trim(), "y" | "Y" | "yes" | "Yes")
}

/// A destructive action waiting on its y/N answer.
#[derive(Debug, Clone, Copy)]
enum PendingConfirm {
    Remove(usize),
    Clear,
}

pub async fn run(store: &RosterStore) -> Result<()> {
    let reduced_motion = std::env::var_os("ASTRO_REDUCED_MOTION").is_some();
    let mut rotator = Rotator::new(reduced_motion);
    let mut state = ViewState::default();
    let mut filter_debounce: Debouncer<String> = Debouncer::new(FILTER_SETTLE);
    let mut resize_debounce: Debouncer<usize> = Debouncer::new(RESIZE_SETTLE);
    let mut pending: Option<PendingConfirm> = None;

    let mut columns = table::terminal_columns();
    rotator.update_auto(columns as u32 * CELL_WIDTH_UNITS);

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    let mut rotation = interval_at(Instant::now() + ROTATION_INTERVAL, ROTATION_INTERVAL);
    rotation.set_missed_tick_behavior(MissedTickBehavior::Skip);
    let mut resize_poll = tokio::time::interval(RESIZE_POLL);
    resize_poll.set_missed_tick_behavior(MissedTickBehavior::Skip);

    tracing::info!(path = %store.path().display(), "watching roster");
    draw(store, &state, &rotator, columns);

    loop {
        tokio::select! {
            line = lines.next_line() => {
                let Some(line) = line? else { break };

                if let Some(confirm) = pending.take() {
                    if is_yes(&line) {
                        apply_confirmed(store, confirm);
                        draw(store, &state, &rotator, columns);
                    } else {
                        println!("Cancelled.");
                    }
                    continue;
                }

                match parse_command(&line) {
                    Some(Command::Quit) => break,
                    Some(Command::Filter(text)) => filter_debounce.set(text),
                    Some(Command::Sort(key)) => {
                        state.toggle_sort(key);
                        draw(store, &state, &rotator, columns);
                    }
                    Some(Command::Details(index)) => match store.get(index) {
                        Some(record) => println!("{}", table::render_details(&record)),
                        None => println!("No crew member at index {index}."),
                    },
                    Some(Command::Remove(index)) => match store.get(index) {
                        Some(record) => {
                            println!("Remove {} from the roster? (y/N)", display_name(&record));
                            pending = Some(PendingConfirm::Remove(index));
                        }
                        None => println!("No crew member at index {index}."),
                    },
                    Some(Command::Clear) => {
                        println!("Remove all crew members? This cannot be undone. (y/N)");
                        pending = Some(PendingConfirm::Clear);
                    }
                    Some(Command::Pause) => rotator.pause(),
                    Some(Command::Resume) => rotator.resume(),
                    Some(Command::Help) => println!("{HELP}"),
                    None => println!("Unrecognized command; type `help` for the list."),
                }
            }
            text = filter_debounce.settled() => {
                state.filter = text;
                draw(store, &state, &rotator, columns);
            }
            _ = rotation.tick() => {
                if rotator.tick() {
                    draw(store, &state, &rotator, columns);
                }
            }
            _ = resize_poll.tick() => {
                let measured = table::terminal_columns();
                if measured != columns {
                    resize_debounce.set(measured);
                }
            }
            measured = resize_debounce.settled() => {
                columns = measured;
                rotator.update_auto(columns as u32 * CELL_WIDTH_UNITS);
                draw(store, &state, &rotator, columns);
            }
        }
    }

    Ok(())
}

fn apply_confirmed(store: &RosterStore, confirm: PendingConfirm) {
    match confirm {
        PendingConfirm::Remove(index) => {
            if store.remove(index).is_none() {
                println!("No crew member at index {index}.");
            }
        }
        PendingConfirm::Clear => store.clear(),
    }
}

fn display_name(record: &AstronautRecord) -> &str {
    if record.name.is_empty() {
        "this person"
    } else {
        &record.name
    }
}

fn draw(store: &RosterStore, state: &ViewState, rotator: &Rotator, columns: usize) {
    let roster = store.read_all();
    println!();
    if let Some(backdrop) = rotator.current() {
        println!("{}", format!("── backdrop: {backdrop} ──").dimmed());
    }
    println!("{}", table::render_roster(&roster, state, columns));
    if let Some((key, dir)) = state.sort {
        println!("{}", format!("sorted by {} ({})", key.as_str(), dir.as_str()).dimmed());
    }
}
