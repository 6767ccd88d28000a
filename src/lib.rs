//! Crew signup and roster management for the mission desk.
//!
//! The roster is an ordered list of [`models::AstronautRecord`]s persisted as
//! a single JSON array slot on disk ([`store::RosterStore`]). Signups go
//! through [`signup::submit`], which validates and appends; the roster view
//! is produced by the pure [`view::build_view`] pipeline and rendered by
//! [`view::table`]. [`watch`] ties it together into an interactive session
//! with a debounced filter and a decorative backdrop rotator.

pub mod debounce;
pub mod models;
pub mod rotator;
pub mod scale;
pub mod signup;
pub mod store;
pub mod view;
pub mod watch;
