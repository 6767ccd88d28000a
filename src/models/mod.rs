//! Domain models for the crew roster.
//!
//! There is exactly one entity: [`AstronautRecord`], an ordered list of which
//! forms the roster. A record's identity is its position in that list; there
//! are no generated ids, and records are never edited in place — only
//! appended, removed by index, or cleared wholesale.

mod astronaut;

pub use astronaut::*;
