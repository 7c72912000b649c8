//! # Storage Module
//!
//! Handles all data persistence for the attendance tracker.
//!
//! The domain layer only talks to the traits in [`traits`]; the CSV
//! implementation in [`csv`] is the one shipped today. Swapping it for
//! another tabular store does not touch the domain or the CLI.

pub mod csv;
pub mod traits;

pub use traits::{AttendanceStorage, ConfigStorage, Connection};
