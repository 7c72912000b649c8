//! Monthly office attendance tracker.
//!
//! The [`backend`] holds the attendance rules and CSV storage; the binary in
//! `main.rs` is a thin command-line front end over it.

pub mod backend;
