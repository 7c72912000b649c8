//! # Domain Module
//!
//! Contains all business logic for the attendance tracker.
//!
//! ## Module Organization
//!
//! - **attendance_calculator**: working days, presence matrix, summary percentages
//! - **attendance_service**: loads a table snapshot and runs the calculator; applies updates
//! - **calendar**: month labels and date arithmetic
//! - **export_service**: CSV rendering of the matrix and summary
//! - **commands**: internal command/query types
//! - **models**: records, derived rows and configuration
//!
//! ## Business Rules
//!
//! - Working days are Monday to Friday of the selected month
//! - An employee has at most one record; an update replaces it
//! - "N/A" replaces any other selected date and counts as 100% attendance
//! - Percentages are measured against the monthly quota and capped at 100%
//! - The overall row averages employees that have a record, or is 0% when none do

pub mod attendance_calculator;
pub mod attendance_service;
pub mod calendar;
pub mod export_service;
pub mod commands;
pub mod models;

pub use attendance_calculator::*;
pub use attendance_service::*;
pub use calendar::*;
pub use export_service::*;
