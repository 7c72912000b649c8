//! # IO Module
//!
//! Maps domain results to the `shared` DTOs handed to the presentation layer.

pub mod mappers;
