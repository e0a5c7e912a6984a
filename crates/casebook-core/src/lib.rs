//! casebook-core: scenario catalog, filtering, and progress tracking.
//!
//! This crate defines the data model for practice scenarios, the catalog
//! filter that narrows them by query, category, and difficulty, and the
//! supporting mock exam and progress records.

pub mod error;
pub mod exam;
pub mod filter;
pub mod model;
pub mod parser;
pub mod progress;
pub mod report;
pub mod sample;
