//! Row types for the catalog tables and their conversions into the
//! `rect-core` domain model.

pub mod alternative;
pub mod deal;
pub mod submission;
pub mod taxonomy;
pub mod tool;
