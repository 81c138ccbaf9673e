//! Application layer (use-cases, policies).
//!
//! Loading the profile and the report collection, and deriving the chart
//! description from reports. Nothing here depends on the UI framework.

pub mod chart;
pub mod profile;
pub mod reports;
