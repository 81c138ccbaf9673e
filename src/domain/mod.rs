//! Domain types for ReportCard.
//! Report summaries, tiers, the user profile and navigation routes.

pub mod error;
pub mod profile;
pub mod report;
pub mod route;

pub use error::*;
pub use profile::*;
pub use report::*;
pub use route::*;
