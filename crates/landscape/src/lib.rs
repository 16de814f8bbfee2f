//! Organisation records, filters and summaries for the UK microbiome
//! landscape.
//!
//! This crate is the row-processing side of the dashboard: it takes
//! spreadsheet rows, drops those that cannot be placed on a map, canonicalizes
//! funding stages, applies sidebar filters, jitters coordinates and produces
//! the counts and table a renderer draws.
//!
//! # Example
//!
//! ```
//! use landscape::{build, parse_rows, LandscapeConfig};
//!
//! # fn example() -> Result<(), landscape::LandscapeError> {
//! let rows = parse_rows(r#"[
//!     {"Organisation": "A", "Target_Area": "Gut", "Funding_Stage": "seed/grant",
//!      "Latitude": 51.5, "Longitude": -0.1}
//! ]"#)?;
//!
//! let dashboard = build(rows, &LandscapeConfig::default());
//! assert_eq!(dashboard.companies_displayed, 1);
//! assert_eq!(dashboard.funding_stage_counts[0].category, "Seed");
//! # Ok(())
//! # }
//! # example().unwrap();
//! ```

pub mod config;
pub mod dashboard;
pub mod error;
pub mod filter;
pub mod jitter;
pub mod organisation;
pub mod summary;
pub mod table;

pub use config::LandscapeConfig;
pub use dashboard::{build, build_with, Dashboard, MapPoint};
pub use error::{LandscapeError, Result};
pub use filter::{sector_options, target_area_options, Filters};
pub use jitter::Jitter;
pub use organisation::{parse_rows, prepare, prepare_with, read_rows, Organisation, RawOrganisation};
pub use summary::{funding_stage_counts, target_area_counts, value_counts, CategoryCount};
pub use table::{table_rows, TableRow};

/// Crate version.
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
