//! The full row pipeline behind the dashboard view.

use serde::Serialize;
use stage_canon::{default_canonicalizer, StageCanonicalizer};
use tracing::info;

use crate::config::LandscapeConfig;
use crate::filter::{sector_options, target_area_options};
use crate::organisation::{prepare_with, Organisation, RawOrganisation};
use crate::summary::{funding_stage_counts, target_area_counts, CategoryCount};
use crate::table::{table_rows, TableRow};

/// A map marker.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MapPoint {
    pub organisation: Option<String>,
    pub town: Option<String>,
    pub target_area: Option<String>,
    pub sector: Option<String>,
    pub latitude: f64,
    pub longitude: f64,
}

impl From<&Organisation> for MapPoint {
    fn from(org: &Organisation) -> Self {
        Self {
            organisation: org.organisation.clone(),
            town: org.town.clone(),
            target_area: org.target_area.clone(),
            sector: org.sector.clone(),
            latitude: org.latitude,
            longitude: org.longitude,
        }
    }
}

/// Everything a renderer needs to draw the dashboard.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Dashboard {
    pub companies_displayed: usize,
    /// Sector choices, offered after the relevance filter.
    pub sector_options: Vec<String>,
    /// Target-area choices, offered after the relevance filter.
    pub target_area_options: Vec<String>,
    pub points: Vec<MapPoint>,
    pub target_area_counts: Vec<CategoryCount>,
    pub funding_stage_counts: Vec<CategoryCount>,
    pub table: Vec<TableRow>,
}

/// Run prepare, filter, jitter and summarise with the built-in stage table.
pub fn build(rows: Vec<RawOrganisation>, config: &LandscapeConfig) -> Dashboard {
    build_with(default_canonicalizer(), rows, config)
}

/// Run the pipeline with an explicit canonicalizer.
pub fn build_with(
    canon: &StageCanonicalizer,
    rows: Vec<RawOrganisation>,
    config: &LandscapeConfig,
) -> Dashboard {
    let prepared = prepare_with(canon, rows);

    let relevant = config.filters.apply_relevance(&prepared);
    let sector_options = sector_options(&relevant);
    let target_area_options = target_area_options(&relevant);

    let mut filtered = config.filters.apply_selections(&relevant);
    config.jitter.apply(&mut filtered);

    info!(
        prepared = prepared.len(),
        displayed = filtered.len(),
        "Built dashboard"
    );

    Dashboard {
        companies_displayed: filtered.len(),
        sector_options,
        target_area_options,
        points: filtered.iter().map(MapPoint::from).collect(),
        target_area_counts: target_area_counts(&filtered),
        funding_stage_counts: funding_stage_counts(&filtered),
        table: table_rows(&filtered),
    }
}
