//! Sidebar-style row filters.

use indexmap::IndexSet;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::organisation::Organisation;

/// Filter selections applied to prepared organisations.
///
/// An empty selection list means "no restriction" for that column.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Filters {
    /// Keep only organisations flagged relevant.
    #[serde(default)]
    pub relevant_only: bool,
    /// Allowed sectors.
    #[serde(default)]
    pub sectors: Vec<String>,
    /// Allowed target areas.
    #[serde(default)]
    pub target_areas: Vec<String>,
}

impl Filters {
    /// Apply the relevance flag only.
    ///
    /// Sector and target-area options are offered from this narrowed set.
    pub fn apply_relevance(&self, rows: &[Organisation]) -> Vec<Organisation> {
        rows.iter()
            .filter(|org| !self.relevant_only || org.relevant)
            .cloned()
            .collect()
    }

    /// Apply the sector and target-area selections only.
    pub fn apply_selections(&self, rows: &[Organisation]) -> Vec<Organisation> {
        rows.iter()
            .filter(|org| selected(&self.sectors, org.sector.as_deref()))
            .filter(|org| selected(&self.target_areas, org.target_area.as_deref()))
            .cloned()
            .collect()
    }

    /// Apply every filter, preserving input order.
    pub fn apply(&self, rows: &[Organisation]) -> Vec<Organisation> {
        let relevant = self.apply_relevance(rows);
        let filtered = self.apply_selections(&relevant);
        debug!(
            input = rows.len(),
            relevant = relevant.len(),
            output = filtered.len(),
            "Applied filters"
        );
        filtered
    }
}

fn selected(allowed: &[String], value: Option<&str>) -> bool {
    if allowed.is_empty() {
        return true;
    }
    match value {
        Some(value) => allowed.iter().any(|a| a == value),
        None => false,
    }
}

/// Distinct non-missing sectors, in first-appearance order.
pub fn sector_options(rows: &[Organisation]) -> Vec<String> {
    distinct(rows.iter().map(|org| org.sector.as_deref()))
}

/// Distinct non-missing target areas, in first-appearance order.
pub fn target_area_options(rows: &[Organisation]) -> Vec<String> {
    distinct(rows.iter().map(|org| org.target_area.as_deref()))
}

fn distinct<'a>(values: impl Iterator<Item = Option<&'a str>>) -> Vec<String> {
    values
        .flatten()
        .collect::<IndexSet<&str>>()
        .into_iter()
        .map(str::to_string)
        .collect()
}
