//! Summary table rows.

use serde::Serialize;

use crate::organisation::Organisation;

/// One row of the company summary table, keyed by the spreadsheet's column
/// names when serialized.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TableRow {
    #[serde(rename = "Organisation")]
    pub organisation: Option<String>,
    #[serde(rename = "Town")]
    pub town: Option<String>,
    #[serde(rename = "Target_Area")]
    pub target_area: Option<String>,
    #[serde(rename = "Sector")]
    pub sector: Option<String>,
    #[serde(rename = "Funding_Stage")]
    pub funding_stage: String,
}

impl From<&Organisation> for TableRow {
    fn from(org: &Organisation) -> Self {
        Self {
            organisation: org.organisation.clone(),
            town: org.town.clone(),
            target_area: org.target_area.clone(),
            sector: org.sector.clone(),
            funding_stage: org.funding_stage.to_string(),
        }
    }
}

/// Project organisations onto table rows, in order.
pub fn table_rows(rows: &[Organisation]) -> Vec<TableRow> {
    rows.iter().map(TableRow::from).collect()
}
