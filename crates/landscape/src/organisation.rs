//! Organisation records as read from the spreadsheet, and their cleaned form.

use std::io::Read;

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use stage_canon::{default_canonicalizer, CanonicalStage, StageCanonicalizer};
use tracing::{debug, info};

use crate::error::Result;

/// One spreadsheet row, columns carried verbatim.
///
/// Every column is optional and a single bad cell never fails the whole load.
/// Text columns accept any JSON scalar (`1` reads as `"1"`). Numeric columns
/// accept numbers or numeric strings; blank or unparsable cells read as
/// `None`, and `prepare` drops rows left without coordinates.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RawOrganisation {
    #[serde(rename = "Organisation", default, deserialize_with = "lenient_text")]
    pub organisation: Option<String>,
    #[serde(rename = "Town", default, deserialize_with = "lenient_text")]
    pub town: Option<String>,
    #[serde(rename = "Target_Area", default, deserialize_with = "lenient_text")]
    pub target_area: Option<String>,
    #[serde(rename = "Sector", default, deserialize_with = "lenient_text")]
    pub sector: Option<String>,
    #[serde(rename = "Funding_Stage", default, deserialize_with = "lenient_text")]
    pub funding_stage: Option<String>,
    /// `1` marks a relevant organisation. Spreadsheet exports may write `1.0`.
    #[serde(rename = "Relevant", default, deserialize_with = "lenient_number")]
    pub relevant: Option<f64>,
    #[serde(rename = "Latitude", default, deserialize_with = "lenient_number")]
    pub latitude: Option<f64>,
    #[serde(rename = "Longitude", default, deserialize_with = "lenient_number")]
    pub longitude: Option<f64>,
}

fn lenient_text<'de, D>(deserializer: D) -> std::result::Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::String(s) => Some(s),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        Value::Null | Value::Array(_) | Value::Object(_) => None,
    })
}

fn lenient_number<'de, D>(deserializer: D) -> std::result::Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        Value::Bool(b) => Some(if b { 1.0 } else { 0.0 }),
        Value::Null | Value::Array(_) | Value::Object(_) => None,
    })
}

/// A cleaned organisation with coordinates and a canonical funding stage.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Organisation {
    pub organisation: Option<String>,
    pub town: Option<String>,
    pub target_area: Option<String>,
    pub sector: Option<String>,
    pub funding_stage: CanonicalStage,
    pub relevant: bool,
    pub latitude: f64,
    pub longitude: f64,
}

/// Parse a JSON array of spreadsheet rows.
pub fn parse_rows(json: &str) -> Result<Vec<RawOrganisation>> {
    Ok(serde_json::from_str(json)?)
}

/// Read a JSON array of spreadsheet rows from a reader.
pub fn read_rows<R: Read>(reader: R) -> Result<Vec<RawOrganisation>> {
    Ok(serde_json::from_reader(reader)?)
}

/// Clean rows with the built-in funding-stage table.
///
/// See [`prepare_with`].
pub fn prepare<I>(rows: I) -> Vec<Organisation>
where
    I: IntoIterator<Item = RawOrganisation>,
{
    prepare_with(default_canonicalizer(), rows)
}

/// Clean rows: drop those without both coordinates, blank out empty text
/// cells, and canonicalize the funding stage.
pub fn prepare_with<I>(canon: &StageCanonicalizer, rows: I) -> Vec<Organisation>
where
    I: IntoIterator<Item = RawOrganisation>,
{
    let mut dropped = 0usize;
    let prepared: Vec<Organisation> = rows
        .into_iter()
        .filter_map(|row| {
            let cleaned = clean_row(canon, row);
            if cleaned.is_none() {
                dropped += 1;
            }
            cleaned
        })
        .collect();

    info!(kept = prepared.len(), dropped, "Prepared organisation rows");
    prepared
}

fn clean_row(canon: &StageCanonicalizer, row: RawOrganisation) -> Option<Organisation> {
    let (Some(latitude), Some(longitude)) = (finite(row.latitude), finite(row.longitude)) else {
        debug!(organisation = ?row.organisation, "Dropping row without coordinates");
        return None;
    };

    Some(Organisation {
        organisation: non_blank(row.organisation),
        town: non_blank(row.town),
        target_area: non_blank(row.target_area),
        sector: non_blank(row.sector),
        funding_stage: canon.classify(row.funding_stage.as_deref()),
        relevant: row.relevant == Some(1.0),
        latitude,
        longitude,
    })
}

fn finite(value: Option<f64>) -> Option<f64> {
    value.filter(|v| v.is_finite())
}

fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|s| !s.trim().is_empty())
}
