//! Configuration for the landscape pipeline.

use std::env;

use crate::error::{LandscapeError, Result};
use crate::filter::Filters;
use crate::jitter::{Jitter, DEFAULT_JITTER_SEED, DEFAULT_JITTER_SPAN};

/// Filter and jitter settings for one dashboard build.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LandscapeConfig {
    pub filters: Filters,
    pub jitter: Jitter,
}

impl LandscapeConfig {
    /// Load configuration from environment variables.
    ///
    /// Optional env vars:
    /// - `LANDSCAPE_RELEVANT_ONLY` (true/false, 1/0, yes/no; default: false)
    /// - `LANDSCAPE_SECTORS` (comma-separated; default: all)
    /// - `LANDSCAPE_TARGET_AREAS` (comma-separated; default: all)
    /// - `LANDSCAPE_JITTER_SEED` (default: 42)
    /// - `LANDSCAPE_JITTER_SPAN` (degrees; default: 0.05, 0 disables)
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Load configuration through an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let relevant_only = match lookup("LANDSCAPE_RELEVANT_ONLY") {
            Some(value) => parse_bool("LANDSCAPE_RELEVANT_ONLY", &value)?,
            None => false,
        };
        let sectors = lookup("LANDSCAPE_SECTORS")
            .map(|v| parse_list(&v))
            .unwrap_or_default();
        let target_areas = lookup("LANDSCAPE_TARGET_AREAS")
            .map(|v| parse_list(&v))
            .unwrap_or_default();

        let seed = match lookup("LANDSCAPE_JITTER_SEED") {
            Some(value) => value.trim().parse::<u64>().map_err(|e| {
                LandscapeError::config("LANDSCAPE_JITTER_SEED", e.to_string())
            })?,
            None => DEFAULT_JITTER_SEED,
        };
        let span = match lookup("LANDSCAPE_JITTER_SPAN") {
            Some(value) => value.trim().parse::<f64>().map_err(|e| {
                LandscapeError::config("LANDSCAPE_JITTER_SPAN", e.to_string())
            })?,
            None => DEFAULT_JITTER_SPAN,
        };

        Ok(Self {
            filters: Filters {
                relevant_only,
                sectors,
                target_areas,
            },
            jitter: Jitter::new(seed, span)?,
        })
    }
}

fn parse_bool(name: &str, value: &str) -> Result<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" | "" => Ok(false),
        other => Err(LandscapeError::config(
            name,
            format!("expected a boolean, got '{}'", other),
        )),
    }
}

fn parse_list(value: &str) -> Vec<String> {
    value
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}
