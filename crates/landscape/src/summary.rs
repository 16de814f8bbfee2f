//! Per-category counts for the breakdown charts.

use indexmap::IndexMap;
use serde::Serialize;

use crate::organisation::Organisation;

/// Number of rows in one category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategoryCount {
    pub category: String,
    pub count: usize,
}

/// Count non-missing values, most frequent first. Ties keep first-appearance
/// order.
pub fn value_counts<'a, I>(values: I) -> Vec<CategoryCount>
where
    I: IntoIterator<Item = Option<&'a str>>,
{
    let mut counts: IndexMap<&str, usize> = IndexMap::new();
    for value in values.into_iter().flatten() {
        *counts.entry(value).or_insert(0) += 1;
    }

    let mut out: Vec<CategoryCount> = counts
        .into_iter()
        .map(|(category, count)| CategoryCount {
            category: category.to_string(),
            count,
        })
        .collect();
    // stable sort keeps first-appearance order among ties
    out.sort_by(|a, b| b.count.cmp(&a.count));
    out
}

/// Rows per target area. Rows without a target area are not counted.
pub fn target_area_counts(rows: &[Organisation]) -> Vec<CategoryCount> {
    value_counts(rows.iter().map(|org| org.target_area.as_deref()))
}

/// Rows per canonical funding stage. Every row is counted.
pub fn funding_stage_counts(rows: &[Organisation]) -> Vec<CategoryCount> {
    value_counts(rows.iter().map(|org| Some(org.funding_stage.as_str())))
}

#[cfg(test)]
mod tests {
    use super::*;
    use stage_canon::CanonicalStage;

    fn org(area: Option<&str>, stage: CanonicalStage) -> Organisation {
        Organisation {
            organisation: None,
            town: None,
            target_area: area.map(str::to_string),
            sector: None,
            funding_stage: stage,
            relevant: false,
            latitude: 0.0,
            longitude: 0.0,
        }
    }

    fn pairs(counts: &[CategoryCount]) -> Vec<(&str, usize)> {
        counts
            .iter()
            .map(|c| (c.category.as_str(), c.count))
            .collect()
    }

    #[test]
    fn test_value_counts_order() {
        let values = [Some("b"), Some("a"), None, Some("a"), Some("c"), Some("b"), Some("a")];
        let counts = value_counts(values);
        assert_eq!(pairs(&counts), vec![("a", 3), ("b", 2), ("c", 1)]);
    }

    #[test]
    fn test_value_counts_ties_keep_first_appearance() {
        let counts = value_counts([Some("x"), Some("y"), Some("z")]);
        assert_eq!(pairs(&counts), vec![("x", 1), ("y", 1), ("z", 1)]);
    }

    #[test]
    fn test_value_counts_empty() {
        assert!(value_counts(Vec::<Option<&str>>::new()).is_empty());
        assert!(value_counts([None, None]).is_empty());
    }

    #[test]
    fn test_target_area_counts_skip_missing() {
        let rows = vec![
            org(Some("Gut"), CanonicalStage::Seed),
            org(None, CanonicalStage::Seed),
            org(Some("Gut"), CanonicalStage::Seed),
        ];
        assert_eq!(pairs(&target_area_counts(&rows)), vec![("Gut", 2)]);
    }

    #[test]
    fn test_funding_stage_counts_use_display_labels() {
        let rows = vec![
            org(None, CanonicalStage::SeriesA),
            org(None, CanonicalStage::Unknown),
            org(None, CanonicalStage::Other("Bridge Round".to_string())),
            org(None, CanonicalStage::SeriesA),
        ];
        assert_eq!(
            pairs(&funding_stage_counts(&rows)),
            vec![("Series A", 2), ("Unknown", 1), ("Bridge Round", 1)]
        );
    }
}
