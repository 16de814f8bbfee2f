//! Reproducible coordinate jitter so co-located organisations do not overlap
//! on a map.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::debug;

use crate::error::{LandscapeError, Result};
use crate::organisation::Organisation;

/// Default RNG seed.
pub const DEFAULT_JITTER_SEED: u64 = 42;

/// Default maximum offset in degrees.
pub const DEFAULT_JITTER_SPAN: f64 = 0.05;

/// Seeded uniform jitter applied to latitude and longitude.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Jitter {
    seed: u64,
    span: f64,
}

impl Jitter {
    /// Create a jitter with the given seed and maximum offset in degrees.
    ///
    /// A span of zero disables jitter.
    pub fn new(seed: u64, span: f64) -> Result<Self> {
        if !span.is_finite() || span < 0.0 {
            return Err(LandscapeError::config(
                "jitter span",
                format!("must be a finite, non-negative number of degrees (got {})", span),
            ));
        }
        Ok(Self { seed, span })
    }

    /// A jitter that leaves coordinates untouched.
    pub fn disabled() -> Self {
        Self {
            seed: DEFAULT_JITTER_SEED,
            span: 0.0,
        }
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn span(&self) -> f64 {
        self.span
    }

    /// Offset every latitude, then every longitude, by a uniform draw from
    /// `[-span, span)`. The same seed and row count always produce the same
    /// offsets.
    pub fn apply(&self, rows: &mut [Organisation]) {
        if self.span == 0.0 || rows.is_empty() {
            return;
        }

        let mut rng = StdRng::seed_from_u64(self.seed);
        let span = self.span;

        let lat_offsets: Vec<f64> = (0..rows.len()).map(|_| rng.gen_range(-span..span)).collect();
        let lon_offsets: Vec<f64> = (0..rows.len()).map(|_| rng.gen_range(-span..span)).collect();

        for ((org, dlat), dlon) in rows.iter_mut().zip(lat_offsets).zip(lon_offsets) {
            org.latitude += dlat;
            org.longitude += dlon;
        }

        debug!(rows = rows.len(), seed = self.seed, span, "Applied coordinate jitter");
    }
}

impl Default for Jitter {
    fn default() -> Self {
        Self {
            seed: DEFAULT_JITTER_SEED,
            span: DEFAULT_JITTER_SPAN,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use stage_canon::CanonicalStage;

    fn points(n: usize) -> Vec<Organisation> {
        (0..n)
            .map(|i| Organisation {
                organisation: Some(format!("org-{}", i)),
                town: None,
                target_area: None,
                sector: None,
                funding_stage: CanonicalStage::Unknown,
                relevant: false,
                latitude: 52.0,
                longitude: -1.0,
            })
            .collect()
    }

    #[test]
    fn test_offsets_within_span() {
        let mut rows = points(200);
        Jitter::default().apply(&mut rows);

        for org in &rows {
            assert!((org.latitude - 52.0).abs() <= DEFAULT_JITTER_SPAN);
            assert!((org.longitude + 1.0).abs() <= DEFAULT_JITTER_SPAN);
        }
    }

    #[test]
    fn test_same_seed_is_reproducible() {
        let mut a = points(20);
        let mut b = points(20);
        Jitter::default().apply(&mut a);
        Jitter::default().apply(&mut b);
        assert_eq!(a, b);
    }

    #[test]
    fn test_different_seed_differs() {
        let mut a = points(20);
        let mut b = points(20);
        Jitter::new(1, 0.05).unwrap().apply(&mut a);
        Jitter::new(2, 0.05).unwrap().apply(&mut b);
        assert_ne!(a, b);
    }

    #[test]
    fn test_jitter_separates_identical_points() {
        let mut rows = points(2);
        Jitter::default().apply(&mut rows);
        assert_ne!(rows[0].latitude, rows[1].latitude);
    }

    #[test]
    fn test_zero_span_is_noop() {
        let mut rows = points(5);
        Jitter::new(7, 0.0).unwrap().apply(&mut rows);
        assert_eq!(rows, points(5));

        Jitter::disabled().apply(&mut rows);
        assert_eq!(rows, points(5));
    }

    #[test]
    fn test_empty_rows() {
        let mut rows: Vec<Organisation> = Vec::new();
        Jitter::default().apply(&mut rows);
        assert!(rows.is_empty());
    }

    #[test]
    fn test_invalid_span_rejected() {
        assert!(matches!(
            Jitter::new(1, -0.1),
            Err(LandscapeError::Config { .. })
        ));
        assert!(Jitter::new(1, f64::NAN).is_err());
        assert!(Jitter::new(1, f64::INFINITY).is_err());
    }
}
