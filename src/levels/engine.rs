//! Trend level detection engine tying the scan and the reducer together.

use tracing::debug;

use crate::config::Config;
use crate::levels::error::LevelError;
use crate::levels::reducer::collapse_nearby_levels;
use crate::levels::scanner::scan_pivots;
use crate::levels::validation::{validate_sensitivity, validate_window};
use crate::models::candle::Candle;
use crate::models::levels::TrendLevelSet;

pub struct LevelEngine;

impl LevelEngine {
    /// Detect the trend levels of a candle series.
    ///
    /// Validates the full configuration up front, scans for pivots, then
    /// reduces each side independently. Returns a fresh result per call; a
    /// series too short for the window yields an empty set, not an error.
    pub fn detect(candles: &[Candle], config: &Config) -> Result<TrendLevelSet, LevelError> {
        validate_window("n1", config.n1)?;
        validate_window("n2", config.n2)?;
        validate_sensitivity(config.sensitivity)?;

        let (supports, resistances) = scan_pivots(candles, config.n1, config.n2)?;
        let supports = collapse_nearby_levels(&supports, config.sensitivity)?;
        let resistances = collapse_nearby_levels(&resistances, config.sensitivity)?;

        debug!(
            supports = supports.len(),
            resistances = resistances.len(),
            "trend level detection complete"
        );

        Ok(TrendLevelSet {
            supports,
            resistances,
            ray_start_offset: config.ray_start_offset,
            ray_end_index: candles.len().saturating_sub(1),
        })
    }
}
