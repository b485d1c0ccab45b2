//! Rolling range bands
//!
//! A coarser alternative to the pivot scan: project per-candle band levels
//! from the rolling min/max of closes over a trailing window. Windows at the
//! head of the series are allowed to be partial, so the output always has
//! one entry per input candle.

use crate::levels::error::LevelError;
use crate::levels::validation::validate_window;
use crate::models::candle::Candle;

/// Per-candle projected band levels, same length as the input series.
#[derive(Debug, Clone, PartialEq)]
pub struct RangeBands {
    pub support: Vec<f64>,
    pub resistance: Vec<f64>,
}

/// Project band levels from the rolling close-price range.
///
/// For each candle, over the trailing `window` closes (fewer near the head):
/// `resistance = 2 * max - min` and `support = 2 * min - max`, mirroring the
/// range outward on both sides.
pub fn rolling_range_bands(candles: &[Candle], window: usize) -> Result<RangeBands, LevelError> {
    validate_window("window", window)?;

    let mut support = Vec::with_capacity(candles.len());
    let mut resistance = Vec::with_capacity(candles.len());

    for i in 0..candles.len() {
        let start = (i + 1).saturating_sub(window);
        let mut min = f64::INFINITY;
        let mut max = f64::NEG_INFINITY;
        for candle in &candles[start..=i] {
            min = min.min(candle.close);
            max = max.max(candle.close);
        }
        resistance.push(2.0 * max - min);
        support.push(2.0 * min - max);
    }

    Ok(RangeBands {
        support,
        resistance,
    })
}
