//! Fractal-window pivot scan
//!
//! Flags a candle as a support pivot when its lows fall into it over `n1`
//! candles and rise away from it over `n2` candles; resistance is the mirror
//! on highs. A candle close to either edge of the series never has the full
//! window available and is skipped, not errored.

use tracing::debug;

use crate::levels::error::LevelError;
use crate::levels::validation::validate_window;
use crate::models::candle::Candle;
use crate::models::levels::{LevelKind, PivotPoint};

/// Candles looked back from the candidate (candidate included).
pub const DEFAULT_N1: usize = 3;
/// Candles looked forward from the candidate.
pub const DEFAULT_N2: usize = 2;

/// Scan a candle series for support and resistance pivots.
///
/// Returns the two pivot lists in ascending index order. Candidates run over
/// `n1 <= l <= len - 1 - n2`, the exact set of indices with `n1` candles of
/// history and `n2` of lookahead in bounds. A series shorter than
/// `n1 + n2 + 1` has no candidates and yields two empty lists.
pub fn scan_pivots(
    candles: &[Candle],
    n1: usize,
    n2: usize,
) -> Result<(Vec<PivotPoint>, Vec<PivotPoint>), LevelError> {
    validate_window("n1", n1)?;
    validate_window("n2", n2)?;

    let mut supports = Vec::new();
    let mut resistances = Vec::new();

    if candles.len() < n1 + n2 + 1 {
        return Ok((supports, resistances));
    }

    for l in n1..(candles.len() - n2) {
        if is_support(candles, l, n1, n2) {
            supports.push(PivotPoint::new(l, candles[l].low, LevelKind::Support));
        }
        if is_resistance(candles, l, n1, n2) {
            resistances.push(PivotPoint::new(l, candles[l].high, LevelKind::Resistance));
        }
    }

    debug!(
        candles = candles.len(),
        supports = supports.len(),
        resistances = resistances.len(),
        "pivot scan complete"
    );

    Ok((supports, resistances))
}

/// Scan with the default window (3, 2).
pub fn scan_pivots_default(
    candles: &[Candle],
) -> Result<(Vec<PivotPoint>, Vec<PivotPoint>), LevelError> {
    scan_pivots(candles, DEFAULT_N1, DEFAULT_N2)
}

/// Lows non-increasing into the candidate, non-decreasing after it.
///
/// Callers guarantee `n1 <= l <= candles.len() - 1 - n2`.
fn is_support(candles: &[Candle], l: usize, n1: usize, n2: usize) -> bool {
    for i in (l - n1 + 1)..=l {
        if candles[i].low > candles[i - 1].low {
            return false;
        }
    }
    for i in (l + 1)..=(l + n2) {
        if candles[i].low < candles[i - 1].low {
            return false;
        }
    }
    true
}

/// Highs non-decreasing into the candidate, non-increasing after it.
fn is_resistance(candles: &[Candle], l: usize, n1: usize, n2: usize) -> bool {
    for i in (l - n1 + 1)..=l {
        if candles[i].high < candles[i - 1].high {
            return false;
        }
    }
    for i in (l + 1)..=(l + n2) {
        if candles[i].high > candles[i - 1].high {
            return false;
        }
    }
    true
}
