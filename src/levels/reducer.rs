//! Overlapping level reducer
//!
//! Collapses consecutive levels whose prices sit too close together to be
//! visually distinct on a chart, keeping one representative per run.

use crate::levels::error::LevelError;
use crate::levels::validation::validate_sensitivity;
use crate::models::levels::PivotPoint;

/// Default sensitivity for levels from the windowed pivot scan.
pub const DEFAULT_SENSITIVITY: f64 = 0.0005;
/// Coarser sensitivity suited to wide-range band levels.
pub const COARSE_SENSITIVITY: f64 = 0.005;

/// Drop levels within `sensitivity` of the previous surviving level.
///
/// Walks the list once, front to back. Each level is compared against the
/// level immediately before it in the current, possibly already-shrunk list;
/// a level within `sensitivity` of that survivor is removed and the next
/// level takes its position for the same comparison. There is no backward
/// re-scan, so the result depends on list order and is not a globally
/// minimal clustering. Input order is preserved, prices are never changed,
/// and lists of length 0 or 1 come back as-is.
pub fn collapse_nearby_levels(
    levels: &[PivotPoint],
    sensitivity: f64,
) -> Result<Vec<PivotPoint>, LevelError> {
    validate_sensitivity(sensitivity)?;

    let mut kept = levels.to_vec();
    let mut i = 1;
    while i < kept.len() {
        if (kept[i].price - kept[i - 1].price).abs() <= sensitivity {
            kept.remove(i);
        } else {
            i += 1;
        }
    }
    Ok(kept)
}

/// Collapse with the default sensitivity (0.0005).
pub fn collapse_nearby_levels_default(
    levels: &[PivotPoint],
) -> Result<Vec<PivotPoint>, LevelError> {
    collapse_nearby_levels(levels, DEFAULT_SENSITIVITY)
}
