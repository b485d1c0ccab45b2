//! Output models for trend level detection.

use serde::{Deserialize, Serialize};

/// Which side of price action a level marks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LevelKind {
    Support,
    Resistance,
}

/// A candle flagged as a local extremum by the windowed scan.
///
/// `index` is the candle's position in the scanned series; `price` is the
/// candle's low (support) or high (resistance).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PivotPoint {
    pub index: usize,
    pub price: f64,
    pub kind: LevelKind,
}

impl PivotPoint {
    pub fn new(index: usize, price: f64, kind: LevelKind) -> Self {
        Self { index, price, kind }
    }
}

/// Reduced trend levels plus the scalars the chart layer needs to draw rays.
///
/// `ray_start_offset` shifts every ray's start to the left of its pivot;
/// `ray_end_index` is the last index of the scanned series, the terminal
/// x-coordinate of every ray.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrendLevelSet {
    pub supports: Vec<PivotPoint>,
    pub resistances: Vec<PivotPoint>,
    pub ray_start_offset: i64,
    pub ray_end_index: usize,
}

impl TrendLevelSet {
    /// True when neither side produced a level.
    pub fn is_empty(&self) -> bool {
        self.supports.is_empty() && self.resistances.is_empty()
    }

    /// Total number of levels across both sides.
    pub fn len(&self) -> usize {
        self.supports.len() + self.resistances.len()
    }
}
