//! Chart handoff for the rendering collaborator.
//!
//! The engine does not draw. It hands the renderer one horizontal ray per
//! trend level: a start coordinate (the pivot index shifted left by the
//! configured offset), the terminal index of the visible series, and the
//! level price.

use serde::{Deserialize, Serialize};

use crate::models::levels::{LevelKind, TrendLevelSet};

/// One horizontal ray to draw for a trend level.
///
/// `start_index` can be negative when the offset pushes past the left edge
/// of the chart; renderers clip it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TrendRay {
    pub start_index: i64,
    pub end_index: i64,
    pub price: f64,
    pub kind: LevelKind,
}

/// Build the rays for a detected level set, supports first.
pub fn trend_rays(levels: &TrendLevelSet) -> Vec<TrendRay> {
    levels
        .supports
        .iter()
        .chain(levels.resistances.iter())
        .map(|pivot| TrendRay {
            start_index: pivot.index as i64 - levels.ray_start_offset,
            end_index: levels.ray_end_index as i64,
            price: pivot.price,
            kind: pivot.kind,
        })
        .collect()
}
