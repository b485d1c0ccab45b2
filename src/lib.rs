//! Trend level detection for candlestick charts.
//!
//! Scans an OHLC candle series for local support and resistance pivots with
//! a fixed look-back/look-forward window, collapses levels too close to be
//! visually distinct, and hands the surviving horizontal levels (plus ray
//! drawing extents) to a chart renderer.

pub mod chart;
pub mod config;
pub mod levels;
pub mod logging;
pub mod models;
pub mod services;

pub use config::Config;
pub use levels::{LevelEngine, LevelError};
pub use models::{Candle, LevelKind, PivotPoint, TrendLevelSet};
