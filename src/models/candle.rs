//! Canonical in-memory representation of one OHLCV candle.
//!
//! Providers hand the engine a chronologically ordered `Vec<Candle>`; the
//! zero-based position in that vector, not the timestamp, is what the
//! windowed scan measures distance in.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A single OHLCV observation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Candle {
    pub open: f64,
    pub high: f64,
    pub low: f64,
    pub close: f64,
    pub volume: f64,
    pub timestamp: DateTime<Utc>,
}

impl Candle {
    pub fn new(
        open: f64,
        high: f64,
        low: f64,
        close: f64,
        volume: f64,
        timestamp: DateTime<Utc>,
    ) -> Self {
        Self {
            open,
            high,
            low,
            close,
            volume,
            timestamp,
        }
    }
}
