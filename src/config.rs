//! Detection configuration with environment-based overrides.

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::levels::reducer::DEFAULT_SENSITIVITY;
use crate::levels::scanner::{DEFAULT_N1, DEFAULT_N2};

/// Deployment environment, used to pick the log format.
pub fn get_environment() -> String {
    std::env::var("ENVIRONMENT").unwrap_or_else(|_| "sandbox".to_string())
}

/// Configuration for trend level detection.
///
/// `interval` is the candle interval requested from the data provider; the
/// detection itself only measures distance in candle positions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Candles looked back from a pivot candidate (candidate included).
    pub n1: usize,
    /// Candles looked forward from a pivot candidate.
    pub n2: usize,
    /// Minimum price distance between consecutive surviving levels.
    pub sensitivity: f64,
    /// Leftward shift applied to every drawn ray's start index.
    pub ray_start_offset: i64,
    /// Candle interval requested from the data provider.
    pub interval: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            n1: DEFAULT_N1,
            n2: DEFAULT_N2,
            sensitivity: DEFAULT_SENSITIVITY,
            ray_start_offset: 0,
            interval: "5min".to_string(),
        }
    }
}

impl Config {
    /// Build a config from `TRADERANGES_*` environment variables, falling
    /// back to defaults for anything unset.
    ///
    /// Unparseable values are logged and left at their defaults; semantic
    /// checks (positive windows, non-negative sensitivity) still happen at
    /// detection time.
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        let mut config = Self::default();
        read_env("TRADERANGES_N1", &mut config.n1);
        read_env("TRADERANGES_N2", &mut config.n2);
        read_env("TRADERANGES_SENSITIVITY", &mut config.sensitivity);
        read_env("TRADERANGES_RAY_START_OFFSET", &mut config.ray_start_offset);
        if let Ok(interval) = std::env::var("TRADERANGES_INTERVAL") {
            config.interval = interval;
        }
        config
    }

    pub fn with_window(mut self, n1: usize, n2: usize) -> Self {
        self.n1 = n1;
        self.n2 = n2;
        self
    }

    pub fn with_sensitivity(mut self, sensitivity: f64) -> Self {
        self.sensitivity = sensitivity;
        self
    }

    pub fn with_ray_start_offset(mut self, offset: i64) -> Self {
        self.ray_start_offset = offset;
        self
    }

    pub fn with_interval(mut self, interval: impl Into<String>) -> Self {
        self.interval = interval.into();
        self
    }
}

fn read_env<T: std::str::FromStr>(key: &str, slot: &mut T) {
    if let Ok(raw) = std::env::var(key) {
        match raw.parse() {
            Ok(value) => *slot = value,
            Err(_) => warn!(key, value = %raw, "ignoring unparseable environment override"),
        }
    }
}
