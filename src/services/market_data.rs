//! Market data provider seam.
//!
//! The engine never fetches; a provider hands it a chronologically ordered
//! candle series and the chart layer consumes the detected levels.

use crate::models::candle::Candle;

pub trait MarketDataProvider {
    /// Get historical candles for a symbol, oldest first.
    fn get_candles(
        &self,
        symbol: &str,
        interval: &str,
        limit: usize,
    ) -> Result<Vec<Candle>, Box<dyn std::error::Error>>;
}

/// Stand-in provider until a real data source is wired up.
pub struct PlaceholderMarketDataProvider;

impl MarketDataProvider for PlaceholderMarketDataProvider {
    fn get_candles(
        &self,
        _symbol: &str,
        _interval: &str,
        _limit: usize,
    ) -> Result<Vec<Candle>, Box<dyn std::error::Error>> {
        Ok(Vec::new())
    }
}
