//! Unit tests for the rolling range bands

use chrono::Utc;
use traderanges::levels::rolling::rolling_range_bands;
use traderanges::levels::LevelError;
use traderanges::models::candle::Candle;

fn make_candles(closes: &[f64]) -> Vec<Candle> {
    closes
        .iter()
        .map(|&close| Candle::new(close, close + 0.5, close - 0.5, close, 1000.0, Utc::now()))
        .collect()
}

#[test]
fn test_window_of_one_projects_the_close_itself() {
    let candles = make_candles(&[1.0, 2.5, 4.0]);
    let bands = rolling_range_bands(&candles, 1).unwrap();

    assert_eq!(bands.resistance, vec![1.0, 2.5, 4.0]);
    assert_eq!(bands.support, vec![1.0, 2.5, 4.0]);
}

#[test]
fn test_hand_computed_bands() {
    let candles = make_candles(&[1.0, 2.0, 3.0]);
    let bands = rolling_range_bands(&candles, 2).unwrap();

    // First entry is a partial window of one close.
    assert_eq!(bands.resistance, vec![1.0, 3.0, 4.0]);
    assert_eq!(bands.support, vec![1.0, 0.0, 1.0]);
}

#[test]
fn test_window_larger_than_series_uses_full_prefix() {
    let candles = make_candles(&[1.0, 2.0]);
    let bands = rolling_range_bands(&candles, 5).unwrap();

    assert_eq!(bands.resistance, vec![1.0, 3.0]);
    assert_eq!(bands.support, vec![1.0, 0.0]);
}

#[test]
fn test_output_lengths_match_input() {
    let candles = make_candles(&[3.0, 1.0, 4.0, 1.0, 5.0, 9.0, 2.0]);
    let bands = rolling_range_bands(&candles, 3).unwrap();

    assert_eq!(bands.support.len(), candles.len());
    assert_eq!(bands.resistance.len(), candles.len());
}

#[test]
fn test_empty_series_yields_empty_bands() {
    let bands = rolling_range_bands(&[], 3).unwrap();
    assert!(bands.support.is_empty());
    assert!(bands.resistance.is_empty());
}

#[test]
fn test_zero_window_rejected() {
    let candles = make_candles(&[1.0, 2.0]);
    assert_eq!(
        rolling_range_bands(&candles, 0),
        Err(LevelError::InvalidWindow {
            name: "window",
            value: 0
        })
    );
}
