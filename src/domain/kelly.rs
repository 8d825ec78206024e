//! Kelly Criterion stake sizing.
//!
//! Full Kelly maximizes long-run growth but has high variance. Every
//! recommendation is sized at half-Kelly and then capped at 10% of the
//! bankroll. Neither the multiplier nor the cap is configurable.

use serde::{Deserialize, Serialize};

use super::odds::american_to_decimal;

/// Multiplier applied to the raw Kelly fraction.
pub const KELLY_MULTIPLIER: f64 = 0.5;

/// Largest fraction of bankroll ever recommended.
pub const MAX_STAKE_FRACTION: f64 = 0.10;

/// Recommended stake as a percent of bankroll and as a currency amount.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct KellyResult {
    /// Percent of bankroll, already capped to `[0, 10]`.
    pub percent: f64,
    pub amount: f64,
}

impl KellyResult {
    pub const ZERO: Self = Self {
        percent: 0.0,
        amount: 0.0,
    };
}

/// Raw (uncapped, full) Kelly fraction for net odds `b` and win probability `p`.
///
///   f* = (b * p - q) / b
pub fn raw_kelly_fraction(b: f64, p: f64) -> f64 {
    let q = 1.0 - p;
    (b * p - q) / b
}

/// Computes the safety-capped Kelly stake for a wager.
///
/// A missing, `NaN` or non-positive bankroll recommends nothing, as do
/// non-positive net odds or win probability.
pub fn calculate_kelly(true_prob: f64, offered_odds: f64, bankroll: Option<f64>) -> KellyResult {
    let bankroll = match bankroll {
        Some(b) if b > 0.0 => b,
        _ => return KellyResult::ZERO,
    };

    let b = american_to_decimal(offered_odds) - 1.0;
    let p = true_prob;

    if b <= 0.0 || p <= 0.0 {
        return KellyResult::ZERO;
    }

    let safe = (raw_kelly_fraction(b, p) * KELLY_MULTIPLIER).clamp(0.0, MAX_STAKE_FRACTION);

    KellyResult {
        percent: safe * 100.0,
        amount: bankroll * safe,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kelly_positive_edge() {
        let k = calculate_kelly(0.55, -110.0, Some(1000.0));
        assert!((k.percent - 2.75).abs() < 1e-9, "got {}", k.percent);
        assert!((k.amount - 27.5).abs() < 1e-7, "got {}", k.amount);
    }

    #[test]
    fn test_kelly_raw_fraction() {
        let b = american_to_decimal(-110.0) - 1.0;
        let f = raw_kelly_fraction(b, 0.55);
        assert!((f - 0.055).abs() < 1e-9, "got {f}");
    }

    #[test]
    fn test_kelly_negative_edge_is_zero() {
        let k = calculate_kelly(0.45, -110.0, Some(1000.0));
        assert_eq!(k, KellyResult::ZERO);
    }

    #[test]
    fn test_kelly_capped_at_ten_percent() {
        let k = calculate_kelly(0.9, 200.0, Some(1000.0));
        assert!((k.percent - 10.0).abs() < 1e-12);
        assert!((k.amount - 100.0).abs() < 1e-9);
    }

    #[test]
    fn test_kelly_bankroll_guards() {
        assert_eq!(calculate_kelly(0.6, 100.0, None), KellyResult::ZERO);
        assert_eq!(calculate_kelly(0.6, 100.0, Some(0.0)), KellyResult::ZERO);
        assert_eq!(calculate_kelly(0.6, 100.0, Some(-50.0)), KellyResult::ZERO);
        assert_eq!(calculate_kelly(0.6, 100.0, Some(f64::NAN)), KellyResult::ZERO);
    }

    #[test]
    fn test_kelly_probability_guard() {
        assert_eq!(calculate_kelly(0.0, 100.0, Some(1000.0)), KellyResult::ZERO);
    }

    #[test]
    fn test_kelly_even_money_exact() {
        // b = 1, p = 0.6: f* = 0.2, half = 0.1 (exactly at the cap)
        let k = calculate_kelly(0.6, 100.0, Some(500.0));
        assert!((k.percent - 10.0).abs() < 1e-9);
        assert!((k.amount - 50.0).abs() < 1e-9);
    }
}
