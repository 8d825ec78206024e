//! Single-wager expected value against a true (sharp) probability.

use serde::{Deserialize, Serialize};

use super::odds::{BetSide, american_to_decimal};

/// Expected value of a one-unit stake.
///
/// Carries the inputs it was computed from so consumers display them
/// rather than recomputing.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EvResult {
    /// EV as a percentage of the stake.
    pub ev_percent: f64,
    /// EV per unit staked.
    pub ev_decimal: f64,
    pub true_prob: f64,
    pub offered_odds: f64,
    pub side: BetSide,
}

impl EvResult {
    pub fn is_positive(&self) -> bool {
        self.ev_decimal > 0.0
    }
}

/// Computes the EV of betting `side` at `offered_odds` given `true_prob`.
///
/// Returns `None` when either input is absent. `NaN` counts as absent.
/// An explicit `0.0` probability is a real (certain loss) input.
///
/// ```text
/// win  = decimal(offered) - 1
/// ev   = p * win - (1 - p)
/// ```
pub fn calculate_ev(
    true_prob: Option<f64>,
    offered_odds: Option<f64>,
    side: BetSide,
) -> Option<EvResult> {
    let p = true_prob.filter(|p| !p.is_nan())?;
    let odds = offered_odds.filter(|o| !o.is_nan())?;

    let win_amount = american_to_decimal(odds) - 1.0;
    let ev = p * win_amount - (1.0 - p);

    Some(EvResult {
        ev_percent: ev * 100.0,
        ev_decimal: ev,
        true_prob: p,
        offered_odds: odds,
        side,
    })
}
