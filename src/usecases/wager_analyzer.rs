//! Wager Analyzer - EV of a Recreational Price Against a Sharp Line
//!
//! The sharp book's two-way market supplies the true probability of the
//! chosen side. The offered price is then evaluated for EV, sized with
//! capped Kelly, and rounded to a stake a book would accept.

use serde::Serialize;
use tracing::{debug, info};

use crate::domain::ev::{EvResult, calculate_ev};
use crate::domain::kelly::{KellyResult, calculate_kelly};
use crate::domain::odds::{BetSide, SharpMarket};
use crate::domain::sizing::{round_bet_size, round_win_amount};
use crate::error::{InputError, Result};

/// Inputs of a single-wager analysis, as entered by the user.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WagerRequest {
  pub sharp_favorite: Option<f64>,
  pub sharp_underdog: Option<f64>,
  pub offered_odds: Option<f64>,
  pub side: BetSide,
  pub bankroll: Option<f64>,
}

/// Full recommendation for a single wager.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct WagerRecommendation {
  pub market: SharpMarket,
  pub ev: EvResult,
  pub kelly: KellyResult,
  /// Stake after sportsbook rounding.
  pub wager: f64,
  /// Payout of `wager` at the offered price.
  pub potential_win: f64,
}

/// A usable price: present, finite and non-zero.
fn required_odds(odds: Option<f64>) -> Option<f64> {
  odds.filter(|o| o.is_finite() && *o != 0.0)
}

/// Implied probabilities of a sharp two-way market.
pub fn implied_probabilities(
  sharp_favorite: Option<f64>,
  sharp_underdog: Option<f64>,
) -> Result<SharpMarket> {
  match (required_odds(sharp_favorite), required_odds(sharp_underdog)) {
    (Some(fav), Some(dog)) => Ok(SharpMarket::new(fav, dog)),
    _ => Err(InputError::MissingLines),
  }
}

/// Analyze one wager end to end.
pub fn analyze_wager(request: &WagerRequest) -> Result<WagerRecommendation> {
  let offered = required_odds(request.offered_odds).ok_or(InputError::MissingLines)?;
  let market = implied_probabilities(request.sharp_favorite, request.sharp_underdog)?;

  let true_prob = market.true_prob(request.side);
  let ev = calculate_ev(Some(true_prob), Some(offered), request.side)
    .ok_or(InputError::NoResult("EV"))?;

  let kelly = calculate_kelly(true_prob, offered, request.bankroll);
  let wager = round_bet_size(kelly.amount, offered, request.side);
  let potential_win = round_win_amount(wager, offered, request.side);

  debug!(
    true_prob,
    raw_amount = kelly.amount,
    wager,
    "Kelly stake rounded"
  );
  info!(
    side = %request.side,
    offered,
    ev_percent = ev.ev_percent,
    kelly_percent = kelly.percent,
    wager,
    "Wager analyzed"
  );

  Ok(WagerRecommendation {
    market,
    ev,
    kelly,
    wager,
    potential_win,
  })
}

#[cfg(test)]
mod tests {
  use super::*;

  fn request(side: BetSide, offered: f64, bankroll: Option<f64>) -> WagerRequest {
    WagerRequest {
      sharp_favorite: Some(-150.0),
      sharp_underdog: Some(130.0),
      offered_odds: Some(offered),
      side,
      bankroll,
    }
  }

  #[test]
  fn test_favorite_positive_ev() {
    // sharp fav 60%, offered -130: 0.6 * 100/130 - 0.4 = 0.0615
    let rec = analyze_wager(&request(BetSide::Favorite, -130.0, Some(10_000.0))).unwrap();
    assert!((rec.ev.true_prob - 0.6).abs() < 1e-12);
    assert!((rec.ev.ev_decimal - (0.6 / 1.3 - 0.4)).abs() < 1e-12);
    assert!(rec.kelly.percent > 0.0 && rec.kelly.percent <= 10.0);
    // win amount lands on a $50 denomination
    assert_eq!(rec.potential_win % 50.0, 0.0);
  }

  #[test]
  fn test_underdog_stake_on_fifty() {
    // sharp dog 100/230 = 43.5%, offered +150: positive EV
    let rec = analyze_wager(&request(BetSide::Underdog, 150.0, Some(10_000.0))).unwrap();
    assert!(rec.ev.is_positive());
    assert_eq!(rec.wager % 50.0, 0.0);
    assert_eq!(rec.potential_win, (rec.wager * 1.5).round());
  }

  #[test]
  fn test_negative_ev_recommends_nothing() {
    let rec = analyze_wager(&request(BetSide::Favorite, -200.0, Some(10_000.0))).unwrap();
    assert!(!rec.ev.is_positive());
    assert_eq!(rec.kelly, KellyResult::ZERO);
    assert_eq!(rec.wager, 0.0);
    assert_eq!(rec.potential_win, 0.0);
  }

  #[test]
  fn test_no_bankroll_still_reports_ev() {
    let rec = analyze_wager(&request(BetSide::Favorite, -130.0, None)).unwrap();
    assert!(rec.ev.is_positive());
    assert_eq!(rec.wager, 0.0);
  }

  #[test]
  fn test_missing_or_zero_lines_rejected() {
    let mut req = request(BetSide::Favorite, -130.0, None);
    req.sharp_underdog = None;
    assert_eq!(analyze_wager(&req), Err(InputError::MissingLines));

    let mut req = request(BetSide::Favorite, -130.0, None);
    req.offered_odds = Some(0.0);
    assert_eq!(analyze_wager(&req), Err(InputError::MissingLines));

    let mut req = request(BetSide::Favorite, -130.0, None);
    req.sharp_favorite = Some(f64::NAN);
    assert_eq!(analyze_wager(&req), Err(InputError::MissingLines));
  }

  #[test]
  fn test_implied_probabilities() {
    let market = implied_probabilities(Some(-110.0), Some(-110.0)).unwrap();
    assert!((market.favorite_prob - 0.523_809_523_8).abs() < 1e-9);
    assert_eq!(market.favorite_prob, market.underdog_prob);
    assert!(implied_probabilities(Some(-110.0), None).is_err());
  }
}
