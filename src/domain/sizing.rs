//! Sportsbook-realistic rounding of stakes and payouts.
//!
//! Books accept stakes that produce round numbers. Favorite bettors think
//! in terms of the win ("to win $100"), underdog bettors in terms of the
//! stake ("$50 on the dog"). Prices inside the pick'em band (-101, +101)
//! exclusive get no denomination rounding at all.

use super::odds::{BetSide, american_to_decimal};

/// Denomination stakes and payouts are rounded to.
pub const DENOMINATION: f64 = 50.0;

/// Favorite prices at or below this get win-amount rounding.
pub const FAVORITE_THRESHOLD: f64 = -101.0;

/// Underdog prices at or above this get stake rounding.
pub const UNDERDOG_THRESHOLD: f64 = 101.0;

/// Rounds to the nearest integer with halves going toward +infinity.
///
/// `2.5 -> 3`, `-2.5 -> -2`. Differs from `f64::round` on negative halves.
pub fn round_half_up(value: f64) -> f64 {
    let floor = value.floor();
    if value - floor >= 0.5 { floor + 1.0 } else { floor }
}

/// Rounds to the nearest multiple of [`DENOMINATION`].
pub fn round_to_denomination(value: f64) -> f64 {
    round_half_up(value / DENOMINATION) * DENOMINATION
}

fn rounds_win_amount(odds: f64, side: BetSide) -> bool {
    side.is_favorite() && odds <= FAVORITE_THRESHOLD
}

/// Converts a raw Kelly amount into a wager a book would actually take.
///
/// - Favorite at `odds <= -101`: round the *win* to the nearest $50, then
///   back-solve the stake that produces it.
/// - Underdog at `odds >= 101`: round the stake to the nearest $50.
/// - Otherwise: nearest whole dollar only.
pub fn round_bet_size(amount: f64, odds: f64, side: BetSide) -> f64 {
    let rounded = round_half_up(amount);

    if rounds_win_amount(odds, side) {
        let net = american_to_decimal(odds) - 1.0;
        let rounded_win = round_to_denomination(rounded * net);
        round_half_up(rounded_win / net)
    } else if !side.is_favorite() && odds >= UNDERDOG_THRESHOLD {
        round_to_denomination(rounded)
    } else {
        rounded
    }
}

/// Payout for an already-decided wager.
///
/// Uses the same favorite branch as [`round_bet_size`] so a stake it
/// produced maps back onto its round win amount.
pub fn round_win_amount(wager: f64, odds: f64, side: BetSide) -> f64 {
    let mut win = wager * (american_to_decimal(odds) - 1.0);

    if rounds_win_amount(odds, side) {
        win = round_to_denomination(win);
    }

    round_half_up(win)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_half_up() {
        assert_eq!(round_half_up(2.5), 3.0);
        assert_eq!(round_half_up(-2.5), -2.0);
        assert_eq!(round_half_up(2.49), 2.0);
        assert_eq!(round_half_up(-2.51), -3.0);
        assert_eq!(round_half_up(0.499_999_999_999_999_94), 0.0);
        assert!(round_half_up(f64::NAN).is_nan());
    }

    #[test]
    fn test_round_to_denomination() {
        assert_eq!(round_to_denomination(625.0), 650.0);
        assert_eq!(round_to_denomination(624.0), 600.0);
        assert_eq!(round_to_denomination(24.0), 0.0);
    }

    #[test]
    fn test_favorite_boundary_at_minus_101() {
        // win = 1000 * 100/101 = 990.1 -> 1000, stake = 1000 * 1.01 = 1010
        assert_eq!(round_bet_size(1000.0, -101.0, BetSide::Favorite), 1010.0);
        // -100 is inside the pick'em band
        assert_eq!(round_bet_size(1000.0, -100.0, BetSide::Favorite), 1000.0);
    }

    #[test]
    fn test_favorite_win_rounding_at_minus_110() {
        // 275 * 0.909 = 250 -> stake 275
        assert_eq!(round_bet_size(274.6, -110.0, BetSide::Favorite), 275.0);
        // 230 * 0.909 = 209.1 -> 200 -> stake 220
        assert_eq!(round_bet_size(230.0, -110.0, BetSide::Favorite), 220.0);
    }

    #[test]
    fn test_underdog_stake_rounding() {
        assert_eq!(round_bet_size(1030.0, 150.0, BetSide::Underdog), 1050.0);
        assert_eq!(round_bet_size(1020.0, 150.0, BetSide::Underdog), 1000.0);
        assert_eq!(round_bet_size(1020.0, 101.0, BetSide::Underdog), 1000.0);
    }

    #[test]
    fn test_underdog_boundary_at_plus_101() {
        assert_eq!(round_bet_size(1020.0, 100.0, BetSide::Underdog), 1020.0);
    }

    #[test]
    fn test_side_mismatch_gets_integer_rounding_only() {
        // a "favorite" at a plus price and an "underdog" at a minus price
        assert_eq!(round_bet_size(1020.4, 150.0, BetSide::Favorite), 1020.0);
        assert_eq!(round_bet_size(1020.5, -150.0, BetSide::Underdog), 1021.0);
    }

    #[test]
    fn test_round_win_amount_favorite() {
        assert_eq!(round_win_amount(275.0, -110.0, BetSide::Favorite), 250.0);
        assert_eq!(round_win_amount(1010.0, -101.0, BetSide::Favorite), 1000.0);
    }

    #[test]
    fn test_round_win_amount_underdog() {
        assert_eq!(round_win_amount(50.0, 150.0, BetSide::Underdog), 75.0);
        assert_eq!(round_win_amount(33.0, 125.0, BetSide::Underdog), 41.0);
    }
}
