//! Odds conversion between American, decimal and implied-probability forms.
//!
//! Leaf of the domain layer. Every other calculation builds on these four
//! conversions. They are near-inverses of each other, not exact inverses at
//! boundary values.
//!
//! Singularities are NOT guarded here: `implied_prob_to_american` at a
//! probability of exactly 0 or 1 and `decimal_to_american` at exactly 1.0
//! produce infinities. Callers validate their inputs.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::InputError;

/// Which side of a two-way market a wager is on.
///
/// Sportsbook convention: the favorite carries the negative price.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BetSide {
    Favorite,
    Underdog,
}

impl BetSide {
    pub fn is_favorite(self) -> bool {
        matches!(self, Self::Favorite)
    }
}

impl fmt::Display for BetSide {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Favorite => write!(f, "favorite"),
            Self::Underdog => write!(f, "underdog"),
        }
    }
}

impl FromStr for BetSide {
    type Err = InputError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "favorite" | "fav" => Ok(Self::Favorite),
            "underdog" | "dog" => Ok(Self::Underdog),
            other => Err(InputError::UnknownSide(other.to_string())),
        }
    }
}

/// Converts American odds to decimal odds (stake included).
///
/// `-110 -> 1.9090…`, `+150 -> 2.5`. A price of exactly 0 has no payout
/// and maps to `1.0`, which the Kelly guard then sizes at zero.
pub fn american_to_decimal(odds: f64) -> f64 {
    if odds > 0.0 {
        (odds + 100.0) / 100.0
    } else if odds == 0.0 {
        1.0
    } else {
        (100.0 - odds) / -odds
    }
}

/// Converts American odds to the implied win probability, ignoring vig.
pub fn american_to_implied_prob(odds: f64) -> f64 {
    if odds > 0.0 {
        100.0 / (odds + 100.0)
    } else {
        -odds / (-odds + 100.0)
    }
}

/// Converts an implied probability back to American odds.
///
/// Infinite at `prob == 0.0` and `prob == 1.0`.
pub fn implied_prob_to_american(prob: f64) -> f64 {
    if prob >= 0.5 {
        -(prob * 100.0) / (1.0 - prob)
    } else {
        (100.0 * (1.0 - prob)) / prob
    }
}

/// Converts decimal odds to American odds.
///
/// Infinite at `decimal == 1.0`.
pub fn decimal_to_american(decimal: f64) -> f64 {
    if decimal >= 2.0 {
        (decimal - 1.0) * 100.0
    } else {
        -100.0 / (decimal - 1.0)
    }
}

/// One price expressed in all three forms.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct OddsQuote {
    pub american: f64,
    pub decimal: f64,
    pub implied_prob: f64,
}

impl OddsQuote {
    pub fn from_american(american: f64) -> Self {
        Self {
            american,
            decimal: american_to_decimal(american),
            implied_prob: american_to_implied_prob(american),
        }
    }

    /// Infinite American odds at `decimal == 1.0`.
    pub fn from_decimal(decimal: f64) -> Self {
        let american = decimal_to_american(decimal);
        Self {
            american,
            decimal,
            implied_prob: american_to_implied_prob(american),
        }
    }

    /// Infinite American odds at a probability of 0 or 1.
    pub fn from_implied_prob(implied_prob: f64) -> Self {
        let american = implied_prob_to_american(implied_prob);
        Self {
            american,
            decimal: american_to_decimal(american),
            implied_prob,
        }
    }
}

/// Implied probabilities of both sides of a sharp book's two-way market.
///
/// The sum exceeds 1.0 by the book's hold.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SharpMarket {
    pub favorite_odds: f64,
    pub underdog_odds: f64,
    pub favorite_prob: f64,
    pub underdog_prob: f64,
}

impl SharpMarket {
    pub fn new(favorite_odds: f64, underdog_odds: f64) -> Self {
        Self {
            favorite_odds,
            underdog_odds,
            favorite_prob: american_to_implied_prob(favorite_odds),
            underdog_prob: american_to_implied_prob(underdog_odds),
        }
    }

    /// The sharp implied probability of `side`, used as its true probability.
    pub fn true_prob(&self, side: BetSide) -> f64 {
        match side {
            BetSide::Favorite => self.favorite_prob,
            BetSide::Underdog => self.underdog_prob,
        }
    }
}
