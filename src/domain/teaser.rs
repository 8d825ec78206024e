//! Wong teaser evaluation.
//!
//! Combines per-leg win probabilities into one blended probability under a
//! push-handling policy, then prices the composite wager through the EV and
//! Kelly layers.
//!
//! Push probabilities come from a fixed heuristic on the teased line:
//! 1% on whole numbers, 0.1% on half points, 0 otherwise. It is not fitted
//! to historical data and must stay exactly this shape.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::ev::{EvResult, calculate_ev};
use super::kelly::{KellyResult, calculate_kelly};
use super::odds::{BetSide, american_to_implied_prob};
use super::sizing::round_to_denomination;
use crate::error::InputError;

/// Push probability on a whole-number line.
pub const WHOLE_LINE_PUSH_PROB: f64 = 0.01;

/// Push probability on a half-point line.
pub const HALF_LINE_PUSH_PROB: f64 = 0.001;

/// Added to `1 - push` under [`PushPolicy::LegPushOnPush`].
pub const PUSH_EPSILON: f64 = 1e-10;

/// Where the teased team plays. Informational only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LegLocation {
    #[default]
    Home,
    Away,
}

impl fmt::Display for LegLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Home => write!(f, "home"),
            Self::Away => write!(f, "away"),
        }
    }
}

impl FromStr for LegLocation {
    type Err = InputError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "home" | "h" => Ok(Self::Home),
            "away" | "a" => Ok(Self::Away),
            other => Err(InputError::UnknownLocation(other.to_string())),
        }
    }
}

/// How a leg landing exactly on its line affects the teaser.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PushPolicy {
    /// A push loses the whole teaser.
    #[serde(rename = "loss")]
    LossOnPush,
    /// A pushed leg is removed from the teaser.
    #[serde(rename = "void")]
    VoidOnPush,
    /// A pushed leg pushes; remaining legs must all win.
    #[serde(rename = "push")]
    LegPushOnPush,
}

impl fmt::Display for PushPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::LossOnPush => write!(f, "loss"),
            Self::VoidOnPush => write!(f, "void"),
            Self::LegPushOnPush => write!(f, "push"),
        }
    }
}

impl FromStr for PushPolicy {
    type Err = InputError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "loss" => Ok(Self::LossOnPush),
            "void" => Ok(Self::VoidOnPush),
            "push" | "leg-push" => Ok(Self::LegPushOnPush),
            other => Err(InputError::UnknownPushPolicy(other.to_string())),
        }
    }
}

/// One leg of a teaser: the teased line and the book's price on it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TeaserLeg {
    pub location: LegLocation,
    /// Line after the teaser points were added.
    pub line: f64,
    pub offered_odds: f64,
}

impl TeaserLeg {
    pub fn new(location: LegLocation, line: f64, offered_odds: f64) -> Self {
        Self {
            location,
            line,
            offered_odds,
        }
    }

    pub fn implied_prob(&self) -> f64 {
        american_to_implied_prob(self.offered_odds)
    }

    pub fn push_prob(&self) -> f64 {
        push_probability(self.line)
    }
}

/// `LOCATION:LINE:ODDS`, e.g. `home:-2.5:-110`.
impl FromStr for TeaserLeg {
    type Err = InputError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut parts = s.splitn(3, ':');
        let (Some(location), Some(line), Some(odds)) = (parts.next(), parts.next(), parts.next())
        else {
            return Err(InputError::InvalidLegSpec(s.to_string()));
        };

        let location = location.parse()?;
        let line = line
            .trim()
            .parse()
            .map_err(|_| InputError::InvalidLegSpec(s.to_string()))?;
        let odds = odds
            .trim()
            .parse()
            .map_err(|_| InputError::InvalidLegSpec(s.to_string()))?;

        Ok(Self::new(location, line, odds))
    }
}

/// Heuristic push probability for a teased line.
///
/// Only the absolute value matters. Non-finite lines get 0.
pub fn push_probability(line: f64) -> f64 {
    let abs = line.abs();
    if abs % 1.0 == 0.0 {
        WHOLE_LINE_PUSH_PROB
    } else if abs % 0.5 == 0.0 {
        HALF_LINE_PUSH_PROB
    } else {
        0.0
    }
}

/// Product of leg probabilities under `policy`. Not clamped.
///
/// The void and leg-push forms keep the divide-then-multiply steps, so
/// they match the plain product only up to floating-point noise.
pub fn combine_probabilities(legs: &[TeaserLeg], policy: PushPolicy) -> f64 {
    legs.iter().fold(1.0, |combined, leg| {
        let implied = leg.implied_prob();
        let no_push = 1.0 - leg.push_prob();
        match policy {
            PushPolicy::LossOnPush => combined * implied,
            PushPolicy::VoidOnPush => {
                let adjusted_win = implied / no_push;
                combined * (adjusted_win * no_push)
            }
            PushPolicy::LegPushOnPush => {
                let win_given_no_push = implied / (no_push + PUSH_EPSILON);
                combined * (win_given_no_push * no_push)
            }
        }
    })
}

/// Clamps a derived probability to `[0, 1]`. `NaN` becomes 0.
pub fn clamp_probability(prob: f64) -> f64 {
    if prob.is_nan() { 0.0 } else { prob.clamp(0.0, 1.0) }
}

/// Per-leg probabilities reported alongside a teaser result.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LegBreakdown {
    pub leg: TeaserLeg,
    pub implied_prob: f64,
    pub push_prob: f64,
}

/// Priced teaser with its recommended wager.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TeaserResult {
    pub push_policy: PushPolicy,
    pub teaser_odds: f64,
    /// Clamped combined win probability fed to EV and Kelly.
    pub combined_prob: f64,
    pub ev: EvResult,
    pub kelly: KellyResult,
    /// Kelly amount rounded to the nearest $50.
    pub wager: f64,
    pub legs: Vec<LegBreakdown>,
}

/// Evaluates a teaser at `teaser_odds`.
///
/// Returns `None` when the teaser odds are absent. The composite wager is
/// always evaluated as a favorite-style bet.
pub fn calculate_teaser(
    legs: &[TeaserLeg],
    push_policy: PushPolicy,
    teaser_odds: Option<f64>,
    bankroll: Option<f64>,
) -> Option<TeaserResult> {
    let teaser_odds = teaser_odds.filter(|o| !o.is_nan())?;

    let combined_prob = clamp_probability(combine_probabilities(legs, push_policy));

    let ev = calculate_ev(Some(combined_prob), Some(teaser_odds), BetSide::Favorite)?;
    let kelly = calculate_kelly(combined_prob, teaser_odds, bankroll);
    let wager = round_to_denomination(kelly.amount);

    let legs = legs
        .iter()
        .map(|leg| LegBreakdown {
            leg: *leg,
            implied_prob: leg.implied_prob(),
            push_prob: leg.push_prob(),
        })
        .collect();

    Some(TeaserResult {
        push_policy,
        teaser_odds,
        combined_prob,
        ev,
        kelly,
        wager,
        legs,
    })
}
