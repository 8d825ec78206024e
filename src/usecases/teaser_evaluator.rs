//! Teaser Evaluator - Validated Wong Teaser Pricing
//!
//! Checks teaser input the way a form would (teaser odds present, leg
//! count within limits, every leg numeric) before handing it to the
//! domain teaser model.

use tracing::{debug, info};

use crate::config::TeaserConfig;
use crate::domain::teaser::{PushPolicy, TeaserLeg, TeaserResult, calculate_teaser};
use crate::error::{InputError, Result};

/// Inputs of a teaser evaluation.
#[derive(Debug, Clone, PartialEq)]
pub struct TeaserRequest {
  pub legs: Vec<TeaserLeg>,
  /// Falls back to the configured default when `None`.
  pub push_policy: Option<PushPolicy>,
  pub teaser_odds: Option<f64>,
  pub bankroll: Option<f64>,
}

/// Validates and prices teasers.
#[derive(Debug, Clone)]
pub struct TeaserEvaluator {
  min_legs: usize,
  max_legs: usize,
  default_push_policy: PushPolicy,
}

impl TeaserEvaluator {
  pub fn new(config: &TeaserConfig) -> Self {
    Self {
      min_legs: config.min_legs,
      max_legs: config.max_legs,
      default_push_policy: config.default_push_policy,
    }
  }

  pub fn default_push_policy(&self) -> PushPolicy {
    self.default_push_policy
  }

  /// Evaluate a teaser, rejecting incomplete input first.
  pub fn evaluate(&self, request: &TeaserRequest) -> Result<TeaserResult> {
    let teaser_odds = request
      .teaser_odds
      .filter(|o| o.is_finite() && *o != 0.0)
      .ok_or(InputError::MissingTeaserOdds)?;

    let count = request.legs.len();
    if count < self.min_legs || count > self.max_legs {
      return Err(InputError::LegCount {
        count,
        min: self.min_legs,
        max: self.max_legs,
      });
    }

    for (i, leg) in request.legs.iter().enumerate() {
      validate_leg(i + 1, leg)?;
    }

    let push_policy = request.push_policy.unwrap_or(self.default_push_policy);
    let result = calculate_teaser(&request.legs, push_policy, Some(teaser_odds), request.bankroll)
      .ok_or(InputError::NoResult("teaser EV"))?;

    debug!(
      legs = count,
      policy = %push_policy,
      combined_prob = result.combined_prob,
      "Teaser legs combined"
    );
    info!(
      teaser_odds,
      ev_percent = result.ev.ev_percent,
      kelly_percent = result.kelly.percent,
      wager = result.wager,
      "Teaser evaluated"
    );

    Ok(result)
  }
}

fn validate_leg(leg: usize, input: &TeaserLeg) -> Result<()> {
  if !input.line.is_finite() {
    return Err(InputError::InvalidLeg {
      leg,
      reason: "line is not a number".to_string(),
    });
  }
  if !input.offered_odds.is_finite() {
    return Err(InputError::InvalidLeg {
      leg,
      reason: "odds are not a number".to_string(),
    });
  }
  Ok(())
}
