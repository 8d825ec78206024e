//! Domain layer - Odds and wager economics.
//!
//! Pure functions only: no I/O, no logging, no shared state. Every call is
//! independent and idempotent, so the layer needs no synchronization when
//! embedded in a concurrent host.
//!
//! Layers, each depending only on the ones above it:
//! - `odds`: American / decimal / implied-probability conversion
//! - `ev`: single-wager expected value
//! - `kelly` and `sizing`: stake sizing and sportsbook rounding
//! - `teaser`: multi-leg teaser aggregation

pub mod ev;
pub mod kelly;
pub mod odds;
pub mod sizing;
pub mod teaser;

// Re-export core types for convenience
pub use ev::{EvResult, calculate_ev};
pub use kelly::{KellyResult, calculate_kelly};
pub use odds::{
    BetSide, OddsQuote, SharpMarket, american_to_decimal, american_to_implied_prob,
    decimal_to_american, implied_prob_to_american,
};
pub use sizing::{round_bet_size, round_win_amount};
pub use teaser::{LegLocation, PushPolicy, TeaserLeg, TeaserResult, calculate_teaser};
