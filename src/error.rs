//! Input validation errors raised by the collaborator layer.
//!
//! The domain core never fails; it returns soft no-results. These errors
//! are produced before the core is invoked and are phrased for the user.

use thiserror::Error;

/// Result type alias for workflows that validate user input.
pub type Result<T> = std::result::Result<T, InputError>;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum InputError {
    /// Sharp favorite, sharp underdog or offered price missing.
    #[error("please enter all required lines (sharp favorite, sharp underdog, offered price)")]
    MissingLines,

    #[error("please enter the teaser odds")]
    MissingTeaserOdds,

    #[error("a teaser needs between {min} and {max} legs, got {count}")]
    LegCount { count: usize, min: usize, max: usize },

    /// `leg` is 1-based, matching how legs are presented.
    #[error("please fill in all fields for leg {leg}: {reason}")]
    InvalidLeg { leg: usize, reason: String },

    #[error("unknown bet side '{0}' (expected favorite or underdog)")]
    UnknownSide(String),

    #[error("unknown push policy '{0}' (expected loss, void or push)")]
    UnknownPushPolicy(String),

    #[error("unknown leg location '{0}' (expected home or away)")]
    UnknownLocation(String),

    #[error("invalid leg '{0}' (expected LOCATION:LINE:ODDS, e.g. home:-2.5:-110)")]
    InvalidLegSpec(String),

    /// The core returned no result for inputs that passed validation.
    #[error("unable to calculate {0}")]
    NoResult(&'static str),
}
