//! Use Cases Layer - Application Workflows
//!
//! Validates user input and orchestrates the domain calculations and the
//! bankroll port. Each use case is a self-contained operation.
//!
//! Use cases:
//! - `BankrollManager`: non-fatal access to the shared bankroll
//! - `analyze_wager`: EV and stake for one price against a sharp line
//! - `TeaserEvaluator`: validated Wong teaser pricing

pub mod bankroll_manager;
pub mod teaser_evaluator;
pub mod wager_analyzer;

pub use bankroll_manager::BankrollManager;
pub use teaser_evaluator::{TeaserEvaluator, TeaserRequest};
pub use wager_analyzer::{WagerRecommendation, WagerRequest, analyze_wager, implied_probabilities};
