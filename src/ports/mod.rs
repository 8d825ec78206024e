//! Ports Layer - Hexagonal Architecture Boundaries
//!
//! Defines the interfaces (traits) that the usecases layer requires
//! from the outside world. Adapters implement these traits.
//!
//! Port categories:
//! - `BankrollStore`: persisted bankroll shared by every calculator

pub mod bankroll;

pub use bankroll::BankrollStore;
