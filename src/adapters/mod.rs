//! Adapters Layer - Hexagonal Architecture Outer Ring
//!
//! Implements the port traits defined in `crate::ports` with concrete
//! infrastructure.
//!
//! Adapter categories:
//! - `persistence`: bankroll file store and in-memory store

pub mod persistence;
