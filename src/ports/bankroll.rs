//! Bankroll Port - Shared Bankroll Persistence Interface
//!
//! The bankroll is the only process-wide mutable value in the application.
//! Both calculators read it on entry and write it on change; the last
//! write wins. The domain layer never touches it.

use async_trait::async_trait;

/// Get/set capability for the persisted bankroll.
///
/// Accepts and returns `f64` so usecases never deal with the stored
/// representation. Errors are expected to be logged by the caller and
/// never to abort a calculation.
#[async_trait]
pub trait BankrollStore: Send + Sync + 'static {
  /// Load the stored bankroll, `None` if nothing has been saved yet.
  async fn load(&self) -> anyhow::Result<Option<f64>>;

  /// Replace the stored bankroll.
  async fn save(&self, bankroll: f64) -> anyhow::Result<()>;

  /// Check whether the backing store is usable.
  async fn is_healthy(&self) -> bool;
}
