//! Bankroll Manager - Shared Bankroll Access
//!
//! Wraps a `BankrollStore` so store failures are logged and swallowed:
//! a broken store must never stop a calculation. Every calculator goes
//! through the same manager, so whichever saved last wins.

use std::sync::Arc;

use tracing::{debug, warn};

use crate::ports::bankroll::BankrollStore;

/// Non-fatal facade over the persisted bankroll.
#[derive(Clone)]
pub struct BankrollManager {
  store: Arc<dyn BankrollStore>,
}

impl BankrollManager {
  pub fn new(store: Arc<dyn BankrollStore>) -> Self {
    Self { store }
  }

  /// Stored bankroll, or `None` when absent, zero, or unreadable.
  pub async fn current(&self) -> Option<f64> {
    match self.store.load().await {
      Ok(Some(bankroll)) if bankroll != 0.0 && bankroll.is_finite() => Some(bankroll),
      Ok(_) => None,
      Err(e) => {
        warn!(error = %e, "Error getting bankroll");
        None
      }
    }
  }

  /// Persist a new bankroll. Non-finite values are ignored.
  pub async fn update(&self, bankroll: f64) {
    if !bankroll.is_finite() {
      debug!(bankroll, "Ignoring non-finite bankroll");
      return;
    }
    if let Err(e) = self.store.save(bankroll).await {
      warn!(error = %e, bankroll, "Error saving bankroll");
    }
  }

  /// Bankroll to size with: an explicit value is saved and used,
  /// otherwise the stored one is loaded.
  pub async fn resolve(&self, explicit: Option<f64>) -> Option<f64> {
    match explicit {
      Some(bankroll) => {
        self.update(bankroll).await;
        Some(bankroll)
      }
      None => self.current().await,
    }
  }

  pub async fn is_healthy(&self) -> bool {
    self.store.is_healthy().await
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::adapters::persistence::InMemoryBankrollStore;

  fn manager_with(bankroll: Option<f64>) -> BankrollManager {
    let store = bankroll.map_or_else(InMemoryBankrollStore::new, InMemoryBankrollStore::with_bankroll);
    BankrollManager::new(Arc::new(store))
  }

  #[tokio::test]
  async fn test_explicit_bankroll_is_saved() {
    let manager = manager_with(Some(500.0));
    assert_eq!(manager.resolve(Some(800.0)).await, Some(800.0));
    assert_eq!(manager.current().await, Some(800.0));
  }

  #[tokio::test]
  async fn test_stored_bankroll_used_when_not_given() {
    let manager = manager_with(Some(500.0));
    assert_eq!(manager.resolve(None).await, Some(500.0));
  }

  #[tokio::test]
  async fn test_stored_zero_reads_as_absent() {
    let manager = manager_with(Some(0.0));
    assert_eq!(manager.current().await, None);
  }

  #[tokio::test]
  async fn test_non_finite_update_ignored() {
    let manager = manager_with(Some(500.0));
    manager.update(f64::NAN).await;
    assert_eq!(manager.current().await, Some(500.0));
  }

  #[tokio::test]
  async fn test_surfaces_share_one_bankroll() {
    let manager = manager_with(None);
    let other_surface = manager.clone();
    manager.update(1000.0).await;
    other_surface.update(1200.0).await;
    assert_eq!(manager.current().await, Some(1200.0));
  }
}
