//! In-memory bankroll store for ephemeral sessions.

use anyhow::Result;
use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::ports::bankroll::BankrollStore;

/// Keeps the bankroll for the lifetime of the process only.
#[derive(Debug, Default)]
pub struct InMemoryBankrollStore {
    bankroll: RwLock<Option<f64>>,
}

impl InMemoryBankrollStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_bankroll(bankroll: f64) -> Self {
        Self {
            bankroll: RwLock::new(Some(bankroll)),
        }
    }
}

#[async_trait]
impl BankrollStore for InMemoryBankrollStore {
    async fn load(&self) -> Result<Option<f64>> {
        Ok(*self.bankroll.read().await)
    }

    async fn save(&self, bankroll: f64) -> Result<()> {
        *self.bankroll.write().await = Some(bankroll);
        Ok(())
    }

    async fn is_healthy(&self) -> bool {
        true
    }
}
