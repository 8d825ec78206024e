//! Bankroll File Store - Atomic JSON Bankroll Persistence
//!
//! Saves the bankroll to a small JSON document using atomic writes
//! (write to tmp file, then rename), so the file is always either the
//! old or the new value. Saves are serialized through a write lock so
//! overlapping calls never share the tmp file. The amount is stored as a
//! decimal string to avoid float formatting drift between saves.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use rust_decimal::prelude::*;
use serde::{Deserialize, Serialize};
use tokio::fs;
use tokio::sync::Mutex;
use tracing::{debug, info, instrument};

use crate::ports::bankroll::BankrollStore;

/// On-disk bankroll document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BankrollSnapshot {
    pub bankroll: Decimal,
    pub updated_at: DateTime<Utc>,
}

/// JSON file implementation of [`BankrollStore`].
pub struct FileBankrollStore {
    /// Path to the bankroll document.
    path: PathBuf,
    /// Temporary path for atomic writes.
    tmp_path: PathBuf,
    /// Held for the whole tmp-write-then-rename sequence.
    write_lock: Mutex<()>,
}

impl FileBankrollStore {
    /// Create a store for `<data_dir>/<file_name>`.
    ///
    /// Creates the directory if it doesn't exist.
    pub async fn new(data_dir: &str, file_name: &str) -> Result<Self> {
        let dir = Path::new(data_dir);
        fs::create_dir_all(dir)
            .await
            .with_context(|| format!("Failed to create data directory {}", dir.display()))?;

        Ok(Self {
            path: dir.join(file_name),
            tmp_path: dir.join(format!("{file_name}.tmp")),
            write_lock: Mutex::new(()),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the full snapshot, `None` if no bankroll was ever saved.
    #[instrument(skip(self), fields(path = %self.path.display()))]
    pub async fn load_snapshot(&self) -> Result<Option<BankrollSnapshot>> {
        if !self.path.exists() {
            debug!("No bankroll file found");
            return Ok(None);
        }

        let json = fs::read_to_string(&self.path)
            .await
            .context("Failed to read bankroll file")?;

        let snapshot: BankrollSnapshot =
            serde_json::from_str(&json).context("Failed to parse bankroll JSON")?;

        Ok(Some(snapshot))
    }
}

#[async_trait]
impl BankrollStore for FileBankrollStore {
    async fn load(&self) -> Result<Option<f64>> {
        let Some(snapshot) = self.load_snapshot().await? else {
            return Ok(None);
        };

        let bankroll = snapshot
            .bankroll
            .to_f64()
            .context("Stored bankroll is out of range")?;

        debug!(bankroll, updated_at = %snapshot.updated_at, "Bankroll loaded");
        Ok(Some(bankroll))
    }

    #[instrument(skip(self), fields(path = %self.path.display()))]
    async fn save(&self, bankroll: f64) -> Result<()> {
        let amount = Decimal::from_f64(bankroll)
            .with_context(|| format!("Bankroll {bankroll} cannot be stored"))?
            .normalize();

        let snapshot = BankrollSnapshot {
            bankroll: amount,
            updated_at: Utc::now(),
        };
        let json =
            serde_json::to_string_pretty(&snapshot).context("Failed to serialize bankroll")?;

        let _guard = self.write_lock.lock().await;

        // Write to tmp file
        fs::write(&self.tmp_path, &json)
            .await
            .context("Failed to write tmp bankroll file")?;

        // Atomic rename
        fs::rename(&self.tmp_path, &self.path)
            .await
            .context("Failed to rename bankroll file")?;

        info!(bankroll = %amount, "Bankroll saved");
        Ok(())
    }

    /// A missing file is healthy (first run); an unreadable or corrupt one is not.
    async fn is_healthy(&self) -> bool {
        self.load_snapshot().await.is_ok()
    }
}
