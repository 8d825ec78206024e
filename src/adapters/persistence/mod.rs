//! Persistence Adapters - Bankroll Storage
//!
//! Implements the `BankrollStore` port with an atomic JSON file for
//! normal use and an in-memory store for ephemeral sessions and tests.

pub mod bankroll_file;
pub mod memory;

pub use bankroll_file::{BankrollSnapshot, FileBankrollStore};
pub use memory::InMemoryBankrollStore;
