//! Integration Tests - Workflows Against the Bankroll Port
//!
//! Tests the interaction between usecases, the bankroll port and both
//! real and mocked adapters. Uses mockall for trait mocking and
//! tokio::test for async tests.

use std::sync::Arc;

use mockall::mock;
use mockall::predicate::*;

use sharpline_ev::adapters::persistence::FileBankrollStore;
use sharpline_ev::config::TeaserConfig;
use sharpline_ev::domain::odds::BetSide;
use sharpline_ev::domain::teaser::{LegLocation, PushPolicy, TeaserLeg};
use sharpline_ev::ports::BankrollStore;
use sharpline_ev::usecases::{
    BankrollManager, TeaserEvaluator, TeaserRequest, WagerRequest, analyze_wager,
};

// ---- Mock Definitions ----

mock! {
    pub Store {}

    #[async_trait::async_trait]
    impl BankrollStore for Store {
        async fn load(&self) -> anyhow::Result<Option<f64>>;
        async fn save(&self, bankroll: f64) -> anyhow::Result<()>;
        async fn is_healthy(&self) -> bool;
    }
}

fn manager(store: MockStore) -> BankrollManager {
    BankrollManager::new(Arc::new(store))
}

// ---- Bankroll Port Tests ----

#[tokio::test]
async fn test_load_error_is_not_fatal() {
    let mut store = MockStore::new();
    store
        .expect_load()
        .times(1)
        .returning(|| Err(anyhow::anyhow!("disk unavailable")));

    let bankroll = manager(store).resolve(None).await;
    assert_eq!(bankroll, None);
}

#[tokio::test]
async fn test_save_error_still_uses_explicit_bankroll() {
    let mut store = MockStore::new();
    store
        .expect_save()
        .with(eq(2500.0))
        .times(1)
        .returning(|_| Err(anyhow::anyhow!("read-only filesystem")));

    let bankroll = manager(store).resolve(Some(2500.0)).await;
    assert_eq!(bankroll, Some(2500.0));
}

#[tokio::test]
async fn test_explicit_bankroll_skips_load() {
    let mut store = MockStore::new();
    store.expect_load().never();
    store.expect_save().times(1).returning(|_| Ok(()));

    assert_eq!(manager(store).resolve(Some(900.0)).await, Some(900.0));
}

#[tokio::test]
async fn test_nan_bankroll_never_reaches_store() {
    let mut store = MockStore::new();
    store.expect_save().never();

    manager(store).update(f64::NAN).await;
}

// ---- Workflow Tests ----

#[tokio::test]
async fn test_wager_with_stored_bankroll() {
    let mut store = MockStore::new();
    store.expect_load().returning(|| Ok(Some(10_000.0)));

    let bankroll = manager(store).resolve(None).await;
    let rec = analyze_wager(&WagerRequest {
        sharp_favorite: Some(-150.0),
        sharp_underdog: Some(130.0),
        offered_odds: Some(-130.0),
        side: BetSide::Favorite,
        bankroll,
    })
    .unwrap();

    // half-Kelly 4% of 10_000 = 400 -> win 307.69 -> $300 -> stake 390
    assert!((rec.kelly.percent - 4.0).abs() < 1e-9);
    assert_eq!(rec.wager, 390.0);
    assert_eq!(rec.potential_win, 300.0);
}

#[tokio::test]
async fn test_teaser_and_wager_share_bankroll_file() {
    let dir = tempfile::tempdir().unwrap();
    let store = FileBankrollStore::new(dir.path().to_str().unwrap(), "bankroll.json")
        .await
        .unwrap();
    let manager = BankrollManager::new(Arc::new(store));

    // the EV surface saves a bankroll...
    manager.update(10_000.0).await;

    // ...and the teaser surface picks it up
    let evaluator = TeaserEvaluator::new(&TeaserConfig::default());
    let result = evaluator
        .evaluate(&TeaserRequest {
            legs: vec![
                TeaserLeg::new(LegLocation::Home, -2.0, -300.0),
                TeaserLeg::new(LegLocation::Away, 8.0, -300.0),
            ],
            push_policy: Some(PushPolicy::LossOnPush),
            teaser_odds: Some(100.0),
            bankroll: manager.resolve(None).await,
        })
        .unwrap();

    assert_eq!(result.wager, 650.0);

    // a fresh store over the same directory sees the saved value
    let reopened = FileBankrollStore::new(dir.path().to_str().unwrap(), "bankroll.json")
        .await
        .unwrap();
    assert_eq!(reopened.load().await.unwrap(), Some(10_000.0));
}
