//! End-to-end ad lifecycle tests.
//!
//! These drive [`AdManager`] with channel-fed vendor fakes, so loads,
//! shows, retries and rewards flow through the same surface tasks the
//! app runs.

use std::sync::Arc;
use std::time::Duration;

use spinel::ads::{AdEvent, AdManager};
use spinel::config::{AdsConfig, RetryConfig};
use spinel::testkit::{self, ChannelHandles, ChannelSdk};

fn manager() -> (AdManager, ChannelHandles) {
    let (sdk, handles) = ChannelSdk::new();
    let manager = AdManager::new(&sdk, &testkit::config::ads()).expect("manager construction");
    (manager, handles)
}

/// Give the surface tasks a beat to drain their event channels.
async fn settle() {
    tokio::time::sleep(Duration::from_millis(25)).await;
}

async fn wait_until(what: &str, mut check: impl FnMut() -> bool) {
    let deadline = tokio::time::Instant::now() + Duration::from_secs(2);
    while !check() {
        if tokio::time::Instant::now() > deadline {
            panic!("timed out waiting for {what}");
        }
        tokio::time::sleep(Duration::from_millis(5)).await;
    }
}

// ----- Loading and retry -----

#[tokio::test]
async fn test_startup_requests_a_load_per_surface() {
    let (manager, handles) = manager();

    wait_until("initial loads", || {
        handles.interstitial.load_requests() == 1
            && handles.rewarded.load_requests() == 1
            && handles.app_open.load_requests() == 1
    })
    .await;
    assert_eq!(handles.interstitial.show_requests(), 0);

    manager.shutdown().await;
}

#[tokio::test]
async fn test_failed_load_retries_after_backoff_not_before() {
    let (sdk, handles) = ChannelSdk::new();
    let retry = RetryConfig {
        initial_delay_ms: 150,
        max_delay_ms: 300,
        ..testkit::config::retry()
    };
    let config = AdsConfig {
        retry,
        ..testkit::config::ads()
    };
    let manager = AdManager::new(&sdk, &config).expect("manager construction");
    wait_until("initial load", || handles.interstitial.load_requests() == 1).await;

    handles
        .interstitial
        .emit(AdEvent::LoadFailed {
            reason: "no fill".into(),
        })
        .await;

    // Well inside the 150ms backoff window nothing has fired.
    tokio::time::sleep(Duration::from_millis(50)).await;
    assert_eq!(handles.interstitial.load_requests(), 1);

    wait_until("backoff retry", || handles.interstitial.load_requests() == 2).await;

    manager.shutdown().await;
}

#[tokio::test]
async fn test_closing_a_shown_ad_reloads_the_slot() {
    let (manager, handles) = manager();
    handles.interstitial.emit(AdEvent::Loaded).await;
    settle().await;

    assert!(manager.show_interstitial().await);
    handles.interstitial.emit(AdEvent::Opened).await;
    handles.interstitial.emit(AdEvent::Closed).await;

    wait_until("reload after close", || {
        handles.interstitial.load_requests() == 2
    })
    .await;
    settle().await;

    // Exactly one reload and the original show, nothing extra.
    assert_eq!(handles.interstitial.load_requests(), 2);
    assert_eq!(handles.interstitial.show_requests(), 1);

    manager.shutdown().await;
}

// ----- Frequency gate -----

#[tokio::test]
async fn test_gate_reopens_after_the_interval() {
    let (manager, handles) = manager();
    handles.interstitial.emit(AdEvent::Loaded).await;
    settle().await;

    assert!(manager.show_interstitial().await);
    // Immediately after a show the gate refuses without consulting the
    // surface.
    assert!(!manager.show_interstitial().await);
    assert_eq!(handles.interstitial.show_requests(), 1);

    // Restock the slot, then outlast the 50ms test interval.
    handles.interstitial.emit(AdEvent::Closed).await;
    handles.interstitial.emit(AdEvent::Loaded).await;
    settle().await;
    tokio::time::sleep(Duration::from_millis(60)).await;

    assert!(manager.show_interstitial().await);
    assert_eq!(handles.interstitial.show_requests(), 2);

    manager.shutdown().await;
}

// ----- Rewarded -----

#[tokio::test]
async fn test_rewarded_show_reports_earned_reward() {
    let (sdk, handles) = ChannelSdk::new();
    let manager =
        Arc::new(AdManager::new(&sdk, &testkit::config::ads()).expect("manager construction"));
    handles.rewarded.emit(AdEvent::Loaded).await;
    settle().await;

    let waiter = {
        let manager = manager.clone();
        tokio::spawn(async move { manager.show_rewarded().await })
    };
    wait_until("rewarded dispatch", || handles.rewarded.show_requests() == 1).await;

    handles
        .rewarded
        .emit(AdEvent::EarnedReward {
            amount: 10,
            label: "coins".into(),
        })
        .await;
    handles.rewarded.emit(AdEvent::Closed).await;

    assert!(waiter.await.expect("show task panicked"));
    manager.shutdown().await;
}

#[tokio::test]
async fn test_rewarded_show_without_earn_comes_back_false() {
    let (sdk, handles) = ChannelSdk::new();
    let manager =
        Arc::new(AdManager::new(&sdk, &testkit::config::ads()).expect("manager construction"));
    handles.rewarded.emit(AdEvent::Loaded).await;
    settle().await;

    let waiter = {
        let manager = manager.clone();
        tokio::spawn(async move { manager.show_rewarded().await })
    };
    wait_until("rewarded dispatch", || handles.rewarded.show_requests() == 1).await;

    handles.rewarded.emit(AdEvent::Closed).await;

    assert!(!waiter.await.expect("show task panicked"));
    manager.shutdown().await;
}

#[tokio::test]
async fn test_rewarded_without_inventory_is_skipped() {
    let (manager, handles) = manager();
    wait_until("initial load", || handles.rewarded.load_requests() == 1).await;

    assert!(!manager.show_rewarded().await);
    assert_eq!(handles.rewarded.show_requests(), 0);

    manager.shutdown().await;
}

#[tokio::test]
async fn test_shutdown_resolves_pending_reward_unearned() {
    let (sdk, handles) = ChannelSdk::new();
    let manager =
        Arc::new(AdManager::new(&sdk, &testkit::config::ads()).expect("manager construction"));
    handles.rewarded.emit(AdEvent::Loaded).await;
    settle().await;

    let waiter = {
        let manager = manager.clone();
        tokio::spawn(async move { manager.show_rewarded().await })
    };
    wait_until("rewarded dispatch", || handles.rewarded.show_requests() == 1).await;

    manager.shutdown().await;

    assert!(!waiter.await.expect("show task panicked"));
}

// ----- Degraded vendor -----

#[tokio::test]
async fn test_vendor_death_degrades_to_no_ads() {
    let (manager, handles) = manager();
    handles.interstitial.end_stream().await;
    settle().await;

    // The surface is gone; attempts are refused rather than erroring.
    assert!(!manager.show_interstitial().await);

    manager.shutdown().await;
}
