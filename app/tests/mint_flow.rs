//! Integration tests exercising the full membership flow:
//! wallet connect → mint → reload → filter/status, wired the way the
//! application composes them, against nullable collaborators.

use std::sync::Arc;
use std::time::Duration;

use veil_app::{AppError, MembershipTab, MintOrchestrator, StatusSlot, TxStatus};
use veil_fhe::SimulatedFhe;
use veil_nullables::{NullLedger, NullWallet};
use veil_registry::{RegistryError, RegistryStore, INDEX_KEY};
use veil_types::{AccountAddress, MembershipId, Tier};

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn orchestrator_over(ledger: Arc<NullLedger>) -> Arc<MintOrchestrator> {
    let fhe = Arc::new(SimulatedFhe::new());
    let registry = Arc::new(RegistryStore::new(ledger, fhe.clone(), fhe));
    Arc::new(MintOrchestrator::new(registry, StatusSlot::new()))
}

fn benefits() -> Vec<String> {
    veil_app::DEFAULT_BENEFITS
        .iter()
        .map(|b| b.to_string())
        .collect()
}

// ---------------------------------------------------------------------------
// 0. Wiring
// ---------------------------------------------------------------------------

#[test]
fn build_orchestrator_from_default_config() {
    let config = veil_app::AppConfig::default();
    let orch = veil_app::build_orchestrator(&config).unwrap();
    assert_eq!(orch.status(), TxStatus::Idle);
}

// ---------------------------------------------------------------------------
// 1. Connect and refresh
// ---------------------------------------------------------------------------

#[tokio::test]
async fn connect_then_refresh_empty_ledger() {
    let ledger = Arc::new(NullLedger::new());
    let orch = orchestrator_over(ledger);
    let wallet = NullWallet::new("0xAA");

    let account = orch.connect(&wallet).await.unwrap();
    assert_eq!(account.as_str(), "0xAA");

    orch.refresh().await.unwrap();
    orch.with_state(|s| {
        assert_eq!(s.account().unwrap().as_str(), "0xAA");
        assert!(s.memberships().is_empty());
    });
}

// ---------------------------------------------------------------------------
// 2. Mint flow
// ---------------------------------------------------------------------------

#[tokio::test(start_paused = true)]
async fn mint_updates_collection_and_status() {
    let ledger = Arc::new(NullLedger::new());
    let orch = orchestrator_over(ledger.clone());
    let wallet = NullWallet::new("0xOwner");
    orch.connect(&wallet).await.unwrap();

    let minted = orch.mint(Tier::Premium, benefits()).await.unwrap();
    assert_eq!(minted.encrypted_level, "FHE-L2");
    assert_eq!(minted.owner.as_str(), "0xOwner");

    orch.with_state(|s| {
        assert_eq!(s.memberships().len(), 1);
        assert_eq!(s.memberships()[0].id, minted.id);
        assert_eq!(s.stats().level2, 1);
    });
    assert_eq!(
        orch.status(),
        TxStatus::Success("Membership minted".to_string())
    );

    // The success notice dismisses itself.
    tokio::time::sleep(Duration::from_millis(2_100)).await;
    assert_eq!(orch.status(), TxStatus::Idle);
}

#[tokio::test]
async fn mint_requires_connected_account() {
    let orch = orchestrator_over(Arc::new(NullLedger::new()));
    let result = orch.mint(Tier::Basic, benefits()).await;
    assert!(matches!(result, Err(AppError::NotConnected)));
    // No transaction was started.
    assert_eq!(orch.status(), TxStatus::Idle);
}

#[tokio::test]
async fn rejected_mint_surfaces_as_error_status() {
    let ledger = Arc::new(NullLedger::new());
    let orch = orchestrator_over(ledger.clone());
    let wallet = NullWallet::new("0xOwner");
    orch.connect(&wallet).await.unwrap();

    ledger.fail_next_write(veil_ledger::LedgerError::UserRejected);
    let result = orch.mint(Tier::Basic, benefits()).await;
    assert!(result.is_err());
    assert_eq!(
        orch.status(),
        TxStatus::Error("Transaction rejected by user".to_string())
    );
    orch.with_state(|s| assert!(s.memberships().is_empty()));
}

#[tokio::test]
async fn interleaved_mints_keep_both_ids() {
    let ledger = Arc::new(NullLedger::new());
    let orch = orchestrator_over(ledger.clone());
    let wallet = NullWallet::new("0xOwner");
    orch.connect(&wallet).await.unwrap();

    let (a, b) = tokio::join!(
        orch.mint(Tier::Basic, benefits()),
        orch.mint(Tier::Vip, benefits()),
    );
    let a = a.unwrap();
    let b = b.unwrap();
    assert_ne!(a.id, b.id);

    orch.refresh().await.unwrap();
    orch.with_state(|s| {
        assert_eq!(s.memberships().len(), 2);
    });
    assert!(ledger.get(INDEX_KEY).is_some());
}

// ---------------------------------------------------------------------------
// 3. Verify flow
// ---------------------------------------------------------------------------

#[tokio::test(start_paused = true)]
async fn verify_minted_membership_succeeds() {
    let ledger = Arc::new(NullLedger::new());
    let orch = orchestrator_over(ledger);
    let wallet = NullWallet::new("0xOwner");
    orch.connect(&wallet).await.unwrap();

    let minted = orch.mint(Tier::Vip, benefits()).await.unwrap();
    let valid = orch.verify(&minted.id).await.unwrap();
    assert!(valid);
    assert_eq!(orch.status(), TxStatus::Success("Proof verified".to_string()));
}

#[tokio::test(start_paused = true)]
async fn verify_unknown_membership_fails() {
    let orch = orchestrator_over(Arc::new(NullLedger::new()));
    let result = orch.verify(&MembershipId::new("MEM-missing")).await;
    assert!(result.is_err());
    assert!(matches!(orch.status(), TxStatus::Error(_)));
}

// ---------------------------------------------------------------------------
// 4. Unavailability preserves the cache
// ---------------------------------------------------------------------------

#[tokio::test]
async fn failed_refresh_keeps_previous_collection() {
    let ledger = Arc::new(NullLedger::new());
    let orch = orchestrator_over(ledger.clone());
    let wallet = NullWallet::new("0xOwner");
    orch.connect(&wallet).await.unwrap();
    orch.mint(Tier::Basic, benefits()).await.unwrap();

    ledger.set_available(false);
    let result = orch.refresh().await;
    assert!(matches!(
        result,
        Err(AppError::Registry(RegistryError::Unavailable))
    ));
    orch.with_state(|s| assert_eq!(s.memberships().len(), 1));
}

// ---------------------------------------------------------------------------
// 5. Account-change subscription
// ---------------------------------------------------------------------------

#[tokio::test(start_paused = true)]
async fn account_change_reloads_but_never_mints() {
    let ledger = Arc::new(NullLedger::new());
    let orch = orchestrator_over(ledger.clone());
    let wallet = NullWallet::new("0xAA");

    orch.connect(&wallet).await.unwrap();
    orch.mint(Tier::Basic, benefits()).await.unwrap();
    let stored_keys = ledger.len();

    let watcher = orch.clone().spawn_account_watcher(&wallet);

    wallet.emit_account(Some(AccountAddress::new("0xBB")));
    tokio::time::sleep(Duration::from_millis(50)).await;

    orch.with_state(|s| {
        assert_eq!(s.account().unwrap().as_str(), "0xBB");
        assert_eq!(s.memberships().len(), 1);
    });
    // A reload writes nothing: no new membership appeared.
    assert_eq!(ledger.len(), stored_keys);

    wallet.emit_account(None);
    tokio::time::sleep(Duration::from_millis(50)).await;
    orch.with_state(|s| {
        assert!(s.account().is_none());
        // Disconnecting keeps the loaded collection visible.
        assert_eq!(s.memberships().len(), 1);
    });

    watcher.abort();
}

// ---------------------------------------------------------------------------
// 6. Visible subset
// ---------------------------------------------------------------------------

#[tokio::test]
async fn search_and_tab_drive_visible_subset() {
    let ledger = Arc::new(NullLedger::new());
    let orch = orchestrator_over(ledger);
    let wallet = NullWallet::new("0xOwner");
    orch.connect(&wallet).await.unwrap();

    orch.mint(Tier::Basic, benefits()).await.unwrap();
    let vip = orch.mint(Tier::Vip, benefits()).await.unwrap();

    orch.with_state(|s| {
        s.set_tab(MembershipTab::Level3);
        let visible = s.visible();
        assert_eq!(visible.len(), 1);
        assert_eq!(visible[0].id, vip.id);

        s.set_tab(MembershipTab::All);
        s.set_search("no-such-member");
        assert!(s.visible().is_empty());
    });
}
