//! Repository tests for the signal ledger: append-only semantics, the
//! reverse-direction match probe, and received-history ordering.

use heartsignal_db::models::signal::SIGNAL_STATUS_SENT;
use heartsignal_db::repositories::SignalRepo;
use sqlx::PgPool;

// ---------------------------------------------------------------------------
// Test: recording a signal assigns an ID, status, and timestamp
// ---------------------------------------------------------------------------

#[sqlx::test]
async fn record_assigns_id_and_status(pool: PgPool) {
    let id = SignalRepo::record(&pool, "alice", "bob").await.unwrap();
    assert!(id > 0);

    let received = SignalRepo::list_received(&pool, "bob").await.unwrap();
    assert_eq!(received.len(), 1);
    assert_eq!(received[0].id, id);
    assert_eq!(received[0].from_user_id, "alice");
    assert_eq!(received[0].to_user_id, "bob");
    assert_eq!(received[0].status, SIGNAL_STATUS_SENT);
}

// ---------------------------------------------------------------------------
// Test: the reverse probe is false before, true after, the opposite send
// ---------------------------------------------------------------------------

#[sqlx::test]
async fn reverse_exists_tracks_opposite_direction(pool: PgPool) {
    SignalRepo::record(&pool, "alice", "bob").await.unwrap();

    // Alice -> Bob alone is not mutual, in either direction's view.
    assert!(!SignalRepo::reverse_exists(&pool, "alice", "bob")
        .await
        .unwrap());

    // Bob's send sees Alice's earlier signal.
    assert!(SignalRepo::reverse_exists(&pool, "bob", "alice")
        .await
        .unwrap());
}

// ---------------------------------------------------------------------------
// Test: a signal never satisfies its own probe
// ---------------------------------------------------------------------------

#[sqlx::test]
async fn own_signal_does_not_match_itself(pool: PgPool) {
    SignalRepo::record(&pool, "alice", "bob").await.unwrap();

    // The probe checks the opposite direction only.
    assert!(!SignalRepo::reverse_exists(&pool, "alice", "bob")
        .await
        .unwrap());
}

// ---------------------------------------------------------------------------
// Test: duplicate sends are independent rows, returned newest first
// ---------------------------------------------------------------------------

#[sqlx::test]
async fn duplicate_signals_are_kept_and_ordered(pool: PgPool) {
    let first = SignalRepo::record(&pool, "alice", "bob").await.unwrap();
    let second = SignalRepo::record(&pool, "alice", "bob").await.unwrap();
    assert_ne!(first, second);

    let received = SignalRepo::list_received(&pool, "bob").await.unwrap();
    assert_eq!(received.len(), 2);
    // Newest first; id breaks any timestamp tie.
    assert_eq!(received[0].id, second);
    assert_eq!(received[1].id, first);
    assert!(received[0].created_at >= received[1].created_at);
}

// ---------------------------------------------------------------------------
// Test: received history is scoped to the recipient
// ---------------------------------------------------------------------------

#[sqlx::test]
async fn list_received_filters_by_recipient(pool: PgPool) {
    SignalRepo::record(&pool, "alice", "bob").await.unwrap();
    SignalRepo::record(&pool, "carol", "bob").await.unwrap();
    SignalRepo::record(&pool, "bob", "alice").await.unwrap();

    let bobs = SignalRepo::list_received(&pool, "bob").await.unwrap();
    assert_eq!(bobs.len(), 2);
    assert!(bobs.iter().all(|s| s.to_user_id == "bob"));

    let nobody = SignalRepo::list_received(&pool, "nobody").await.unwrap();
    assert!(nobody.is_empty());
}
