//! Tests for infra_store

use std::sync::Arc;

use chrono::Utc;
use rust_decimal_macros::dec;

use core_kernel::{AdapterHealth, PortError, RecordStore, RemoveGuard};
use domain_time_expense::{EntryStatus, TimeEntry, TimeEntryPatch};
use infra_store::{InMemoryStore, Stores};
use test_utils::{ClaimNumbers, DateFixtures, TimeEntryBuilder};

fn entries_store() -> InMemoryStore<TimeEntry> {
    InMemoryStore::with_records(
        "time-entries",
        vec![
            TimeEntryBuilder::new().with_id("TIME-1").with_adjuster("ADJ-001").build(),
            TimeEntryBuilder::new()
                .with_id("TIME-2")
                .with_adjuster("ADJ-002")
                .with_claim(ClaimNumbers::AUTO_LIABILITY)
                .with_status(EntryStatus::Pending)
                .build(),
            TimeEntryBuilder::new()
                .with_id("TIME-3")
                .with_adjuster("ADJ-001")
                .with_status(EntryStatus::Billed)
                .build(),
        ],
    )
    .unwrap()
}

fn submit_mutator() -> core_kernel::BulkMutator<TimeEntry> {
    Box::new(|entry: &mut TimeEntry| entry.submit(Utc::now()))
}

// ============================================================================
// Read Tests
// ============================================================================

mod read_tests {
    use super::*;

    #[tokio::test]
    async fn test_snapshot_keeps_insertion_order() {
        let ids: Vec<String> = entries_store()
            .snapshot()
            .await
            .into_iter()
            .map(|e| e.id.to_string())
            .collect();
        assert_eq!(ids, vec!["TIME-1", "TIME-2", "TIME-3"]);
    }

    #[tokio::test]
    async fn test_indexed_lookups() {
        let store = entries_store();

        assert_eq!(store.by_claim(ClaimNumbers::WORKERS_COMP).await.len(), 2);
        assert_eq!(store.by_adjuster("ADJ-002").await.len(), 1);
        assert!(store.by_claim(ClaimNumbers::UNKNOWN).await.is_empty());
    }

    #[tokio::test]
    async fn test_get_unknown_is_not_found() {
        let err = entries_store().get("TIME-404").await.unwrap_err();
        assert!(err.is_not_found());
        assert!(err.to_string().contains("Time entry"));
    }
}

// ============================================================================
// Write Tests
// ============================================================================

mod write_tests {
    use super::*;

    #[tokio::test]
    async fn test_append_rejects_duplicate_id() {
        let store = entries_store();
        let err = store
            .append(TimeEntryBuilder::new().with_id("TIME-1").build())
            .await
            .unwrap_err();

        assert!(matches!(err, PortError::Conflict { .. }));
        assert_eq!(store.len().await, 3);
    }

    #[tokio::test]
    async fn test_patch_through_update_with() {
        let store = entries_store();
        let updated = store
            .update_with(
                "TIME-1",
                Box::new(|entry: &mut TimeEntry| {
                    entry.apply_patch(TimeEntryPatch {
                        duration: Some(dec!(2.5)),
                        ..Default::default()
                    });
                    Ok(())
                }),
            )
            .await
            .unwrap();

        assert_eq!(updated.duration, dec!(2.5));
        assert_eq!(store.get("TIME-1").await.unwrap().duration, dec!(2.5));
    }

    #[tokio::test]
    async fn test_remove_if_refuses_billed_entry() {
        let store = entries_store();
        let err = store
            .remove_if(
                "TIME-3",
                Box::new(|entry: &TimeEntry| {
                    entry
                        .ensure_deletable()
                        .map_err(|e| PortError::conflict(e.to_string()))
                }),
            )
            .await
            .unwrap_err();

        assert!(matches!(err, PortError::Conflict { .. }));
        assert!(store.get("TIME-3").await.is_ok());
    }

    #[tokio::test]
    async fn test_remove_if_removes_unsubmitted_entry() {
        let store = entries_store();
        let guard: RemoveGuard<TimeEntry> = Box::new(|entry: &TimeEntry| {
            entry
                .ensure_deletable()
                .map_err(|e| PortError::conflict(e.to_string()))
        });

        let removed = store.remove_if("TIME-1", guard).await.unwrap();

        assert_eq!(removed.id.as_str(), "TIME-1");
        assert!(store.get("TIME-1").await.unwrap_err().is_not_found());
        assert_eq!(store.by_adjuster("ADJ-001").await.len(), 1);
    }

    #[tokio::test]
    async fn test_update_many_skips_unknown_ids() {
        let store = entries_store();
        let ids = vec!["TIME-1".to_string(), "TIME-404".to_string(), "TIME-2".to_string()];

        let changed = store.update_many(&ids, submit_mutator()).await;

        assert_eq!(changed.len(), 2);
        assert!(changed.iter().all(|e| e.status == EntryStatus::Submitted));
        assert!(changed.iter().all(|e| e.submitted_date.is_some()));
    }

    #[tokio::test]
    async fn test_update_many_counts_only_transitions() {
        let store = entries_store();
        // TIME-3 is already billed
        let ids = vec!["TIME-1".to_string(), "TIME-3".to_string()];

        assert_eq!(store.update_many(&ids, submit_mutator()).await.len(), 1);
        assert_eq!(store.get("TIME-3").await.unwrap().status, EntryStatus::Billed);
    }
}

// ============================================================================
// Concurrency Tests
// ============================================================================

mod concurrency_tests {
    use super::*;

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn test_concurrent_submits_transition_each_entry_once() {
        let store = Arc::new(InMemoryStore::<TimeEntry>::new("time-entries"));
        let mut ids = Vec::new();
        for i in 0..50 {
            let id = format!("TIME-{}", i);
            store
                .append(TimeEntryBuilder::new().with_id(&id).build())
                .await
                .unwrap();
            ids.push(id);
        }

        let mut handles = Vec::new();
        for _ in 0..8 {
            let store = Arc::clone(&store);
            let ids = ids.clone();
            handles.push(tokio::spawn(async move {
                store.update_many(&ids, submit_mutator()).await.len()
            }));
        }

        let mut total = 0;
        for handle in handles {
            total += handle.await.unwrap();
        }

        assert_eq!(total, 50);
        let snapshot = store.snapshot().await;
        assert!(snapshot.iter().all(|e| e.status == EntryStatus::Submitted));
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn test_concurrent_appends_keep_every_record() {
        let store = Arc::new(InMemoryStore::<TimeEntry>::new("time-entries"));

        let handles: Vec<_> = (0..20)
            .map(|_| {
                let store = Arc::clone(&store);
                tokio::spawn(async move { store.append(TimeEntryBuilder::new().build()).await })
            })
            .collect();

        for handle in handles {
            handle.await.unwrap().unwrap();
        }

        assert_eq!(store.len().await, 20);
        assert_eq!(store.by_adjuster("ADJ-001").await.len(), 20);
    }
}

// ============================================================================
// Seeded Store Tests
// ============================================================================

mod seeded_tests {
    use super::*;

    #[tokio::test]
    async fn test_seeded_stores_are_healthy_and_populated() {
        let stores = Stores::seeded(DateFixtures::today()).unwrap();

        for health in stores.health().await {
            assert_eq!(health.status, AdapterHealth::Healthy, "{}", health.adapter_id);
        }
        assert_eq!(stores.claims.len().await, 3);
        assert!(stores.adjusters.get("ADJ-001").await.is_ok());
        assert_eq!(stores.time_entries.by_claim(ClaimNumbers::WORKERS_COMP).await.len(), 4);
    }

    #[tokio::test]
    async fn test_numbers_continue_after_seed() {
        let stores = Stores::seeded(DateFixtures::today()).unwrap();
        let seeded = stores.referrals.len().await;

        assert_eq!(stores.referral_numbers.next(), seeded + 1);
        assert_eq!(stores.referral_numbers.next(), seeded + 2);
    }

    #[tokio::test]
    async fn test_empty_stores() {
        let stores = Stores::empty();
        assert!(stores.time_entries.is_empty().await);
        assert_eq!(stores.invoice_numbers.next(), 1);
    }
}
