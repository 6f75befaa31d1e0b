#![cfg(feature = "snapshot")]

use std::sync::Arc;
use std::time::Duration;

use chrono::NaiveDate;
use rust_decimal_macros::dec;
use skonto::core::*;
use skonto::snapshot::*;

fn doc(id: &str) -> TransactionDoc {
    TransactionDoc {
        document_id: id.into(),
        file_name: format!("{id}.pdf"),
    }
}

#[tokio::test]
async fn subscriber_receives_publish() {
    let store = SnapshotStore::new(0u32);
    let mut sub = store.subscribe();

    store.publish(42);
    let snapshot = sub.changed().await.unwrap();
    assert_eq!(snapshot, Snapshot { version: 1, value: 42 });
}

#[tokio::test]
async fn latest_value_wins() {
    let store = SnapshotStore::new(0u32);
    let mut sub = store.subscribe();

    for i in 1..=5 {
        store.publish(i);
    }
    let snapshot = sub.changed().await.unwrap();
    assert_eq!(snapshot.version, 5);
    assert_eq!(snapshot.value, 5);
    assert!(!sub.has_changed());
}

#[tokio::test]
async fn dropped_store_ends_subscription() {
    let store = SnapshotStore::new(String::new());
    let mut sub = store.subscribe();
    drop(store);
    assert_eq!(sub.changed().await, None);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn concurrent_producers_keep_versions_monotonic() {
    let store = Arc::new(SnapshotStore::new(0u64));
    let mut sub = store.subscribe();

    let mut handles = Vec::new();
    for p in 0..4u64 {
        let store = Arc::clone(&store);
        handles.push(tokio::spawn(async move {
            for i in 0..25u64 {
                store.publish(p * 100 + i);
            }
        }));
    }

    let reader = tokio::spawn(async move {
        let mut last = 0;
        while let Ok(Some(snapshot)) =
            tokio::time::timeout(Duration::from_millis(200), sub.changed()).await
        {
            assert!(snapshot.version > last);
            last = snapshot.version;
            if last == 100 {
                break;
            }
        }
        last
    });

    for h in handles {
        h.await.unwrap();
    }
    assert_eq!(store.version(), 100);
    assert_eq!(reader.await.unwrap(), 100);
}

#[tokio::test]
async fn document_list_publishes_mutations() {
    let list = DocumentList::new(false);
    let mut sub = list.subscribe();

    list.add(doc("a"));
    let s = sub.changed().await.unwrap();
    assert_eq!(s.value.documents, vec![doc("a")]);

    list.set_always_attach(true);
    let s = sub.changed().await.unwrap();
    assert!(s.value.always_attach);

    list.add(doc("b"));
    assert!(list.remove("a"));
    let s = sub.changed().await.unwrap();
    assert_eq!(s.value.documents, vec![doc("b")]);
    assert_eq!(s.version, 4);

    list.clear();
    let s = sub.changed().await.unwrap();
    assert!(s.value.documents.is_empty());
    assert!(list.always_attach());
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn concurrent_removes_of_same_document() {
    let list = Arc::new(DocumentList::new(false));
    list.add(doc("a"));
    list.add(doc("b"));
    let mut sub = list.subscribe();

    let mut handles = Vec::new();
    for _ in 0..8 {
        let list = Arc::clone(&list);
        handles.push(tokio::spawn(async move { list.remove("a") }));
    }
    let mut removed = 0;
    for h in handles {
        if h.await.unwrap() {
            removed += 1;
        }
    }

    assert_eq!(removed, 1);
    let s = sub.latest();
    assert_eq!(s.version, 3);
    assert_eq!(s.value.documents, vec![doc("b")]);
}

#[test]
fn independent_lists_do_not_share_state() {
    let first = DocumentList::new(true);
    let second = DocumentList::default();
    first.add(doc("x"));
    assert_eq!(first.documents().len(), 1);
    assert!(second.documents().is_empty());
    assert!(!second.always_attach());
}

#[tokio::test]
async fn discount_state_snapshot() {
    let expiry = NaiveDate::from_ymd_opt(2024, 6, 30).unwrap();
    let initial = SkontoDiscount::new(
        MonetaryAmount::eur(dec!(100)).unwrap(),
        MonetaryAmount::eur(dec!(98)).unwrap(),
        expiry,
    )
    .unwrap();
    let store = SnapshotStore::new(initial.clone());
    let mut sub = store.subscribe();

    // user edits the full amount; the percentage is kept
    store.update(|d| {
        d.full_amount = MonetaryAmount::eur(dec!(250)).unwrap();
        d.discounted_amount =
            discounted_from_percentage(&d.full_amount, d.discount_percentage, 2).unwrap();
    });

    let s = sub.changed().await.unwrap();
    assert_eq!(s.value.discounted_amount.value(), dec!(245));
    assert_eq!(store.current().value.discount_percentage, initial.discount_percentage);
}
