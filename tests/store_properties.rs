//! Record Store Property Tests
//!
//! Id assignment, copy isolation and lock discipline of `InMemoryStore`
//! under sequential and concurrent use.

use std::collections::HashSet;
use std::sync::{Arc, Barrier};
use std::thread;

use product_api::store::{InMemoryStore, ProductDraft, ProductStore, StoreError};

// =============================================================================
// Helper Functions
// =============================================================================

fn draft(n: i64) -> ProductDraft {
    ProductDraft::new(format!("product-{}", n), n as f64 * 1.5).with_stock(n)
}

// =============================================================================
// Id Assignment
// =============================================================================

/// Ids strictly increase across creates interleaved with deletes.
#[test]
fn test_ids_strictly_increase_with_deletes() {
    let store = InMemoryStore::new();
    let mut last = 0;

    for n in 0..50 {
        let created = store.create(draft(n)).unwrap();
        assert!(created.id > last, "id {} not above {}", created.id, last);
        last = created.id;

        if n % 3 == 0 {
            store.delete(created.id).unwrap();
        }
        if n % 5 == 0 {
            assert_eq!(store.delete(10_000), Err(StoreError::NotFound(10_000)));
        }
    }

    assert_eq!(last, 50);
}

/// Count equals creates minus successful deletes.
#[test]
fn test_list_matches_surviving_records() {
    let store = InMemoryStore::new();
    let mut alive = HashSet::new();

    for n in 0..20 {
        alive.insert(store.create(draft(n)).unwrap().id);
    }
    for id in [2, 4, 4, 8, 99] {
        if store.delete(id).is_ok() {
            alive.remove(&id);
        }
    }

    let listed: HashSet<_> = store.list().unwrap().into_iter().map(|p| p.id).collect();
    assert_eq!(listed, alive);
    assert_eq!(listed.len(), 20 - 3);
}

// =============================================================================
// Concurrency
// =============================================================================

/// Parallel creates never hand out the same id twice.
#[test]
fn test_concurrent_creates_get_unique_ids() {
    const THREADS: usize = 8;
    const PER_THREAD: i64 = 250;

    let store = Arc::new(InMemoryStore::new());
    let barrier = Arc::new(Barrier::new(THREADS));

    let handles: Vec<_> = (0..THREADS)
        .map(|_| {
            let store = Arc::clone(&store);
            let barrier = Arc::clone(&barrier);
            thread::spawn(move || {
                barrier.wait();
                (0..PER_THREAD)
                    .map(|n| store.create(draft(n)).unwrap().id)
                    .collect::<Vec<_>>()
            })
        })
        .collect();

    let mut ids = HashSet::new();
    for handle in handles {
        for id in handle.join().unwrap() {
            assert!(ids.insert(id), "duplicate id {}", id);
        }
    }

    let total = THREADS as i64 * PER_THREAD;
    assert_eq!(ids.len() as i64, total);
    assert_eq!(ids.iter().max().copied(), Some(total));
    assert_eq!(store.list().unwrap().len() as i64, total);
}

/// Readers only ever observe whole records written by a single update.
#[test]
fn test_readers_never_see_partial_updates() {
    let store = Arc::new(InMemoryStore::new());
    let id = store.create(draft(0)).unwrap().id;

    let writer = {
        let store = Arc::clone(&store);
        thread::spawn(move || {
            for n in 1..=500 {
                store.update(id, draft(n)).unwrap();
            }
        })
    };

    let readers: Vec<_> = (0..4)
        .map(|_| {
            let store = Arc::clone(&store);
            thread::spawn(move || {
                for _ in 0..500 {
                    let product = store.get(id).unwrap();
                    let n = product.stock;
                    assert_eq!(product.name, format!("product-{}", n));
                    assert_eq!(product.price, n as f64 * 1.5);
                }
            })
        })
        .collect();

    writer.join().unwrap();
    for reader in readers {
        reader.join().unwrap();
    }

    assert_eq!(store.get(id).unwrap().to_draft(), draft(500));
}

/// Concurrent deletes of one id: exactly one succeeds.
#[test]
fn test_concurrent_delete_succeeds_once() {
    let store = Arc::new(InMemoryStore::new());
    let id = store.create(draft(1)).unwrap().id;
    let barrier = Arc::new(Barrier::new(6));

    let handles: Vec<_> = (0..6)
        .map(|_| {
            let store = Arc::clone(&store);
            let barrier = Arc::clone(&barrier);
            thread::spawn(move || {
                barrier.wait();
                store.delete(id)
            })
        })
        .collect();

    let results: Vec<_> = handles.into_iter().map(|h| h.join().unwrap()).collect();
    assert_eq!(results.iter().filter(|r| r.is_ok()).count(), 1);
    assert!(results
        .iter()
        .filter_map(|r| r.as_ref().err())
        .all(|e| *e == StoreError::NotFound(id)));
}

// =============================================================================
// Copy Isolation
// =============================================================================

/// Values handed out by the store are detached from it.
#[test]
fn test_mutating_returned_values_leaves_store_intact() {
    let store = InMemoryStore::new();
    let mut created = store.create(draft(3)).unwrap();
    created.name.push_str("-changed");
    created.stock = 0;

    for mut product in store.list().unwrap() {
        product.price = -1.0;
    }

    let stored = store.get(created.id).unwrap();
    assert_eq!(stored.to_draft(), draft(3));
}
