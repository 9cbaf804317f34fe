use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{mpsc, Arc, Mutex};
use std::time::Duration;

use sourced_cart::{CartSnapshot, CartStore, Product};

use crate::support::pen;

#[test]
fn listeners_receive_snapshot_after_add() {
    let mut store = CartStore::new();
    let (tx, rx) = mpsc::channel::<CartSnapshot>();
    let tx = Mutex::new(tx);
    store.on_change(move |snapshot| {
        let _ = tx.lock().unwrap().send(snapshot);
    });

    store.add_to_cart(&pen()).unwrap();

    let snapshot = rx.recv_timeout(Duration::from_secs(2)).unwrap();
    assert_eq!(snapshot.version, 1);
    assert_eq!(snapshot.item_count, 1);
    assert_eq!(snapshot.subtotal, 1.5);
    assert_eq!(snapshot.lines[0].name, "Pen");
}

#[test]
fn rejected_add_does_not_notify() {
    let mut store = CartStore::new();
    let calls = Arc::new(Mutex::new(0usize));
    let counter = Arc::clone(&calls);
    store.on_change(move |_| {
        *counter.lock().unwrap() += 1;
    });

    let _ = store.add_to_cart(&Product::new("", "Ghost", 1.0));
    std::thread::sleep(Duration::from_millis(50));
    assert_eq!(*calls.lock().unwrap(), 0);
}

#[test]
fn every_add_notifies_once() {
    let mut store = CartStore::new();
    let (tx, rx) = mpsc::channel::<u64>();
    let tx = Mutex::new(tx);
    store.on_change(move |snapshot| {
        let _ = tx.lock().unwrap().send(snapshot.version);
    });

    store.add_to_cart(&pen()).unwrap();
    store.add_to_cart(&pen()).unwrap();
    store.add_to_cart(&pen()).unwrap();

    let mut versions: Vec<u64> = (0..3)
        .map(|_| rx.recv_timeout(Duration::from_secs(2)).unwrap())
        .collect();
    // emitter threads may deliver out of order
    versions.sort_unstable();
    assert_eq!(versions, vec![1, 2, 3]);
}

#[test]
fn keeping_highest_version_ends_on_latest_snapshot() {
    let mut store = CartStore::new();
    let latest = Arc::new(AtomicU64::new(0));
    let seen = Arc::clone(&latest);
    let (tx, rx) = mpsc::channel::<()>();
    let tx = Mutex::new(tx);
    store.on_change(move |snapshot| {
        // stale snapshots lose to the highest version already seen
        seen.fetch_max(snapshot.version, Ordering::SeqCst);
        let _ = tx.lock().unwrap().send(());
    });

    for _ in 0..5 {
        store.add_to_cart(&pen()).unwrap();
    }
    for _ in 0..5 {
        rx.recv_timeout(Duration::from_secs(2)).unwrap();
    }

    assert_eq!(latest.load(Ordering::SeqCst), store.state().version());
    assert_eq!(store.state().version(), 5);
}
