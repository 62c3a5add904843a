//! Tests for tokio spawner utilities

use event_reminder::core::Spawn;
use event_reminder::runtime::tokio_spawner::TokioSpawner;

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn test_tokio_spawner_spawn() {
    let spawner = TokioSpawner::new(tokio::runtime::Handle::current());

    let (tx, rx) = tokio::sync::oneshot::channel();
    spawner.spawn(async move {
        tx.send(123).unwrap();
    });

    let result = rx.await.expect("oneshot result");
    assert_eq!(result, 123);
}

#[tokio::test]
async fn test_tokio_spawner_current() {
    let spawner = TokioSpawner::current();

    let (tx, rx) = tokio::sync::oneshot::channel();
    spawner.spawn(async move {
        tx.send("spawned").unwrap();
    });

    assert_eq!(rx.await.expect("oneshot result"), "spawned");
}

#[tokio::test(start_paused = true)]
async fn test_tokio_spawner_drain_waits_for_tasks() {
    let spawner = TokioSpawner::current();
    let done = std::sync::Arc::new(std::sync::atomic::AtomicBool::new(false));

    let flag = std::sync::Arc::clone(&done);
    spawner.clone().spawn(async move {
        tokio::time::sleep(std::time::Duration::from_millis(200)).await;
        flag.store(true, std::sync::atomic::Ordering::SeqCst);
    });
    assert_eq!(spawner.in_flight(), 1);

    spawner.drain().await;
    assert!(done.load(std::sync::atomic::Ordering::SeqCst));
    assert_eq!(spawner.in_flight(), 0);
}
