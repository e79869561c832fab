//! Tests for the tokio timer facility

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

use debounced_autoscroll::core::{AutoScrollError, TimerFacility};
use debounced_autoscroll::runtime::TokioTimer;

#[tokio::test(start_paused = true)]
async fn test_tokio_timer_fires_after_delay() {
    let timer = TokioTimer::current().expect("inside runtime");

    let (tx, rx) = tokio::sync::oneshot::channel();
    let start = tokio::time::Instant::now();
    let _handle = timer.schedule(
        Duration::from_millis(200),
        Box::new(move || {
            tx.send(tokio::time::Instant::now()).expect("receiver alive");
        }),
    );

    let fired_at = rx.await.expect("timer fired");
    assert!(fired_at - start >= Duration::from_millis(200));
}

#[tokio::test(start_paused = true)]
async fn test_tokio_timer_cancel() {
    let timer = TokioTimer::current().expect("inside runtime");
    let count = Arc::new(AtomicUsize::new(0));

    let c = Arc::clone(&count);
    let handle = timer.schedule(
        Duration::from_millis(100),
        Box::new(move || {
            c.fetch_add(1, Ordering::SeqCst);
        }),
    );
    timer.cancel(handle);

    tokio::time::sleep(Duration::from_secs(1)).await;
    assert_eq!(count.load(Ordering::SeqCst), 0);
}

#[test]
fn test_tokio_timer_outside_runtime() {
    assert!(matches!(TokioTimer::current(), Err(AutoScrollError::Timer(_))));
}
