//! Integration tests for the status poller.

mod common;

use async_trait::async_trait;
use common::{endpoint_for, mock_status_server, searching_worker_json, status_json};
use spmon::poller::{PollConfig, StatusPoller};
use spmon::status::{StatusClient, StatusSnapshot, StatusSource};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;
use tokio::time::{sleep, timeout};
use tokio_util::sync::CancellationToken;
use wiremock::matchers::method;
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Source whose fetches take longer than the poll interval.
struct SlowSource {
    delay: Duration,
    in_flight: AtomicUsize,
    max_in_flight: AtomicUsize,
    calls: AtomicUsize,
}

impl SlowSource {
    fn new(delay: Duration) -> Self {
        Self {
            delay,
            in_flight: AtomicUsize::new(0),
            max_in_flight: AtomicUsize::new(0),
            calls: AtomicUsize::new(0),
        }
    }
}

#[async_trait]
impl StatusSource for SlowSource {
    async fn get_status(&self) -> Option<StatusSnapshot> {
        let now = self.in_flight.fetch_add(1, Ordering::SeqCst) + 1;
        self.max_in_flight.fetch_max(now, Ordering::SeqCst);
        self.calls.fetch_add(1, Ordering::SeqCst);
        sleep(self.delay).await;
        self.in_flight.fetch_sub(1, Ordering::SeqCst);
        Some(StatusSnapshot::default())
    }
}

fn fast_config() -> PollConfig {
    PollConfig {
        interval_ms: 20,
        channel_capacity: 64,
    }
}

#[tokio::test]
async fn test_poller_forwards_snapshots_from_endpoint() {
    let server = mock_status_server(status_json(64, &[("0", searching_worker_json(9))])).await;
    let client = Arc::new(StatusClient::new(endpoint_for(&server)).unwrap());
    let poller = StatusPoller::new(client, fast_config());
    let (tx, mut rx) = poller.channel();
    let cancel = CancellationToken::new();
    let handle = poller.start(tx, cancel.clone());

    let snapshot = timeout(Duration::from_secs(5), rx.recv())
        .await
        .expect("no snapshot forwarded")
        .unwrap();
    assert_eq!(snapshot.buffer_count, Some(64));
    assert_eq!(snapshot.workers["0"].move_count, Some(9));

    cancel.cancel();
    timeout(Duration::from_secs(5), handle).await.unwrap().unwrap();
}

#[tokio::test]
async fn test_poller_single_request_in_flight() {
    let source = Arc::new(SlowSource::new(Duration::from_millis(100)));
    let poller = StatusPoller::new(source.clone(), fast_config());
    let (tx, mut rx) = poller.channel();
    let cancel = CancellationToken::new();
    let handle = poller.start(tx, cancel.clone());

    for _ in 0..3 {
        timeout(Duration::from_secs(5), rx.recv()).await.unwrap().unwrap();
    }
    cancel.cancel();
    timeout(Duration::from_secs(5), handle).await.unwrap().unwrap();

    assert_eq!(source.max_in_flight.load(Ordering::SeqCst), 1);
    // Skipped ticks do not queue up extra requests.
    assert!(source.calls.load(Ordering::SeqCst) <= 5);
}

#[tokio::test]
async fn test_poller_failing_endpoint_forwards_nothing() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&server)
        .await;
    let client = Arc::new(StatusClient::new(endpoint_for(&server)).unwrap());
    let poller = StatusPoller::new(client, fast_config());
    let (tx, mut rx) = poller.channel();
    let cancel = CancellationToken::new();
    let handle = poller.start(tx, cancel.clone());

    sleep(Duration::from_millis(200)).await;
    assert!(rx.try_recv().is_err());

    cancel.cancel();
    timeout(Duration::from_secs(5), handle).await.unwrap().unwrap();

    let requests = server.received_requests().await.unwrap();
    assert!(requests.len() >= 2, "poller should keep retrying each tick");
}

#[tokio::test]
async fn test_poller_stops_on_cancel_mid_request() {
    let source = Arc::new(SlowSource::new(Duration::from_secs(30)));
    let poller = StatusPoller::new(source.clone(), fast_config());
    let (tx, _rx) = poller.channel();
    let cancel = CancellationToken::new();
    let handle = poller.start(tx, cancel.clone());

    sleep(Duration::from_millis(50)).await;
    cancel.cancel();

    timeout(Duration::from_secs(2), handle)
        .await
        .expect("poller did not stop while a request was in flight")
        .unwrap();
}

#[tokio::test]
async fn test_poller_stops_when_receiver_dropped() {
    let source = Arc::new(SlowSource::new(Duration::from_millis(1)));
    let poller = StatusPoller::new(source, fast_config());
    let (tx, rx) = poller.channel();
    let handle = poller.start(tx, CancellationToken::new());

    drop(rx);

    timeout(Duration::from_secs(2), handle).await.unwrap().unwrap();
}
