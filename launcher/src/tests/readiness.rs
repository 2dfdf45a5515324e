use crate::ShutdownCoordinator;
use crate::server::{HttpProbe, await_ready, await_ready_with};
use crate::tests::unused_port;

use std::time::{Duration, Instant};

use googletest::assert_that;
use googletest::prelude::eq;
use wiremock::matchers::method;
use wiremock::{Mock, MockServer, ResponseTemplate};

async fn ready_server() -> MockServer {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200))
        .mount(&server)
        .await;
    server
}

fn probe() -> HttpProbe {
    HttpProbe::new(Duration::from_millis(200)).unwrap()
}

#[tokio::test]
async fn given_four_responding_servers_when_await_ready_then_all_ready_before_timeout() {
    // Given
    let servers = vec![
        ready_server().await,
        ready_server().await,
        ready_server().await,
        ready_server().await,
    ];
    let ports: Vec<u16> = servers.iter().map(|s| s.address().port()).collect();
    let timeout = Duration::from_secs(5);

    // When
    let report = await_ready(
        &probe(),
        &ports,
        timeout,
        Duration::from_millis(200),
        &ShutdownCoordinator::new(),
    )
    .await;

    // Then
    assert_that!(report.ready.len(), eq(4));
    assert_that!(report.all_ready(), eq(true));
    assert_that!(report.cancelled, eq(false));
    assert!(report.elapsed < timeout);
}

#[tokio::test]
async fn given_silent_port_when_await_ready_then_returns_within_timeout_plus_interval() {
    // Given
    let port = unused_port();
    let timeout = Duration::from_millis(1000);
    let interval = Duration::from_millis(300);

    // When
    let started = Instant::now();
    let report = await_ready(
        &probe(),
        &[port],
        timeout,
        interval,
        &ShutdownCoordinator::new(),
    )
    .await;

    // Then
    assert!(started.elapsed() <= timeout + interval);
    assert_that!(report.pending.contains(&port), eq(true));
    assert_that!(report.ready.is_empty(), eq(true));
}

#[tokio::test]
async fn given_mixed_ports_when_await_ready_then_ready_and_pending_split() {
    // Given
    let server = ready_server().await;
    let live = server.address().port();
    let dead = unused_port();

    // When
    let report = await_ready(
        &probe(),
        &[live, dead],
        Duration::from_millis(800),
        Duration::from_millis(200),
        &ShutdownCoordinator::new(),
    )
    .await;

    // Then
    assert_that!(report.ready.contains(&live), eq(true));
    assert_that!(report.pending.contains(&dead), eq(true));
}

#[tokio::test]
async fn given_shutdown_mid_poll_when_await_ready_then_cancelled_quickly() {
    // Given
    let shutdown = ShutdownCoordinator::new();
    let trigger = shutdown.clone();
    tokio::spawn(async move {
        tokio::time::sleep(Duration::from_millis(300)).await;
        trigger.shutdown();
    });

    // When
    let report = await_ready(
        &probe(),
        &[unused_port()],
        Duration::from_secs(30),
        Duration::from_millis(200),
        &shutdown,
    )
    .await;

    // Then
    assert_that!(report.cancelled, eq(true));
    assert!(report.elapsed < Duration::from_secs(2));
}

#[tokio::test]
async fn given_no_ports_when_await_ready_then_returns_immediately() {
    let report = await_ready(
        &probe(),
        &[],
        Duration::from_secs(30),
        Duration::from_secs(2),
        &ShutdownCoordinator::new(),
    )
    .await;

    assert_that!(report.all_ready(), eq(true));
    assert!(report.elapsed < Duration::from_millis(100));
}

#[tokio::test]
async fn given_port_reported_exited_when_await_ready_with_then_dropped_without_timeout() {
    // Given
    let dead = unused_port();
    let silent = unused_port();
    let timeout = Duration::from_secs(5);
    let mut rounds = 0;

    // When
    let started = Instant::now();
    let report = await_ready_with(
        &probe(),
        &[dead, silent],
        timeout,
        Duration::from_millis(100),
        &ShutdownCoordinator::new(),
        || {
            rounds += 1;
            match rounds {
                2 => vec![dead],
                3 => vec![silent],
                _ => Vec::new(),
            }
        },
    )
    .await;

    // Then
    assert!(started.elapsed() < Duration::from_secs(2));
    assert_that!(report.exited.len(), eq(2));
    assert_that!(report.pending.is_empty(), eq(true));
    assert_that!(report.all_ready(), eq(false));
}
