//! End-to-end launcher scenarios through the public API.
#![cfg(unix)]

use autopilot_launcher::ShutdownCoordinator;
use autopilot_launcher::server::{LaunchOptions, ServerLauncher, ServerSpec, ServerStatus};

use std::net::TcpListener;
use std::path::PathBuf;
use std::time::Duration;

use tempfile::TempDir;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn options() -> LaunchOptions {
    LaunchOptions {
        startup_timeout: Duration::from_secs(3),
        poll_interval: Duration::from_millis(200),
        probe_timeout: Duration::from_millis(200),
        supervise_interval: Duration::from_millis(200),
        launch_grace: Duration::from_millis(100),
        shutdown_grace: Duration::from_secs(1),
        interpreter: Some("sh".into()),
        show_server_logs: false,
    }
}

fn script(dir: &TempDir, name: &str) -> PathBuf {
    let path = dir.path().join(name);
    std::fs::write(&path, "exec sleep 30\n").unwrap();
    path
}

fn free_port() -> u16 {
    TcpListener::bind("127.0.0.1:0")
        .unwrap()
        .local_addr()
        .unwrap()
        .port()
}

async fn serve_on(port: u16) -> MockServer {
    let listener = TcpListener::bind(("127.0.0.1", port)).unwrap();
    let server = MockServer::builder().listener(listener).start().await;
    Mock::given(method("GET"))
        .and(path("/"))
        .respond_with(ResponseTemplate::new(200))
        .mount(&server)
        .await;
    server
}

#[tokio::test]
async fn test_four_servers_come_up_one_missing_then_clean_shutdown() {
    let temp = TempDir::new().unwrap();

    let ports: Vec<u16> = (0..4).map(|_| free_port()).collect();
    let mut specs: Vec<ServerSpec> = ports
        .iter()
        .enumerate()
        .map(|(i, &port)| {
            ServerSpec::new(
                &format!("S{i}"),
                &format!("Server {i}"),
                script(&temp, &format!("s{i}.sh")),
                port,
            )
        })
        .collect();
    specs.push(ServerSpec::new(
        "Missing",
        "Missing server",
        temp.path().join("nope.py"),
        free_port(),
    ));

    let mut launcher = ServerLauncher::new(specs, options()).unwrap();
    let summary = launcher.launch_all(&ShutdownCoordinator::new()).await;

    assert_eq!(summary.total, 5);
    assert_eq!(summary.attempted, 4);
    assert_eq!(summary.failed, 1);

    // The sleep scripts stand in for apps; the mocks answer on their ports
    let mut servers = Vec::new();
    for &port in &ports {
        servers.push(serve_on(port).await);
    }

    let report = launcher.await_ready(&ShutdownCoordinator::new()).await;

    assert!(report.all_ready());
    assert_eq!(report.ready.len(), 4);
    assert!(!report.cancelled);
    assert_eq!(launcher.ready_count(), 4);

    let shutdown = launcher.shutdown_all().await;
    assert_eq!(shutdown.stopped, 4);
    assert_eq!(shutdown.force_killed, 0);

    for state in launcher.states() {
        assert!(state.child.is_none());
        assert_eq!(state.status, ServerStatus::Stopped);
    }

    let again = launcher.shutdown_all().await;
    assert_eq!(again.stopped, 0);
}

#[tokio::test]
async fn test_interrupt_during_readiness_shuts_down_exactly_once() {
    let temp = TempDir::new().unwrap();
    let specs = (0..2)
        .map(|i| {
            ServerSpec::new(
                &format!("S{i}"),
                &format!("Server {i}"),
                script(&temp, &format!("s{i}.sh")),
                free_port(),
            )
        })
        .collect();

    let mut opts = options();
    opts.startup_timeout = Duration::from_secs(30);
    let mut launcher = ServerLauncher::new(specs, opts).unwrap();
    launcher.launch_all(&ShutdownCoordinator::new()).await;

    let shutdown = ShutdownCoordinator::new();
    let trigger = shutdown.clone();
    tokio::spawn(async move {
        tokio::time::sleep(Duration::from_millis(300)).await;
        trigger.shutdown();
        // Repeated interrupts are absorbed by the coordinator
        trigger.shutdown();
    });

    let report = launcher.await_ready(&shutdown).await;
    assert!(report.cancelled);
    assert!(report.elapsed < Duration::from_secs(3));

    let first = launcher.shutdown_all().await;
    let second = launcher.shutdown_all().await;

    assert_eq!(first.stopped + first.force_killed, 2);
    assert_eq!(second.stopped + second.force_killed, 0);
}
