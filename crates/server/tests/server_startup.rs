use std::net::TcpListener;
use std::path::Path;
use std::time::Duration;

use iptv_catalog_core::testing::fixtures;
use reqwest::Client;
use tempfile::TempDir;
use tokio::time::{sleep, timeout};

/// Find an available port
fn get_available_port() -> u16 {
    TcpListener::bind("127.0.0.1:0")
        .unwrap()
        .local_addr()
        .unwrap()
        .port()
}

/// Write the sample bundle plus a config pointing at it.
fn write_bundled_setup(dir: &TempDir, port: u16) -> std::path::PathBuf {
    let data_dir = dir.path().join("data");
    std::fs::create_dir(&data_dir).unwrap();
    fixtures::write_bundle(&data_dir, &fixtures::sample_snapshot()).unwrap();

    let config = format!(
        r#"
[server]
host = "127.0.0.1"
port = {}

[dataset]
source = "bundled"

[dataset.bundled]
dir = "{}"
"#,
        port,
        data_dir.display()
    );
    let config_path = dir.path().join("config.toml");
    std::fs::write(&config_path, config).unwrap();
    config_path
}

/// Spawn the server and return a handle
async fn spawn_server(config_path: &Path) -> tokio::process::Child {
    tokio::process::Command::new(env!("CARGO_BIN_EXE_iptv-catalog"))
        .env("IPTV_CATALOG_CONFIG", config_path)
        .env("RUST_LOG", "error") // Quiet logs during tests
        .kill_on_drop(true)
        .spawn()
        .expect("Failed to spawn server")
}

/// Wait for server to be ready
async fn wait_for_server(port: u16, max_attempts: u32) -> bool {
    let client = Client::new();
    for _ in 0..max_attempts {
        if client
            .get(format!("http://127.0.0.1:{}/health", port))
            .send()
            .await
            .is_ok()
        {
            return true;
        }
        sleep(Duration::from_millis(50)).await;
    }
    false
}

/// Run the binary to completion with the given config path.
async fn run_to_exit(config_path: &Path) -> std::process::Output {
    timeout(
        Duration::from_secs(5),
        tokio::process::Command::new(env!("CARGO_BIN_EXE_iptv-catalog"))
            .env("IPTV_CATALOG_CONFIG", config_path)
            .env("RUST_LOG", "error")
            .output(),
    )
    .await
    .expect("Command timed out")
    .expect("Failed to execute command")
}

#[tokio::test]
async fn test_serves_bundled_dataset() {
    let dir = TempDir::new().unwrap();
    let port = get_available_port();
    let config_path = write_bundled_setup(&dir, port);

    let mut server = spawn_server(&config_path).await;
    assert!(
        wait_for_server(port, 40).await,
        "Server did not start in time"
    );

    let client = Client::new();
    let response = client
        .get(format!("http://127.0.0.1:{}/search?q=BBC%20One&country=UK", port))
        .send()
        .await
        .expect("Failed to send request");
    assert!(response.status().is_success());
    assert_eq!(response.headers()["access-control-allow-origin"], "*");

    let json: serde_json::Value = response.json().await.expect("Failed to parse JSON");
    assert_eq!(json["total"], 1);
    assert_eq!(json["data"][0]["id"], "BBCOne.uk");

    server.kill().await.ok();
}

#[tokio::test]
async fn test_config_endpoint_returns_sanitized() {
    let dir = TempDir::new().unwrap();
    let port = get_available_port();
    let config_path = write_bundled_setup(&dir, port);

    let mut server = spawn_server(&config_path).await;
    assert!(
        wait_for_server(port, 40).await,
        "Server did not start in time"
    );

    let client = Client::new();
    let response = client
        .get(format!("http://127.0.0.1:{}/config", port))
        .send()
        .await
        .expect("Failed to send request");
    assert!(response.status().is_success());

    let json: serde_json::Value = response.json().await.expect("Failed to parse JSON");
    assert_eq!(json["server"]["port"], port);
    assert_eq!(json["dataset"]["source"], "bundled");

    server.kill().await.ok();
}

#[tokio::test]
async fn test_missing_config_file_exits_with_error() {
    let result = run_to_exit(Path::new("/nonexistent/config.toml")).await;
    assert!(!result.status.success());
}

#[tokio::test]
async fn test_missing_bundle_exits_with_error() {
    let dir = TempDir::new().unwrap();
    let config_path = dir.path().join("config.toml");
    std::fs::write(
        &config_path,
        format!(
            "[dataset.bundled]\ndir = \"{}\"\n",
            dir.path().join("missing").display()
        ),
    )
    .unwrap();

    let result = run_to_exit(&config_path).await;
    assert!(!result.status.success());
}

#[tokio::test]
async fn test_invalid_remote_config_exits_with_error() {
    let dir = TempDir::new().unwrap();
    let config_path = dir.path().join("config.toml");
    std::fs::write(
        &config_path,
        "[dataset]\nsource = \"remote\"\n\n[dataset.remote]\nbase_url = \"\"\n",
    )
    .unwrap();

    let result = run_to_exit(&config_path).await;
    assert!(!result.status.success());
}
