use std::fs;
use std::io::{Read, Write};
use std::net::TcpListener;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};
use std::thread;

use dolar_bot::testkit::page::brou_page;

fn write_config(dir: &Path, contents: &str) -> PathBuf {
    let path = dir.join("config.toml");
    fs::write(&path, contents).expect("write temp config");
    path
}

fn dolar_bot(args: &[&str], config: &Path) -> Output {
    Command::new(env!("CARGO_BIN_EXE_dolar-bot"))
        .args(args)
        .arg("--config")
        .arg(config)
        .env_remove("TELEGRAM_BOT_TOKEN")
        .env("RUST_LOG", "off")
        .output()
        .expect("run dolar-bot")
}

fn combined(output: &Output) -> String {
    format!(
        "{}{}",
        String::from_utf8_lossy(&output.stdout),
        String::from_utf8_lossy(&output.stderr)
    )
}

/// Serve one HTTP response on a background thread and return its URL.
fn serve_once(body: String) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind");
    let addr = listener.local_addr().expect("addr");
    thread::spawn(move || {
        if let Ok((mut socket, _)) = listener.accept() {
            let mut buf = [0u8; 4096];
            let _ = socket.read(&mut buf);
            let response = format!(
                "HTTP/1.1 200 OK\r\ncontent-type: text/html; charset=utf-8\r\ncontent-length: {}\r\nconnection: close\r\n\r\n{body}",
                body.len()
            );
            let _ = socket.write_all(response.as_bytes());
        }
    });
    format!("http://{addr}/")
}

#[test]
fn missing_config_file_exits_nonzero() {
    let dir = tempfile::tempdir().unwrap();

    let output = dolar_bot(&["run"], &dir.path().join("absent.toml"));

    assert!(!output.status.success(), "Expected nonzero exit code");
    assert!(combined(&output).contains("failed to read config file"));
}

#[test]
fn missing_target_exits_nonzero_before_loop() {
    let dir = tempfile::tempdir().unwrap();
    let config = write_config(dir.path(), "telegram_token = \"123:abc\"\n");

    let output = dolar_bot(&[], &config);

    assert!(!output.status.success(), "Expected nonzero exit code");
    assert!(combined(&output).contains("missing required field: target"));
}

#[test]
fn missing_token_exits_nonzero_before_loop() {
    let dir = tempfile::tempdir().unwrap();
    let config = write_config(dir.path(), "target = 123\n");

    let output = dolar_bot(&["run"], &config);

    assert!(!output.status.success(), "Expected nonzero exit code");
    assert!(combined(&output).contains("missing required field: telegram_token"));
}

#[test]
fn check_reports_pending_notification_without_writing_cache() {
    let dir = tempfile::tempdir().unwrap();
    let cache_path = dir.path().join("cache.json");
    let url = serve_once(brou_page("41,10", "43,60"));
    let config = write_config(
        dir.path(),
        &format!(
            "telegram_token = \"123:abc\"\ntarget = 123\n\n[source]\nurl = \"{url}\"\n\n[cache]\npath = {:?}\n",
            cache_path
        ),
    );

    let output = dolar_bot(&["check"], &config);
    let text = combined(&output);

    assert!(output.status.success(), "check failed: {text}");
    assert!(text.contains("Current:   buy=41.10 sell=43.60"));
    assert!(text.contains("Cached:    (none)"));
    assert!(text.contains("would notify"));
    assert!(!cache_path.exists());
}
