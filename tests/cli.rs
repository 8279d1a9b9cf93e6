mod common;

use common::{FixtureServer, FIXTURE_LEGISLATORS};
use std::path::Path;
use std::process::{Command, Output};

fn run_cli(server: &FixtureServer, social_path: &str, output: &Path) -> Output {
    Command::new(env!("CARGO_BIN_EXE_congress-contacts"))
        .env("CONGRESS_CONTACTS_LEGISLATORS_URL", server.url("/legislators-current.yaml"))
        .env("CONGRESS_CONTACTS_SOCIAL_MEDIA_URL", server.url(social_path))
        .env("CONGRESS_CONTACTS_OUTPUT", output)
        .env("CONGRESS_CONTACTS_TIMEOUT_SECS", "5")
        .env_remove("CONGRESS_CONTACTS_TERM_CUTOFF")
        .env("RUST_LOG", "off")
        .output()
        .expect("Failed to execute command")
}

#[test]
fn writes_contact_list() {
    let server = FixtureServer::with_fixtures();
    let dir = tempfile::tempdir().unwrap();
    let output = dir.path().join("contacts.csv");

    let result = run_cli(&server, "/legislators-social-media.yaml", &output);
    let stderr = String::from_utf8_lossy(&result.stderr);

    assert!(result.status.success(), "stderr: {}", stderr);
    assert!(stderr.contains(&format!("with {} entries", FIXTURE_LEGISLATORS)));

    let csv = std::fs::read_to_string(&output).unwrap();
    let mut lines = csv.lines();
    assert_eq!(
        lines.next(),
        Some("State,name,party,district,phone,url,twitter,facebook,youtube,instagram")
    );
    assert_eq!(
        lines.next(),
        Some("Alabama,Jerry Carl,R,AL-01,202-225-4931,https://carl.house.gov,RepJerryCarl,RepJerryCarl,UCITAoePHh8NuV0COrAGvQiQ,repjerrycarl")
    );
    assert_eq!(lines.count(), FIXTURE_LEGISLATORS - 1);
}

#[test]
fn fetch_failure_exits_non_zero_without_output() {
    let server = FixtureServer::with_fixtures();
    let dir = tempfile::tempdir().unwrap();
    let output = dir.path().join("contacts.csv");

    let result = run_cli(&server, "/missing.yaml", &output);
    let stderr = String::from_utf8_lossy(&result.stderr);

    assert!(!result.status.success());
    assert!(stderr.contains("Error:"), "stderr: {}", stderr);
    assert!(stderr.contains("/missing.yaml"), "stderr: {}", stderr);
    assert!(!output.exists());
}

#[test]
fn invalid_configuration_exits_non_zero() {
    let result = Command::new(env!("CARGO_BIN_EXE_congress-contacts"))
        .env("CONGRESS_CONTACTS_TIMEOUT_SECS", "later")
        .env("RUST_LOG", "off")
        .output()
        .expect("Failed to execute command");

    assert!(!result.status.success());
    assert!(String::from_utf8_lossy(&result.stderr).contains("Invalid configuration"));
}

#[test]
fn downloads_are_logged_with_size_at_info() {
    let server = FixtureServer::with_fixtures();
    let dir = tempfile::tempdir().unwrap();
    let output = dir.path().join("contacts.csv");

    let result = Command::new(env!("CARGO_BIN_EXE_congress-contacts"))
        .env("CONGRESS_CONTACTS_LEGISLATORS_URL", server.url("/legislators-current.yaml"))
        .env("CONGRESS_CONTACTS_SOCIAL_MEDIA_URL", server.url("/legislators-social-media.yaml"))
        .env("CONGRESS_CONTACTS_OUTPUT", &output)
        .env("RUST_LOG", "congress_contacts=info")
        .env("NO_COLOR", "1")
        .output()
        .expect("Failed to execute command");
    let stderr = String::from_utf8_lossy(&result.stderr);

    assert!(result.status.success(), "stderr: {}", stderr);
    let downloaded: Vec<&str> = stderr.lines().filter(|l| l.contains("Downloaded")).collect();
    assert_eq!(downloaded.len(), 2, "stderr: {}", stderr);
    assert!(downloaded.iter().all(|l| l.contains("bytes") && l.contains("INFO")));
}
