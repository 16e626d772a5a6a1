// SPDX-FileCopyrightText: 2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Client integration tests with wiremock.

use fuelog_webdav::{DEFAULT_SYNC_DIR, WebDavClient, WebDavConfig, WebDavError};
use wiremock::matchers::{body_string, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn client(url: &str, sync_path: &str) -> WebDavClient {
    let config = WebDavConfig {
        url: url.to_string(),
        username: "user".to_string(),
        password: "pass".to_string(),
        path: sync_path.to_string(),
        ..Default::default()
    };
    WebDavClient::new(config).expect("Failed to create client")
}

#[test]
fn resolve_path_blank_path_uses_default_dir() {
    for sync_path in ["", "   ", "/"] {
        let client = client("https://dav.example.com", sync_path);
        assert_eq!(
            client.resolve_path("backup.csv"),
            format!("https://dav.example.com/{DEFAULT_SYNC_DIR}/backup.csv"),
        );
    }
}

#[test]
fn resolve_path_normalizes_slashes() {
    let expected = "https://dav.example.com/my/folder/backup.csv";
    for sync_path in ["my/folder", "my/folder/", "/my/folder", "/my/folder/"] {
        let client = client("https://dav.example.com/", sync_path);
        assert_eq!(client.resolve_path("backup.csv"), expected);
    }
}

#[test]
fn resolve_path_is_idempotent() {
    let client = client("https://dav.example.com", "backups");
    let first = client.resolve_path("backup.csv");
    let second = client.resolve_path("backup.csv");
    assert_eq!(first, second);
}

#[tokio::test]
async fn test_connection_accepts_multi_status() {
    let mock_server = MockServer::start().await;

    Mock::given(method("PROPFIND"))
        .and(path("/"))
        .and(header("Depth", "0"))
        .and(header("Authorization", "Basic dXNlcjpwYXNz"))
        .respond_with(ResponseTemplate::new(207))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = client(&mock_server.uri(), "backups");
    client
        .test_connection()
        .await
        .expect("Failed to test connection");
}

#[tokio::test]
async fn test_connection_reports_status_on_unauthorized() {
    let mock_server = MockServer::start().await;

    Mock::given(method("PROPFIND"))
        .and(path("/"))
        .respond_with(ResponseTemplate::new(401))
        .mount(&mock_server)
        .await;

    let client = client(&mock_server.uri(), "backups");
    let err = client
        .test_connection()
        .await
        .expect_err("Expected connection test to fail");

    assert!(matches!(err, WebDavError::Http(_)));
    assert!(err.to_string().contains("401"));
    assert!(err.to_string().contains("Unauthorized"));
}

#[tokio::test]
async fn test_connection_classifies_transport_failures() {
    // Nothing listens on port 1, so the connection is refused.
    let client = client("http://127.0.0.1:1", "backups");
    let err = client
        .test_connection()
        .await
        .expect_err("Expected connection to fail");

    assert!(matches!(err, WebDavError::Network(_)));
    assert!(err.to_string().contains("connection"));
}

#[tokio::test]
async fn ensure_directory_accepts_created_and_existing() {
    let mock_server = MockServer::start().await;

    Mock::given(method("MKCOL"))
        .and(path("/created/"))
        .respond_with(ResponseTemplate::new(201))
        .mount(&mock_server)
        .await;
    Mock::given(method("MKCOL"))
        .and(path("/existing/"))
        .respond_with(ResponseTemplate::new(405))
        .mount(&mock_server)
        .await;
    Mock::given(method("MKCOL"))
        .and(path("/forbidden/"))
        .respond_with(ResponseTemplate::new(403))
        .mount(&mock_server)
        .await;

    let client = client(&mock_server.uri(), "backups");
    assert!(
        client
            .ensure_directory(&format!("{}/created/", mock_server.uri()))
            .await
    );
    assert!(
        client
            .ensure_directory(&format!("{}/existing/", mock_server.uri()))
            .await
    );
    assert!(
        !client
            .ensure_directory(&format!("{}/forbidden/", mock_server.uri()))
            .await
    );
}

#[tokio::test]
async fn upload_file_creates_collection_then_puts() {
    let mock_server = MockServer::start().await;

    Mock::given(method("MKCOL"))
        .and(path("/backups/"))
        .respond_with(ResponseTemplate::new(201))
        .expect(1)
        .mount(&mock_server)
        .await;
    Mock::given(method("PUT"))
        .and(path("/backups/backup.csv"))
        .and(header("Content-Type", "text/csv; charset=utf-8"))
        .and(header("Authorization", "Basic dXNlcjpwYXNz"))
        .and(body_string("a,b,c"))
        .respond_with(ResponseTemplate::new(201))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = client(&mock_server.uri(), "backups");
    client
        .upload_file("backup.csv", b"a,b,c")
        .await
        .expect("Failed to upload");
}

#[tokio::test]
async fn upload_file_puts_even_when_mkcol_fails() {
    let mock_server = MockServer::start().await;

    Mock::given(method("MKCOL"))
        .and(path("/backups/"))
        .respond_with(ResponseTemplate::new(403))
        .mount(&mock_server)
        .await;
    Mock::given(method("PUT"))
        .and(path("/backups/backup.csv"))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = client(&mock_server.uri(), "backups");
    client
        .upload_file("backup.csv", b"a,b,c")
        .await
        .expect("Failed to upload");
}

#[tokio::test]
async fn upload_file_captures_response_body_on_failure() {
    let mock_server = MockServer::start().await;

    Mock::given(method("MKCOL"))
        .respond_with(ResponseTemplate::new(405))
        .mount(&mock_server)
        .await;
    Mock::given(method("PUT"))
        .and(path("/backups/backup.csv"))
        .respond_with(ResponseTemplate::new(403).set_body_string("quota exceeded"))
        .mount(&mock_server)
        .await;

    let client = client(&mock_server.uri(), "backups");
    let err = client
        .upload_file("backup.csv", b"a,b,c")
        .await
        .expect_err("Expected upload to fail");

    assert!(err.to_string().contains("403"));
    assert!(err.to_string().contains("quota exceeded"));
}

#[tokio::test]
async fn download_file_returns_body_only_on_success() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/backups/present.csv"))
        .respond_with(ResponseTemplate::new(200).set_body_string("\u{feff}ID\n"))
        .mount(&mock_server)
        .await;
    Mock::given(method("GET"))
        .and(path("/backups/missing.csv"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&mock_server)
        .await;

    let client = client(&mock_server.uri(), "backups");
    let body = client
        .download_file("present.csv")
        .await
        .expect("Failed to download");
    assert_eq!(body.as_deref(), Some("\u{feff}ID\n"));

    let missing = client
        .download_file("missing.csv")
        .await
        .expect("Failed to download");
    assert_eq!(missing, None);
}

#[tokio::test]
async fn file_exists_checks_with_head() {
    let mock_server = MockServer::start().await;

    Mock::given(method("HEAD"))
        .and(path("/backups/present.csv"))
        .respond_with(ResponseTemplate::new(200))
        .mount(&mock_server)
        .await;
    Mock::given(method("HEAD"))
        .and(path("/backups/missing.csv"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&mock_server)
        .await;

    let client = client(&mock_server.uri(), "backups");
    assert!(client.file_exists("present.csv").await.expect("HEAD failed"));
    assert!(
        !client
            .file_exists("missing.csv")
            .await
            .expect("HEAD failed")
    );
}

#[tokio::test]
async fn last_modified_parses_http_date() {
    let mock_server = MockServer::start().await;

    Mock::given(method("HEAD"))
        .and(path("/backups/backup.csv"))
        .respond_with(
            ResponseTemplate::new(200).insert_header("Last-Modified", "Tue, 15 Nov 1994 08:12:31 GMT"),
        )
        .mount(&mock_server)
        .await;

    let client = client(&mock_server.uri(), "backups");
    let modified = client
        .last_modified("backup.csv")
        .await
        .expect("HEAD failed")
        .expect("Expected Last-Modified header");

    assert_eq!(modified.to_string(), "1994-11-15T08:12:31Z");
}

#[tokio::test]
async fn last_modified_missing_header_yields_none() {
    let mock_server = MockServer::start().await;

    Mock::given(method("HEAD"))
        .and(path("/backups/backup.csv"))
        .respond_with(ResponseTemplate::new(200))
        .mount(&mock_server)
        .await;

    let client = client(&mock_server.uri(), "backups");
    let modified = client.last_modified("backup.csv").await.expect("HEAD failed");
    assert_eq!(modified, None);
}
