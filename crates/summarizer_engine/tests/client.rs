use std::io::Write;
use std::time::Duration;

use pretty_assertions::assert_eq;
use summarizer_engine::{ApiSettings, FailureKind, ReqwestApi, SubmitFile, SummaryApi};
use wiremock::matchers::{body_string_contains, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn settings_for(server: &MockServer) -> ApiSettings {
    ApiSettings {
        base_url: server.uri(),
        ..ApiSettings::default()
    }
}

fn api_for(server: &MockServer) -> ReqwestApi {
    ReqwestApi::new(settings_for(server)).expect("client")
}

#[tokio::test]
async fn health_succeeds_on_2xx_without_consulting_body() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/health"))
        .respond_with(ResponseTemplate::new(200).set_body_raw("not json at all", "text/plain"))
        .mount(&server)
        .await;

    api_for(&server).check_health().await.expect("healthy");
}

#[tokio::test]
async fn health_fails_on_http_status() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/health"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&server)
        .await;

    let err = api_for(&server).check_health().await.unwrap_err();
    assert_eq!(err.kind, FailureKind::HttpStatus(503));
}

#[tokio::test]
async fn health_connection_refused_maps_to_connectivity_with_guidance() {
    // Port 1 is privileged and unbound; connections are refused immediately.
    let settings = ApiSettings {
        base_url: "http://127.0.0.1:1".to_string(),
        connect_timeout: Duration::from_millis(500),
        request_timeout: Duration::from_millis(500),
    };
    let api = ReqwestApi::new(settings).expect("client");

    let err = api.check_health().await.unwrap_err();
    assert!(err.is_connectivity());
    assert_eq!(
        err.message,
        "Unable to connect to the server. Please make sure the backend is running on http://127.0.0.1:1"
    );
}

#[tokio::test]
async fn text_submission_sends_single_text_field_and_parses_summary() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/summarize"))
        .and(body_string_contains("name=\"text\""))
        .and(body_string_contains("hello world"))
        .respond_with(ResponseTemplate::new(200).set_body_raw(
            r#"{
                "summary": "A\n\nB",
                "keyPoints": ["x", "y"],
                "statistics": {
                    "originalLength": 100,
                    "summaryLength": 20,
                    "compressionRatio": 20.0
                }
            }"#,
            "application/json",
        ))
        .expect(1)
        .mount(&server)
        .await;

    let result = api_for(&server)
        .submit("hello world", &[])
        .await
        .expect("summary");

    assert_eq!(result.summary, "A\n\nB");
    assert_eq!(result.key_points, vec!["x".to_string(), "y".to_string()]);
    let stats = result.statistics.expect("statistics");
    assert_eq!(stats.original_length, 100);
    assert_eq!(stats.summary_length, 20);
    assert_eq!(stats.compression_ratio, 20.0);
}

#[tokio::test]
async fn statistics_are_optional_in_the_response() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/summarize"))
        .respond_with(ResponseTemplate::new(200).set_body_raw(
            r#"{"summary": "short", "keyPoints": []}"#,
            "application/json",
        ))
        .mount(&server)
        .await;

    let result = api_for(&server).submit("text", &[]).await.expect("summary");
    assert_eq!(result.statistics, None);
}

#[tokio::test]
async fn server_detail_message_surfaces_verbatim() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/summarize"))
        .respond_with(
            ResponseTemplate::new(500)
                .set_body_raw(r#"{"detail":"rate limited"}"#, "application/json"),
        )
        .mount(&server)
        .await;

    let err = api_for(&server).submit("text", &[]).await.unwrap_err();
    assert_eq!(err.kind, FailureKind::HttpStatus(500));
    assert_eq!(err.message, "rate limited");
}

#[tokio::test]
async fn unparseable_error_body_falls_back_to_status_message() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/summarize"))
        .respond_with(ResponseTemplate::new(500).set_body_string("<html>oops</html>"))
        .mount(&server)
        .await;

    let err = api_for(&server).submit("text", &[]).await.unwrap_err();
    assert_eq!(err.message, "HTTP error, status 500");
}

#[tokio::test]
async fn unparseable_success_body_is_a_decode_failure() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/summarize"))
        .respond_with(ResponseTemplate::new(200).set_body_raw("not json", "application/json"))
        .mount(&server)
        .await;

    let err = api_for(&server).submit("text", &[]).await.unwrap_err();
    assert_eq!(err.kind, FailureKind::Decode);
}

#[tokio::test]
async fn file_submission_uploads_repeated_files_parts_and_ignores_text() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/summarize"))
        .respond_with(ResponseTemplate::new(200).set_body_raw(
            r#"{"summary": "combined", "keyPoints": ["p"]}"#,
            "application/json",
        ))
        .expect(1)
        .mount(&server)
        .await;

    let dir = tempfile::tempdir().expect("tempdir");
    let mut files = Vec::new();
    for (name, contents, mime) in [
        ("a.txt", "first file", Some("text/plain")),
        ("b.csv", "x,y\n1,2", Some("text/csv")),
    ] {
        let path = dir.path().join(name);
        let mut handle = std::fs::File::create(&path).expect("create");
        handle.write_all(contents.as_bytes()).expect("write");
        files.push(SubmitFile {
            name: name.to_string(),
            path,
            mime: mime.map(ToOwned::to_owned),
        });
    }

    let result = api_for(&server)
        .submit("ignored text", &files)
        .await
        .expect("summary");
    assert_eq!(result.summary, "combined");

    let requests = server.received_requests().await.expect("requests");
    assert_eq!(requests.len(), 1);
    let body = String::from_utf8_lossy(&requests[0].body).into_owned();
    assert_eq!(body.matches("name=\"files\"").count(), 2);
    assert!(body.contains("filename=\"a.txt\""));
    assert!(body.contains("filename=\"b.csv\""));
    assert!(body.contains("first file"));
    // Contract: the backend never sees both payloads.
    assert!(!body.contains("name=\"text\""));
    assert!(!body.contains("ignored text"));
}

#[tokio::test]
async fn unreadable_file_fails_client_side_without_a_request() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/summarize"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let files = [SubmitFile {
        name: "gone.txt".to_string(),
        path: std::path::PathBuf::from("/nonexistent/gone.txt"),
        mime: None,
    }];

    let err = api_for(&server).submit("", &files).await.unwrap_err();
    assert_eq!(err.kind, FailureKind::FileRead);
    assert!(err.message.contains("gone.txt"));
}
