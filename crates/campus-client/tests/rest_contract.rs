//! REST catalog contract: each client call hits the documented method and path.
//!
//! A `tiny_http` server on `127.0.0.1:0` answers one canned response per
//! request and records what it saw.

use std::io::Read;
use std::sync::mpsc;
use std::thread;
use std::time::Duration;

use campus_client::{Catalog, ClientError, RestCatalog};
use campus_core::entities::{NewLecture, NewProgram};
use campus_core::enums::LectureLevel;
use campus_core::updates::{LectureUpdateBuilder, ProgramUpdateBuilder};
use pretty_assertions::assert_eq;
use rstest::rstest;
use tiny_http::{Header, Response, Server};

const LECTURE: &str = concat!(
    r#"{"id":7,"program_id":2,"title":"Hooks","content":"...","category":"Audience","#,
    r#""level":"master","order":3,"created_at":"2024-02-01T09:00:00Z"}"#,
);
const PROGRAM: &str = concat!(
    r#"{"id":2,"slug":"text-influencer","title":"Text Influencer","description":"","#,
    r#""has_common_course":true,"created_at":"2023-06-01T09:00:00Z"}"#,
);
const PROGRAMS: &str = concat!(
    r#"[{"id":1,"slug":"membership","title":"Membership","description":"","#,
    r#""has_common_course":false,"created_at":"2023-05-01T09:00:00Z"}]"#,
);
const PROGRAM_STATS: &str = r#"{"total":2,"membership":1,"master":1,"with_common_course":1}"#;
const PROGRESS: &str = r#"{"lecture_id":7,"completed":true,"completed_at":"2024-02-02T10:00:00Z"}"#;
const STATS: &str = r#"{"total":3,"member":1,"master":1,"master_common":1}"#;

/// A request as seen by the fake server.
#[derive(Debug, PartialEq, Eq)]
struct Seen {
    method: String,
    path: String,
    body: String,
}

/// Serve exactly one request with `status` and `body`, then report what was received.
fn serve_once(status: u16, body: &'static str) -> (String, mpsc::Receiver<Seen>) {
    let server = Server::http("127.0.0.1:0").expect("bind");
    let port = server
        .server_addr()
        .to_ip()
        .map(|a| a.port())
        .expect("ip listener");
    let (tx, rx) = mpsc::channel();
    thread::spawn(move || {
        if let Ok(Some(mut request)) = server.recv_timeout(Duration::from_secs(5)) {
            let mut received = String::new();
            let _ = request.as_reader().read_to_string(&mut received);
            let seen = Seen {
                method: request.method().to_string(),
                path: request.url().to_string(),
                body: received,
            };
            let header = Header::from_bytes("Content-Type", "application/json").expect("header");
            let response = Response::from_string(body)
                .with_status_code(status)
                .with_header(header);
            let _ = request.respond(response);
            let _ = tx.send(seen);
        }
    });
    (format!("http://127.0.0.1:{port}/api"), rx)
}

fn catalog(base: &str) -> Catalog {
    Catalog::Rest(RestCatalog::new(base, Duration::from_secs(5)).expect("client"))
}

fn seen(rx: &mpsc::Receiver<Seen>) -> Seen {
    rx.recv_timeout(Duration::from_secs(5)).expect("request recorded")
}

/// Assert the single recorded request used `method` on `path`, returning its body.
fn expect_request(rx: &mpsc::Receiver<Seen>, method: &str, path: &str) -> String {
    let seen = seen(rx);
    assert_eq!((seen.method.as_str(), seen.path.as_str()), (method, path));
    seen.body
}

#[tokio::test]
async fn lists_lectures() {
    let (base, rx) = serve_once(200, "[]");
    let lectures = catalog(&base).lectures().await.unwrap();
    assert!(lectures.is_empty());
    expect_request(&rx, "GET", "/api/lectures");
}

#[tokio::test]
async fn gets_one_lecture() {
    let (base, rx) = serve_once(200, LECTURE);
    let lecture = catalog(&base).lecture(7).await.unwrap();
    assert_eq!(lecture.level, LectureLevel::Master);
    assert_eq!(seen(&rx).path, "/api/lectures/7");
}

#[tokio::test]
async fn missing_lecture_is_not_found() {
    let (base, _rx) = serve_once(404, r#"{"error":"not found"}"#);
    let err = catalog(&base).lecture(99).await.unwrap_err();
    assert!(matches!(err, ClientError::NotFound { .. }));
}

#[tokio::test]
async fn server_error_is_api_error() {
    let (base, _rx) = serve_once(500, "boom");
    let err = catalog(&base).programs().await.unwrap_err();
    assert!(matches!(err, ClientError::Api { status: 500, ref message } if message == "boom"));
    assert!(err.is_transient());
}

#[rstest]
#[case(400, false)]
#[case(404, false)]
#[case(502, true)]
#[case(503, true)]
#[tokio::test]
async fn list_failures_keep_status(#[case] status: u16, #[case] transient: bool) {
    let (base, _rx) = serve_once(status, "failed");
    let err = catalog(&base).lectures().await.unwrap_err();
    assert!(matches!(err, ClientError::Api { status: s, .. } if s == status));
    assert_eq!(err.is_transient(), transient);
}

#[tokio::test]
async fn program_lectures_by_id() {
    let (base, rx) = serve_once(200, "[]");
    catalog(&base).program_lectures(2).await.unwrap();
    assert_eq!(seen(&rx).path, "/api/programs/2/lectures");
}

#[tokio::test]
async fn program_lectures_by_slug_is_encoded() {
    let (base, rx) = serve_once(200, "[]");
    catalog(&base)
        .program_lectures_by_slug("text influencer")
        .await
        .unwrap();
    assert_eq!(seen(&rx).path, "/api/programs/slug/text%20influencer/lectures");
}

#[tokio::test]
async fn program_by_slug() {
    let (base, rx) = serve_once(200, PROGRAM);
    let program = catalog(&base).program_by_slug("text-influencer").await.unwrap();
    assert!(program.has_common_course);
    assert_eq!(seen(&rx).path, "/api/programs/slug/text-influencer");
}

#[tokio::test]
async fn lists_programs() {
    let (base, rx) = serve_once(200, PROGRAMS);
    let programs = catalog(&base).programs().await.unwrap();
    assert_eq!(programs.len(), 1);
    assert_eq!(programs[0].slug, "membership");
    expect_request(&rx, "GET", "/api/programs");
}

#[tokio::test]
async fn gets_one_program() {
    let (base, rx) = serve_once(200, PROGRAM);
    let program = catalog(&base).program(2).await.unwrap();
    assert_eq!(program.title, "Text Influencer");
    expect_request(&rx, "GET", "/api/programs/2");
}

#[tokio::test]
async fn missing_program_is_not_found() {
    let (base, rx) = serve_once(404, "");
    let err = catalog(&base).program(9).await.unwrap_err();
    assert!(matches!(err, ClientError::NotFound { ref entity, .. } if entity == "program"));
    expect_request(&rx, "GET", "/api/programs/9");
}

#[tokio::test]
async fn program_stats() {
    let (base, rx) = serve_once(200, PROGRAM_STATS);
    let stats = catalog(&base).program_stats().await.unwrap();
    assert_eq!((stats.total, stats.with_common_course), (2, 1));
    expect_request(&rx, "GET", "/api/programs/stats");
}

#[tokio::test]
async fn creates_lecture_with_json_body() {
    let (base, rx) = serve_once(201, LECTURE);
    catalog(&base)
        .create_lecture(NewLecture {
            program_id: 2,
            title: String::from("Hooks"),
            content: String::new(),
            category: String::from("Audience"),
            level: LectureLevel::Master,
            order: 3,
        })
        .await
        .unwrap();
    let sent = expect_request(&rx, "POST", "/api/lectures");
    let body: serde_json::Value = serde_json::from_str(&sent).unwrap();
    assert_eq!(body["level"], "master");
    assert_eq!(body["program_id"], 2);
}

#[tokio::test]
async fn update_sends_only_changed_fields() {
    let (base, rx) = serve_once(200, LECTURE);
    let update = LectureUpdateBuilder::new().title("Hooks v2").build();
    catalog(&base).update_lecture(7, &update).await.unwrap();
    let sent = expect_request(&rx, "PUT", "/api/lectures/7");
    let body: serde_json::Value = serde_json::from_str(&sent).unwrap();
    assert_eq!(body, serde_json::json!({ "title": "Hooks v2" }));
}

#[tokio::test]
async fn deletes_lecture() {
    let (base, rx) = serve_once(200, "{}");
    catalog(&base).delete_lecture(7).await.unwrap();
    expect_request(&rx, "DELETE", "/api/lectures/7");
}

#[tokio::test]
async fn creates_updates_and_deletes_programs() {
    let (base, rx) = serve_once(201, PROGRAM);
    catalog(&base)
        .create_program(NewProgram {
            slug: String::from("text-influencer"),
            title: String::from("Text Influencer"),
            description: String::new(),
            has_common_course: true,
        })
        .await
        .unwrap();
    expect_request(&rx, "POST", "/api/programs");

    let (base, rx) = serve_once(200, PROGRAM);
    let update = ProgramUpdateBuilder::new().has_common_course(false).build();
    catalog(&base).update_program(2, &update).await.unwrap();
    expect_request(&rx, "PUT", "/api/programs/2");

    let (base, rx) = serve_once(200, "{}");
    catalog(&base).delete_program(2).await.unwrap();
    expect_request(&rx, "DELETE", "/api/programs/2");
}

#[tokio::test]
async fn lecture_stats_and_progress() {
    let (base, rx) = serve_once(200, STATS);
    let stats = catalog(&base).lecture_stats().await.unwrap();
    assert_eq!(stats.total, 3);
    assert_eq!(seen(&rx).path, "/api/lectures/stats");

    let (base, rx) = serve_once(200, PROGRESS);
    let progress = catalog(&base).complete_lecture(7).await.unwrap();
    assert!(progress.completed);
    expect_request(&rx, "POST", "/api/lectures/7/complete");

    let (base, rx) = serve_once(200, PROGRESS);
    catalog(&base).lecture_progress(7).await.unwrap();
    assert_eq!(seen(&rx).path, "/api/lectures/7/progress");
}

#[tokio::test]
async fn invalid_program_never_reaches_the_server() {
    let (base, rx) = serve_once(201, PROGRAM);
    let err = catalog(&base)
        .create_program(NewProgram {
            slug: String::from("Bad Slug"),
            title: String::from("x"),
            description: String::new(),
            has_common_course: false,
        })
        .await
        .unwrap_err();
    assert!(matches!(err, ClientError::Validation(_)));
    assert!(rx.recv_timeout(Duration::from_millis(200)).is_err());
}
