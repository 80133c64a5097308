// tests/integration/api.rs
use axum::{
    Router,
    body::{Body, to_bytes},
    http::{Request, StatusCode, header},
};
use project_stats::{config::ServerConfig, server};
use serde_json::{Value, json};
use tower::ServiceExt;

use crate::common::{TempProject, reference_project};

fn app(web_dir: &std::path::Path, default_top_n: usize) -> Router {
    server::router(&ServerConfig { web_dir: web_dir.to_path_buf(), default_top_n, ..ServerConfig::default() })
}

async fn send(app: Router, request: Request<Body>) -> (StatusCode, Vec<u8>) {
    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, bytes.to_vec())
}

async fn post_scan(app: Router, body: impl Into<Body>) -> (StatusCode, Value) {
    let request = Request::post("/api/scan")
        .header(header::CONTENT_TYPE, "application/json")
        .body(body.into())
        .unwrap();
    let (status, bytes) = send(app, request).await;
    (status, serde_json::from_slice(&bytes).unwrap())
}

#[tokio::test]
async fn scan_returns_the_camel_case_result() {
    let project = reference_project();
    let web = TempProject::new();
    let body = json!({ "path": project.path(), "top": 5 }).to_string();

    let (status, value) = post_scan(app(web.path(), 5), body).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(value["totalFiles"], 2);
    assert_eq!(value["totalLines"], 10);
    assert_eq!(value["languages"], json!([{ "ext": ".py", "name": "Python", "lines": 10, "files": 2 }]));
    assert_eq!(value["largestFiles"], json!([{ "path": "a.py", "lines": 10 }, { "path": "b.py", "lines": 0 }]));
    assert_eq!(value["emptyFiles"], 1);
    assert_eq!(value["smallFiles"], 0);
    assert_eq!(value["newestFile"]["timeAgo"], "just now");
    assert!(value["oldestFile"]["path"].is_string());
}

#[tokio::test]
async fn top_falls_back_to_the_server_default() {
    let project = TempProject::new();
    for name in ["a.rs", "b.rs", "c.rs"] {
        project.write_lines(name, 6);
    }
    let web = TempProject::new();
    let body = json!({ "path": project.path() }).to_string();

    let (status, value) = post_scan(app(web.path(), 2), body).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(value["largestFiles"].as_array().unwrap().len(), 2);
}

#[tokio::test]
async fn empty_tree_omits_time_fields() {
    let project = TempProject::new();
    let web = TempProject::new();
    let body = json!({ "path": project.path() }).to_string();

    let (status, value) = post_scan(app(web.path(), 5), body).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(value["totalFiles"], 0);
    assert!(value.get("newestFile").is_none());
    assert!(value.get("oldestFile").is_none());
}

#[tokio::test]
async fn missing_root_is_a_bad_request() {
    let project = TempProject::new();
    let missing = project.path().join("gone");
    let body = json!({ "path": missing }).to_string();

    let (status, value) = post_scan(app(project.path(), 5), body).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(value, json!({ "error": format!("Path '{}' does not exist.", missing.display()) }));
}

#[tokio::test]
async fn file_root_is_a_bad_request() {
    let project = TempProject::new();
    let file = project.write_lines("main.py", 1);
    let body = json!({ "path": file }).to_string();

    let (status, value) = post_scan(app(project.path(), 5), body).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(value["error"], format!("'{}' is not a directory.", file.display()));
}

#[tokio::test]
async fn malformed_json_is_a_bad_request() {
    let web = TempProject::new();

    let (status, value) = post_scan(app(web.path(), 5), "{ not json").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(value["error"].is_string());

    let (status, _) = post_scan(app(web.path(), 5), r#"{ "top": -1 }"#).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn health_reports_the_version() {
    let web = TempProject::new();
    let request = Request::get("/api/health").body(Body::empty()).unwrap();

    let (status, bytes) = send(app(web.path(), 5), request).await;

    assert_eq!(status, StatusCode::OK);
    let value: Value = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(value, json!({ "status": "ok", "version": env!("CARGO_PKG_VERSION") }));
}

#[tokio::test]
async fn static_files_are_served_from_the_web_dir() {
    let web = TempProject::new();
    web.write_file("index.html", "<h1>stats</h1>");
    web.write_file("style.css", "body {}");

    let root = Request::get("/").body(Body::empty()).unwrap();
    let (status, bytes) = send(app(web.path(), 5), root).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(bytes, b"<h1>stats</h1>");

    let css = Request::get("/style.css").body(Body::empty()).unwrap();
    let (status, bytes) = send(app(web.path(), 5), css).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(bytes, b"body {}");

    let missing = Request::get("/nope.js").body(Body::empty()).unwrap();
    let (status, _) = send(app(web.path(), 5), missing).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}
