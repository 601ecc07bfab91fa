mod common;

use axum::http::{StatusCode, header};
use axum_test::TestServer;
use linkcount::routes::{app_router, router};
use tower::ServiceExt;

#[tokio::test]
async fn test_redirect_success() {
    let db = common::test_db().await;
    common::create_test_mapping(&db.pool, "redir1", "https://example.com/target").await;

    let server = TestServer::new(router(common::create_test_state(db.pool.clone()))).unwrap();

    let response = server.get("/redir1").await;

    assert_eq!(response.status_code(), 302);
    let location = response.header("location");
    assert_eq!(location, "https://example.com/target");
    assert_eq!(common::get_clicks(&db.pool, "redir1").await, 1);
}

#[tokio::test]
async fn test_redirect_encodes_control_characters() {
    let db = common::test_db().await;
    common::create_test_mapping(&db.pool, "ctrl01", "https://example.com/a\nb").await;

    let server = TestServer::new(router(common::create_test_state(db.pool.clone()))).unwrap();

    let response = server.get("/ctrl01").await;

    assert_eq!(response.status_code(), 302);
    assert_eq!(response.header("location"), "https://example.com/a%0Ab");
    assert_eq!(common::get_clicks(&db.pool, "ctrl01").await, 1);
}

#[tokio::test]
async fn test_redirect_not_found() {
    let db = common::test_db().await;
    let server = TestServer::new(router(common::create_test_state(db.pool.clone()))).unwrap();

    let response = server.get("/nf0000").await;

    response.assert_status_not_found();
    assert_eq!(response.text(), "URL not found.");
}

#[tokio::test]
async fn test_stats_page_renders_without_counting() {
    let db = common::test_db().await;
    common::create_test_mapping(&db.pool, "stat01", "https://example.com/page").await;

    let server = TestServer::new(router(common::create_test_state(db.pool.clone()))).unwrap();

    let first = server.get("/stat01/stats").await;
    let second = server.get("/stat01/stats").await;

    first.assert_status_ok();
    let html = first.text();
    assert!(html.contains("Original URL: https://example.com/page"));
    assert!(html.contains("Clicks: 0"));
    assert!(html.contains("Short URL: http://127.0.0.1:8000/stat01"));
    assert_eq!(html, second.text());

    assert_eq!(common::get_clicks(&db.pool, "stat01").await, 0);
}

#[tokio::test]
async fn test_stats_page_not_found() {
    let db = common::test_db().await;
    let server = TestServer::new(router(common::create_test_state(db.pool.clone()))).unwrap();

    let response = server.get("/nf0000/stats").await;

    response.assert_status_not_found();
    assert_eq!(response.text(), "URL not found.");
}

#[tokio::test]
async fn test_odd_paths_are_not_found() {
    let db = common::test_db().await;
    common::create_test_mapping(&db.pool, "abc123", "https://example.com").await;

    let server = TestServer::new(router(common::create_test_state(db.pool.clone()))).unwrap();

    for path in ["/", "/stats", "/abc", "/abc123x", "/abc%20123", "/abc123/extra"] {
        let response = server.get(path).await;
        assert_eq!(response.status_code(), 404, "path {path}");
        assert_eq!(response.text(), "URL not found.", "path {path}");
    }

    assert_eq!(common::get_clicks(&db.pool, "abc123").await, 0);
}

#[tokio::test]
async fn test_trailing_slash_is_normalized() {
    let db = common::test_db().await;
    common::create_test_mapping(&db.pool, "slash1", "https://example.com").await;

    let app = app_router(common::create_test_state(db.pool.clone()));

    let response = app.oneshot(common::get("/slash1/")).await.unwrap();

    assert_eq!(response.status(), StatusCode::FOUND);
    assert_eq!(common::get_clicks(&db.pool, "slash1").await, 1);
}

#[tokio::test]
async fn test_storage_failure_returns_500() {
    let db = common::test_db().await;
    common::create_test_mapping(&db.pool, "down01", "https://example.com").await;

    let server = TestServer::new(router(common::create_test_state(db.pool.clone()))).unwrap();

    db.pool.close().await;

    let response = server.get("/down01").await;
    assert_eq!(response.status_code(), 500);
    assert_eq!(response.text(), "Internal server error.");

    let response = server.get("/down01/stats").await;
    assert_eq!(response.status_code(), 500);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_concurrent_redirects_count_every_click() {
    let db = common::test_db().await;
    common::create_test_mapping(&db.pool, "busy01", "https://example.com").await;

    let app = app_router(common::create_test_state(db.pool.clone()));
    let mut handles = Vec::new();

    for _ in 0..100 {
        let app = app.clone();
        handles.push(tokio::spawn(async move {
            app.oneshot(common::get("/busy01")).await.unwrap().status()
        }));
    }

    for handle in handles {
        assert_eq!(handle.await.unwrap(), StatusCode::FOUND);
    }

    assert_eq!(common::get_clicks(&db.pool, "busy01").await, 100);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_concurrent_stats_requests_leave_count_unchanged() {
    let db = common::test_db().await;
    common::create_test_mapping(&db.pool, "calm01", "https://example.com").await;
    sqlx::query("UPDATE urls SET clicks = 5 WHERE short_code = 'calm01'")
        .execute(&db.pool)
        .await
        .unwrap();

    let app = app_router(common::create_test_state(db.pool.clone()));
    let mut handles = Vec::new();

    for _ in 0..100 {
        let app = app.clone();
        handles.push(tokio::spawn(async move {
            let response = app.oneshot(common::get("/calm01/stats")).await.unwrap();
            let status = response.status();
            (status, common::body_text(response).await)
        }));
    }

    for handle in handles {
        let (status, body) = handle.await.unwrap();
        assert_eq!(status, StatusCode::OK);
        assert!(body.contains("Clicks: 5"));
    }

    assert_eq!(common::get_clicks(&db.pool, "calm01").await, 5);
}

#[tokio::test]
async fn test_stats_page_is_html() {
    let db = common::test_db().await;
    common::create_test_mapping(&db.pool, "html01", "https://example.com").await;

    let app = app_router(common::create_test_state(db.pool.clone()));

    let response = app.oneshot(common::get("/html01/stats")).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let content_type = response.headers()[header::CONTENT_TYPE].to_str().unwrap();
    assert!(content_type.starts_with("text/html"));
}
