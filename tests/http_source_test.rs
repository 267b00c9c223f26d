//! HTTP取得元テスト
//!
//! ローカルに立てた簡易HTTPサーバーに対して取得・一括選択を検証

use artworks_common::{Error, PageSource, SourceConfig, ViewerSession};
use artworks_viewer::bulk::run_bulk_selection;
use artworks_viewer::http_source::HttpPageSource;
use std::time::Duration;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;

/// ページ番号 → (ステータス, 本文)
type Responder = fn(u32) -> (u16, String);

/// 3ページ × 2件（ID: 11,12 / 21,22 / 31,32）
fn three_pages(page: u32) -> (u16, String) {
    let body = serde_json::json!({
        "pagination": {"total": 6, "limit": 2, "current_page": page},
        "data": [
            {"id": page * 10 + 1, "title": format!("Work {}-1", page)},
            {"id": page * 10 + 2, "title": null}
        ]
    });
    (200, body.to_string())
}

fn three_pages_second_fails(page: u32) -> (u16, String) {
    if page == 2 {
        (500, r#"{"error": "boom"}"#.to_string())
    } else {
        three_pages(page)
    }
}

fn not_json(_page: u32) -> (u16, String) {
    (200, "<html>maintenance</html>".to_string())
}

fn page_param(request: &str) -> u32 {
    request
        .split("page=")
        .nth(1)
        .and_then(|s| s.split(|c: char| !c.is_ascii_digit()).next())
        .and_then(|s| s.parse().ok())
        .unwrap_or(0)
}

fn reason(status: u16) -> &'static str {
    match status {
        200 => "OK",
        404 => "Not Found",
        _ => "Internal Server Error",
    }
}

/// 簡易サーバーを起動してエンドポイントURLを返す
async fn spawn_server(responder: Responder) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind失敗");
    let addr = listener.local_addr().expect("アドレス取得失敗");

    tokio::spawn(async move {
        while let Ok((mut socket, _)) = listener.accept().await {
            let mut buf = Vec::new();
            let mut chunk = [0u8; 1024];
            loop {
                match socket.read(&mut chunk).await {
                    Ok(0) | Err(_) => break,
                    Ok(n) => buf.extend_from_slice(&chunk[..n]),
                }
                if buf.windows(4).any(|w| w == b"\r\n\r\n") {
                    break;
                }
            }

            let request = String::from_utf8_lossy(&buf);
            let (status, body) = responder(page_param(&request));
            let response = format!(
                "HTTP/1.1 {} {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
                status,
                reason(status),
                body.len(),
                body
            );
            let _ = socket.write_all(response.as_bytes()).await;
            let _ = socket.shutdown().await;
        }
    });

    format!("http://{}/api/v1/artworks", addr)
}

fn source(endpoint: String) -> HttpPageSource {
    let config = SourceConfig {
        page_size: 2,
        ..SourceConfig::with_endpoint(endpoint)
    };
    HttpPageSource::new(config, Duration::from_secs(5)).expect("クライアント作成失敗")
}

#[tokio::test]
async fn test_fetch_page_parses_response() {
    let endpoint = spawn_server(three_pages).await;
    let page = source(endpoint).fetch_page(2).await.expect("取得失敗");

    assert_eq!(page.ids(), vec![21, 22]);
    assert_eq!(page.total_count, 6);
    assert_eq!(page.records[0].title, "Work 2-1");
    assert_eq!(page.records[1].title, "N/A");
}

#[tokio::test]
async fn test_error_status_is_transport_error() {
    let endpoint = spawn_server(three_pages_second_fails).await;
    let err = source(endpoint).fetch_page(2).await.unwrap_err();

    assert!(matches!(err, Error::Transport(_)));
    assert!(err.to_string().contains("500"));
}

#[tokio::test]
async fn test_non_json_body_is_parse_failure() {
    let endpoint = spawn_server(not_json).await;
    let err = source(endpoint).fetch_page(1).await.unwrap_err();

    assert!(matches!(err, Error::Json(_)));
    assert!(err.is_fetch_failure());
}

#[tokio::test]
async fn test_connection_refused_is_transport_error() {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let err = source(format!("http://{}/artworks", addr))
        .fetch_page(1)
        .await
        .unwrap_err();
    assert!(matches!(err, Error::Transport(_)));
}

#[tokio::test]
async fn test_bulk_selection_over_http_skips_failed_page() {
    let endpoint = spawn_server(three_pages_second_fails).await;
    let mut session = ViewerSession::new(source(endpoint), 2);
    session.mount().await;
    session.toggle_row(99);

    let outcome = run_bulk_selection(&mut session, 5).await;

    assert_eq!(outcome.collected, 4);
    assert_eq!(outcome.pages_failed, 1);
    assert_eq!(
        session.selection().iter().collect::<Vec<_>>(),
        vec![11, 12, 31, 32, 99]
    );
}
