use artworks_common::{PageSource, SourceConfig};
use artworks_viewer::http_source::HttpPageSource;
use std::time::Duration;

#[tokio::test]
async fn artic_first_page_integration() {
    if std::env::var("ARTWORKS_LIVE_TEST").map(|v| v != "1").unwrap_or(true) {
        eprintln!("ARTWORKS_LIVE_TEST not set; skipping integration test");
        return;
    }

    let source = HttpPageSource::new(SourceConfig::default(), Duration::from_secs(30))
        .expect("client build failed");
    let page = source.fetch_page(1).await.expect("request failed");

    assert_eq!(page.len(), 12);
    assert!(page.total_count > 12);
    assert!(page.records.iter().all(|r| !r.title.is_empty()));
}
