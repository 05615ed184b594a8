//! Integration tests for the crawler
//!
//! These tests use wiremock to create mock HTTP servers and test
//! the full crawl cycle end-to-end, down to the bytes of the output file.

use site_scribe::config::{Config, TraversalOrder};
use site_scribe::crawler::{crawl, CrawlSession};
use site_scribe::output::{format_block, format_header, separator, TextFileSink};
use site_scribe::url::parse_start_url;
use tempfile::TempDir;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Creates a test configuration writing to a file inside `dir`
fn create_test_config(dir: &TempDir) -> Config {
    let mut config = Config::default();
    config.output.path = dir
        .path()
        .join("scraped_content.txt")
        .to_string_lossy()
        .into_owned();
    config
}

fn html_page(body: &str) -> ResponseTemplate {
    ResponseTemplate::new(200).set_body_raw(
        format!(
            "<html><head><title>Test</title><script>track()</script></head><body>{}</body></html>",
            body
        ),
        "text/html",
    )
}

async fn mount(server: &MockServer, page_path: &str, body: &str) {
    Mock::given(method("GET"))
        .and(path(page_path))
        .respond_with(html_page(body))
        .expect(1)
        .mount(server)
        .await;
}

#[tokio::test]
async fn test_full_crawl_writes_expected_document() {
    let mock_server = MockServer::start().await;
    let base_url = mock_server.uri();

    mount(
        &mock_server,
        "/",
        r#"<header>Site menu</header>
           <p>  Welcome home  </p>
           <a href="/about">About</a>
           <a href="https://other.com/x">Other site</a>
           <a href="/photo.jpg">Photo</a>
           <footer>Footer text</footer>"#,
    )
    .await;
    mount(&mock_server, "/about", "<p>About us</p>\n\n<p>Since 1999</p>").await;

    Mock::given(method("GET"))
        .and(path("/photo.jpg"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&mock_server)
        .await;

    let dir = TempDir::new().unwrap();
    let config = create_test_config(&dir);
    let output_path = config.output.path.clone();
    let start = parse_start_url(&base_url).unwrap();

    let summary = crawl(config, start).await.expect("Crawl failed");

    let root = format!("{}/", base_url);
    let about = format!("{}/about", base_url);
    let expected = format!(
        "{}{}{}",
        format_header(&base_url),
        format_block(&root, "Test\nWelcome home\nAbout\nOther site\nPhoto"),
        format_block(&about, "Test\nAbout us\nSince 1999"),
    );

    let content = std::fs::read_to_string(&output_path).expect("output file missing");
    assert_eq!(content, expected);

    assert_eq!(summary.urls_visited, 2);
    assert_eq!(summary.blocks_written, 2);
    assert_eq!(summary.links_off_site, 1);
    assert_eq!(summary.links_skipped_extension, 1);
}

#[tokio::test]
async fn test_output_starts_with_header_and_separator() {
    let mock_server = MockServer::start().await;
    mount(&mock_server, "/", "<p>Only page</p>").await;

    let dir = TempDir::new().unwrap();
    let config = create_test_config(&dir);
    let output_path = config.output.path.clone();
    let start = parse_start_url(&mock_server.uri()).unwrap();

    crawl(config, start).await.unwrap();

    let content = std::fs::read_to_string(&output_path).unwrap();
    let lines: Vec<&str> = content.lines().collect();
    assert_eq!(lines[0], format!("Scraped Data from {}", mock_server.uri()));
    assert_eq!(lines[1], separator());
    assert_eq!(lines[2], separator());
    assert_eq!(lines[3], format!("URL: {}/", mock_server.uri()));
    assert_eq!(lines[4], separator());
}

#[tokio::test]
async fn test_previous_output_is_replaced() {
    let mock_server = MockServer::start().await;
    mount(&mock_server, "/", "<p>Fresh</p>").await;

    let dir = TempDir::new().unwrap();
    let config = create_test_config(&dir);
    std::fs::write(&config.output.path, "stale data from last run\n").unwrap();
    let output_path = config.output.path.clone();
    let start = parse_start_url(&mock_server.uri()).unwrap();

    crawl(config, start).await.unwrap();

    let content = std::fs::read_to_string(&output_path).unwrap();
    assert!(!content.contains("stale data"));
    assert!(content.contains("Fresh"));
}

#[tokio::test]
async fn test_unreachable_start_leaves_no_file() {
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(500))
        .expect(1)
        .mount(&mock_server)
        .await;

    let dir = TempDir::new().unwrap();
    let config = create_test_config(&dir);
    let output_path = config.output.path.clone();
    let start = parse_start_url(&mock_server.uri()).unwrap();

    let summary = crawl(config, start).await.expect("crawl should still finish");

    assert!(!std::path::Path::new(&output_path).exists());
    assert_eq!(summary.urls_visited, 1);
    assert_eq!(summary.fetch_failures, 1);
    assert_eq!(summary.blocks_written, 0);
}

#[tokio::test]
async fn test_unwritable_output_does_not_stop_crawl() {
    let mock_server = MockServer::start().await;
    mount(&mock_server, "/", r#"<p>Root</p><a href="/a">A</a>"#).await;
    mount(&mock_server, "/a", "<p>A</p>").await;

    let dir = TempDir::new().unwrap();
    let mut config = Config::default();
    let output_path = dir.path().join("missing").join("out.txt");
    config.output.path = output_path.to_string_lossy().into_owned();
    let start = parse_start_url(&mock_server.uri()).unwrap();

    let summary = crawl(config, start)
        .await
        .expect("write failures should not end the crawl");

    assert!(!output_path.exists());
    assert_eq!(summary.urls_visited, 2);
    assert_eq!(summary.pages_processed, 2);
    assert_eq!(summary.blocks_written, 0);
    assert_eq!(summary.write_failures, 2);
    assert!(summary.finished_at.is_some());
}

#[tokio::test]
async fn test_empty_first_page_still_creates_header() {
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/"))
        .respond_with(ResponseTemplate::new(200).set_body_raw(
            r#"<html><body>  <a href="/next"> </a> </body></html>"#,
            "text/html",
        ))
        .expect(1)
        .mount(&mock_server)
        .await;
    mount(&mock_server, "/next", "<p>Next page</p>").await;

    let dir = TempDir::new().unwrap();
    let config = create_test_config(&dir);
    let output_path = config.output.path.clone();
    let start = parse_start_url(&mock_server.uri()).unwrap();

    let summary = crawl(config, start).await.unwrap();

    let next = format!("{}/next", mock_server.uri());
    let content = std::fs::read_to_string(&output_path).unwrap();
    assert_eq!(
        content,
        format!(
            "{}{}",
            format_header(&mock_server.uri()),
            format_block(&next, "Test\nNext page")
        )
    );
    assert_eq!(summary.pages_empty, 1);
    assert_eq!(summary.pages_processed, 2);
}

#[tokio::test]
async fn test_cyclic_links_fetch_each_page_once() {
    let mock_server = MockServer::start().await;
    mount(
        &mock_server,
        "/",
        r#"<p>Root</p><a href="/a">A</a><a href="/">Self</a>"#,
    )
    .await;
    mount(
        &mock_server,
        "/a",
        r#"<p>A</p><a href="/">Back</a><a href="/a">Self</a><a href="/b">B</a>"#,
    )
    .await;
    mount(&mock_server, "/b", r#"<p>B</p><a href="/a">A</a>"#).await;

    let dir = TempDir::new().unwrap();
    let config = create_test_config(&dir);
    let output_path = config.output.path.clone();
    let start = parse_start_url(&mock_server.uri()).unwrap();

    let summary = crawl(config, start).await.unwrap();

    let content = std::fs::read_to_string(&output_path).unwrap();
    assert_eq!(content.matches("URL: ").count(), 3);
    assert_eq!(summary.urls_visited, 3);
}

#[tokio::test]
async fn test_breadth_first_order_in_document() {
    let mock_server = MockServer::start().await;
    mount(
        &mock_server,
        "/",
        r#"<p>Root</p><a href="/a">A</a><a href="/b">B</a>"#,
    )
    .await;
    mount(&mock_server, "/a", r#"<p>A</p><a href="/a/child">Child</a>"#).await;
    mount(&mock_server, "/b", "<p>B</p>").await;
    mount(&mock_server, "/a/child", "<p>Child</p>").await;

    let dir = TempDir::new().unwrap();
    let mut config = create_test_config(&dir);
    config.crawler.traversal_order = TraversalOrder::BreadthFirst;
    let output_path = config.output.path.clone();
    let start = parse_start_url(&mock_server.uri()).unwrap();

    crawl(config, start).await.unwrap();

    let content = std::fs::read_to_string(&output_path).unwrap();
    let urls: Vec<&str> = content
        .lines()
        .filter_map(|line| line.strip_prefix("URL: "))
        .collect();
    let base = mock_server.uri();
    assert_eq!(
        urls,
        vec![
            format!("{}/", base),
            format!("{}/a", base),
            format!("{}/b", base),
            format!("{}/a/child", base),
        ]
    );
}

#[tokio::test]
async fn test_session_exposes_sink_and_frontier() {
    let mock_server = MockServer::start().await;
    mount(&mock_server, "/", r#"<p>Root</p><a href="/x">X</a>"#).await;
    mount(&mock_server, "/x", "<p>X</p>").await;

    let dir = TempDir::new().unwrap();
    let config = create_test_config(&dir);
    let sink = TextFileSink::new(&config.output.path);
    let start = parse_start_url(&mock_server.uri()).unwrap();

    let mut session = CrawlSession::new(config, start, sink).unwrap();
    session.run().await;

    assert_eq!(session.sink().blocks_written(), 2);
    assert_eq!(session.frontier().visited_count(), 2);
    assert_eq!(session.frontier().pending_count(), 0);

    let summary = session.into_summary();
    assert!(summary.finished_at.is_some());
    assert_eq!(summary.pages_processed, 2);
}
