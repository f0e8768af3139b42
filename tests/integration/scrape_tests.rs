//! Integration tests for the scraper
//!
//! These tests use wiremock to serve listing pages and run the full
//! fetch → extract → persist cycle end-to-end.

use carwale_scrape::config::{defaults, Config, HttpConfig, OutputConfig, ScraperConfig};
use carwale_scrape::crawler::{Fetcher, FileDebugSink, Paginator};
use carwale_scrape::output::{persist, sample_records};
use carwale_scrape::{run_scrape, ListingRecord, ScrapeError, PLACEHOLDER};
use std::collections::HashMap;
use tempfile::TempDir;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

const LISTING_PATH: &str = "/used/cars-for-sale/";

/// Creates a test configuration pointing at the mock server
fn create_test_config(server: &MockServer, pages: u32, dir: &TempDir) -> Config {
    Config {
        scraper: ScraperConfig {
            base_url: format!("{}{}", server.uri(), LISTING_PATH),
            pages,
            delay_ms: 0,
            ..ScraperConfig::default()
        },
        output: OutputConfig {
            data_dir: dir.path().join("data"),
            debug_dir: dir.path().join("debug"),
            ..OutputConfig::default()
        },
        ..Config::default()
    }
}

/// Builds a listing page with `count` fully populated cards
fn listing_page(page: u32, count: usize) -> String {
    let cards: String = (1..=count)
        .map(|i| {
            format!(
                r#"<div class="car-card">
                    <h2 class="title">Car {page}-{i}</h2>
                    <div class="price">₹{page},{i}0,000</div>
                    <div class="year">20{i:02}</div>
                    <div class="km-driven">{i}5,000 km</div>
                    <div class="fuel-type">Petrol</div>
                    <div class="location">Mumbai</div>
                    <div class="seller-type">Dealer</div>
                    <div class="emi">₹1{i},000</div>
                </div>"#
            )
        })
        .collect();

    format!(
        r#"<html><head><title>Used Cars - Page {page}</title></head>
        <body><nav class="menu">Home</nav>{cards}</body></html>"#
    )
}

async fn mount_page(server: &MockServer, page: u32, template: ResponseTemplate) {
    Mock::given(method("GET"))
        .and(path(LISTING_PATH))
        .and(query_param("page", page.to_string()))
        .respond_with(template)
        .mount(server)
        .await;
}

fn html(body: String) -> ResponseTemplate {
    ResponseTemplate::new(200).set_body_raw(body, "text/html; charset=utf-8")
}

fn titles(records: &[ListingRecord]) -> Vec<String> {
    records.iter().map(|r| r.title().to_string()).collect()
}

#[tokio::test]
async fn test_404_page_is_skipped() {
    let server = MockServer::start().await;
    for page in [1, 2, 4, 5] {
        mount_page(&server, page, html(listing_page(page, 2))).await;
    }
    mount_page(
        &server,
        3,
        ResponseTemplate::new(404).set_body_string("<html>Not Found</html>"),
    )
    .await;

    let dir = TempDir::new().unwrap();
    let config = create_test_config(&server, 5, &dir);

    let (summary, outcome) = run_scrape(&config).await.expect("run should complete");

    assert_eq!(summary.pages_attempted, 5);
    assert_eq!(summary.succeeded_pages(), vec![1, 2, 4, 5]);
    assert_eq!(summary.failed_page_numbers(), vec![3]);
    assert!(summary.failed_pages[0].error.contains("404"));
    assert!(summary.failed_pages[0].error.contains("<html>Not Found</html>"));
    assert_eq!(summary.total_records(), 8);

    assert!(!outcome.used_sample_data);
    assert_eq!(outcome.records_written, 8);

    let json = std::fs::read_to_string(&outcome.json_path).unwrap();
    let records: Vec<ListingRecord> = serde_json::from_str(&json).unwrap();
    assert_eq!(
        titles(&records),
        ["Car 1-1", "Car 1-2", "Car 2-1", "Car 2-2", "Car 4-1", "Car 4-2", "Car 5-1", "Car 5-2"]
    );
}

#[tokio::test]
async fn test_status_error_carries_body() {
    let server = MockServer::start().await;
    mount_page(
        &server,
        1,
        ResponseTemplate::new(503).set_body_string("maintenance"),
    )
    .await;

    let dir = TempDir::new().unwrap();
    let config = create_test_config(&server, 1, &dir);
    let fetcher = Fetcher::new(&config.scraper, &config.http).unwrap();

    match fetcher.fetch(1).await {
        Err(ScrapeError::Status { status, body, url }) => {
            assert_eq!(status, 503);
            assert_eq!(body.as_deref(), Some("maintenance"));
            assert!(url.ends_with("/used/cars-for-sale/?page=1"));
        }
        other => panic!("expected status error, got {:?}", other),
    }
}

/// Answers one request with `body` and returns the raw request head
async fn capture_request(listener: TcpListener, body: String) -> String {
    let (mut stream, _) = listener.accept().await.unwrap();

    let mut request = Vec::new();
    let mut buf = [0u8; 1024];
    while !request.windows(4).any(|w| w == b"\r\n\r\n") {
        let n = stream.read(&mut buf).await.unwrap();
        if n == 0 {
            break;
        }
        request.extend_from_slice(&buf[..n]);
    }

    let response = format!(
        "HTTP/1.1 200 OK\r\ncontent-type: text/html; charset=utf-8\r\ncontent-length: {}\r\nconnection: close\r\n\r\n{}",
        body.len(),
        body
    );
    stream.write_all(response.as_bytes()).await.unwrap();

    String::from_utf8(request).unwrap()
}

#[tokio::test]
async fn test_static_headers_are_sent() {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let server = tokio::spawn(capture_request(listener, listing_page(1, 1)));

    let scraper = ScraperConfig {
        base_url: format!("http://{}{}", addr, LISTING_PATH),
        ..ScraperConfig::default()
    };
    let fetcher = Fetcher::new(&scraper, &HttpConfig::default()).unwrap();

    let body = fetcher.fetch(1).await.unwrap();
    assert!(body.contains("Car 1-1"));

    let request = server.await.unwrap();
    let mut lines = request.split("\r\n");
    assert_eq!(
        lines.next(),
        Some("GET /used/cars-for-sale/?page=1 HTTP/1.1")
    );

    let headers: HashMap<String, &str> = lines
        .filter_map(|line| line.split_once(": "))
        .map(|(name, value)| (name.to_ascii_lowercase(), value))
        .collect();

    for (name, expected) in [
        ("user-agent", defaults::USER_AGENT),
        ("accept", defaults::ACCEPT),
        ("accept-language", defaults::ACCEPT_LANGUAGE),
        ("connection", defaults::CONNECTION),
        ("upgrade-insecure-requests", defaults::UPGRADE_INSECURE_REQUESTS),
        ("cache-control", defaults::CACHE_CONTROL),
    ] {
        assert_eq!(headers.get(name).copied(), Some(expected), "header {}", name);
    }
}

#[tokio::test]
async fn test_declared_charset_page_is_scraped_and_dumped() {
    let server = MockServer::start().await;
    mount_page(&server, 1, html(listing_page(1, 1))).await;

    // "Café Edition" encoded as ISO-8859-1
    let mut latin1 = br#"<html><body><div class="car-card"><h2 class="title">Caf"#.to_vec();
    latin1.push(0xe9);
    latin1.extend_from_slice(br#" Edition</h2><div class="price">Rs. 7,00,000</div></div></body></html>"#);
    mount_page(
        &server,
        2,
        ResponseTemplate::new(200).set_body_raw(latin1, "text/html; charset=iso-8859-1"),
    )
    .await;

    mount_page(
        &server,
        3,
        ResponseTemplate::new(500).set_body_string("upstream timeout"),
    )
    .await;
    Mock::given(method("GET"))
        .and(path(LISTING_PATH))
        .and(query_param("page", "4"))
        .respond_with(html(listing_page(4, 1)))
        .expect(1)
        .mount(&server)
        .await;

    let dir = TempDir::new().unwrap();
    let config = create_test_config(&server, 4, &dir);
    let fetcher = Fetcher::new(&config.scraper, &config.http).unwrap();
    let sink = FileDebugSink::new(config.output.debug_dir.clone());
    let mut paginator = Paginator::new(fetcher, Box::new(sink), config.scraper.delay());

    let summary = paginator.run(4).await;

    assert_eq!(summary.succeeded_pages(), vec![1, 2, 4]);
    assert_eq!(summary.failed_page_numbers(), vec![3]);
    assert!(summary.failed_pages[0].error.contains("HTTP 500"));
    assert!(summary.failed_pages[0].error.contains("upstream timeout"));

    let records = paginator.accumulator().records();
    assert_eq!(titles(records), ["Car 1-1", "Café Edition", "Car 4-1"]);
    assert_eq!(records[1].price(), "Rs. 7,00,000");

    let dump = std::fs::read_to_string(config.output.debug_dir.join("debug_page_2.html")).unwrap();
    assert!(dump.contains("Café Edition"));
    assert!(!config.output.debug_dir.join("debug_page_3.html").exists());
}

#[tokio::test]
async fn test_debug_pages_written_for_fetched_pages_only() {
    let server = MockServer::start().await;
    mount_page(&server, 1, html(listing_page(1, 1))).await;
    mount_page(&server, 2, ResponseTemplate::new(500)).await;

    let dir = TempDir::new().unwrap();
    let config = create_test_config(&server, 2, &dir);

    run_scrape(&config).await.unwrap();

    let page1 = dir.path().join("debug").join("debug_page_1.html");
    let page2 = dir.path().join("debug").join("debug_page_2.html");
    assert_eq!(std::fs::read_to_string(page1).unwrap(), listing_page(1, 1));
    assert!(!page2.exists());
}

#[tokio::test]
async fn test_debug_dump_disabled() {
    let server = MockServer::start().await;
    mount_page(&server, 1, html(listing_page(1, 1))).await;

    let dir = TempDir::new().unwrap();
    let mut config = create_test_config(&server, 1, &dir);
    config.output.dump_debug_html = false;

    run_scrape(&config).await.unwrap();

    assert!(!dir.path().join("debug").exists());
}

#[tokio::test]
async fn test_empty_run_writes_samples() {
    let server = MockServer::start().await;
    for page in 1..=2 {
        mount_page(
            &server,
            page,
            html("<html><body><p>No results</p></body></html>".to_string()),
        )
        .await;
    }

    let dir = TempDir::new().unwrap();
    let config = create_test_config(&server, 2, &dir);

    let (summary, outcome) = run_scrape(&config).await.unwrap();

    assert_eq!(summary.total_records(), 0);
    assert!(summary.failed_pages.is_empty());
    assert!(outcome.used_sample_data);

    let mut reader = csv::Reader::from_path(&outcome.csv_path).unwrap();
    let from_csv: Vec<ListingRecord> = reader.deserialize::<ListingRecord>().map(|r| r.unwrap()).collect();
    assert_eq!(from_csv, sample_records());
    assert_eq!(from_csv[0].title(), "Sample Car 1");
    assert_eq!(from_csv[0].price(), "₹5,00,000");
    assert_eq!(from_csv[0].year(), "2020");

    let json = std::fs::read_to_string(&outcome.json_path).unwrap();
    let from_json: Vec<ListingRecord> = serde_json::from_str(&json).unwrap();
    assert_eq!(from_json, sample_records());
}

#[tokio::test]
async fn test_exports_round_trip_accumulator() {
    let server = MockServer::start().await;
    mount_page(&server, 1, html(listing_page(1, 3))).await;
    // A sparse card leaves most fields as placeholders
    mount_page(
        &server,
        2,
        html(
            r#"<html><body><div class="listing-card">
                <h2 class="listing-title">Maruti "Dzire", ZXi</h2>
                <div class="car-location">Navi Mumbai</div>
            </div></body></html>"#
                .to_string(),
        ),
    )
    .await;

    let dir = TempDir::new().unwrap();
    let config = create_test_config(&server, 2, &dir);
    let fetcher = Fetcher::new(&config.scraper, &config.http).unwrap();
    let sink = FileDebugSink::new(config.output.debug_dir.clone());
    let mut paginator = Paginator::new(fetcher, Box::new(sink), config.scraper.delay());

    paginator.run(2).await;
    let expected = paginator.accumulator().records().to_vec();
    assert_eq!(expected.len(), 4);
    assert_eq!(expected[3].title(), r#"Maruti "Dzire", ZXi"#);
    assert_eq!(expected[3].price(), PLACEHOLDER);

    let outcome = persist(&expected, &config.output).unwrap();

    let csv_text = std::fs::read_to_string(&outcome.csv_path).unwrap();
    let mut lines = csv_text.lines();
    assert_eq!(
        lines.next(),
        Some("title,price,year,km_driven,fuel_type,location,seller_type,emi")
    );
    assert_eq!(lines.count(), expected.len());

    let mut reader = csv::Reader::from_path(&outcome.csv_path).unwrap();
    let from_csv: Vec<ListingRecord> = reader.deserialize::<ListingRecord>().map(|r| r.unwrap()).collect();
    assert_eq!(from_csv, expected);

    let json = std::fs::read_to_string(&outcome.json_path).unwrap();
    let from_json: Vec<ListingRecord> = serde_json::from_str(&json).unwrap();
    assert_eq!(from_json, expected);
}

#[tokio::test]
async fn test_fallback_listings_are_scraped() {
    let server = MockServer::start().await;
    mount_page(
        &server,
        1,
        html(
            r#"<html><body>
                <div class="UsedCarTile">
                    <h2 class="title">Toyota Innova Crysta</h2>
                    <div class="price">₹18,50,000</div>
                </div>
            </body></html>"#
                .to_string(),
        ),
    )
    .await;

    let dir = TempDir::new().unwrap();
    let config = create_test_config(&server, 1, &dir);

    let (summary, _) = run_scrape(&config).await.unwrap();
    assert_eq!(summary.total_records(), 1);

    let json = std::fs::read_to_string(config.output.json_path()).unwrap();
    let records: Vec<ListingRecord> = serde_json::from_str(&json).unwrap();
    assert_eq!(records[0].title(), "Toyota Innova Crysta");
    assert_eq!(records[0].price(), "₹18,50,000");
    assert_eq!(records[0].year(), PLACEHOLDER);
}
