use crate::support::{TEST_ACCEPT, TEST_USER_AGENT};
use shelf_crawl::config::HttpConfig;
use shelf_crawl::crawler::{FetchError, HttpFetcher, PageSource};
use url::Url;
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn test_http_config() -> HttpConfig {
    HttpConfig {
        accept: TEST_ACCEPT.to_string(),
        user_agent: TEST_USER_AGENT.to_string(),
    }
}

fn url_for(server: &MockServer, route: &str) -> Url {
    Url::parse(&format!("{}{}", server.uri(), route)).unwrap()
}

#[tokio::test]
async fn test_sends_configured_headers() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/page"))
        .and(header("user-agent", TEST_USER_AGENT))
        .and(header("accept", TEST_ACCEPT))
        .respond_with(ResponseTemplate::new(200).set_body_string("<h1>Hello</h1>"))
        .expect(1)
        .mount(&server)
        .await;

    let fetcher = HttpFetcher::new(&test_http_config()).unwrap();
    let doc = fetcher.fetch(&url_for(&server, "/page")).await.unwrap();

    assert_eq!(doc.first_text("h1").unwrap(), "Hello");
}

#[tokio::test]
async fn test_non_success_status_is_an_error() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/gone"))
        .respond_with(ResponseTemplate::new(404))
        .expect(1)
        .mount(&server)
        .await;

    let fetcher = HttpFetcher::new(&test_http_config()).unwrap();
    let err = fetcher.fetch(&url_for(&server, "/gone")).await.unwrap_err();

    assert!(matches!(err, FetchError::Status { status: 404, .. }));
    assert!(err.url().ends_with("/gone"));
}

#[tokio::test]
async fn test_server_error_is_not_retried() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/flaky"))
        .respond_with(ResponseTemplate::new(503))
        .expect(1)
        .mount(&server)
        .await;

    let fetcher = HttpFetcher::new(&test_http_config()).unwrap();
    let result = fetcher.fetch(&url_for(&server, "/flaky")).await;

    assert!(matches!(result, Err(FetchError::Status { status: 503, .. })));
}

#[tokio::test]
async fn test_connection_failure_is_a_network_error() {
    let fetcher = HttpFetcher::new(&test_http_config()).unwrap();
    let url = Url::parse("http://127.0.0.1:1/").unwrap();

    let result = fetcher.fetch(&url).await;
    assert!(matches!(result, Err(FetchError::Network { .. })));
}
