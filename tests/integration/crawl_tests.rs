use crate::support::{
    create_test_config, detail_page, listing_page, mount_page, mount_status, root_page,
};
use shelf_crawl::crawler::{crawl, Coordinator, HttpFetcher};
use shelf_crawl::output::{configured_sinks, export_records};
use tempfile::TempDir;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Travel has three listing pages (page 2 broken); Mystery has one page with a missing book.
async fn mount_catalogue(server: &MockServer) {
    mount_page(
        server,
        "/",
        root_page(&[("Travel", "travel_2"), ("Mystery", "mystery_3")]),
    )
    .await;

    mount_page(
        server,
        "/catalogue/category/books/travel_2/index.html",
        listing_page(5, &["t1", "t2"]),
    )
    .await;
    mount_status(server, "/catalogue/category/books/travel_2/page-2.html", 500).await;
    mount_page(
        server,
        "/catalogue/category/books/travel_2/page-3.html",
        listing_page(5, &["t5"]),
    )
    .await;

    mount_page(
        server,
        "/catalogue/category/books/mystery_3/index.html",
        listing_page(2, &["m1", "m2"]),
    )
    .await;

    mount_page(
        server,
        "/catalogue/t1/index.html",
        detail_page("t1", "One", Some("First travel book")),
    )
    .await;
    mount_page(server, "/catalogue/t2/index.html", detail_page("t2", "Two", None)).await;
    mount_page(
        server,
        "/catalogue/t5/index.html",
        detail_page("t5", "Five", Some("Last travel book")),
    )
    .await;
    mount_page(server, "/catalogue/m1/index.html", detail_page("m1", "Four", None)).await;
    mount_status(server, "/catalogue/m2/index.html", 404).await;
}

#[tokio::test]
async fn test_full_crawl_isolates_failures() {
    let server = MockServer::start().await;
    mount_catalogue(&server).await;
    let out_dir = TempDir::new().unwrap();

    let config = create_test_config(&server, 2, out_dir.path());
    let outcome = crawl(config).await.expect("Crawl setup failed");

    let titles: Vec<_> = outcome.records.iter().map(|r| r.title.as_str()).collect();
    assert_eq!(titles, ["t1", "t2", "t5", "m1"]);

    let categories: Vec<_> = outcome
        .records
        .iter()
        .map(|r| r.category.as_str())
        .collect();
    assert_eq!(categories, ["Travel", "Travel", "Travel", "Mystery"]);

    assert_eq!(outcome.stats.categories_total, 2);
    assert_eq!(outcome.stats.categories_failed, 0);
    assert_eq!(outcome.stats.pages_total, 4);
    assert_eq!(outcome.stats.pages_failed, 1);
    assert_eq!(outcome.stats.items_total, 5);
    assert_eq!(outcome.stats.items_failed, 1);
    assert_eq!(outcome.stats.records, 4);
}

#[tokio::test]
async fn test_extracted_fields() {
    let server = MockServer::start().await;
    mount_catalogue(&server).await;
    let out_dir = TempDir::new().unwrap();

    let config = create_test_config(&server, 2, out_dir.path());
    let outcome = crawl(config).await.unwrap();
    let records = outcome.records.as_slice();

    assert_eq!(records[0].price, "12.50");
    assert_eq!(records[0].rating, "One");
    assert_eq!(records[0].description, "First travel book");
    assert_eq!(records[0].identifier, "upc-t1");
    assert_eq!(records[1].description, "----");
}

#[tokio::test]
async fn test_latin1_price_artifact_is_stripped() {
    let server = MockServer::start().await;
    mount_page(&server, "/", root_page(&[("Poetry", "poetry_23")])).await;
    mount_page(
        &server,
        "/catalogue/category/books/poetry_23/index.html",
        listing_page(1, &["attic"]),
    )
    .await;

    // UTF-8 bytes declared as Latin-1 decode the pound sign to "Â£"
    Mock::given(method("GET"))
        .and(path("/catalogue/attic/index.html"))
        .respond_with(ResponseTemplate::new(200).set_body_raw(
            detail_page("attic", "Three", None).replace("£12.50", "£51.77"),
            "text/html; charset=iso-8859-1",
        ))
        .mount(&server)
        .await;

    let out_dir = TempDir::new().unwrap();
    let outcome = crawl(create_test_config(&server, 20, out_dir.path()))
        .await
        .unwrap();

    assert_eq!(outcome.records.len(), 1);
    assert_eq!(outcome.records.as_slice()[0].price, "51.77");
}

#[tokio::test]
async fn test_root_failure_discovers_nothing() {
    let server = MockServer::start().await;
    mount_status(&server, "/", 503).await;
    let out_dir = TempDir::new().unwrap();

    let config = create_test_config(&server, 20, out_dir.path());
    let coordinator = Coordinator::new(config.clone(), HttpFetcher::new(&config.http).unwrap())
        .unwrap();

    assert!(coordinator.discover_categories().await.is_empty());

    let outcome = coordinator.run().await;
    assert!(outcome.records.is_empty());
    assert_eq!(outcome.stats.categories_total, 0);
}

#[tokio::test]
async fn test_broken_category_does_not_affect_siblings() {
    let server = MockServer::start().await;
    mount_page(
        &server,
        "/",
        root_page(&[("Broken", "broken_9"), ("Mystery", "mystery_3")]),
    )
    .await;
    mount_status(&server, "/catalogue/category/books/broken_9/index.html", 500).await;
    mount_page(
        &server,
        "/catalogue/category/books/mystery_3/index.html",
        listing_page(1, &["m1"]),
    )
    .await;
    mount_page(&server, "/catalogue/m1/index.html", detail_page("m1", "Four", None)).await;

    let out_dir = TempDir::new().unwrap();
    let outcome = crawl(create_test_config(&server, 20, out_dir.path()))
        .await
        .unwrap();

    assert_eq!(outcome.records.len(), 1);
    assert_eq!(outcome.records.as_slice()[0].category, "Mystery");
    assert_eq!(outcome.stats.categories_failed, 1);
}

#[tokio::test]
async fn test_crawl_then_export() {
    let server = MockServer::start().await;
    mount_catalogue(&server).await;
    let out_dir = TempDir::new().unwrap();

    let config = create_test_config(&server, 2, out_dir.path());
    let sinks = configured_sinks(&config.output);
    let outcome = crawl(config).await.unwrap();

    assert_eq!(export_records(&sinks, outcome.records.as_slice()), 0);

    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .from_path(out_dir.path().join("books.csv"))
        .unwrap();
    let headers = reader.headers().unwrap().clone();
    assert_eq!(
        headers.iter().collect::<Vec<_>>(),
        ["Category", "Title", "Price,£", "Rating", "Description", "UPC"]
    );

    let rows: Vec<csv::StringRecord> = reader.records().map(|r| r.unwrap()).collect();
    assert_eq!(rows.len(), 4);
    assert_eq!(
        rows[0].iter().collect::<Vec<_>>(),
        ["Travel", "t1", "12.50", "One", "First travel book", "upc-t1"]
    );

    let xlsx = std::fs::read(out_dir.path().join("books.xlsx")).unwrap();
    assert!(xlsx.starts_with(b"PK"));
}
