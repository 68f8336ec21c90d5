//! Catalogue fixtures served from a wiremock server

use shelf_crawl::config::Config;
use std::path::Path;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

pub const TEST_USER_AGENT: &str = "ShelfTest/1.0";
pub const TEST_ACCEPT: &str = "text/html";

/// Creates a test configuration pointing at the mock server
pub fn create_test_config(server: &MockServer, items_per_page: u32, out_dir: &Path) -> Config {
    let mut config = Config::default();
    config.crawler.root_url = format!("{}/", server.uri());
    config.crawler.items_per_page = items_per_page;
    config.http.accept = TEST_ACCEPT.to_string();
    config.http.user_agent = TEST_USER_AGENT.to_string();
    config.output.csv_path = out_dir.join("books.csv").to_string_lossy().into_owned();
    config.output.xlsx_path = out_dir.join("books.xlsx").to_string_lossy().into_owned();
    config
}

pub fn root_page(categories: &[(&str, &str)]) -> String {
    let links: String = categories
        .iter()
        .map(|(name, slug)| {
            format!(
                "<li>\n<a href=\"catalogue/category/books/{}/index.html\">\n    {}\n</a>\n</li>",
                slug, name
            )
        })
        .collect();

    format!(
        r#"<html><body><div class="side_categories"><ul class="nav nav-list"><li>
           <a href="catalogue/category/books_1/index.html">Books</a>
           <ul>{}</ul></li></ul></div></body></html>"#,
        links
    )
}

pub fn listing_page(total: u32, items: &[&str]) -> String {
    let articles: String = items
        .iter()
        .map(|slug| {
            format!(
                r#"<li class="col-xs-6"><article class="product_pod">
                     <div class="image_container"><a href="../../../{0}/index.html"><img src="x.jpg" alt="{0}"></a></div>
                     <h3><a href="../../../{0}/index.html" title="{0}">{0}</a></h3>
                   </article></li>"#,
                slug
            )
        })
        .collect();

    format!(
        r#"<html><body>
           <form method="get" class="form-horizontal">
             <strong>{}</strong> results - showing <strong>1</strong> to <strong>{}</strong>.
           </form>
           <ol class="row">{}</ol>
           </body></html>"#,
        total,
        items.len(),
        articles
    )
}

pub fn detail_page(title: &str, rating: &str, description: Option<&str>) -> String {
    let description = description
        .map(|text| {
            format!(
                r#"<div id="product_description" class="sub-header"><h2>Product Description</h2></div>
                   <p>{}</p>"#,
                text
            )
        })
        .unwrap_or_default();

    format!(
        r#"<html><body><article class="product_page">
             <div class="product_main">
               <h1>{0}</h1>
               <p class="price_color">£12.50</p>
               <p class="star-rating {1}"><i class="icon-star"></i></p>
             </div>
             {2}
             <table class="table table-striped"><tr><th>UPC</th><td>upc-{0}</td></tr></table>
           </article></body></html>"#,
        title, rating, description
    )
}

/// Serves `body` at `route` with a 200
pub async fn mount_page(server: &MockServer, route: &str, body: String) {
    Mock::given(method("GET"))
        .and(path(route))
        .respond_with(ResponseTemplate::new(200).set_body_raw(body, "text/html; charset=utf-8"))
        .mount(server)
        .await;
}

/// Serves an empty response with `status` at `route`
pub async fn mount_status(server: &MockServer, route: &str, status: u16) {
    Mock::given(method("GET"))
        .and(path(route))
        .respond_with(ResponseTemplate::new(status))
        .mount(server)
        .await;
}
