use crate::{UrlError, UrlResult};
use url::Url;

/// Parses the crawl root, accepting only http and https
pub fn parse_root(url_str: &str) -> UrlResult<Url> {
    let url = Url::parse(url_str).map_err(|e| UrlError::Parse(e.to_string()))?;
    check_scheme(url)
}

/// Resolves an href against a base URL
///
/// Surrounding whitespace is ignored. The result must be an http(s) URL.
///
/// # Examples
///
/// ```
/// use shelf_crawl::url::resolve_link;
/// use url::Url;
///
/// let base = Url::parse("https://example.com/catalogue/category/books/travel_2/index.html").unwrap();
/// let item = resolve_link(&base, "../../../a-light-in-the-attic_1000/index.html").unwrap();
/// assert_eq!(item.as_str(), "https://example.com/catalogue/a-light-in-the-attic_1000/index.html");
/// ```
pub fn resolve_link(base: &Url, href: &str) -> UrlResult<Url> {
    let href = href.trim();

    let joined = base.join(href).map_err(|e| UrlError::Join {
        base: base.to_string(),
        href: href.to_string(),
        message: e.to_string(),
    })?;

    check_scheme(joined)
}

/// Builds the URL of listing page `page` for a category
///
/// `template` is a relative path containing `{n}`, resolved against the
/// category's first listing page.
pub fn page_url(listing_url: &Url, template: &str, page: u32) -> UrlResult<Url> {
    resolve_link(listing_url, &template.replace("{n}", &page.to_string()))
}

fn check_scheme(url: Url) -> UrlResult<Url> {
    match url.scheme() {
        "http" | "https" => Ok(url),
        other => Err(UrlError::InvalidScheme(format!(
            "Only HTTP and HTTPS schemes are supported, got: {}",
            other
        ))),
    }
}
