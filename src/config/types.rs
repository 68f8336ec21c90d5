use serde::Deserialize;

/// Catalogue crawled when no configuration says otherwise
pub const DEFAULT_ROOT_URL: &str = "https://books.toscrape.com/";

/// Fixed page size of the catalogue's listing pages
pub const DEFAULT_ITEMS_PER_PAGE: u32 = 20;

pub const DEFAULT_ACCEPT: &str = "text/html,application/xhtml+xml,application/xml;q=0.9,image/avif,image/webp,image/apng,*/*;q=0.8,application/signed-exchange;v=b3;q=0.7";

pub const DEFAULT_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/134.0.0.0 Safari/537.36";

/// Main configuration structure for Shelf-Crawl
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    pub crawler: CrawlerConfig,
    pub http: HttpConfig,
    pub output: OutputConfig,
}

/// Crawl target configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct CrawlerConfig {
    /// Root page of the catalogue; its navigation lists the categories
    #[serde(rename = "root-url")]
    pub root_url: String,

    /// Number of items the site shows per listing page
    #[serde(rename = "items-per-page")]
    pub items_per_page: u32,

    /// Relative path of listing page N, `{n}` is replaced by the page number
    #[serde(rename = "page-path-template")]
    pub page_path_template: String,
}

impl Default for CrawlerConfig {
    fn default() -> Self {
        Self {
            root_url: DEFAULT_ROOT_URL.to_string(),
            items_per_page: DEFAULT_ITEMS_PER_PAGE,
            page_path_template: "page-{n}.html".to_string(),
        }
    }
}

/// Outbound request headers
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct HttpConfig {
    pub accept: String,

    #[serde(rename = "user-agent")]
    pub user_agent: String,
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            accept: DEFAULT_ACCEPT.to_string(),
            user_agent: DEFAULT_USER_AGENT.to_string(),
        }
    }
}

/// Export configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// CSV file, appended to on every run
    #[serde(rename = "csv-path")]
    pub csv_path: String,

    /// XLSX workbook, overwritten on every run
    #[serde(rename = "xlsx-path")]
    pub xlsx_path: String,

    /// Worksheet name inside the workbook
    #[serde(rename = "sheet-name")]
    pub sheet_name: String,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            csv_path: "books.csv".to_string(),
            xlsx_path: "books.xlsx".to_string(),
            sheet_name: "Books".to_string(),
        }
    }
}
