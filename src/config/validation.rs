use crate::config::types::{Config, CrawlerConfig, HttpConfig, OutputConfig};
use crate::ConfigError;
use url::Url;

/// Validates the entire configuration
pub fn validate(config: &Config) -> Result<(), ConfigError> {
    validate_crawler_config(&config.crawler)?;
    validate_http_config(&config.http)?;
    validate_output_config(&config.output)?;
    Ok(())
}

/// Validates crawl target configuration
fn validate_crawler_config(config: &CrawlerConfig) -> Result<(), ConfigError> {
    let root = Url::parse(&config.root_url)
        .map_err(|e| ConfigError::InvalidUrl(format!("Invalid root_url: {}", e)))?;

    if root.scheme() != "http" && root.scheme() != "https" {
        return Err(ConfigError::InvalidUrl(format!(
            "root_url must use http or https, got '{}'",
            config.root_url
        )));
    }

    if config.items_per_page < 1 {
        return Err(ConfigError::Validation(format!(
            "items_per_page must be >= 1, got {}",
            config.items_per_page
        )));
    }

    if !config.page_path_template.contains("{n}") {
        return Err(ConfigError::Validation(format!(
            "page_path_template must contain '{{n}}', got '{}'",
            config.page_path_template
        )));
    }

    Ok(())
}

/// Validates outbound header values
fn validate_http_config(config: &HttpConfig) -> Result<(), ConfigError> {
    if config.accept.trim().is_empty() {
        return Err(ConfigError::Validation("accept cannot be empty".to_string()));
    }

    if config.user_agent.trim().is_empty() {
        return Err(ConfigError::Validation(
            "user_agent cannot be empty".to_string(),
        ));
    }

    Ok(())
}

/// Validates output configuration
fn validate_output_config(config: &OutputConfig) -> Result<(), ConfigError> {
    if config.csv_path.is_empty() {
        return Err(ConfigError::Validation(
            "csv_path cannot be empty".to_string(),
        ));
    }

    if config.xlsx_path.is_empty() {
        return Err(ConfigError::Validation(
            "xlsx_path cannot be empty".to_string(),
        ));
    }

    // Excel caps sheet names at 31 characters
    if config.sheet_name.is_empty() || config.sheet_name.chars().count() > 31 {
        return Err(ConfigError::Validation(format!(
            "sheet_name must be 1 to 31 characters, got '{}'",
            config.sheet_name
        )));
    }

    Ok(())
}
