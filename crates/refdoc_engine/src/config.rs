use std::path::PathBuf;
use std::time::Duration;

use scraper::Selector;
use thiserror::Error;

use crate::fetch::FetchSettings;
use crate::links::DiscoverySettings;

pub const DEFAULT_INDEX_URL: &str = "https://openservice.aliexpress.com/doc/api.htm";
pub const DEFAULT_OUTPUT_PATH: &str = "aliexpress_affiliate_api_docs.md";

/// Everything one harvest run needs to know.
#[derive(Debug, Clone)]
pub struct HarvestConfig {
    /// Entry-point URL of the documentation index.
    pub index_url: String,
    pub discovery: DiscoverySettings,
    /// Candidate regions for the main content, tried in order.
    pub content_root_selectors: Vec<String>,
    pub table_selector: String,
    pub output_path: PathBuf,
    /// Extra wait after loading the index; SPAs often need a moment.
    pub index_settle: Duration,
    /// Extra wait after loading each page.
    pub page_settle: Duration,
    pub fetch: FetchSettings,
}

impl Default for HarvestConfig {
    fn default() -> Self {
        Self {
            index_url: DEFAULT_INDEX_URL.to_string(),
            discovery: DiscoverySettings::default(),
            content_root_selectors: [
                "article",
                "main",
                ".content",
                ".doc-content",
                ".markdown-body",
                ".container",
                "body",
            ]
            .iter()
            .map(|s| s.to_string())
            .collect(),
            table_selector: "table".to_string(),
            output_path: PathBuf::from(DEFAULT_OUTPUT_PATH),
            index_settle: Duration::from_millis(1500),
            page_settle: Duration::from_millis(600),
            fetch: FetchSettings::default(),
        }
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid {context} selector `{selector}`")]
    InvalidSelector {
        context: &'static str,
        selector: String,
    },
    #[error("index url must not be empty")]
    EmptyIndexUrl,
}

impl HarvestConfig {
    /// Reject configurations whose selectors cannot compile. Extraction
    /// treats unknown selectors as non-matching, so bad ones must surface
    /// here instead.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.index_url.is_empty() {
            return Err(ConfigError::EmptyIndexUrl);
        }
        check_selector("link", &self.discovery.link_selector)?;
        check_selector("table", &self.table_selector)?;
        for candidate in &self.content_root_selectors {
            check_selector("content root", candidate)?;
        }
        Ok(())
    }
}

fn check_selector(context: &'static str, selector: &str) -> Result<(), ConfigError> {
    Selector::parse(selector).map_err(|_| ConfigError::InvalidSelector {
        context,
        selector: selector.to_string(),
    })?;
    Ok(())
}
