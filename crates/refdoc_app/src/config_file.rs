use std::fs;
use std::path::PathBuf;
use std::time::Duration;

use refdoc_engine::HarvestConfig;
use serde::Deserialize;
use thiserror::Error;

/// On-disk overlay of the engine defaults; every field optional so partial
/// configs compose with the built-in values.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
struct ConfigFile {
    index_url: Option<String>,
    link_selector: Option<String>,
    link_prefix: Option<String>,
    category_filter: Option<Vec<String>>,
    content_root_selectors: Option<Vec<String>>,
    table_selector: Option<String>,
    output_path: Option<PathBuf>,
    index_settle_ms: Option<u64>,
    page_settle_ms: Option<u64>,
    request_timeout_secs: Option<u64>,
}

#[derive(Debug, Error)]
pub enum ConfigFileError {
    #[error("could not read {path}: {source}")]
    Read {
        path: String,
        source: std::io::Error,
    },
    #[error("could not parse {path}: {source}")]
    Parse {
        path: String,
        source: ron::error::SpannedError,
    },
}

/// Build the run configuration: engine defaults, overlaid with the RON file
/// at `path` when one is given.
pub fn load(path: Option<&str>) -> Result<HarvestConfig, ConfigFileError> {
    let mut config = HarvestConfig::default();
    let Some(path) = path else {
        return Ok(config);
    };

    let content = fs::read_to_string(path).map_err(|source| ConfigFileError::Read {
        path: path.to_string(),
        source,
    })?;
    let overlay: ConfigFile = ron::from_str(&content).map_err(|source| ConfigFileError::Parse {
        path: path.to_string(),
        source,
    })?;

    apply(&mut config, overlay);
    Ok(config)
}

fn apply(config: &mut HarvestConfig, overlay: ConfigFile) {
    if let Some(value) = overlay.index_url {
        config.index_url = value;
    }
    if let Some(value) = overlay.link_selector {
        config.discovery.link_selector = value;
    }
    if let Some(value) = overlay.link_prefix {
        config.discovery.link_prefix = value;
    }
    if let Some(value) = overlay.category_filter {
        config.discovery.category_filter = Some(value);
    }
    if let Some(value) = overlay.content_root_selectors {
        config.content_root_selectors = value;
    }
    if let Some(value) = overlay.table_selector {
        config.table_selector = value;
    }
    if let Some(value) = overlay.output_path {
        config.output_path = value;
    }
    if let Some(value) = overlay.index_settle_ms {
        config.index_settle = Duration::from_millis(value);
    }
    if let Some(value) = overlay.page_settle_ms {
        config.page_settle = Duration::from_millis(value);
    }
    if let Some(value) = overlay.request_timeout_secs {
        config.fetch.request_timeout = Duration::from_secs(value);
    }
}
