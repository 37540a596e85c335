use once_cell::sync::Lazy;
use serde::Deserialize;

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct CatalogConfig {
    pub dataset: DatasetConfig,
    pub search: SearchConfig,
    pub storage: StorageConfig,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct DatasetConfig {
    /// Relative path of the listings JSON, resolved against the page URL.
    pub url: String,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct SearchConfig {
    /// Quiet period before the search input triggers a recompute.
    pub debounce_ms: u32,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct StorageConfig {
    pub favorites_key: String,
    pub dark_mode_key: String,
}

/// Default configuration embedded in the binary
const DEFAULT_CONFIG: &str = r#"
[dataset]
url = "./airbnb_sf_listings_500.json"

[search]
debounce_ms = 300

[storage]
favorites_key = "airbnbFavorites"
dark_mode_key = "darkMode"
"#;

static DEFAULT: Lazy<CatalogConfig> = Lazy::new(|| match parse_config(DEFAULT_CONFIG) {
    Ok(config) => config,
    Err(e) => {
        log::warn!("embedded config rejected, using built-in values: {}", e);
        CatalogConfig::builtin()
    }
});

/// Parse a TOML configuration document.
pub fn parse_config(contents: &str) -> anyhow::Result<CatalogConfig> {
    let config: CatalogConfig = toml::from_str(contents)?;
    if config.dataset.url.trim().is_empty() {
        anyhow::bail!("dataset.url must not be empty");
    }
    Ok(config)
}

/// Load configuration
///
/// Uses `override_toml` when given and valid, otherwise the embedded default.
pub fn load_config(override_toml: Option<&str>) -> CatalogConfig {
    if let Some(contents) = override_toml {
        match parse_config(contents) {
            Ok(config) => return config,
            Err(e) => log::warn!("config override rejected: {}", e),
        }
    }
    DEFAULT.clone()
}

impl CatalogConfig {
    fn builtin() -> Self {
        Self {
            dataset: DatasetConfig {
                url: "./airbnb_sf_listings_500.json".to_string(),
            },
            search: SearchConfig { debounce_ms: 300 },
            storage: StorageConfig {
                favorites_key: "airbnbFavorites".to_string(),
                dark_mode_key: "darkMode".to_string(),
            },
        }
    }
}

impl Default for CatalogConfig {
    fn default() -> Self {
        DEFAULT.clone()
    }
}
