use std::collections::BTreeMap;
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use adkit_core::{LinkBuilderType, LinkChannel, LinkProduct};
use serde::{Deserialize, Serialize};
use thiserror::Error;

mod defaults;

const APP_DIR: &str = "adkit";
const CONFIG_FILENAME: &str = "config.toml";

/// The campaign vocabulary the generators draw from. Compiled-in defaults
/// cover the current account setup; a config file overrides list by list.
#[derive(Debug, Clone, Serialize)]
pub struct AppConfig {
    pub objectives: Vec<String>,
    pub brandings: Vec<String>,
    pub categories: Vec<String>,
    pub products_by_brand: BTreeMap<String, Vec<String>>,
    pub pages: Vec<String>,
    pub ad_set_categories: Vec<String>,
    pub locations: Vec<String>,
    pub link_channels: Vec<LinkChannel>,
    pub link_builder_types: Vec<LinkBuilderType>,
    pub link_products: Vec<LinkProduct>,
}

impl AppConfig {
    pub fn products_for_brand(&self, brand: &str) -> Option<&[String]> {
        self.products_by_brand
            .get(brand)
            .map(|products| products.as_slice())
    }

    /// Looks a channel up by its display label (case-insensitive) or by
    /// its raw fragment value.
    pub fn find_channel(&self, raw: &str) -> Option<&LinkChannel> {
        self.link_channels
            .iter()
            .find(|c| c.label.eq_ignore_ascii_case(raw) || c.value == raw)
    }

    pub fn find_builder_type(&self, raw: &str) -> Option<&LinkBuilderType> {
        self.link_builder_types
            .iter()
            .find(|t| t.label.eq_ignore_ascii_case(raw) || t.value == raw)
    }

    pub fn find_link_product(&self, product: &str) -> Option<&LinkProduct> {
        self.link_products.iter().find(|p| p.product == product)
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing home directory")]
    MissingHomeDir,
    #[error("invalid config path: {0}")]
    InvalidConfigPath(PathBuf),
    #[error("config file not found: {0}")]
    MissingConfigFile(PathBuf),
    #[error("empty {0} list in config")]
    EmptyCatalog(&'static str),
    #[error("failed to read config file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse config file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

pub type Result<T> = std::result::Result<T, ConfigError>;

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct ConfigFile {
    objectives: Option<Vec<String>>,
    brandings: Option<Vec<String>>,
    categories: Option<Vec<String>>,
    products_by_brand: Option<BTreeMap<String, Vec<String>>>,
    pages: Option<Vec<String>>,
    ad_set_categories: Option<Vec<String>>,
    locations: Option<Vec<String>>,
    link_channels: Option<Vec<LinkChannel>>,
    link_builder_types: Option<Vec<LinkBuilderType>>,
    link_products: Option<Vec<LinkProduct>>,
}

pub fn load(config_path: Option<PathBuf>) -> Result<AppConfig> {
    let required = config_path.is_some();
    let path = match resolve_config_path(config_path.clone()) {
        Ok(path) => path,
        Err(ConfigError::MissingHomeDir) if !required => return Ok(AppConfig::default()),
        Err(ConfigError::InvalidConfigPath(_)) if !required => return Ok(AppConfig::default()),
        Err(err) => return Err(err),
    };
    match load_at_path(&path, required)? {
        Some(config) => Ok(config),
        None => Ok(AppConfig::default()),
    }
}

pub fn resolve_config_path(custom: Option<PathBuf>) -> Result<PathBuf> {
    match custom {
        Some(path) => {
            if path.as_os_str().is_empty() {
                return Err(ConfigError::InvalidConfigPath(path));
            }
            Ok(path)
        }
        None => {
            let base = if let Some(dir) = env::var_os("XDG_CONFIG_HOME") {
                let path = PathBuf::from(dir);
                if path.as_os_str().is_empty() {
                    return Err(ConfigError::InvalidConfigPath(path));
                }
                path
            } else {
                let home = dirs::home_dir().ok_or(ConfigError::MissingHomeDir)?;
                home.join(".config")
            };
            Ok(base.join(APP_DIR).join(CONFIG_FILENAME))
        }
    }
}

fn load_at_path(path: &Path, required: bool) -> Result<Option<AppConfig>> {
    if !path.exists() {
        if required {
            return Err(ConfigError::MissingConfigFile(path.to_path_buf()));
        }
        return Ok(None);
    }

    let contents = fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let parsed: ConfigFile = toml::from_str(&contents).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(Some(merge_config(parsed)?))
}

/// Applies the file over the defaults list by list. A configured list
/// replaces the default outright; an absent one keeps it. Explicitly
/// configured empty lists are rejected as mistakes rather than silently
/// emptying a dropdown.
fn merge_config(parsed: ConfigFile) -> Result<AppConfig> {
    let mut config = AppConfig::default();

    merge_list(&mut config.objectives, parsed.objectives, "objectives")?;
    merge_list(&mut config.brandings, parsed.brandings, "brandings")?;
    merge_list(&mut config.categories, parsed.categories, "categories")?;
    merge_list(&mut config.pages, parsed.pages, "pages")?;
    merge_list(
        &mut config.ad_set_categories,
        parsed.ad_set_categories,
        "ad_set_categories",
    )?;
    merge_list(&mut config.locations, parsed.locations, "locations")?;
    merge_list(
        &mut config.link_channels,
        parsed.link_channels,
        "link_channels",
    )?;
    merge_list(
        &mut config.link_builder_types,
        parsed.link_builder_types,
        "link_builder_types",
    )?;
    merge_list(
        &mut config.link_products,
        parsed.link_products,
        "link_products",
    )?;

    if let Some(products) = parsed.products_by_brand {
        if products.is_empty() || products.values().any(|list| list.is_empty()) {
            return Err(ConfigError::EmptyCatalog("products_by_brand"));
        }
        config.products_by_brand = products;
    }

    Ok(config)
}

fn merge_list<T>(target: &mut Vec<T>, parsed: Option<Vec<T>>, field: &'static str) -> Result<()> {
    if let Some(list) = parsed {
        if list.is_empty() {
            return Err(ConfigError::EmptyCatalog(field));
        }
        *target = list;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::{load_at_path, merge_config, AppConfig, ConfigError, ConfigFile};
    use std::fs;
    use tempfile::TempDir;

    fn empty_file() -> ConfigFile {
        ConfigFile {
            objectives: None,
            brandings: None,
            categories: None,
            products_by_brand: None,
            pages: None,
            ad_set_categories: None,
            locations: None,
            link_channels: None,
            link_builder_types: None,
            link_products: None,
        }
    }

    #[test]
    fn defaults_carry_the_full_catalog() {
        let config = AppConfig::default();
        assert!(config.objectives.contains(&"CONVERSIONS".to_string()));
        assert!(config.brandings.contains(&"THAILIFE".to_string()));
        assert!(config.products_for_brand("FWD").is_some());
        assert!(config.find_channel("Facebook ads").is_some());
        assert!(config.find_link_product("BIG3").is_some());
    }

    #[test]
    fn merge_config_replaces_only_configured_lists() {
        let parsed = ConfigFile {
            objectives: Some(vec!["AWARENESS".to_string()]),
            ..empty_file()
        };
        let merged = merge_config(parsed).expect("merge");
        assert_eq!(merged.objectives, vec!["AWARENESS".to_string()]);
        // Everything else keeps the defaults.
        assert!(merged.brandings.contains(&"FWD".to_string()));
    }

    #[test]
    fn merge_config_rejects_empty_list() {
        let parsed = ConfigFile {
            pages: Some(Vec::new()),
            ..empty_file()
        };
        let err = merge_config(parsed).unwrap_err();
        assert!(matches!(err, ConfigError::EmptyCatalog("pages")));
    }

    #[test]
    fn load_at_path_requires_file_when_requested() {
        let temp = TempDir::new().expect("tempdir");
        let missing = temp.path().join("config.toml");
        let err = load_at_path(&missing, true).unwrap_err();
        assert!(err.to_string().contains("config file not found"));
    }

    #[test]
    fn load_at_path_parses_toml() {
        let temp = TempDir::new().expect("tempdir");
        let path = temp.path().join("config.toml");
        fs::write(
            &path,
            concat!(
                "objectives = [\"AWARENESS\"]\n",
                "[[link_channels]]\n",
                "label = \"Email\"\n",
                "value = \"Ads-mail-\"\n",
            ),
        )
        .expect("write config");

        let config = load_at_path(&path, true).expect("load").expect("config");
        assert_eq!(config.objectives, vec!["AWARENESS".to_string()]);
        assert_eq!(config.link_channels.len(), 1);
        assert_eq!(config.link_channels[0].value, "Ads-mail-");
    }

    #[test]
    fn channel_lookup_matches_label_or_value() {
        let config = AppConfig::default();
        let by_label = config.find_channel("facebook ads").expect("label");
        let by_value = config.find_channel("Ads-Fb-").expect("value");
        assert_eq!(by_label.value, by_value.value);
    }
}
