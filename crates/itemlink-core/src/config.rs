use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

use crate::action::ValidationMode;
use crate::template::ValueEncoding;

/// Global configuration loaded from `~/.config/itemlink/config.toml`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemlinkConfig {
    /// Template validation for catalog actions: "strict" (default) or "lenient".
    #[serde(default)]
    pub validation: ValidationMode,
    /// Encoding of substituted values: "percent" (default) or "raw".
    #[serde(default)]
    pub encoding: ValueEncoding,
    /// Catalog used when `--catalog` is not given.
    #[serde(default)]
    pub catalog: Option<PathBuf>,
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("itemlink")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<ItemlinkConfig> {
    let path = config_path()?;
    if !path.exists() {
        let default_cfg = ItemlinkConfig::default();
        let toml = toml::to_string_pretty(&default_cfg)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, toml)?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }

    let data = fs::read_to_string(&path)?;
    let cfg: ItemlinkConfig = toml::from_str(&data)?;
    Ok(cfg)
}
