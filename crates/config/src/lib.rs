pub mod schema;
pub mod watcher;

pub use schema::{StarBarAttributes, StarBarFile};
pub use watcher::ConfigWatcher;

use starbar_core::{RatingBarConfig, Result, StarBarError};
use std::path::{Path, PathBuf};

/// Load attributes from a TOML file.  Returns the defaults if the file
/// doesn't exist so the bar always has something to measure.
pub fn load(path: impl AsRef<Path>) -> Result<StarBarAttributes> {
    let path = path.as_ref();
    if !path.exists() {
        tracing::warn!(
            "Attribute file not found at '{}'; using defaults.",
            path.display()
        );
        return Ok(StarBarAttributes::default());
    }

    let raw = std::fs::read_to_string(path)
        .map_err(|e| StarBarError::Config(format!("cannot read '{}': {e}", path.display())))?;

    toml::from_str::<StarBarFile>(&raw)
        .map(|file| file.star_bar)
        .map_err(|e| StarBarError::Config(format!("TOML parse error: {e}")))
}

/// Load attributes and resolve them into a widget config, with icon paths
/// taken relative to the file's directory.
pub fn load_config(path: impl AsRef<Path>) -> Result<RatingBarConfig> {
    let path = path.as_ref();
    let attrs = load(path)?;
    let base = path.parent().unwrap_or_else(|| Path::new("."));
    Ok(attrs.resolve(base))
}

/// Return the default attribute file path, honouring `$XDG_CONFIG_HOME`.
pub fn default_path() -> PathBuf {
    let base = std::env::var("XDG_CONFIG_HOME")
        .map(PathBuf::from)
        .unwrap_or_else(|_| {
            let home = std::env::var("HOME").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(home).join(".config")
        });
    base.join("starbar").join("starbar.toml")
}
