use serde::{Deserialize, Serialize};
use starbar_core::{
    config::{DEFAULT_STAR_COUNT, DEFAULT_STAR_PADDING, DEFAULT_STAR_SIZE, MAX_STAR_SIZE},
    RatingBarConfig, StarIcon,
};
use std::path::{Path, PathBuf};

/// Root structure parsed from `starbar.toml`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct StarBarFile {
    /// The `[star_bar]` attribute table.
    pub star_bar: StarBarAttributes,
}

/// Styling attributes for one star bar, keyed by their layout-attribute names.
///
/// ```toml
/// [star_bar]
/// starNumber    = 5
/// starPadding   = 20
/// starSize      = 100
/// starDark      = "icons/star_dark.png"
/// starLight     = "icons/star_light.svg"
/// isStarInteger = false
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct StarBarAttributes {
    /// Number of stars.  Signed so that bad values reach the widget's clamp
    /// instead of failing the whole parse.
    pub star_number: i64,
    /// Gap between stars (pixels).
    pub star_padding: f32,
    /// Star edge length (pixels).
    pub star_size: f32,
    /// Background icon file, relative to the attribute file.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub star_dark: Option<PathBuf>,
    /// Foreground icon file, relative to the attribute file.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub star_light: Option<PathBuf>,
    /// Whole stars only.
    pub is_star_integer: bool,
}

impl Default for StarBarAttributes {
    fn default() -> Self {
        Self {
            star_number:     DEFAULT_STAR_COUNT as i64,
            star_padding:    DEFAULT_STAR_PADDING,
            star_size:       DEFAULT_STAR_SIZE,
            star_dark:       None,
            star_light:      None,
            is_star_integer: false,
        }
    }
}

impl StarBarAttributes {
    /// Turn the attributes into a widget config, loading both icons.
    ///
    /// Relative icon paths are resolved against `base_dir`.  An icon that
    /// cannot be loaded is logged and left out; the widget then draws nothing.
    pub fn resolve(&self, base_dir: &Path) -> RatingBarConfig {
        let svg_size = if self.star_size.is_finite() {
            self.star_size.round().clamp(1.0, MAX_STAR_SIZE) as u32
        } else {
            DEFAULT_STAR_SIZE as u32
        };

        RatingBarConfig {
            star_count:       self.star_number.clamp(0, u32::MAX as i64) as u32,
            star_spacing:     self.star_padding,
            star_size:        self.star_size,
            empty_icon:       load_icon(base_dir, "starDark", self.star_dark.as_deref(), svg_size),
            filled_icon:      load_icon(base_dir, "starLight", self.star_light.as_deref(), svg_size),
            whole_stars_only: self.is_star_integer,
        }
    }
}

fn load_icon(base_dir: &Path, key: &str, path: Option<&Path>, svg_size: u32) -> Option<StarIcon> {
    let Some(path) = path else {
        tracing::warn!("'{key}' not set");
        return None;
    };

    match StarIcon::load(base_dir.join(path), svg_size) {
        Ok(icon) => Some(icon),
        Err(e) => {
            tracing::warn!("'{key}': {e}");
            None
        }
    }
}
