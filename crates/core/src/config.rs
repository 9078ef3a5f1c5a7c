use crate::icon::StarIcon;

/// Outer margin left and right of the star row (pixels).  Not configurable.
pub const DEFAULT_PADDING: f32 = 30.0;
/// Default gap between adjacent stars (pixels).
pub const DEFAULT_STAR_PADDING: f32 = 20.0;
/// Default star edge length (pixels).
pub const DEFAULT_STAR_SIZE: f32 = 100.0;
/// Default number of stars.
pub const DEFAULT_STAR_COUNT: u32 = 5;
/// Smallest star edge length accepted; anything below is raised to this.
pub const MIN_STAR_SIZE: f32 = 1.0;
/// Largest star edge length accepted.  Bounds the fill tile and SVG raster
/// buffers (4 bytes per pixel).
pub const MAX_STAR_SIZE: f32 = 1024.0;

/// Widget configuration.  Fixed once the [`RatingBar`](crate::RatingBar) is built.
#[derive(Debug, Clone)]
pub struct RatingBarConfig {
    /// Number of stars in the row.
    pub star_count: u32,
    /// Gap between adjacent stars.
    pub star_spacing: f32,
    /// Width and height of every star.
    pub star_size: f32,
    /// Background ("dark") icon.
    pub empty_icon: Option<StarIcon>,
    /// Foreground ("light") icon.
    pub filled_icon: Option<StarIcon>,
    /// Only whole stars are ever drawn filled.
    pub whole_stars_only: bool,
}

impl Default for RatingBarConfig {
    fn default() -> Self {
        Self {
            star_count:       DEFAULT_STAR_COUNT,
            star_spacing:     DEFAULT_STAR_PADDING,
            star_size:        DEFAULT_STAR_SIZE,
            empty_icon:       None,
            filled_icon:      None,
            whole_stars_only: false,
        }
    }
}

impl RatingBarConfig {
    pub fn with_icons(mut self, empty: StarIcon, filled: StarIcon) -> Self {
        self.empty_icon = Some(empty);
        self.filled_icon = Some(filled);
        self
    }

    /// Clamp every numeric field into its valid range.
    ///
    /// Zero stars, non-positive sizes, negative spacing and non-finite values
    /// would otherwise produce negative draw regions or a zero-width widget
    /// (and a division by zero in the pointer mapping).
    #[must_use]
    pub fn sanitized(mut self) -> Self {
        if self.star_count == 0 {
            tracing::warn!("star_count is 0; using 1");
            self.star_count = 1;
        }

        if !self.star_size.is_finite() {
            tracing::warn!("star_size {} is not finite; using {DEFAULT_STAR_SIZE}", self.star_size);
            self.star_size = DEFAULT_STAR_SIZE;
        } else if self.star_size < MIN_STAR_SIZE {
            tracing::warn!("star_size {} too small; using {MIN_STAR_SIZE}", self.star_size);
            self.star_size = MIN_STAR_SIZE;
        } else if self.star_size > MAX_STAR_SIZE {
            tracing::warn!("star_size {} too large; using {MAX_STAR_SIZE}", self.star_size);
            self.star_size = MAX_STAR_SIZE;
        }

        if !self.star_spacing.is_finite() {
            tracing::warn!(
                "star_spacing {} is not finite; using {DEFAULT_STAR_PADDING}",
                self.star_spacing
            );
            self.star_spacing = DEFAULT_STAR_PADDING;
        } else if self.star_spacing < 0.0 {
            tracing::warn!("star_spacing {} is negative; using 0", self.star_spacing);
            self.star_spacing = 0.0;
        }

        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_attribute_defaults() {
        let cfg = RatingBarConfig::default();
        assert_eq!(cfg.star_count, 5);
        assert_eq!(cfg.star_spacing, 20.0);
        assert_eq!(cfg.star_size, 100.0);
        assert!(!cfg.whole_stars_only);
        assert!(cfg.empty_icon.is_none() && cfg.filled_icon.is_none());
    }

    #[test]
    fn sanitized_clamps_degenerate_values() {
        let cfg = RatingBarConfig {
            star_count: 0,
            star_spacing: -4.0,
            star_size: -10.0,
            ..Default::default()
        }
        .sanitized();

        assert_eq!(cfg.star_count, 1);
        assert_eq!(cfg.star_spacing, 0.0);
        assert_eq!(cfg.star_size, MIN_STAR_SIZE);
    }

    #[test]
    fn sanitized_caps_huge_star_size() {
        let cfg = RatingBarConfig {
            star_size: 100_000.0,
            ..Default::default()
        }
        .sanitized();

        assert_eq!(cfg.star_size, MAX_STAR_SIZE);
    }

    #[test]
    fn sanitized_replaces_non_finite() {
        let cfg = RatingBarConfig {
            star_spacing: f32::NAN,
            star_size: f32::INFINITY,
            ..Default::default()
        }
        .sanitized();

        assert_eq!(cfg.star_spacing, DEFAULT_STAR_PADDING);
        assert_eq!(cfg.star_size, DEFAULT_STAR_SIZE);
    }

    #[test]
    fn sanitized_keeps_valid_values() {
        let cfg = RatingBarConfig {
            star_count: 7,
            star_spacing: 0.0,
            star_size: 24.0,
            ..Default::default()
        }
        .sanitized();

        assert_eq!((cfg.star_count, cfg.star_spacing, cfg.star_size), (7, 0.0, 24.0));
    }
}
