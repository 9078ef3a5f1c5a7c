//! Star icon rasters.
//!
//! Icons are decoded once into straight-alpha RGBA8 buffers and shared
//! behind an `Arc`, so cloning a config or handing an icon to a renderer
//! never copies pixels.

use crate::{
    config::MAX_STAR_SIZE,
    error::{Result, StarBarError},
};
use image::{imageops::FilterType, RgbaImage};
use std::{
    fmt,
    path::Path,
    sync::Arc,
};

/// A decoded star icon ("empty" or "filled").
#[derive(Clone)]
pub struct StarIcon {
    image: Arc<RgbaImage>,
}

impl StarIcon {
    /// Wrap an already decoded image.
    pub fn from_image(image: RgbaImage) -> Self {
        Self { image: Arc::new(image) }
    }

    /// Build from raw RGBA8 pixels.  Returns `None` when `pixels` does not
    /// hold exactly `width * height * 4` bytes.
    pub fn from_raw(width: u32, height: u32, pixels: Vec<u8>) -> Option<Self> {
        RgbaImage::from_raw(width, height, pixels).map(Self::from_image)
    }

    /// Load an icon file.
    ///
    /// `.svg` files are rasterised into a `svg_size`-pixel square; every
    /// other extension goes through the `image` decoders at native size.
    pub fn load(path: impl AsRef<Path>, svg_size: u32) -> Result<Self> {
        let path = path.as_ref();
        let is_svg = path
            .extension()
            .and_then(|e| e.to_str())
            .is_some_and(|e| e.eq_ignore_ascii_case("svg"));

        let image = if is_svg {
            let data = std::fs::read(path)?;
            rasterize_svg(&data, svg_size).map_err(|reason| StarBarError::Icon {
                path: path.to_path_buf(),
                reason,
            })?
        } else {
            image::open(path)
                .map_err(|e| StarBarError::Icon {
                    path:   path.to_path_buf(),
                    reason: e.to_string(),
                })?
                .to_rgba8()
        };

        tracing::debug!(
            "Loaded icon '{}' ({}x{})",
            path.display(),
            image.width(),
            image.height()
        );
        Ok(Self::from_image(image))
    }

    pub fn width(&self) -> u32 {
        self.image.width()
    }

    pub fn height(&self) -> u32 {
        self.image.height()
    }

    /// Straight-alpha RGBA8 pixels, row-major.
    pub fn pixels(&self) -> &[u8] {
        self.image.as_raw()
    }

    /// Render the icon stretched into a `side × side` square.
    fn to_square(&self, side: u32) -> RgbaImage {
        if self.width() == side && self.height() == side {
            return (*self.image).clone();
        }
        image::imageops::resize(&*self.image, side, side, FilterType::Triangle)
    }
}

impl fmt::Debug for StarIcon {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StarIcon")
            .field("width", &self.width())
            .field("height", &self.height())
            .finish()
    }
}

/// The filled icon pre-rendered at exactly one star's size.
///
/// Used as the texture of the partial-fill rectangle.  The rectangle is never
/// wider than one star, so drawing the tile clipped to the rectangle gives
/// the same result as clamp-to-edge tiling.
#[derive(Clone)]
pub struct FillTile {
    image: Arc<RgbaImage>,
}

impl FillTile {
    /// Rasterise `icon` into a square buffer of side `star_size`, kept
    /// within `1..=MAX_STAR_SIZE` pixels.
    pub fn new(icon: &StarIcon, star_size: f32) -> Self {
        let side = star_size.round().clamp(1.0, MAX_STAR_SIZE) as u32;
        Self {
            image: Arc::new(icon.to_square(side)),
        }
    }

    /// Side length of the tile in pixels.
    pub fn side(&self) -> u32 {
        self.image.width()
    }

    pub fn pixels(&self) -> &[u8] {
        self.image.as_raw()
    }
}

impl fmt::Debug for FillTile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FillTile").field("side", &self.side()).finish()
    }
}

fn rasterize_svg(data: &[u8], size: u32) -> std::result::Result<RgbaImage, String> {
    use resvg::{tiny_skia::Pixmap, usvg};

    let tree = usvg::Tree::from_data(data, &usvg::Options::default()).map_err(|e| e.to_string())?;
    let size = size.clamp(1, MAX_STAR_SIZE as u32);
    let mut pixmap = Pixmap::new(size, size).ok_or("invalid pixmap size")?;

    let svg_size = tree.size();
    let transform = usvg::Transform::from_scale(
        size as f32 / svg_size.width(),
        size as f32 / svg_size.height(),
    );
    resvg::render(&tree, transform, &mut pixmap.as_mut());

    RgbaImage::from_raw(size, size, premul_to_straight(&pixmap))
        .ok_or_else(|| "pixel buffer size mismatch".to_string())
}

/// tiny-skia stores premultiplied alpha; `image` and iced expect straight.
fn premul_to_straight(pixmap: &resvg::tiny_skia::Pixmap) -> Vec<u8> {
    pixmap
        .pixels()
        .iter()
        .flat_map(|p| {
            let a = p.alpha();
            if a == 0 {
                [0, 0, 0, 0]
            } else {
                let r = (p.red() as u16 * 255 / a as u16) as u8;
                let g = (p.green() as u16 * 255 / a as u16) as u8;
                let b = (p.blue() as u16 * 255 / a as u16) as u8;
                [r, g, b, a]
            }
        })
        .collect()
}
