//! `icon`
//!
//! Renders the icon artwork: a solid base-colour square with a white disc
//! centred on it.

use image::{Rgb, RgbImage};

/// Base fill colour of the canvas, `#4285f4`.
pub const BASE_COLOUR: Rgb<u8> = Rgb([0x42, 0x85, 0xf4]);

/// Fill colour of the centred disc.
pub const DISC_COLOUR: Rgb<u8> = Rgb([0xff, 0xff, 0xff]);

/// An icon ready to be encoded: an RGB raster (8 bits per channel, no alpha)
/// with width == height.
pub type Icon = RgbImage;

/// How far the disc's bounding box is inset from each edge of the canvas,
/// in pixels.
///
/// # Arguments
/// * `size`: Edge length of the canvas in pixels.
///
/// # Returns
/// The inset in pixels (a quarter of the edge length, rounded down).
pub fn margin(size: u32) -> u32 {
    size / 4
}

/// Renders a single icon.
///
/// The canvas is `size × size` pixels of [`BASE_COLOUR`] with a [`DISC_COLOUR`]
/// disc inscribed in the bounding box from `(margin, margin)` to
/// `(size - margin, size - margin)`, where the margin is [`margin`]`(size)`.
///
/// A pixel belongs to the disc when its centre lies within the disc's radius
/// of the canvas centre, so the disc spans columns `margin` to
/// `size - margin - 1` inclusive along the central row and never touches the
/// canvas edges.
///
/// Rendering is pure and deterministic: the same `size` always produces
/// byte-identical pixel content. A `size` of zero produces an empty image.
///
/// # Arguments
/// * `size`: Edge length of the (square) icon in pixels.
///
/// # Returns
/// The rendered icon.
#[allow(clippy::cast_precision_loss)]
pub fn generate_icon(size: u32) -> Icon {
    let inset = margin(size);
    // Disc radius in pixels. `inset` is at most `size / 4` so this never
    // underflows.
    let radius = (size - 2 * inset) as f32 / 2.0;
    let centre = size as f32 / 2.0;

    RgbImage::from_fn(size, size, |x, y| {
        // Sample at the pixel centre.
        let dx = x as f32 + 0.5 - centre;
        let dy = y as f32 + 0.5 - centre;
        if dx * dx + dy * dy <= radius * radius {
            DISC_COLOUR
        } else {
            BASE_COLOUR
        }
    })
}
