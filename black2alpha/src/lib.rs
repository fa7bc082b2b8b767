mod error;

pub use crate::error::{AlphaError as Error, Result};

use image::{
    io::Reader, DynamicImage, GenericImageView, ImageError, ImageFormat, Rgba, RgbaImage,
};
use std::path::Path;

/// Pixels whose mean red, green and blue intensity is below this value are
/// made transparent.
pub const THRESHOLD: u8 = 30;

/// Fully transparent black.
pub const TRANSPARENT: Rgba<u8> = Rgba([0, 0, 0, 0]);

/// Outcome of a filter pass.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FilterStats {
    /// Pixels replaced by [`TRANSPARENT`].
    pub cleared: u64,
    /// Pixels examined.
    pub total: u64,
}
impl FilterStats {
    /// Share of pixels that were cleared, between 0.0 and 1.0.
    pub fn cleared_fraction(&self) -> f32 {
        if self.total == 0 {
            0.0
        } else {
            self.cleared as f32 / self.total as f32
        }
    }
}

/// Whether the mean of the color channels falls below [`THRESHOLD`].
///
/// Alpha is ignored. `sum / 3 < THRESHOLD` is evaluated as
/// `sum < 3 * THRESHOLD` to stay in integers.
pub fn is_near_black(pixel: &Rgba<u8>) -> bool {
    let [red, green, blue, _] = pixel.0;
    u16::from(red) + u16::from(green) + u16::from(blue) < 3 * u16::from(THRESHOLD)
}

/// Replace near-black pixels with transparent black.
///
/// Every other pixel keeps its four channels, alpha included.
pub fn to_transparent(image: RgbaImage) -> RgbaImage {
    to_transparent_with_stats(image).0
}
/// Same as [`to_transparent`], also counting the cleared pixels.
pub fn to_transparent_with_stats(mut image: RgbaImage) -> (RgbaImage, FilterStats) {
    let mut stats = FilterStats::default();
    for pixel in image.pixels_mut() {
        stats.total += 1;
        if is_near_black(pixel) {
            *pixel = TRANSPARENT;
            stats.cleared += 1;
        }
    }
    (image, stats)
}

/// Decode the image at `path`, detecting the format from its content.
pub fn decode(path: impl AsRef<Path>) -> Result<DynamicImage> {
    let path = path.as_ref();
    let image = Reader::open(path)
        .and_then(Reader::with_guessed_format)
        .map_err(ImageError::from)
        .and_then(Reader::decode)
        .map_err(|source| Error::Decode {
            path: path.to_owned(),
            source,
        })?;
    let (width, height) = image.dimensions();
    log::debug!("Decoded {} ({}x{})", path.display(), width, height);
    Ok(image)
}

/// Write `image` as PNG, whatever the extension of `path`.
pub fn encode_png(image: &RgbaImage, path: impl AsRef<Path>) -> Result<()> {
    let path = path.as_ref();
    image
        .save_with_format(path, ImageFormat::Png)
        .map_err(|source| Error::Encode {
            path: path.to_owned(),
            source,
        })
}

/// Read `input`, clear its near-black pixels and save the result to `output`
/// as PNG.
///
/// Nothing is written if `input` cannot be decoded.
pub fn make_transparent(
    input: impl AsRef<Path>,
    output: impl AsRef<Path>,
) -> Result<FilterStats> {
    let image = decode(input)?.into_rgba8();
    let (image, stats) = to_transparent_with_stats(image);
    log::info!(
        "Cleared {} of {} pixels ({:.1}%)",
        stats.cleared,
        stats.total,
        stats.cleared_fraction() * 100.0
    );
    encode_png(&image, output)?;
    Ok(stats)
}
