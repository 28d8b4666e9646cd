// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Image normalizer — decode an evidence photo, flatten transparency onto
// white, bound its width, and re-encode it as an optimized baseline JPEG.

use image::imageops::FilterType;
use image::{DynamicImage, RgbImage, RgbaImage};
use tracing::{debug, info, instrument};
use visita_core::error::{Result, VisitaError};
use visita_core::metrics::ImageMetrics;

/// Width bound and JPEG quality applied to every photo in a batch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NormalizeSettings {
    /// Photos wider than this are scaled down to it; narrower ones are left alone.
    pub max_width: u32,
    /// JPEG quality, 1-100.
    pub quality: u8,
}

impl NormalizeSettings {
    pub fn new(max_width: u32, quality: u8) -> Self {
        Self { max_width, quality }
    }
}

impl From<&visita_core::PipelineConfig> for NormalizeSettings {
    fn from(config: &visita_core::PipelineConfig) -> Self {
        Self::new(config.max_image_width, config.image_quality)
    }
}

/// Normalize one encoded photo.
///
/// Returns the JPEG bytes and the before/after metrics. Pure: no I/O.
#[instrument(skip(raw), fields(raw_len = raw.len()))]
pub fn normalize(raw: &[u8], max_width: u32, quality: u8) -> Result<(Vec<u8>, ImageMetrics)> {
    if max_width == 0 {
        return Err(VisitaError::InvalidConfig("max_width must be greater than 0".into()));
    }
    if !(1..=100).contains(&quality) {
        return Err(VisitaError::InvalidConfig(format!(
            "quality must be between 1 and 100, got {quality}"
        )));
    }

    let normalizer = ImageNormalizer::from_bytes(raw)?;
    let original_dimensions = normalizer.dimensions();

    let normalizer = normalizer.flatten()?.bound_width(max_width);
    let final_dimensions = normalizer.dimensions();
    let jpeg = normalizer.to_jpeg_bytes(quality)?;

    let metrics = ImageMetrics::new(raw.len(), jpeg.len(), original_dimensions, final_dimensions);
    info!(
        from_w = original_dimensions.0,
        from_h = original_dimensions.1,
        to_w = final_dimensions.0,
        to_h = final_dimensions.1,
        original_bytes = metrics.original_size_bytes,
        normalized_bytes = metrics.normalized_size_bytes,
        ratio = metrics.compression_ratio,
        "Image normalized"
    );
    Ok((jpeg, metrics))
}

/// Step-by-step normalization of a single in-memory photo.
///
/// Each step consumes `self` and returns the transformed normalizer:
///
/// ```ignore
/// let jpeg = ImageNormalizer::from_bytes(&raw)?
///     .flatten()?
///     .bound_width(800)
///     .to_jpeg_bytes(85)?;
/// ```
pub struct ImageNormalizer {
    image: DynamicImage,
}

impl ImageNormalizer {
    // -- Construction ---------------------------------------------------------

    /// Decode raw encoded bytes (JPEG, PNG, WebP, ...).
    #[instrument(skip(data), fields(data_len = data.len()))]
    pub fn from_bytes(data: &[u8]) -> Result<Self> {
        let image = image::load_from_memory(data)
            .map_err(|err| VisitaError::Decode(format!("failed to decode image: {err}")))?;
        debug!(
            width = image.width(),
            height = image.height(),
            color = ?image.color(),
            "Image decoded from bytes"
        );
        Ok(Self { image })
    }

    /// Wrap an already-decoded `DynamicImage`.
    pub fn from_dynamic(image: DynamicImage) -> Self {
        Self { image }
    }

    // -- Accessors ------------------------------------------------------------

    /// Current (width, height) in pixels.
    pub fn dimensions(&self) -> (u32, u32) {
        (self.image.width(), self.image.height())
    }

    /// Consume the normalizer and return the underlying `DynamicImage`.
    pub fn into_dynamic(self) -> DynamicImage {
        self.image
    }

    // -- Transformations ------------------------------------------------------

    /// Convert to 8-bit opaque RGB. Anything with an alpha channel is
    /// composited onto a white background first.
    pub fn flatten(self) -> Result<Self> {
        let rgb = match self.image {
            DynamicImage::ImageRgb8(rgb) => rgb,
            DynamicImage::ImageRgba8(rgba) => composite_on_white(&rgba),
            DynamicImage::ImageLumaA8(_)
            | DynamicImage::ImageLumaA16(_)
            | DynamicImage::ImageRgba16(_)
            | DynamicImage::ImageRgba32F(_) => composite_on_white(&self.image.to_rgba8()),
            DynamicImage::ImageLuma8(_)
            | DynamicImage::ImageLuma16(_)
            | DynamicImage::ImageRgb16(_)
            | DynamicImage::ImageRgb32F(_) => self.image.to_rgb8(),
            other => {
                return Err(VisitaError::UnsupportedColorModel(format!(
                    "{:?}",
                    other.color()
                )));
            }
        };
        Ok(Self {
            image: DynamicImage::ImageRgb8(rgb),
        })
    }

    /// Scale down to `max_width` preserving aspect ratio (Lanczos3). Never
    /// upscales.
    pub fn bound_width(self, max_width: u32) -> Self {
        let (width, height) = self.dimensions();
        if width <= max_width {
            return self;
        }
        let new_height = scaled_height(width, height, max_width);
        debug!(from_w = width, from_h = height, max_width, new_height, "Resizing image");
        Self {
            image: self.image.resize_exact(max_width, new_height, FilterType::Lanczos3),
        }
    }

    // -- Output ---------------------------------------------------------------

    /// Encode as baseline JPEG with optimized Huffman tables.
    pub fn to_jpeg_bytes(&self, quality: u8) -> Result<Vec<u8>> {
        let rgb = self.image.to_rgb8();
        let (width, height) = rgb.dimensions();
        let (w16, h16) = match (u16::try_from(width), u16::try_from(height)) {
            (Ok(w), Ok(h)) => (w, h),
            _ => {
                return Err(VisitaError::Encode(format!(
                    "{width}x{height} exceeds the JPEG dimension limit of 65535"
                )));
            }
        };

        let mut buffer = Vec::new();
        let mut encoder = jpeg_encoder::Encoder::new(&mut buffer, quality);
        encoder.set_optimized_huffman_tables(true);
        encoder
            .encode(rgb.as_raw(), w16, h16, jpeg_encoder::ColorType::Rgb)
            .map_err(|err| VisitaError::Encode(format!("JPEG encoding failed: {err}")))?;
        Ok(buffer)
    }
}

/// `round(height * max_width / width)`, at least 1.
fn scaled_height(width: u32, height: u32, max_width: u32) -> u32 {
    let scaled = (f64::from(height) * f64::from(max_width) / f64::from(width)).round();
    (scaled as u32).max(1)
}

/// Alpha-blend every pixel over opaque white.
fn composite_on_white(rgba: &RgbaImage) -> RgbImage {
    RgbImage::from_fn(rgba.width(), rgba.height(), |x, y| {
        let image::Rgba([r, g, b, a]) = *rgba.get_pixel(x, y);
        let alpha = u32::from(a);
        let blend = |channel: u8| -> u8 {
            ((u32::from(channel) * alpha + 255 * (255 - alpha) + 127) / 255) as u8
        };
        image::Rgb([blend(r), blend(g), blend(b)])
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{GrayImage, ImageFormat, Luma, Rgb, Rgba};

    fn encode(image: &DynamicImage, format: ImageFormat) -> Vec<u8> {
        let mut buffer = std::io::Cursor::new(Vec::new());
        image.write_to(&mut buffer, format).unwrap();
        buffer.into_inner()
    }

    fn gradient_png(width: u32, height: u32) -> Vec<u8> {
        let img = RgbImage::from_fn(width, height, |x, y| {
            Rgb([(x % 256) as u8, (y % 256) as u8, ((x + y) % 256) as u8])
        });
        encode(&DynamicImage::ImageRgb8(img), ImageFormat::Png)
    }

    #[test]
    fn narrow_image_is_not_upscaled() {
        let raw = gradient_png(320, 200);
        let (jpeg, metrics) = normalize(&raw, 800, 85).unwrap();

        assert_eq!(metrics.original_dimensions, (320, 200));
        assert_eq!(metrics.final_dimensions, (320, 200));
        let decoded = image::load_from_memory(&jpeg).unwrap();
        assert_eq!((decoded.width(), decoded.height()), (320, 200));
    }

    #[test]
    fn wide_image_is_bounded_with_rounded_height() {
        // 1000x333 -> 800 x round(266.4) = 266
        let raw = gradient_png(1000, 333);
        let (jpeg, metrics) = normalize(&raw, 800, 85).unwrap();

        assert_eq!(metrics.final_dimensions, (800, 266));
        let decoded = image::load_from_memory(&jpeg).unwrap();
        assert_eq!(decoded.width(), 800);
        assert_eq!(decoded.height(), 266);
    }

    #[test]
    fn height_rounds_half_up() {
        // 1600x1001 -> 800 x 500.5 -> 501
        assert_eq!(scaled_height(1600, 1001, 800), 501);
        assert_eq!(scaled_height(10_000, 1, 800), 1);
    }

    #[test]
    fn output_is_jpeg() {
        let raw = gradient_png(64, 64);
        let (jpeg, _) = normalize(&raw, 800, 85).unwrap();
        assert_eq!(image::guess_format(&jpeg).unwrap(), ImageFormat::Jpeg);
    }

    #[test]
    fn transparent_pixels_become_white() {
        let mut img = RgbaImage::from_pixel(32, 32, Rgba([0, 0, 0, 0]));
        // Opaque red block in one corner so the image isn't trivially uniform.
        for y in 0..8 {
            for x in 0..8 {
                img.put_pixel(x, y, Rgba([255, 0, 0, 255]));
            }
        }
        let raw = encode(&DynamicImage::ImageRgba8(img), ImageFormat::Png);

        let (jpeg, _) = normalize(&raw, 800, 95).unwrap();
        let decoded = image::load_from_memory(&jpeg).unwrap();
        assert!(!decoded.color().has_alpha());

        let rgb = decoded.to_rgb8();
        let Rgb([r, g, b]) = *rgb.get_pixel(28, 28);
        assert!(r > 245 && g > 245 && b > 245, "expected white, got {r},{g},{b}");
    }

    /// 16x16 indexed PNG: palette entry 0 is fully transparent black, entry 1
    /// opaque blue. The left half uses entry 0, the right half entry 1.
    fn palette_png_with_transparency() -> Vec<u8> {
        let (width, height) = (16u32, 16u32);
        let indices: Vec<u8> = (0..height)
            .flat_map(|_| (0..width).map(|x| u8::from(x >= width / 2)))
            .collect();

        let mut buffer = Vec::new();
        let mut encoder = png::Encoder::new(&mut buffer, width, height);
        encoder.set_color(png::ColorType::Indexed);
        encoder.set_depth(png::BitDepth::Eight);
        encoder.set_palette(vec![0, 0, 0, 0, 0, 255]);
        encoder.set_trns(vec![0, 255]);
        let mut writer = encoder.write_header().unwrap();
        writer.write_image_data(&indices).unwrap();
        writer.finish().unwrap();
        buffer
    }

    #[test]
    fn palette_transparency_becomes_white() {
        let raw = palette_png_with_transparency();
        assert!(ImageNormalizer::from_bytes(&raw).unwrap().into_dynamic().color().has_alpha());

        let (jpeg, metrics) = normalize(&raw, 800, 95).unwrap();
        assert_eq!(metrics.final_dimensions, (16, 16));
        let decoded = image::load_from_memory(&jpeg).unwrap();
        assert!(!decoded.color().has_alpha());

        let rgb = decoded.to_rgb8();
        let Rgb([r, g, b]) = *rgb.get_pixel(2, 8);
        assert!(r > 240 && g > 240 && b > 240, "expected white, got {r},{g},{b}");
        let Rgb([r, g, b]) = *rgb.get_pixel(13, 8);
        assert!(b > 200 && r < 60 && g < 60, "expected blue, got {r},{g},{b}");
    }

    #[test]
    fn half_transparent_pixel_blends_toward_white() {
        let img = RgbaImage::from_pixel(1, 1, Rgba([0, 0, 0, 128]));
        let rgb = composite_on_white(&img);
        let Rgb([r, g, b]) = *rgb.get_pixel(0, 0);
        assert_eq!((r, g, b), (127, 127, 127));
    }

    #[test]
    fn grayscale_is_converted_to_rgb() {
        let img = DynamicImage::ImageLuma8(GrayImage::from_pixel(40, 30, Luma([90u8])));
        let flattened = ImageNormalizer::from_dynamic(img).flatten().unwrap();
        assert!(matches!(flattened.into_dynamic(), DynamicImage::ImageRgb8(_)));
    }

    #[test]
    fn webp_input_is_accepted() {
        let img = DynamicImage::ImageRgb8(RgbImage::from_pixel(900, 450, Rgb([10, 120, 200])));
        let raw = encode(&img, ImageFormat::WebP);

        let (_, metrics) = normalize(&raw, 800, 85).unwrap();
        assert_eq!(metrics.final_dimensions, (800, 400));
    }

    #[test]
    fn garbage_bytes_fail_to_decode() {
        let result = normalize(b"definitely not an image", 800, 85);
        assert!(matches!(result, Err(VisitaError::Decode(_))));
    }

    #[test]
    fn metrics_match_byte_counts() {
        let raw = gradient_png(500, 500);
        let (jpeg, metrics) = normalize(&raw, 250, 80).unwrap();
        assert_eq!(metrics.original_size_bytes, raw.len());
        assert_eq!(metrics.normalized_size_bytes, jpeg.len());
        assert_eq!(
            metrics.compression_ratio,
            visita_core::metrics::compression_ratio(raw.len(), jpeg.len())
        );
    }

    #[test]
    fn invalid_quality_is_rejected_before_decoding() {
        assert!(matches!(
            normalize(b"junk", 800, 0),
            Err(VisitaError::InvalidConfig(_))
        ));
    }
}
