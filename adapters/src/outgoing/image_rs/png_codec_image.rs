use std::io::Cursor;

use image::imageops::FilterType;
use image::{DynamicImage, ImageBuffer, ImageFormat, ImageReader, Rgba};
use tracing::{debug, trace};

use domain::frame::RgbaFrame;
use imgstack_application::ports::outgoing::image_codec::{CodecFailure, ImageCodecPort};

/// `image`-crate backed codec. Input formats are sniffed from magic bytes
/// (PNG, JPEG, WebP, ...); output is always lossless PNG with alpha.
#[derive(Clone, Default)]
pub struct ImagePngAdapter;

impl ImagePngAdapter {
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

fn load(data: &[u8]) -> Result<DynamicImage, CodecFailure> {
    image::load_from_memory(data).map_err(|e| CodecFailure {
        message: format!("Failed to decode image: {e}"),
    })
}

fn to_frame(img: &DynamicImage) -> Result<RgbaFrame, CodecFailure> {
    let rgba = img.to_rgba8();
    let (width, height) = rgba.dimensions();
    RgbaFrame::from_raw(width, height, rgba.into_raw()).map_err(|e| CodecFailure {
        message: e.to_string(),
    })
}

impl ImageCodecPort for ImagePngAdapter {
    fn decode_rgba(&self, data: &[u8]) -> Result<RgbaFrame, CodecFailure> {
        let img = load(data)?;
        trace!(bytes = data.len(), "decoded image buffer");
        to_frame(&img)
    }

    fn probe_dimensions(&self, data: &[u8]) -> Result<(u32, u32), CodecFailure> {
        ImageReader::new(Cursor::new(data))
            .with_guessed_format()
            .map_err(|e| CodecFailure {
                message: format!("Failed to sniff image format: {e}"),
            })?
            .into_dimensions()
            .map_err(|e| CodecFailure {
                message: format!("Failed to read image dimensions: {e}"),
            })
    }

    fn resize_to_cover(
        &self,
        data: &[u8],
        width: u32,
        height: u32,
    ) -> Result<RgbaFrame, CodecFailure> {
        let img = load(data)?;
        // resize_to_fill scales to cover the target box and crops the
        // overflow centered, which matches the cover/center contract.
        let resized = img.resize_to_fill(width, height, FilterType::Lanczos3);
        debug!(
            from_width = img.width(),
            from_height = img.height(),
            width,
            height,
            "cover-resized body image"
        );
        to_frame(&resized)
    }

    fn encode_png(&self, frame: &RgbaFrame) -> Result<Vec<u8>, CodecFailure> {
        let buffer = ImageBuffer::<Rgba<u8>, Vec<u8>>::from_raw(
            frame.width(),
            frame.height(),
            frame.pixels().to_vec(),
        )
        .ok_or_else(|| CodecFailure {
            message: "Failed to create image buffer from RGBA frame".to_string(),
        })?;

        let mut png_bytes = Vec::new();
        buffer
            .write_to(&mut Cursor::new(&mut png_bytes), ImageFormat::Png)
            .map_err(|e| CodecFailure {
                message: format!("Failed to encode PNG: {e}"),
            })?;

        debug!(bytes = png_bytes.len(), "encoded PNG");
        if png_bytes.is_empty() {
            return Err(CodecFailure {
                message: "PNG encoding produced empty output".to_string(),
            });
        }
        Ok(png_bytes)
    }
}

#[cfg(test)]
#[allow(clippy::panic, clippy::unwrap_used)]
mod tests {
    use image::{ImageFormat, Rgba, RgbaImage};
    use std::io::Cursor;

    use super::ImagePngAdapter;
    use domain::frame::RgbaFrame;
    use imgstack_application::ports::outgoing::image_codec::ImageCodecPort;

    fn png_bytes(width: u32, height: u32, color: [u8; 4]) -> Vec<u8> {
        let img = RgbaImage::from_pixel(width, height, Rgba(color));
        let mut bytes = Vec::new();
        img.write_to(&mut Cursor::new(&mut bytes), ImageFormat::Png)
            .unwrap();
        bytes
    }

    #[test]
    fn decode_reports_dimensions_and_pixels() {
        let codec = ImagePngAdapter::new();
        let frame = codec.decode_rgba(&png_bytes(40, 30, [9, 8, 7, 255])).unwrap();
        assert_eq!((frame.width(), frame.height()), (40, 30));
        assert_eq!(frame.pixel_at(20, 15), Some([9, 8, 7, 255]));
    }

    #[test]
    fn probe_matches_decode() {
        let codec = ImagePngAdapter::new();
        let bytes = png_bytes(123, 45, [0, 0, 0, 255]);
        assert_eq!(codec.probe_dimensions(&bytes).unwrap(), (123, 45));
    }

    #[test]
    fn decode_rejects_garbage() {
        let codec = ImagePngAdapter::new();
        assert!(codec.decode_rgba(b"definitely not an image").is_err());
    }

    #[test]
    fn resize_to_cover_hits_exact_target_for_any_aspect() {
        let codec = ImagePngAdapter::new();
        for (w, h) in [(50, 400), (400, 50), (1080, 950)] {
            let frame = codec
                .resize_to_cover(&png_bytes(w, h, [1, 2, 3, 255]), 1080, 950)
                .unwrap();
            assert_eq!((frame.width(), frame.height()), (1080, 950));
        }
    }

    #[test]
    fn png_round_trip_preserves_pixels() {
        let codec = ImagePngAdapter::new();
        let mut pixels = Vec::new();
        for i in 0..16u32 * 16 {
            pixels.extend_from_slice(&[(i % 251) as u8, (i % 13) as u8, (i % 77) as u8, 255]);
        }
        let frame = RgbaFrame::from_raw(16, 16, pixels).unwrap();

        let png = codec.encode_png(&frame).unwrap();
        let decoded = codec.decode_rgba(&png).unwrap();
        assert_eq!(decoded, frame);
    }
}
