use crate::error::{DomainError, DomainResult};

pub const CHANNELS: u32 = 4;

pub const OPAQUE_WHITE: [u8; 4] = [255, 255, 255, 255];

/// An in-memory RGBA8 pixel grid, row-major, always exactly 4 channels.
/// Owned by one request; never shared across requests.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RgbaFrame {
    width: u32,
    height: u32,
    pixels: Vec<u8>,
}

impl RgbaFrame {
    pub fn from_raw(width: u32, height: u32, pixels: Vec<u8>) -> DomainResult<Self> {
        let expected = width as usize * height as usize * CHANNELS as usize;
        if width == 0 || height == 0 || pixels.len() != expected {
            return Err(DomainError::InvalidFrameDimensions {
                message: format!(
                    "{width}x{height} RGBA frame needs {expected} bytes, got {}",
                    pixels.len()
                ),
            });
        }
        Ok(Self {
            width,
            height,
            pixels,
        })
    }

    /// A fresh frame filled with a single color.
    #[must_use]
    pub fn filled(width: u32, height: u32, color: [u8; 4]) -> Self {
        let count = width as usize * height as usize;
        let mut pixels = Vec::with_capacity(count * CHANNELS as usize);
        for _ in 0..count {
            pixels.extend_from_slice(&color);
        }
        Self {
            width,
            height,
            pixels,
        }
    }

    #[must_use]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[must_use]
    pub fn height(&self) -> u32 {
        self.height
    }

    #[must_use]
    pub fn pixels(&self) -> &[u8] {
        &self.pixels
    }

    #[must_use]
    pub fn into_pixels(self) -> Vec<u8> {
        self.pixels
    }

    #[must_use]
    pub fn pixel_at(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let start = (y as usize * self.width as usize + x as usize) * CHANNELS as usize;
        self.pixels
            .get(start..start + CHANNELS as usize)
            .and_then(|px| px.try_into().ok())
    }

    /// Copies `src` into this frame with its top-left corner at
    /// (`left`, `top`). Straight pixel copy, no alpha blending.
    pub fn blit(&mut self, src: &Self, left: u32, top: u32) -> DomainResult<()> {
        if u64::from(left) + u64::from(src.width) > u64::from(self.width)
            || u64::from(top) + u64::from(src.height) > u64::from(self.height)
        {
            return Err(DomainError::LayerSizeMismatch {
                layer: format!("{}x{} layer", src.width, src.height),
                message: format!(
                    "placement at left={left}, top={top} exceeds {}x{} canvas",
                    self.width, self.height
                ),
            });
        }

        let dst_row_len = self.width as usize * CHANNELS as usize;
        let src_row_len = src.width as usize * CHANNELS as usize;
        for (row, src_row) in src.pixels.chunks_exact(src_row_len).enumerate() {
            let start = (top as usize + row) * dst_row_len + left as usize * CHANNELS as usize;
            if let Some(dst) = self.pixels.get_mut(start..start + src_row_len) {
                dst.copy_from_slice(src_row);
            }
        }
        Ok(())
    }

    /// Copies out the `width` x `height` region whose top-left corner is at
    /// (`left`, `top`). The region must lie fully inside the frame.
    pub fn extract_region(&self, left: u32, top: u32, width: u32, height: u32) -> DomainResult<Self> {
        if u64::from(left) + u64::from(width) > u64::from(self.width)
            || u64::from(top) + u64::from(height) > u64::from(self.height)
        {
            return Err(DomainError::ExtractOutOfBounds {
                message: format!(
                    "region {width}x{height} at left={left}, top={top} does not fit a {}x{} source",
                    self.width, self.height
                ),
            });
        }

        let src_row_len = self.width as usize * CHANNELS as usize;
        let region_row_len = width as usize * CHANNELS as usize;
        let mut pixels = Vec::with_capacity(height as usize * region_row_len);
        for row in 0..height as usize {
            let start = (top as usize + row) * src_row_len + left as usize * CHANNELS as usize;
            if let Some(src_row) = self.pixels.get(start..start + region_row_len) {
                pixels.extend_from_slice(src_row);
            }
        }
        Self::from_raw(width, height, pixels)
    }
}
