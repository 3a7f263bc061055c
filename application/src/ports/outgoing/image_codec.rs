use std::sync::Arc;

use domain::frame::RgbaFrame;

/// A codec-level failure without classification; the orchestrator attaches
/// the layer role when it maps this into an `AppError`.
#[derive(Debug)]
pub struct CodecFailure {
    pub message: String,
}

pub trait ImageCodecPort: Send + Sync {
    /// Decodes an encoded image buffer (format sniffed from magic bytes)
    /// into an RGBA frame.
    fn decode_rgba(&self, data: &[u8]) -> Result<RgbaFrame, CodecFailure>;

    /// Reads the pixel dimensions without decoding the full image.
    fn probe_dimensions(&self, data: &[u8]) -> Result<(u32, u32), CodecFailure>;

    /// Aspect-filling resize to exactly `width` x `height`, centered,
    /// cropping overflow from the longer dimension.
    fn resize_to_cover(&self, data: &[u8], width: u32, height: u32)
    -> Result<RgbaFrame, CodecFailure>;

    /// Encodes a frame as lossless PNG with the alpha channel preserved.
    fn encode_png(&self, frame: &RgbaFrame) -> Result<Vec<u8>, CodecFailure>;
}

pub type DynImageCodecPort = Arc<dyn ImageCodecPort>;
