//! In-memory codec double for unit tests. Speaks a trivial fake wire
//! format so pipeline tests need no real image bytes:
//! `[w: u32 le][h: u32 le][seed: u8]`, or the literal bytes `BAD` for a
//! buffer that refuses to decode.

#![allow(clippy::unwrap_used, clippy::indexing_slicing)]

use domain::frame::RgbaFrame;

use crate::ports::outgoing::image_codec::{CodecFailure, ImageCodecPort};

pub struct StubCodec;

pub fn stub_buffer(width: u32, height: u32, seed: u8) -> Vec<u8> {
    let mut data = Vec::with_capacity(9);
    data.extend_from_slice(&width.to_le_bytes());
    data.extend_from_slice(&height.to_le_bytes());
    data.push(seed);
    data
}

/// Deterministic per-pixel content so row copies can be verified.
pub fn stub_frame(width: u32, height: u32, seed: u8) -> RgbaFrame {
    let mut pixels = Vec::new();
    for y in 0..height {
        for x in 0..width {
            pixels.extend_from_slice(&[x as u8, y as u8, seed, 255]);
        }
    }
    RgbaFrame::from_raw(width, height, pixels).unwrap()
}

fn parse(data: &[u8]) -> Result<(u32, u32, u8), CodecFailure> {
    if data.starts_with(b"BAD") || data.len() != 9 {
        return Err(CodecFailure {
            message: "unrecognized image format".to_string(),
        });
    }
    let width = u32::from_le_bytes(data[0..4].try_into().unwrap());
    let height = u32::from_le_bytes(data[4..8].try_into().unwrap());
    Ok((width, height, data[8]))
}

impl ImageCodecPort for StubCodec {
    fn decode_rgba(&self, data: &[u8]) -> Result<RgbaFrame, CodecFailure> {
        let (width, height, seed) = parse(data)?;
        Ok(stub_frame(width, height, seed))
    }

    fn probe_dimensions(&self, data: &[u8]) -> Result<(u32, u32), CodecFailure> {
        let (width, height, _) = parse(data)?;
        Ok((width, height))
    }

    fn resize_to_cover(
        &self,
        data: &[u8],
        width: u32,
        height: u32,
    ) -> Result<RgbaFrame, CodecFailure> {
        let (_, _, seed) = parse(data)?;
        Ok(stub_frame(width, height, seed))
    }

    fn encode_png(&self, frame: &RgbaFrame) -> Result<Vec<u8>, CodecFailure> {
        let mut bytes = Vec::with_capacity(8 + frame.pixels().len());
        bytes.extend_from_slice(&frame.width().to_le_bytes());
        bytes.extend_from_slice(&frame.height().to_le_bytes());
        bytes.extend_from_slice(frame.pixels());
        Ok(bytes)
    }
}
