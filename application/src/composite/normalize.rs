use serde::{Deserialize, Serialize};
use tracing::debug;

use domain::canvas::{Band, CANVAS_WIDTH, LayerRole};
use domain::frame::RgbaFrame;

use crate::error::{AppError, AppResult};
use crate::ports::outgoing::image_codec::ImageCodecPort;

/// How the body image becomes the fixed-size content block. Chosen once per
/// deployment via config, never per request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum NormalizationPolicy {
    /// Scale to fill 1080x950, centered, cropping overflow.
    ResizeToCover,
    /// The source already carries its own 200px header and footer; cut out
    /// the 1080x950 region between them.
    FixedRegionExtract,
}

/// Turns the raw body buffer into a frame of exactly the body band size.
pub fn normalize_body(
    codec: &dyn ImageCodecPort,
    policy: NormalizationPolicy,
    buffer: &[u8],
) -> AppResult<RgbaFrame> {
    let band = Band::Body;
    match policy {
        NormalizationPolicy::ResizeToCover => {
            let (width, height) =
                codec
                    .probe_dimensions(buffer)
                    .map_err(|e| AppError::DecodeError {
                        role: LayerRole::AiImage,
                        message: e.message,
                    })?;
            debug!(width, height, "probed AI image dimensions");

            codec
                .resize_to_cover(buffer, CANVAS_WIDTH, band.height())
                .map_err(|e| AppError::DecodeError {
                    role: LayerRole::AiImage,
                    message: e.message,
                })
        }
        NormalizationPolicy::FixedRegionExtract => {
            let frame = codec.decode_rgba(buffer).map_err(|e| AppError::DecodeError {
                role: LayerRole::AiImage,
                message: e.message,
            })?;
            debug!(
                width = frame.width(),
                height = frame.height(),
                "decoded AI image for region extract"
            );

            let region = frame.extract_region(0, band.top(), CANVAS_WIDTH, band.height())?;
            Ok(region)
        }
    }
}

#[cfg(test)]
#[allow(clippy::panic, clippy::unwrap_used)]
mod tests {
    use super::{NormalizationPolicy, normalize_body};
    use crate::composite::testing::{StubCodec, stub_buffer, stub_frame};
    use crate::error::AppError;
    use domain::error::DomainError;

    #[test]
    fn resize_policy_always_yields_body_band_size() {
        for (w, h) in [(100, 100), (1080, 950), (4000, 250), (1080, 1150)] {
            let frame =
                normalize_body(&StubCodec, NormalizationPolicy::ResizeToCover, &stub_buffer(w, h, 7))
                    .unwrap();
            assert_eq!((frame.width(), frame.height()), (1080, 950));
        }
    }

    #[test]
    fn extract_policy_copies_source_rows_200_to_1149() {
        let frame = normalize_body(
            &StubCodec,
            NormalizationPolicy::FixedRegionExtract,
            &stub_buffer(1080, 1150, 9),
        )
        .unwrap();
        assert_eq!((frame.width(), frame.height()), (1080, 950));

        let source = stub_frame(1080, 1150, 9);
        for (x, y) in [(0, 0), (500, 10), (1079, 949)] {
            assert_eq!(frame.pixel_at(x, y), source.pixel_at(x, y + 200));
        }
    }

    #[test]
    fn extract_policy_rejects_undersized_source() {
        let err = normalize_body(
            &StubCodec,
            NormalizationPolicy::FixedRegionExtract,
            &stub_buffer(1080, 1149, 0),
        )
        .unwrap_err();
        assert!(matches!(
            err,
            AppError::Domain(DomainError::ExtractOutOfBounds { .. })
        ));
    }

    #[test]
    fn undecodable_body_is_a_decode_error_naming_the_ai_image() {
        let err = normalize_body(&StubCodec, NormalizationPolicy::ResizeToCover, b"BAD bytes")
            .unwrap_err();
        assert!(matches!(err, AppError::DecodeError { .. }));
        assert!(err.to_string().contains("AI image"));
    }
}
