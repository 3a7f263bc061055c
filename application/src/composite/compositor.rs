use domain::canvas::{Band, CANVAS_HEIGHT, CANVAS_WIDTH, LayerRole};
use domain::error::DomainError;
use domain::frame::{OPAQUE_WHITE, RgbaFrame};

use crate::error::AppResult;

/// Builds the 1080x1350 opaque-white canvas and places the three layers in
/// their bands. Bands never overlap, so placement order does not affect the
/// output pixels, only which mismatch is reported first.
pub fn compose_layers(
    header: &RgbaFrame,
    body: &RgbaFrame,
    footer: &RgbaFrame,
) -> AppResult<RgbaFrame> {
    check_band_fit(LayerRole::HeaderTemplate, header)?;
    check_band_fit(LayerRole::AiImage, body)?;
    check_band_fit(LayerRole::FooterTemplate, footer)?;

    let mut canvas = RgbaFrame::filled(CANVAS_WIDTH, CANVAS_HEIGHT, OPAQUE_WHITE);
    canvas.blit(header, 0, Band::Header.top())?;
    canvas.blit(body, 0, Band::Body.top())?;
    canvas.blit(footer, 0, Band::Footer.top())?;
    Ok(canvas)
}

/// A layer must span the full canvas width and fit its band vertically;
/// a taller template would bleed into the neighboring band. The body is
/// held to the exact band height since normalization already produced it.
fn check_band_fit(role: LayerRole, frame: &RgbaFrame) -> AppResult<()> {
    let band = role.band();
    if frame.width() != CANVAS_WIDTH {
        return Err(DomainError::LayerSizeMismatch {
            layer: role.to_string(),
            message: format!("width {} != canvas width {CANVAS_WIDTH}", frame.width()),
        }
        .into());
    }

    let exact = band == Band::Body;
    if (exact && frame.height() != band.height()) || frame.height() > band.height() {
        return Err(DomainError::LayerSizeMismatch {
            layer: role.to_string(),
            message: format!(
                "height {} does not fit the {}px band",
                frame.height(),
                band.height()
            ),
        }
        .into());
    }
    Ok(())
}

#[cfg(test)]
#[allow(clippy::panic, clippy::unwrap_used)]
mod tests {
    use super::compose_layers;
    use crate::composite::testing::stub_frame;
    use crate::error::AppError;
    use domain::error::DomainError;
    use domain::frame::{OPAQUE_WHITE, RgbaFrame};

    #[test]
    fn canvas_is_always_1080_by_1350() {
        let canvas = compose_layers(
            &stub_frame(1080, 200, 1),
            &stub_frame(1080, 950, 2),
            &stub_frame(1080, 200, 3),
        )
        .unwrap();
        assert_eq!((canvas.width(), canvas.height()), (1080, 1350));
    }

    #[test]
    fn layers_land_in_their_bands() {
        let canvas = compose_layers(
            &RgbaFrame::filled(1080, 200, [255, 0, 0, 255]),
            &RgbaFrame::filled(1080, 950, [0, 255, 0, 255]),
            &RgbaFrame::filled(1080, 200, [0, 0, 255, 255]),
        )
        .unwrap();

        assert_eq!(canvas.pixel_at(540, 0), Some([255, 0, 0, 255]));
        assert_eq!(canvas.pixel_at(540, 199), Some([255, 0, 0, 255]));
        assert_eq!(canvas.pixel_at(540, 200), Some([0, 255, 0, 255]));
        assert_eq!(canvas.pixel_at(540, 1149), Some([0, 255, 0, 255]));
        assert_eq!(canvas.pixel_at(540, 1150), Some([0, 0, 255, 255]));
        assert_eq!(canvas.pixel_at(540, 1349), Some([0, 0, 255, 255]));
    }

    #[test]
    fn compositing_is_deterministic() {
        let build = || {
            compose_layers(
                &stub_frame(1080, 200, 1),
                &stub_frame(1080, 950, 2),
                &stub_frame(1080, 200, 3),
            )
            .unwrap()
        };
        assert_eq!(build(), build());
    }

    #[test]
    fn short_template_leaves_white_background_in_its_band() {
        let canvas = compose_layers(
            &RgbaFrame::filled(1080, 120, [255, 0, 0, 255]),
            &stub_frame(1080, 950, 2),
            &stub_frame(1080, 200, 3),
        )
        .unwrap();
        assert_eq!(canvas.pixel_at(10, 119), Some([255, 0, 0, 255]));
        assert_eq!(canvas.pixel_at(10, 120), Some(OPAQUE_WHITE));
        assert_eq!(canvas.pixel_at(10, 199), Some(OPAQUE_WHITE));
    }

    #[test]
    fn overtall_header_is_a_layer_size_mismatch() {
        let err = compose_layers(
            &stub_frame(1080, 201, 1),
            &stub_frame(1080, 950, 2),
            &stub_frame(1080, 200, 3),
        )
        .unwrap_err();
        assert!(matches!(
            err,
            AppError::Domain(DomainError::LayerSizeMismatch { .. })
        ));
        assert!(err.to_string().contains("header"));
    }

    #[test]
    fn narrow_footer_is_a_layer_size_mismatch() {
        let err = compose_layers(
            &stub_frame(1080, 200, 1),
            &stub_frame(1080, 950, 2),
            &stub_frame(1000, 200, 3),
        )
        .unwrap_err();
        assert!(err.to_string().contains("footer"));
    }

    #[test]
    fn wrong_body_height_is_rejected() {
        let err = compose_layers(
            &stub_frame(1080, 200, 1),
            &stub_frame(1080, 949, 2),
            &stub_frame(1080, 200, 3),
        )
        .unwrap_err();
        assert!(err.to_string().contains("AI image"));
    }
}
