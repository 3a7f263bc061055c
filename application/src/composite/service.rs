use tracing::{debug, info, instrument};

use domain::canvas::LayerRole;
use domain::frame::RgbaFrame;

use crate::composite::compositor;
use crate::composite::normalize::{NormalizationPolicy, normalize_body};
use crate::error::{AppError, AppResult};
use crate::payload;
use crate::payload::ComposeInput;
use crate::ports::incoming::composite::CompositeUseCase;
use crate::ports::outgoing::image_codec::DynImageCodecPort;

/// Pipeline orchestrator: validate -> decode payloads -> decode/normalize
/// pixels -> composite -> encode. Any failure short-circuits with its
/// classified error; nothing is retried and no partial result escapes.
pub struct CompositeService {
    codec: DynImageCodecPort,
    policy: NormalizationPolicy,
}

impl CompositeService {
    pub fn new(codec: DynImageCodecPort, policy: NormalizationPolicy) -> Self {
        Self { codec, policy }
    }

    fn decode_template(&self, role: LayerRole, buffer: &[u8]) -> AppResult<RgbaFrame> {
        let frame = self
            .codec
            .decode_rgba(buffer)
            .map_err(|e| AppError::DecodeError {
                role,
                message: e.message,
            })?;
        debug!(
            role = %role,
            width = frame.width(),
            height = frame.height(),
            "decoded template image"
        );
        Ok(frame)
    }
}

#[async_trait::async_trait]
impl CompositeUseCase for CompositeService {
    #[instrument(skip(self, input))]
    async fn compose(&self, input: ComposeInput) -> AppResult<String> {
        let payloads = payload::decode_payloads(&input)?;
        debug!(
            ai_bytes = payloads.ai_image.len(),
            header_bytes = payloads.header_template.len(),
            footer_bytes = payloads.footer_template.len(),
            "decoded base64 payloads"
        );

        let header = self.decode_template(LayerRole::HeaderTemplate, &payloads.header_template)?;
        let footer = self.decode_template(LayerRole::FooterTemplate, &payloads.footer_template)?;
        let body = normalize_body(&*self.codec, self.policy, &payloads.ai_image)?;

        let canvas = compositor::compose_layers(&header, &body, &footer)?;

        let png = self
            .codec
            .encode_png(&canvas)
            .map_err(|e| AppError::EncodeError { message: e.message })?;
        info!(png_bytes = png.len(), "composite image created");

        Ok(payload::encode_base64(&png))
    }
}
