use base64::Engine as _;
use base64::engine::general_purpose::STANDARD;

use domain::canvas::LayerRole;

use crate::error::{AppError, AppResult};

/// Raw request fields as submitted by the caller, before any validation.
/// `None` means the field was absent from the request body.
#[derive(Debug, Clone, Default)]
pub struct ComposeInput {
    pub ai_image: Option<String>,
    pub header_template: Option<String>,
    pub footer_template: Option<String>,
}

/// The three base64 payloads decoded to raw image bytes. Each buffer is
/// guaranteed non-empty; no pixel decoding has happened yet.
#[derive(Debug)]
pub struct DecodedPayloads {
    pub ai_image: Vec<u8>,
    pub header_template: Vec<u8>,
    pub footer_template: Vec<u8>,
}

pub fn decode_payloads(input: &ComposeInput) -> AppResult<DecodedPayloads> {
    let fields = [
        (LayerRole::AiImage, input.ai_image.as_deref()),
        (LayerRole::HeaderTemplate, input.header_template.as_deref()),
        (LayerRole::FooterTemplate, input.footer_template.as_deref()),
    ];

    let missing: Vec<&str> = fields
        .iter()
        .filter(|(_, value)| value.is_none())
        .map(|(role, _)| role.field_name())
        .collect();
    if !missing.is_empty() {
        return Err(AppError::MissingFields {
            fields: missing.join(", "),
        });
    }

    Ok(DecodedPayloads {
        ai_image: decode_field(LayerRole::AiImage, input.ai_image.as_deref().unwrap_or(""))?,
        header_template: decode_field(
            LayerRole::HeaderTemplate,
            input.header_template.as_deref().unwrap_or(""),
        )?,
        footer_template: decode_field(
            LayerRole::FooterTemplate,
            input.footer_template.as_deref().unwrap_or(""),
        )?,
    })
}

/// Strips every whitespace character; base64 producers love to wrap lines.
fn clean(raw: &str) -> String {
    raw.chars().filter(|c| !c.is_whitespace()).collect()
}

fn decode_field(role: LayerRole, raw: &str) -> AppResult<Vec<u8>> {
    let cleaned = clean(raw);
    if cleaned.is_empty() {
        return Err(AppError::EmptyAfterCleaning {
            field: role.field_name().to_string(),
        });
    }

    let buffer = STANDARD
        .decode(&cleaned)
        .map_err(|e| AppError::InvalidEncoding {
            field: role.field_name().to_string(),
            message: e.to_string(),
        })?;
    if buffer.is_empty() {
        return Err(AppError::InvalidEncoding {
            field: role.field_name().to_string(),
            message: "decoded buffer is empty".to_string(),
        });
    }
    Ok(buffer)
}

#[must_use]
pub fn encode_base64(bytes: &[u8]) -> String {
    STANDARD.encode(bytes)
}
