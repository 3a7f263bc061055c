use serde::{Deserialize, Serialize};
#[cfg(feature = "docs")]
use utoipa::ToSchema;

use imgstack_application::payload::ComposeInput;

/// Composite request body. All three fields are required; they are modeled
/// as `Option` so the pipeline can report exactly which ones are missing
/// instead of axum rejecting the whole body.
#[cfg_attr(feature = "docs", derive(ToSchema))]
#[cfg_attr(feature = "docs", schema(
    description = "Three base64-encoded images: AI-generated body plus header and footer templates.",
    example = json!({
        "aiImage": "iVBORw0KG...",
        "headerTemplate": "iVBORw0KG...",
        "footerTemplate": "iVBORw0KG..."
    })
))]
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompositeRequest {
    #[serde(rename = "aiImage")]
    pub ai_image: Option<String>,
    #[serde(rename = "headerTemplate")]
    pub header_template: Option<String>,
    #[serde(rename = "footerTemplate")]
    pub footer_template: Option<String>,
}

impl CompositeRequest {
    #[must_use]
    pub fn into_input(self) -> ComposeInput {
        ComposeInput {
            ai_image: self.ai_image,
            header_template: self.header_template,
            footer_template: self.footer_template,
        }
    }
}
