use serde::Serialize;
#[cfg(feature = "docs")]
use utoipa::ToSchema;

#[cfg_attr(feature = "docs", derive(ToSchema))]
#[cfg_attr(feature = "docs", schema(
    description = "Successful composite: the stacked 1080x1350 image as a base64 PNG string.",
    example = json!({ "success": true, "image": "iVBORw0KG..." })
))]
#[derive(Debug, Clone, Serialize)]
pub struct CompositeResponse {
    pub success: bool,
    pub image: String,
}

impl CompositeResponse {
    #[must_use]
    pub fn with_image(image: String) -> Self {
        Self {
            success: true,
            image,
        }
    }
}

#[cfg_attr(feature = "docs", derive(ToSchema))]
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    pub status: String,
}
