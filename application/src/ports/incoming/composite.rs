use crate::error::AppResult;
use crate::payload::ComposeInput;

/// The one use case this service exposes: stack header, normalized body and
/// footer into the fixed-size canvas and return it as a base64 PNG string.
#[async_trait::async_trait]
pub trait CompositeUseCase: Send + Sync {
    async fn compose(&self, input: ComposeInput) -> AppResult<String>;
}
