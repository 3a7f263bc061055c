use thiserror::Error;

#[derive(Error, Debug)]
pub enum DomainError {
    #[error("Invalid frame dimensions: {message}")]
    InvalidFrameDimensions { message: String },

    #[error("Layer size mismatch for {layer}: {message}")]
    LayerSizeMismatch { layer: String, message: String },

    #[error("Extract region out of bounds: {message}")]
    ExtractOutOfBounds { message: String },
}

pub type DomainResult<T> = Result<T, DomainError>;
