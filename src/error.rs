use thiserror::Error;

/// Raised while constructing a classifier. The app cannot work without one.
#[derive(Debug, Error)]
pub enum ModelLoadError {
    #[error("failed to load model {path}: {message}")]
    Model { path: String, message: String },

    #[error("failed to read labels {path}: {source}")]
    Labels {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("labels file {path} has no labels")]
    EmptyLabels { path: String },
}

/// Raised by a single classification request. The user can retry with another photo.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum InferenceError {
    #[error("image is empty")]
    EmptyImage,

    #[error("unable to decode image: {0}")]
    Decode(String),

    #[error("unsupported image orientation value {0}")]
    UnsupportedOrientation(u32),

    #[error("inference failed: {0}")]
    Execution(String),
}
