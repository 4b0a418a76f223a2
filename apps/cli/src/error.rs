use thiserror::Error;

/// Result type for the converter binary
pub type Result<T> = std::result::Result<T, Error>;

/// Everything that can abort a conversion run
#[derive(Error, Debug)]
pub enum Error {
    #[error("cannot read {path}: {source}")]
    ReadInput {
        path: String,
        source: std::io::Error,
    },

    #[error("cannot decode image {path}: {source}")]
    DecodeImage {
        path: String,
        source: image::ImageError,
    },

    #[error("invalid layer config {path}: {source}")]
    LayerConfig {
        path: String,
        source: serde_json::Error,
    },

    #[error("layer processing failed: {0}")]
    Pipeline(#[from] vmf_lite_core::Error),

    #[error(transparent)]
    Emit(#[from] vmf_lite_vmf::Error),

    #[error("cannot write {path}: {source}")]
    WriteOutput {
        path: String,
        source: std::io::Error,
    },
}
