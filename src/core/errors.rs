use thiserror::Error;

#[derive(Error, Debug)]
pub enum PraepdrillError {
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("verb catalog has no usable entries")]
    EmptyCatalog,
}
