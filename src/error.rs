//! Error Taxonomy
//!
//! Nothing here is fatal: validation blocks a submit before any network
//! call, generation errors are folded into fallback captions inside the
//! gemini module, and everything else surfaces as one generic retry message.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum PassportError {
    /// Required nickname missing after trimming
    #[error("nickname is required")]
    MissingNickname,

    /// Caption service unreachable or returned nothing usable.
    /// Never escapes `gemini::generate_caption`.
    #[error("caption generation failed: {0}")]
    Generation(String),

    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("encode failed: {0}")]
    Encode(#[from] serde_json::Error),
}
