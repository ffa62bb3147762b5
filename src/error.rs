use thiserror::Error;

/// Result alias for the fallible codec and configuration entry points.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors surfaced by `try_*` decoding and configuration loading.
#[derive(Error, Debug)]
pub enum Error {
    /// The input was not a valid JSON encoding of the requested value.
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    /// A duration tag was empty; an empty tag means no duration is set.
    #[error("empty duration tag")]
    EmptyDurationTag,

    /// The configuration document could not be parsed.
    #[error("config error: {0}")]
    Config(#[from] toml::de::Error),
}
