#[cfg(feature = "stl-io")]
mod stl;

/// Generic I/O and format‑conversion errors.
///
/// STL support sits behind the `stl-io` cargo feature; the variants
/// themselves are always available.
#[derive(Debug, thiserror::Error)]
pub enum IoError {
    #[error("std::io::Error: {0}")]
    StdIo(#[from] std::io::Error),

    #[error("Could not parse JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Input is malformed: {0}")]
    MalformedInput(String),
}
