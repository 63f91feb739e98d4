use thiserror::Error;

/// Failures while loading a lesson payload.
///
/// Rendering never fails; only getting a `Lesson` into memory can.
#[derive(Debug, Error)]
pub enum Error {
    #[error("lesson payload is not valid: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("failed to read lesson: {0}")]
    Io(#[from] std::io::Error),
}
