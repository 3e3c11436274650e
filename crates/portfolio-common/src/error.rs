/// Error types shared by the portfolio crates.
///
/// Rendering itself cannot fail. These cover the two places where input
/// arrives from outside the compiled content: startup validation and
/// section ids taken from a request path. Server-side errors wrap
/// `CommonError` via `#[from]`.

#[derive(Debug, thiserror::Error)]
pub enum CommonError {
    #[error("invalid content: {0}")]
    InvalidContent(String),

    #[error("unknown section: {0}")]
    UnknownSection(String),
}
