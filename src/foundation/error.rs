/// Convenience result type used across the crate.
pub type SweepResult<T> = Result<T, SweepError>;

/// Errors produced by layout, clip computation, rendering and configuration.
#[derive(thiserror::Error, Debug)]
pub enum SweepError {
    /// Configuration or argument rejected before any work was done.
    #[error("validation error: {0}")]
    Validation(String),

    /// Line metrics that cannot produce a clip region (for example zero lines).
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// Text shaping or line breaking failed.
    #[error("layout error: {0}")]
    Layout(String),

    /// Drawing surface failure.
    #[error("render error: {0}")]
    Render(String),

    /// Style or report (de)serialization failure.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Anything else, typically I/O from sinks.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl SweepError {
    /// Build a [`SweepError::Validation`].
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`SweepError::InvalidInput`].
    pub fn invalid_input(msg: impl Into<String>) -> Self {
        Self::InvalidInput(msg.into())
    }

    /// Build a [`SweepError::Layout`].
    pub fn layout(msg: impl Into<String>) -> Self {
        Self::Layout(msg.into())
    }

    /// Build a [`SweepError::Render`].
    pub fn render(msg: impl Into<String>) -> Self {
        Self::Render(msg.into())
    }

    /// Build a [`SweepError::Serde`].
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }

    /// Return `true` for errors that mean "no clip region exists for this frame".
    pub fn is_invalid_input(&self) -> bool {
        matches!(self, Self::InvalidInput(_))
    }
}
