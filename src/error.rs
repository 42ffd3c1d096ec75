use thiserror::Error;

/// Failures while binding the interaction layer to a page
#[derive(Debug, Error)]
pub enum FxError {
    #[error("no browser window")]
    NoWindow,
    #[error("window has no document")]
    NoDocument,
    #[error("invalid fx config: {0}")]
    Config(#[from] serde_json::Error),
}

/// A style or class write the rendering surface refused
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SurfaceError {
    #[error("cannot set `{property}`: {message}")]
    Style { property: String, message: String },
    #[error("cannot update class `{class}`: {message}")]
    ClassList { class: String, message: String },
}
