/// Convenience result type used across inkframe.
pub type InkResult<T> = Result<T, InkError>;

/// Pipeline stage an error was raised from.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Stage {
    /// Node tree to box geometry (taffy).
    Layout,
    /// Vector document parsing and text shaping (usvg).
    Shaping,
    /// Vector to pixel conversion (resvg).
    Raster,
    /// Pixel buffer to file format (image).
    Encode,
}

impl std::fmt::Display for Stage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Self::Layout => "layout",
            Self::Shaping => "shaping",
            Self::Raster => "raster",
            Self::Encode => "encode",
        };
        f.write_str(s)
    }
}

/// Top-level error taxonomy used by the render pipeline.
#[derive(thiserror::Error, Debug)]
pub enum InkError {
    /// Invalid caller input (poem shape, name, canvas). Raised before any rendering work.
    #[error("validation error: {0}")]
    Validation(String),

    /// Neither the primary nor the fallback font could be loaded.
    #[error("font load error: style '{style}' unresolved (tried {})", attempted.join(", "))]
    FontLoad {
        /// Requested style keyword.
        style: String,
        /// Every locator that was attempted, in order.
        attempted: Vec<String>,
    },

    /// The layout or shaping engine rejected the composed document.
    #[error("shaping error ({stage}): {message}")]
    Shaping {
        /// Failing stage.
        stage: Stage,
        /// Engine diagnostic.
        message: String,
    },

    /// Vector to pixel conversion or pixel encoding failed.
    #[error("rasterization error ({stage}): {message}")]
    Rasterization {
        /// Failing stage.
        stage: Stage,
        /// Diagnostic.
        message: String,
    },

    /// Errors when serializing or deserializing data structures.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl InkError {
    /// Build an [`InkError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build an [`InkError::FontLoad`] value.
    pub fn font_load(style: impl Into<String>, attempted: Vec<String>) -> Self {
        Self::FontLoad {
            style: style.into(),
            attempted,
        }
    }

    /// Build an [`InkError::Shaping`] value.
    pub fn shaping(stage: Stage, msg: impl Into<String>) -> Self {
        Self::Shaping {
            stage,
            message: msg.into(),
        }
    }

    /// Build an [`InkError::Rasterization`] value.
    pub fn raster(stage: Stage, msg: impl Into<String>) -> Self {
        Self::Rasterization {
            stage,
            message: msg.into(),
        }
    }

    /// Build an [`InkError::Serde`] value.
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }

    /// Return `true` for errors caused by the caller's input rather than the render stack.
    pub fn is_client_error(&self) -> bool {
        matches!(self, Self::Validation(_) | Self::Serde(_))
    }

    /// Prefix the diagnostic with request context (style, frame id) without changing the kind.
    pub fn with_context(self, ctx: &str) -> Self {
        match self {
            Self::Validation(m) => Self::Validation(format!("{ctx}: {m}")),
            Self::Shaping { stage, message } => Self::Shaping {
                stage,
                message: format!("{ctx}: {message}"),
            },
            Self::Rasterization { stage, message } => Self::Rasterization {
                stage,
                message: format!("{ctx}: {message}"),
            },
            Self::Serde(m) => Self::Serde(format!("{ctx}: {m}")),
            Self::Other(e) => Self::Other(e.context(ctx.to_string())),
            e @ Self::FontLoad { .. } => e,
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
