//! Structured error types for dashctl-core and the panel builders.
//!
//! Library crates return `DashError`; the `dashctl` binary wraps it in
//! `anyhow` for context. `ErrorKind` is the comparable sentinel callers
//! match on when they only care about the category.

use thiserror::Error;

/// Category of a [`DashError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// An option was given a value outside its accepted range.
    InvalidArgument,
    /// A caller-supplied option failed.
    Option,
    /// Serializing a descriptor failed.
    Render,
}

impl ErrorKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorKind::InvalidArgument => "invalid argument",
            ErrorKind::Option => "option",
            ErrorKind::Render => "render",
        }
    }
}

/// Main error type for panel construction
#[derive(Error, Debug)]
pub enum DashError {
    /// Out-of-range option value (e.g. a span outside 1..=12)
    #[error("invalid argument for '{option}': {reason}")]
    InvalidArgument { option: String, reason: String },

    /// Error returned by a custom option, passed through untouched
    #[error(transparent)]
    Option {
        #[from]
        source: anyhow::Error,
    },

    /// JSON/YAML serialization failed
    #[error("failed to render {context}: {reason}")]
    Render { context: String, reason: String },
}

/// Result type alias for dashctl operations
pub type Result<T> = std::result::Result<T, DashError>;

impl DashError {
    /// Create an invalid argument error
    pub fn invalid_argument(option: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidArgument {
            option: option.into(),
            reason: reason.into(),
        }
    }

    /// Wrap an arbitrary error coming out of a custom option.
    ///
    /// A `DashError` boxed inside `anyhow` is unwrapped so its kind survives.
    pub fn option(source: impl Into<anyhow::Error>) -> Self {
        let source = source.into();
        match source.downcast::<DashError>() {
            Ok(err) => err,
            Err(source) => Self::Option { source },
        }
    }

    /// Create a render error
    pub fn render(context: impl Into<String>, reason: impl ToString) -> Self {
        Self::Render {
            context: context.into(),
            reason: reason.to_string(),
        }
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            DashError::InvalidArgument { .. } => ErrorKind::InvalidArgument,
            DashError::Option { .. } => ErrorKind::Option,
            DashError::Render { .. } => ErrorKind::Render,
        }
    }

    pub fn is_invalid_argument(&self) -> bool {
        self.kind() == ErrorKind::InvalidArgument
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = DashError::invalid_argument("span", "must be between 1 and 12, got 15");
        assert_eq!(
            err.to_string(),
            "invalid argument for 'span': must be between 1 and 12, got 15"
        );
        assert!(err.is_invalid_argument());
    }

    #[test]
    fn test_kind_names() {
        assert_eq!(ErrorKind::InvalidArgument.as_str(), "invalid argument");
        assert_eq!(ErrorKind::Option.as_str(), "option");
        assert_eq!(DashError::render("json", "eof").kind().as_str(), "render");
    }

    #[test]
    fn test_option_error_passthrough() {
        let err = DashError::option(anyhow::anyhow!("folder lookup failed"));
        assert_eq!(err.kind(), ErrorKind::Option);
        assert_eq!(err.to_string(), "folder lookup failed");
    }

    #[test]
    fn test_option_error_keeps_inner_kind() {
        let inner = anyhow::Error::new(DashError::invalid_argument("limit", "negative"));
        let err = DashError::option(inner);
        assert!(err.is_invalid_argument());
    }
}
