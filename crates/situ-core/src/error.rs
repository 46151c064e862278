// crates/situ-core/src/error.rs
// Standardized error types for situ

use thiserror::Error;

/// Main error type for the situ core library
#[derive(Error, Debug)]
pub enum SituError {
    /// Feed answered with a non-success status
    #[error("HTTP error! status: {0}")]
    Network(u16),

    /// Request never produced a response
    #[error("request failed: {0}")]
    Transport(String),

    /// Payload decoded but is not shaped like a feed
    #[error("{0}")]
    Shape(String),

    #[error("JSON decode error: {0}")]
    Json(#[from] serde_json::Error),

    /// Carousel content measured as zero or NaN; retried on the next layout pass
    #[error("carousel content has no measurable width ({0})")]
    RenderDegenerate(f64),
}

/// Convenience type alias for Result using SituError
pub type Result<T> = std::result::Result<T, SituError>;

impl SituError {
    /// Convert to the message shown next to an empty result set
    pub fn to_user_string(&self) -> String {
        self.to_string()
    }
}

impl From<SituError> for String {
    fn from(err: SituError) -> Self {
        err.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_network_error_message() {
        let err = SituError::Network(404);
        assert_eq!(err.to_string(), "HTTP error! status: 404");
    }

    #[test]
    fn test_shape_error_is_verbatim() {
        let err = SituError::Shape("Product data is not in the expected format.".to_string());
        assert_eq!(err.to_user_string(), "Product data is not in the expected format.");
    }

    #[test]
    fn test_from_json_error() {
        let json_err = serde_json::from_str::<i32>("not json").unwrap_err();
        let err: SituError = json_err.into();
        assert!(matches!(err, SituError::Json(_)));
        assert!(err.to_string().contains("JSON"));
    }

    #[test]
    fn test_render_degenerate_message() {
        let err = SituError::RenderDegenerate(0.0);
        assert!(err.to_string().contains("no measurable width"));
    }

    #[test]
    fn test_into_string() {
        let s: String = SituError::Transport("offline".to_string()).into();
        assert_eq!(s, "request failed: offline");
    }
}
