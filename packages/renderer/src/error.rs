//! Error types for the renderer.
//!
//! A single `RenderError` enum covers both I/O at the edges and the
//! structural errors a malformed document can produce during rendering.

use thiserror::Error;

/// Main error type for the renderer library.
#[derive(Debug, Error)]
pub enum RenderError {
    /// XML parsing failed.
    #[error("XML parsing failed: {0}")]
    XmlParse(#[from] roxmltree::Error),

    /// A `<link>` element without the `label;URL` separator.
    #[error("Malformed link content: '{content}'. Expected 'label;URL'")]
    MalformedLink { content: String },

    /// Unified `<contact>` element missing a required sub-field.
    #[error("Contact element is missing required field <{field}>")]
    MissingContactField { field: &'static str },

    /// A `columns` attribute that is not a positive integer within range.
    #[error("Invalid columns attribute: '{value}'. Expected an integer between 1 and {max}")]
    InvalidColumns { value: String, max: usize },

    /// A `<progress>` element whose content is not an integer.
    #[error("Invalid progress value: '{value}'. Expected an integer between 0 and 100")]
    InvalidProgress { value: String },

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization of the layout tree failed.
    #[error("JSON serialization failed: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias for renderer operations.
pub type Result<T> = std::result::Result<T, RenderError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_malformed_link_display() {
        let err = RenderError::MalformedLink {
            content: "NoSeparator".to_string(),
        };
        assert!(err.to_string().contains("NoSeparator"));
        assert!(err.to_string().contains("label;URL"));
    }

    #[test]
    fn test_missing_contact_field_display() {
        let err = RenderError::MissingContactField { field: "type" };
        assert_eq!(
            err.to_string(),
            "Contact element is missing required field <type>"
        );
    }

    #[test]
    fn test_invalid_columns_display() {
        let err = RenderError::InvalidColumns {
            value: "lots".to_string(),
            max: 12,
        };
        assert!(err.to_string().contains("lots"));
        assert!(err.to_string().contains("12"));
    }
}
