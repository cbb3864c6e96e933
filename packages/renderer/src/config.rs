//! Configuration constants and validation functions for the renderer.

use std::path::Path;

use crate::error::{RenderError, Result};

/// Default port for the local web server.
pub const DEFAULT_PORT: u16 = 8888;

/// Default input document path, relative to the working directory.
pub const DEFAULT_INPUT_PATH: &str = "resume.xml";

/// Upper bound for the `columns` attribute override.
///
/// Matches the 12-column Bootstrap grid the page is laid out on; asking
/// for more columns than the grid has would silently collapse rows.
pub const MAX_COLUMNS: usize = 12;

/// Bootstrap stylesheet linked from the rendered page.
pub const BOOTSTRAP_CSS_URL: &str =
    "https://cdn.jsdelivr.net/npm/bootstrap@5.3.3/dist/css/bootstrap.min.css";

/// Title of the rendered page.
pub const PAGE_TITLE: &str = "Curriculum Vitae";

/// Validate that the input document path exists and is a regular file.
///
/// # Arguments
/// * `path` - Path to the XML document
///
/// # Returns
/// * `Ok(())` if the path points at a readable file
/// * `Err(RenderError::Io)` otherwise
pub fn validate_input_path(path: &Path) -> Result<()> {
    if !path.exists() {
        return Err(RenderError::Io(std::io::Error::new(
            std::io::ErrorKind::NotFound,
            format!("Input document does not exist: {}", path.display()),
        )));
    }
    if !path.is_file() {
        return Err(RenderError::Io(std::io::Error::new(
            std::io::ErrorKind::InvalidInput,
            format!("Input path is not a file: {}", path.display()),
        )));
    }
    Ok(())
}

/// Parse a `columns` attribute value into a usable column count.
///
/// # Arguments
/// * `value` - Raw attribute text
///
/// # Returns
/// * `Ok(columns)` for an integer in `1..=MAX_COLUMNS`
/// * `Err(RenderError::InvalidColumns)` otherwise
///
/// # Examples
/// ```
/// use vitae_renderer::config::parse_columns;
///
/// assert_eq!(parse_columns("3").unwrap(), 3);
/// assert!(parse_columns("0").is_err());
/// assert!(parse_columns("wide").is_err());
/// ```
pub fn parse_columns(value: &str) -> Result<usize> {
    value
        .trim()
        .parse::<usize>()
        .ok()
        .filter(|columns| (1..=MAX_COLUMNS).contains(columns))
        .ok_or_else(|| RenderError::InvalidColumns {
            value: value.to_string(),
            max: MAX_COLUMNS,
        })
}
