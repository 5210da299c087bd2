/*!
 * Error types for the gacha-history application.
 *
 * Each stage that talks to the outside world (network, HTML, filesystem)
 * gets its own error enum, defined with the thiserror crate. The banner
 * normalization core has no error type: every operation there is total.
 */

use thiserror::Error;

/// Errors that can occur while downloading a wiki page
#[derive(Error, Debug)]
pub enum FetchError {
    /// The request could not be sent or the connection failed
    #[error("Request failed: {0}")]
    RequestFailed(String),

    /// The server answered with a non-success status
    #[error("HTTP {status_code} while fetching {url}")]
    HttpStatus {
        /// HTTP status code
        status_code: u16,
        /// Requested URL
        url: String,
    },

    /// The response body could not be read as text
    #[error("Failed to read response body: {0}")]
    BodyDecode(String),
}

/// Errors that can occur while extracting banner rows from a page
#[derive(Error, Debug)]
pub enum ExtractError {
    /// A CSS selector failed to compile
    #[error("Invalid selector '{0}'")]
    InvalidSelector(String),

    /// The page contained no banner tables at all
    #[error("No banner tables found on the {site} page")]
    NoBanners {
        /// Display name of the site
        site: String,
    },
}

/// Errors that can occur while writing the YAML output
#[derive(Error, Debug)]
pub enum EmitError {
    /// Records could not be serialized
    #[error("Failed to serialize banners: {0}")]
    Serialize(#[from] serde_yaml::Error),

    /// The output file could not be written
    #[error("Failed to write {path}: {message}")]
    Write {
        /// Target path
        path: String,
        /// Underlying error message
        message: String,
    },
}

/// Main application error type that wraps all other errors
#[derive(Error, Debug)]
pub enum AppError {
    /// Error from a file operation
    #[error("File error: {0}")]
    File(String),

    /// Error while fetching a page
    #[error("Fetch error: {0}")]
    Fetch(#[from] FetchError),

    /// Error while extracting rows
    #[error("Extract error: {0}")]
    Extract(#[from] ExtractError),

    /// Error while emitting output
    #[error("Emit error: {0}")]
    Emit(#[from] EmitError),

    /// Any other error
    #[error("Unknown error: {0}")]
    Unknown(String),
}

impl From<anyhow::Error> for AppError {
    fn from(error: anyhow::Error) -> Self {
        Self::Unknown(error.to_string())
    }
}

impl From<std::io::Error> for AppError {
    fn from(error: std::io::Error) -> Self {
        Self::File(error.to_string())
    }
}

impl From<reqwest::Error> for FetchError {
    fn from(error: reqwest::Error) -> Self {
        Self::RequestFailed(error.to_string())
    }
}
