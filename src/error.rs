use std::fmt;

/// The main error type for the ternplot crate
#[derive(Debug)]
pub enum TernplotError {
    /// No reference colormap is registered under the requested name
    UnknownColorMap(String),

    /// A numeric parameter fell outside its accepted domain
    InvalidParameter {
        param: &'static str,
        value: f64,
        reason: &'static str,
    },

    /// Ternary data that doesn't fit the simplex or couldn't be read
    InvalidData(String),

    /// A configuration value was missing its expected type or variant
    Config(String),

    /// Error occurred while parsing JSON input
    Json(json::Error),

    /// Error occurred while writing or encoding an image
    ImageEncode(image::ImageError),

    /// The plotting backend failed to draw an element
    Draw(String),

    /// Error occurred during I/O operations (file read/write)
    Io(std::io::Error),
}

impl fmt::Display for TernplotError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TernplotError::UnknownColorMap(name) => write!(f, "Unknown colormap: {}", name),
            TernplotError::InvalidParameter {
                param,
                value,
                reason,
            } => write!(f, "Invalid {} = {}: {}", param, value, reason),
            TernplotError::InvalidData(msg) => write!(f, "Invalid ternary data: {}", msg),
            TernplotError::Config(msg) => write!(f, "ConfigParseError {}", msg),
            TernplotError::Json(e) => write!(f, "JSON error: {}", e),
            TernplotError::ImageEncode(e) => write!(f, "Image encode error: {}", e),
            TernplotError::Draw(msg) => write!(f, "Drawing error: {}", msg),
            TernplotError::Io(e) => write!(f, "I/O error: {}", e),
        }
    }
}

impl std::error::Error for TernplotError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            TernplotError::Json(e) => Some(e),
            TernplotError::ImageEncode(e) => Some(e),
            TernplotError::Io(e) => Some(e),
            _ => None,
        }
    }
}

// From implementations for automatic conversion from common error types

impl From<image::ImageError> for TernplotError {
    fn from(err: image::ImageError) -> Self {
        // an image wrapping an io failure is still an io failure for the caller
        match err {
            image::ImageError::IoError(e) => TernplotError::Io(e),
            _ => TernplotError::ImageEncode(err),
        }
    }
}

impl<E> From<plotters::drawing::DrawingAreaErrorKind<E>> for TernplotError
where
    E: std::error::Error + Send + Sync,
{
    fn from(err: plotters::drawing::DrawingAreaErrorKind<E>) -> Self {
        TernplotError::Draw(err.to_string())
    }
}

impl From<json::Error> for TernplotError {
    fn from(err: json::Error) -> Self {
        TernplotError::Json(err)
    }
}

impl From<std::io::Error> for TernplotError {
    fn from(err: std::io::Error) -> Self {
        TernplotError::Io(err)
    }
}

// Convenience type alias for Results using TernplotError
pub type Result<T = ()> = std::result::Result<T, TernplotError>;
