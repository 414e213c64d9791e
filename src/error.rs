//! Error types for bounded-arith.
//!
//! [`Error`] is the classification root. Each variant wraps a more specific
//! error kind; callers distinguish failures with [`Error::kind`] rather than
//! by inspecting message text.

use core::fmt::{self, Write};

/// Result type alias using the library's Error type.
pub type Result<T> = core::result::Result<T, Error>;

/// Root error type for all bounded-arith operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// HTTP-like failure reported by a collaborator
    Http(HttpError),
    /// Operand outside the accepted domain
    Range(RangeError),
    /// Configuration parsing or validation error
    Config(ConfigError),
}

/// Discriminant of [`Error`], used for classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// See [`HttpError`].
    Http,
    /// See [`RangeError`].
    Range,
    /// See [`ConfigError`].
    Config,
}

impl Error {
    /// Classify this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::Http(_) => ErrorKind::Http,
            Error::Range(_) => ErrorKind::Range,
            Error::Config(_) => ErrorKind::Config,
        }
    }

    /// Returns `true` if this is an [`HttpError`].
    pub fn is_http(&self) -> bool {
        self.kind() == ErrorKind::Http
    }

    /// Returns `true` if this is a [`RangeError`].
    pub fn is_range(&self) -> bool {
        self.kind() == ErrorKind::Range
    }

    /// Returns the range error, if any.
    pub fn as_range(&self) -> Option<&RangeError> {
        match self {
            Error::Range(e) => Some(e),
            _ => None,
        }
    }
}

/// Generic HTTP-like error carrying only a message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpError {
    message: heapless::String<128>,
}

impl HttpError {
    /// Create an error with the given message, truncated to capacity.
    pub fn new(message: &str) -> Self {
        Self {
            message: truncated(message),
        }
    }

    /// The human-readable message.
    pub fn message(&self) -> &str {
        self.message.as_str()
    }
}

/// An argument fell outside the accepted domain.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RangeError {
    message: heapless::String<96>,
}

impl RangeError {
    /// Create a range error naming the accepted interval.
    pub fn between(min: i64, max: i64) -> Self {
        let mut message = heapless::String::new();
        let _ = write!(message, "value must be between {} and {}", min, max);
        Self { message }
    }

    /// The human-readable message.
    pub fn message(&self) -> &str {
        self.message.as_str()
    }
}

/// Configuration-related errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Failed to parse TOML configuration
    ParseError(heapless::String<128>),
    /// Bounds where min exceeds max
    InvalidBounds {
        /// Lower bound
        min: i64,
        /// Upper bound
        max: i64,
    },
    /// File I/O error (std only)
    #[cfg(feature = "std")]
    IoError(heapless::String<128>),
}

fn truncated<const N: usize>(s: &str) -> heapless::String<N> {
    let mut out = heapless::String::new();
    for c in s.chars() {
        if out.push(c).is_err() {
            break;
        }
    }
    out
}

impl ConfigError {
    /// Build a [`ConfigError::ParseError`] from any message.
    pub fn parse(message: &str) -> Self {
        ConfigError::ParseError(truncated(message))
    }

    /// Build a [`ConfigError::IoError`] from any message.
    #[cfg(feature = "std")]
    pub fn io(message: &str) -> Self {
        ConfigError::IoError(truncated(message))
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Http(e) => write!(f, "{}", e),
            Error::Range(e) => write!(f, "{}", e),
            Error::Config(e) => write!(f, "Configuration error: {}", e),
        }
    }
}

impl fmt::Display for HttpError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

impl fmt::Display for RangeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::ParseError(msg) => write!(f, "Parse error: {}", msg),
            ConfigError::InvalidBounds { min, max } => {
                write!(f, "Invalid bounds: min ({}) must be <= max ({})", min, max)
            }
            #[cfg(feature = "std")]
            ConfigError::IoError(msg) => write!(f, "I/O error: {}", msg),
        }
    }
}

// Conversion impls
impl From<HttpError> for Error {
    fn from(e: HttpError) -> Self {
        Error::Http(e)
    }
}

impl From<RangeError> for Error {
    fn from(e: RangeError) -> Self {
        Error::Range(e)
    }
}

impl From<ConfigError> for Error {
    fn from(e: ConfigError) -> Self {
        Error::Config(e)
    }
}

#[cfg(feature = "std")]
impl std::error::Error for Error {}

#[cfg(feature = "std")]
impl std::error::Error for HttpError {}

#[cfg(feature = "std")]
impl std::error::Error for RangeError {}

#[cfg(feature = "std")]
impl std::error::Error for ConfigError {}
