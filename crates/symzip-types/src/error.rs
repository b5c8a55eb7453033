//! Error types and handling for SymZip
//!
//! Codec failures are deterministic: feeding the same malformed payload back in
//! reproduces the same error, so none of them are ever retried. Ambient failures
//! (I/O, configuration, serialization) carry a message and are classified by
//! [`ErrorKind`] and [`ErrorSeverity`] the same way.

// Serde is imported conditionally through cfg_attr

/// Error severity level
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ErrorSeverity {
    /// Low severity - the caller supplied bad input, nothing else is affected
    Low,
    /// Medium severity - the environment failed and may succeed later
    Medium,
    /// High severity - the operation cannot proceed with the current setup
    High,
}

/// Main error type for SymZip operations
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Error {
    /// Compression was requested for a zero-length input
    #[error("Empty input: nothing to compress")]
    EmptyInput,

    /// A payload is missing required fields or carries inconsistent values
    #[error("Malformed payload: {message}")]
    MalformedPayload {
        /// Description of the missing or invalid field
        message: String,
    },

    /// The decoded symbol count disagrees with the recorded original length
    #[error("Length mismatch: payload records {expected} symbols, decoded {actual}")]
    LengthMismatch {
        /// Original length recorded in the payload
        expected: usize,
        /// Number of symbols actually produced
        actual: usize,
    },

    /// An RLE item carries a tag the decoding algorithm does not recognize
    #[error("Unknown RLE item type: {tag}")]
    UnknownItemType {
        /// The unrecognized tag
        tag: String,
    },

    /// I/O operation failed
    #[error("I/O error: {message}")]
    Io {
        /// Error message from the I/O operation
        message: String,
    },

    /// Payload (de)serialization failed
    #[error("Serialization error: {message}")]
    Serialization {
        /// Error message from the serializer
        message: String,
    },

    /// Configuration error
    #[error("Configuration error: {message}")]
    Config {
        /// Error message describing the configuration issue
        message: String,
    },

    /// Generic error with custom message
    #[error("{message}")]
    Other {
        /// Custom error message
        message: String,
    },
}

/// Error kind for categorizing errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Empty compression input
    EmptyInput,
    /// Missing or invalid payload fields
    MalformedPayload,
    /// Decoded length disagrees with the payload
    LengthMismatch,
    /// Unrecognized RLE item tag
    UnknownItemType,
    /// I/O related errors
    Io,
    /// Serialization errors
    Serialization,
    /// Configuration errors
    Config,
    /// Other errors
    Other,
}

impl Error {
    /// Get the error kind
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::EmptyInput => ErrorKind::EmptyInput,
            Self::MalformedPayload { .. } => ErrorKind::MalformedPayload,
            Self::LengthMismatch { .. } => ErrorKind::LengthMismatch,
            Self::UnknownItemType { .. } => ErrorKind::UnknownItemType,
            Self::Io { .. } => ErrorKind::Io,
            Self::Serialization { .. } => ErrorKind::Serialization,
            Self::Config { .. } => ErrorKind::Config,
            Self::Other { .. } => ErrorKind::Other,
        }
    }

    /// Get the error severity level
    pub fn severity(&self) -> ErrorSeverity {
        match self {
            Self::EmptyInput
            | Self::MalformedPayload { .. }
            | Self::LengthMismatch { .. }
            | Self::UnknownItemType { .. }
            | Self::Serialization { .. } => ErrorSeverity::Low,
            Self::Io { .. } | Self::Other { .. } => ErrorSeverity::Medium,
            Self::Config { .. } => ErrorSeverity::High,
        }
    }

    /// Whether this error came out of the codec itself rather than its surroundings
    pub fn is_codec_error(&self) -> bool {
        matches!(
            self.kind(),
            ErrorKind::EmptyInput
                | ErrorKind::MalformedPayload
                | ErrorKind::LengthMismatch
                | ErrorKind::UnknownItemType
        )
    }

    /// Check if this error is recoverable
    pub fn is_recoverable(&self) -> bool {
        match self {
            Self::Io { message } => {
                message.contains("Interrupted")
                    || message.contains("WouldBlock")
                    || message.contains("TimedOut")
            }
            Self::Other { .. } => true,
            _ => false,
        }
    }

    /// Check if this error should trigger a retry
    pub fn should_retry(&self) -> bool {
        self.is_recoverable() && self.severity() <= ErrorSeverity::Medium
    }

    /// Create a new malformed payload error
    pub fn malformed<S: Into<String>>(message: S) -> Self {
        Self::MalformedPayload {
            message: message.into(),
        }
    }

    /// Create a malformed payload error for a missing field
    pub fn missing_field(field: &str) -> Self {
        Self::malformed(format!("missing required field '{}'", field))
    }

    /// Create a new unknown item type error
    pub fn unknown_item<S: Into<String>>(tag: S) -> Self {
        Self::UnknownItemType { tag: tag.into() }
    }

    /// Create a new serialization error
    pub fn serialization<S: Into<String>>(message: S) -> Self {
        Self::Serialization {
            message: message.into(),
        }
    }

    /// Create a new configuration error
    pub fn config<S: Into<String>>(message: S) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Create a new generic error
    pub fn other<S: Into<String>>(message: S) -> Self {
        Self::Other {
            message: message.into(),
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(error: std::io::Error) -> Self {
        Self::Io {
            message: error.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn test_codec_errors_never_retry(message in ".*", expected in 0usize..10_000, actual in 0usize..10_000) {
            let errors = vec![
                Error::EmptyInput,
                Error::malformed(message.clone()),
                Error::LengthMismatch { expected, actual },
                Error::unknown_item(message.clone()),
            ];

            for error in errors {
                prop_assert!(error.is_codec_error());
                prop_assert!(!error.is_recoverable());
                prop_assert!(!error.should_retry());
                prop_assert_eq!(error.severity(), ErrorSeverity::Low);
            }
        }

        #[test]
        fn test_error_kind_consistency(message in ".*") {
            let errors = vec![
                Error::Io { message: message.clone() },
                Error::Serialization { message: message.clone() },
                Error::Config { message: message.clone() },
                Error::Other { message: message.clone() },
            ];

            for error in errors {
                let kind = error.kind();
                prop_assert!(!error.is_codec_error());
                match error {
                    Error::Io { .. } => prop_assert_eq!(kind, ErrorKind::Io),
                    Error::Serialization { .. } => prop_assert_eq!(kind, ErrorKind::Serialization),
                    Error::Config { .. } => prop_assert_eq!(kind, ErrorKind::Config),
                    Error::Other { .. } => prop_assert_eq!(kind, ErrorKind::Other),
                    _ => {}
                }
            }
        }
    }

    #[test]
    fn test_error_severity_ordering() {
        assert!(ErrorSeverity::Low < ErrorSeverity::Medium);
        assert!(ErrorSeverity::Medium < ErrorSeverity::High);
    }

    #[test]
    fn test_io_error_conversion() {
        let io_error = std::io::Error::new(std::io::ErrorKind::NotFound, "payload.json");
        let error = Error::from(io_error);

        assert_eq!(error.kind(), ErrorKind::Io);
        assert_eq!(error.severity(), ErrorSeverity::Medium);
        assert!(error.to_string().contains("payload.json"));
    }

    #[test]
    fn test_missing_field_message() {
        let error = Error::missing_field("packed_bytes");
        assert_eq!(error.kind(), ErrorKind::MalformedPayload);
        assert!(error.to_string().contains("packed_bytes"));
    }

    #[test]
    fn test_length_mismatch_display() {
        let error = Error::LengthMismatch {
            expected: 9,
            actual: 7,
        };
        assert_eq!(
            error.to_string(),
            "Length mismatch: payload records 9 symbols, decoded 7"
        );
    }

    #[test]
    fn test_config_error_not_recoverable() {
        let error = Error::config("log level 'loud' is not valid");
        assert_eq!(error.severity(), ErrorSeverity::High);
        assert!(!error.should_retry());
    }
}
