//! Result type alias for SymZip operations

use crate::Error;

/// Result type alias for SymZip operations
pub type Result<T> = std::result::Result<T, Error>;
