//! Core type system and error handling for SymZip
//!
//! This crate provides the foundational types shared by the SymZip codecs,
//! configuration layer and CLI. It includes:
//!
//! - **Error handling**: One error taxonomy for codec and ambient failures
//! - **Symbols**: [`Symbol`], [`SymbolDomain`] and borrowed/owned sequences
//! - **Payloads**: Self-contained Huffman and run-length payload shapes
//! - **Traits**: [`SymbolCodec`], the seam every codec family implements
//! - **Configuration**: Validated analyzer thresholds and codec selection
//!
//! # Features
//!
//! - `serde`: Enable serialization support for payloads and configuration
//!
//! # Examples
//!
//! ```rust
//! use symzip_types::{Error, Result, SymbolDomain, SymbolInput, SymbolOutput};
//!
//! fn echo(input: SymbolInput<'_>) -> Result<SymbolOutput> {
//!     if input.is_empty() {
//!         return Err(Error::EmptyInput);
//!     }
//!     SymbolOutput::from_symbols(input.domain(), &input.symbols())
//! }
//!
//! let output = echo(SymbolInput::from("abc")).unwrap();
//! assert_eq!(output.domain(), SymbolDomain::Text);
//! ```

#![deny(missing_docs)]
#![warn(clippy::all, clippy::pedantic, clippy::nursery)]
#![allow(clippy::module_name_repetitions)]

pub mod config;
pub mod error;
pub mod result;
pub mod traits;
pub mod types;

// Re-export commonly used types
pub use config::{AnalyzerThresholds, CodecKind, WireFormat};
pub use error::{Error, ErrorKind, ErrorSeverity};
pub use result::Result;
pub use traits::*;
pub use types::*;
