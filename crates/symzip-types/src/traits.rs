//! Core traits for SymZip operations
//!
//! Every codec family turns a [`SymbolInput`] into its own self-contained payload
//! and back. The trait keeps the engine and tests independent of which family is
//! in use.

use crate::{Result, SymbolInput, SymbolOutput};

/// A lossless codec over symbol sequences
pub trait SymbolCodec {
    /// Payload produced by this codec
    type Payload;

    /// Short name used in logs and reports
    fn name(&self) -> &'static str;

    /// Compress the input
    ///
    /// Fails with [`crate::Error::EmptyInput`] on zero-length input.
    fn encode(&self, input: SymbolInput<'_>) -> Result<Self::Payload>;

    /// Reconstruct the original sequence from a payload
    fn decode(&self, payload: &Self::Payload) -> Result<SymbolOutput>;
}
