//! JSON output structures for the SymZip CLI

use serde::{Deserialize, Serialize};
use std::path::Path;
use symzip_codec::RleEffectiveness;
use symzip_types::{CodecKind, SymbolDomain, SymbolInput};

/// JSON output of the analyze command
#[derive(Debug, Serialize, Deserialize)]
pub struct AnalysisJson {
    /// Operation metadata
    pub metadata: OperationMetadata,
    /// Run statistics
    pub report: RleEffectiveness,
    /// Codec `auto` resolves to for this input
    pub recommended_codec: CodecKind,
}

/// Operation metadata
#[derive(Debug, Serialize, Deserialize)]
pub struct OperationMetadata {
    /// SymZip version
    pub version: String,
    /// Operation type
    pub operation: String,
    /// Input path
    pub input_path: String,
    /// Input domain
    pub domain: SymbolDomain,
    /// Number of input symbols
    pub symbols: usize,
    /// Input size in bytes
    pub bytes: usize,
}

impl AnalysisJson {
    /// Assemble the output for one analyzed input
    pub fn new(
        input: &Path,
        symbols: SymbolInput<'_>,
        report: RleEffectiveness,
        recommended_codec: CodecKind,
    ) -> Self {
        Self {
            metadata: OperationMetadata {
                version: env!("CARGO_PKG_VERSION").to_string(),
                operation: "analyze".to_string(),
                input_path: input.display().to_string(),
                domain: symbols.domain(),
                symbols: symbols.len(),
                bytes: symbols.byte_len(),
            },
            report,
            recommended_codec,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use symzip_codec::EffectivenessAnalyzer;

    #[test]
    fn test_analysis_json_shape() {
        let input = SymbolInput::Text("aaaabbbcc");
        let report = EffectivenessAnalyzer::new().analyze(input).unwrap();
        let output = AnalysisJson::new(Path::new("runs.txt"), input, report, CodecKind::AdaptiveRle);

        let value = serde_json::to_value(&output).unwrap();
        assert_eq!(value["metadata"]["operation"], "analyze");
        assert_eq!(value["metadata"]["domain"], "text");
        assert_eq!(value["metadata"]["symbols"], 9);
        assert_eq!(value["report"]["run_count"], 3);
        assert_eq!(value["report"]["recommended"], true);
        assert_eq!(value["recommended_codec"], "adaptive_rle");
    }
}
