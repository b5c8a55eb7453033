//! Run-length effectiveness heuristics
//!
//! The analyzer scans an input once and reports how much of it sits in runs.
//! Its recommendation is advisory; nothing in the codecs depends on it.

use serde::{Deserialize, Serialize};
use symzip_types::{AnalyzerThresholds, Error, Result, SymbolInput};
use tracing::debug;

use crate::rle::run_length_at;

/// Run statistics for one input
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RleEffectiveness {
    /// Number of runs longer than one symbol
    pub run_count: usize,
    /// Mean length of those runs, or 0 when there are none
    pub average_run_length: f64,
    /// Longest maximal run, counting single symbols as runs of one
    pub longest_run: usize,
    /// Fraction of the input covered by runs
    pub compression_potential: f64,
    /// Whether run-length coding is expected to pay off
    pub recommended: bool,
}

/// Single-pass analyzer parameterized by [`AnalyzerThresholds`]
#[derive(Debug, Clone, Copy, Default)]
pub struct EffectivenessAnalyzer {
    thresholds: AnalyzerThresholds,
}

impl EffectivenessAnalyzer {
    /// Create an analyzer with default thresholds
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an analyzer with custom thresholds
    pub fn with_thresholds(thresholds: AnalyzerThresholds) -> Self {
        Self { thresholds }
    }

    /// Thresholds in use
    pub fn thresholds(&self) -> AnalyzerThresholds {
        self.thresholds
    }

    /// Analyze an input
    pub fn analyze(&self, input: SymbolInput<'_>) -> Result<RleEffectiveness> {
        if input.is_empty() {
            return Err(Error::EmptyInput);
        }

        let symbols = input.symbols();
        let len = symbols.len();
        let mut run_count = 0usize;
        let mut run_total = 0usize;
        let mut longest_run = 0usize;

        let mut index = 0;
        while index < len {
            let count = run_length_at(&symbols, index);
            longest_run = longest_run.max(count);
            if count > 1 {
                run_count += 1;
                run_total += count;
            }
            index += count;
        }

        let average_run_length = if run_count == 0 {
            0.0
        } else {
            run_total as f64 / run_count as f64
        };
        let compression_potential = run_total as f64 / len as f64;
        let recommended = run_count as f64 > self.thresholds.run_density * len as f64
            || longest_run > self.thresholds.longest_run;

        debug!(
            "Analyzed {} symbols: {} runs, longest {}, potential {:.2}, recommended {}",
            len, run_count, longest_run, compression_potential, recommended
        );

        Ok(RleEffectiveness {
            run_count,
            average_run_length,
            longest_run,
            compression_potential,
            recommended,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn test_runs_are_counted() {
        let report = EffectivenessAnalyzer::new()
            .analyze("aaaabbbcc".into())
            .unwrap();
        assert_eq!(report.run_count, 3);
        assert_eq!(report.longest_run, 4);
        assert!((report.average_run_length - 3.0).abs() < f64::EPSILON);
        assert!((report.compression_potential - 1.0).abs() < f64::EPSILON);
        assert!(report.recommended);
    }

    #[test]
    fn test_no_runs() {
        let report = EffectivenessAnalyzer::new()
            .analyze("abcdefghij".into())
            .unwrap();
        assert_eq!(report.run_count, 0);
        assert_eq!(report.longest_run, 1);
        assert_eq!(report.average_run_length, 0.0);
        assert_eq!(report.compression_potential, 0.0);
        assert!(!report.recommended);
    }

    #[rstest]
    // one run in 20 symbols: 1 > 2.0 is false, longest 2 is not > 4
    #[case("aabcdefghijklmnopqrs", false)]
    // longest run of 5 exceeds 4
    #[case("aaaaabcdefghijklmnopqrstuvwxyz", true)]
    // longest run of exactly 4 does not exceed 4; 1 run > 0.1 * 8 is true
    #[case("aaaabcde", true)]
    fn test_recommendation_thresholds(#[case] text: &str, #[case] expected: bool) {
        let report = EffectivenessAnalyzer::new().analyze(text.into()).unwrap();
        assert_eq!(report.recommended, expected);
    }

    #[test]
    fn test_custom_thresholds() {
        let thresholds = AnalyzerThresholds::new(0.5, 10).unwrap();
        let report = EffectivenessAnalyzer::with_thresholds(thresholds)
            .analyze("aaaaabcdef".into())
            .unwrap();
        assert!(!report.recommended);
    }

    #[test]
    fn test_deterministic() {
        let analyzer = EffectivenessAnalyzer::new();
        let data = b"\x00\x00\x00\x01\x02\x02\xff";
        let first = analyzer.analyze(SymbolInput::Bytes(data)).unwrap();
        let second = analyzer.analyze(SymbolInput::Bytes(data)).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(
            EffectivenessAnalyzer::new().analyze("".into()),
            Err(Error::EmptyInput)
        );
    }
}
