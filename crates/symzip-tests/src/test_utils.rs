//! Unified test utilities for SymZip tests and benchmarks

use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

/// Test data generation patterns
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TestDataPattern {
    /// One repeated byte - a single run
    Zeros,
    /// Runs of varying length, 1 to 16 symbols each
    Runs,
    /// Deterministic pseudo-random bytes - no useful runs
    Random,
    /// Alternating stretches of runs and noise
    Mixed,
    /// Skewed distribution over a small alphabet
    Skewed,
}

impl TestDataPattern {
    /// All patterns
    pub fn all() -> [TestDataPattern; 5] {
        [
            Self::Zeros,
            Self::Runs,
            Self::Random,
            Self::Mixed,
            Self::Skewed,
        ]
    }

    /// Short name for benchmark ids
    pub fn name(self) -> &'static str {
        match self {
            Self::Zeros => "zeros",
            Self::Runs => "runs",
            Self::Random => "random",
            Self::Mixed => "mixed",
            Self::Skewed => "skewed",
        }
    }
}

/// Deterministic xorshift sequence so benchmarks are reproducible
fn pseudo_random(seed: u64) -> impl Iterator<Item = u64> {
    let mut state = seed | 1;
    std::iter::repeat_with(move || {
        state ^= state << 13;
        state ^= state >> 7;
        state ^= state << 17;
        state
    })
}

/// Generate test data with specified pattern
pub fn generate_test_data(size: usize, pattern: TestDataPattern) -> Vec<u8> {
    match pattern {
        TestDataPattern::Zeros => vec![0u8; size],
        TestDataPattern::Runs => {
            let mut data = Vec::with_capacity(size);
            for (index, value) in pseudo_random(0x5EED).enumerate() {
                if data.len() >= size {
                    break;
                }
                let run = (value % 16 + 1) as usize;
                data.extend(std::iter::repeat(index as u8).take(run));
            }
            data.truncate(size);
            data
        }
        TestDataPattern::Random => pseudo_random(0xC0FFEE)
            .take(size)
            .map(|value| (value >> 24) as u8)
            .collect(),
        TestDataPattern::Mixed => (0..size)
            .zip(pseudo_random(0xBEEF))
            .map(|(index, value)| {
                if index % 512 < 128 {
                    0
                } else {
                    (value >> 16) as u8
                }
            })
            .collect(),
        TestDataPattern::Skewed => pseudo_random(0xFACE)
            .take(size)
            .map(|value| match value % 100 {
                0..=59 => b'e',
                60..=84 => b't',
                85..=94 => b'a',
                _ => b'q',
            })
            .collect(),
    }
}

/// Generate text mixing ASCII words and multi-byte characters
pub fn generate_test_text(chars: usize) -> String {
    const WORDS: [&str; 8] = [
        "huffman ", "run ", "length ", "ñandú ", "größe ", "東京 ", "🦀🦀🦀 ", "zzzz ",
    ];
    WORDS
        .iter()
        .cycle()
        .flat_map(|word| word.chars())
        .take(chars)
        .collect()
}

/// Create a temporary file with test data
pub fn create_test_file(
    temp_dir: &TempDir,
    name: &str,
    size: usize,
    pattern: TestDataPattern,
) -> std::io::Result<PathBuf> {
    let file_path = temp_dir.path().join(name);
    fs::write(&file_path, generate_test_data(size, pattern))?;
    Ok(file_path)
}

/// Common input sizes for tests and benchmarks
pub struct CommonSizes;

impl CommonSizes {
    /// 1KB
    pub const TINY: usize = 1024;
    /// 16KB
    pub const SMALL: usize = 16 * 1024;
    /// 256KB
    pub const MEDIUM: usize = 256 * 1024;
    /// 1MB
    pub const LARGE: usize = 1024 * 1024;

    /// Sizes suitable for benchmarks
    pub fn benchmark() -> Vec<(&'static str, usize)> {
        vec![
            ("1KB", Self::TINY),
            ("16KB", Self::SMALL),
            ("256KB", Self::MEDIUM),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_test_data_patterns() {
        for pattern in TestDataPattern::all() {
            let data = generate_test_data(CommonSizes::TINY, pattern);
            assert_eq!(data.len(), CommonSizes::TINY, "{}", pattern.name());
            assert_eq!(data, generate_test_data(CommonSizes::TINY, pattern));
        }
        assert!(generate_test_data(64, TestDataPattern::Zeros)
            .iter()
            .all(|&b| b == 0));
    }

    #[test]
    fn test_generate_test_text() {
        let text = generate_test_text(500);
        assert_eq!(text.chars().count(), 500);
        assert!(text.len() > 500);
    }

    #[test]
    fn test_create_test_file() {
        let temp_dir = TempDir::new().unwrap();
        let file_path =
            create_test_file(&temp_dir, "test.dat", 1024, TestDataPattern::Runs).unwrap();

        assert!(file_path.exists());
        assert_eq!(fs::metadata(&file_path).unwrap().len(), 1024);
    }
}
