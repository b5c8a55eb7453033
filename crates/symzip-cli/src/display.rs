//! Console display utilities for the SymZip CLI

use console::style;
use std::path::Path;
use std::time::Duration;
use symzip_codec::engine::encoded_units;
use symzip_codec::RleEffectiveness;
use symzip_config::Config;
use symzip_types::{CodecKind, Payload, SymbolInput, SymbolOutput};

/// Print the result of a compress command
pub fn print_compression_summary(
    payload: &Payload,
    input_bytes: usize,
    encoded_bytes: usize,
    output: &Path,
    duration: Duration,
) {
    println!();
    println!("{}", style("Compression Summary:").bold().underlined());
    println!("  Codec: {}", style(payload.codec_name()).cyan());
    println!("  Domain: {}", style(payload.domain()).cyan());
    println!(
        "  Symbols: {}",
        style(payload.original_length()).green()
    );
    println!(
        "  Encoded units: {}",
        style(encoded_units(payload)).green()
    );
    println!("  Input size: {}", style(format_bytes(input_bytes as u64)).green());
    println!(
        "  Payload size: {}",
        style(format_bytes(encoded_bytes as u64)).green()
    );
    println!(
        "  Size ratio: {}",
        style(format_ratio(encoded_bytes, input_bytes)).blue()
    );
    println!("  Duration: {}", style(format_duration(duration)).blue());
    println!("  Written to: {}", style(output.display()).cyan());
}

/// Print the result of a decompress command
pub fn print_decompression_summary(
    payload: &Payload,
    restored: &SymbolOutput,
    output: &Path,
    duration: Duration,
) {
    println!(
        "{} Restored {} {} symbols ({}) from a {} payload in {}",
        style("✓").green(),
        style(restored.len()).green(),
        payload.domain(),
        format_bytes(restored.as_bytes().len() as u64),
        style(payload.codec_name()).cyan(),
        style(format_duration(duration)).blue()
    );
    println!("  Written to: {}", style(output.display()).cyan());
}

/// Print an effectiveness report
pub fn print_analysis(
    input: &Path,
    symbols: SymbolInput<'_>,
    report: &RleEffectiveness,
    recommended: CodecKind,
    config: &Config,
) {
    println!(
        "{} {}",
        style("🔍").blue().bold(),
        style(format!("Run analysis of {}", input.display()))
            .bold()
            .underlined()
    );
    println!(
        "  Input: {} {} symbols ({})",
        style(symbols.len()).green(),
        symbols.domain(),
        format_bytes(symbols.byte_len() as u64)
    );
    println!("  Runs: {}", style(report.run_count).green());
    println!(
        "  Average run length: {}",
        style(format!("{:.2}", report.average_run_length)).green()
    );
    println!("  Longest run: {}", style(report.longest_run).green());
    println!(
        "  Compression potential: {}",
        style(format!("{:.1}%", report.compression_potential * 100.0)).blue()
    );
    println!(
        "  Thresholds: density > {}, longest run > {}",
        config.analyzer.run_density, config.analyzer.longest_run
    );
    println!(
        "  RLE recommended: {}",
        if report.recommended {
            style("yes").green().bold()
        } else {
            style("no").yellow().bold()
        }
    );
    println!("  Auto would choose: {}", style(recommended).cyan().bold());
}

/// Format a byte count with binary units
pub fn format_bytes(bytes: u64) -> String {
    const UNITS: &[&str] = &["B", "KB", "MB", "GB", "TB"];
    let mut size = bytes as f64;
    let mut unit_index = 0;

    while size >= 1024.0 && unit_index < UNITS.len() - 1 {
        size /= 1024.0;
        unit_index += 1;
    }

    format!("{:.2} {}", size, UNITS[unit_index])
}

/// Format a duration compactly
pub fn format_duration(duration: Duration) -> String {
    let secs = duration.as_secs();
    if secs == 0 {
        format!("{:.2}ms", duration.as_secs_f64() * 1000.0)
    } else if secs < 60 {
        format!("{:.2}s", duration.as_secs_f64())
    } else {
        format!("{}m {}s", secs / 60, secs % 60)
    }
}

/// Format `part / whole` as a percentage
pub fn format_ratio(part: usize, whole: usize) -> String {
    if whole == 0 {
        "n/a".to_string()
    } else {
        format!("{:.1}%", part as f64 / whole as f64 * 100.0)
    }
}
