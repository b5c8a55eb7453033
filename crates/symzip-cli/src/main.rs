//! SymZip - lossless Huffman and run-length compression tool
//!
//! Compresses files into self-contained JSON or MessagePack payloads and
//! restores them, with an analyzer that reports whether run-length coding
//! is likely to pay off.

mod display;
mod json_output;

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use console::style;
use std::path::{Path, PathBuf};
use std::time::Instant;
use symzip_codec::{wire, CodecEngine, EngineConfig};
use symzip_config::{Config, ConfigLoader, LoggingConfig};
use symzip_types::{CodecKind, Payload, SymbolInput, SymbolOutput, WireFormat};
use tracing::info;

/// SymZip - lossless Huffman and run-length compression tool
#[derive(Parser)]
#[command(
    name = "symzip",
    version = env!("CARGO_PKG_VERSION"),
    about = "Lossless Huffman and run-length compression tool",
    long_about = "SymZip compresses bytes or text with Huffman coding or run-length encoding.\n\
                  Payloads are self-contained and stored as JSON or MessagePack."
)]
struct Cli {
    /// Enable debug logging
    #[arg(short, long, global = true)]
    debug: bool,

    /// Quiet mode - minimal output
    #[arg(short, long, global = true)]
    quiet: bool,

    /// Verbose mode - detailed output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Configuration file path
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Compress a file into a payload
    Compress {
        /// Input file
        input: PathBuf,
        /// Output payload path (default: input path plus format extension)
        #[arg(short, long)]
        output: Option<PathBuf>,
        /// Codec to use (default from configuration)
        #[arg(long, value_enum)]
        codec: Option<CodecArg>,
        /// Payload wire format (default from configuration)
        #[arg(long, value_enum)]
        format: Option<FormatArg>,
        /// Treat the input as UTF-8 text
        #[arg(long)]
        text: bool,
        /// Indent JSON payloads
        #[arg(long)]
        pretty: bool,
    },
    /// Restore the original file from a payload
    Decompress {
        /// Payload file
        payload: PathBuf,
        /// Output path (default: payload path without its format extension)
        #[arg(short, long)]
        output: Option<PathBuf>,
        /// Payload wire format (default: detected)
        #[arg(long, value_enum)]
        format: Option<FormatArg>,
    },
    /// Report run statistics and the recommended codec
    Analyze {
        /// Input file
        input: PathBuf,
        /// Treat the input as UTF-8 text
        #[arg(long)]
        text: bool,
        /// Print the report as JSON
        #[arg(long)]
        json: bool,
    },
    /// Show configuration
    Config {
        /// Show default configuration
        #[arg(long)]
        default: bool,
        /// Write the default configuration to a file
        #[arg(long, value_name = "PATH")]
        generate: Option<PathBuf>,
    },
}

#[derive(clap::ValueEnum, Clone, Copy)]
enum CodecArg {
    Huffman,
    Rle,
    AdaptiveRle,
    Auto,
}

impl From<CodecArg> for CodecKind {
    fn from(codec: CodecArg) -> Self {
        match codec {
            CodecArg::Huffman => CodecKind::Huffman,
            CodecArg::Rle => CodecKind::Rle,
            CodecArg::AdaptiveRle => CodecKind::AdaptiveRle,
            CodecArg::Auto => CodecKind::Auto,
        }
    }
}

#[derive(clap::ValueEnum, Clone, Copy)]
enum FormatArg {
    Json,
    Msgpack,
}

impl From<FormatArg> for WireFormat {
    fn from(format: FormatArg) -> Self {
        match format {
            FormatArg::Json => WireFormat::Json,
            FormatArg::Msgpack => WireFormat::MessagePack,
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => ConfigLoader::load_from_file(path)?,
        None => ConfigLoader::load_default()?,
    };

    init_logging(cli.debug, cli.quiet, cli.verbose, &config.logging)?;

    info!("SymZip v{} starting", env!("CARGO_PKG_VERSION"));

    match cli.command {
        Commands::Compress {
            input,
            output,
            codec,
            format,
            text,
            pretty,
        } => {
            let options = CompressOptions {
                codec: codec.map_or(config.codec.default, CodecKind::from),
                format: format.map_or(config.output.format, WireFormat::from),
                text: text || config.codec.text_mode,
                pretty: pretty || config.output.pretty_json,
            };
            compress_command(&input, output, options, &config, cli.quiet)?;
        }
        Commands::Decompress {
            payload,
            output,
            format,
        } => {
            decompress_command(&payload, output, format.map(WireFormat::from), &config, cli.quiet)?;
        }
        Commands::Analyze { input, text, json } => {
            analyze_command(&input, text || config.codec.text_mode, json, &config)?;
        }
        Commands::Config { default, generate } => {
            let source = config_source(cli.config.as_deref());
            config_command(default, generate, &config, source.as_deref())?;
        }
    }

    Ok(())
}

fn init_logging(debug: bool, quiet: bool, verbose: bool, logging: &LoggingConfig) -> Result<()> {
    use tracing_subscriber::{fmt, EnvFilter};

    let level = if debug {
        "debug"
    } else if verbose {
        "info"
    } else if quiet {
        "error"
    } else {
        logging.level.as_str()
    };

    let filter = EnvFilter::try_from_default_env().or_else(|_| EnvFilter::try_new(level))?;
    console::set_colors_enabled(logging.colored_output);

    let subscriber = fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_ansi(logging.colored_output);

    if logging.json_format {
        subscriber.json().init();
    } else {
        subscriber.init();
    }

    Ok(())
}

struct CompressOptions {
    codec: CodecKind,
    format: WireFormat,
    text: bool,
    pretty: bool,
}

fn engine_for(config: &Config) -> CodecEngine {
    CodecEngine::with_config(EngineConfig {
        default_codec: config.codec.default,
        thresholds: config.analyzer,
    })
}

fn read_input(path: &Path) -> Result<Vec<u8>> {
    std::fs::read(path).with_context(|| format!("Failed to read {}", path.display()))
}

fn symbol_input<'a>(data: &'a [u8], text: bool, path: &Path) -> Result<SymbolInput<'a>> {
    if text {
        let text = std::str::from_utf8(data)
            .with_context(|| format!("{} is not valid UTF-8", path.display()))?;
        Ok(SymbolInput::Text(text))
    } else {
        Ok(SymbolInput::Bytes(data))
    }
}

fn write_output(path: &Path, content: &[u8], config: &Config) -> Result<()> {
    if path.exists() && !config.output.overwrite {
        bail!(
            "{} already exists and output.overwrite is disabled",
            path.display()
        );
    }
    std::fs::write(path, content).with_context(|| format!("Failed to write {}", path.display()))
}

fn compressed_path(input: &Path, format: WireFormat) -> PathBuf {
    let mut name = input.as_os_str().to_owned();
    name.push(".");
    name.push(format.extension());
    PathBuf::from(name)
}

fn decompressed_path(payload: &Path) -> PathBuf {
    let known = payload
        .extension()
        .and_then(|ext| ext.to_str())
        .and_then(WireFormat::from_extension)
        .is_some();
    if known {
        payload.with_extension("")
    } else {
        let mut name = payload.as_os_str().to_owned();
        name.push(".out");
        PathBuf::from(name)
    }
}

fn compress_command(
    input: &Path,
    output: Option<PathBuf>,
    options: CompressOptions,
    config: &Config,
    quiet: bool,
) -> Result<()> {
    let data = read_input(input)?;
    let symbols = symbol_input(&data, options.text, input)?;
    let output = output.unwrap_or_else(|| compressed_path(input, options.format));

    if !quiet {
        println!(
            "{} Compressing {} with {}",
            style("→").green().bold(),
            style(input.display()).cyan(),
            style(options.codec).cyan()
        );
    }

    let start = Instant::now();
    let mut engine = engine_for(config);
    let payload = engine.compress_with(symbols, options.codec)?;
    let encoded = if options.pretty && options.format == WireFormat::Json {
        wire::encode_payload_pretty(&payload)?
    } else {
        wire::encode_payload(&payload, options.format)?
    };
    write_output(&output, &encoded, config)?;

    if !quiet {
        display::print_compression_summary(
            &payload,
            data.len(),
            encoded.len(),
            &output,
            start.elapsed(),
        );
    }
    Ok(())
}

fn decompress_command(
    payload_path: &Path,
    output: Option<PathBuf>,
    format: Option<WireFormat>,
    config: &Config,
    quiet: bool,
) -> Result<()> {
    let bytes = read_input(payload_path)?;
    let format = format.unwrap_or_else(|| wire::detect_format(&bytes));
    let output = output.unwrap_or_else(|| decompressed_path(payload_path));

    let start = Instant::now();
    let payload: Payload = wire::decode_payload(&bytes, format)
        .with_context(|| format!("Failed to read payload {}", payload_path.display()))?;
    let mut engine = engine_for(config);
    let restored: SymbolOutput = engine.decompress(&payload)?;
    write_output(&output, restored.as_bytes(), config)?;

    if !quiet {
        display::print_decompression_summary(&payload, &restored, &output, start.elapsed());
    }
    Ok(())
}

fn analyze_command(input: &Path, text: bool, json: bool, config: &Config) -> Result<()> {
    let data = read_input(input)?;
    let symbols = symbol_input(&data, text, input)?;
    let engine = engine_for(config);

    let report = engine.analyze(symbols)?;
    let recommended = engine.recommend(symbols)?;

    if json {
        let output = json_output::AnalysisJson::new(input, symbols, report, recommended);
        println!("{}", serde_json::to_string_pretty(&output)?);
    } else {
        display::print_analysis(input, symbols, &report, recommended, config);
    }
    Ok(())
}

/// File the active configuration came from, if any
fn config_source(explicit: Option<&Path>) -> Option<PathBuf> {
    explicit
        .map(Path::to_path_buf)
        .or_else(ConfigLoader::config_exists)
}

fn config_command(
    default: bool,
    generate: Option<PathBuf>,
    config: &Config,
    source: Option<&Path>,
) -> Result<()> {
    if let Some(path) = generate {
        ConfigLoader::generate_default_config(&path)?;
        println!(
            "{} Wrote default configuration to {}",
            style("✓").green(),
            style(path.display()).cyan()
        );
        return Ok(());
    }

    if default {
        println!("{} Default configuration:", style("⚙").blue().bold());
        print!("{}", serde_yaml::to_string(&Config::default())?);
    } else {
        println!("{} Current configuration:", style("⚙").blue().bold());
        match source {
            Some(path) => println!("# loaded from {}", path.display()),
            None => println!("# no configuration file found, using defaults"),
        }
        print!("{}", serde_yaml::to_string(config)?);
    }
    Ok(())
}
