use clap::{Parser, Subcommand};
use hex_converter::utils::logging::init_logging;
use hex_converter::{
    presets, CodecError, ConversionMode, ConversionRequest, Converter, ConverterConfig, Result,
};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::{error, info, Level};

/// hexconv: convert between text, numbers, bytes and hex strings.
#[derive(Parser, Debug)]
#[command(name = "hexconv")]
#[command(author, version, about = "Hex / UTF-8 / number / byte converter", long_about = None)]
struct Cli {
    /// TOML configuration file
    #[arg(short, long, global = true, env = "HEXCONV_CONFIG")]
    config: Option<PathBuf>,

    /// Override the configured log level (trace, debug, info, warn, error)
    #[arg(long, global = true)]
    log_level: Option<Level>,

    /// Print results as JSON
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Run one conversion.
    ///
    /// MODE is a name such as stringToHex, hex-to-string, padHex or xor.
    Convert {
        mode: ConversionMode,

        input: String,

        /// Hex key for xorEncryptDecrypt
        #[arg(short, long)]
        key: Option<String>,

        /// Target byte length for padHex
        #[arg(short, long)]
        bytes: Option<usize>,
    },

    /// List or run the built-in sample inputs.
    Presets {
        /// Convert every preset and print the results
        #[arg(long)]
        run: bool,
    },

    /// List the available conversion modes.
    Modes,

    /// Print a default configuration file.
    ExampleConfig,
}

fn load_config(cli: &Cli) -> Result<ConverterConfig> {
    let mut config = match &cli.config {
        Some(path) => ConverterConfig::from_file(path)?,
        None => ConverterConfig::default(),
    };
    config.apply_env();
    if let Some(level) = cli.log_level {
        config.logging.log_level = level;
    }
    config.validate_strict()?;
    Ok(config)
}

fn run(cli: Cli) -> Result<()> {
    let config = load_config(&cli)?;
    if let Err(e) = init_logging(&config.logging) {
        eprintln!("warning: {e}");
    }

    match cli.command {
        Commands::Convert {
            mode,
            input,
            key,
            bytes,
        } => {
            let converter = Converter::new(config);
            let mut request = ConversionRequest::new(mode, input);
            request.key = key;
            request.pad_bytes = bytes;

            let output = converter.convert(&request)?;
            if cli.json {
                println!("{}", to_json(&output)?);
            } else {
                println!("{}", output.output);
            }
        }
        Commands::Presets { run } if cli.json && !run => {
            println!("{}", to_json(presets())?);
        }
        Commands::Presets { run } => {
            let converter = Converter::new(config);
            for preset in presets() {
                if run {
                    println!(
                        "{:<24} {:<12} {}",
                        preset.label,
                        preset.mode,
                        converter.render(&preset.request())
                    );
                } else {
                    println!("{:<24} {:<12} {}", preset.label, preset.mode, preset.value);
                }
            }
            if run {
                converter.log_metrics();
            }
        }
        Commands::Modes => {
            for mode in ConversionMode::ALL {
                println!("{:<18} {}", mode.name(), mode.label());
            }
        }
        Commands::ExampleConfig => {
            print!("{}", ConverterConfig::example_config());
        }
    }

    info!("Done");
    Ok(())
}

fn to_json<T: serde::Serialize + ?Sized>(value: &T) -> Result<String> {
    serde_json::to_string_pretty(value).map_err(|e| CodecError::Custom(e.to_string()))
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!(error = %e, "hexconv failed");
            eprintln!("❌ {e}");
            ExitCode::FAILURE
        }
    }
}
