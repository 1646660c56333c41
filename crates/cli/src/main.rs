mod render;

use std::fs;
use std::path::{Path, PathBuf};
use std::process;

use clap::{Parser, Subcommand, ValueEnum};
use serde::Deserialize;
use ucca_core::{AbstractUcca, ControlAction, Controller};
use ucca_refine::{RefinementBundle, RefinementConfig};

/// Output format for CLI responses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

/// UCCA refinement toolchain.
#[derive(Parser)]
#[command(name = "ucca", version, about = "UCCA refinement engine front end")]
struct Cli {
    /// Output format (text or json)
    #[arg(long, global = true, default_value = "text", value_enum)]
    output: OutputFormat,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Refine abstract UCCAs against a refinement configuration
    Refine {
        /// Path to the refinement configuration JSON file
        #[arg(long)]
        config: PathBuf,
        /// Path to the abstract UCCA list JSON file
        #[arg(long)]
        uccas: PathBuf,
    },

    /// Parse an abstract pattern and print its term list
    ParsePattern {
        /// The pattern string, e.g. "¬Deploy ∧ Retract"
        pattern: String,
    },
}

/// On-disk shape of the configuration file: the engine config plus the
/// controller and control-action reference lists.
#[derive(Debug, Deserialize)]
struct ConfigFile {
    #[serde(default)]
    controllers: Vec<Controller>,
    #[serde(default)]
    control_actions: Vec<ControlAction>,
    #[serde(flatten)]
    config: RefinementConfig,
}

fn load_json<T: serde::de::DeserializeOwned>(path: &Path, what: &str) -> T {
    let text = fs::read_to_string(path).unwrap_or_else(|e| {
        eprintln!("error: cannot read {} file {}: {}", what, path.display(), e);
        process::exit(1);
    });
    serde_json::from_str(&text).unwrap_or_else(|e| {
        eprintln!("error: invalid {} file {}: {}", what, path.display(), e);
        process::exit(1);
    })
}

fn main() {
    let cli = Cli::parse();

    match cli.command {
        Commands::Refine { config, uccas } => {
            let config_file: ConfigFile = load_json(&config, "configuration");
            let abstract_uccas: Vec<AbstractUcca> = load_json(&uccas, "abstract UCCA");

            let bundle = RefinementBundle::build(
                config_file.config,
                config_file.controllers,
                config_file.control_actions,
            );
            let report = ucca_refine::refine_abstract_uccas(&abstract_uccas, &bundle);

            match cli.output {
                OutputFormat::Json => match serde_json::to_string_pretty(&report) {
                    Ok(json) => println!("{}", json),
                    Err(e) => {
                        eprintln!("error: cannot serialize report: {}", e);
                        process::exit(1);
                    }
                },
                OutputFormat::Text => {
                    print!("{}", render::render_report(&report, &bundle));
                }
            }
            if report.uccas_failed > 0 {
                process::exit(1);
            }
        }

        Commands::ParsePattern { pattern } => {
            let parsed = ucca_core::parse(&pattern);
            match serde_json::to_string_pretty(&parsed) {
                Ok(json) => println!("{}", json),
                Err(e) => {
                    eprintln!("error: cannot serialize pattern: {}", e);
                    process::exit(1);
                }
            }
        }
    }
}
