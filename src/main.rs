//! Gossip Gen CLI
//!
//! Usage:
//!   gossip-gen [OPTIONS] <COUNT>
//!
//! Options:
//!   -s, --style <STYLE>   Output style: compact, pretty, minified
//!   -c, --config <FILE>   Configuration file (TOML format)
//!   -l, --lint            Check the generated instance and report warnings
//!   --strict              Refuse to emit an instance with lint warnings
//!   -h, --help            Print help

use std::io::{self, Write};
use std::path::PathBuf;
use std::process;

use clap::Parser;

use gossip_gen::{generate_with_lint, AgentCount, GenerateConfig, LintWarning, OutputStyle};

#[derive(Parser)]
#[command(name = "gossip-gen")]
#[command(version)]
#[command(about = "Generate gossip benchmark instances for concurrent game solvers")]
struct Cli {
    /// Number of agents (positive integer)
    count: String,

    /// Output style (overrides the config file)
    #[arg(short, long, value_enum)]
    style: Option<OutputStyle>,

    /// Configuration file (TOML format)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Check the generated instance and report warnings on stderr
    #[arg(short, long)]
    lint: bool,

    /// Like --lint, but exit with an error and no output when warnings exist
    #[arg(long)]
    strict: bool,
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();

    let count: AgentCount = match cli.count.parse() {
        Ok(count) => count,
        Err(e) => {
            eprintln!("Error: {}", e);
            process::exit(1);
        }
    };

    let mut config = match &cli.config {
        Some(path) => match GenerateConfig::from_file(path) {
            Ok(config) => config,
            Err(e) => {
                eprintln!("Error loading config '{}': {}", path.display(), e);
                process::exit(1);
            }
        },
        None => GenerateConfig::default(),
    };
    if let Some(style) = cli.style {
        config.output.style = style;
    }
    if cli.lint || cli.strict {
        config.lint.enabled = true;
    }
    if cli.strict {
        config.lint.deny_warnings = true;
    }

    let (json, warnings) = match generate_with_lint(count, &config) {
        Ok(result) => result,
        Err(e) => {
            eprintln!("Error: {}", e);
            process::exit(1);
        }
    };

    report(&warnings);
    if config.lint.deny_warnings && !warnings.is_empty() {
        eprintln!(
            "Error: refusing to write gossip{} with {} lint warning(s)",
            count,
            warnings.len()
        );
        process::exit(1);
    }

    let mut stdout = io::stdout().lock();
    if let Err(e) = stdout.write_all(json.as_bytes()).and_then(|_| stdout.flush()) {
        eprintln!("Error writing output: {}", e);
        process::exit(1);
    }
    log::info!("wrote gossip{} ({} bytes)", count, json.len());
}

fn report(warnings: &[LintWarning]) {
    for warning in warnings {
        eprintln!("{}", warning);
        if let Some(diagnostic) = &warning.diagnostic {
            eprint!("{}", diagnostic.render(&warning.location));
        }
    }
}
