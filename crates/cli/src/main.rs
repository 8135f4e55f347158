//! Cycle-accurate simulation driver CLI.
//!
//! This binary drives the bundled single-cycle RV32I model. It provides:
//! 1. **Run:** Reset plus a fixed number of clock cycles, a VCD trace, and a final register report.
//! 2. **Ports:** Lists the debug ports a model exposes, for use with `--port`.

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::{Parser, Subcommand, ValueEnum};
use tracing_subscriber::EnvFilter;

use cyclesim_core::model::rv32::SingleCycleCore;
use cyclesim_core::sim::{RunOutcome, simulate};
use cyclesim_core::{CircuitModel, Config, SimError};

#[derive(Parser, Debug)]
#[command(
    name = "cyclesim",
    author,
    version,
    about = "Cycle-accurate clock/reset driver for synchronous circuit models",
    long_about = "Drive a circuit model through reset and a fixed number of clock cycles, \
                  trace every signal to a VCD file, and print selected debug ports.\n\n\
                  Examples:\n  cyclesim run\n  cyclesim run --cycles 10 --port x1 --port x10\n  \
                  cyclesim run --program prog.hex --trace out/run.vcd --format json"
)]
struct Cli {
    /// Increase log verbosity (-v debug, -vv trace). `RUST_LOG` takes precedence.
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Run reset plus a fixed number of cycles and print the final state.
    Run {
        /// JSON configuration file; flags below override its fields.
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Clock cycles to drive after reset.
        #[arg(short = 'n', long)]
        cycles: Option<u64>,

        /// VCD output path.
        #[arg(short, long)]
        trace: Option<PathBuf>,

        /// Debug port to report (repeatable). Replaces the configured list.
        #[arg(short, long = "port")]
        ports: Vec<String>,

        /// `$readmemh` instruction image; the built-in demo program is used otherwise.
        #[arg(long)]
        program: Option<PathBuf>,

        /// Report format.
        #[arg(long, value_enum, default_value_t = Format::Text)]
        format: Format,
    },

    /// List the debug ports exposed by the model.
    Ports {
        /// `$readmemh` instruction image.
        #[arg(long)]
        program: Option<PathBuf>,
    },
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
enum Format {
    Text,
    Json,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    let _installed = init_logging(cli.verbose);

    let result = match cli.command {
        Commands::Run {
            config,
            cycles,
            trace,
            ports,
            program,
            format,
        } => cmd_run(
            config.as_deref(),
            cycles,
            trace,
            ports,
            program.as_deref(),
            format,
        ),
        Commands::Ports { program } => cmd_ports(program.as_deref()),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}

/// Filter directive used when `RUST_LOG` is unset.
const fn default_directive(verbose: u8) -> &'static str {
    match verbose {
        0 => "info",
        1 => "debug",
        _ => "trace",
    }
}

/// Installs the stderr log subscriber. Returns `false` if one was already installed, in which
/// case the existing subscriber keeps receiving events.
fn init_logging(verbose: u8) -> bool {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive(verbose)));
    match tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()
    {
        Ok(()) => true,
        Err(e) => {
            tracing::debug!(error = %e, "log subscriber already installed");
            false
        }
    }
}

fn load_model(program: Option<&Path>) -> Result<SingleCycleCore, SimError> {
    program.map_or_else(|| Ok(SingleCycleCore::demo()), SingleCycleCore::from_image_file)
}

fn cmd_run(
    config_path: Option<&Path>,
    cycles: Option<u64>,
    trace: Option<PathBuf>,
    ports: Vec<String>,
    program: Option<&Path>,
    format: Format,
) -> Result<(), SimError> {
    let mut config = match config_path {
        Some(path) => Config::load(path)?,
        None => Config::default(),
    };
    if let Some(cycles) = cycles {
        config.run.cycles = cycles;
    }
    if let Some(trace) = trace {
        config.trace.path = trace;
    }
    if !ports.is_empty() {
        config.report.ports = ports;
    }
    config.validate()?;

    let model = load_model(program)?;
    let RunOutcome { report, stats } = simulate(model, &config)?;
    tracing::info!(%stats, trace = %config.trace.path.display(), "run complete");

    match format {
        Format::Text => {
            println!("--- Simulation Finished ---");
            println!("Final Register Values:");
            print!("{report}");
        }
        Format::Json => {
            let doc = serde_json::json!({ "report": report, "stats": stats });
            println!("{}", serde_json::to_string_pretty(&doc)?);
        }
    }
    Ok(())
}

fn cmd_ports(program: Option<&Path>) -> Result<(), SimError> {
    let model = load_model(program)?;
    println!("{}:", model.name());
    for port in model.debug_ports() {
        println!("  {:<12} {} bits", port.name, port.width);
    }
    Ok(())
}
