//! Sindri Command-Line Interface
//!
//! Builds Grover search circuits, optionally transpiles them, runs them
//! on a backend, and reports measurement counts with a histogram.

#[global_allocator]
static GLOBAL: mimalloc::MiMalloc = mimalloc::MiMalloc;

use clap::{Parser, Subcommand};
use console::style;
use tracing_subscriber::EnvFilter;

mod commands;

use commands::{backends, run, version};

/// Sindri - Grover search construction, transpilation, and simulation
#[derive(Parser)]
#[command(name = "sindri")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Build and run a Grover search circuit
    Run {
        /// Number of qubits (search space size = 2^n)
        #[arg(short = 'n', long, default_value = "2")]
        qubits: usize,

        /// Marked state to search for (0 to 2^n - 1)
        #[arg(short, long, default_value = "3")]
        marked: usize,

        /// Number of Grover iterations (0 = optimal)
        #[arg(short, long, default_value = "0")]
        iterations: usize,

        /// Number of shots
        #[arg(short, long, default_value = "1024")]
        shots: u32,

        /// Backend to use
        #[arg(short, long, default_value = "simulator")]
        backend: String,

        /// Transpile to the CNOT basis before running
        #[arg(long)]
        transpile: bool,

        /// Optimization level (0-3)
        #[arg(long, default_value = "1")]
        optimization_level: u8,

        /// Print the circuit diagram
        #[arg(long)]
        show_circuit: bool,

        /// Output format (table, json)
        #[arg(short, long, default_value = "table")]
        format: String,
    },

    /// List available backends
    Backends,

    /// Show version information
    Version,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Setup logging
    let filter = match cli.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(filter))
        .with_target(false)
        .init();

    // Execute command
    let result = match cli.command {
        Commands::Run {
            qubits,
            marked,
            iterations,
            shots,
            backend,
            transpile,
            optimization_level,
            show_circuit,
            format,
        } => {
            run::execute(
                qubits,
                marked,
                iterations,
                shots,
                &backend,
                transpile,
                optimization_level,
                show_circuit,
                &format,
            )
            .await
        }

        Commands::Backends => backends::execute().await,

        Commands::Version => {
            version::execute();
            Ok(())
        }
    };

    // Handle errors
    if let Err(e) = result {
        eprintln!("{} {}", style("Error:").red().bold(), e);
        std::process::exit(1);
    }

    Ok(())
}
