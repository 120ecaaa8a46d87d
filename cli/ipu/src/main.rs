//! IPU CLI — command-line interface for the IPU device model.

mod builtins;
mod commands;

use std::process;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "ipu", version, about = "The IPU accelerator device model")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// List available device configurations
    List,
    /// Show the device report for a configuration
    Describe {
        /// Device name (builtin, or devices/<name>.device.toml)
        name: String,
        /// Output format (default: human-readable, "toml" or "json")
        #[arg(long)]
        format: Option<String>,
    },
    /// Validate a device configuration
    Validate {
        /// Device name
        name: String,
    },
    /// Create a new device definition from the template
    Init {
        /// Device name
        name: String,
    },
}

fn main() {
    let cli = Cli::parse();

    let result = run(cli);
    if let Err(e) = result {
        eprintln!("error: {e:#}");
        process::exit(1);
    }
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let cwd = std::env::current_dir()?;

    match cli.command {
        // Bare invocation prints the builtin ipu report.
        None => commands::device::describe_builtin_ipu(),

        Some(Commands::List) => commands::device::list(&cwd),

        Some(Commands::Describe { name, format }) => {
            commands::device::describe(&name, &cwd, format.as_deref())
        }

        Some(Commands::Validate { name }) => commands::device::validate(&name, &cwd),

        Some(Commands::Init { name }) => commands::init::run(&name, &cwd),
    }
}
