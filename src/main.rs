use std::io::stdout;
use std::path::PathBuf;

use clap::{Parser, Subcommand};

use minirt::{Config, IntWidth};

#[derive(Parser)]
#[command(name = "minirt")]
#[command(about = "Runtime support library driver", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print integers through the runtime
    Print {
        /// Suppress the trailing newline
        #[arg(short, long)]
        noeol: bool,

        /// Word width (32 or 64)
        #[arg(long, default_value = "64")]
        width: IntWidth,

        #[arg(value_name = "VALUES", allow_negative_numbers = true)]
        values: Vec<i64>,
    },

    /// Replay a script of `__print(noeol, count, values...)` calls
    Run {
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Word width (32 or 64)
        #[arg(long, default_value = "64")]
        width: IntWidth,
    },
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    match Cli::parse().command {
        Commands::Print { noeol, width, values } => {
            minirt::print_values(&values, Config { width, noeol })?;
        }
        Commands::Run { input, width } => {
            let stdout = stdout();
            let mut lock = stdout.lock();
            minirt::run(&input, width, &mut lock)?;
        }
    }

    Ok(())
}
