use std::io::{self, Write};

use algo_toolbox::config::{Config, DEFAULT_MAX_DISKS, DEFAULT_MAX_FACTORIAL};
use algo_toolbox::input::parse_integer_list;
use algo_toolbox::{demo, Session, SortAlgorithm};
use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use log::debug;

#[derive(Parser, Debug)]
#[clap(
    name = "algo-toolbox",
    author,
    version,
    about = "Interactive demonstrations of classic algorithms"
)]
struct Cli {
    #[clap(subcommand)]
    command: Option<Commands>,

    #[clap(long, short, default_value = "warn")]
    log_level: String,

    #[clap(
        long,
        default_value_t = DEFAULT_MAX_FACTORIAL,
        help = "Largest number accepted for the factorial"
    )]
    max_factorial: u32,

    #[clap(
        long,
        default_value_t = DEFAULT_MAX_DISKS,
        help = "Largest number of Hanoi disks accepted"
    )]
    max_disks: u32,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Run the interactive menu (default command)
    Menu,
    /// Sort a comma-separated list of integers once
    Sort {
        #[clap(
            allow_hyphen_values = true,
            help = "Comma-separated integers, e.g. 8,3,5,1,9 or -3,5,1"
        )]
        list: String,

        #[clap(
            long,
            short,
            default_value = "quick",
            help = "Sorting algorithm: bubble or quick"
        )]
        algorithm: SortAlgorithm,
    },
    /// Compute the factorial of a non-negative integer
    Factorial { n: u32 },
    /// Print the solution of the Towers of Hanoi
    Hanoi { disks: u32 },
    /// Time every sorting algorithm on random data
    Bench {
        #[clap(long, short, default_value_t = 10_000)]
        size: usize,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = Config::from_flags(&cli.log_level, cli.max_factorial, cli.max_disks)
        .context("Invalid configuration")?;

    env_logger::Builder::new()
        .filter_level(config.log_level)
        .init();
    debug!("starting with {:?}", config);

    let stdout = io::stdout();
    let mut out = stdout.lock();

    match cli.command.unwrap_or(Commands::Menu) {
        Commands::Menu => {
            let stdin = io::stdin();
            Session::new(stdin.lock(), &mut out, config.limits)
                .run()
                .context("Interactive session failed")?;
        }
        Commands::Sort { list, algorithm } => {
            let data = parse_integer_list(&list);
            if data.is_empty() {
                anyhow::bail!("No integers found in '{}'", list);
            }
            demo::sort(&mut out, algorithm, data)?;
        }
        Commands::Factorial { n } => {
            let n = config.limits.check_factorial(n)?;
            demo::factorial_report(&mut out, n)?;
        }
        Commands::Hanoi { disks } => {
            let disks = config.limits.check_disks(disks)?;
            demo::hanoi_report(&mut out, disks)?;
        }
        Commands::Bench { size } => {
            demo::bench(&mut out, size)?;
        }
    }

    out.flush().context("Failed to flush stdout")?;
    Ok(())
}
