//! Binary entrypoint for the reelbet slot machine.
//!
//! With no arguments this plays one interactive session on the reference 3x3
//! machine and exits. Flags:
//! - `-c, --config <path>` - load machine and logging settings from TOML
//! - `-v` (repeatable) - more log output on stderr
//! - `--seed <n>` - reproducible spins
//! - `--print-config` - print the effective configuration as TOML and exit
use anyhow::{Context, Result};
use clap::Parser;
use log::{debug, info};
use rand::rngs::StdRng;
use rand::SeedableRng;

use reelbet::config::Config;
use reelbet::slot::{Machine, Session, StdinInput};

#[derive(Parser)]
#[command(name = "reelbet")]
#[command(about = "A terminal slot machine: deposit, pick lines, bet, spin")]
#[command(version)]
struct Cli {
    /// Configuration file path (defaults are used when omitted)
    #[arg(short, long)]
    config: Option<String>,

    /// Verbose logging on stderr (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Seed the spin RNG for a reproducible session
    #[arg(long)]
    seed: Option<u64>,

    /// Print the effective configuration as TOML and exit
    #[arg(long)]
    print_config: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => Config::load(path)?,
        None => Config::default(),
    };
    init_logging(&config, cli.verbose);

    if cli.print_config {
        let serialized =
            toml::to_string_pretty(&config).context("Failed to serialize configuration")?;
        print!("{}", serialized);
        return Ok(());
    }

    let machine = config
        .build_machine()
        .context("Invalid machine configuration")?;
    info!("Starting reelbet v{}", env!("CARGO_PKG_VERSION"));

    let summary = match cli.seed {
        Some(seed) => {
            debug!("using seeded rng ({})", seed);
            play(&machine, StdRng::seed_from_u64(seed))?
        }
        None => play(&machine, rand::thread_rng())?,
    };
    info!(
        "Session over: {:?}, {} round(s), final balance {}",
        summary.ending, summary.rounds, summary.final_balance
    );
    Ok(())
}

fn play<R: rand::Rng>(machine: &Machine, rng: R) -> Result<reelbet::slot::SessionSummary> {
    let stdout = std::io::stdout();
    let mut session = Session::new(machine, StdinInput::new(), stdout.lock(), rng);
    session.run()
}

fn init_logging(config: &Config, verbosity: u8) {
    use std::io::Write;
    let mut builder = env_logger::Builder::new();
    // CLI verbosity overrides the config level
    let level = match verbosity {
        0 => config.logging.level_filter(),
        1 => log::LevelFilter::Info,
        2 => log::LevelFilter::Debug,
        _ => log::LevelFilter::Trace,
    };
    builder.filter_level(level);
    builder.target(env_logger::Target::Stderr);

    let file = config.logging.file.as_ref().and_then(|path| {
        std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .map_err(|e| eprintln!("Unable to open log file {}: {}", path, e))
            .ok()
    });

    if let Some(f) = file {
        let file = std::sync::Mutex::new(f);
        // Console copy only when a human is watching stderr
        let is_tty = atty::is(atty::Stream::Stderr);
        builder.format(move |fmt, record| {
            let ts = chrono::Utc::now().format("%Y-%m-%dT%H:%M:%SZ");
            let line = format!("{} [{}] {}", ts, record.level(), record.args());
            if let Ok(mut guard) = file.lock() {
                let _ = writeln!(guard, "{}", line);
            }
            if is_tty {
                writeln!(fmt, "{}", line)
            } else {
                Ok(())
            }
        });
    } else {
        builder.format(|fmt, record| {
            let ts = chrono::Utc::now().format("%Y-%m-%dT%H:%M:%SZ");
            writeln!(fmt, "{} [{}] {}", ts, record.level(), record.args())
        });
    }
    let _ = builder.try_init();
}
