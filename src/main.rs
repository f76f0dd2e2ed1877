//! isaacgen CLI
//!
//! Command-line front end for the ISAAC-backed generator: random
//! bytes, alphabet-constrained strings, and arbitrary bit-width
//! values.

use clap::{Parser, Subcommand};
use isaacgen::config::{FileConfig, OutputFormat};
use isaacgen::{Alphabet, Generator, IsaacGenerator, LogSink, OsEntropy, SeedResolver};
use rand_core::RngCore;
use std::io::Write;
use std::path::PathBuf;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tracing::info;

#[derive(Parser)]
#[command(name = "isaacgen", version, about = "ISAAC-backed pseudo-random generator")]
struct Cli {
    /// Seed material (UTF-8 bytes); omit to seed from OS entropy.
    #[arg(long, global = true)]
    seed: Option<String>,

    /// Path to a TOML configuration file.
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Generate random bytes.
    Bytes {
        /// Number of bytes; defaults to the configured length.
        #[arg(long)]
        count: Option<usize>,
        /// Write raw bytes instead of hex.
        #[arg(long)]
        raw: bool,
    },
    /// Generate a random string over an alphabet.
    String {
        /// Number of characters; defaults to the configured length.
        #[arg(long)]
        length: Option<usize>,
        /// Characters to draw from, in order; defaults to the
        /// configured alphabet.
        #[arg(long)]
        alphabet: Option<String>,
    },
    /// Extract an unsigned integer of the given bit width.
    Bits {
        /// Bit width.
        #[arg(long)]
        width: usize,
    },
    /// Stream random bytes to stdout until interrupted.
    Stream {
        /// Bytes per write.
        #[arg(long, default_value_t = 4096)]
        chunk_bytes: usize,
    },
}

fn main() {
    // Logs go to stderr; stdout carries generated output.
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    if let Err(e) = run(Cli::parse()) {
        eprintln!("{}", e);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let config = match &cli.config {
        Some(path) => FileConfig::from_file(path)?,
        None => FileConfig::default(),
    };

    let mut rng = build_generator(&cli, &config);

    match cli.command {
        Command::Bytes { count, raw } => {
            let n = count.unwrap_or(config.output.length);
            let format = if raw {
                OutputFormat::Raw
            } else {
                config.output.format
            };
            write_bytes(&rng.random_bytes(n), format)?;
        }
        Command::String { length, alphabet } => {
            let n = length.unwrap_or(config.output.length);
            let alphabet = match alphabet {
                Some(chars) => Alphabet::new(&chars)?,
                None => config.alphabet()?,
            };
            println!("{}", rng.random_string(n, &alphabet));
        }
        Command::Bits { width } => {
            println!("{}", rng.extract_bits(width));
        }
        Command::Stream { chunk_bytes } => {
            stream_bytes(&mut rng, chunk_bytes.max(1))?;
        }
    }

    Ok(())
}

fn build_generator(cli: &Cli, config: &FileConfig) -> IsaacGenerator {
    match &cli.seed {
        Some(seed) => Generator::from_seed(seed.as_bytes()),
        None => {
            let resolver = SeedResolver::new(
                vec![Box::new(OsEntropy::new(config.seeding.os_request_bytes))],
                Box::new(LogSink),
            );
            Generator::with_resolver(&resolver)
        }
    }
}

fn write_bytes(bytes: &[u8], format: OutputFormat) -> std::io::Result<()> {
    match format {
        OutputFormat::Hex => {
            println!(
                "{}",
                bytes
                    .iter()
                    .map(|b| format!("{:02x}", b))
                    .collect::<String>()
            );
            Ok(())
        }
        OutputFormat::Raw => {
            let stdout = std::io::stdout();
            let mut out = stdout.lock();
            out.write_all(bytes)?;
            out.flush()
        }
    }
}

fn stream_bytes(
    rng: &mut IsaacGenerator,
    chunk_bytes: usize,
) -> Result<(), Box<dyn std::error::Error>> {
    let running = Arc::new(AtomicBool::new(true));
    let flag = running.clone();
    ctrlc::set_handler(move || flag.store(false, Ordering::SeqCst))?;

    info!("Streaming random bytes; Ctrl-C to stop");

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    let mut buf = vec![0u8; chunk_bytes];
    let mut total: u64 = 0;

    while running.load(Ordering::SeqCst) {
        rng.fill_bytes(&mut buf);
        if let Err(e) = out.write_all(&buf) {
            // A consumer closing the pipe is a normal way to stop.
            if e.kind() == std::io::ErrorKind::BrokenPipe {
                break;
            }
            return Err(e.into());
        }
        total += buf.len() as u64;
    }

    info!(total_bytes = total, "Stream stopped");
    Ok(())
}
