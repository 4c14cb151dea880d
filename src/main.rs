// SPDX-License-Identifier: CC0-1.0

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use shamir_audit::num_bigint::BigInt;

const DEFAULT_INPUT: &str = "input.json";

#[derive(Parser)]
#[clap(name = "shamir-audit")]
#[clap(version)]
#[clap(about = "CLI tool to reconstruct Shamir secrets and detect corrupt shares.", long_about = None)]
struct Cli {
    /// Increase log verbosity (-v for debug, -vv for trace). RUST_LOG takes precedence.
    #[clap(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[clap(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Reconstructs the secret from a share file and lists inconsistent shares
    Reconstruct(ReconstructArgs),
    /// Interpolates every share in a share file at x = 0
    Interpolate(InterpolateArgs),
    /// Decodes a digit string written in the given base
    Decode(DecodeArgs),
}

#[derive(Args)]
struct ReconstructArgs {
    /// Path to the JSON share file
    file: Option<PathBuf>,
    /// Try every basis of k shares instead of only the first k
    #[clap(long)]
    exhaustive: bool,
}

#[derive(Args)]
struct InterpolateArgs {
    /// Path to the JSON share file
    file: Option<PathBuf>,
}

#[derive(Args)]
struct DecodeArgs {
    /// Base of the digit string (2 to 36)
    #[clap(short, long, default_value_t = 10)]
    base: u32,
    /// The digit string to decode
    digits: String,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    init_logging(cli.verbose)?;

    match cli.command {
        Commands::Reconstruct(args) => handle_reconstruct(args),
        Commands::Interpolate(args) => handle_interpolate(args),
        Commands::Decode(args) => handle_decode(args),
    }
}

fn init_logging(verbose: u8) -> Result<()> {
    let default_level = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .finish();

    tracing::subscriber::set_global_default(subscriber)
        .context("Failed to install log subscriber")?;
    Ok(())
}

fn input_path(file: Option<PathBuf>) -> PathBuf {
    file.unwrap_or_else(|| {
        println!("No input file specified. Using default: {}", DEFAULT_INPUT);
        PathBuf::from(DEFAULT_INPUT)
    })
}

fn handle_reconstruct(args: ReconstructArgs) -> Result<()> {
    let file = shamir_audit::load_share_file(input_path(args.file))?;

    let result = if args.exhaustive {
        shamir_audit::reconstruct_exhaustive(&file.shares, file.k)
    } else {
        shamir_audit::reconstruct(&file.shares, file.k)
    }
    .context("Reconstruction failed")?;

    print_secret(result.secret())?;

    if result.is_consistent() {
        println!("All shares consistent.");
    } else {
        println!("Possibly corrupt shares:");
        for share in result.bad_shares() {
            println!("   {}", share);
        }
    }

    Ok(())
}

fn handle_interpolate(args: InterpolateArgs) -> Result<()> {
    let file = shamir_audit::load_share_file(input_path(args.file))?;

    let value =
        shamir_audit::interpolate(file.shares.as_slice()).context("Interpolation failed")?;

    println!("{}", value);

    Ok(())
}

fn handle_decode(args: DecodeArgs) -> Result<()> {
    let value = radix_digits::decode(args.base, &args.digits)
        .with_context(|| format!("Failed to decode digit string: {}", args.digits))?;

    println!("{}", value);

    Ok(())
}

fn print_secret(secret: &BigInt) -> Result<()> {
    println!("Reconstructed secret (decimal): {}", secret);
    println!(
        "Reconstructed secret (hex): {}",
        radix_digits::encode(secret, 16)?
    );
    Ok(())
}
