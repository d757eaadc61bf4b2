mod io;

use std::path::PathBuf;
use std::time::Instant;

use anyhow::{Context, Result};
use bucketsort::{
    SORT_PARAMS, SortAlgorithm, SortConfig, SortContext, algorithm_name, generate_phone_numbers,
    sort_records_with_ctx,
};
use clap::{Parser, Subcommand};
use log::{LevelFilter, debug, info};
use rand::SeedableRng;
use rand::rngs::StdRng;

#[derive(Parser, Debug)]
#[command(author, version, about = "Bucket sort over phone numbers", long_about = None)]
pub struct Args {
    /// Increase log verbosity (-v info, -vv debug). RUST_LOG overrides.
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[clap(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand, Clone)]
pub enum Command {
    /// Generate random ten-digit phone numbers and write them as JSON
    #[command(alias = "generate_phone_numbers")]
    GeneratePhoneNumbers {
        /// Number of phone numbers to generate
        #[arg(short, long, default_value_t = 10)]
        number: usize,

        /// JSON file to write
        #[arg(short, long, default_value = "output.json")]
        file: PathBuf,

        /// Seed for reproducible output
        #[arg(short, long)]
        seed: Option<u64>,
    },
    /// Read phone numbers from a JSON file and bucket sort them
    #[command(alias = "sort_numbers")]
    SortNumbers {
        /// JSON file to read
        #[arg(short, long, default_value = "output.json")]
        file: PathBuf,

        /// Number of buckets for the linear bucket sort
        #[arg(short, long, default_value_t = SORT_PARAMS.default_num_buckets)]
        num_buckets: usize,

        /// Use the recursive digit bucket sort
        #[arg(short, long)]
        recursive: bool,

        /// First digit position for the recursive sort
        #[arg(short, long, default_value_t = 0)]
        digit_position: usize,

        /// Write the sorted numbers to this JSON file
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Print the sorted numbers as JSON
        #[arg(short, long)]
        print: bool,
    },
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(args.verbose);
    debug!("{:?}", args);

    let start = Instant::now();
    run(args.command)?;
    let elapsed = start.elapsed();

    info!("finished in {:?}", elapsed);
    println!("Took {:.1} s", elapsed.as_secs_f64());
    Ok(())
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        _ => LevelFilter::Debug,
    };
    env_logger::builder()
        .filter_level(level)
        .parse_default_env()
        .init();
}

fn run(command: Command) -> Result<()> {
    match command {
        Command::GeneratePhoneNumbers { number, file, seed } => {
            let mut rng = match seed {
                Some(seed) => StdRng::seed_from_u64(seed),
                None => StdRng::from_os_rng(),
            };
            let numbers = generate_phone_numbers(&mut rng, number);
            info!("generated {} phone numbers", numbers.len());

            println!("{}", io::to_json(&numbers)?);
            io::write_records(&file, &numbers)?;
            info!("wrote {}", file.display());
        }
        Command::SortNumbers {
            file,
            num_buckets,
            recursive,
            digit_position,
            output,
            print,
        } => {
            let mut records = io::read_records(&file)?;
            let (algo, config) = sort_plan(recursive, num_buckets, digit_position);
            info!(
                "sorting {} records from {} with {} {:?}",
                records.len(),
                file.display(),
                algorithm_name(algo),
                config
            );

            let mut ctx = SortContext::default();
            sort_records_with_ctx(algo, &config, &mut records, &mut ctx)
                .with_context(|| format!("{} failed", algorithm_name(algo)))?;

            if print {
                println!("{}", io::to_json(&records)?);
            }
            if let Some(output) = output {
                io::write_records(&output, &records)?;
                info!("wrote {}", output.display());
            }
        }
    }
    Ok(())
}

fn sort_plan(
    recursive: bool,
    num_buckets: usize,
    digit_position: usize,
) -> (SortAlgorithm, SortConfig) {
    let algo = if recursive {
        SortAlgorithm::RecursiveBucketSort
    } else {
        SortAlgorithm::LinearBucketSort
    };
    (
        algo,
        SortConfig {
            num_buckets,
            digit_position,
        },
    )
}
