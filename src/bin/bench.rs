use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use log::{error, info};
use rand::rngs::StdRng;
use rand::SeedableRng;

use sortbench::bench::{self, BenchConfig};
use sortbench::report::{CsvReport, ReportError};

/// Times heap, insertion and merge sort over power-of-two input sizes and
/// writes the results to a CSV table.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// Smallest input size, as a power of two
    #[arg(long, value_name = "POWER", default_value_t = bench::DEFAULT_MIN_POWER)]
    min_power: u32,

    /// Largest input size, as a power of two (inclusive)
    #[arg(long, value_name = "POWER", default_value_t = bench::DEFAULT_MAX_POWER)]
    max_power: u32,

    /// Skip insertion sort at sizes of 2^POWER elements and above
    #[arg(long, value_name = "POWER", default_value_t = bench::DEFAULT_INSERTION_CUTOFF_POWER)]
    insertion_cutoff_power: u32,

    /// Seed for the input generator
    #[arg(long, default_value_t = bench::DEFAULT_SEED)]
    seed: u64,

    /// Where to write the results table
    #[arg(long, short, default_value = "sorting_results.csv")]
    output: PathBuf,
}

fn run(args: &Args) -> Result<(), ReportError> {
    let config = BenchConfig {
        min_power: args.min_power,
        max_power: args.max_power,
        insertion_cutoff: 1 << args.insertion_cutoff_power,
        seed: args.seed,
    };

    // Open the sink first so a bad path fails before hours of sorting.
    let mut report = CsvReport::create(&args.output)?;
    let mut rng = StdRng::seed_from_u64(config.seed);
    for (test, power) in (config.min_power..=config.max_power).enumerate() {
        info!("test {}", test + 1);
        let row = bench::run_size(&config, &mut rng, power);
        report.write_row(&row)?;
    }
    report.finish()?;
    info!("results written to {}", args.output.display());
    Ok(())
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let args = Args::parse();
    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!("{err}");
            ExitCode::FAILURE
        }
    }
}
