use std::time::Instant;

use log::{debug, info};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::{heap, insertion, merge};

pub const DEFAULT_MIN_POWER: u32 = 7;
pub const DEFAULT_MAX_POWER: u32 = 22;
/// Insertion sort at 2^19 elements and beyond takes minutes to hours.
pub const DEFAULT_INSERTION_CUTOFF_POWER: u32 = 19;
pub const DEFAULT_SEED: u64 = 1357;
/// Generated values are uniform in [0, MAX_VALUE].
pub const MAX_VALUE: u64 = 32767;

#[derive(Debug, Clone)]
pub struct BenchConfig {
    /// Smallest tested size, as a power of two.
    pub min_power: u32,
    /// Largest tested size, as a power of two (inclusive).
    pub max_power: u32,
    /// Insertion sort is skipped at element counts >= this.
    pub insertion_cutoff: usize,
    pub seed: u64,
}

impl Default for BenchConfig {
    fn default() -> Self {
        Self {
            min_power: DEFAULT_MIN_POWER,
            max_power: DEFAULT_MAX_POWER,
            insertion_cutoff: 1 << DEFAULT_INSERTION_CUTOFF_POWER,
            seed: DEFAULT_SEED,
        }
    }
}

/// One result line: timings in fractional milliseconds, `insertion_ms` is
/// `None` when the size was past the cutoff and the sort never ran.
#[derive(Debug, Clone, PartialEq)]
pub struct BenchRow {
    pub size: usize,
    pub log2_size: u32,
    pub heap_ms: f64,
    pub insertion_ms: Option<f64>,
    pub merge_ms: f64,
}

pub fn generate_input<R: Rng>(rng: &mut R, len: usize) -> Vec<u64> {
    (0..len).map(|_| rng.gen_range(0..=MAX_VALUE)).collect()
}

// Instant is monotonic and sub-microsecond; near-zero runs are fine.
fn time_ms(sort: impl FnOnce()) -> f64 {
    let start = Instant::now();
    sort();
    start.elapsed().as_secs_f64() * 1000.0
}

/// Runs every size in the configured range, rows in increasing size order.
pub fn run(config: &BenchConfig) -> Vec<BenchRow> {
    let mut rng = StdRng::seed_from_u64(config.seed);
    (config.min_power..=config.max_power)
        .map(|power| run_size(config, &mut rng, power))
        .collect()
}

/// Benchmarks all three algorithms on identical fresh input of 2^power
/// elements. Timing wraps exactly the sort call, never generation or the
/// copies; all three working copies are dropped before the next size runs.
pub fn run_size(config: &BenchConfig, rng: &mut StdRng, power: u32) -> BenchRow {
    let size = 1usize << power;
    info!("array size = 2^{power} ({size} elements)");
    let input = generate_input(rng, size);

    let mut copy = input.clone();
    debug!("running heap sort");
    let heap_ms = time_ms(|| heap::heap_sort(&mut copy));

    let insertion_ms = if size < config.insertion_cutoff {
        let mut copy = input.clone();
        debug!("running insertion sort");
        Some(time_ms(|| insertion::insertion_sort(&mut copy)))
    } else {
        debug!("skipping insertion sort, {size} elements is past the cutoff");
        None
    };

    // Merge sort gets its own pristine copy. The C original reused the
    // insertion-sort buffer here, handing merge sort already-sorted input
    // below the cutoff and unsorted input above it.
    let mut copy = input.clone();
    debug!("running merge sort");
    let merge_ms = time_ms(|| merge::merge_sort(&mut copy));

    BenchRow {
        size,
        log2_size: power,
        heap_ms,
        insertion_ms,
        merge_ms,
    }
}
