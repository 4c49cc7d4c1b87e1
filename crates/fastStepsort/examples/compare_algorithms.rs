//! fastStepsort Algorithm Comparison
//!
//! This example runs every algorithm in both variants over the same input
//! and prints the work counters side by side:
//! - Sequential baseline vs parallel driver
//! - Identical outputs (the baseline is the oracle)
//! - Counter and wall-time differences

use fastStepsort::prelude::*;
use rand::prelude::*;

const N: usize = 1 << 13; // Power of two so bitonic joins the comparison

fn main() -> Result<(), SortError> {
    env_logger::init();

    println!("{}", "=".repeat(80));
    println!("fastStepsort Algorithm Comparison ({} elements)", N);
    println!("{}", "=".repeat(80));
    println!();

    let mut rng = StdRng::seed_from_u64(42);
    let input: Vec<i64> = (0..N).map(|_| rng.gen::<i64>()).collect();

    let sequential = ParallelSorter::new().parallel(false).build()?;
    let parallel = ParallelSorter::new()
        .threads(4)
        .merge_threshold(1 << 9)
        .quick_threshold(1 << 9)
        .bitonic_threshold(1 << 9)
        .build()?;

    println!(
        "{:<12} {:>14} {:>14} {:>12} {:>12}",
        "algorithm", "seq cmps", "par cmps", "seq time", "par time"
    );
    println!("{}", "-".repeat(80));

    for algorithm in Algorithm::ALL {
        let mut seq_data = input.clone();
        let mut par_data = input.clone();

        let seq_report = sequential.sort(algorithm, &mut seq_data)?;
        let par_report = parallel.sort(algorithm, &mut par_data)?;

        assert_eq!(seq_data, par_data, "{} variants disagree", algorithm);

        println!(
            "{:<12} {:>14} {:>14} {:>12?} {:>12?}",
            algorithm.name(),
            seq_report.comparisons,
            par_report.comparisons,
            seq_report.elapsed,
            par_report.elapsed
        );
    }

    println!();
    println!("outputs verified identical for every algorithm");
    Ok(())
}
