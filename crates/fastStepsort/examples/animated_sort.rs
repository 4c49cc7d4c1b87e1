//! fastStepsort Animated Sorting Examples
//!
//! This example demonstrates the observation side of the engine:
//! - A console renderer receiving observation windows
//! - Step pacing with a positive delay
//! - Spin pacing inside parallel runs
//! - The final completion frame

use fastStepsort::prelude::*;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;

/// Renderer that prints each observation window to the console.
///
/// A real application would repaint bars here; element values live in the
/// application's own storage, the frame only says which indices to tint.
struct ConsoleRenderer {
    frames: AtomicU64,
}

impl Renderer for ConsoleRenderer {
    fn draw(&self, frame: &Frame) {
        let seq = self.frames.fetch_add(1, Ordering::Relaxed);
        if frame.complete {
            println!("  frame {:>3}: complete", seq);
            return;
        }
        println!(
            "  frame {:>3}: primary={:?} secondary={:?}",
            seq,
            frame.highlights.primary(),
            frame.highlights.secondary()
        );
    }
}

fn main() -> Result<(), SortError> {
    env_logger::init();

    println!("{}", "=".repeat(80));
    println!("fastStepsort Animated Sorting Examples");
    println!("{}", "=".repeat(80));
    println!();

    example_1_watch_selection()?;
    example_2_parallel_windows()?;
    example_3_silent_run()?;

    Ok(())
}

/// Example 1: Watch Selection Sort
/// Every swap and minimum improvement opens a window
fn example_1_watch_selection() -> Result<(), SortError> {
    println!("Example 1: Watch Selection Sort (sequential)");
    println!("{}", "-".repeat(80));

    let mut data = vec![5, 3, 4, 1, 2];
    println!("input: {:?}", data);

    let sorter = ParallelSorter::new()
        .parallel(false) // Sequential baseline, every step visible
        .delay(Duration::from_millis(1))
        .renderer(Arc::new(ConsoleRenderer {
            frames: AtomicU64::new(0),
        }))
        .build()?;

    let report = sorter.sort(Selection, &mut data)?;

    println!("output: {:?}", data);
    println!("{}", report);

    println!();
    Ok(())
}

/// Example 2: Parallel Observation Windows
/// Several regions move at once; windows stay internally consistent
fn example_2_parallel_windows() -> Result<(), SortError> {
    println!("Example 2: Parallel Observation Windows (merge, 2 threads)");
    println!("{}", "-".repeat(80));

    let mut data: Vec<i32> = (0..16).rev().collect();
    println!("input: {:?}", data);

    let sorter = ParallelSorter::new()
        .threads(2)
        .merge_threshold(4) // Fork descents above 4 elements
        .pacing(Spin) // Hold workers inside windows (default for parallel)
        .delay(Duration::from_micros(200))
        .renderer(Arc::new(ConsoleRenderer {
            frames: AtomicU64::new(0),
        }))
        .build()?;

    let report = sorter.sort(Merge, &mut data)?;

    println!("output: {:?}", data);
    println!("{}", report);

    println!();
    Ok(())
}

/// Example 3: Silent Run
/// Zero delay and the null renderer turn the engine into a plain sort
fn example_3_silent_run() -> Result<(), SortError> {
    println!("Example 3: Silent Run (heap, chunked merge)");
    println!("{}", "-".repeat(80));

    let mut data: Vec<i64> = (0..10_000).map(|i| (i * 7919) % 10_000).collect();

    let sorter = ParallelSorter::new()
        .heap_strategy(ChunkedMerge)
        .chunks(4)
        .build()?;

    let report = sorter.sort(Heap, &mut data)?;

    println!("sorted: {}", data.windows(2).all(|w| w[0] <= w[1]));
    println!("{}", report);

    println!();
    Ok(())
}
