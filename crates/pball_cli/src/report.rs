//! Console report formatting.
//!
//! A parameter banner before the run, a results block after it. All output
//! goes to stdout; there is no persisted state.

use pball_core::{exact_volume, hypercube_volume};
use pball_engine::{RunConfig, RunResult};

use crate::config::Mode;

/// Prints the parameter banner.
pub fn print_banner(run: &RunConfig, mode: &Mode) {
    println!("Monte Carlo Volume Estimation");
    println!("==============================");
    println!("Dimensions (n):  {}", run.dimensions());
    println!("p-norm:          {:.2}", run.exponent());
    println!("Radius (R):      {:.2}", run.radius());
    println!("Sample size (N): {}", run.trials());
    println!("Seed:            {}", run.seed());
    match mode {
        Mode::Serial => println!("Mode:            serial"),
        Mode::Parallel { workers, schedule } => {
            println!("Mode:            parallel, {workers} workers, {schedule}");
        }
    }
    println!("==============================");
}

/// Prints the results block for a completed run.
pub fn print_results(run: &RunConfig, result: &RunResult) {
    let exact = exact_volume(run.dimensions(), run.exponent(), run.radius());
    let absolute_error = (result.volume - exact).abs();
    // R = 0 makes the exact volume 0; relative error is undefined there
    let relative_error = if exact > 0.0 {
        absolute_error / exact
    } else {
        0.0
    };

    println!("Results:");
    println!("--------");
    println!("Estimated volume: {:.10}", result.volume);
    println!("Exact volume:     {exact:.10}");
    println!("Absolute error:   {absolute_error:.10}");
    println!(
        "Relative error:   {:.6e} ({:.4}%)",
        relative_error,
        relative_error * 100.0
    );
    println!(
        "Hits:             {} / {} (ratio {:.6}, cube volume {:.4})",
        result.hits,
        result.trials,
        result.hit_ratio(),
        hypercube_volume(run.dimensions(), run.radius())
    );
    println!("Runtime:          {:.4} seconds", result.elapsed.as_secs_f64());
}
