//! Shared helpers for CLI commands.

use anyhow::Result;

use sindri_adapter_sim::SimulatorBackend;
use sindri_hal::{Backend, ExecutionResult};

/// Construct a backend by name.
pub fn build_backend(name: &str) -> Result<Box<dyn Backend>> {
    match name.to_lowercase().as_str() {
        "simulator" | "sim" => Ok(Box::new(SimulatorBackend::new())),
        other => {
            anyhow::bail!("Unknown backend: '{other}'. Available: simulator")
        }
    }
}

/// Print execution results as a count histogram.
pub fn print_results(result: &ExecutionResult) {
    use console::style;

    println!(
        "\n{} Results ({} shots):",
        style("✓").green().bold(),
        result.shots
    );

    let sorted = result.counts.sorted();
    let extra = sorted.len().saturating_sub(16);
    let total = result.counts.total_shots() as f64;

    for (bitstring, count) in sorted.into_iter().take(16) {
        let prob = count as f64 / total * 100.0;
        let bar_len = (prob / 2.0).round() as usize;
        let bar: String = "█".repeat(bar_len);

        println!(
            "  {}: {:>6} ({:>5.2}%) {}",
            style(bitstring).cyan(),
            count,
            prob,
            style(bar).green()
        );
    }

    if extra > 0 {
        println!("  ... and {extra} more outcomes");
    }

    if let Some(time_ms) = result.execution_time_ms {
        println!("\n  Execution time: {} ms", style(time_ms).yellow());
    }
}
