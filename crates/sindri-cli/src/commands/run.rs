//! Run command implementation.

use anyhow::Result;
use console::style;
use indicatif::{ProgressBar, ProgressStyle};

use sindri_circuits::{grover, optimal_iterations, success_probability};
use sindri_compile::{BasisGates, PassManagerBuilder};
use sindri_hal::{Backend, ValidationResult};
use sindri_ir::diagram;

use super::common::{build_backend, print_results};

/// Execute the run command.
#[allow(clippy::too_many_arguments)]
pub async fn execute(
    qubits: usize,
    marked: usize,
    iterations: usize,
    shots: u32,
    backend: &str,
    transpile: bool,
    optimization_level: u8,
    show_circuit: bool,
    format: &str,
) -> Result<()> {
    let iterations = if iterations == 0 {
        optimal_iterations(qubits)
    } else {
        iterations
    };

    println!(
        "{} Grover search: {} qubits, marked |{:0width$b}⟩, {} iteration(s), {} shots on {}",
        style("→").cyan().bold(),
        qubits,
        marked,
        iterations,
        shots,
        style(backend).yellow(),
        width = qubits,
    );

    // Build circuit
    let mut circuit = grover(qubits, marked, iterations)?;
    println!(
        "  Built: depth {}, {} ops",
        circuit.depth(),
        circuit.num_ops()
    );
    println!(
        "  Expected success probability: {:.1}%",
        success_probability(qubits, iterations) * 100.0
    );

    // Compile if requested
    if transpile {
        let (pm, mut props) = PassManagerBuilder::new()
            .with_optimization_level(optimization_level)
            .with_basis(BasisGates::cnot())
            .build();
        pm.run(&mut circuit, &mut props)?;
        println!(
            "  Transpiled: depth {}, {} ops",
            circuit.depth(),
            circuit.num_ops()
        );
    }

    if show_circuit {
        println!("\n{}", diagram::draw(&circuit));
    }

    // Create backend and check availability
    let backend_impl = build_backend(backend)?;
    let avail = backend_impl.availability().await?;
    if !avail.is_available {
        anyhow::bail!("Backend '{backend}' is not available");
    }

    match backend_impl.validate(&circuit).await? {
        ValidationResult::Valid => {}
        ValidationResult::Invalid { reasons } => {
            anyhow::bail!("Circuit rejected by backend: {}", reasons.join("; "));
        }
        ValidationResult::RequiresTranspilation { details } => {
            anyhow::bail!("Circuit needs transpilation ({details}); rerun with --transpile");
        }
    }

    // Submit job
    let spinner = ProgressBar::new_spinner();
    spinner.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner:.cyan} {msg}")
            .unwrap(),
    );
    spinner.set_message("Submitting job...");
    spinner.enable_steady_tick(std::time::Duration::from_millis(100));

    let job_id = backend_impl.submit(&circuit, shots).await?;
    spinner.set_message(format!("Running job {job_id}..."));

    // Wait for result
    let result = backend_impl.wait(&job_id).await?;
    spinner.finish_and_clear();

    match format {
        "json" => println!("{}", serde_json::to_string_pretty(&result)?),
        _ => {
            // The counts mapping first, then the histogram.
            println!("\n{}", result.counts);
            print_results(&result);
        }
    }

    Ok(())
}
