//! Backends listing command.

use anyhow::Result;
use console::style;

use sindri_hal::Backend;

use super::common::build_backend;

/// Execute the backends command.
pub async fn execute() -> Result<()> {
    println!("{}", style("Available backends:").bold());

    let backend = build_backend("simulator")?;
    let caps = backend.capabilities();
    let avail = backend.availability().await?;

    let status = if avail.is_available {
        style("online").green()
    } else {
        style("offline").red()
    };
    println!(
        "  {} — {} qubits, max {} shots, {}, {}",
        style(&caps.name).cyan(),
        caps.num_qubits,
        caps.max_shots,
        if caps.is_simulator {
            "simulator"
        } else {
            "hardware"
        },
        status
    );

    Ok(())
}
