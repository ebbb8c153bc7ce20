//! Version command implementation.

use console::style;

/// Execute the version command.
pub fn execute() {
    println!(
        "{} {}",
        style("sindri").cyan().bold(),
        env!("CARGO_PKG_VERSION")
    );
    println!("Grover search construction, transpilation, and simulation");
}
