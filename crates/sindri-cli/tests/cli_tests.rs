//! CLI command parsing tests.
//!
//! The CLI is a binary crate, so clap parsing is validated through a
//! mirror of the argument structs via `try_parse_from`.

mod clap_parsing {
    use clap::{Parser, Subcommand};

    // Mirror the CLI struct for testing (since main.rs is a binary)
    #[derive(Parser)]
    #[command(name = "sindri")]
    struct TestCli {
        #[arg(short, long, action = clap::ArgAction::Count, global = true)]
        verbose: u8,

        #[command(subcommand)]
        command: TestCommands,
    }

    #[derive(Subcommand)]
    enum TestCommands {
        Run {
            #[arg(short = 'n', long, default_value = "2")]
            qubits: usize,
            #[arg(short, long, default_value = "3")]
            marked: usize,
            #[arg(short, long, default_value = "0")]
            iterations: usize,
            #[arg(short, long, default_value = "1024")]
            shots: u32,
            #[arg(short, long, default_value = "simulator")]
            backend: String,
            #[arg(long)]
            transpile: bool,
            #[arg(long, default_value = "1")]
            optimization_level: u8,
            #[arg(long)]
            show_circuit: bool,
            #[arg(short, long, default_value = "table")]
            format: String,
        },
        Backends,
        Version,
    }

    // --- Run command ---

    #[test]
    fn test_parse_run_defaults() {
        let cli = TestCli::try_parse_from(["sindri", "run"]).unwrap();
        match cli.command {
            TestCommands::Run {
                qubits,
                marked,
                iterations,
                shots,
                backend,
                transpile,
                optimization_level,
                show_circuit,
                format,
            } => {
                assert_eq!(qubits, 2);
                assert_eq!(marked, 3);
                assert_eq!(iterations, 0);
                assert_eq!(shots, 1024);
                assert_eq!(backend, "simulator");
                assert!(!transpile);
                assert_eq!(optimization_level, 1);
                assert!(!show_circuit);
                assert_eq!(format, "table");
            }
            _ => panic!("Expected Run command"),
        }
    }

    #[test]
    fn test_parse_run_with_all_args() {
        let cli = TestCli::try_parse_from([
            "sindri",
            "run",
            "-n",
            "3",
            "-m",
            "5",
            "-i",
            "2",
            "-s",
            "4096",
            "--transpile",
            "--optimization-level",
            "2",
            "--show-circuit",
            "-f",
            "json",
        ])
        .unwrap();
        match cli.command {
            TestCommands::Run {
                qubits,
                marked,
                iterations,
                shots,
                transpile,
                optimization_level,
                show_circuit,
                format,
                ..
            } => {
                assert_eq!(qubits, 3);
                assert_eq!(marked, 5);
                assert_eq!(iterations, 2);
                assert_eq!(shots, 4096);
                assert!(transpile);
                assert_eq!(optimization_level, 2);
                assert!(show_circuit);
                assert_eq!(format, "json");
            }
            _ => panic!("Expected Run command"),
        }
    }

    #[test]
    fn test_parse_run_rejects_bad_shots() {
        let result = TestCli::try_parse_from(["sindri", "run", "-s", "lots"]);
        assert!(result.is_err());
    }

    // --- Backends & Version ---

    #[test]
    fn test_parse_backends() {
        let cli = TestCli::try_parse_from(["sindri", "backends"]).unwrap();
        assert!(matches!(cli.command, TestCommands::Backends));
    }

    #[test]
    fn test_parse_version() {
        let cli = TestCli::try_parse_from(["sindri", "version"]).unwrap();
        assert!(matches!(cli.command, TestCommands::Version));
    }

    // --- Verbose flag ---

    #[test]
    fn test_parse_verbose_levels() {
        assert_eq!(
            TestCli::try_parse_from(["sindri", "-v", "version"])
                .unwrap()
                .verbose,
            1
        );
        assert_eq!(
            TestCli::try_parse_from(["sindri", "-vvv", "version"])
                .unwrap()
                .verbose,
            3
        );
    }

    // --- Error cases ---

    #[test]
    fn test_no_subcommand() {
        assert!(TestCli::try_parse_from(["sindri"]).is_err());
    }

    #[test]
    fn test_unknown_subcommand() {
        assert!(TestCli::try_parse_from(["sindri", "foobar"]).is_err());
    }
}

mod backend_selection {
    // Equivalent to commands::common::build_backend's name matching.
    fn known_backend(name: &str) -> bool {
        matches!(name.to_lowercase().as_str(), "simulator" | "sim")
    }

    #[test]
    fn test_backend_aliases() {
        assert!(known_backend("simulator"));
        assert!(known_backend("sim"));
        assert!(known_backend("Simulator"));
        assert!(!known_backend("quantum_computer_9000"));
    }
}
