mod cli;

use cli::Cli;
use lc3_vm::Vm;

use clap::Parser;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

fn main() -> ExitCode {
    let args = Cli::parse();
    init_logging(args.verbose);

    let mut vm = match Vm::with_terminal() {
        Ok(vm) => vm,
        Err(e) => {
            eprintln!("failed to initialize terminal: {e}");
            return ExitCode::FAILURE;
        }
    };

    for path in &args.images {
        if let Err(e) = vm.load_file(path) {
            eprintln!("{e}");
            return ExitCode::FAILURE;
        }
    }

    match vm.run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{e}");
            ExitCode::FAILURE
        }
    }
}

/// `-v` raises the default filter from warnings-only up through debug; an
/// explicit `RUST_LOG` always wins.
fn init_logging(verbosity: u8) {
    let default_directive = match verbosity {
        0 => "lc3_vm=warn",
        1 => "lc3_vm=info",
        2 => "lc3_vm=debug",
        _ => "lc3_vm=trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_directive));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}
