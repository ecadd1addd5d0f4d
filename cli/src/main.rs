use clap::Parser;

mod cli;

use brltool_core::config;
use brltool_core::dispatch::{dispatch, usage_summary};
use brltool_programs::builtin_registry;
use tracing_subscriber::EnvFilter;

const BINARY: &str = "brltool";

fn main() {
    std::process::exit(run());
}

fn run() -> i32 {
    let args = cli::Args::parse();

    let config = match config::load_default() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("{BINARY}: {e:#}");
            return 1;
        }
    };
    init_tracing(&config.logging.level);

    let registry = builtin_registry();
    tracing::debug!(programs = registry.len(), "registry built");

    match dispatch(&registry, &args.invocation) {
        Ok(()) => 0,
        Err(e) => {
            eprintln!("{BINARY}: {e}");
            if e.is_syntax() {
                eprintln!("{}", usage_summary(BINARY, &registry));
                2
            } else {
                1
            }
        }
    }
}

/// `RUST_LOG` wins over the configured level when set.
fn init_tracing(level: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}
