// src/logging.rs
//! Diagnostic logging setup.

#![deny(missing_docs)]

use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// Filter directive for the given `-v` count and `--quiet` flag.
pub fn level(verbose: u8, quiet: bool) -> &'static str {
    if quiet {
        return "error";
    }
    match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

/// Install a stderr subscriber. A second call is a no-op.
pub fn init(verbose: u8, quiet: bool) {
    let _ = tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false),
        )
        .with(EnvFilter::new(level(verbose, quiet)))
        .try_init();
}
