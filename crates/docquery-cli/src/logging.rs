//! Tracing subscriber setup shared by both binaries.
//!
//! Logs go to stderr so stdout stays reserved for query output.

use tracing_subscriber::EnvFilter;

/// Environment variable holding an explicit filter directive.
pub const LOG_ENV: &str = "DOCQUERY_LOG";

/// Filter directive for a `-v` count.
pub fn directive_for(verbose: u8) -> &'static str {
    match verbose {
        0 => "warn",
        1 => "warn,docquery=info,docquery_lib=info",
        2 => "warn,docquery=debug,docquery_lib=debug",
        _ => "warn,docquery=trace,docquery_lib=trace",
    }
}

/// Install the global subscriber. `DOCQUERY_LOG` wins over `-v` when set.
pub fn init(verbose: u8) {
    let fallback = directive_for(verbose);
    let filter = match std::env::var(LOG_ENV) {
        Ok(directive) => EnvFilter::try_new(&directive).unwrap_or_else(|e| {
            eprintln!("warning: ignoring invalid {}='{}': {}", LOG_ENV, directive, e);
            EnvFilter::new(fallback)
        }),
        Err(_) => EnvFilter::new(fallback),
    };

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(std::io::IsTerminal::is_terminal(&std::io::stderr()))
        .with_target(false)
        .without_time()
        .try_init();
}
