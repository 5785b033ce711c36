//! Writing results to stdout.

use std::io::{self, ErrorKind, Write};

/// Write `text` and a newline, then flush.
///
/// A closed reader (`docquery page.html | head -c 10`) is not an error: the
/// rest of the output has nowhere to go.
pub fn write_line(mut out: impl Write, text: &str) -> io::Result<()> {
    match writeln!(out, "{text}").and_then(|()| out.flush()) {
        Err(e) if e.kind() == ErrorKind::BrokenPipe => {
            tracing::debug!("stdout closed early, output dropped");
            Ok(())
        }
        result => result,
    }
}

/// [`write_line`] to stdout, exiting with status 1 on any other write failure.
pub fn print_line(text: &str) {
    if let Err(e) = write_line(io::stdout().lock(), text) {
        eprintln!("error: failed to write output: {}", e);
        std::process::exit(1);
    }
}
