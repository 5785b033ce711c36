use std::path::PathBuf;

use docquery_lib::{Document, DocumentOrigin, Error, check_well_formed};

use crate::output::print_line;

pub struct WellformedArgs {
    pub file: PathBuf,
}

pub fn run(args: WellformedArgs) {
    let origin = DocumentOrigin::from_arg(&args.file);
    let name = origin.display_name();

    let verdict = match Document::load_xml(origin) {
        Ok(document) => check_well_formed(document.text()),
        // Undecodable bytes are a verdict on the document, not a read failure.
        Err(e @ Error::Decode { .. }) => Err(e),
        Err(e) => {
            eprintln!("error: {}", e);
            std::process::exit(1);
        }
    };

    match verdict {
        Ok(()) => print_line(&format!("{} is well-formed.", name)),
        Err(e) => {
            if let Some((line, column)) = e.position() {
                tracing::info!(line, column, "well-formedness violation");
            }
            print_line(&format!("{} is NOT well-formed:\n{}", name, e));
            std::process::exit(1);
        }
    }
}
