use std::path::PathBuf;

use docquery_lib::{Document, DocumentOrigin, DocumentQuery, OutputMode};

use crate::output::print_line;

pub struct SelectArgs {
    pub document: PathBuf,
    pub selector: String,
    pub mode: OutputMode,
}

pub fn run(args: SelectArgs) {
    // Compile first so a bad selector fails without waiting on stdin.
    let query = match DocumentQuery::new(&args.selector) {
        Ok(query) => query.with_mode(args.mode),
        Err(e) => {
            eprintln!("error: {}", e);
            std::process::exit(1);
        }
    };

    let origin = DocumentOrigin::from_arg(&args.document);
    tracing::info!(
        document = %origin.display_name(),
        selector = %args.selector,
        mode = ?args.mode,
        "querying document"
    );

    let document = Document::load(origin).unwrap_or_else(|e| {
        eprintln!("error: {}", e);
        std::process::exit(1);
    });

    print_line(&query.run(document.text()));
}
