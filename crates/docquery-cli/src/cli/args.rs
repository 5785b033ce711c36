//! Shared argument builders for CLI commands.
//!
//! Each function returns a `clap::Arg` that can be composed into commands.

use std::path::PathBuf;

use clap::{Arg, ArgAction, value_parser};

/// Document to query (positional, defaults to stdin).
pub fn document_arg() -> Arg {
    Arg::new("document")
        .value_name("DOCUMENT")
        .value_parser(value_parser!(PathBuf))
        .default_value("-")
        .help("The document to query (use \"-\" for stdin)")
}

/// CSS selector (-s/--selector).
pub fn selector_arg() -> Arg {
    Arg::new("selector")
        .short('s')
        .long("selector")
        .value_name("SELECTOR")
        .default_value("*")
        .help("CSS selector to filter elements")
}

/// Text-only output (-i/--inner-text).
pub fn inner_text_arg() -> Arg {
    Arg::new("inner_text")
        .short('i')
        .long("inner-text")
        .action(ArgAction::SetTrue)
        .help("Return only the inner text of the selected elements")
}

/// XML file to check (positional, required).
pub fn xml_file_arg() -> Arg {
    Arg::new("file")
        .value_name("FILE")
        .value_parser(value_parser!(PathBuf))
        .required(true)
        .help("XML file to check (use \"-\" for stdin)")
}

/// Verbosity level (-v, -vv, -vvv).
pub fn verbose_arg() -> Arg {
    Arg::new("verbose")
        .short('v')
        .action(ArgAction::Count)
        .help("Log to stderr (-v info, -vv debug, -vvv trace)")
}
