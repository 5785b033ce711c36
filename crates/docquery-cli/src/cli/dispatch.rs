//! Dispatch logic: extract params from ArgMatches and convert to command args.

use std::path::PathBuf;

use clap::ArgMatches;
use docquery_lib::OutputMode;

use crate::commands::select::SelectArgs;
use crate::commands::wellformed::WellformedArgs;

pub struct SelectParams {
    pub document: PathBuf,
    pub selector: String,
    pub inner_text: bool,
    pub verbose: u8,
}

impl SelectParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            document: m
                .get_one::<PathBuf>("document")
                .cloned()
                .unwrap_or_else(|| PathBuf::from("-")),
            selector: m
                .get_one::<String>("selector")
                .cloned()
                .unwrap_or_else(|| "*".to_string()),
            inner_text: m.get_flag("inner_text"),
            verbose: m.get_count("verbose"),
        }
    }
}

impl From<SelectParams> for SelectArgs {
    fn from(p: SelectParams) -> Self {
        Self {
            document: p.document,
            selector: p.selector,
            mode: OutputMode::from(p.inner_text),
        }
    }
}

pub struct WellformedParams {
    pub file: PathBuf,
    pub verbose: u8,
}

impl WellformedParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            // Required by the command definition.
            file: m.get_one::<PathBuf>("file").cloned().unwrap_or_default(),
            verbose: m.get_count("verbose"),
        }
    }
}

impl From<WellformedParams> for WellformedArgs {
    fn from(p: WellformedParams) -> Self {
        Self { file: p.file }
    }
}
