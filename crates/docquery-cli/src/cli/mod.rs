mod args;
mod commands;
mod dispatch;


pub use commands::{build_cli, build_xmlcheck_cli};
pub use dispatch::{SelectParams, WellformedParams};
