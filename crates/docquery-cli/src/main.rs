use docquery::cli::{SelectParams, build_cli};
use docquery::{commands, logging};

fn main() {
    let matches = build_cli().get_matches();
    let params = SelectParams::from_matches(&matches);

    logging::init(params.verbose);
    commands::select::run(params.into());
}
