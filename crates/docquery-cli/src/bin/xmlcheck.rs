use docquery::cli::{WellformedParams, build_xmlcheck_cli};
use docquery::{commands, logging};

fn main() {
    let matches = build_xmlcheck_cli().get_matches();
    let params = WellformedParams::from_matches(&matches);

    logging::init(params.verbose);
    commands::wellformed::run(params.into());
}
