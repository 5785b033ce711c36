use tracing_subscriber::EnvFilter;

use crate::logging::directive_for;

#[test]
fn quiet_by_default() {
    assert_eq!(directive_for(0), "warn");
}

#[test]
fn verbosity_saturates() {
    assert_eq!(directive_for(3), directive_for(u8::MAX));
}

#[test]
fn every_level_is_a_valid_filter() {
    for verbose in 0..=3 {
        let directive = directive_for(verbose);
        assert!(
            EnvFilter::try_new(directive).is_ok(),
            "invalid directive for -v x{verbose}: {directive}"
        );
    }
}
