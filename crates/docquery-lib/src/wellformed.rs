//! XML well-formedness check.

use roxmltree::{Document, ParsingOptions};

use crate::Result;

/// Parse `text` as XML and report the first well-formedness violation.
///
/// Document type declarations are accepted.
pub fn check_well_formed(text: &str) -> Result<()> {
    let options = ParsingOptions {
        allow_dtd: true,
        ..ParsingOptions::default()
    };

    let doc = Document::parse_with_options(text, options)?;
    tracing::debug!(
        root = doc.root_element().tag_name().name(),
        nodes = doc.descendants().count(),
        "document is well-formed"
    );
    Ok(())
}
