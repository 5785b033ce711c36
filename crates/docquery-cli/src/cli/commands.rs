//! Command builders for the CLI binaries.

use clap::Command;

use super::args::*;

/// Build the `docquery` command.
pub fn build_cli() -> Command {
    Command::new("docquery")
        .version(env!("CARGO_PKG_VERSION"))
        .about("DocQuery - A tool for querying documents")
        .override_usage(
            "\
  docquery [DOCUMENT] [-s <SELECTOR>] [-i]",
        )
        .after_help(
            r#"EXAMPLES:
  docquery page.html                   # every element, as markup
  docquery page.html -s 'nav a'        # links inside <nav>
  docquery page.html -s h1 -i          # heading text only
  curl -s example.com | docquery -s title -i"#,
        )
        .arg(document_arg())
        .arg(selector_arg())
        .arg(inner_text_arg())
        .arg(verbose_arg())
}

/// Build the `xmlcheck` command.
pub fn build_xmlcheck_cli() -> Command {
    Command::new("xmlcheck")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Basic XML well-formedness check")
        .after_help(
            r#"EXAMPLES:
  xmlcheck feed.xml
  cat feed.xml | xmlcheck -"#,
        )
        .arg(xml_file_arg())
        .arg(verbose_arg())
}
