//! docquery: CSS selector queries over HTML documents.
//!
//! # Example
//!
//! ```
//! use docquery_lib::{OutputMode, select};
//!
//! let html = "<html><body><div class='test'>Hello <b>World</b></div></body></html>";
//!
//! assert_eq!(select(html, ".test b", OutputMode::Markup).unwrap(), "<b>World</b>");
//! assert_eq!(select(html, ".test", OutputMode::InnerText).unwrap(), "Hello World");
//! ```

#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

pub mod document;
pub mod encoding;
pub mod select;
pub mod wellformed;


pub use document::{Document, DocumentOrigin};
pub use encoding::{DecodeError, decode_xml};
pub use select::{DocumentQuery, OutputMode, select};
pub use wellformed::check_well_formed;

/// Errors that can occur while loading, querying, or checking a document.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The document could not be opened or read.
    #[error("failed to read '{}': {source}", .origin.display_name())]
    Read {
        origin: DocumentOrigin,
        #[source]
        source: std::io::Error,
    },

    /// The document's bytes are not valid in its encoding.
    #[error("failed to decode '{}': {source}", .origin.display_name())]
    Decode {
        origin: DocumentOrigin,
        #[source]
        source: DecodeError,
    },

    /// The selector is not valid CSS.
    #[error("invalid selector '{selector}': {message}")]
    SelectorSyntax { selector: String, message: String },

    #[error("{0}")]
    NotWellFormed(#[from] roxmltree::Error),
}

impl Error {
    /// Line and column (1-based) of a well-formedness violation.
    pub fn position(&self) -> Option<(u32, u32)> {
        match self {
            Error::NotWellFormed(e) => {
                let pos = e.pos();
                Some((pos.row, pos.col))
            }
            _ => None,
        }
    }
}

/// Result type for document operations.
pub type Result<T> = std::result::Result<T, Error>;
