//! CSS selection over leniently parsed HTML.
//!
//! Parsing and matching are delegated to `scraper`. This module only decides
//! how the matched elements are turned into output text: every match is
//! serialized on its own and the pieces are concatenated in document order
//! with nothing in between.

use scraper::{ElementRef, Html, Selector};

use crate::{Error, Result};

/// How matched elements are rendered.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum OutputMode {
    /// Outer markup of each match: own tag, attributes and subtree.
    #[default]
    Markup,
    /// Descendant text of each match with tags stripped.
    InnerText,
}

impl From<bool> for OutputMode {
    fn from(inner_text: bool) -> Self {
        if inner_text {
            OutputMode::InnerText
        } else {
            OutputMode::Markup
        }
    }
}

/// A compiled selector plus an output mode, reusable across documents.
#[derive(Debug)]
pub struct DocumentQuery {
    source: String,
    selector: Selector,
    mode: OutputMode,
}

impl DocumentQuery {
    pub fn new(selector: &str) -> Result<Self> {
        let compiled = Selector::parse(selector).map_err(|e| Error::SelectorSyntax {
            selector: selector.to_owned(),
            message: e.to_string(),
        })?;
        tracing::debug!(selector, "selector compiled");

        Ok(Self {
            source: selector.to_owned(),
            selector: compiled,
            mode: OutputMode::default(),
        })
    }

    pub fn with_mode(mut self, mode: OutputMode) -> Self {
        self.mode = mode;
        self
    }

    pub fn selector(&self) -> &str {
        &self.source
    }

    pub fn mode(&self) -> OutputMode {
        self.mode
    }

    /// Matched elements in document order, each once.
    ///
    /// Walks the tree rather than `Html::select`, which follows node creation
    /// order and disagrees with the tree after foster parenting.
    pub fn matches<'a>(&self, html: &'a Html) -> Vec<ElementRef<'a>> {
        html.tree
            .root()
            .descendants()
            .filter_map(ElementRef::wrap)
            .filter(|element| self.selector.matches(element))
            .collect()
    }

    /// Parse `document` and render every match.
    ///
    /// Malformed markup is recovered by the parser, never rejected.
    pub fn run(&self, document: &str) -> String {
        let html = Html::parse_document(document);
        if !html.errors.is_empty() {
            tracing::debug!(count = html.errors.len(), "markup recovered from parse errors");
        }

        let matches = self.matches(&html);
        tracing::debug!(selector = %self.source, matches = matches.len(), "selection done");

        let mut out = String::new();
        for element in matches {
            match self.mode {
                OutputMode::Markup => out.push_str(&element.html()),
                OutputMode::InnerText => out.extend(element.text()),
            }
        }
        out
    }
}

/// Select elements of `document` matching `selector` and render them.
///
/// Zero matches yields the empty string.
pub fn select(document: &str, selector: &str, mode: OutputMode) -> Result<String> {
    let query = DocumentQuery::new(selector)?.with_mode(mode);
    Ok(query.run(document))
}
