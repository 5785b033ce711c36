//! Document loading from files or stdin.

use std::fs::File;
use std::io::{self, Read};
use std::path::{Path, PathBuf};

use crate::encoding::decode_xml;
use crate::{Error, Result};

/// Where a document's text came from.
#[derive(Clone, PartialEq, Eq, Debug)]
pub enum DocumentOrigin {
    /// Input read from stdin (CLI argument `-`).
    Stdin,
    /// A file with its path.
    File(PathBuf),
}

impl DocumentOrigin {
    /// Interpret a CLI argument, where `-` means stdin.
    pub fn from_arg(arg: impl AsRef<Path>) -> Self {
        let path = arg.as_ref();
        if path.as_os_str() == "-" {
            DocumentOrigin::Stdin
        } else {
            DocumentOrigin::File(path.to_path_buf())
        }
    }

    /// Returns the display name for diagnostics.
    pub fn display_name(&self) -> String {
        match self {
            DocumentOrigin::Stdin => "<stdin>".to_owned(),
            DocumentOrigin::File(path) => path.display().to_string(),
        }
    }
}

/// Full text of a markup document, read once.
#[derive(Clone, Debug)]
pub struct Document {
    origin: DocumentOrigin,
    text: String,
}

impl Document {
    /// Read the whole document from its origin as UTF-8.
    pub fn load(origin: DocumentOrigin) -> Result<Self> {
        match open(&origin) {
            Ok(reader) => Self::from_reader(origin, reader),
            Err(source) => Err(Error::Read { origin, source }),
        }
    }

    /// Read an XML document, honoring its byte order mark or declared encoding.
    pub fn load_xml(origin: DocumentOrigin) -> Result<Self> {
        match open(&origin) {
            Ok(reader) => Self::from_xml_reader(origin, reader),
            Err(source) => Err(Error::Read { origin, source }),
        }
    }

    /// Read a document from any reader, attributing it to `origin`.
    pub fn from_reader(origin: DocumentOrigin, mut reader: impl Read) -> Result<Self> {
        let mut text = String::new();
        if let Err(source) = reader.read_to_string(&mut text) {
            return Err(Error::Read { origin, source });
        }
        tracing::trace!(
            origin = %origin.display_name(),
            bytes = text.len(),
            "document loaded"
        );
        Ok(Self { origin, text })
    }

    /// Like [`from_reader`](Self::from_reader), decoding XML bytes first.
    pub fn from_xml_reader(origin: DocumentOrigin, mut reader: impl Read) -> Result<Self> {
        let mut bytes = Vec::new();
        if let Err(source) = reader.read_to_end(&mut bytes) {
            return Err(Error::Read { origin, source });
        }
        match decode_xml(&bytes) {
            Ok(text) => Ok(Self { origin, text }),
            Err(source) => Err(Error::Decode { origin, source }),
        }
    }

    pub fn origin(&self) -> &DocumentOrigin {
        &self.origin
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn into_text(self) -> String {
        self.text
    }
}

fn open(origin: &DocumentOrigin) -> io::Result<Box<dyn Read>> {
    match origin {
        DocumentOrigin::Stdin => Ok(Box::new(io::stdin().lock())),
        DocumentOrigin::File(path) => Ok(Box::new(File::open(path)?)),
    }
}
