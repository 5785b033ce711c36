//! Character decoding for XML input.
//!
//! Detection order: byte order mark, then the `encoding` pseudo-attribute of
//! the XML declaration, then UTF-8.

use std::borrow::Cow;

use encoding_rs::{Encoding, UTF_8};

/// Raw bytes could not be turned into text.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DecodeError {
    #[error("unsupported encoding '{0}'")]
    UnsupportedEncoding(String),

    #[error("malformed {0} byte sequence")]
    Malformed(&'static str),
}

/// Pick the encoding of an XML byte stream and the number of BOM bytes to skip.
pub fn detect_xml_encoding(bytes: &[u8]) -> Result<(&'static Encoding, usize), DecodeError> {
    if let Some(found) = Encoding::for_bom(bytes) {
        return Ok(found);
    }

    match declared_encoding(bytes) {
        Some(label) => Encoding::for_label(label)
            .map(|encoding| (encoding, 0))
            .ok_or_else(|| {
                DecodeError::UnsupportedEncoding(String::from_utf8_lossy(label).into_owned())
            }),
        None => Ok((UTF_8, 0)),
    }
}

/// Decode XML bytes into UTF-8 text. Malformed sequences are errors, never replaced.
pub fn decode_xml(bytes: &[u8]) -> Result<String, DecodeError> {
    let (encoding, bom_len) = detect_xml_encoding(bytes)?;
    tracing::trace!(encoding = encoding.name(), bom_len, "decoding xml input");

    encoding
        .decode_without_bom_handling_and_without_replacement(&bytes[bom_len..])
        .map(Cow::into_owned)
        .ok_or(DecodeError::Malformed(encoding.name()))
}

/// Value of `encoding="..."` in a leading `<?xml ... ?>`, read as ASCII.
fn declared_encoding(bytes: &[u8]) -> Option<&[u8]> {
    let decl = bytes.strip_prefix(b"<?xml")?;
    let end = decl.windows(2).position(|w| w == b"?>")?;
    let decl = &decl[..end];

    let at = decl.windows(8).position(|w| w == b"encoding")?;
    let rest = decl[at + 8..].trim_ascii_start();
    let rest = rest.strip_prefix(b"=")?.trim_ascii_start();

    let (&quote, rest) = rest.split_first()?;
    if quote != b'"' && quote != b'\'' {
        return None;
    }
    let len = rest.iter().position(|&b| b == quote)?;
    Some(&rest[..len])
}
