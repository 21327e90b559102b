//! Data-URI iframe embedding.
//!
//! Wraps a rendered document into an `<iframe>` whose `src` inlines the
//! whole document as base64, and recovers the document losslessly from a
//! stored snippet.

use base64::Engine;
use base64::engine::general_purpose::STANDARD;

/// Prefix marking the inlined document inside the iframe `src` attribute.
pub const DATA_URI_PREFIX: &str = "data:text/html;base64,";

/// Errors that occur while decoding a stored iframe snippet.
///
/// The encoder always produces the expected shape, so any of these
/// indicates an internal-consistency violation in stored data.
#[derive(Debug, thiserror::Error)]
pub enum EmbedError {
    /// Snippet does not contain the `data:text/html;base64,` marker
    #[error("iframe snippet missing data URI prefix")]
    MissingDataUri,

    /// Base64 payload failed to decode
    #[error("invalid base64 payload: {0}")]
    InvalidBase64(#[from] base64::DecodeError),

    /// Decoded payload is not valid UTF-8
    #[error("decoded payload is not valid UTF-8: {0}")]
    InvalidUtf8(#[from] std::string::FromUtf8Error),
}

/// Wraps a rendered HTML document into a data-URI iframe snippet.
pub fn iframe_snippet(document: &str) -> String {
    let payload = STANDARD.encode(document.as_bytes());
    format!(
        r#"<iframe src="{DATA_URI_PREFIX}{payload}" width="100%" height="400" frameborder="0" allowfullscreen></iframe>"#
    )
}

/// Recovers the original HTML document from an iframe snippet.
///
/// Locates the data-URI prefix, takes the payload up to the closing
/// attribute quote, and decodes it. The round trip through
/// [`iframe_snippet`] is byte-exact.
///
/// # Errors
///
/// - `EmbedError::MissingDataUri` - If the snippet lacks the prefix or a closing quote
/// - `EmbedError::InvalidBase64` - If the payload is not valid base64
/// - `EmbedError::InvalidUtf8` - If the decoded bytes are not UTF-8
pub fn extract_document(snippet: &str) -> Result<String, EmbedError> {
    let start = snippet
        .find(DATA_URI_PREFIX)
        .ok_or(EmbedError::MissingDataUri)?
        + DATA_URI_PREFIX.len();
    let end = snippet[start..]
        .find('"')
        .ok_or(EmbedError::MissingDataUri)?
        + start;

    let bytes = STANDARD.decode(&snippet[start..end])?;
    Ok(String::from_utf8(bytes)?)
}
