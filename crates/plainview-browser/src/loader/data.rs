//! Inline `data:` locators.

use plainview_types::error::{PlainviewError, Result};

/// Decode `data:<mediatype>,<payload>`.
///
/// The media type is split off and ignored. The payload is percent-decoded;
/// malformed escapes pass through unchanged and invalid UTF-8 is replaced
/// with U+FFFD.
pub fn decode_data_url(raw: &str) -> Result<String> {
    let content = raw.strip_prefix("data:").ok_or_else(|| {
        PlainviewError::MalformedLocator(format!("expected a data: prefix in {raw:?}"))
    })?;
    let (media_type, payload) = content.split_once(',').ok_or_else(|| {
        PlainviewError::MalformedLocator(format!("no ',' in data locator {raw:?}"))
    })?;
    log::debug!("data locator with media type {media_type:?}");

    let bytes = urlencoding::decode_binary(payload.as_bytes());
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}
