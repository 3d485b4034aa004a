//! Inline image payloads as sent by the browser.
//!
//! The SPA reads the photo with `FileReader.readAsDataURL`, so the usual
//! form is `data:image/jpeg;base64,/9j/4AAQ...`. A bare base64 string is
//! accepted too and assumed to be JPEG.

use crate::error::GenAiError;

const DEFAULT_IMAGE_MIME: &str = "image/jpeg";

/// A base64 image split into its MIME type and payload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InlineImage {
    pub mime_type: String,
    pub data: String,
}

impl InlineImage {
    /// Parse a data URL or bare base64 string.
    ///
    /// The payload is only checked for base64 alphabet and length; decoding
    /// is left to the upstream API.
    pub fn parse(input: &str) -> Result<Self, GenAiError> {
        let input = input.trim();
        let (mime_type, data) = match input.strip_prefix("data:") {
            Some(rest) => {
                let (header, data) = rest.split_once(',').ok_or_else(|| {
                    GenAiError::InvalidImage("data URL has no payload".into())
                })?;
                let mime = header.strip_suffix(";base64").ok_or_else(|| {
                    GenAiError::InvalidImage("data URL must be base64-encoded".into())
                })?;
                if !mime.starts_with("image/") {
                    return Err(GenAiError::InvalidImage(format!(
                        "expected an image, got '{mime}'"
                    )));
                }
                (mime.to_string(), data)
            }
            None => (DEFAULT_IMAGE_MIME.to_string(), input),
        };

        if data.is_empty() {
            return Err(GenAiError::InvalidImage("image data is empty".into()));
        }
        if data.len() % 4 != 0 || !is_base64_alphabet(data) {
            return Err(GenAiError::InvalidImage("image data is not valid base64".into()));
        }

        Ok(Self {
            mime_type,
            data: data.to_string(),
        })
    }
}

/// Standard alphabet with at most two trailing `=`.
fn is_base64_alphabet(data: &str) -> bool {
    let body = data.trim_end_matches('=');
    data.len() - body.len() <= 2
        && body
            .bytes()
            .all(|b| b.is_ascii_alphanumeric() || b == b'+' || b == b'/')
}
