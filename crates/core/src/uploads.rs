//! Naming and typing rules for files users upload (reports, SOS audio).

use std::sync::LazyLock;

use regex::Regex;

use crate::error::CoreError;

/// Report type for PDF documents.
pub const REPORT_KIND_PDF: &str = "pdf";
/// Report type for photos and scans.
pub const REPORT_KIND_IMAGE: &str = "image";

const VALID_REPORT_KINDS: &[&str] = &[REPORT_KIND_PDF, REPORT_KIND_IMAGE];

const REPORT_EXTENSIONS_PDF: &[&str] = &["pdf"];
const REPORT_EXTENSIONS_IMAGE: &[&str] = &["jpg", "jpeg", "png", "webp", "heic"];

/// Audio container formats browsers produce from `MediaRecorder`.
pub const SUPPORTED_AUDIO_EXTENSIONS: &[&str] = &["webm", "ogg", "wav", "mp3", "m4a"];

const MAX_STORED_NAME_LEN: usize = 120;

static UNSAFE_CHARS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^A-Za-z0-9._-]+").expect("valid regex"));

/// Validate that `kind` is `"pdf"` or `"image"`.
pub fn validate_report_kind(kind: &str) -> Result<(), CoreError> {
    if VALID_REPORT_KINDS.contains(&kind) {
        Ok(())
    } else {
        Err(CoreError::Validation(format!(
            "Invalid report type '{kind}'. Must be one of: {VALID_REPORT_KINDS:?}"
        )))
    }
}

/// Check the uploaded file's extension against the declared report kind.
pub fn validate_report_extension(kind: &str, file_name: &str) -> Result<(), CoreError> {
    let ext = extension(file_name);
    let allowed = match kind {
        REPORT_KIND_PDF => REPORT_EXTENSIONS_PDF,
        REPORT_KIND_IMAGE => REPORT_EXTENSIONS_IMAGE,
        other => return validate_report_kind(other),
    };
    if allowed.contains(&ext.as_str()) {
        Ok(())
    } else {
        Err(CoreError::Validation(format!(
            "A '{kind}' report must be one of: {allowed:?}"
        )))
    }
}

/// Check an SOS clip's extension.
pub fn validate_audio_extension(file_name: &str) -> Result<(), CoreError> {
    let ext = extension(file_name);
    if SUPPORTED_AUDIO_EXTENSIONS.contains(&ext.as_str()) {
        Ok(())
    } else {
        Err(CoreError::Validation(format!(
            "Unsupported audio format '.{ext}'. Supported: {SUPPORTED_AUDIO_EXTENSIONS:?}"
        )))
    }
}

/// Lower-cased extension without the dot, or an empty string.
pub fn extension(file_name: &str) -> String {
    match file_name.rsplit_once('.') {
        Some((stem, ext)) if !stem.is_empty() => ext.to_lowercase(),
        _ => String::new(),
    }
}

/// Build the on-disk name `<prefix>-<sanitised original name>`.
///
/// `prefix` must be unique per upload; the caller combines a timestamp with
/// a random id. Path separators and anything outside `[A-Za-z0-9._-]`
/// collapse to `_`, so the result can never escape the upload directory.
pub fn stored_file_name(original: &str, prefix: &str) -> String {
    let base = original.rsplit(['/', '\\']).next().unwrap_or_default();
    let cleaned = UNSAFE_CHARS.replace_all(base, "_");
    let cleaned = cleaned.trim_start_matches('.');
    if cleaned.is_empty() {
        return format!("{prefix}-upload");
    }
    // Only ASCII survives the substitution, so byte slicing is safe. Keep
    // the tail so the extension is preserved.
    let tail = &cleaned[cleaned.len().saturating_sub(MAX_STORED_NAME_LEN)..];
    format!("{prefix}-{tail}")
}

/// MIME type served for a stored file, by extension.
pub fn content_type_for(file_name: &str) -> &'static str {
    match extension(file_name).as_str() {
        "pdf" => "application/pdf",
        "jpg" | "jpeg" => "image/jpeg",
        "png" => "image/png",
        "webp" => "image/webp",
        "heic" => "image/heic",
        "webm" => "audio/webm",
        "ogg" => "audio/ogg",
        "wav" => "audio/wav",
        "mp3" => "audio/mpeg",
        "m4a" => "audio/mp4",
        _ => "application/octet-stream",
    }
}

/// File name offered in `Content-Disposition` when downloading a report:
/// the user's display name with the stored file's extension appended when
/// missing. Quotes and control characters are dropped.
pub fn download_file_name(display_name: &str, stored_path: &str) -> String {
    let mut name: String = display_name
        .chars()
        .filter(|c| !c.is_control() && *c != '"' && *c != '\\')
        .collect();
    if name.trim().is_empty() {
        name = "report".to_string();
    }
    let ext = extension(stored_path);
    if !ext.is_empty() && extension(&name) != ext {
        name.push('.');
        name.push_str(&ext);
    }
    name
}
