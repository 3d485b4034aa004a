//! Content fingerprints for files written to the upload directory.
//!
//! The digest is recorded next to the row when a report or SOS clip is
//! stored and checked again before a report is served back.

use sha2::{Digest, Sha256};

/// Lowercase hex SHA-256 of `data` (64 chars).
pub fn sha256_hex(data: &[u8]) -> String {
    format!("{:x}", Sha256::digest(data))
}

/// True when `data` still hashes to the recorded `expected` digest.
///
/// Comparison ignores ASCII case so digests written by other tools match.
pub fn matches_sha256(data: &[u8], expected: &str) -> bool {
    sha256_hex(data).eq_ignore_ascii_case(expected.trim())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_digest_of_empty_input() {
        assert_eq!(
            sha256_hex(b""),
            "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855"
        );
    }

    #[test]
    fn stored_digest_detects_changed_bytes() {
        let recorded = sha256_hex(b"%PDF-1.4 lab results");
        assert!(matches_sha256(b"%PDF-1.4 lab results", &recorded));
        assert!(matches_sha256(b"%PDF-1.4 lab results", &recorded.to_uppercase()));
        assert!(!matches_sha256(b"%PDF-1.4 lab result", &recorded));
    }
}
