//! Skin hash handling
//!
//! Skins are addressed by the hex md5 of their archive bytes. Hashes arriving
//! from clients are trimmed and lowercased but never rejected: a string that is
//! not an md5 simply names no skin.

use std::sync::LazyLock;

use regex::Regex;

use crate::constants::MD5_HEX_LENGTH;

static MD5_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9a-f]{32}$").expect("md5 pattern is a valid regex"));

/// Check whether `candidate` is a lowercase 32 character hex string.
pub fn is_valid_md5(candidate: &str) -> bool {
    candidate.len() == MD5_HEX_LENGTH && MD5_PATTERN.is_match(candidate)
}

/// Canonical form of a client supplied hash.
pub fn normalize_md5(raw: &str) -> String {
    raw.trim().to_ascii_lowercase()
}

/// Normalize a batch of hashes, dropping the ones that cannot match any skin.
pub fn lookup_md5s(raw: &[String]) -> Vec<String> {
    raw.iter()
        .map(|md5| normalize_md5(md5))
        .filter(|md5| is_valid_md5(md5))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepts_lowercase_hex() {
        assert!(is_valid_md5("5e4f10275dcb2a4e4ea2a4dc1f4a3b5d"));
    }

    #[test]
    fn test_rejects_wrong_length_and_alphabet() {
        assert!(!is_valid_md5("deadbeef"));
        assert!(!is_valid_md5("zz4f10275dcb2a4e4ea2a4dc1f4a3b5d"));
        assert!(!is_valid_md5(""));
    }

    #[test]
    fn test_normalize_lowercases_and_trims() {
        assert_eq!(
            normalize_md5("  5E4F10275DCB2A4E4EA2A4DC1F4A3B5D "),
            "5e4f10275dcb2a4e4ea2a4dc1f4a3b5d"
        );
        assert_eq!(normalize_md5("DeadBeef"), "deadbeef");
    }

    #[test]
    fn test_lookup_md5s_drops_what_cannot_match() {
        let keys = lookup_md5s(&[
            "5E4F10275DCB2A4E4EA2A4DC1F4A3B5D".to_string(),
            "bbb".to_string(),
            "not a hash at all".to_string(),
        ]);
        assert_eq!(keys, vec!["5e4f10275dcb2a4e4ea2a4dc1f4a3b5d".to_string()]);
    }
}
