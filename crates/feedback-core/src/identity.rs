// Rust guideline compliant 2026-02-06

//! Hash-based identifiers for feedback records.

use crate::{Error, Result};
use sha2::{Digest, Sha256};

/// Prefix carried by every feedback ID.
pub const ID_PREFIX: &str = "fb-";

/// Number of hex characters after the prefix.
pub const ID_HEX_LEN: usize = 8;

/// Generates a feedback ID from the record contents.
///
/// # Arguments
///
/// * `name` - Submitter name
/// * `rating` - Star rating
/// * `comment` - Optional comment
/// * `timestamp` - Creation time in Unix milliseconds
/// * `nonce` - Collision counter, bumped by the caller until the ID is unused
///
/// # Returns
///
/// An ID of the form `fb-XXXXXXXX`.
pub fn generate_id(
    name: &str,
    rating: u8,
    comment: Option<&str>,
    timestamp: i64,
    nonce: u32,
) -> String {
    let mut hasher = Sha256::new();
    hasher.update(name.as_bytes());
    hasher.update([rating]);
    hasher.update(comment.unwrap_or_default().as_bytes());
    hasher.update(timestamp.to_le_bytes());
    hasher.update(nonce.to_le_bytes());

    let hash = hasher.finalize();
    let hex = format!("{:x}", hash);
    format!("{}{}", ID_PREFIX, &hex[..ID_HEX_LEN])
}

/// Generates an ID that does not collide with any in `taken`.
pub fn generate_unique_id<F>(
    name: &str,
    rating: u8,
    comment: Option<&str>,
    timestamp: i64,
    taken: F,
) -> String
where
    F: Fn(&str) -> bool,
{
    let mut nonce = 0u32;
    loop {
        let id = generate_id(name, rating, comment, timestamp, nonce);
        if !taken(&id) {
            return id;
        }
        nonce = nonce.wrapping_add(1);
    }
}

/// Validates the format of a feedback ID.
///
/// # Errors
///
/// Returns `Error::InvalidFeedback` unless the ID is `fb-` followed by
/// exactly eight lowercase hex characters.
pub fn validate_id_format(id: &str) -> Result<()> {
    let valid = id
        .strip_prefix(ID_PREFIX)
        .map(|hex| {
            hex.len() == ID_HEX_LEN
                && hex
                    .chars()
                    .all(|c| c.is_ascii_digit() || ('a'..='f').contains(&c))
        })
        .unwrap_or(false);

    if valid {
        Ok(())
    } else {
        Err(Error::InvalidFeedback(format!("Invalid ID format: {}", id)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generated_id_is_valid() {
        let id = generate_id("Ana", 5, Some("Great"), 1_700_000_000_000, 0);
        assert!(validate_id_format(&id).is_ok());
    }

    #[test]
    fn test_nonce_changes_id() {
        let a = generate_id("Ana", 5, None, 1, 0);
        let b = generate_id("Ana", 5, None, 1, 1);
        assert_ne!(a, b);
    }

    #[test]
    fn test_unique_id_skips_taken() {
        let first = generate_id("Ana", 5, None, 1, 0);
        let id = generate_unique_id("Ana", 5, None, 1, |candidate| candidate == first);
        assert_ne!(id, first);
    }

    #[test]
    fn test_rejects_bad_formats() {
        assert!(validate_id_format("fb-1234567").is_err());
        assert!(validate_id_format("fb-ABCDEF12").is_err());
        assert!(validate_id_format("prl-abcdef12").is_err());
        assert!(validate_id_format("").is_err());
    }
}
