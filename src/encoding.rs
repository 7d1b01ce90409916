//! Identity Encoding
//!
//! The respondent email travels in URLs and request bodies as standard
//! base64. This is transport framing only, not a security mechanism.

use base64::{engine::general_purpose::STANDARD, Engine as _};

/// Encode an identity for URL/transport use
pub fn encode_identity(identity: &str) -> String {
    STANDARD.encode(identity.as_bytes())
}

/// Decode an identity received from a URL parameter
pub fn decode_identity(encoded: &str) -> Result<String, String> {
    let bytes = STANDARD
        .decode(encoded)
        .map_err(|e| format!("Failed to decode base64: {}", e))?;
    String::from_utf8(bytes).map_err(|e| format!("Decoded email is not UTF-8: {}", e))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode_decode_round_trip() {
        for identity in ["alice@example.com", "a", "jürgen@umlaut.de", "x+y@plus.org"] {
            let encoded = encode_identity(identity);
            assert_eq!(decode_identity(&encoded).unwrap(), identity);
        }
    }

    #[test]
    fn test_encode_matches_btoa() {
        // btoa("alice@example.com") in the browser
        assert_eq!(encode_identity("alice@example.com"), "YWxpY2VAZXhhbXBsZS5jb20=");
    }

    #[test]
    fn test_decode_rejects_garbage() {
        assert!(decode_identity("not base64!!").is_err());
        assert!(decode_identity("/w==").is_err()); // valid base64, invalid UTF-8
    }
}
