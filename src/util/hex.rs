//! Hex string helpers.
//!
//! The `wt dump -x` protocol emits every key and value as lowercase hex
//! text, one per line. These helpers turn that text back into bytes and
//! format bytes for display.

use crate::WtError;

/// Decode a hex string into bytes.
///
/// Accepts upper- and lowercase digits; rejects odd lengths and anything
/// outside `[0-9a-fA-F]`.
pub fn decode_hex(data: &str) -> Result<Vec<u8>, WtError> {
    hex::decode(data.trim()).map_err(|e| WtError::Decode(format!("invalid hex: {}", e)))
}

/// True if the string is non-empty, even-length hex.
pub fn is_hex(data: &str) -> bool {
    let data = data.trim();
    !data.is_empty() && data.len() % 2 == 0 && data.bytes().all(|b| b.is_ascii_hexdigit())
}

/// Format bytes as a compact lowercase hex string (e.g., "4a2f00ff").
pub fn format_bytes(data: &[u8]) -> String {
    hex::encode(data)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_hex() {
        assert_eq!(decode_hex("4a2f00ff").unwrap(), vec![0x4a, 0x2f, 0x00, 0xff]);
        assert_eq!(decode_hex("4A2F00FF").unwrap(), vec![0x4a, 0x2f, 0x00, 0xff]);
        assert_eq!(decode_hex("").unwrap(), Vec::<u8>::new());
        assert_eq!(decode_hex("  00  ").unwrap(), vec![0x00]);
    }

    #[test]
    fn test_decode_hex_rejects_bad_input() {
        assert!(decode_hex("abc").is_err()); // odd length
        assert!(decode_hex("zz").is_err());
    }

    #[test]
    fn test_is_hex() {
        assert!(is_hex("00ff"));
        assert!(is_hex(" 00ff "));
        assert!(!is_hex(""));
        assert!(!is_hex("0"));
        assert!(!is_hex("0g"));
    }

    #[test]
    fn test_format_bytes() {
        assert_eq!(format_bytes(&[0x4a, 0x2f, 0x00, 0xff]), "4a2f00ff");
        assert_eq!(format_bytes(&[]), "");
    }
}
