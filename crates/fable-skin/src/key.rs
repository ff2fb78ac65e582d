//! Reversible skin-name key encoding.
//!
//! Registry keys are derived deterministically from the skin name, so
//! uploading the same name again overwrites the same record. URL-safe
//! base64 without padding keeps keys usable as element ids and file
//! names.

use base64::Engine as _;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;

/// Encode a skin name into its registry key.
pub fn encode_key(name: &str) -> String {
    URL_SAFE_NO_PAD.encode(name.as_bytes())
}

/// Decode a registry key back into the skin name it was derived from.
///
/// Returns `None` for keys that are not valid base64 or do not decode
/// to UTF-8.
pub fn decode_key(key: &str) -> Option<String> {
    let bytes = URL_SAFE_NO_PAD.decode(key).ok()?;
    String::from_utf8(bytes).ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn encoding_is_deterministic() {
        assert_eq!(encode_key("Dark"), encode_key("Dark"));
        assert_ne!(encode_key("Dark"), encode_key("Light"));
    }

    #[test]
    fn round_trips() {
        for name in ["Dark", "My Skin 2", "\u{00e9}t\u{00e9}", "a"] {
            let key = encode_key(name);
            assert_eq!(decode_key(&key).as_deref(), Some(name));
        }
    }

    #[test]
    fn keys_are_url_safe() {
        let key = encode_key("skin with spaces / and symbols?");
        assert!(
            key.chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
        );
    }

    #[test]
    fn garbage_key_decodes_to_none() {
        assert!(decode_key("!!!not base64!!!").is_none());
    }

    mod prop {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn encode_decode_round_trips(name in ".{1,64}") {
                let key = encode_key(&name);
                prop_assert_eq!(decode_key(&key), Some(name));
            }
        }
    }
}
