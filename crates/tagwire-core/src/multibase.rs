//! Single-character-prefixed text encoding for binary payloads.
//!
//! The leading character selects the alphabet, so binary data survives
//! line-oriented text transport and the reader needs no out-of-band base
//! negotiation. The raw-binary sentinel (a null byte, no text encoding) is
//! not a base; it belongs to the stream driver's output layer.

use base64::engine::general_purpose::{STANDARD, STANDARD_NO_PAD, URL_SAFE, URL_SAFE_NO_PAD};
use base64::Engine;

use crate::error::CodecError;

/// A supported multibase alphabet.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Base {
    /// `f`: lowercase hexadecimal.
    HexLower,
    /// `F`: uppercase hexadecimal.
    HexUpper,
    /// `m`: base64, standard alphabet, no padding.
    Base64,
    /// `M`: base64, standard alphabet, with padding.
    Base64Pad,
    /// `u`: base64, URL-safe alphabet, no padding.
    Base64Url,
    /// `U`: base64, URL-safe alphabet, with padding.
    Base64UrlPad,
}

/// The base used when no explicit choice is made (`M`).
pub const DEFAULT_BASE: Base = Base::Base64Pad;

impl Base {
    /// Resolve a prefix character to its base.
    pub fn from_prefix(c: char) -> Result<Self, CodecError> {
        match c {
            'f' => Ok(Self::HexLower),
            'F' => Ok(Self::HexUpper),
            'm' => Ok(Self::Base64),
            'M' => Ok(Self::Base64Pad),
            'u' => Ok(Self::Base64Url),
            'U' => Ok(Self::Base64UrlPad),
            _ => Err(CodecError::InvalidBase(c)),
        }
    }

    /// The prefix character of this base.
    pub fn prefix(self) -> char {
        match self {
            Self::HexLower => 'f',
            Self::HexUpper => 'F',
            Self::Base64 => 'm',
            Self::Base64Pad => 'M',
            Self::Base64Url => 'u',
            Self::Base64UrlPad => 'U',
        }
    }
}

/// Wrap `bytes` in the prefixed text encoding of `base`.
pub fn encode(bytes: &[u8], base: Base) -> String {
    let mut text = String::with_capacity(1 + bytes.len() * 2);
    text.push(base.prefix());
    match base {
        Base::HexLower => text.push_str(&hex::encode(bytes)),
        Base::HexUpper => text.push_str(&hex::encode_upper(bytes)),
        Base::Base64 => text.push_str(&STANDARD_NO_PAD.encode(bytes)),
        Base::Base64Pad => text.push_str(&STANDARD.encode(bytes)),
        Base::Base64Url => text.push_str(&URL_SAFE_NO_PAD.encode(bytes)),
        Base::Base64UrlPad => text.push_str(&URL_SAFE.encode(bytes)),
    }
    text
}

/// Unwrap prefixed text back into bytes, selecting the alphabet from the
/// leading character.
pub fn decode(text: &str) -> Result<Vec<u8>, CodecError> {
    let mut chars = text.chars();
    let prefix = chars
        .next()
        .ok_or_else(|| CodecError::MalformedJson("empty multibase text".to_string()))?;
    let payload = chars.as_str();
    let base = Base::from_prefix(prefix)?;
    let invalid = |reason: String| CodecError::InvalidCharacter {
        base: prefix,
        reason,
    };
    match base {
        Base::HexLower | Base::HexUpper => {
            hex::decode(payload).map_err(|e| invalid(e.to_string()))
        }
        Base::Base64 => STANDARD_NO_PAD
            .decode(payload)
            .map_err(|e| invalid(e.to_string())),
        Base::Base64Pad => STANDARD.decode(payload).map_err(|e| invalid(e.to_string())),
        Base::Base64Url => URL_SAFE_NO_PAD
            .decode(payload)
            .map_err(|e| invalid(e.to_string())),
        Base::Base64UrlPad => URL_SAFE.decode(payload).map_err(|e| invalid(e.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL_BASES: [Base; 6] = [
        Base::HexLower,
        Base::HexUpper,
        Base::Base64,
        Base::Base64Pad,
        Base::Base64Url,
        Base::Base64UrlPad,
    ];

    #[test]
    fn test_prefix_roundtrip() {
        for base in ALL_BASES {
            assert_eq!(Base::from_prefix(base.prefix()).unwrap(), base);
        }
    }

    #[test]
    fn test_encode_known_forms() {
        let bytes = [0x01, 0x02, 0x03];
        assert_eq!(encode(&bytes, Base::HexLower), "f010203");
        assert_eq!(encode(&bytes, Base::Base64Pad), "MAQID");
        assert_eq!(encode(&[0xde, 0xad, 0xbe, 0xef], Base::Base64Pad), "M3q2+7w==");
        assert_eq!(encode(&[0xde, 0xad, 0xbe, 0xef], Base::Base64Url), "u3q2-7w");
        assert_eq!(encode(&[0xde, 0xad, 0xbe, 0xef], Base::HexUpper), "FDEADBEEF");
    }

    #[test]
    fn test_roundtrip_all_bases() {
        let samples: [&[u8]; 4] = [b"", b"\x00", b"hello", &[0xff, 0x00, 0x80, 0x7f, 0x01]];
        for base in ALL_BASES {
            for bytes in samples {
                let text = encode(bytes, base);
                assert_eq!(text.chars().next().unwrap(), base.prefix());
                assert_eq!(decode(&text).unwrap(), bytes, "base {:?}", base);
            }
        }
    }

    #[test]
    fn test_unknown_prefix() {
        assert!(matches!(
            decode("zAQID"),
            Err(CodecError::InvalidBase('z'))
        ));
        assert!(matches!(
            Base::from_prefix('\0'),
            Err(CodecError::InvalidBase('\0'))
        ));
    }

    #[test]
    fn test_invalid_characters() {
        assert!(matches!(
            decode("fzz"),
            Err(CodecError::InvalidCharacter { base: 'f', .. })
        ));
        assert!(matches!(
            decode("M!!!!"),
            Err(CodecError::InvalidCharacter { base: 'M', .. })
        ));
    }

    #[test]
    fn test_empty_text() {
        assert!(matches!(decode(""), Err(CodecError::MalformedJson(_))));
    }
}
