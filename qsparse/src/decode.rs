// -*- coding: utf-8 -*-
// Copyright (C) 2025 Michael Büsch <m@bues.ch>
// SPDX-License-Identifier: Apache-2.0 OR MIT

use crate::errors::DecodeError;
use memchr::{memchr, memchr_iter};
use std::borrow::Cow;

/// Check that every `%` in `data` starts a complete `%XX` escape.
fn check_escapes(data: &[u8]) -> Result<(), DecodeError> {
    for pos in memchr_iter(b'%', data) {
        let Some(hex) = data.get(pos + 1..pos + 3) else {
            return Err(DecodeError::MalformedEscape { pos });
        };
        if !hex.iter().all(u8::is_ascii_hexdigit) {
            return Err(DecodeError::MalformedEscape { pos });
        }
    }
    Ok(())
}

/// Decode a percent-encoded URI component.
///
/// All `%XX` escapes are decoded, including the ones for reserved characters.
/// A `+` is not a space here. That is form decoding, not component decoding.
///
/// Fails, if an escape is truncated or not hexadecimal,
/// or if the decoded bytes do not form valid UTF-8.
pub fn decode_uri_component(s: &str) -> Result<String, DecodeError> {
    if memchr(b'%', s.as_bytes()).is_none() {
        return Ok(s.to_string());
    }
    check_escapes(s.as_bytes())?;
    urlencoding::decode(s)
        .map(Cow::into_owned)
        .map_err(|_| DecodeError::InvalidUtf8)
}

/// Decode an optional URI component. An absent component stays absent.
pub fn decode_uri_component_opt(s: Option<&str>) -> Result<Option<String>, DecodeError> {
    s.map(decode_uri_component).transpose()
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_plain() {
        assert_eq!(decode_uri_component("").unwrap(), "");
        assert_eq!(decode_uri_component("abc").unwrap(), "abc");
        assert_eq!(decode_uri_component("a+b").unwrap(), "a+b");
        assert_eq!(decode_uri_component("äöü").unwrap(), "äöü");
    }

    #[test]
    fn test_escapes() {
        assert_eq!(decode_uri_component("key%20with%20space").unwrap(), "key with space");
        assert_eq!(decode_uri_component("val%2Fue").unwrap(), "val/ue");
        assert_eq!(decode_uri_component("%3D%26%3F%23").unwrap(), "=&?#");
        assert_eq!(decode_uri_component("%2B").unwrap(), "+");
        assert_eq!(decode_uri_component("%C3%A9").unwrap(), "é");
        assert_eq!(decode_uri_component("%c3%a9").unwrap(), "é");
        assert_eq!(decode_uri_component("%E2%82%AC").unwrap(), "€");
        assert_eq!(decode_uri_component("%25").unwrap(), "%");
        assert_eq!(decode_uri_component("%2541").unwrap(), "%41");
    }

    #[test]
    fn test_malformed() {
        assert_eq!(
            decode_uri_component("%"),
            Err(DecodeError::MalformedEscape { pos: 0 })
        );
        assert_eq!(
            decode_uri_component("ab%4"),
            Err(DecodeError::MalformedEscape { pos: 2 })
        );
        assert_eq!(
            decode_uri_component("%zz"),
            Err(DecodeError::MalformedEscape { pos: 0 })
        );
        assert_eq!(
            decode_uri_component("%41%"),
            Err(DecodeError::MalformedEscape { pos: 3 })
        );
        assert_eq!(
            decode_uri_component("%%41"),
            Err(DecodeError::MalformedEscape { pos: 0 })
        );
    }

    #[test]
    fn test_invalid_utf8() {
        assert_eq!(decode_uri_component("%FF"), Err(DecodeError::InvalidUtf8));
        assert_eq!(decode_uri_component("%C3"), Err(DecodeError::InvalidUtf8));
        assert_eq!(decode_uri_component("%C3x"), Err(DecodeError::InvalidUtf8));
        assert_eq!(decode_uri_component("%A9"), Err(DecodeError::InvalidUtf8));
        // Encoded UTF-16 surrogate.
        assert_eq!(decode_uri_component("%ED%A0%80"), Err(DecodeError::InvalidUtf8));
    }

    #[test]
    fn test_opt() {
        assert_eq!(decode_uri_component_opt(None).unwrap(), None);
        assert_eq!(
            decode_uri_component_opt(Some("a%20b")).unwrap(),
            Some("a b".to_string())
        );
        assert!(decode_uri_component_opt(Some("%")).is_err());
    }
}

// vim: ts=4 sw=4 expandtab
