//! Token-level checks and decoding for link components.

use percent_encoding::percent_decode_str;

/// Returns true if `s` is a non-empty base64url string (`A-Z a-z 0-9 - _`).
///
/// Node handles, user handles, chat ids, decryption keys and account tokens
/// all use this alphabet; anything else in their position means the link is
/// malformed.
pub fn is_base64url(s: &str) -> bool {
    !s.is_empty()
        && s.bytes()
            .all(|b| b.is_ascii_alphanumeric() || b == b'-' || b == b'_')
}

/// Returns `Some(s)` when `s` passes [`is_base64url`].
pub fn base64url(s: &str) -> Option<String> {
    is_base64url(s).then(|| s.to_string())
}

/// Strips an ASCII keyword prefix case-insensitively.
pub fn strip_keyword<'a>(s: &'a str, keyword: &str) -> Option<&'a str> {
    let head = s.get(..keyword.len())?;
    if head.eq_ignore_ascii_case(keyword) {
        Some(&s[keyword.len()..])
    } else {
        None
    }
}

/// Percent-decodes a path segment. Malformed escapes are kept literally and
/// invalid UTF-8 is replaced.
pub fn percent_decode(input: &str) -> String {
    percent_decode_str(input).decode_utf8_lossy().into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn base64url_alphabet() {
        assert!(is_base64url("AbC-_09z"));
        assert!(!is_base64url(""));
        assert!(!is_base64url("abc!def"));
        assert!(!is_base64url("abc/def"));
        assert!(!is_base64url("abc="));
    }

    #[test]
    fn keyword_is_case_insensitive() {
        assert_eq!(strip_keyword("confirmABC", "confirm"), Some("ABC"));
        assert_eq!(strip_keyword("CONFIRMabc", "confirm"), Some("abc"));
        assert_eq!(strip_keyword("conf", "confirm"), None);
        assert_eq!(strip_keyword("recover", "confirm"), None);
    }

    #[test]
    fn keyword_on_multibyte_input_does_not_panic() {
        assert_eq!(strip_keyword("cönfirm", "confirm"), None);
    }

    #[test]
    fn percent_decode_utf8_and_spaces() {
        assert_eq!(percent_decode("My%20Docs"), "My Docs");
        assert_eq!(percent_decode("caf%C3%A9.txt"), "café.txt");
    }

    #[test]
    fn percent_decode_keeps_malformed_escapes() {
        assert_eq!(percent_decode("100%"), "100%");
        assert_eq!(percent_decode("a%zzb"), "a%zzb");
        assert_eq!(percent_decode("bad%FFbyte"), "bad\u{FFFD}byte");
    }
}
