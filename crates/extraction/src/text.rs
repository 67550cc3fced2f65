//! Plain-text decoding
//!
//! Uploaded .txt payloads are decoded as UTF-8 with undecodable byte
//! sequences dropped outright. No replacement character is inserted and
//! no error is raised; malformed input silently loses the bad bytes.

/// Decode bytes as UTF-8, skipping invalid sequences.
pub fn decode_lossy(bytes: &[u8]) -> String {
    let mut out = String::with_capacity(bytes.len());
    let mut rest = bytes;

    loop {
        match std::str::from_utf8(rest) {
            Ok(valid) => {
                out.push_str(valid);
                break;
            }
            Err(err) => {
                let (valid, after) = rest.split_at(err.valid_up_to());
                if let Ok(s) = std::str::from_utf8(valid) {
                    out.push_str(s);
                }
                match err.error_len() {
                    Some(len) => rest = &after[len..],
                    // Truncated sequence at end of input
                    None => break,
                }
            }
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_utf8_round_trips() {
        let input = "Quarterly report: revenue up 12%.\nSigned, Fran\u{e7}ois";
        assert_eq!(decode_lossy(input.as_bytes()), input);
    }

    #[test]
    fn test_invalid_bytes_are_dropped() {
        let bytes = b"ab\xFF\xFEcd";
        assert_eq!(decode_lossy(bytes), "abcd");
    }

    #[test]
    fn test_truncated_sequence_at_end_is_dropped() {
        // 0xC3 starts a two-byte sequence that never completes
        let bytes = b"hello\xC3";
        assert_eq!(decode_lossy(bytes), "hello");
    }

    #[test]
    fn test_invalid_run_between_valid_text() {
        // Continuation bytes with no lead byte, then valid text again
        let bytes = b"start\x80\x80\x80middle\xF0\x28\x8C\x28end";
        let decoded = decode_lossy(bytes);
        assert!(decoded.starts_with("start"));
        assert!(decoded.contains("middle"));
        assert!(decoded.ends_with("end"));
        assert!(!decoded.contains('\u{FFFD}'));
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(decode_lossy(b""), "");
    }
}
