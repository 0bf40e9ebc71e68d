use bytes::Bytes;

/// Concatenates `bodies` from the highest index down to the lowest.
///
/// The locator listed last contributes first. Invalid UTF-8 is replaced with
/// `U+FFFD`.
pub fn combine_reversed(bodies: &[Bytes]) -> String {
    let total = bodies.iter().map(Bytes::len).sum();
    let mut combined = Vec::with_capacity(total);
    for body in bodies.iter().rev() {
        combined.extend_from_slice(body);
    }
    match String::from_utf8(combined) {
        Ok(text) => text,
        Err(e) => String::from_utf8_lossy(e.as_bytes()).into_owned(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bodies(parts: &[&'static str]) -> Vec<Bytes> {
        parts.iter().map(|p| Bytes::from_static(p.as_bytes())).collect()
    }

    #[test]
    fn test_combine_reverses_order() {
        assert_eq!(combine_reversed(&bodies(&["a\n", "b\n", "c\n"])), "c\nb\na\n");
    }

    #[test]
    fn test_combine_empty() {
        assert_eq!(combine_reversed(&[]), "");
    }

    #[test]
    fn test_combine_keeps_empty_bodies() {
        assert_eq!(combine_reversed(&bodies(&["a", "", "c"])), "ca");
    }

    #[test]
    fn test_combine_multibyte_split_across_bodies() {
        // "é" is 0xC3 0xA9; reversed order joins the halves back together.
        let parts = vec![Bytes::from_static(&[0xA9]), Bytes::from_static(&[0xC3])];
        assert_eq!(combine_reversed(&parts), "é");
    }

    #[test]
    fn test_combine_invalid_utf8_is_replaced() {
        let parts = vec![Bytes::from_static(b"ok"), Bytes::from_static(&[0xFF])];
        assert_eq!(combine_reversed(&parts), "\u{FFFD}ok");
    }
}
