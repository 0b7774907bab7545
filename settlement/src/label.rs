//! Shared text helpers for bet labels and result descriptions.
//!
//! Labels and descriptions are untyped strings from an external feed that
//! versions independently of us, so every parse here is fallible and
//! tolerant: lower-case comparison, collapsed whitespace, and scans instead
//! of fixed offsets.

/// Normalize a label or description segment: trim, lower-case, collapse
/// internal whitespace runs to single spaces.
pub fn normalize(text: &str) -> String {
    text.split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
        .to_lowercase()
}

/// Split a result description on the fixed `#` delimiter, normalizing each
/// segment. Segment position is semantically fixed per family; segment 0 is
/// the primary winner when present.
pub fn split_rdesc(rdesc: &str) -> Vec<String> {
    rdesc.split('#').map(normalize).collect()
}

/// Extract a numeric total from a parenthesized suffix, e.g.
/// `"Under 21(14)" -> 14`. The description length varies with the embedded
/// number's digit count, so this scans for the trailing `(digits)` group
/// rather than slicing at a fixed offset.
pub fn parenthesized_total(segment: &str) -> Option<i64> {
    let segment = segment.trim();
    let close = segment.rfind(')')?;
    let open = segment[..close].rfind('(')?;
    let digits = segment[open + 1..close].trim();
    if digits.is_empty() {
        return None;
    }
    digits.parse().ok()
}

/// Extract the trailing integer of a compound label, e.g. `"line 2" -> 2`,
/// `"total 14" -> 14`. Returns the label's head and the number. Labels that
/// are nothing but digits have no head and do not match.
pub fn trailing_number(label: &str) -> Option<(&str, i64)> {
    let label = label.trim_end();
    let digit_start = label
        .char_indices()
        .rev()
        .take_while(|(_, c)| c.is_ascii_digit())
        .last()?
        .0;
    if digit_start == 0 {
        return None;
    }
    let number = label[digit_start..].parse().ok()?;
    Some((label[..digit_start].trim_end(), number))
}

/// Strip a known prefix word (already-normalized input), returning the rest.
pub fn strip_prefix_word<'a>(label: &'a str, prefix: &str) -> Option<&'a str> {
    label.strip_prefix(prefix)?.strip_prefix(' ')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_collapses_whitespace() {
        assert_eq!(normalize("  Player   A "), "player a");
        assert_eq!(normalize("UNDER\t7"), "under 7");
        assert_eq!(normalize(""), "");
    }

    #[test]
    fn test_split_rdesc_positions() {
        let segments = split_rdesc("Player A#Pair Plus A#");
        assert_eq!(segments, vec!["player a", "pair plus a", ""]);
    }

    #[test]
    fn test_parenthesized_total_varying_digits() {
        assert_eq!(parenthesized_total("Under 21(4)"), Some(4));
        assert_eq!(parenthesized_total("Under 21(14)"), Some(14));
        assert_eq!(parenthesized_total("Team A(126)"), Some(126));
        assert_eq!(parenthesized_total("Player 10(19)"), Some(19));
    }

    #[test]
    fn test_parenthesized_total_absent() {
        assert_eq!(parenthesized_total("Under 21"), None);
        assert_eq!(parenthesized_total("()"), None);
        assert_eq!(parenthesized_total("(x)"), None);
    }

    #[test]
    fn test_trailing_number() {
        assert_eq!(trailing_number("line 2"), Some(("line", 2)));
        assert_eq!(trailing_number("total 14"), Some(("total", 14)));
        assert_eq!(trailing_number("single 0"), Some(("single", 0)));
        assert_eq!(trailing_number("red"), None);
        assert_eq!(trailing_number("7"), None);
    }

    #[test]
    fn test_strip_prefix_word() {
        assert_eq!(strip_prefix_word("dragon red", "dragon"), Some("red"));
        assert_eq!(strip_prefix_word("dragonred", "dragon"), None);
        assert_eq!(strip_prefix_word("tiger red", "dragon"), None);
    }
}
