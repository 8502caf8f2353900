//! Composite key construction
//!
//! Converters are addressed by `<fromId>To<ToId>` where only the first
//! letter of the destination id is upper-cased. The lookup also accepts a
//! few historical spellings, tried in a fixed order.

/// Upper-case the first character, leave the rest untouched
pub fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Canonical key: `binary` + `decimal` -> `binaryToDecimal`
pub fn composite_key(from: &str, to: &str) -> String {
    format!("{}To{}", from, capitalize(to))
}

/// Keys tried by the dispatcher, in order, without duplicates:
/// `fromToTo`, `FromTofrom`, `FromToTo`, then `fromTo` with no separator.
pub fn candidate_keys(from: &str, to: &str) -> Vec<String> {
    let cap_from = capitalize(from);
    let cap_to = capitalize(to);

    let candidates = [
        composite_key(from, to),
        format!("{}To{}", cap_from, to),
        format!("{}To{}", cap_from, cap_to),
        format!("{}{}", from, cap_to),
    ];

    let mut keys: Vec<String> = Vec::with_capacity(candidates.len());
    for key in candidates {
        if !keys.contains(&key) {
            keys.push(key);
        }
    }
    keys
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_capitalize() {
        assert_eq!(capitalize("morse"), "Morse");
        assert_eq!(capitalize("Morse"), "Morse");
        assert_eq!(capitalize(""), "");
        assert_eq!(capitalize("éclair"), "Éclair");
    }

    #[test]
    fn test_composite_key() {
        assert_eq!(composite_key("text", "morse"), "textToMorse");
        assert_eq!(composite_key("hex", "decimal"), "hexToDecimal");
    }

    #[test]
    fn test_candidate_order() {
        assert_eq!(
            candidate_keys("text", "braille"),
            vec!["textToBraille", "TextTobraille", "TextToBraille", "textBraille"]
        );
    }

    #[test]
    fn test_candidates_deduplicated() {
        // Already-capitalized ids collapse several spellings into one
        let keys = candidate_keys("Text", "Morse");
        assert_eq!(keys, vec!["TextToMorse", "TextMorse"]);
    }
}
