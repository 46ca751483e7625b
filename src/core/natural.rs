/// One segment of an alphanumeric sort key. Variant order matters: `Number`
/// sorts before `Text` when two keys diverge in kind at the same position,
/// which yields "9" < "12" < "12A" < "101".
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub enum SortToken {
    Number(u64),
    Text(String),
}

/// Splits an identifier into maximal runs of digits and non-digits, in order
/// of appearance. Digit runs compare by integer value, non-digit runs
/// case-insensitively. Usable directly as a `sort_by_key` extractor.
pub fn sort_key(value: &str) -> Vec<SortToken> {
    let mut key = Vec::new();
    let mut rest = value;

    while !rest.is_empty() {
        let digits = rest.starts_with(|c: char| c.is_ascii_digit());
        let run_end = rest
            .find(|c: char| c.is_ascii_digit() != digits)
            .unwrap_or(rest.len());
        let (run, tail) = rest.split_at(run_end);

        if digits {
            // Runs longer than u64 clamp instead of panicking; detachment
            // numbers never get near that length.
            key.push(SortToken::Number(run.parse().unwrap_or(u64::MAX)));
        } else {
            key.push(SortToken::Text(run.to_lowercase()));
        }
        rest = tail;
    }

    key
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_numeric_aware_ordering() {
        let mut numbers = vec!["101", "12A", "9", "12"];
        numbers.sort_by_key(|n| sort_key(n));
        assert_eq!(numbers, vec!["9", "12", "12A", "101"]);
    }

    #[test]
    fn test_plain_prefix_sorts_before_suffixed() {
        assert!(sort_key("12") < sort_key("12A"));
        assert!(sort_key("12A") < sort_key("13"));
    }

    #[test]
    fn test_case_insensitive_text_runs() {
        assert_eq!(sort_key("12a"), sort_key("12A"));
    }

    #[test]
    fn test_number_sorts_before_text_at_tied_position() {
        // "HQ1" vs "1HQ": first tokens differ in kind, numeric wins.
        assert!(sort_key("1HQ") < sort_key("HQ1"));
    }

    #[test]
    fn test_empty_identifier_yields_empty_key() {
        assert!(sort_key("").is_empty());
    }

    #[test]
    fn test_mixed_runs_preserve_order() {
        assert_eq!(
            sort_key("12A"),
            vec![SortToken::Number(12), SortToken::Text("a".to_string())]
        );
    }
}
