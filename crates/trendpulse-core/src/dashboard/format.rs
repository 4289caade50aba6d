//! Display formatting helpers

/// Longest post body shown before truncation
pub const CONTENT_PREVIEW_CHARS: usize = 150;

/// Values at or above this round to at least `1.0M`
const MILLION_CUTOFF: u64 = 999_950;

/// Compact count with a K/M suffix: `45600 → 45.6K`
pub fn format_compact(n: u64) -> String {
    if n >= MILLION_CUTOFF {
        format!("{:.1}M", n as f64 / 1_000_000.0)
    } else if n >= 1_000 {
        format!("{:.1}K", n as f64 / 1_000.0)
    } else {
        n.to_string()
    }
}

/// Integer with thousands separators: `12500 → 12,500`
pub fn format_grouped(n: u64) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// Percentage with at most one decimal, trailing zero dropped: `7.40 → 7.4%`, `32.0 → 32%`
pub fn format_percent(value: f64) -> String {
    let rounded = (value * 10.0).round() / 10.0;
    if rounded.fract() == 0.0 {
        format!("{rounded:.0}%")
    } else {
        format!("{rounded:.1}%")
    }
}

/// Cut `s` to `max_chars` characters, appending `...` when shortened
pub fn truncate(s: &str, max_chars: usize) -> String {
    match s.char_indices().nth(max_chars) {
        Some((idx, _)) => format!("{}...", &s[..idx]),
        None => s.to_string(),
    }
}

/// Upper-case the first character
pub fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(0, "0")]
    #[case(999, "999")]
    #[case(2_400, "2.4K")]
    #[case(45_600, "45.6K")]
    #[case(999_949, "999.9K")]
    #[case(999_950, "1.0M")]
    #[case(999_999, "1.0M")]
    #[case(2_345_678, "2.3M")]
    fn compact(#[case] n: u64, #[case] expected: &str) {
        assert_eq!(format_compact(n), expected);
    }

    #[rstest]
    #[case(0, "0")]
    #[case(999, "999")]
    #[case(1_000, "1,000")]
    #[case(12_500, "12,500")]
    #[case(1_234_567, "1,234,567")]
    fn grouped(#[case] n: u64, #[case] expected: &str) {
        assert_eq!(format_grouped(n), expected);
    }

    #[rstest]
    #[case(7.4, "7.4%")]
    #[case(7.42, "7.4%")]
    #[case(32.0, "32%")]
    #[case(5.6, "5.6%")]
    fn percent(#[case] value: f64, #[case] expected: &str) {
        assert_eq!(format_percent(value), expected);
    }

    #[test]
    fn truncate_short_text_untouched() {
        assert_eq!(truncate("hello", 150), "hello");
    }

    #[test]
    fn truncate_is_char_safe() {
        let text = "🌱✨ Sustainable technology";
        assert_eq!(truncate(text, 2), "🌱✨...");
    }

    #[test]
    fn truncate_at_exact_length_keeps_text() {
        let text = "a".repeat(CONTENT_PREVIEW_CHARS);
        assert_eq!(truncate(&text, CONTENT_PREVIEW_CHARS), text);
        let longer = "a".repeat(CONTENT_PREVIEW_CHARS + 1);
        assert_eq!(
            truncate(&longer, CONTENT_PREVIEW_CHARS),
            format!("{text}...")
        );
    }

    #[test]
    fn capitalize_platform_keys() {
        assert_eq!(capitalize("linkedin"), "Linkedin");
        assert_eq!(capitalize(""), "");
    }
}
