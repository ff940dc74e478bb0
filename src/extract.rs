use regex::Regex;
use std::sync::OnceLock;

fn non_digit() -> &'static Regex {
    static NON_DIGIT: OnceLock<Regex> = OnceLock::new();
    NON_DIGIT.get_or_init(|| Regex::new(r"\D").expect("static pattern"))
}

/// Strip every non-digit character.
pub fn digits_only(raw: &str) -> String {
    non_digit().replace_all(raw, "").into_owned()
}

/// Digits of a raw number plus whether the input carried a leading "+".
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractedDigits {
    pub digits: String,
    pub had_plus_prefix: bool,
}

impl ExtractedDigits {
    /// No digit at all in the input; reported as a "Missing Number" row.
    pub fn is_missing(&self) -> bool {
        self.digits.is_empty()
    }
}

pub fn extract(raw_number: &str) -> ExtractedDigits {
    let trimmed = raw_number.trim();
    ExtractedDigits {
        digits: digits_only(trimmed),
        had_plus_prefix: trimmed.starts_with('+'),
    }
}
