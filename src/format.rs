use crate::extract::digits_only;
use crate::table::is_nanp_member;

/// Slice clamped to the string length so short inputs render without
/// panicking; empty groups stay in the output.
fn seg(s: &str, start: usize, end: usize) -> &str {
    let len = s.len();
    &s[start.min(len)..end.min(len)]
}

fn tail(s: &str, start: usize) -> &str {
    &s[start.min(s.len())..]
}

fn strip_code<'a>(digits: &'a str, code: &str) -> &'a str {
    digits.strip_prefix(code).unwrap_or(digits)
}

/// Render an already code-correct number into the per-country display
/// layout. Inserts separators only; which digits are present never changes.
/// Countries without an entry pass through unchanged.
pub fn format_by_country(e164: &str, country_key: &str) -> String {
    let digits = digits_only(e164);
    if digits.is_empty() {
        return e164.to_string();
    }

    if is_nanp_member(country_key) {
        let national = tail(&digits, digits.len().saturating_sub(10));
        return format!(
            "+1-({})-{}-{}",
            seg(national, 0, 3),
            seg(national, 3, 6),
            tail(national, 6)
        );
    }

    match country_key {
        "united kingdom" => {
            let n = strip_code(&digits, "44");
            format!("+44-{}-{}-{}", seg(n, 0, 4), seg(n, 4, 7), tail(n, 7))
        }
        "mexico" => {
            let n = strip_code(&digits, "52");
            format!("+52-{}-{}-{}", seg(n, 0, 3), seg(n, 3, 6), tail(n, 6))
        }
        "australia" => {
            let n = strip_code(&digits, "61");
            format!("+61-{}-{}-{}", seg(n, 0, 1), seg(n, 1, 5), tail(n, 5))
        }
        "new zealand" => {
            let n = strip_code(&digits, "64");
            format!("+64-{}-{}-{}", seg(n, 0, 1), seg(n, 1, 4), tail(n, 4))
        }
        "india" => {
            let n = strip_code(&digits, "91");
            if n.len() >= 10 {
                format!("+91-{}-{}", seg(n, 0, 2), tail(n, 2))
            } else {
                format!("+91-{n}")
            }
        }
        "brazil" => {
            let n = strip_code(&digits, "55");
            format!("+55-{}-{}-{}", seg(n, 0, 2), seg(n, 2, 6), tail(n, 6))
        }
        _ => e164.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nanp_renders_last_ten_digits() {
        assert_eq!(format_by_country("+16502530000", "united states"), "+1-(650)-253-0000");
        assert_eq!(format_by_country("+16135550123", "canada"), "+1-(613)-555-0123");
        assert_eq!(
            format_by_country("+18681234567", "trinidad and tobago"),
            "+1-(868)-123-4567"
        );
    }

    #[test]
    fn test_united_kingdom_grouping() {
        assert_eq!(format_by_country("+447911123456", "united kingdom"), "+44-7911-123-456");
    }

    #[test]
    fn test_mexico_grouping() {
        assert_eq!(format_by_country("+525512345678", "mexico"), "+52-551-234-5678");
    }

    #[test]
    fn test_india_grouping() {
        assert_eq!(format_by_country("+915551234567", "india"), "+91-55-51234567");
        // Short national numbers skip the STD split.
        assert_eq!(format_by_country("+9155512", "india"), "+91-55512");
    }

    #[test]
    fn test_brazil_grouping() {
        assert_eq!(format_by_country("+5511912345678", "brazil"), "+55-11-9123-45678");
    }

    #[test]
    fn test_australia_grouping() {
        assert_eq!(format_by_country("+61412345678", "australia"), "+61-4-1234-5678");
    }

    #[test]
    fn test_new_zealand_grouping() {
        assert_eq!(format_by_country("+64211234567", "new zealand"), "+64-2-112-34567");
    }

    #[test]
    fn test_unlisted_country_passes_through() {
        assert_eq!(format_by_country("+4915123456789", "germany"), "+4915123456789");
    }

    #[test]
    fn test_short_input_renders_without_panicking() {
        assert_eq!(format_by_country("+4479", "united kingdom"), "+44-79--");
    }

    #[test]
    fn test_no_digits_passes_through() {
        assert_eq!(format_by_country("n/a", "united kingdom"), "n/a");
    }

    #[test]
    fn test_rendering_is_idempotent_for_nanp() {
        let once = format_by_country("+16502530000", "united states");
        assert_eq!(format_by_country(&once, "united states"), once);
    }
}
