use crate::extract::digits_only;

/// Diff the original input against the corrected display string and name the
/// reason for the change. Check order matters; the first match wins.
pub fn classify_change(original: &str, corrected: &str) -> &'static str {
    let orig = original.trim();
    let corr = corrected.trim();

    if orig == corr {
        return "Unchanged";
    }
    if orig.contains("868") && corr.contains("(868)") {
        return "Removed duplicated 868 prefix + reformatted";
    }
    if corr.starts_with("+1-(") && !orig.starts_with("+1") {
        return "Added +1 + reformatted into NANP";
    }
    if corr.starts_with("+44") && !orig.starts_with("+44") {
        return "Added +44 + UK formatting";
    }
    if corr.starts_with("+91") && !orig.starts_with("+91") {
        return "Added +91 + India formatting";
    }
    if corr.starts_with("+52") && !orig.starts_with("+52") {
        return "Added +52 + Mexico formatting";
    }
    if corr.starts_with("+55") && !orig.starts_with("+55") {
        return "Added +55 + Brazil formatting";
    }

    let orig_digits = digits_only(orig);
    let corr_digits = digits_only(corr);
    if orig_digits == corr_digits {
        return "Formatting changed only";
    }
    if orig_digits.len() > corr_digits.len() {
        return "Trimmed extra digits";
    }
    "Changed digits"
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identical_strings_are_unchanged() {
        assert_eq!(classify_change("+1-(650)-253-0000", "+1-(650)-253-0000"), "Unchanged");
    }

    #[test]
    fn test_duplicated_prefix_repair_is_named() {
        assert_eq!(
            classify_change("18688681234567", "+1-(868)-123-4567"),
            "Removed duplicated 868 prefix + reformatted"
        );
    }

    #[test]
    fn test_added_nanp_prefix() {
        assert_eq!(
            classify_change("5551234567", "+1-(555)-123-4567"),
            "Added +1 + reformatted into NANP"
        );
    }

    #[test]
    fn test_added_country_prefixes() {
        assert_eq!(classify_change("7911123456", "+44-7911-123-456"), "Added +44 + UK formatting");
        assert_eq!(classify_change("5551234567", "+91-55-51234567"), "Added +91 + India formatting");
        assert_eq!(classify_change("5512345678", "+52-551-234-5678"), "Added +52 + Mexico formatting");
        assert_eq!(classify_change("1191234567", "+55-11-9123-4567"), "Added +55 + Brazil formatting");
    }

    #[test]
    fn test_formatting_changed_only() {
        assert_eq!(
            classify_change("+1 650 253 0000", "+1-(650)-253-0000"),
            "Formatting changed only"
        );
    }

    #[test]
    fn test_trimmed_extra_digits() {
        assert_eq!(
            classify_change("+1 650 253 0000 0", "+1-(650)-253-0000"),
            "Trimmed extra digits"
        );
    }

    #[test]
    fn test_changed_digits_is_the_fallback() {
        assert_eq!(classify_change("+49 89 1234", "+49 89 5678"), "Changed digits");
    }
}
