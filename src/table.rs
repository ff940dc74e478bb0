use std::collections::{ HashMap, HashSet };
use tracing::warn;

use crate::error::NormalizeError;
use crate::extract::digits_only;
use crate::logging::{ generate_correlation_id, LogLevel, OperationTimer, error_codes };

/// Countries and territories sharing dialing code "1" (canonical keys only;
/// spelling variants are folded by [`canonical_country_key`] first).
const NANP_MEMBERS: &[&str] = &[
    "united states",
    "canada",
    "antigua and barbuda",
    "bahamas",
    "barbados",
    "cuba",
    "dominica",
    "dominican republic",
    "grenada",
    "haiti",
    "jamaica",
    "saint kitts and nevis",
    "saint lucia",
    "saint vincent and the grenadines",
    "trinidad and tobago",
];

/// Spelling variants folded to one canonical key before any lookup.
const COUNTRY_ALIASES: &[(&str, &str)] = &[
    ("uk", "united kingdom"),
    ("gb", "united kingdom"),
    ("u.k.", "united kingdom"),
    ("u.k", "united kingdom"),
    ("unitedkingdom", "united kingdom"),
    ("great britain", "united kingdom"),
    ("us", "united states"),
    ("usa", "united states"),
    ("u.s.", "united states"),
    ("u.s.a.", "united states"),
    ("united states of america", "united states"),
    ("the bahamas", "bahamas"),
    ("st kitts and nevis", "saint kitts and nevis"),
    ("st lucia", "saint lucia"),
    ("st vincent and the grenadines", "saint vincent and the grenadines"),
];

/// Trim, lowercase, and fold known aliases. Applied at every lookup site so
/// the resolver, the NANP branch, and the display formatter all see the same
/// keys.
pub fn canonical_country_key(raw: &str) -> String {
    let folded = raw.trim().to_lowercase();
    for (alias, canonical) in COUNTRY_ALIASES {
        if folded == *alias {
            return (*canonical).to_string();
        }
    }
    folded
}

pub fn is_nanp_member(country_key: &str) -> bool {
    NANP_MEMBERS.contains(&country_key)
}

/// Expected national-number digit count per country. Used only as a post-hoc
/// completeness check, never for correction.
pub fn expected_national_length(country_key: &str) -> Option<usize> {
    if is_nanp_member(country_key) {
        return Some(10);
    }
    match country_key {
        "united kingdom" | "mexico" | "india" | "brazil" => Some(10),
        "australia" => Some(9),
        "new zealand" => Some(8),
        _ => None,
    }
}

/// Merged country → dialing code lookup. Built once through the builder and
/// read-only afterwards, so it can be shared across threads without locking.
#[derive(Debug, Clone)]
pub struct DialingCodeTable {
    country_to_code: HashMap<String, String>,
    known_codes: Vec<String>,
}

impl DialingCodeTable {
    pub fn builder() -> DialingCodeTableBuilder {
        DialingCodeTableBuilder::default()
    }

    /// Resolve a country name to its dialing code.
    pub fn resolve(&self, country_name: &str) -> Result<&str, NormalizeError> {
        let key = canonical_country_key(country_name);
        match self.country_to_code.get(&key) {
            Some(code) => Ok(code.as_str()),
            None => Err(NormalizeError::UnknownCountry { country: key }),
        }
    }

    /// Every distinct dialing code across both sources, longest first, so
    /// prefix matching never lets "1" shadow "44" or "91".
    pub fn known_codes(&self) -> &[String] {
        &self.known_codes
    }

    pub fn len(&self) -> usize {
        self.country_to_code.len()
    }

    pub fn is_empty(&self) -> bool {
        self.country_to_code.is_empty()
    }
}

/// Assembles the merged lookup from the internal (authoritative) and
/// external (supplementary) sources. Internal entries win on key collision.
#[derive(Debug, Default)]
pub struct DialingCodeTableBuilder {
    internal: Vec<(String, String)>,
    external: Vec<(String, String)>,
}

impl DialingCodeTableBuilder {
    pub fn internal<I, K, V>(mut self, entries: I) -> Self
        where I: IntoIterator<Item = (K, V)>, K: Into<String>, V: Into<String>
    {
        self.internal.extend(entries.into_iter().map(|(k, v)| (k.into(), v.into())));
        self
    }

    pub fn external<I, K, V>(mut self, entries: I) -> Self
        where I: IntoIterator<Item = (K, V)>, K: Into<String>, V: Into<String>
    {
        self.external.extend(entries.into_iter().map(|(k, v)| (k.into(), v.into())));
        self
    }

    pub fn build(self) -> DialingCodeTable {
        let req_id = generate_correlation_id();
        let timer = OperationTimer::new("TABLE:build", &req_id);

        let mut country_to_code: HashMap<String, String> = HashMap::new();
        let mut codes: HashSet<String> = HashSet::new();

        // External first so internal entries overwrite on key collision.
        for (source, entries) in [("external", &self.external), ("internal", &self.internal)] {
            for (name, code) in entries {
                let clean = digits_only(code);
                if clean.is_empty() {
                    warn!(
                        "TABLE:build [{}] [req_id:{}] Dropping '{}' from the {} source: dialing code '{}' has no digits",
                        error_codes::VAL_INVALID_FORMAT,
                        req_id,
                        name,
                        source,
                        code
                    );
                    continue;
                }
                codes.insert(clean.clone());
                country_to_code.insert(canonical_country_key(name), clean);
            }
        }

        let mut known_codes: Vec<String> = codes.into_iter().collect();
        known_codes.sort_by(|a, b| b.len().cmp(&a.len()).then_with(|| a.cmp(b)));

        timer.log_completion(
            LogLevel::Info,
            "SUCCESS",
            &format!(
                "Built dialing code table with {} countries and {} distinct codes",
                country_to_code.len(),
                known_codes.len()
            )
        );

        DialingCodeTable { country_to_code, known_codes }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table() -> DialingCodeTable {
        DialingCodeTable::builder()
            .internal([
                ("United States", "1"),
                ("Canada", "1"),
                ("Trinidad and Tobago", "1"),
                ("United Kingdom", "44"),
                ("India", "91"),
                ("Germany", "49"),
                ("Ireland", "353"),
            ])
            .external([
                ("Germany", "+999"), // must lose to the internal entry
                ("Mexico", "+52"),
                ("Narnia", "abc"), // no digits, dropped
            ])
            .build()
    }

    #[test]
    fn test_internal_wins_on_collision() {
        assert_eq!(table().resolve("Germany").unwrap(), "49");
    }

    #[test]
    fn test_external_fills_gaps_and_is_sanitized() {
        assert_eq!(table().resolve("Mexico").unwrap(), "52");
    }

    #[test]
    fn test_entries_without_digits_are_dropped() {
        assert!(matches!(
            table().resolve("Narnia"),
            Err(NormalizeError::UnknownCountry { .. })
        ));
    }

    #[test]
    fn test_alias_spellings_all_resolve_to_the_same_code() {
        let table = table();
        for spelling in ["uk", "GB", " U.K. ", "UnitedKingdom", "Great Britain", "united kingdom"] {
            assert_eq!(table.resolve(spelling).unwrap(), "44", "spelling: {spelling}");
        }
        for spelling in ["usa", "US", "U.S.A.", "United States of America"] {
            assert_eq!(table.resolve(spelling).unwrap(), "1", "spelling: {spelling}");
        }
    }

    #[test]
    fn test_unknown_country_is_an_error() {
        match table().resolve("Atlantis") {
            Err(NormalizeError::UnknownCountry { country }) => assert_eq!(country, "atlantis"),
            other => panic!("expected UnknownCountry, got {other:?}"),
        }
    }

    #[test]
    fn test_known_codes_sorted_longest_first() {
        let table = table();
        let codes: Vec<&str> = table.known_codes().iter().map(String::as_str).collect();
        assert_eq!(codes, vec!["353", "44", "49", "52", "91", "999", "1"]);
    }

    #[test]
    fn test_canonical_country_key_folding() {
        assert_eq!(canonical_country_key("  Trinidad AND Tobago "), "trinidad and tobago");
        assert_eq!(canonical_country_key("The Bahamas"), "bahamas");
        assert_eq!(canonical_country_key("St Lucia"), "saint lucia");
        assert_eq!(canonical_country_key("france"), "france");
    }

    #[test]
    fn test_nanp_membership_uses_canonical_keys() {
        assert!(is_nanp_member("united states"));
        assert!(is_nanp_member("jamaica"));
        assert!(is_nanp_member(&canonical_country_key("The Bahamas")));
        assert!(!is_nanp_member("united kingdom"));
    }

    #[test]
    fn test_expected_national_lengths() {
        assert_eq!(expected_national_length("united states"), Some(10));
        assert_eq!(expected_national_length("trinidad and tobago"), Some(10));
        assert_eq!(expected_national_length("australia"), Some(9));
        assert_eq!(expected_national_length("new zealand"), Some(8));
        assert_eq!(expected_national_length("germany"), None);
    }
}
