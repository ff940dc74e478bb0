use phonenumber::{ country, Mode };
use tracing::debug;

use crate::models::Verification;

/// Corrected E.164-style candidate plus the label describing how it was
/// produced. Display punctuation is applied later by the formatter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NanpOutcome {
    pub e164: String,
    pub verification: Verification,
}

/// Normalize a number for a country sharing dialing code "1".
///
/// Repair strategies run in order and the first success wins. Returns `None`
/// when fewer than ten digits remain after every repair; fabricating digits
/// is refused and the row becomes a "Missing Number".
pub fn normalize_nanp(
    raw_number: &str,
    digits: &str,
    had_plus_prefix: bool,
    country_key: &str
) -> Option<NanpOutcome> {
    repair_duplicated_prefix(country_key, digits)
        .or_else(|| parse_with_region_hint(raw_number, digits, had_plus_prefix))
        .or_else(|| repair_idd_escape(digits))
        .or_else(|| force_last_ten(digits))
}

/// Trinidad & Tobago numbers sometimes arrive with the 868 destination code
/// keyed twice ("1868868…"). The last seven digits are the subscriber number.
fn repair_duplicated_prefix(country_key: &str, digits: &str) -> Option<NanpOutcome> {
    if country_key != "trinidad and tobago" || !digits.starts_with("1868868") || digits.len() <= 11 {
        return None;
    }
    let local = &digits[digits.len() - 7..];
    debug!("NORMALIZE:nanp duplicated 868 prefix repaired, subscriber number {local}");
    Some(NanpOutcome {
        e164: format!("+1868{local}"),
        verification: Verification::ValidAndMatched,
    })
}

/// Parse a candidate against region hint US and return the E.164 string when
/// it lands in country code 1. NANP national numbers are ten digits, so a
/// well-shaped parse is accepted even when the metadata flags the block as
/// unassigned.
fn try_parse_us(candidate: &str) -> Option<String> {
    let parsed = phonenumber::parse(Some(country::Id::US), candidate).ok()?;
    let e164 = parsed.format().mode(Mode::E164).to_string();
    let national = e164.strip_prefix("+1")?;
    if phonenumber::is_valid(&parsed) || national.len() == 10 {
        Some(format!("+1{:0>10}", national))
    } else {
        None
    }
}

/// Region-constrained parse of the raw string, then of the digit string with
/// an inferred "+". The label depends on whether the "+" came from the input.
fn parse_with_region_hint(
    raw_number: &str,
    digits: &str,
    had_plus_prefix: bool
) -> Option<NanpOutcome> {
    let e164 = try_parse_us(raw_number).or_else(|| try_parse_us(&format!("+{digits}")))?;
    let verification = if had_plus_prefix {
        Verification::ValidAndMatched
    } else {
        Verification::AddedCountryCode { code: "1".to_string() }
    };
    Some(NanpOutcome { e164, verification })
}

/// "001" is an international-direct-dial escape seen in exported data; strip
/// it and retry the number as +1.
fn repair_idd_escape(digits: &str) -> Option<NanpOutcome> {
    let rest = digits.strip_prefix("001")?;
    let e164 = try_parse_us(&format!("+1{rest}"))?;
    Some(NanpOutcome {
        e164,
        verification: Verification::AddedCountryCode { code: "1".to_string() },
    })
}

/// Last-resort shaping: drop a leading "1" when more than ten digits remain,
/// then keep the last ten, even when some of them belonged to another
/// country's code. Fails only when fewer than ten digits are left.
fn force_last_ten(digits: &str) -> Option<NanpOutcome> {
    let mut national = digits;
    if national.len() > 10 && national.starts_with('1') {
        national = &national[1..];
    }
    if national.len() < 10 {
        return None;
    }
    let national = &national[national.len() - 10..];
    Some(NanpOutcome {
        e164: format!("+1{national}"),
        verification: Verification::ForcedNanpFormat,
    })
}
