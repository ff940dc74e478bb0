use crate::error::NormalizeError;
use crate::models::Verification;

/// Corrected E.164-style number plus the label describing the decision taken.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CorrectedNumber {
    pub e164: String,
    pub verification: Verification,
}

/// Decide whether the digit string already carries the right dialing code,
/// carries a wrong one, or carries none at all.
///
/// `known_codes` must be sorted longest first so that the longest code
/// prefixing the digits wins the match.
pub fn correct_dialing_code(
    digits: &str,
    correct_code: &str,
    known_codes: &[String]
) -> Result<CorrectedNumber, NormalizeError> {
    let matched = known_codes.iter().find(|code| digits.starts_with(code.as_str()));

    let Some(matched) = matched else {
        // No recognizable code at all: strip leading zeros, prepend the
        // correct one.
        let stripped = digits.trim_start_matches('0');
        if stripped.is_empty() {
            return Err(NormalizeError::MissingNumber);
        }
        return Ok(CorrectedNumber {
            e164: format!("+{correct_code}{stripped}"),
            verification: Verification::AddedCountryCode { code: correct_code.to_string() },
        });
    };

    if matched.as_str() == correct_code {
        return Ok(CorrectedNumber {
            e164: format!("+{digits}"),
            verification: Verification::ValidAndMatched,
        });
    }

    // A NANP-style leading "1" colliding with a longer code drops only that
    // single digit, not the full matched length. Codes starting with "44",
    // "91" etc. get no equivalent treatment; the asymmetry is deliberate.
    let remaining = if matched.starts_with('1') && correct_code != "1" {
        &digits[1..]
    } else {
        &digits[matched.len()..]
    };
    if remaining.is_empty() {
        return Err(NormalizeError::MissingNumber);
    }
    Ok(CorrectedNumber {
        e164: format!("+{correct_code}{remaining}"),
        verification: Verification::CorrectedFrom {
            from: matched.clone(),
            to: correct_code.to_string(),
        },
    })
}
