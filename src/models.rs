use serde::{ Deserialize, Serialize };
use std::fmt::{ Display, Formatter };

/// One record as handed over by the file-reading collaborator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InputRow {
    pub phone_number: String,
    pub country_name: String,
}

/// Verification label attached to every normalized number.
///
/// Variants carry the dialing codes involved so the rendered message keeps
/// the full "Corrected from X → Y" form the export columns key on.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "details")]
pub enum Verification {
    ValidAndMatched,
    AddedCountryCode {
        code: String,
    },
    CorrectedFrom {
        from: String,
        to: String,
    },
    ForcedNanpFormat,
    MissingNumber,
    MissingData,
    UnknownCountry,
}

impl Display for Verification {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Verification::ValidAndMatched => write!(f, "Valid & Matched"),
            Verification::AddedCountryCode { code } => {
                write!(f, "Added country code → {code}")
            }
            Verification::CorrectedFrom { from, to } => {
                write!(f, "Corrected from {from} → {to}")
            }
            Verification::ForcedNanpFormat => write!(f, "Forced into US/Caribbean format"),
            Verification::MissingNumber => write!(f, "Missing Number"),
            Verification::MissingData => write!(f, "Missing Data"),
            Verification::UnknownCountry => write!(f, "Unknown country"),
        }
    }
}

/// Outcome of normalizing a single row. Computed fresh per input, never
/// mutated afterwards; persistence is the caller's concern.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NormalizationResult {
    pub corrected_number: String,
    pub verification: Verification,
    pub comparison: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_verification_labels() {
        assert_eq!(Verification::ValidAndMatched.to_string(), "Valid & Matched");
        assert_eq!(
            Verification::AddedCountryCode { code: "1".to_string() }.to_string(),
            "Added country code → 1"
        );
        assert_eq!(
            Verification::CorrectedFrom { from: "44".to_string(), to: "91".to_string() }.to_string(),
            "Corrected from 44 → 91"
        );
        assert_eq!(
            Verification::ForcedNanpFormat.to_string(),
            "Forced into US/Caribbean format"
        );
        assert_eq!(Verification::MissingNumber.to_string(), "Missing Number");
        assert_eq!(Verification::MissingData.to_string(), "Missing Data");
        assert_eq!(Verification::UnknownCountry.to_string(), "Unknown country");
    }
}
