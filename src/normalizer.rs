use tracing::debug;

use crate::classify::classify_change;
use crate::correct::correct_dialing_code;
use crate::extract::{ digits_only, extract };
use crate::format::format_by_country;
use crate::logging::{ generate_correlation_id, LogLevel, OperationTimer, error_codes };
use crate::models::{ InputRow, NormalizationResult, Verification };
use crate::nanp::normalize_nanp;
use crate::table::{
    canonical_country_key,
    expected_national_length,
    is_nanp_member,
    DialingCodeTable,
};

/// Normalizes (phone number, country name) pairs against an immutable
/// dialing-code table.
///
/// Stateless per call: the table is read-only after construction, so one
/// normalizer can be shared across threads without locking, and batch work
/// is an embarrassingly parallel map over rows.
pub struct PhoneNormalizer {
    table: DialingCodeTable,
}

impl PhoneNormalizer {
    pub fn new(table: DialingCodeTable) -> Self {
        Self { table }
    }

    /// Normalize one number. Never fails: unknown countries and missing
    /// numbers come back as labeled rows so batch processing continues.
    pub fn normalize(&self, raw_number: &str, country_name: &str) -> NormalizationResult {
        let req_id = generate_correlation_id();
        let timer = OperationTimer::new("NORMALIZE:normalize", &req_id);

        debug!(
            "NORMALIZE:normalize [START] [req_id:{}] number: '{}' country: '{}'",
            req_id,
            raw_number,
            country_name
        );

        let extracted = extract(raw_number);
        if extracted.is_missing() {
            timer.log_completion(
                LogLevel::Warn,
                error_codes::VAL_MISSING_FIELD,
                "No digits survived extraction"
            );
            return Self::missing_number();
        }

        let country_key = canonical_country_key(country_name);
        let correct_code = match self.table.resolve(&country_key) {
            Ok(code) => code.to_string(),
            Err(err) => {
                timer.log_completion(LogLevel::Warn, error_codes::BIZ_NOT_FOUND, &err.to_string());
                return NormalizationResult {
                    corrected_number: raw_number.to_string(),
                    verification: Verification::UnknownCountry,
                    comparison: "Unknown country".to_string(),
                };
            }
        };

        let (e164, mut verification) = if is_nanp_member(&country_key) {
            match normalize_nanp(raw_number, &extracted.digits, extracted.had_plus_prefix, &country_key) {
                Some(outcome) => (outcome.e164, outcome.verification),
                None => {
                    timer.log_completion(
                        LogLevel::Warn,
                        error_codes::VAL_LENGTH_VIOLATION,
                        "Fewer than ten digits left after NANP repairs"
                    );
                    return Self::missing_number();
                }
            }
        } else {
            match correct_dialing_code(&extracted.digits, &correct_code, self.table.known_codes()) {
                Ok(corrected) => (corrected.e164, corrected.verification),
                Err(err) => {
                    timer.log_completion(
                        LogLevel::Warn,
                        error_codes::VAL_MISSING_FIELD,
                        &err.to_string()
                    );
                    return Self::missing_number();
                }
            }
        };

        let corrected_number = format_by_country(&e164, &country_key);

        // Post-hoc completeness check on the generic path; the NANP branch
        // enforces its own ten-digit rule.
        if !is_nanp_member(&country_key) {
            if let Some(expected) = expected_national_length(&country_key) {
                if digits_only(&corrected_number).len() < correct_code.len() + expected {
                    verification = Verification::MissingData;
                }
            }
        }

        let comparison = classify_change(raw_number, &corrected_number).to_string();

        timer.log_completion(
            LogLevel::Info,
            "SUCCESS",
            &format!("'{}' → '{}' ({})", raw_number, corrected_number, verification)
        );

        NormalizationResult { corrected_number, verification, comparison }
    }

    pub fn normalize_row(&self, row: &InputRow) -> NormalizationResult {
        self.normalize(&row.phone_number, &row.country_name)
    }

    /// Row-by-row map over a dataset; rows are independent of one another.
    pub fn normalize_batch(&self, rows: &[InputRow]) -> Vec<NormalizationResult> {
        rows.iter().map(|row| self.normalize_row(row)).collect()
    }

    fn missing_number() -> NormalizationResult {
        NormalizationResult {
            corrected_number: String::new(),
            verification: Verification::MissingNumber,
            comparison: "Missing Number".to_string(),
        }
    }
}
