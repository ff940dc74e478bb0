//! Country-aware phone number normalization.
//!
//! Takes a free-form (phone number, country name) pair, resolves the
//! country's dialing code, repairs or replaces an incorrectly embedded code,
//! and renders a per-country display format plus labels describing what
//! changed. File reading/writing and any UI belong to the caller; the two
//! country-to-dialing-code reference maps are injected through
//! [`DialingCodeTable::builder`].

pub mod classify;
pub mod correct;
pub mod error;
pub mod extract;
pub mod format;
pub mod logging;
pub mod models;
pub mod nanp;
pub mod normalizer;
pub mod table;

pub use error::NormalizeError;
pub use models::{ InputRow, NormalizationResult, Verification };
pub use normalizer::PhoneNormalizer;
pub use table::{ canonical_country_key, DialingCodeTable };
