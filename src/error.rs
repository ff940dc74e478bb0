use serde::{ Deserialize, Serialize };
use std::{ error::Error, fmt::{ Display, Formatter } };

/// Recoverable conditions surfaced to the caller as labeled rows rather than
/// aborting a batch. Everything else in normalization is expressed through
/// [`crate::models::Verification`] labels.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "details")]
pub enum NormalizeError {
    UnknownCountry {
        country: String,
    },
    MissingNumber,
}

impl Display for NormalizeError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            NormalizeError::UnknownCountry { country } => {
                write!(f, "Unknown country: no dialing code found for '{country}'")
            }
            NormalizeError::MissingNumber => {
                write!(f, "Missing Number: no digits survived extraction")
            }
        }
    }
}

impl Error for NormalizeError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        None
    }
}
