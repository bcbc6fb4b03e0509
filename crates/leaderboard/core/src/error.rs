//! Errors raised while turning raw payloads into records.
//!
//! A [`MalformedRecord`] is always recoverable: the offending payload is
//! dropped by the caller and the standings are left untouched.

/// A raw payload could not be turned into a valid [`crate::Record`].
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum MalformedRecord {
    /// The payload text is not valid JSON.
    #[error("payload is not valid JSON: {0}")]
    InvalidJson(String),

    /// The payload is valid JSON but not an object.
    #[error("payload is not a JSON object")]
    NotAnObject,

    /// `uuid` is absent, not a string, or blank.
    #[error("record identity is missing or empty")]
    MissingIdentity,

    /// `money_made` is absent or not a non-negative decimal.
    #[error("money_made {value:?} is not a non-negative decimal")]
    InvalidMoney {
        /// Raw value as received (or `<missing>`).
        value: String,
    },
}

impl MalformedRecord {
    pub(crate) fn invalid_money(value: impl Into<String>) -> Self {
        Self::InvalidMoney {
            value: value.into(),
        }
    }
}
