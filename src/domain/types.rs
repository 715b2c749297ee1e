//! Strongly-typed value objects used by the carer entity.
//!
//! These wrappers enforce basic invariants (non-negative identifiers,
//! trimmed non-empty strings, phone number pattern) so that once a value
//! reaches the domain layer it can be treated as trusted.
use std::fmt::{Display, Formatter};
use std::ops::Deref;
use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Pattern accepted by the phone number lookup, e.g. `+7(999)1234567`.
static PHONE_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\+[0-9]{1,7}\([0-9]{3}\)[0-9]{7}$")
        .unwrap_or_else(|e| panic!("invalid phone regex: {e}"))
});

/// Oldest age accepted when deriving a birth year.
pub const MAX_AGE: i32 = 150;

/// Errors produced when attempting to construct a constrained value object.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TypeConstraintError {
    /// Provided identifier is negative.
    #[error("id must not be negative")]
    NegativeId,
    /// Provided string contained no non-whitespace characters.
    #[error("value cannot be empty")]
    EmptyString,
    /// Phone number did not match `+<code>(<3 digits>)<7 digits>`.
    #[error("invalid phone number")]
    InvalidPhone,
    /// Age is negative or implausibly large.
    #[error("age must be between 0 and {MAX_AGE}")]
    InvalidAge,
}

/// Store-assigned carer identifier. Zero means "not persisted yet".
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CarerId(i64);

impl CarerId {
    /// Creates a new identifier ensuring it is not negative.
    pub fn new(value: i64) -> Result<Self, TypeConstraintError> {
        if value >= 0 {
            Ok(Self(value))
        } else {
            Err(TypeConstraintError::NegativeId)
        }
    }

    /// Returns the raw `i64` backing this identifier.
    pub const fn get(self) -> i64 {
        self.0
    }

    /// Whether the identifier refers to a stored row.
    pub const fn is_assigned(self) -> bool {
        self.0 > 0
    }
}

impl Display for CarerId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<i64> for CarerId {
    type Error = TypeConstraintError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<CarerId> for i64 {
    fn from(value: CarerId) -> Self {
        value.0
    }
}

macro_rules! non_empty_string_newtype {
    ($name:ident, $doc:expr) => {
        #[doc = $doc]
        #[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
        pub struct $name(String);

        impl $name {
            /// Constructs a trimmed, non-empty value.
            pub fn new<S: Into<String>>(value: S) -> Result<Self, TypeConstraintError> {
                let trimmed = value.into().trim().to_string();
                if trimmed.is_empty() {
                    return Err(TypeConstraintError::EmptyString);
                }
                Ok(Self(trimmed))
            }

            /// Borrow the value as a string slice.
            pub fn as_str(&self) -> &str {
                &self.0
            }

            /// Consume the wrapper and return the owned string.
            pub fn into_inner(self) -> String {
                self.0
            }
        }

        impl Deref for $name {
            type Target = str;

            fn deref(&self) -> &Self::Target {
                &self.0
            }
        }

        impl Display for $name {
            fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl TryFrom<String> for $name {
            type Error = TypeConstraintError;

            fn try_from(value: String) -> Result<Self, Self::Error> {
                Self::new(value)
            }
        }

        impl TryFrom<&str> for $name {
            type Error = TypeConstraintError;

            fn try_from(value: &str) -> Result<Self, Self::Error> {
                Self::new(value)
            }
        }

        impl From<$name> for String {
            fn from(value: $name) -> Self {
                value.0
            }
        }
    };
}

non_empty_string_newtype!(
    FullName,
    "Carer full name (`second first patronymic`) enforcing trimmed, non-empty values."
);

non_empty_string_newtype!(
    PhoneNumber,
    "Carer contact phone enforcing trimmed, non-empty values."
);

non_empty_string_newtype!(
    AgreementNumber,
    "Adoption agreement number enforcing trimmed, non-empty values."
);

impl PhoneNumber {
    /// Constructs a phone number that must match `+<1-7 digits>(<3 digits>)<7 digits>`.
    ///
    /// Digits are ASCII only and the input is matched as given, so surrounding
    /// whitespace is rejected rather than trimmed.
    pub fn new_strict<S: Into<String>>(value: S) -> Result<Self, TypeConstraintError> {
        let value = value.into();
        if value.trim().is_empty() {
            return Err(TypeConstraintError::EmptyString);
        }
        if !PHONE_PATTERN.is_match(&value) {
            return Err(TypeConstraintError::InvalidPhone);
        }
        Ok(Self(value))
    }
}

/// Checks that an age in years can be turned into a birth year.
pub fn validate_age(age: i32) -> Result<i32, TypeConstraintError> {
    if (0..=MAX_AGE).contains(&age) {
        Ok(age)
    } else {
        Err(TypeConstraintError::InvalidAge)
    }
}
