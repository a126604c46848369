use std::fmt;
use std::fmt::{Display, Formatter};
use std::hash;

use crate::error::{LiteralError, Result};

/// Every invalid token hashes to this.
const INVALID_HASH: u32 = 17;

/// A text token read as a JSON boolean literal.
///
/// Only the exact, case-sensitive strings `true` and `false` are valid. Any other
/// token is kept as `Invalid` and still renders verbatim.
///
/// Equality and hashing ignore the text of invalid tokens: all invalid values
/// compare equal to each other and never equal a valid one.
///
/// An `Invalid` value can only come from [`JsonBoolean::new`] or a `From` impl:
///
/// ```compile_fail
/// use json_literal::{InvalidToken, JsonBoolean};
///
/// let _ = JsonBoolean::Invalid(InvalidToken("true".to_string()));
/// ```
#[derive(Debug, Clone)]
pub enum JsonBoolean {
    True,
    False,
    Invalid(InvalidToken),
}

/// Text of a token that is neither `true` nor `false`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvalidToken(String);

impl InvalidToken {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl JsonBoolean {
    pub fn new(source: impl Into<String>) -> Self {
        let source = source.into();
        match source.as_str() {
            "true" => Self::True,
            "false" => Self::False,
            _ => Self::Invalid(InvalidToken(source)),
        }
    }

    pub fn is_valid(&self) -> bool {
        !matches!(self, Self::Invalid(_))
    }

    pub fn value(&self) -> Result<bool> {
        match self {
            Self::True => Ok(true),
            Self::False => Ok(false),
            Self::Invalid(t) => Err(LiteralError::InvalidState(t.0.clone())),
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Self::True => Some(true),
            Self::False => Some(false),
            Self::Invalid(_) => None,
        }
    }

    /// The token this value was built from.
    pub fn source(&self) -> &str {
        match self {
            Self::True => "true",
            Self::False => "false",
            Self::Invalid(t) => t.as_str(),
        }
    }
}

impl Display for JsonBoolean {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "JsonBoolean(\"{}\")", self.source())
    }
}

impl PartialEq for JsonBoolean {
    fn eq(&self, other: &Self) -> bool {
        self.as_bool() == other.as_bool()
    }
}

impl Eq for JsonBoolean {}

impl hash::Hash for JsonBoolean {
    fn hash<H: hash::Hasher>(&self, state: &mut H) {
        match self.as_bool() {
            Some(b) => b.hash(state),
            None => INVALID_HASH.hash(state),
        }
    }
}

impl From<bool> for JsonBoolean {
    fn from(value: bool) -> Self {
        if value {
            Self::True
        } else {
            Self::False
        }
    }
}

impl From<&str> for JsonBoolean {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for JsonBoolean {
    fn from(value: String) -> Self {
        Self::new(value)
    }
}

impl TryFrom<&JsonBoolean> for bool {
    type Error = LiteralError;

    fn try_from(value: &JsonBoolean) -> Result<Self> {
        value.value()
    }
}

impl TryFrom<JsonBoolean> for bool {
    type Error = LiteralError;

    fn try_from(value: JsonBoolean) -> Result<Self> {
        value.value()
    }
}
