//! Transaction identifiers
//!
//! New ids are time-ordered random UUIDs (v7). Older ledgers carry
//! fractional millisecond timestamps as numeric ids. An id is compared as
//! text, and a numeric id is written back as the same JSON number.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::{Number, Value};
use std::fmt;
use std::hash::{Hash, Hasher};
use std::str::FromStr;
use uuid::Uuid;

/// Identifier of a stored transaction, used only as a deletion key
#[derive(Debug, Clone)]
pub struct TransactionId {
    text: String,
    /// Set when the stored id was a JSON number
    number: Option<Number>,
}

impl TransactionId {
    /// Mint a new time-based + random id
    pub fn new() -> Self {
        Self::from_text(Uuid::now_v7().to_string())
    }

    fn from_text(text: String) -> Self {
        Self { text, number: None }
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// Whether the id was stored as a JSON number
    pub fn is_numeric(&self) -> bool {
        self.number.is_some()
    }

    /// Read an id out of a raw JSON value
    ///
    /// Returns `None` for the values a stored record may not use as an id:
    /// missing, `null`, `false`, `0`, `""` and anything that is not a string
    /// or number.
    pub fn from_json(value: &Value) -> Option<Self> {
        match value {
            Value::String(s) if !s.is_empty() => Some(Self::from_text(s.clone())),
            Value::Number(n) if n.as_f64().is_some_and(|f| f != 0.0) => Some(Self {
                text: n.to_string(),
                number: Some(n.clone()),
            }),
            _ => None,
        }
    }
}

impl Default for TransactionId {
    fn default() -> Self {
        Self::new()
    }
}

impl PartialEq for TransactionId {
    fn eq(&self, other: &Self) -> bool {
        self.text == other.text
    }
}

impl Eq for TransactionId {}

impl Hash for TransactionId {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.text.hash(state);
    }
}

impl fmt::Display for TransactionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

impl From<Uuid> for TransactionId {
    fn from(uuid: Uuid) -> Self {
        Self::from_text(uuid.to_string())
    }
}

impl FromStr for TransactionId {
    type Err = InvalidTransactionId;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.is_empty() {
            return Err(InvalidTransactionId);
        }
        Ok(Self::from_text(s.to_string()))
    }
}

impl Serialize for TransactionId {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match &self.number {
            Some(number) => number.serialize(serializer),
            None => serializer.serialize_str(&self.text),
        }
    }
}

impl<'de> Deserialize<'de> for TransactionId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = Value::deserialize(deserializer)?;
        TransactionId::from_json(&value)
            .ok_or_else(|| serde::de::Error::custom(format!("missing transaction id: {}", value)))
    }
}

/// Error returned when parsing an empty id
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InvalidTransactionId;

impl fmt::Display for InvalidTransactionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "transaction id must not be empty")
    }
}

impl std::error::Error for InvalidTransactionId {}
