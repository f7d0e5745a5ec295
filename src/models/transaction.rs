//! Transaction model
//!
//! A cashbook entry: a deposit (`setor`) or withdrawal (`keluar`) with a
//! label and a positive amount. Records are decoded leniently so that a
//! ledger written by an older or hand-edited client still loads: a record
//! only needs a usable id, every other field falls back to a value the
//! aggregations know to skip.

use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime, SecondsFormat, Utc};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;
use std::fmt;

use super::ids::TransactionId;
use super::money::Money;

/// Kind of cashbook entry
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum TransactionType {
    /// Money paid into the fund (`setor`)
    Deposit,
    /// Money taken out of the fund (`keluar`)
    Withdrawal,
    /// Anything else found in storage; contributes nothing to totals
    Other(String),
}

impl TransactionType {
    /// Label as persisted
    pub fn as_str(&self) -> &str {
        match self {
            Self::Deposit => "setor",
            Self::Withdrawal => "keluar",
            Self::Other(s) => s,
        }
    }

    /// Map a stored label; unknown labels are kept verbatim
    pub fn from_label(s: &str) -> Self {
        match s {
            "setor" | "deposit" => Self::Deposit,
            "keluar" | "withdrawal" => Self::Withdrawal,
            other => Self::Other(other.to_string()),
        }
    }

    /// Parse user input; only the two known kinds are accepted
    pub fn parse(s: &str) -> Option<Self> {
        match Self::from_label(&s.trim().to_lowercase()) {
            Self::Other(_) => None,
            known => Some(known),
        }
    }

    pub fn is_known(&self) -> bool {
        !matches!(self, Self::Other(_))
    }
}

impl Default for TransactionType {
    fn default() -> Self {
        Self::Other(String::new())
    }
}

impl fmt::Display for TransactionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for TransactionType {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for TransactionType {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Ok(match Value::deserialize(deserializer)? {
            Value::String(s) => Self::from_label(&s),
            other => Self::Other(other.to_string()),
        })
    }
}

/// Amount as found in storage
///
/// Stored amounts that are not a usable number are preserved as raw JSON so
/// that rewriting the ledger doesn't destroy them, and are skipped by every
/// aggregation.
#[derive(Debug, Clone, PartialEq)]
pub enum Amount {
    Valid(Money),
    Invalid(Value),
}

impl Amount {
    /// Decode a raw JSON amount (a number or a numeric string)
    pub fn from_json(value: Value) -> Self {
        let parsed = match &value {
            Value::Number(n) => n.as_f64().and_then(Money::from_rupiah_f64),
            Value::String(s) => s
                .trim()
                .parse::<f64>()
                .ok()
                .and_then(Money::from_rupiah_f64),
            _ => None,
        };
        match parsed {
            Some(money) => Self::Valid(money),
            None => Self::Invalid(value),
        }
    }

    /// The amount, if it is a usable number
    pub fn value(&self) -> Option<Money> {
        match self {
            Self::Valid(money) => Some(*money),
            Self::Invalid(_) => None,
        }
    }
}

impl Default for Amount {
    fn default() -> Self {
        Self::Invalid(Value::Null)
    }
}

impl From<Money> for Amount {
    fn from(money: Money) -> Self {
        Self::Valid(money)
    }
}

impl Serialize for Amount {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Valid(money) => money.serialize(serializer),
            Self::Invalid(raw) => raw.serialize(serializer),
        }
    }
}

impl<'de> Deserialize<'de> for Amount {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Ok(Self::from_json(Value::deserialize(deserializer)?))
    }
}

/// A cashbook transaction
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    /// Unique identifier, only used to delete the record
    pub id: TransactionId,

    /// When the record was created (ISO 8601 text, set once)
    #[serde(default, deserialize_with = "lenient_text")]
    pub date: String,

    /// Deposit or withdrawal
    #[serde(rename = "type", default)]
    pub kind: TransactionType,

    /// Free-text label
    #[serde(default, deserialize_with = "lenient_text")]
    pub name: String,

    /// Positive amount; the sign comes from `kind`
    #[serde(default)]
    pub amount: Amount,
}

impl Transaction {
    /// Create a transaction stamped with a fresh id and the current time
    pub fn new(kind: TransactionType, name: impl Into<String>, amount: Money) -> Self {
        Self {
            id: TransactionId::new(),
            date: Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
            kind,
            name: name.into(),
            amount: Amount::Valid(amount),
        }
    }

    /// Replace the creation timestamp
    pub fn dated(mut self, date: impl Into<String>) -> Self {
        self.date = date.into();
        self
    }

    pub fn is_deposit(&self) -> bool {
        self.kind == TransactionType::Deposit
    }

    pub fn is_withdrawal(&self) -> bool {
        self.kind == TransactionType::Withdrawal
    }

    /// Parsed creation time, if `date` is a recognizable timestamp
    ///
    /// Accepts RFC 3339 (converted to UTC), a naive `YYYY-MM-DDTHH:MM:SS`
    /// and a bare `YYYY-MM-DD` (taken as midnight).
    pub fn timestamp(&self) -> Option<NaiveDateTime> {
        let raw = self.date.trim();

        if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
            return Some(dt.naive_utc());
        }
        for format in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"] {
            if let Ok(dt) = NaiveDateTime::parse_from_str(raw, format) {
                return Some(dt);
            }
        }
        NaiveDate::parse_from_str(raw, "%Y-%m-%d")
            .ok()
            .map(|d| d.and_time(NaiveTime::MIN))
    }

    /// Calendar date of the record, if `date` parses
    pub fn calendar_date(&self) -> Option<NaiveDate> {
        self.timestamp().map(|dt| dt.date())
    }
}

impl fmt::Display for Transaction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let date = self
            .calendar_date()
            .map(|d| d.format("%Y-%m-%d").to_string())
            .unwrap_or_else(|| self.date.clone());
        match self.amount.value() {
            Some(amount) => write!(f, "{} {} {} {}", date, self.kind, self.name, amount),
            None => write!(f, "{} {} {} (invalid amount)", date, self.kind, self.name),
        }
    }
}

fn lenient_text<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    Ok(match Value::deserialize(deserializer)? {
        Value::String(s) => s,
        Value::Null => String::new(),
        other => other.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_new_transaction() {
        let txn = Transaction::new(TransactionType::Deposit, "Iuran Januari", Money::from_rupiah(5000));
        assert!(txn.is_deposit());
        assert_eq!(txn.name, "Iuran Januari");
        assert_eq!(txn.amount.value(), Some(Money::from_rupiah(5000)));
        assert!(txn.timestamp().is_some());
        assert!(txn.date.ends_with('Z'));
    }

    #[test]
    fn test_type_labels() {
        assert_eq!(TransactionType::from_label("setor"), TransactionType::Deposit);
        assert_eq!(TransactionType::from_label("keluar"), TransactionType::Withdrawal);
        assert_eq!(TransactionType::from_label("deposit"), TransactionType::Deposit);
        assert_eq!(
            TransactionType::from_label("Setor"),
            TransactionType::Other("Setor".into())
        );
        assert_eq!(TransactionType::parse(" Setor "), Some(TransactionType::Deposit));
        assert_eq!(TransactionType::parse("hibah"), None);
    }

    #[test]
    fn test_serialized_layout() {
        let txn = Transaction::new(TransactionType::Withdrawal, "Fotokopi", Money::from_rupiah(2000))
            .dated("2024-02-05T08:00:00.000Z");
        let value = serde_json::to_value(&txn).unwrap();

        assert_eq!(value["type"], "keluar");
        assert_eq!(value["name"], "Fotokopi");
        assert_eq!(value["amount"], 2000);
        assert_eq!(value["date"], "2024-02-05T08:00:00.000Z");
        assert_eq!(value["id"], txn.id.as_str());
    }

    #[test]
    fn test_lenient_decoding() {
        let txn: Transaction = serde_json::from_value(json!({
            "id": 1705312345678.5,
            "date": null,
            "type": 7,
            "name": 12,
            "amount": "abc"
        }))
        .unwrap();

        assert_eq!(txn.id.as_str(), "1705312345678.5");
        assert_eq!(txn.date, "");
        assert_eq!(txn.kind, TransactionType::Other("7".into()));
        assert_eq!(txn.name, "12");
        assert_eq!(txn.amount, Amount::Invalid(json!("abc")));
        assert!(txn.timestamp().is_none());
    }

    #[test]
    fn test_missing_fields_default() {
        let txn: Transaction = serde_json::from_value(json!({"id": "x1"})).unwrap();
        assert_eq!(txn.amount.value(), None);
        assert!(!txn.kind.is_known());
    }

    #[test]
    fn test_missing_id_is_rejected() {
        assert!(serde_json::from_value::<Transaction>(json!({"name": "x"})).is_err());
        assert!(serde_json::from_value::<Transaction>(json!({"id": ""})).is_err());
    }

    #[test]
    fn test_numeric_string_amount() {
        assert_eq!(
            Amount::from_json(json!(" 1500 ")),
            Amount::Valid(Money::from_rupiah(1500))
        );
        assert_eq!(Amount::from_json(json!("NaN")), Amount::Invalid(json!("NaN")));
        assert_eq!(Amount::from_json(json!(true)), Amount::Invalid(json!(true)));
    }

    #[test]
    fn test_invalid_amount_survives_round_trip() {
        let txn: Transaction =
            serde_json::from_value(json!({"id": "x1", "type": "setor", "amount": "abc"})).unwrap();
        let value = serde_json::to_value(&txn).unwrap();
        assert_eq!(value["amount"], "abc");
    }

    #[test]
    fn test_timestamp_formats() {
        let base = Transaction::new(TransactionType::Deposit, "x", Money::from_rupiah(1));

        let utc = base.clone().dated("2024-01-31T23:30:00+07:00");
        assert_eq!(utc.calendar_date(), NaiveDate::from_ymd_opt(2024, 1, 31));

        let shifted = base.clone().dated("2024-02-01T03:00:00+07:00");
        assert_eq!(shifted.calendar_date(), NaiveDate::from_ymd_opt(2024, 1, 31));

        let bare = base.clone().dated("2024-01-15");
        assert_eq!(bare.calendar_date(), NaiveDate::from_ymd_opt(2024, 1, 15));

        let naive = base.clone().dated("2024-01-15T10:20:30");
        assert_eq!(naive.calendar_date(), NaiveDate::from_ymd_opt(2024, 1, 15));

        assert!(base.dated("kemarin").timestamp().is_none());
    }

    #[test]
    fn test_display() {
        let txn = Transaction::new(TransactionType::Deposit, "Iuran", Money::from_rupiah(5000))
            .dated("2024-02-01");
        assert_eq!(txn.to_string(), "2024-02-01 setor Iuran Rp 5.000");
    }
}
