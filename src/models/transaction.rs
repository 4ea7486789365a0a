//! This file defines transaction records and the input type used to create
//! them.
//!
//! A transaction stores its amount as a non-negative magnitude; whether the
//! money came in or went out is carried by the `is_income` flag, never by the
//! sign of the amount. The category is embedded as a copy rather than a
//! reference so that historical transactions keep the category's appearance
//! at the time of recording, even if the category is later deleted.

use std::fmt::Display;

use serde::{Deserialize, Serialize};
use time::Date;
use uuid::Uuid;

use crate::{
    Error,
    models::{Category, UserId},
};

/// A newtype wrapper for string transaction IDs.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TransactionId(String);

impl TransactionId {
    /// Wrap an existing ID string.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Generate a fresh random ID.
    pub fn random() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    /// The ID as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Display for TransactionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}

/// A single income or expense record.
///
/// Transactions are created once and never edited.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Transaction {
    id: TransactionId,
    title: String,
    amount: f64,
    date: Date,
    is_income: bool,
    category: Category,
    note: Option<String>,
    user_id: UserId,
}

impl Transaction {
    pub(crate) fn from_new(new: NewTransaction, fallback_date: Date) -> Self {
        Self {
            id: TransactionId::random(),
            title: new.title,
            // The flag carries the sign, the stored amount is a magnitude.
            amount: new.amount.abs(),
            date: new.date.unwrap_or(fallback_date),
            is_income: new.is_income,
            category: new.category,
            note: new.note,
            user_id: new.user_id,
        }
    }

    /// The ID of the transaction.
    pub fn id(&self) -> &TransactionId {
        &self.id
    }

    /// A short description of what the transaction was for.
    pub fn title(&self) -> &str {
        &self.title
    }

    /// The non-negative magnitude of the transaction.
    pub fn amount(&self) -> f64 {
        self.amount
    }

    /// When the transaction happened.
    pub fn date(&self) -> Date {
        self.date
    }

    /// Whether the transaction is income (`true`) or an expense (`false`).
    pub fn is_income(&self) -> bool {
        self.is_income
    }

    /// The category snapshot embedded at creation time.
    pub fn category(&self) -> &Category {
        &self.category
    }

    /// An optional free-text note.
    pub fn note(&self) -> Option<&str> {
        self.note.as_deref()
    }

    /// The ID of the user that owns the transaction.
    pub fn user_id(&self) -> &UserId {
        &self.user_id
    }
}

/// The input for creating a transaction in the
/// [ledger](crate::TransactionLedger).
#[derive(Debug, Clone)]
pub struct NewTransaction {
    /// A short description of what the transaction was for.
    pub title: String,
    /// The magnitude of the transaction. Any sign is discarded.
    pub amount: f64,
    /// When the transaction happened. `None` uses the ledger's reference
    /// date.
    pub date: Option<Date>,
    /// Whether the transaction is income or an expense.
    pub is_income: bool,
    /// The category to embed into the record.
    pub category: Category,
    /// An optional free-text note.
    pub note: Option<String>,
    /// The user that owns the transaction.
    pub user_id: UserId,
}

/// Parse a user-entered amount string.
///
/// Accepts `,` or `.` as the decimal separator. Negative or unparsable input
/// is rejected with [Error::InvalidAmount]; the sign of an amount belongs to
/// the income/expense flag, not the number.
pub fn parse_amount(input: &str) -> Result<f64, Error> {
    let normalized = input.trim().replace(',', ".");

    match normalized.parse::<f64>() {
        Ok(amount) if amount.is_finite() && amount >= 0.0 => Ok(amount),
        _ => Err(Error::InvalidAmount(input.to_string())),
    }
}

#[cfg(test)]
mod transaction_tests {
    use time::macros::date;

    use super::{NewTransaction, Transaction, parse_amount};
    use crate::{
        Error,
        models::{Category, UserId},
    };

    fn new_transaction(amount: f64) -> NewTransaction {
        NewTransaction {
            title: "Lunch".to_owned(),
            amount,
            date: None,
            is_income: false,
            category: Category::new("Їжа", "🍔", "#FF5252"),
            note: None,
            user_id: UserId::new("user-a"),
        }
    }

    #[test]
    fn from_new_stores_magnitude_and_fallback_date() {
        let transaction = Transaction::from_new(new_transaction(-12.5), date!(2025 - 03 - 05));

        assert_eq!(transaction.amount(), 12.5);
        assert_eq!(transaction.date(), date!(2025 - 03 - 05));
        assert!(!transaction.is_income());
    }

    #[test]
    fn from_new_keeps_explicit_date() {
        let mut new = new_transaction(100.0);
        new.date = Some(date!(2025 - 01 - 20));

        let transaction = Transaction::from_new(new, date!(2025 - 03 - 05));

        assert_eq!(transaction.date(), date!(2025 - 01 - 20));
    }

    #[test]
    fn parse_amount_accepts_comma_separator() {
        assert_eq!(parse_amount("12,50"), Ok(12.5));
        assert_eq!(parse_amount(" 100.0 "), Ok(100.0));
    }

    #[test]
    fn parse_amount_rejects_bad_input() {
        assert_eq!(
            parse_amount("-5"),
            Err(Error::InvalidAmount("-5".to_owned()))
        );
        assert_eq!(
            parse_amount("abc"),
            Err(Error::InvalidAmount("abc".to_owned()))
        );
        assert_eq!(parse_amount(""), Err(Error::InvalidAmount(String::new())));
    }

    #[test]
    fn serialization_round_trip_preserves_fields() {
        let transaction = Transaction::from_new(new_transaction(12.5), date!(2025 - 03 - 05));

        let encoded = serde_json::to_string(&transaction).unwrap();
        let decoded: Transaction = serde_json::from_str(&encoded).unwrap();

        assert_eq!(transaction, decoded);
    }
}
