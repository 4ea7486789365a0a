//! The transaction ledger: owns the mutable list of transaction records and
//! exposes the read-side queries the screens are built from.
//!
//! Every mutation persists the full list; every query is a full scan over the
//! in-memory copy. Empty results are valid "no data", never errors.

use time::{Date, Month};

use crate::{
    Error, locale,
    analytics::period::month_bounds,
    models::{NewTransaction, Transaction, TransactionId, UserId},
    store::{BlobStore, TRANSACTIONS_KEY},
};

/// Owns the transaction list and persists it whole under
/// [TRANSACTIONS_KEY](crate::store::TRANSACTIONS_KEY).
#[derive(Debug)]
pub struct TransactionLedger<S: BlobStore> {
    store: S,
    transactions: Vec<Transaction>,
}

/// Transactions sharing the same day label, in insertion order.
#[derive(Debug, PartialEq)]
pub struct DayGroup<'a> {
    /// The rendered day, e.g. "5 березня, 2025".
    pub label: String,
    /// The transactions recorded on that day.
    pub transactions: Vec<&'a Transaction>,
}

impl<S: BlobStore> TransactionLedger<S> {
    /// Create a ledger, loading any previously persisted transactions.
    pub fn new(store: S) -> Result<Self, Error> {
        let transactions = store.read_json(TRANSACTIONS_KEY)?.unwrap_or_default();

        Ok(Self { store, transactions })
    }

    /// Create a transaction with a fresh ID, append it and persist the full
    /// list. A missing date falls back to `reference_date`.
    pub fn add(
        &mut self,
        new: NewTransaction,
        reference_date: Date,
    ) -> Result<&Transaction, Error> {
        let transaction = Transaction::from_new(new, reference_date);
        self.transactions.push(transaction);
        self.persist()?;

        Ok(self.transactions.last().expect("transaction just added"))
    }

    /// Remove the transaction with the given ID and persist the remaining
    /// list.
    ///
    /// # Errors
    /// Returns [Error::NotFound] when no transaction has that ID.
    pub fn remove(&mut self, id: &TransactionId) -> Result<(), Error> {
        let index = self
            .transactions
            .iter()
            .position(|transaction| transaction.id() == id)
            .ok_or(Error::NotFound)?;

        self.transactions.remove(index);
        self.persist()
    }

    /// All transactions owned by `user_id`, in storage order.
    pub fn by_user(&self, user_id: &UserId) -> Vec<&Transaction> {
        self.transactions
            .iter()
            .filter(|transaction| transaction.user_id() == user_id)
            .collect()
    }

    /// The user's income (`is_income == true`) or expense transactions.
    pub fn by_user_and_type(&self, user_id: &UserId, is_income: bool) -> Vec<&Transaction> {
        self.transactions
            .iter()
            .filter(|transaction| {
                transaction.user_id() == user_id && transaction.is_income() == is_income
            })
            .collect()
    }

    /// The user's transactions within the given calendar month, inclusive of
    /// its first and last day.
    ///
    /// The "current month" query is this function called with the year and
    /// month of an explicit reference date.
    pub fn by_user_for_month(
        &self,
        user_id: &UserId,
        year: i32,
        month: Month,
    ) -> Vec<&Transaction> {
        let range = month_bounds(year, month);
        self.by_user_for_range(user_id, range.start, range.end)
    }

    /// The user's transactions with dates in `[start, end]`.
    ///
    /// Bounds are inclusive whole days: transaction dates carry no
    /// time-of-day, so both endpoints cover their entire day.
    pub fn by_user_for_range(
        &self,
        user_id: &UserId,
        start: Date,
        end: Date,
    ) -> Vec<&Transaction> {
        self.transactions
            .iter()
            .filter(|transaction| {
                transaction.user_id() == user_id
                    && transaction.date() >= start
                    && transaction.date() <= end
            })
            .collect()
    }

    /// Bucket transactions by their rendered day label.
    ///
    /// Buckets appear in first-seen label order and keep the input order of
    /// their transactions.
    pub fn group_by_day<'a>(&self, transactions: &[&'a Transaction]) -> Vec<DayGroup<'a>> {
        let mut groups: Vec<DayGroup<'a>> = Vec::new();

        for &transaction in transactions {
            let label = locale::day_label(transaction.date());
            match groups.iter_mut().find(|group| group.label == label) {
                Some(group) => group.transactions.push(transaction),
                None => groups.push(DayGroup {
                    label,
                    transactions: vec![transaction],
                }),
            }
        }

        groups
    }

    /// The sum of the user's income transaction amounts.
    pub fn total_income(&self, user_id: &UserId) -> f64 {
        self.by_user_and_type(user_id, true)
            .iter()
            .map(|transaction| transaction.amount())
            .sum()
    }

    /// The sum of the user's expense transaction amounts.
    pub fn total_expense(&self, user_id: &UserId) -> f64 {
        self.by_user_and_type(user_id, false)
            .iter()
            .map(|transaction| transaction.amount())
            .sum()
    }

    /// The user's balance: total income minus total expense.
    pub fn balance(&self, user_id: &UserId) -> f64 {
        self.total_income(user_id) - self.total_expense(user_id)
    }

    /// The date of the user's earliest transaction, if any.
    ///
    /// Feeds the all-time period preset.
    pub fn earliest_date(&self, user_id: &UserId) -> Option<Date> {
        self.by_user(user_id)
            .iter()
            .map(|transaction| transaction.date())
            .min()
    }

    fn persist(&mut self) -> Result<(), Error> {
        let Self {
            store,
            transactions,
        } = self;
        store.write_json(TRANSACTIONS_KEY, transactions)
    }
}
