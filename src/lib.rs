//! Oblik is a personal-finance core: users, categories, a transaction ledger
//! and chart-ready analytics over a key-value blob store.
//!
//! The library is split into the domain [models](crate::models), the
//! [store](crate::store) that persists them, the mutable collections
//! ([registry](crate::registry) for categories, [ledger](crate::ledger) for
//! transactions), the pure [analytics](crate::analytics) functions and the
//! simulated identity flow in [auth](crate::auth).
//!
//! No function in this library reads the system clock: every time-relative
//! query takes an explicit reference date so callers control "now".

#![warn(missing_docs)]

pub mod analytics;
pub mod auth;
pub mod ledger;
pub mod locale;
pub mod models;
pub mod registry;
pub mod store;

pub use auth::AuthService;
pub use ledger::TransactionLedger;
pub use registry::CategoryRegistry;
pub use store::{BlobStore, MemoryBlobStore, SqliteBlobStore};

/// The errors that may occur in the application.
#[derive(Debug, thiserror::Error, PartialEq)]
pub enum Error {
    /// The email used to sign up already belongs to a registered user. The
    /// client should try again with a different email address.
    #[error("a user with this email already exists")]
    DuplicateEmail,

    /// No registered user matched the email used to sign in.
    #[error("no user found with this email")]
    UnknownEmail,

    /// The password did not match the stored hash for the user.
    #[error("wrong password")]
    WrongPassword,

    /// A required field was left empty. The variant carries the field name
    /// for the user-facing message.
    #[error("{0} must not be empty")]
    EmptyField(&'static str),

    /// A string could not be parsed as a transaction amount.
    #[error("could not parse {0:?} as an amount")]
    InvalidAmount(String),

    /// The requested record could not be found.
    ///
    /// Returned when deleting a category or transaction by an identifier
    /// that is not in the collection.
    #[error("the requested record could not be found")]
    NotFound,

    /// An unhandled/unexpected SQL error.
    #[error("an unexpected SQL error occurred: {0}")]
    SqlError(rusqlite::Error),

    /// A persisted blob could not be serialized or deserialized.
    #[error("could not encode or decode stored data: {0}")]
    Serialization(String),
}

impl From<rusqlite::Error> for Error {
    fn from(value: rusqlite::Error) -> Self {
        match value {
            rusqlite::Error::QueryReturnedNoRows => Error::NotFound,
            error => {
                tracing::error!("an unhandled SQL error occurred: {}", error);
                Error::SqlError(error)
            }
        }
    }
}

impl From<serde_json::Error> for Error {
    fn from(value: serde_json::Error) -> Self {
        tracing::error!("could not encode or decode stored data: {}", value);
        Error::Serialization(value.to_string())
    }
}
