//! The domain models: users, categories and transactions.

mod category;
mod password;
mod transaction;
mod user;

pub use category::{Category, CategoryId, Rgb};
pub use password::PasswordHash;
pub use transaction::{NewTransaction, Transaction, TransactionId, parse_amount};
pub use user::{User, UserId};

pub(crate) use user::DEFAULT_BUSINESS_TYPE;
