mod account;
mod amount;
mod auth;
mod record;
mod statement;
mod validate;

pub use account::{Account, AccountOperationError};
pub use amount::{Amount, AmountError};
pub use auth::Authenticator;
pub use record::{TransactionKind, TransactionRecord};
pub use statement::{StatementRow, currency, signed_currency, write_statement};
pub use validate::{InputError, parse_amount};
