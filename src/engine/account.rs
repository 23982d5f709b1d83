use crate::engine::amount::{Amount, AmountError};
use crate::engine::record::{TransactionKind, TransactionRecord};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AccountOperationError {
    #[error("Insufficient funds: requested {requested}, available {available}")]
    InsufficientFunds { requested: Amount, available: Amount },

    #[error("Account operation failed: {0}")]
    Amount(#[from] AmountError),
}

/// A single account ledger: balance plus an append-only transaction history.
/// Created once per session, mutated in place, never persisted.
pub struct Account {
    holder_name: String,
    number: String,
    balance: Amount,
    transactions: Vec<TransactionRecord>,
}

impl Account {
    pub fn new(holder_name: &str, number: &str, initial_balance: Amount) -> Self {
        let mut account = Account {
            holder_name: holder_name.to_owned(),
            number: number.to_owned(),
            balance: initial_balance,
            transactions: Vec::new(),
        };
        account.record(TransactionKind::InitialDeposit, initial_balance);
        account
    }

    pub fn holder_name(&self) -> &str {
        &self.holder_name
    }

    pub fn number(&self) -> &str {
        &self.number
    }

    pub fn balance(&self) -> Amount {
        self.balance
    }

    pub fn history(&self) -> &[TransactionRecord] {
        &self.transactions
    }

    /// Credit the account. Positivity of `amount` is the caller's
    /// responsibility; the only failure left is arithmetic overflow.
    pub fn deposit(&mut self, amount: Amount) -> Result<(), AccountOperationError> {
        self.balance = self.balance.add(&amount)?;
        self.record(TransactionKind::Deposit, amount);
        Ok(())
    }

    pub fn withdraw(&mut self, amount: Amount) -> Result<(), AccountOperationError> {
        self.debit(amount, TransactionKind::Withdrawal)
    }

    /// One-sided transfer: the recipient is recorded in the history label
    /// but never credited or checked for existence.
    pub fn transfer(
        &mut self,
        amount: Amount,
        to_account: &str,
    ) -> Result<(), AccountOperationError> {
        self.debit(
            amount,
            TransactionKind::Transfer {
                to: to_account.to_owned(),
            },
        )
    }

    fn debit(
        &mut self,
        amount: Amount,
        kind: TransactionKind,
    ) -> Result<(), AccountOperationError> {
        if amount > self.balance {
            return Err(AccountOperationError::InsufficientFunds {
                requested: amount,
                available: self.balance,
            });
        }
        let negated = amount.neg()?;
        self.balance = self.balance.sub(&amount)?;
        self.record(kind, negated);
        Ok(())
    }

    fn record(&mut self, kind: TransactionKind, amount: Amount) {
        self.transactions.push(TransactionRecord {
            kind,
            amount,
            balance: self.balance,
        });
    }
}
