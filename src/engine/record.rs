use std::fmt;

use crate::engine::Amount;

/// The kind of balance change a history entry captures.
/// Its Display output is the label shown on the mini-statement.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TransactionKind {
    InitialDeposit,
    Deposit,
    Withdrawal,
    Transfer { to: String },
}

impl fmt::Display for TransactionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TransactionKind::InitialDeposit => write!(f, "Initial Deposit"),
            TransactionKind::Deposit => write!(f, "Deposit"),
            TransactionKind::Withdrawal => write!(f, "Withdrawal"),
            TransactionKind::Transfer { to } => write!(f, "Transfer to {to}"),
        }
    }
}

/// One immutable history entry: a labelled signed balance change and the
/// balance it resulted in. Ordering in the history is append order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransactionRecord {
    pub kind: TransactionKind,
    pub amount: Amount,
    pub balance: Amount,
}
