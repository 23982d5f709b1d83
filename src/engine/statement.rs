use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::io::Write;

use crate::engine::{Amount, TransactionRecord};

/// A display row of the mini-statement.
/// It is used for decoupling statement output from the record type and easy
/// serialisation; every currency value is pre-formatted as a string.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct StatementRow {
    #[serde(rename = "type")]
    pub typ: String,
    pub amount: String,
    pub balance: String,
}

impl From<&TransactionRecord> for StatementRow {
    fn from(record: &TransactionRecord) -> Self {
        StatementRow {
            typ: record.kind.to_string(),
            amount: signed_currency(record.amount),
            balance: currency(record.balance),
        }
    }
}

/// Format as currency with two decimal places, ex: `$1500.00`.
pub fn currency(amount: Amount) -> String {
    format!("${amount}")
}

/// Format with an explicit leading sign, ex: `+$500.00` / `-$200.00`.
pub fn signed_currency(amount: Amount) -> String {
    if amount.is_negative() {
        format!("-${}", amount.abs())
    } else {
        format!("+${amount}")
    }
}

/// Serialise the full history as CSV, in chronological order.
pub fn write_statement<W: Write>(records: &[TransactionRecord], writer: W) -> Result<()> {
    let mut wtr = csv::Writer::from_writer(writer);

    for record in records {
        log::debug!("Serialising statement row for record: {record:?}");
        wtr.serialize(StatementRow::from(record))?;
    }
    wtr.flush()?;

    Ok(())
}
