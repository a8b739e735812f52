//! Turns a raw CSV row into a record that the QIF formatter can use directly.

use std::str::FromStr;

use rust_decimal::Decimal;
use tracing::warn;

use crate::classify::MutationKind;
use crate::importers::ing_csv::RawRecord;

/// Value of the "Af Bij" column for money coming into the account.
const CREDIT_FLAG: &str = "Bij";

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Direction {
    Credit,
    Debit,
}

impl Direction {
    /// Anything other than the credit flag counts as a debit.
    pub fn from_flag(flag: &str) -> Self {
        if flag == CREDIT_FLAG {
            Direction::Credit
        } else {
            Direction::Debit
        }
    }

    pub fn sign(self) -> char {
        match self {
            Direction::Credit => '+',
            Direction::Debit => '-',
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct NormalizedRecord {
    pub date: String,
    pub direction: Direction,
    /// Unsigned amount with `.` as the decimal separator, as text.
    pub amount: String,
    pub kind: MutationKind,
    pub details: String,
    pub description: String,
    /// Details and description joined by a single space. Used when no
    /// kind-specific memo applies.
    pub default_memo: String,
}

impl NormalizedRecord {
    /// The amount is passed through as text even when it is not a plain
    /// decimal; such amounts are only logged.
    pub fn from_raw(raw: RawRecord) -> Self {
        let amount = normalize_amount(&raw.amount);
        if let Err(reason) = check_amount(&amount) {
            warn!("{}: amount {:?} written as is: {}", raw.date, amount, reason);
        }
        let default_memo = format!("{} {}", raw.details, raw.description);

        NormalizedRecord {
            date: raw.date,
            direction: Direction::from_flag(&raw.direction),
            amount,
            kind: MutationKind::parse(&raw.kind),
            details: raw.details,
            description: raw.description,
            default_memo,
        }
    }

    pub fn signed_amount(&self) -> String {
        format!("{}{}", self.direction.sign(), self.amount)
    }
}

/// Replaces each decimal comma with a period.
pub fn normalize_amount(amount: &str) -> String {
    amount.replace(',', ".")
}

/// Checks that a normalized amount reads as a non-negative decimal.
fn check_amount(amount: &str) -> Result<(), String> {
    let value = Decimal::from_str(amount).map_err(|e| e.to_string())?;
    if value < Decimal::ZERO {
        return Err("amount is negative".to_string());
    }
    Ok(())
}
