//! Classification of ING transactions by their `MutatieSoort` field, and the
//! per-kind rules that pick a readable memo out of the narrative fields.

use std::fmt;

use crate::importers::util::csv::ReadError;

/// Description prefixes written by ING's own terminals. These descriptions are
/// more useful than the details text.
const TERMINAL_PREFIXES: [&str; 3] = ["ING>", "ING BANK>", "OPL. CHIPKNIP"];
const TERMINAL_MEMO_LEN: usize = 32;
const MISCELLANEOUS_MEMO_LEN: usize = 64;

const SEPA_DIRECT_DEBIT: &str = "SEPA Incasso";

const NAME_MARKER: &str = "Naam: ";
const REFERENCE_MARKER: &str = "Kenmerk: ";
const DESCRIPTION_MARKER: &str = "Omschrijving: ";
const IBAN_MARKER: &str = "IBAN: ";

/// The closed vocabulary of the `MutatieSoort` column.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum MutationKind {
    /// "Betaalautomaat": card payment at a point of sale.
    CardPayment,
    /// "Geldautomaat": cash machine withdrawal.
    CashWithdrawal,
    /// "Incasso": direct debit.
    DirectDebit,
    /// "Internetbankieren": transfer made through online banking.
    OnlineBanking,
    /// "Overschrijving": other transfer.
    Transfer,
    /// "Diversen".
    Miscellaneous,
    /// "Verzamelbetaling": batch payment.
    BatchPayment,
    /// "Storting": deposit.
    Deposit,
    /// Anything else, kept verbatim.
    Other(String),
}

impl MutationKind {
    pub fn parse(s: &str) -> Self {
        use MutationKind::*;
        match s {
            "Betaalautomaat" => CardPayment,
            "Geldautomaat" => CashWithdrawal,
            "Incasso" => DirectDebit,
            "Internetbankieren" => OnlineBanking,
            "Overschrijving" => Transfer,
            "Diversen" => Miscellaneous,
            "Verzamelbetaling" => BatchPayment,
            "Storting" => Deposit,
            other => Other(other.to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        use MutationKind::*;
        match self {
            CardPayment => "Betaalautomaat",
            CashWithdrawal => "Geldautomaat",
            DirectDebit => "Incasso",
            OnlineBanking => "Internetbankieren",
            Transfer => "Overschrijving",
            Miscellaneous => "Diversen",
            BatchPayment => "Verzamelbetaling",
            Deposit => "Storting",
            Other(s) => s,
        }
    }

    /// The QIF entry type for this kind, if it has one.
    pub fn entry_type(&self) -> Option<EntryType> {
        use MutationKind::*;
        match self {
            CardPayment | CashWithdrawal => Some(EntryType::Atm),
            OnlineBanking | DirectDebit | BatchPayment => Some(EntryType::Transfer),
            Deposit => Some(EntryType::Deposit),
            Transfer | Miscellaneous | Other(_) => None,
        }
    }

    /// Picks the memo for a transaction of this kind out of its narrative
    /// fields.
    ///
    /// `Ok(None)` means no kind-specific memo applies, and the caller should
    /// fall back to the full text of both fields. An error is returned for a
    /// SEPA direct debit whose details lack the name or reference marker, and
    /// for a batch payment that names a party but carries no reference.
    pub fn derive_memo<'a>(
        &self,
        details: &'a str,
        description: &'a str,
    ) -> Result<Option<&'a str>, ReadError> {
        use MutationKind::*;
        Ok(match self {
            CardPayment | CashWithdrawal => Some(terminal_memo(details, description)),
            DirectDebit => direct_debit_memo(details, description)?,
            OnlineBanking | Transfer => transfer_memo(details),
            Miscellaneous => Some(truncate_chars(details, MISCELLANEOUS_MEMO_LEN)),
            BatchPayment => batch_payment_memo(details, description)?,
            Deposit | Other(_) => None,
        })
    }
}

impl fmt::Display for MutationKind {
    fn fmt(&self, f: &mut fmt::Formatter) -> Result<(), fmt::Error> {
        f.write_str(self.as_str())
    }
}

/// QIF entry type, written on the `N` line and in front of the memo.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum EntryType {
    Atm,
    Transfer,
    Deposit,
}

impl EntryType {
    pub fn as_str(self) -> &'static str {
        use EntryType::*;
        match self {
            Atm => "ATM",
            Transfer => "Transfer",
            Deposit => "Deposit",
        }
    }
}

impl fmt::Display for EntryType {
    fn fmt(&self, f: &mut fmt::Formatter) -> Result<(), fmt::Error> {
        f.write_str(self.as_str())
    }
}

/// Returns the text strictly between the first `after` in `haystack` and the
/// first `before` that follows it.
pub fn extract_between<'a>(haystack: &'a str, after: &str, before: &str) -> Option<&'a str> {
    let start = haystack.find(after)? + after.len();
    let rest = &haystack[start..];
    let end = rest.find(before)?;
    Some(&rest[..end])
}

/// Returns at most the first `n` characters of `s`.
fn truncate_chars(s: &str, n: usize) -> &str {
    match s.char_indices().nth(n) {
        Some((i, _)) => &s[..i],
        None => s,
    }
}

fn terminal_memo<'a>(details: &'a str, description: &'a str) -> &'a str {
    if TERMINAL_PREFIXES
        .iter()
        .any(|prefix| description.starts_with(prefix))
    {
        description
    } else {
        truncate_chars(details, TERMINAL_MEMO_LEN)
    }
}

fn direct_debit_memo<'a>(
    details: &'a str,
    description: &'a str,
) -> Result<Option<&'a str>, ReadError> {
    if !description.starts_with(SEPA_DIRECT_DEBIT) && !details.starts_with(SEPA_DIRECT_DEBIT) {
        return Ok(None);
    }
    name_before_reference(details, description).map(Some)
}

fn batch_payment_memo<'a>(
    details: &'a str,
    description: &'a str,
) -> Result<Option<&'a str>, ReadError> {
    if !details.contains(NAME_MARKER) {
        return Ok(None);
    }
    name_before_reference(details, description).map(Some)
}

/// Returns the text from after the first `Naam: ` up to the first
/// `Kenmerk: ` anywhere in `details`. Empty when the reference marker comes
/// first.
fn name_before_reference<'a>(details: &'a str, description: &str) -> Result<&'a str, ReadError> {
    let start = details
        .find(NAME_MARKER)
        .ok_or_else(|| ReadError::marker_not_found(NAME_MARKER, details, description))?
        + NAME_MARKER.len();
    let end = details
        .find(REFERENCE_MARKER)
        .ok_or_else(|| ReadError::marker_not_found(REFERENCE_MARKER, details, description))?;
    Ok(details.get(start..end).unwrap_or(""))
}

fn transfer_memo(details: &str) -> Option<&str> {
    extract_between(details, NAME_MARKER, DESCRIPTION_MARKER)
        .or_else(|| extract_between(details, NAME_MARKER, IBAN_MARKER))
}
