//! Reads the CSV export of ING (Netherlands) current account transactions.

use std::io::Read;

use anyhow::{Error, Result};
use serde_derive::Deserialize;

use crate::importers::util::csv::check_headers;

/// Columns that must be present in the header row. The export carries more
/// (`Rekening`, `Tegenrekening`, `Code`), which are ignored.
pub const REQUIRED_HEADERS: [&str; 6] = [
    "Datum",
    "Naam / Omschrijving",
    "Af Bij",
    "Bedrag (EUR)",
    "MutatieSoort",
    "Mededelingen",
];

/// One row of the export, as-is.
#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct RawRecord {
    #[serde(rename = "Datum")]
    pub date: String,
    /// Counterparty name or short description.
    #[serde(rename = "Naam / Omschrijving")]
    pub description: String,
    /// "Af" (debit) or "Bij" (credit).
    #[serde(rename = "Af Bij")]
    pub direction: String,
    /// Unsigned, with a decimal comma.
    #[serde(rename = "Bedrag (EUR)")]
    pub amount: String,
    #[serde(rename = "MutatieSoort")]
    pub kind: String,
    /// Free text payment details.
    #[serde(rename = "Mededelingen")]
    pub details: String,
}

/// Reads the header row, checks it, and returns a lazy iterator over the
/// remaining rows.
pub fn read_records<R: Read>(reader: R) -> Result<impl Iterator<Item = Result<RawRecord>>> {
    let mut csv_rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .from_reader(reader);

    check_headers(csv_rdr.headers()?, &REQUIRED_HEADERS)?;

    Ok(csv_rdr
        .into_deserialize::<RawRecord>()
        .map(|result| result.map_err(Error::from)))
}
