//! Quicken Interchange Format output for a bank account.
//!
//! See https://en.wikipedia.org/wiki/Quicken_Interchange_Format

use std::fmt;

use itertools::Itertools;

use crate::classify::EntryType;
use crate::importers::util::csv::ReadError;
use crate::normalize::NormalizedRecord;

/// First line of the output, declaring bank account transactions.
pub const HEADER: &str = "!Type:Bank";
/// Line that ends each entry.
pub const END_OF_ENTRY: &str = "^";

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Entry {
    pub date: String,
    pub amount: String,
    pub entry_type: Option<EntryType>,
    pub memo: String,
}

impl Entry {
    pub fn from_record(record: &NormalizedRecord) -> Result<Self, ReadError> {
        let entry_type = record.kind.entry_type();
        let memo = record
            .kind
            .derive_memo(&record.details, &record.description)?
            .unwrap_or(record.default_memo.as_str());
        let memo = match entry_type {
            Some(t) => format!("{} {}", t, memo),
            None => memo.to_string(),
        };

        Ok(Entry {
            date: record.date.clone(),
            amount: record.signed_amount(),
            entry_type,
            memo: memo.trim().to_string(),
        })
    }

    pub fn lines(&self) -> Vec<String> {
        let mut lines = Vec::with_capacity(5);
        lines.push(format!("D{}", self.date));
        lines.push(format!("T{}", self.amount));
        if let Some(t) = self.entry_type {
            lines.push(format!("N{}", t));
        }
        lines.push(format!("M{}", self.memo));
        lines.push(END_OF_ENTRY.to_string());
        lines
    }
}

impl fmt::Display for Entry {
    fn fmt(&self, f: &mut fmt::Formatter) -> Result<(), fmt::Error> {
        f.write_str(&self.lines().join("\n"))
    }
}

/// All entries of one conversion, in input order.
#[derive(Debug, Default)]
pub struct Batch {
    entries: Vec<Entry>,
}

impl Batch {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, entry: Entry) {
        self.entries.push(entry);
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }
}

impl fmt::Display for Batch {
    fn fmt(&self, f: &mut fmt::Formatter) -> Result<(), fmt::Error> {
        f.write_str(&serialize(&self.entries))
    }
}

/// Returns the header followed by every entry, newline separated, with no
/// trailing newline.
pub fn serialize(entries: &[Entry]) -> String {
    std::iter::once(HEADER.to_string())
        .chain(entries.iter().map(Entry::to_string))
        .join("\n")
}
