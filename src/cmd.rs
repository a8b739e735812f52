use std::io::Read;

use anyhow::{Context, Result};
use clap::Args;
use tracing::{debug, info};

use crate::filespec::{self, FileSpec};
use crate::importers::ing_csv::{self, RawRecord};
use crate::normalize::NormalizedRecord;
use crate::qif::{Batch, Entry};

#[derive(Debug, Args)]
pub struct Cmd {
    /// The ING CSV export to read from. "-" reads from stdin.
    input: FileSpec,
    /// The QIF file to write to (overwrites any existing file). "-" writes
    /// to stdout.
    #[arg(short = 'o', long = "output", default_value = "-")]
    output: FileSpec,
}

impl Cmd {
    pub fn run(&self) -> Result<()> {
        info!("reading transactions from {}", self.input);
        let batch = convert_file(&self.input)?;
        info!("writing {} entries to {}", batch.len(), self.output);
        filespec::write_file(&self.output, &format!("{}\n", batch))
    }
}

pub fn convert_file(input: &FileSpec) -> Result<Batch> {
    let reader = input.text_reader()?;
    convert(reader).with_context(|| format!("converting {}", input))
}

/// Converts every record in `reader`. The first bad record aborts the
/// conversion.
pub fn convert<R: Read>(reader: R) -> Result<Batch> {
    let mut batch = Batch::new();
    for (i, result) in ing_csv::read_records(reader)?.enumerate() {
        let entry = result
            .and_then(format_record)
            .with_context(|| format!("record {}", i + 1))?;
        batch.push(entry);
    }
    Ok(batch)
}

fn format_record(raw: RawRecord) -> Result<Entry> {
    let record = NormalizedRecord::from_raw(raw);
    let entry = Entry::from_record(&record)?;
    debug!(
        "{} {} classified as {}, entry type {:?}",
        record.date, record.amount, record.kind, entry.entry_type
    );
    Ok(entry)
}
