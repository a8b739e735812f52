//! Functions to read and write text files. Allows use of "-" as a way to
//! specify stdin or stdout.

use std::fmt;
use std::fs::File;
use std::io::{stdin, stdout, Cursor, Read, Write};
use std::path::PathBuf;
use std::str::FromStr;

use anyhow::{Context, Error, Result};
use encoding_rs::{Encoding, UTF_8, WINDOWS_1252};
use tracing::{debug, warn};

/// Specifies a file to read from to write to (depending on context).
#[derive(Clone, Debug)]
pub enum FileSpec {
    /// Read from stdin or write to stdout.
    Stdio,
    /// Read from or write to the file at the given path.
    Path(PathBuf),
}

impl fmt::Display for FileSpec {
    fn fmt(&self, f: &mut fmt::Formatter) -> Result<(), fmt::Error> {
        use FileSpec::*;
        match self {
            Stdio => f.write_str("<stdio>"),
            Path(path) => write!(f, "{:?}", path),
        }
    }
}

impl FileSpec {
    pub fn reader(&self) -> Result<Box<dyn Read>> {
        use FileSpec::*;
        Ok(match self {
            Stdio => Box::new(stdin()),
            Path(path) => Box::new(
                File::open(path).with_context(|| format!("opening {:?} for reading", path))?,
            ),
        })
    }

    /// Like `reader`, but always yields UTF-8. A byte-order mark selects the
    /// source encoding and is stripped. Without one, input that is valid
    /// UTF-8 is taken as such and anything else as Windows-1252, the bank's
    /// older export encoding.
    pub fn text_reader(&self) -> Result<Box<dyn Read>> {
        let mut bytes = Vec::new();
        self.reader()?
            .read_to_end(&mut bytes)
            .with_context(|| format!("reading {}", self))?;
        let text = decode_text(&bytes);
        Ok(Box::new(Cursor::new(text.into_bytes())))
    }

    pub fn writer(&self) -> Result<Box<dyn Write>> {
        use FileSpec::*;
        Ok(match self {
            Stdio => Box::new(stdout()),
            Path(path) => Box::new(
                File::create(path).with_context(|| format!("opening {:?} for writing", path))?,
            ),
        })
    }
}

impl FromStr for FileSpec {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        use FileSpec::*;
        if s == "-" {
            Ok(Stdio)
        } else {
            Ok(Path(s.into()))
        }
    }
}

fn decode_text(bytes: &[u8]) -> String {
    let fallback = if Encoding::for_bom(bytes).is_none() && std::str::from_utf8(bytes).is_err() {
        warn!("input is not valid UTF-8, decoding as {}", WINDOWS_1252.name());
        WINDOWS_1252
    } else {
        UTF_8
    };
    let (text, encoding, had_errors) = fallback.decode(bytes);
    debug!("decoded input as {}", encoding.name());
    if had_errors {
        warn!("input has bytes that are invalid in {}, replaced", encoding.name());
    }
    text.into_owned()
}

pub fn write_file(file_spec: &FileSpec, content: &str) -> Result<()> {
    let mut f = file_spec.writer()?;
    f.write_all(content.as_bytes())?;
    f.flush()?;
    Ok(())
}
