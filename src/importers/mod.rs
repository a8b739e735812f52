//! Readers for bank export formats.

pub mod ing_csv;
pub mod util;
