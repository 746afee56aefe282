//! Inventory encoding
//!
//! Serializes records back to the persisted text format.

use std::fs::OpenOptions;
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::error::Result;
use crate::inventory::Record;

use super::DELIMITER;

/// Format one record as a line (no trailing newline)
pub fn encode_record(record: &Record) -> String {
    format!(
        "{id}{d}{brand}{d}{category}{d}{price}{d}{quantity}",
        id = record.id,
        brand = record.brand,
        category = record.category,
        price = record.price,
        quantity = record.quantity,
        d = DELIMITER,
    )
}

/// Write one line per record, in iteration order
pub fn encode<'a, W, I>(writer: &mut W, records: I) -> Result<()>
where
    W: Write,
    I: IntoIterator<Item = &'a Record>,
{
    for record in records {
        writeln!(writer, "{}", encode_record(record))?;
    }
    writer.flush()?;
    Ok(())
}

/// Persist records to a file, fully overwriting the destination
pub fn save<'a, I>(path: &Path, records: I) -> Result<()>
where
    I: IntoIterator<Item = &'a Record>,
{
    let file = OpenOptions::new()
        .create(true)
        .write(true)
        .truncate(true)
        .open(path)?;

    let mut writer = BufWriter::new(file);
    encode(&mut writer, records)?;

    // Push bytes to disk before reporting the write as done
    writer.into_inner().map_err(|e| e.into_error())?.sync_all()?;

    Ok(())
}
