//! Output module for the scraped JSON artifacts
//!
//! This module handles:
//! - Streamed JSON array writing, one batch at a time
//! - Pretty-printed preview list writing and reloading

use crate::Result;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fs::File;
use std::io::{BufReader, Write};
use std::path::Path;

/// Streams records to a JSON array, one batch at a time
///
/// The array opens with `[` on creation and closes with `]` in
/// [`finish`](Self::finish); each batch is flushed immediately, so output is
/// visible incrementally. The artifact is valid JSON only if every batch
/// succeeds and `finish` runs; an aborted run leaves the array unterminated
/// on disk.
pub struct JsonArrayWriter<W: Write> {
    sink: W,
    records_written: usize,
}

impl JsonArrayWriter<File> {
    /// Opens `path` for writing (truncating any existing content) and emits
    /// the array opening
    pub fn create(path: &Path) -> Result<Self> {
        let file = File::create(path)?;
        Self::new(file)
    }
}

impl<W: Write> JsonArrayWriter<W> {
    /// Wraps a sink and emits the array opening
    pub fn new(mut sink: W) -> Result<Self> {
        sink.write_all(b"[\n")?;
        Ok(Self {
            sink,
            records_written: 0,
        })
    }

    /// Appends one batch of records, joined by `,\n`, and flushes
    ///
    /// A separator is emitted between consecutive non-empty batches so that
    /// a fully successful run parses as one array.
    pub fn write_batch<T: Serialize>(&mut self, records: &[T]) -> Result<()> {
        if records.is_empty() {
            return Ok(());
        }

        let mut encoded = Vec::with_capacity(records.len());
        for record in records {
            encoded.push(serde_json::to_string(record)?);
        }

        if self.records_written > 0 {
            self.sink.write_all(b",\n")?;
        }
        self.sink.write_all(encoded.join(",\n").as_bytes())?;
        self.sink.flush()?;

        self.records_written += records.len();
        Ok(())
    }

    /// Closes the array and flushes; call exactly once, after the last batch
    pub fn finish(&mut self) -> Result<()> {
        self.sink.write_all(b"\n]")?;
        self.sink.flush()?;
        Ok(())
    }

    /// Number of records written so far
    pub fn records_written(&self) -> usize {
        self.records_written
    }

    /// Borrows the underlying sink (used by tests to inspect output)
    pub fn get_ref(&self) -> &W {
        &self.sink
    }
}

/// Writes a record list pretty-printed (2-space indent) to `path`,
/// truncating any existing content
pub fn write_records_pretty<T: Serialize>(path: &Path, records: &[T]) -> Result<()> {
    let mut file = File::create(path)?;
    serde_json::to_writer_pretty(&mut file, records)?;
    file.flush()?;
    Ok(())
}

/// Reads a record list back from a JSON array file
pub fn load_records<T: DeserializeOwned>(path: &Path) -> Result<Vec<T>> {
    let file = File::open(path)?;
    let records = serde_json::from_reader(BufReader::new(file))?;
    Ok(records)
}
