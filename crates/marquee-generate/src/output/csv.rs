use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::generators::Record;

/// What a single export wrote.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExportSummary {
    pub rows: u64,
    pub bytes: u64,
}

/// Layout shared by every export: comma delimiter, CRLF terminator, quoting
/// only where a field needs it.
fn writer_builder() -> csv::WriterBuilder {
    let mut builder = csv::WriterBuilder::new();
    builder
        .has_headers(false)
        .delimiter(b',')
        .terminator(csv::Terminator::CRLF)
        .quote_style(csv::QuoteStyle::Necessary);
    builder
}

/// Write `records` to `path` as CSV, truncating any existing file.
///
/// The header comes from [`Record::COLUMNS`], so an empty batch still yields
/// a header row. The file is not created when its directory is missing.
pub fn write_records_csv<T: Record>(
    path: &Path,
    records: &[T],
) -> Result<ExportSummary, csv::Error> {
    let file = File::create(path).map_err(csv::Error::from)?;
    let counting = CountingWriter::new(BufWriter::new(file));
    let mut writer = writer_builder().from_writer(counting);

    writer.write_record(T::COLUMNS)?;
    for record in records {
        writer.serialize(record)?;
    }

    writer.flush()?;
    let mut counting = writer.into_inner().map_err(|err| err.into_error())?;
    counting.flush()?;
    Ok(ExportSummary {
        rows: records.len() as u64,
        bytes: counting.bytes_written(),
    })
}

struct CountingWriter<W: Write> {
    inner: W,
    bytes: u64,
}

impl<W: Write> CountingWriter<W> {
    fn new(inner: W) -> Self {
        Self { inner, bytes: 0 }
    }

    fn bytes_written(&self) -> u64 {
        self.bytes
    }
}

impl<W: Write> Write for CountingWriter<W> {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        let size = self.inner.write(buf)?;
        self.bytes = self.bytes.saturating_add(size as u64);
        Ok(size)
    }

    fn flush(&mut self) -> std::io::Result<()> {
        self.inner.flush()
    }
}
