use eyre::Result;
use std::path::Path;
use store::writer::CsvWriter;

use crate::encoder::OutputRow;
use crate::sink::handle::Sink;

pub struct CsvSink {
    writer: CsvWriter,
}

impl CsvSink {
    pub fn create(path: &Path) -> Result<Self> {
        let writer = CsvWriter::create(path)?;
        tracing::info!("Writing rows to {}", path.display());
        Ok(Self { writer })
    }
}

impl Sink for CsvSink {
    fn write(&mut self, row: &OutputRow) -> Result<()> {
        match row {
            OutputRow::Transaction(row) => self.writer.write(row),
            OutputRow::Transfer(row) => self.writer.write(row),
        }
    }

    fn flush(&mut self) -> Result<()> {
        self.writer.flush()
    }

    fn close(self: Box<Self>) -> Result<()> {
        self.writer.close()
    }
}
