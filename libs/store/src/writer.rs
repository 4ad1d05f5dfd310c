use eyre::{Result, WrapErr, eyre};
use serde::Serialize;
use std::fs::{self, File};
use std::io::BufWriter;
use std::path::{Path, PathBuf};

/// Buffered CSV file writer; the header comes from the first row's field names.
pub struct CsvWriter {
    path: PathBuf,
    writer: csv::Writer<BufWriter<File>>,
}

impl CsvWriter {
    /// Creates (or truncates) the file, creating missing parent directories.
    pub fn create(path: &Path) -> Result<Self> {
        if let Some(dir) = path.parent().filter(|dir| !dir.as_os_str().is_empty()) {
            fs::create_dir_all(dir)
                .wrap_err_with(|| format!("create directory {}", dir.display()))?;
        }

        let file = File::create(path).wrap_err_with(|| format!("create file {}", path.display()))?;
        let writer = csv::Writer::from_writer(BufWriter::new(file));

        Ok(Self { path: path.to_path_buf(), writer })
    }

    pub fn write<T: Serialize>(&mut self, row: &T) -> Result<()> {
        self.writer.serialize(row).wrap_err("encode csv row")
    }

    /// Pushes buffered rows down to the file.
    pub fn flush(&mut self) -> Result<()> {
        self.writer.flush().wrap_err_with(|| format!("flush {}", self.path.display()))
    }

    pub fn close(self) -> Result<()> {
        let buffered = self
            .writer
            .into_inner()
            .map_err(|e| eyre!("flush {}: {}", self.path.display(), e.error()))?;
        let file = buffered.into_inner().map_err(|e| e.into_error())?;
        file.sync_all().wrap_err_with(|| format!("close file {}", self.path.display()))
    }
}
