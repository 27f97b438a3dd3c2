use csv::{ReaderBuilder, WriterBuilder};
use log::{debug, info};
use serde::{de::DeserializeOwned, Serialize};
use std::fs::{self, File, OpenOptions};
use std::io::{BufReader, BufWriter};
use std::path::{Path, PathBuf};

use crate::backend::storage::{PersistenceError, RecordKind};

/// CsvConnection manages the data directory and the per-table CSV files in it
#[derive(Clone, Debug)]
pub struct CsvConnection {
    base_directory: PathBuf,
}

impl CsvConnection {
    /// Create a new CSV connection with a base directory
    pub fn new<P: AsRef<Path>>(base_directory: P) -> Result<Self, PersistenceError> {
        let base_path = base_directory.as_ref().to_path_buf();

        // Create the base directory if it doesn't exist
        if !base_path.exists() {
            fs::create_dir_all(&base_path).map_err(|source| PersistenceError::Unavailable {
                location: base_path.display().to_string(),
                source,
            })?;
            info!("Created data directory: {}", base_path.display());
        }

        Ok(Self {
            base_directory: base_path,
        })
    }

    /// Get the file path backing one table
    pub fn file_path(&self, kind: RecordKind) -> PathBuf {
        self.base_directory.join(kind.file_name())
    }

    /// Read every row of a table. A table that was never written is empty.
    pub fn read_rows<R: DeserializeOwned>(&self, kind: RecordKind) -> Result<Vec<R>, PersistenceError> {
        let file_path = self.file_path(kind);

        if !file_path.exists() {
            debug!("No {} file yet at {}", kind, file_path.display());
            return Ok(Vec::new());
        }

        let file = File::open(&file_path)?;
        let mut csv_reader = ReaderBuilder::new()
            .has_headers(true)
            .from_reader(BufReader::new(file));

        let mut rows = Vec::new();
        for result in csv_reader.deserialize() {
            rows.push(result?);
        }

        Ok(rows)
    }

    /// Replace a table's contents with `rows` under the given header.
    ///
    /// Rows go to a temporary file first and are moved into place with a
    /// rename, so a failed write leaves the previous file intact.
    pub fn write_rows<R: Serialize>(
        &self,
        kind: RecordKind,
        header: &[&str],
        rows: &[R],
    ) -> Result<(), PersistenceError> {
        if !self.base_directory.exists() {
            fs::create_dir_all(&self.base_directory).map_err(|source| PersistenceError::Unavailable {
                location: self.base_directory.display().to_string(),
                source,
            })?;
        }

        let file_path = self.file_path(kind);
        let temp_path = file_path.with_extension("tmp");

        {
            let file = OpenOptions::new()
                .write(true)
                .create(true)
                .truncate(true)
                .open(&temp_path)?;

            let mut csv_writer = WriterBuilder::new()
                .has_headers(false)
                .from_writer(BufWriter::new(file));

            csv_writer.write_record(header)?;
            for row in rows {
                csv_writer.serialize(row)?;
            }

            csv_writer.flush()?;
        }

        // Atomic move from temp to final file
        fs::rename(&temp_path, &file_path)?;

        Ok(())
    }
}
