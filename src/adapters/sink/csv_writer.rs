//! CSV report sink
//!
//! Each report is written to a temporary file in the output directory and
//! renamed into place once complete, so a report file is either whole or
//! absent. There is no rollback across files.

use crate::core::report::ReportTable;
use crate::domain::{ReportError, Result};
use csv::WriterBuilder;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;

/// Writes report tables as CSV files into one directory
#[derive(Debug, Clone)]
pub struct CsvSink {
    directory: PathBuf,
    float_precision: Option<usize>,
}

impl CsvSink {
    pub fn new(directory: impl Into<PathBuf>, float_precision: Option<usize>) -> Self {
        Self {
            directory: directory.into(),
            float_precision,
        }
    }

    pub fn directory(&self) -> &Path {
        &self.directory
    }

    /// Creates the output directory and optionally clears prior CSV files
    ///
    /// Returns the number of files removed.
    ///
    /// # Errors
    ///
    /// Returns an error if the directory cannot be created. Individual
    /// deletion failures are ignored.
    pub fn prepare(&self, clean_before_write: bool) -> Result<usize> {
        fs::create_dir_all(&self.directory).map_err(|e| {
            ReportError::Io(format!(
                "Failed to create output directory {}: {}",
                self.directory.display(),
                e
            ))
        })?;

        if !clean_before_write {
            return Ok(0);
        }

        let removed = remove_csv_files(&self.directory);
        tracing::info!(
            directory = %self.directory.display(),
            removed,
            "Previous CSV files removed"
        );
        Ok(removed)
    }

    /// Writes one table, returning the path of the written file
    ///
    /// # Errors
    ///
    /// Returns an error if the temporary file cannot be created, written,
    /// or renamed to its final name.
    pub fn write(&self, table: &ReportTable) -> Result<PathBuf> {
        let path = self.directory.join(table.file_name());

        let temp = NamedTempFile::new_in(&self.directory).map_err(|e| {
            ReportError::Io(format!(
                "Failed to create temporary file in {}: {}",
                self.directory.display(),
                e
            ))
        })?;

        let mut writer = WriterBuilder::new().has_headers(false).from_writer(temp);
        writer.write_record(table.headers())?;
        for row in &table.rows {
            let fields: Vec<String> = row
                .iter()
                .map(|cell| cell.render(self.float_precision))
                .collect();
            if let [field] = fields.as_slice() {
                if field.is_empty() {
                    // csv quotes a lone empty field; a null cell stays an empty line
                    writer.flush()?;
                    (&mut writer.get_ref()).write_all(b"\n")?;
                    continue;
                }
            }
            writer.write_record(&fields)?;
        }
        writer.flush()?;

        let temp = writer
            .into_inner()
            .map_err(|e| ReportError::Io(format!("Failed to flush {}: {}", path.display(), e)))?;

        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            temp.as_file()
                .set_permissions(fs::Permissions::from_mode(0o644))?;
        }

        temp.persist(&path).map_err(|e| {
            ReportError::Io(format!("Failed to write {}: {}", path.display(), e.error))
        })?;

        tracing::info!(
            file = %path.display(),
            rows = table.rows.len(),
            "Report written"
        );
        Ok(path)
    }
}

/// Deletes every `*.csv` file directly inside `directory`
///
/// Best effort: unreadable entries and failed deletions are skipped.
/// Returns the number of files removed.
pub fn remove_csv_files(directory: &Path) -> usize {
    let entries = match fs::read_dir(directory) {
        Ok(entries) => entries,
        Err(e) => {
            tracing::debug!(directory = %directory.display(), error = %e, "Cannot list output directory");
            return 0;
        }
    };

    let mut removed = 0;
    for entry in entries.flatten() {
        let path = entry.path();
        let is_csv = path.extension().is_some_and(|ext| ext == "csv");
        if !is_csv || !path.is_file() {
            continue;
        }

        match fs::remove_file(&path) {
            Ok(()) => removed += 1,
            Err(e) => {
                tracing::debug!(file = %path.display(), error = %e, "Failed to remove CSV file");
            }
        }
    }
    removed
}
