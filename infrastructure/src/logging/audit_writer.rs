//! Append-only plain-text audit log.
//!
//! Each successful explanation becomes one human-readable record:
//!
//! ```text
//! [2026-08-06 12:00:00] Age 5, Prompt: What is blockchain?
//! A shared ledger...
//!
//! ```
//!
//! The file is write-only from the application's point of view; it is
//! never read back.

use chrono::Local;
use eli_application::ports::audit_sink::{AuditRecord, AuditSink};
use std::fs::{File, OpenOptions};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tracing::warn;

/// Audit sink appending plain-text records to a file.
///
/// Thread-safe via `Mutex<BufWriter<File>>`. Flushes after every record
/// and on `Drop`.
pub struct FileAuditSink {
    writer: Mutex<BufWriter<File>>,
    path: PathBuf,
}

impl FileAuditSink {
    /// Open the log for appending, creating the file (and parent
    /// directories) if they don't exist.
    ///
    /// Returns `None` if the file cannot be opened; auditing is then
    /// simply disabled rather than failing startup.
    pub fn new(path: impl AsRef<Path>) -> Option<Self> {
        let path = path.as_ref();

        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
            && let Err(e) = std::fs::create_dir_all(parent)
        {
            warn!(
                "Could not create audit log directory {}: {}",
                parent.display(),
                e
            );
            return None;
        }

        let file = match OpenOptions::new().create(true).append(true).open(path) {
            Ok(f) => f,
            Err(e) => {
                warn!("Could not open audit log file {}: {}", path.display(), e);
                return None;
            }
        };

        Some(Self {
            writer: Mutex::new(BufWriter::new(file)),
            path: path.to_path_buf(),
        })
    }

    /// Get the path to the log file.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl AuditSink for FileAuditSink {
    fn append(&self, record: AuditRecord) {
        let timestamp = Local::now().format("%Y-%m-%d %H:%M:%S");

        if let Ok(mut writer) = self.writer.lock() {
            let _ = write!(
                writer,
                "[{}] Age {}, Prompt: {}\n{}\n\n",
                timestamp, record.age, record.input_text, record.explanation
            );
            // Flush per record for crash safety
            let _ = writer.flush();
        }
    }
}

impl Drop for FileAuditSink {
    fn drop(&mut self) {
        if let Ok(mut writer) = self.writer.lock() {
            let _ = writer.flush();
        }
    }
}
