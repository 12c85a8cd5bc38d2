// src/sink/output.rs
// =============================================================================
// The append-only output file.
//
// Every append is one complete step: open (creating if needed), write one
// "host:port\n" line, flush, close. A mutex makes these steps run one at a
// time, so lines from different workers never interleave.
//
// Rust concepts:
// - tokio::sync::Mutex<()>: a lock that guards an action, not data
// - The guard (_guard) unlocks automatically when it goes out of scope
// - tokio::fs: file I/O that doesn't block the runtime's threads
// =============================================================================

use crate::errors::OutputWriteError;
use std::path::{Path, PathBuf};
use tokio::fs::OpenOptions;
use tokio::io::AsyncWriteExt;
use tokio::sync::Mutex;

#[derive(Debug)]
pub struct OutputLog {
    path: PathBuf,
    lock: Mutex<()>,
}

impl OutputLog {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            lock: Mutex::new(()),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    // Appends one record as its own line
    //
    // The file is reopened for every record and closed again right after,
    // so nothing is held open between matches.
    pub async fn append(&self, record: &str) -> Result<(), OutputWriteError> {
        let _guard = self.lock.lock().await;

        let to_error = |source| OutputWriteError {
            record: record.to_string(),
            path: self.path.clone(),
            source,
        };

        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .await
            .map_err(to_error)?;

        let line = format!("{}\n", record);
        file.write_all(line.as_bytes()).await.map_err(to_error)?;

        // tokio writes in the background; flush waits until the line is
        // actually in the file before we release the lock
        file.flush().await.map_err(to_error)?;

        Ok(())
    }
}
