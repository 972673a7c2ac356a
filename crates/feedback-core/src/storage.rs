// Rust guideline compliant 2026-02-06

//! Storage module for JSONL file operations.
//!
//! Records are stored one JSON object per line in insertion order. Reads
//! parse line by line; appends take an exclusive lock and write one line.

use crate::identity::generate_unique_id;
use crate::models::now_millis;
use crate::store::RecordStore;
use crate::{Error, FeedbackRecord, NewFeedback, Result};
use std::collections::HashSet;
use std::path::{Path, PathBuf};

/// JSONL-backed record store.
pub struct Storage {
    /// Path to the JSONL file.
    path: PathBuf,
}

impl Storage {
    /// Creates a new Storage instance.
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the JSONL file
    ///
    /// # Errors
    ///
    /// Returns an error if the path is empty.
    pub fn new(path: PathBuf) -> Result<Self> {
        if path.as_os_str().is_empty() {
            return Err(Error::Io(std::io::Error::new(
                std::io::ErrorKind::InvalidInput,
                "Path cannot be empty",
            )));
        }
        Ok(Self { path })
    }

    /// Returns a reference to the JSONL file path.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Storage {
    /// Loads all records from the JSONL file, one line at a time.
    ///
    /// A missing file reads as empty. Blank lines are ignored; malformed
    /// lines and records that fail validation are skipped with a warning.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read.
    pub fn load_all(&self) -> Result<Vec<FeedbackRecord>> {
        use std::fs::File;
        use std::io::{BufRead, BufReader};

        if !self.path.exists() {
            return Ok(Vec::new());
        }

        let file = File::open(&self.path)?;
        let reader = BufReader::new(file);
        let mut records = Vec::new();

        for (index, line) in reader.lines().enumerate() {
            let line = line?;
            if line.trim().is_empty() {
                continue;
            }

            match serde_json::from_str::<FeedbackRecord>(&line) {
                Ok(record) => match record.validate() {
                    Ok(()) => records.push(record),
                    Err(e) => {
                        tracing::warn!(
                            line = index + 1,
                            error = %e,
                            "skipping invalid feedback record"
                        );
                    }
                },
                Err(e) => {
                    tracing::warn!(
                        line = index + 1,
                        error = %e,
                        "skipping malformed JSON line"
                    );
                }
            }
        }

        tracing::debug!(path = %self.path.display(), count = records.len(), "loaded feedback");
        Ok(records)
    }

    /// Loads a single record by ID.
    ///
    /// # Errors
    ///
    /// Returns `Error::NotFound` if no record has the ID, or an IO error if
    /// the file cannot be read.
    pub fn load_by_id(&self, id: &str) -> Result<FeedbackRecord> {
        self.load_all()?
            .into_iter()
            .find(|record| record.id == id)
            .ok_or_else(|| Error::NotFound(id.to_string()))
    }
}

impl Storage {
    /// Appends one record to the end of the file.
    ///
    /// # Errors
    ///
    /// Returns an error if the record fails validation or cannot be written.
    pub fn append_record(&self, record: &FeedbackRecord) -> Result<()> {
        use std::fs::OpenOptions;
        use std::io::Write;

        record.validate()?;

        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)?;
        let json = serde_json::to_string(record)?;
        file.write_all(json.as_bytes())?;
        file.write_all(b"\n")?;
        file.sync_all()?;

        Ok(())
    }

    /// Replaces the file contents with the provided records.
    ///
    /// Uses atomic write operations (temp file + rename) to ensure consistency.
    ///
    /// # Errors
    ///
    /// Returns an error if any record fails validation or the file cannot
    /// be written.
    pub fn save_all(&self, records: &[FeedbackRecord]) -> Result<()> {
        use std::fs::File;
        use std::io::Write;

        for record in records {
            record.validate()?;
        }

        let temp_path = self.path.with_extension("jsonl.tmp");

        {
            let mut file = File::create(&temp_path)?;

            for record in records {
                let json = serde_json::to_string(record)?;
                file.write_all(json.as_bytes())?;
                file.write_all(b"\n")?;
            }

            file.sync_all()?;
        }

        std::fs::rename(&temp_path, &self.path)?;

        Ok(())
    }
}

impl Storage {
    /// Executes a closure with an exclusive lock on the storage file.
    ///
    /// # Errors
    ///
    /// Returns an error if the lock cannot be acquired or the closure fails.
    pub fn with_lock<F, T>(&self, f: F) -> Result<T>
    where
        F: FnOnce() -> Result<T>,
    {
        use fs2::FileExt;
        use std::fs::OpenOptions;

        let lock_path = self.path.with_extension("lock");
        let lock_file = OpenOptions::new()
            .create(true)
            .truncate(false)
            .write(true)
            .open(&lock_path)?;

        lock_file.try_lock_exclusive().map_err(|e| {
            Error::Io(std::io::Error::new(
                std::io::ErrorKind::WouldBlock,
                format!("Failed to acquire lock: {}", e),
            ))
        })?;

        let result = f();

        let _ = lock_file.unlock();

        result
    }
}

impl RecordStore for Storage {
    fn read_all(&self) -> Result<Vec<FeedbackRecord>> {
        self.load_all()
    }

    fn append(&mut self, input: NewFeedback) -> Result<FeedbackRecord> {
        let input = input.normalize()?;

        self.with_lock(|| {
            let taken: HashSet<String> = self.load_all()?.into_iter().map(|r| r.id).collect();
            let created_at = now_millis();
            let id = generate_unique_id(
                &input.name,
                input.rating,
                input.comment.as_deref(),
                created_at,
                |candidate| taken.contains(candidate),
            );
            let record = FeedbackRecord::from_input(id, input, created_at);
            self.append_record(&record)?;
            tracing::info!(id = %record.id, rating = record.rating, "feedback appended");
            Ok(record)
        })
    }

    fn get(&self, id: &str) -> Result<Option<FeedbackRecord>> {
        match self.load_by_id(id) {
            Ok(record) => Ok(Some(record)),
            Err(Error::NotFound(_)) => Ok(None),
            Err(e) => Err(e),
        }
    }
}
