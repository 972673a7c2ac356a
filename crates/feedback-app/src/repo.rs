// Rust guideline compliant 2026-02-09

//! Repository discovery and path management utilities.

use crate::dashboard::Dashboard;
use crate::error::{AppError, Result};
use feedback_core::{Config, Storage};
use std::path::{Path, PathBuf};

/// Name of the directory holding feedback data.
pub const FEEDBACK_DIR: &str = ".feedback";

/// Name of the JSONL data file inside [`FEEDBACK_DIR`].
pub const DATA_FILE: &str = "feedback.jsonl";

/// Repository path metadata for a feedback workspace.
#[derive(Debug, Clone)]
pub struct RepoContext {
    root: PathBuf,
    feedback_dir: PathBuf,
    data_path: PathBuf,
    config_path: PathBuf,
}

impl RepoContext {
    fn at(root: PathBuf) -> Self {
        let feedback_dir = root.join(FEEDBACK_DIR);
        Self {
            root,
            data_path: feedback_dir.join(DATA_FILE),
            config_path: feedback_dir.join("config.toml"),
            feedback_dir,
        }
    }

    /// Discovers a feedback repository starting from an optional root.
    ///
    /// # Arguments
    ///
    /// * `repo_root` - Optional repository root; defaults to the current directory
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The current directory cannot be resolved
    /// - The `.feedback` directory is missing
    pub fn discover(repo_root: Option<&Path>) -> Result<Self> {
        let root = match repo_root {
            Some(root) => root.to_path_buf(),
            None => std::env::current_dir()?,
        };
        let context = Self::at(root);
        if !context.feedback_dir.exists() {
            return Err(AppError::RepoNotInitialized {
                path: context.feedback_dir,
            });
        }
        Ok(context)
    }

    /// Creates the `.feedback` directory, data file, and default config.
    ///
    /// Existing files are left untouched.
    ///
    /// # Errors
    ///
    /// Returns an error if any file or directory cannot be created.
    pub fn init(repo_root: Option<&Path>) -> Result<Self> {
        let root = match repo_root {
            Some(root) => root.to_path_buf(),
            None => std::env::current_dir()?,
        };
        let context = Self::at(root);

        if !context.feedback_dir.exists() {
            std::fs::create_dir_all(&context.feedback_dir)?;
        }
        if !context.data_path.exists() {
            std::fs::File::create(&context.data_path)?;
        }
        if !context.config_path.exists() {
            Config::default().save(&context.feedback_dir)?;
        }

        tracing::info!(path = %context.feedback_dir.display(), "feedback repository initialized");
        Ok(context)
    }

    /// Returns the repository root path.
    #[must_use]
    pub fn root(&self) -> &Path {
        self.root.as_path()
    }

    /// Returns the `.feedback` directory path.
    #[must_use]
    pub fn feedback_dir(&self) -> &Path {
        self.feedback_dir.as_path()
    }

    /// Returns the JSONL data path.
    #[must_use]
    pub fn data_path(&self) -> &Path {
        self.data_path.as_path()
    }

    /// Returns the config TOML path.
    #[must_use]
    pub fn config_path(&self) -> &Path {
        self.config_path.as_path()
    }

    /// Opens storage for the data file.
    ///
    /// # Errors
    ///
    /// Returns an error if the storage cannot be initialized.
    pub fn open_storage(&self) -> Result<Storage> {
        Ok(Storage::new(self.data_path.clone())?)
    }

    /// Loads repository configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration cannot be loaded.
    pub fn load_config(&self) -> Result<Config> {
        Ok(Config::load(self.feedback_dir())?)
    }

    /// Opens a dashboard session over the repository's storage.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration or storage cannot be opened.
    pub fn open_dashboard(&self) -> Result<Dashboard<Storage>> {
        let config = self.load_config()?;
        Ok(Dashboard::with_config(self.open_storage()?, &config))
    }
}
