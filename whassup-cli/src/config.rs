//! CLI configuration: database path, media directory, log file.
//! Loaded from WHASSUP_DB_PATH, WHASSUP_MEDIA_DIR and LOG_FILE; command-line values win.

use anyhow::Result;
use std::env;
use std::path::PathBuf;
use whassup_core::FsProbe;

pub const DEFAULT_DB_PATH: &str = "./msgstore.db";

pub struct WhassupConfig {
    pub db_path: PathBuf,
    /// Directory holding downloaded media; relative media references resolve against it.
    pub media_dir: Option<PathBuf>,
    pub log_file: Option<String>,
}

impl WhassupConfig {
    /// Loads from the environment; `db_path` / `media_dir` override their variables when given.
    pub fn load(db_path: Option<PathBuf>, media_dir: Option<PathBuf>) -> Result<Self> {
        let db_path = db_path
            .or_else(|| non_empty_var("WHASSUP_DB_PATH").map(PathBuf::from))
            .unwrap_or_else(|| PathBuf::from(DEFAULT_DB_PATH));
        let media_dir = media_dir.or_else(|| non_empty_var("WHASSUP_MEDIA_DIR").map(PathBuf::from));
        let log_file = non_empty_var("LOG_FILE");

        if let Some(dir) = &media_dir {
            if !dir.is_dir() {
                anyhow::bail!("media directory {} is not a directory", dir.display());
            }
        }

        Ok(Self {
            db_path,
            media_dir,
            log_file,
        })
    }

    pub fn probe(&self) -> FsProbe {
        match &self.media_dir {
            Some(dir) => FsProbe::with_media_root(dir),
            None => FsProbe::new(),
        }
    }
}

fn non_empty_var(key: &str) -> Option<String> {
    env::var(key).ok().filter(|v| !v.trim().is_empty())
}
