use log::{debug, info};
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use super::WzConfig;
use crate::error::{Result, WzError};

const CONFIG_DIR_NAME: &str = ".wztools";
const CONFIG_FILE_NAME: &str = "config.json";

/// Reads and writes the single configuration file.
#[derive(Debug, Clone)]
pub struct ConfigStore {
    dir: PathBuf,
    file: PathBuf,
}

impl ConfigStore {
    /// Store rooted at an explicit directory; the file is `<dir>/config.json`.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        let dir = dir.into();
        let file = dir.join(CONFIG_FILE_NAME);
        Self { dir, file }
    }

    /// `~/.wztools/config.json`
    pub fn default_location() -> Result<Self> {
        let home = dirs::home_dir().ok_or(WzError::HomeDirUnavailable)?;
        Ok(Self::new(home.join(CONFIG_DIR_NAME)))
    }

    pub fn path(&self) -> &Path {
        &self.file
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub fn exists(&self) -> bool {
        self.file.exists()
    }

    /// Create the config directory (owner-only) if it is missing.
    pub fn ensure_directory(&self) -> Result<()> {
        if self.dir.is_dir() {
            return Ok(());
        }

        let mut builder = fs::DirBuilder::new();
        builder.recursive(true);
        #[cfg(unix)]
        {
            use std::os::unix::fs::DirBuilderExt;
            builder.mode(0o700);
        }
        builder.create(&self.dir).map_err(|source| WzError::Filesystem {
            path: self.dir.clone(),
            source,
        })?;

        info!("Created config directory: {:?}", self.dir);
        Ok(())
    }

    /// Write `config` as pretty JSON, replacing any existing file.
    ///
    /// The content lands in a sibling temp file first and is renamed into
    /// place, so a crash never leaves a truncated `config.json`.
    pub fn save(&self, config: &WzConfig) -> Result<()> {
        self.ensure_directory()?;
        debug!("Saving config to: {:?}", self.file);

        let content = serde_json::to_string_pretty(config)?;
        let tmp = self.file.with_extension("json.tmp");

        write_private(&tmp, content.as_bytes()).map_err(|source| WzError::Filesystem {
            path: tmp.clone(),
            source,
        })?;
        fs::rename(&tmp, &self.file).map_err(|source| WzError::Filesystem {
            path: self.file.clone(),
            source,
        })?;

        info!("Config saved successfully");
        Ok(())
    }

    pub fn load(&self) -> Result<WzConfig> {
        debug!("Loading config from: {:?}", self.file);

        if !self.file.exists() {
            return Err(WzError::ConfigNotFound {
                path: self.file.clone(),
            });
        }

        let content = fs::read_to_string(&self.file).map_err(|e| WzError::ConfigParse {
            path: self.file.clone(),
            message: e.to_string(),
        })?;

        serde_json::from_str(&content).map_err(|e| WzError::ConfigParse {
            path: self.file.clone(),
            message: e.to_string(),
        })
    }
}

fn write_private(path: &Path, bytes: &[u8]) -> io::Result<()> {
    // A stale temp file would keep its old mode; start fresh.
    match fs::remove_file(path) {
        Err(e) if e.kind() != io::ErrorKind::NotFound => return Err(e),
        _ => {}
    }

    let mut options = fs::OpenOptions::new();
    options.write(true).create_new(true);
    #[cfg(unix)]
    {
        use std::os::unix::fs::OpenOptionsExt;
        options.mode(0o600);
    }

    let mut file = options.open(path)?;
    file.write_all(bytes)?;
    file.sync_all()
}
