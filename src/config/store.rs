//! Thread-safe configuration storage.
//!
//! In-memory config container with interior mutability: views take cheap
//! cloned reads each frame, and reload replaces the contents atomically.

use parking_lot::RwLock;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use crate::config::loader::ConfigError;
use crate::config::types::Config;

#[derive(Clone)]
pub struct ConfigStore {
    inner: Arc<RwLock<Config>>,
    path: PathBuf,
}

impl ConfigStore {
    pub fn new(config: Config, path: PathBuf) -> Self {
        Self {
            inner: Arc::new(RwLock::new(config)),
            path,
        }
    }

    /// Clone of the current config. Config is small; this is cheap.
    pub fn get(&self) -> Config {
        self.inner.read().clone()
    }

    /// Re-read the file behind this store.
    ///
    /// On success the contents are replaced atomically; on failure the old
    /// config stays in place and the error is returned.
    pub fn reload(&self) -> Result<(), ConfigError> {
        let config = Config::load_from(&self.path)?;
        *self.inner.write() = config;
        Ok(())
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}
