//! On-disk store associating file names with the keys that encrypted them.
//!
//! The cipher core only ever receives a key value; remembering which key
//! belongs to which file is the host application's job. This crate keeps a
//! name → key map serialized with `bincode`, loaded whole into memory and
//! written back whole on save.

#![forbid(unsafe_code)]
#![deny(missing_docs)]

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use shacal_core::ShacalKey;
use thiserror::Error;
use tracing::debug;

/// Errors produced by the key store.
#[derive(Debug, Error)]
pub enum StoreError {
    /// No key is recorded for the requested file. A caller-side condition,
    /// distinct from any cryptographic or I/O failure.
    #[error("no key recorded for `{0}`")]
    KeyNotFound(String),
    /// The store file could not be read or written.
    #[error("store I/O failure")]
    Io(#[from] std::io::Error),
    /// The store file could not be encoded or decoded.
    #[error("store serialization failure")]
    Codec(#[from] bincode::Error),
}

/// Name → key map persisted next to the encrypted files.
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct KeyStore {
    entries: HashMap<String, ShacalKey>,
}

impl KeyStore {
    /// Loads a store from `path`, returning an empty store if the file
    /// does not exist yet.
    ///
    /// # Errors
    /// Propagates I/O and decoding failures for an existing file.
    pub fn load(path: &Path) -> Result<Self, StoreError> {
        if !path.exists() {
            debug!(path = %path.display(), "store file absent, starting empty");
            return Ok(Self::default());
        }
        let bytes = fs::read(path)?;
        let store: Self = bincode::deserialize(&bytes)?;
        debug!(path = %path.display(), entries = store.entries.len(), "store loaded");
        Ok(store)
    }

    /// Persists the store to `path`, replacing any previous contents.
    ///
    /// # Errors
    /// Propagates I/O and encoding failures.
    pub fn save(&self, path: &Path) -> Result<(), StoreError> {
        let bytes = bincode::serialize(self)?;
        fs::write(path, bytes)?;
        debug!(path = %path.display(), entries = self.entries.len(), "store saved");
        Ok(())
    }

    /// Records the key used to encrypt `name`, replacing any earlier entry.
    pub fn insert(&mut self, name: impl Into<String>, key: ShacalKey) {
        self.entries.insert(name.into(), key);
    }

    /// Looks up the key recorded for `name`.
    ///
    /// # Errors
    /// Returns [`StoreError::KeyNotFound`] if no entry exists.
    pub fn lookup(&self, name: &str) -> Result<ShacalKey, StoreError> {
        self.entries
            .get(name)
            .copied()
            .ok_or_else(|| StoreError::KeyNotFound(name.to_string()))
    }

    /// Returns the recorded file names in unspecified order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    /// Number of recorded entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the store has no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
