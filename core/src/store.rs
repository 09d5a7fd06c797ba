use std::fmt;
use std::rc::Rc;

use crate::codec::{decode_image_refs, encode_image_refs};
use crate::ImageRef;

/// Storage key holding the JSON array of image references.
pub const IMAGES_KEY: &str = "images";

/// String key-value backend with `localStorage` semantics.
pub trait KeyValueStore {
    fn get_item(&self, key: &str) -> Result<Option<String>, StoreError>;
    fn set_item(&self, key: &str, value: &str) -> Result<(), StoreError>;
    fn remove_item(&self, key: &str) -> Result<(), StoreError>;
}

impl<S: KeyValueStore + ?Sized> KeyValueStore for Rc<S> {
    fn get_item(&self, key: &str) -> Result<Option<String>, StoreError> {
        (**self).get_item(key)
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), StoreError> {
        (**self).set_item(key, value)
    }

    fn remove_item(&self, key: &str) -> Result<(), StoreError> {
        (**self).remove_item(key)
    }
}

impl<S: KeyValueStore + ?Sized> KeyValueStore for Box<S> {
    fn get_item(&self, key: &str) -> Result<Option<String>, StoreError> {
        (**self).get_item(key)
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), StoreError> {
        (**self).set_item(key, value)
    }

    fn remove_item(&self, key: &str) -> Result<(), StoreError> {
        (**self).remove_item(key)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    /// The backend cannot be reached at all (no window, storage disabled).
    Unavailable(String),
    /// The backend rejected the call (quota exceeded, security error).
    Backend(String),
    Encode,
}

impl fmt::Display for StoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StoreError::Unavailable(reason) => write!(f, "storage unavailable: {reason}"),
            StoreError::Backend(reason) => write!(f, "storage call failed: {reason}"),
            StoreError::Encode => write!(f, "failed to encode image list"),
        }
    }
}

impl std::error::Error for StoreError {}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReadOutcome {
    Loaded(Vec<ImageRef>),
    Missing,
    Malformed,
    Unavailable(StoreError),
}

impl ReadOutcome {
    pub fn into_refs(self) -> Vec<ImageRef> {
        match self {
            ReadOutcome::Loaded(refs) => refs,
            ReadOutcome::Missing | ReadOutcome::Malformed | ReadOutcome::Unavailable(_) => {
                Vec::new()
            }
        }
    }
}

/// Reads and writes the whole image list under one key.
pub struct ImageStore<S> {
    backend: S,
    key: String,
}

impl<S: KeyValueStore> ImageStore<S> {
    pub fn new(backend: S) -> Self {
        Self::with_key(backend, IMAGES_KEY)
    }

    pub fn with_key(backend: S, key: impl Into<String>) -> Self {
        Self {
            backend,
            key: key.into(),
        }
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn read(&self) -> ReadOutcome {
        let raw = match self.backend.get_item(&self.key) {
            Ok(Some(raw)) => raw,
            Ok(None) => return ReadOutcome::Missing,
            Err(err) => return ReadOutcome::Unavailable(err),
        };
        match decode_image_refs(&raw) {
            Some(refs) => ReadOutcome::Loaded(refs),
            None => ReadOutcome::Malformed,
        }
    }

    pub fn read_all(&self) -> Vec<ImageRef> {
        self.read().into_refs()
    }

    /// Overwrites the stored list. An empty slice is written as `[]` so a
    /// cleared collection stays cleared after reload.
    pub fn write_all(&self, refs: &[ImageRef]) -> Result<(), StoreError> {
        let raw = encode_image_refs(refs).ok_or(StoreError::Encode)?;
        self.backend.set_item(&self.key, &raw)
    }
}
