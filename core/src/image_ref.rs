use std::fmt;

use serde::{Deserialize, Serialize};

/// Opaque reference to one displayable image, usually an object URL.
///
/// Equality is by value. Two uploads can share a reference, so nothing in the
/// crate treats an `ImageRef` as a unique key.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ImageRef(String);

impl ImageRef {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ImageRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl From<String> for ImageRef {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl From<&str> for ImageRef {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}
