//! Strongly-typed attribute identifier.

use serde::{Deserialize, Serialize};
use std::borrow::Borrow;
use std::fmt;
use std::ops::Deref;

/// A single attribute (column) of a relation.
///
/// Attributes are compared and ordered by their identifier, which is what
/// gives [`AttrSet`](crate::AttrSet) its canonical rendering.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct Attr(String);

impl<'de> Deserialize<'de> for Attr {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Attr::try_new(s).ok_or_else(|| serde::de::Error::custom("Attr must not be empty"))
    }
}

impl Attr {
    /// Create a new `Attr`, panicking if the name is empty.
    ///
    /// Prefer [`try_new`](Self::try_new) when handling untrusted input.
    pub fn new(name: impl Into<String>) -> Self {
        let s = name.into();
        assert!(!s.is_empty(), "Attr must not be empty");
        Self(s)
    }

    /// Try to create a new `Attr`, returning `None` if the name is empty.
    pub fn try_new(name: impl Into<String>) -> Option<Self> {
        let s = name.into();
        if s.is_empty() {
            None
        } else {
            Some(Self(s))
        }
    }

    /// Return the underlying name as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consume the wrapper and return the inner `String`.
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for Attr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for Attr {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Deref for Attr {
    type Target = str;
    fn deref(&self) -> &str {
        &self.0
    }
}

impl Borrow<str> for Attr {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for Attr {
    type Error = crate::CoreError;
    fn try_from(s: String) -> Result<Self, Self::Error> {
        Attr::try_new(s).ok_or(crate::CoreError::EmptyAttribute)
    }
}

impl TryFrom<&str> for Attr {
    type Error = crate::CoreError;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        Attr::try_new(s).ok_or(crate::CoreError::EmptyAttribute)
    }
}

impl PartialEq<str> for Attr {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for Attr {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}
