// nexus-flags/src/error.rs

//! Error types for flag name parsing.

use alloc::string::{String, ToString};
use core::fmt;

/// A name that no declared flag carries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownFlagName {
    /// The name that wasn't recognized.
    pub name: String,
}

impl UnknownFlagName {
    pub(crate) fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
        }
    }
}

impl fmt::Display for UnknownFlagName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown flag name '{}'", self.name)
    }
}

impl core::error::Error for UnknownFlagName {}
