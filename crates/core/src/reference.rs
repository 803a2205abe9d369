// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `<name>@<version>` squid references

use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Errors from parsing a squid reference
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ReferenceError {
    #[error("'{0}' is missing a version, expected <name>@<version>")]
    MissingVersion(String),
    #[error("'{0}' contains more than one '@', expected <name>@<version>")]
    TooManySeparators(String),
    #[error("'{0}' has an empty squid name")]
    EmptyName(String),
    #[error("'{0}' has an empty version")]
    EmptyVersion(String),
}

/// Squid name and version, validated before any polling starts
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SquidRef {
    pub name: String,
    pub version: String,
}

impl SquidRef {
    pub fn parse(input: &str) -> Result<Self, ReferenceError> {
        let mut parts = input.split('@');
        let (name, version) = match (parts.next(), parts.next(), parts.next()) {
            (Some(name), Some(version), None) => (name.trim(), version.trim()),
            (_, None, _) => return Err(ReferenceError::MissingVersion(input.to_string())),
            _ => return Err(ReferenceError::TooManySeparators(input.to_string())),
        };

        if name.is_empty() {
            return Err(ReferenceError::EmptyName(input.to_string()));
        }
        if version.is_empty() {
            return Err(ReferenceError::EmptyVersion(input.to_string()));
        }

        Ok(Self {
            name: name.to_string(),
            version: version.to_string(),
        })
    }
}

impl FromStr for SquidRef {
    type Err = ReferenceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for SquidRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}@{}", self.name, self.version)
    }
}
