// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Error type for serialization.
//!
//! Malformed directives never fail: unknown names, broken parentheses and
//! absent attributes all degrade silently. The variants below come from
//! collaborators the engine calls out to, or from values serde_json cannot
//! represent.

use thiserror::Error;

/// Failure raised while producing output.
#[derive(Debug, Error)]
pub enum Error {
    /// The router has no route registered under this name.
    #[error("unknown route `{route}`")]
    UnknownRoute {
        /// Route name requested by a descriptor.
        route: String
    },

    /// A required path parameter had no value.
    #[error("route `{route}` requires parameter `{param}`")]
    MissingParameter {
        /// Route being assembled.
        route: String,
        /// Parameter without a value.
        param: String
    },

    /// An attribute value could not be converted to JSON.
    #[error("attribute value is not representable as JSON: {0}")]
    Serialize(#[from] serde_json::Error),

    /// A custom router or handler failed.
    #[error(transparent)]
    Handler(Box<dyn std::error::Error + Send + Sync>)
}

impl Error {
    /// Wrap an arbitrary collaborator error.
    pub fn handler<E>(err: E) -> Self
    where
        E: Into<Box<dyn std::error::Error + Send + Sync>>
    {
        Self::Handler(err.into())
    }

    /// Check if this error came from route assembly.
    pub const fn is_route(&self) -> bool {
        matches!(self, Self::UnknownRoute { .. } | Self::MissingParameter { .. })
    }
}
