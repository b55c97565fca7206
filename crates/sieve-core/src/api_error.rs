// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Describable error responses.
//!
//! Request handlers return [`ApiError`] for failures a client should see.
//! [`Serializer::respond`](crate::Serializer::respond) serializes it like any
//! other object and reports its HTTP status.
//!
//! # Output
//!
//! ```json
//! {
//!   "code": "40610",
//!   "status": 406,
//!   "message": "Unknown Error",
//!   "developer_message": "ApiError: Unknown Error"
//! }
//! ```

use std::sync::LazyLock;

use thiserror::Error;

use crate::{Accessors, Describable, Descriptor, Field};

/// Status used when none is given.
pub const DEFAULT_STATUS: u16 = 406;

/// Message used when none is given.
pub const DEFAULT_MESSAGE: &str = "Unknown Error";

static API_ERROR: LazyLock<Descriptor> = LazyLock::new(|| {
    Descriptor::new("code").attributes(["status", "message", "developer_message"])
});

static API_ERROR_FIELDS: LazyLock<Accessors<ApiError>> = LazyLock::new(|| {
    Accessors::<ApiError>::new()
        .with("code", |e| Field::scalar(&e.code()))
        .with("status", |e| Field::scalar(&e.status))
        .with("message", |e| Field::scalar(&e.message))
        .with("developer_message", |e| Field::scalar(&e.developer_text()))
});

/// Error object returned to API clients.
///
/// # Example
///
/// ```rust
/// use sieve_core::ApiError;
///
/// let err = ApiError::new("01")
///     .kind("RestError")
///     .message("You broke it")
///     .developer_message("Invalid index supplied");
///
/// assert_eq!(err.code(), "40601");
/// assert_eq!(err.developer_text(), "RestError: Invalid index supplied");
/// assert_eq!(err.to_string(), "You broke it");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct ApiError {
    code:      String,
    status:    u16,
    message:   String,
    kind:      String,
    developer: Option<String>
}

impl ApiError {
    /// Error with application code `code` and default status and message.
    pub fn new(code: impl Into<String>) -> Self {
        Self {
            code:      code.into(),
            status:    DEFAULT_STATUS,
            message:   DEFAULT_MESSAGE.to_string(),
            kind:      "ApiError".to_string(),
            developer: None
        }
    }

    /// Set the HTTP status.
    #[must_use]
    pub const fn status_code(mut self, status: u16) -> Self {
        self.status = status;
        self
    }

    /// Set the client-facing message.
    #[must_use]
    pub fn message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self
    }

    /// Set the developer-facing detail.
    #[must_use]
    pub fn developer_message(mut self, message: impl Into<String>) -> Self {
        self.developer = Some(message.into());
        self
    }

    /// Set the error kind shown in the developer message.
    #[must_use]
    pub fn kind(mut self, kind: impl Into<String>) -> Self {
        self.kind = kind.into();
        self
    }

    /// HTTP status.
    pub const fn status(&self) -> u16 {
        self.status
    }

    /// Status followed by the application code.
    pub fn code(&self) -> String {
        format!("{}{}", self.status, self.code)
    }

    /// Client-facing message.
    pub fn message_text(&self) -> &str {
        &self.message
    }

    /// Kind followed by the developer detail, or the message without one.
    pub fn developer_text(&self) -> String {
        let detail = self.developer.as_deref().unwrap_or(&self.message);
        format!("{}: {}", self.kind, detail)
    }
}

impl Describable for ApiError {
    fn descriptor(&self) -> &Descriptor {
        &API_ERROR
    }

    fn field(&self, name: &str) -> Option<Field<'_>> {
        API_ERROR_FIELDS.get(self, name)
    }

    fn type_name(&self) -> &'static str {
        "ApiError"
    }
}
