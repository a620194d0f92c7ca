// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Custom error type that carries a process exit code.
//!
//! Commands return `ExitError` instead of calling `std::process::exit()`
//! directly, allowing `main()` to handle process termination.

use std::fmt;

use turno_engine::ControlError;

/// The ledger could not be saved or a file could not be read or written
pub const EXIT_FAILURE: i32 = 1;
/// The request was rejected and nothing changed
pub const EXIT_INVALID: i32 = 2;

#[derive(Debug)]
pub struct ExitError {
    pub code: i32,
    pub message: String,
}

impl ExitError {
    pub fn new(code: i32, message: impl Into<String>) -> Self {
        Self { code, message: message.into() }
    }

    pub fn invalid(message: impl Into<String>) -> Self {
        Self::new(EXIT_INVALID, message)
    }
}

impl From<ControlError> for ExitError {
    fn from(e: ControlError) -> Self {
        match e {
            ControlError::Validation(e) => Self::invalid(format!("invalid input: {e}")),
            e @ (ControlError::Persistence(_) | ControlError::NumbersExhausted(_)) => {
                Self::new(EXIT_FAILURE, e.to_string())
            }
        }
    }
}

impl fmt::Display for ExitError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for ExitError {}

#[cfg(test)]
#[path = "exit_error_tests.rs"]
mod tests;
