// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Ticket: a numbered queue entry

use serde::{Deserialize, Serialize};
use std::fmt;

/// A queue entry identified by its sequential number.
///
/// `desk` is `None` while the ticket is waiting and set once it is served.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Ticket {
    #[serde(rename = "numero")]
    pub number: u64,
    #[serde(rename = "escritorio", default)]
    pub desk: Option<String>,
}

impl Ticket {
    /// A freshly issued, not yet served ticket
    pub fn waiting(number: u64) -> Self {
        Self { number, desk: None }
    }

    pub fn served(number: u64, desk: impl Into<String>) -> Self {
        Self { number, desk: Some(desk.into()) }
    }

    pub fn is_served(&self) -> bool {
        self.desk.is_some()
    }
}

impl fmt::Display for Ticket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.desk {
            Some(desk) => write!(f, "#{} @ {}", self.number, desk),
            None => write!(f, "#{}", self.number),
        }
    }
}

#[cfg(test)]
#[path = "ticket_tests.rs"]
mod tests;
