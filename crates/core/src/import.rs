// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Validation of externally supplied snapshots.
//!
//! An import payload is untrusted JSON. [`ValidatedImport::parse`] checks the
//! whole payload and produces an immutable, typed record; nothing is applied to
//! a ledger unless every check passes.

use std::collections::HashSet;

use serde_json::{Map, Value};
use thiserror::Error;

use crate::field;
use crate::ledger::RECENT_SERVED_CAP;
use crate::ticket::Ticket;

/// Largest ticket number accepted from outside (2^53 - 1, exact in every JSON reader)
pub const MAX_TICKET_NUMBER: u64 = 9_007_199_254_740_991;

/// Client-correctable input errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("payload must be a JSON object")]
    NotAnObject,
    #[error("field \"ultimo\" is missing")]
    MissingLastIssued,
    #[error("field \"ultimo\" must be a whole number >= 0, got {0}")]
    InvalidLastIssued(String),
    #[error("field \"{0}\" must be an array")]
    NotAList(&'static str),
    #[error("{list}[{index}] is not a valid ticket: {fault}")]
    InvalidTicket {
        list: &'static str,
        index: usize,
        #[source]
        fault: TicketFault,
    },
    #[error("ticket {number} in \"{list}\" is above the last issued number {last_issued}")]
    TicketOutOfRange { list: &'static str, number: u64, last_issued: u64 },
    #[error("ticket {0} appears more than once")]
    DuplicateTicket(u64),
    #[error("desk must not be empty")]
    EmptyDesk,
}

/// Why a single ticket entry was rejected
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TicketFault {
    #[error("expected an object")]
    NotAnObject,
    #[error("missing \"numero\"")]
    MissingNumber,
    #[error("\"numero\" must be a positive whole number, got {0}")]
    BadNumber(String),
    #[error("\"escritorio\" must be a string or null, got {0}")]
    BadDesk(String),
}

/// A fully validated import, ready to replace a ledger.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidatedImport {
    last_issued: u64,
    waiting: Vec<Ticket>,
    recent_served: Vec<Ticket>,
}

impl ValidatedImport {
    /// Validate an untyped payload.
    ///
    /// Checks run in order and stop at the first violation:
    /// 1. the payload is an object
    /// 2. `ultimo` coerces to a whole number >= 0
    /// 3. `tickets` and `ultimos4` are arrays when present
    /// 4. every entry of both arrays is ticket-shaped
    /// 5. ticket numbers are within `1..=ultimo` and unique
    ///
    /// `ultimos4` entries beyond the history cap are discarded after validation.
    /// Any `date` in the payload is ignored.
    pub fn parse(payload: &Value) -> Result<Self, ValidationError> {
        let obj = payload.as_object().ok_or(ValidationError::NotAnObject)?;

        let last_issued = match obj.get(field::LAST_ISSUED) {
            Some(value) => coerce_count(value)
                .ok_or_else(|| ValidationError::InvalidLastIssued(value.to_string()))?,
            None => return Err(ValidationError::MissingLastIssued),
        };

        let waiting_raw = ticket_list(obj, field::WAITING)?;
        let recent_raw = ticket_list(obj, field::RECENT_SERVED)?;

        let waiting = parse_tickets(field::WAITING, waiting_raw)?;
        let mut recent_served = parse_tickets(field::RECENT_SERVED, recent_raw)?;
        recent_served.truncate(RECENT_SERVED_CAP);

        let mut seen = HashSet::new();
        let lists = [(field::WAITING, &waiting), (field::RECENT_SERVED, &recent_served)];
        for (list, tickets) in lists {
            for ticket in tickets.iter() {
                if ticket.number > last_issued {
                    return Err(ValidationError::TicketOutOfRange {
                        list,
                        number: ticket.number,
                        last_issued,
                    });
                }
                if !seen.insert(ticket.number) {
                    return Err(ValidationError::DuplicateTicket(ticket.number));
                }
            }
        }

        Ok(Self { last_issued, waiting, recent_served })
    }

    pub fn last_issued(&self) -> u64 {
        self.last_issued
    }

    pub fn waiting(&self) -> &[Ticket] {
        &self.waiting
    }

    pub fn recent_served(&self) -> &[Ticket] {
        &self.recent_served
    }

    pub fn into_parts(self) -> (u64, Vec<Ticket>, Vec<Ticket>) {
        (self.last_issued, self.waiting, self.recent_served)
    }
}

/// Coerce a JSON value to a ticket count the way loosely typed clients send it.
///
/// Numbers, numeric strings, `null` (0) and booleans (0/1) are accepted when the
/// result is a finite whole number in `0..=MAX_TICKET_NUMBER`.
pub fn coerce_count(value: &Value) -> Option<u64> {
    let n = match value {
        Value::Null => 0.0,
        Value::Bool(b) => f64::from(u8::from(*b)),
        Value::Number(n) => {
            if let Some(n) = n.as_u64() {
                return (n <= MAX_TICKET_NUMBER).then_some(n);
            }
            n.as_f64()?
        }
        Value::String(s) => {
            let s = s.trim();
            if s.is_empty() {
                0.0
            } else {
                s.parse::<f64>().ok()?
            }
        }
        Value::Array(_) | Value::Object(_) => return None,
    };
    whole_count(n)
}

/// Parse one ticket entry strictly: `numero` must be a JSON number.
pub fn parse_ticket(value: &Value) -> Result<Ticket, TicketFault> {
    let obj = value.as_object().ok_or(TicketFault::NotAnObject)?;

    let number = match obj.get(field::NUMBER) {
        Some(Value::Number(n)) => n
            .as_u64()
            .filter(|n| *n <= MAX_TICKET_NUMBER)
            .or_else(|| n.as_f64().and_then(whole_count))
            .filter(|n| *n > 0)
            .ok_or_else(|| TicketFault::BadNumber(n.to_string()))?,
        Some(other) => return Err(TicketFault::BadNumber(other.to_string())),
        None => return Err(TicketFault::MissingNumber),
    };

    let desk = match obj.get(field::DESK) {
        None | Some(Value::Null) => None,
        Some(Value::String(desk)) => Some(desk.clone()),
        Some(other) => return Err(TicketFault::BadDesk(other.to_string())),
    };

    Ok(Ticket { number, desk })
}

/// Reject an empty desk identifier; any other string is kept verbatim
pub fn validate_desk(desk: &str) -> Result<&str, ValidationError> {
    if desk.is_empty() {
        return Err(ValidationError::EmptyDesk);
    }
    Ok(desk)
}

fn whole_count(n: f64) -> Option<u64> {
    if n.is_finite() && n >= 0.0 && n.fract() == 0.0 && n <= MAX_TICKET_NUMBER as f64 {
        Some(n as u64)
    } else {
        None
    }
}

/// Absent and `null` lists are empty
fn ticket_list<'a>(
    obj: &'a Map<String, Value>,
    list: &'static str,
) -> Result<&'a [Value], ValidationError> {
    match obj.get(list) {
        None | Some(Value::Null) => Ok(&[]),
        Some(Value::Array(items)) => Ok(items),
        Some(_) => Err(ValidationError::NotAList(list)),
    }
}

fn parse_tickets(list: &'static str, items: &[Value]) -> Result<Vec<Ticket>, ValidationError> {
    items
        .iter()
        .enumerate()
        .map(|(index, item)| {
            parse_ticket(item).map_err(|fault| ValidationError::InvalidTicket { list, index, fault })
        })
        .collect()
}

#[cfg(test)]
#[path = "import_tests.rs"]
mod tests;
