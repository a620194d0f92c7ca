// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;
use serde_json::json;

#[test]
fn waiting_ticket_serializes_with_null_desk() {
    let value = serde_json::to_value(Ticket::waiting(7)).unwrap();
    assert_eq!(value, json!({"numero": 7, "escritorio": null}));
}

#[test]
fn served_ticket_serializes_desk() {
    let value = serde_json::to_value(Ticket::served(3, "A")).unwrap();
    assert_eq!(value, json!({"numero": 3, "escritorio": "A"}));
}

#[test]
fn missing_desk_deserializes_as_waiting() {
    let ticket: Ticket = serde_json::from_value(json!({"numero": 12})).unwrap();
    assert_eq!(ticket, Ticket::waiting(12));
    assert!(!ticket.is_served());
}

#[yare::parameterized(
    waiting = { Ticket::waiting(4),       "#4" },
    served  = { Ticket::served(9, "Caja 2"), "#9 @ Caja 2" },
)]
fn display(ticket: Ticket, expected: &str) {
    assert_eq!(ticket.to_string(), expected);
}
