// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

mod events;
mod help;
mod persistence;
mod queue;
mod transfer;
