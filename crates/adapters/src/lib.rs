// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! turno-adapters: outbound channels for queue broadcasts

pub mod publish;

pub use publish::{JsonLinesPublisher, NoopPublisher, PublishError, Publisher};

#[cfg(any(test, feature = "test-support"))]
pub use publish::{FakePublisher, PublishCall};
