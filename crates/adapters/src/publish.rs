// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Delivery of [`Broadcast`]s to whoever is listening.

use parking_lot::Mutex;
use std::io::{self, Write};
use std::sync::Arc;
use thiserror::Error;
use turno_core::Broadcast;

/// Errors from publish operations
#[derive(Debug, Error)]
pub enum PublishError {
    #[error("failed to encode {event} broadcast: {source}")]
    Encode {
        event: String,
        #[source]
        source: serde_json::Error,
    },
    #[error("failed to write broadcast: {0}")]
    Io(#[from] io::Error),
}

/// Adapter for pushing state changes to connected displays
pub trait Publisher: Clone + Send + Sync + 'static {
    /// Deliver one broadcast to every listener
    fn publish(&self, broadcast: &Broadcast) -> Result<(), PublishError>;
}

/// Publisher that drops everything.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoopPublisher;

impl Publisher for NoopPublisher {
    fn publish(&self, broadcast: &Broadcast) -> Result<(), PublishError> {
        tracing::trace!(event = %broadcast, "dropping broadcast");
        Ok(())
    }
}

/// Writes each broadcast as one line of JSON, `{"event": ..., "data": ...}`.
pub struct JsonLinesPublisher<W> {
    out: Arc<Mutex<W>>,
}

impl<W> Clone for JsonLinesPublisher<W> {
    fn clone(&self) -> Self {
        Self { out: Arc::clone(&self.out) }
    }
}

impl<W: Write + Send + 'static> JsonLinesPublisher<W> {
    pub fn new(out: W) -> Self {
        Self { out: Arc::new(Mutex::new(out)) }
    }

    /// Run `f` against the underlying writer
    pub fn inspect<R>(&self, f: impl FnOnce(&W) -> R) -> R {
        f(&self.out.lock())
    }
}

impl JsonLinesPublisher<io::Stderr> {
    pub fn stderr() -> Self {
        Self::new(io::stderr())
    }
}

impl<W: Write + Send + 'static> Publisher for JsonLinesPublisher<W> {
    fn publish(&self, broadcast: &Broadcast) -> Result<(), PublishError> {
        let mut line = serde_json::to_vec(broadcast)
            .map_err(|source| PublishError::Encode { event: broadcast.to_string(), source })?;
        line.push(b'\n');

        // One write per line keeps lines whole across clones
        let mut out = self.out.lock();
        out.write_all(&line)?;
        out.flush()?;
        Ok(())
    }
}

#[cfg(any(test, feature = "test-support"))]
#[cfg_attr(coverage_nightly, coverage(off))]
mod fake {
    use super::{PublishError, Publisher};
    use parking_lot::Mutex;
    use std::io;
    use std::sync::Arc;
    use turno_core::Broadcast;

    /// Recorded publish attempt
    #[derive(Debug, Clone, PartialEq, Eq)]
    pub struct PublishCall {
        pub broadcast: Broadcast,
    }

    struct FakePublisherState {
        calls: Vec<PublishCall>,
        failing: bool,
    }

    /// Fake publisher for testing
    #[derive(Clone)]
    pub struct FakePublisher {
        inner: Arc<Mutex<FakePublisherState>>,
    }

    impl Default for FakePublisher {
        fn default() -> Self {
            Self {
                inner: Arc::new(Mutex::new(FakePublisherState { calls: Vec::new(), failing: false })),
            }
        }
    }

    impl FakePublisher {
        pub fn new() -> Self {
            Self::default()
        }

        /// Make every later publish fail (the attempt is still recorded)
        pub fn set_failing(&self, failing: bool) {
            self.inner.lock().failing = failing;
        }

        /// Get all recorded broadcasts
        pub fn calls(&self) -> Vec<PublishCall> {
            self.inner.lock().calls.clone()
        }

        pub fn broadcasts(&self) -> Vec<Broadcast> {
            self.inner.lock().calls.iter().map(|c| c.broadcast.clone()).collect()
        }

        pub fn clear(&self) {
            self.inner.lock().calls.clear();
        }
    }

    impl Publisher for FakePublisher {
        fn publish(&self, broadcast: &Broadcast) -> Result<(), PublishError> {
            let mut inner = self.inner.lock();
            inner.calls.push(PublishCall { broadcast: broadcast.clone() });
            if inner.failing {
                return Err(PublishError::Io(io::Error::new(
                    io::ErrorKind::BrokenPipe,
                    "listener went away",
                )));
            }
            Ok(())
        }
    }
}

#[cfg(any(test, feature = "test-support"))]
pub use fake::{FakePublisher, PublishCall};

#[cfg(test)]
#[path = "publish_tests.rs"]
mod tests;
