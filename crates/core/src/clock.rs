// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Clock abstraction for testable day handling

use chrono::{DateTime, Days, Local, NaiveDate};
use parking_lot::Mutex;
use std::sync::Arc;
use std::time::SystemTime;

/// A source of the local calendar date
pub trait Clock: Clone + Send + Sync {
    /// Today's date in local time
    fn today(&self) -> NaiveDate;

    /// Local calendar date of a filesystem timestamp
    fn local_date_of(&self, time: SystemTime) -> NaiveDate {
        DateTime::<Local>::from(time).date_naive()
    }
}

/// Real system clock
#[derive(Clone, Copy, Debug, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> NaiveDate {
        Local::now().date_naive()
    }
}

/// Fake clock for testing with a controllable date
#[derive(Clone, Debug)]
pub struct FakeClock {
    today: Arc<Mutex<NaiveDate>>,
}

impl FakeClock {
    pub fn new(today: NaiveDate) -> Self {
        Self { today: Arc::new(Mutex::new(today)) }
    }

    /// Set the current date
    pub fn set_today(&self, today: NaiveDate) {
        *self.today.lock() = today;
    }

    /// Move the clock forward by whole days
    pub fn advance_days(&self, days: u64) {
        let mut today = self.today.lock();
        if let Some(next) = today.checked_add_days(Days::new(days)) {
            *today = next;
        }
    }
}

impl Default for FakeClock {
    fn default() -> Self {
        Self::new(NaiveDate::from_ymd_opt(2026, 1, 15).unwrap_or_default())
    }
}

impl Clock for FakeClock {
    fn today(&self) -> NaiveDate {
        *self.today.lock()
    }
}

#[cfg(test)]
#[path = "clock_tests.rs"]
mod tests;
