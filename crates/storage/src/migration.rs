// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Upgrades for older snapshot formats.
//!
//! Migrations only run during load, and only for documents that are not
//! already in the current format. Each migration recognises its own source
//! format and rewrites the document in place into the current one.

use chrono::{Datelike, NaiveDate};
use serde_json::Value;
use thiserror::Error;
use tracing::info;
use turno_core::field;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MigrationError {
    #[error("{0}: document is not an object")]
    NotAnObject(&'static str),
    #[error("legacy snapshot is not from today (day-of-month {day_of_month}, modified {modified:?})")]
    StaleLegacy { day_of_month: String, modified: Option<NaiveDate> },
}

/// What a migration may consult besides the document itself
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MigrationContext {
    pub today: NaiveDate,
    /// Local date of the file's last modification
    pub modified_on: Option<NaiveDate>,
}

pub trait Migration: Send + Sync {
    fn name(&self) -> &'static str;
    /// Whether `doc` is in this migration's source format
    fn detect(&self, doc: &Value) -> bool;
    fn migrate(&self, doc: &mut Value, ctx: &MigrationContext) -> Result<(), MigrationError>;
}

pub struct MigrationRegistry {
    pub(crate) migrations: Vec<Box<dyn Migration>>,
}

impl Default for MigrationRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl MigrationRegistry {
    pub fn new() -> Self {
        Self { migrations: vec![Box::new(LegacyDayOfMonth)] }
    }

    /// Apply the first migration that recognises `doc`.
    ///
    /// Returns `Ok(None)` when no migration applies.
    pub fn migrate(
        &self,
        mut doc: Value,
        ctx: &MigrationContext,
    ) -> Result<Option<Value>, MigrationError> {
        let Some(migration) = self.migrations.iter().find(|m| m.detect(&doc)) else {
            return Ok(None);
        };
        migration.migrate(&mut doc, ctx)?;
        info!(migration = migration.name(), "migrated snapshot to current format");
        Ok(Some(doc))
    }
}

/// The first snapshot format stamped data with a bare day-of-month (`hoy`).
///
/// Such a file is only trusted when it was last written today and its
/// day-of-month matches today's; otherwise it may be a month old.
pub struct LegacyDayOfMonth;

impl Migration for LegacyDayOfMonth {
    fn name(&self) -> &'static str {
        "legacy-day-of-month"
    }

    fn detect(&self, doc: &Value) -> bool {
        doc.get(field::LEGACY_DAY).is_some_and(Value::is_number)
            && !doc.get(field::DATE).is_some_and(Value::is_string)
    }

    fn migrate(&self, doc: &mut Value, ctx: &MigrationContext) -> Result<(), MigrationError> {
        let obj = doc.as_object_mut().ok_or(MigrationError::NotAnObject(self.name()))?;

        let day_of_month = obj.get(field::LEGACY_DAY).and_then(Value::as_f64);
        let same_day = day_of_month == Some(f64::from(ctx.today.day()));
        if !same_day || ctx.modified_on != Some(ctx.today) {
            return Err(MigrationError::StaleLegacy {
                day_of_month: obj.get(field::LEGACY_DAY).map(Value::to_string).unwrap_or_default(),
                modified: ctx.modified_on,
            });
        }

        obj.remove(field::LEGACY_DAY);
        obj.insert(field::DATE.into(), ctx.today.format("%Y-%m-%d").to_string().into());
        Ok(())
    }
}

#[cfg(test)]
#[path = "migration_tests.rs"]
mod tests;
