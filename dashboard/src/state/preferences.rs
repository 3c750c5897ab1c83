// Two-valued preferences (period aggregation mode, volume unit) persisted per key.
//
// Instances that share a key share state only through storage: each one restores
// from storage when it is created and writes on every toggle.

use std::rc::Rc;

use shared::models::{BinaryChoice, PeriodMode, VolumeUnit};

use crate::services::storage::{PreferenceStorage, StorageError};

/// How the initial value of a [`PersistedToggle`] was obtained.
#[derive(Debug)]
pub enum RestoreOutcome {
    /// A valid literal was found in storage.
    Restored,
    /// Nothing stored under the key; the default is used.
    Missing,
    /// The stored literal is not a member of the choice; the default is used.
    Unrecognized(String),
    /// Storage could not be read; the default is used.
    Failed(StorageError),
}

impl RestoreOutcome {
    pub fn used_default(&self) -> bool {
        !matches!(self, RestoreOutcome::Restored)
    }
}

#[derive(Debug)]
pub struct PersistedToggle<T: BinaryChoice> {
    key: String,
    value: T,
    storage: Rc<dyn PreferenceStorage>,
    restore_outcome: RestoreOutcome,
}

pub type PeriodModePreference = PersistedToggle<PeriodMode>;
pub type VolumeUnitPreference = PersistedToggle<VolumeUnit>;

pub fn period_mode_key(scope: &str) -> String {
    format!("period-mode-{scope}")
}

pub fn volume_unit_key(scope: &str) -> String {
    format!("volume-unit-{scope}")
}

impl<T: BinaryChoice> PersistedToggle<T> {
    /// Reads `key` from `storage`, falling back to `default` when the key is missing,
    /// holds an unknown literal, or cannot be read. Never fails.
    pub fn restore(key: impl Into<String>, default: T, storage: Rc<dyn PreferenceStorage>) -> Self {
        let key = key.into();
        let (value, restore_outcome) = match storage.get(&key) {
            Ok(Some(literal)) => match T::parse(&literal) {
                Some(value) => (value, RestoreOutcome::Restored),
                None => {
                    tracing::debug!(key = %key, literal = %literal, "Unrecognized stored preference, using default");
                    (default, RestoreOutcome::Unrecognized(literal))
                }
            },
            Ok(None) => (default, RestoreOutcome::Missing),
            Err(e) => {
                tracing::warn!(key = %key, error = %e, "Failed to read preference, using default");
                (default, RestoreOutcome::Failed(e))
            }
        };

        Self { key, value, storage, restore_outcome }
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn value(&self) -> T {
        self.value
    }

    pub fn restore_outcome(&self) -> &RestoreOutcome {
        &self.restore_outcome
    }

    /// Flips to the other member and writes it under the same key.
    ///
    /// The in-memory value changes even when the write fails; the error is logged
    /// and handed back so callers may surface it, but ignoring it is the normal policy.
    pub fn toggle(&mut self) -> Result<T, StorageError> {
        self.value = self.value.other();
        if let Err(e) = self.storage.set(&self.key, self.value.as_str()) {
            tracing::warn!(key = %self.key, value = self.value.as_str(), error = %e, "Failed to persist preference");
            return Err(e);
        }
        Ok(self.value)
    }
}
