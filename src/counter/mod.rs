//! Daily comanda numbering.
//!
//! One counter per calendar day, kept in a [`KeyValueStore`] under
//! `comanda-counter-YYYY-MM-DD`. The first ticket of a day is 1.
//!
//! # Concurrency
//!
//! `next_number` is a plain read-modify-write. Two processes sharing the same
//! backing file can hand out the same number. Inside one process, route all
//! numbering through the [`desk`](crate::desk) actor, which serializes it.

pub mod storage;

pub use storage::*;

use chrono::NaiveDate;
use tracing::{debug, error, warn};

const KEY_PREFIX: &str = "comanda-counter-";

/// Per-day monotonic ticket counter over an injected store.
#[derive(Debug)]
pub struct SequenceCounter<S: KeyValueStore> {
    store: S,
}

impl<S: KeyValueStore> SequenceCounter<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Storage key for `date`.
    pub fn date_key(date: NaiveDate) -> String {
        format!("{}{}", KEY_PREFIX, date.format("%Y-%m-%d"))
    }

    /// Last number handed out for `date`, 0 if none yet.
    pub fn current(&self, date: NaiveDate) -> u64 {
        let key = Self::date_key(date);
        match self.store.get(&key) {
            None => 0,
            Some(raw) => raw.trim().parse().unwrap_or_else(|_| {
                warn!(key = %key, value = %raw, "Corrupted counter value, reading as 0");
                0
            }),
        }
    }

    /// Increments and persists the counter for `date`, returning the new value.
    pub fn next_number(&mut self, date: NaiveDate) -> u64 {
        let key = Self::date_key(date);
        let current = self.current(date);
        let next = current.checked_add(1).unwrap_or_else(|| {
            error!(key = %key, "Daily counter exhausted, repeating the last number");
            current
        });
        self.store.set(&key, next.to_string());
        debug!(key = %key, number = next, "Issued daily number");
        next
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn into_store(self) -> S {
        self.store
    }
}
