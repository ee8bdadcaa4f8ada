//! The record store.
//!
//! `Store` is the single owner of the reptile and entry collections. Every
//! creation is persisted before it is acknowledged: the record is appended,
//! the whole owning collection is saved, and the append is undone if the
//! save fails.

use crate::clock::{Clock, SystemClock};
use crate::error::{RepticareError, Result};
use crate::stats::{compute_stats, Stats};
use crate::storage::{
    CollectionKey, Entry, EntryId, EntryType, Persistence, Reptile, ReptileId,
};

pub struct Store<P: Persistence, C: Clock = SystemClock> {
    persistence: P,
    clock: C,
    reptiles: Vec<Reptile>,
    entries: Vec<Entry>,
}

impl<P: Persistence> Store<P, SystemClock> {
    /// Load both collections from `persistence`.
    ///
    /// # Errors
    ///
    /// Returns `RepticareError::PersistenceCorrupt` if either stored collection
    /// fails to parse. Corrupt data is never replaced with an empty collection.
    pub fn open(persistence: P) -> Result<Self> {
        Self::with_clock(persistence, SystemClock)
    }
}

impl<P: Persistence, C: Clock> Store<P, C> {
    /// Like [`Store::open`], stamping new entries with `clock`.
    pub fn with_clock(persistence: P, clock: C) -> Result<Self> {
        let reptiles: Vec<Reptile> = persistence
            .load(CollectionKey::Reptiles)?
            .unwrap_or_default();
        let entries: Vec<Entry> = persistence
            .load(CollectionKey::Entries)?
            .unwrap_or_default();

        tracing::debug!(
            reptiles = reptiles.len(),
            entries = entries.len(),
            "store opened"
        );

        Ok(Self {
            persistence,
            clock,
            reptiles,
            entries,
        })
    }

    /// Register a new reptile.
    ///
    /// # Errors
    ///
    /// Returns `RepticareError::Validation` if `name` is empty after trimming,
    /// or `RepticareError::PersistenceWrite` if the collection cannot be saved.
    pub fn add_reptile(&mut self, name: &str) -> Result<Reptile> {
        let name = name.trim();
        if name.is_empty() {
            return Err(RepticareError::Validation(
                "Reptile name must not be empty".to_string(),
            ));
        }

        let reptile = Reptile {
            id: self.fresh_reptile_id(),
            name: name.to_string(),
        };

        self.reptiles.push(reptile.clone());
        if let Err(err) = self
            .persistence
            .save(CollectionKey::Reptiles, &self.reptiles)
        {
            self.reptiles.pop();
            tracing::warn!(error = %err, "reptile not saved; rolled back");
            return Err(err);
        }

        tracing::info!(id = %reptile.id, name = %reptile.name, "reptile added");
        Ok(reptile)
    }

    /// Log a new event for `reptile_id`, stamped with the current time.
    ///
    /// Notes are trimmed; whitespace-only notes are dropped.
    ///
    /// # Errors
    ///
    /// Returns `RepticareError::Validation` if no reptile has `reptile_id`,
    /// or `RepticareError::PersistenceWrite` if the collection cannot be saved.
    pub fn add_entry(
        &mut self,
        reptile_id: &ReptileId,
        entry_type: EntryType,
        notes: Option<&str>,
    ) -> Result<Entry> {
        if self.reptile(reptile_id).is_none() {
            return Err(RepticareError::Validation(format!(
                "Unknown reptile id: {}",
                reptile_id
            )));
        }

        let notes = notes
            .map(str::trim)
            .filter(|n| !n.is_empty())
            .map(str::to_string);

        let entry = Entry {
            id: self.fresh_entry_id(),
            reptile_id: reptile_id.clone(),
            entry_type,
            timestamp: self.clock.now(),
            notes,
        };

        self.entries.push(entry.clone());
        if let Err(err) = self.persistence.save(CollectionKey::Entries, &self.entries) {
            self.entries.pop();
            tracing::warn!(error = %err, "entry not saved; rolled back");
            return Err(err);
        }

        tracing::info!(
            id = %entry.id,
            reptile = %entry.reptile_id,
            entry_type = %entry.entry_type,
            "entry added"
        );
        Ok(entry)
    }

    /// All reptiles in insertion order.
    pub fn reptiles(&self) -> &[Reptile] {
        &self.reptiles
    }

    pub fn reptile(&self, id: &ReptileId) -> Option<&Reptile> {
        self.reptiles.iter().find(|r| &r.id == id)
    }

    /// Resolve a reptile by exact id, falling back to a case-insensitive name match.
    pub fn find_reptile(&self, query: &str) -> Option<&Reptile> {
        let query = query.trim();
        self.reptiles
            .iter()
            .find(|r| r.id.as_str() == query)
            .or_else(|| {
                self.reptiles
                    .iter()
                    .find(|r| r.name.to_lowercase() == query.to_lowercase())
            })
    }

    /// Like [`Store::find_reptile`], but a miss is an error.
    ///
    /// # Errors
    ///
    /// Returns `RepticareError::NotFound` if nothing matches `query`.
    pub fn require_reptile(&self, query: &str) -> Result<&Reptile> {
        self.find_reptile(query)
            .ok_or_else(|| RepticareError::NotFound(format!("No reptile matches \"{}\"", query)))
    }

    pub fn reptile_count(&self) -> usize {
        self.reptiles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.reptiles.is_empty()
    }

    /// Entries for `reptile_id`, most recent first.
    ///
    /// Entries sharing a timestamp keep their insertion order.
    pub fn entries_for(&self, reptile_id: &ReptileId) -> Vec<Entry> {
        let mut entries: Vec<Entry> = self
            .entries
            .iter()
            .filter(|e| &e.reptile_id == reptile_id)
            .cloned()
            .collect();
        entries.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));
        entries
    }

    /// Stats over the entries of `reptile_id`, or `None` if it has no history.
    pub fn stats_for(&self, reptile_id: &ReptileId) -> Option<Stats> {
        compute_stats(&self.entries_for(reptile_id))
    }

    pub fn persistence(&self) -> &P {
        &self.persistence
    }

    fn fresh_reptile_id(&self) -> ReptileId {
        loop {
            let id = ReptileId::generate();
            if self.reptile(&id).is_none() {
                return id;
            }
        }
    }

    fn fresh_entry_id(&self) -> EntryId {
        loop {
            let id = EntryId::generate();
            if !self.entries.iter().any(|e| e.id == id) {
                return id;
            }
        }
    }
}
