//! Memoized snapshot store
//!
//! `FamilyStore` owns the current people/relationship snapshot and lazily
//! derives its [`FamilyIndex`]. The index is rebuilt at most once per
//! revision no matter how many readers ask for it, and a revision is only
//! created when the records actually change. Subscribers are notified of new
//! revisions through a `tokio::sync::watch` channel and re-read on their own
//! schedule.

use crate::error::{FamilyError, Result};
use crate::models::collections::FamilyIndex;
use crate::models::person::Person;
use crate::models::relationship::Relationship;
use crate::models::snapshot::Snapshot;
use log::debug;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, RwLock};
use tokio::sync::watch;

#[derive(Debug)]
struct StoreState {
    snapshot: Arc<Snapshot>,
    revision: u64,
    derived: Option<Arc<FamilyIndex>>,
}

/// Holder of the current snapshot and its memoized index
#[derive(Debug)]
pub struct FamilyStore {
    state: RwLock<StoreState>,
    recomputations: AtomicUsize,
    revision_tx: watch::Sender<u64>,
}

impl Default for FamilyStore {
    fn default() -> Self {
        Self::new(Snapshot::default())
    }
}

impl FamilyStore {
    /// Create a store holding `snapshot` at revision 0
    #[must_use]
    pub fn new(snapshot: Snapshot) -> Self {
        let (revision_tx, _) = watch::channel(0);
        Self {
            state: RwLock::new(StoreState {
                snapshot: Arc::new(snapshot),
                revision: 0,
                derived: None,
            }),
            recomputations: AtomicUsize::new(0),
            revision_tx,
        }
    }

    /// Receive the revision number every time the records change
    #[must_use]
    pub fn subscribe(&self) -> watch::Receiver<u64> {
        self.revision_tx.subscribe()
    }

    /// Number of times the index has been built
    #[must_use]
    pub fn recompute_count(&self) -> usize {
        self.recomputations.load(Ordering::SeqCst)
    }

    /// Current revision number
    pub fn revision(&self) -> Result<u64> {
        Ok(self.read_state()?.revision)
    }

    /// Current snapshot
    pub fn snapshot(&self) -> Result<Arc<Snapshot>> {
        Ok(Arc::clone(&self.read_state()?.snapshot))
    }

    /// Index of the current snapshot, built on first access after a change
    pub fn index(&self) -> Result<Arc<FamilyIndex>> {
        if let Some(index) = &self.read_state()?.derived {
            return Ok(Arc::clone(index));
        }

        let mut state = self.write_state()?;
        // Another reader may have built it while we waited for the write lock
        if let Some(index) = &state.derived {
            return Ok(Arc::clone(index));
        }

        let index = Arc::new(FamilyIndex::new(Arc::clone(&state.snapshot)));
        self.recomputations.fetch_add(1, Ordering::SeqCst);
        debug!("Rebuilt family index for revision {}", state.revision);
        state.derived = Some(Arc::clone(&index));
        Ok(index)
    }

    /// Replace the whole snapshot. Returns whether anything changed.
    pub fn replace(&self, snapshot: Snapshot) -> Result<bool> {
        let mut state = self.write_state()?;
        if *state.snapshot == snapshot {
            return Ok(false);
        }
        self.install(&mut state, Arc::new(snapshot));
        Ok(true)
    }

    /// Replace the people collection. Returns whether anything changed.
    pub fn replace_people(&self, people: Vec<Person>) -> Result<bool> {
        let relationships = self.snapshot()?.relationships.clone();
        self.replace(Snapshot::new(people, relationships))
    }

    /// Replace the relationship collection. Returns whether anything changed.
    pub fn replace_relationships(&self, relationships: Vec<Relationship>) -> Result<bool> {
        let people = self.snapshot()?.people.clone();
        self.replace(Snapshot::new(people, relationships))
    }

    /// Apply `mutate` to a copy of the snapshot and install the result.
    ///
    /// Returns the snapshot as it was before the mutation, for rollback.
    pub fn update<F>(&self, mutate: F) -> Result<Arc<Snapshot>>
    where
        F: FnOnce(&mut Snapshot),
    {
        let mut state = self.write_state()?;
        let previous = Arc::clone(&state.snapshot);
        let mut next = Snapshot::clone(&previous);
        mutate(&mut next);
        if next != *previous {
            self.install(&mut state, Arc::new(next));
        }
        Ok(previous)
    }

    /// Put back a previously taken snapshot
    pub fn restore(&self, snapshot: Arc<Snapshot>) -> Result<()> {
        let mut state = self.write_state()?;
        if !Arc::ptr_eq(&state.snapshot, &snapshot) && *state.snapshot != *snapshot {
            self.install(&mut state, snapshot);
        }
        Ok(())
    }

    fn install(&self, state: &mut StoreState, snapshot: Arc<Snapshot>) {
        state.snapshot = snapshot;
        state.derived = None;
        state.revision += 1;
        self.revision_tx.send_replace(state.revision);
    }

    fn read_state(&self) -> Result<std::sync::RwLockReadGuard<'_, StoreState>> {
        self.state
            .read()
            .map_err(|_| {
                FamilyError::LockPoisoned("Failed to acquire read lock on store".to_string())
            })
    }

    fn write_state(&self) -> Result<std::sync::RwLockWriteGuard<'_, StoreState>> {
        self.state
            .write()
            .map_err(|_| {
                FamilyError::LockPoisoned("Failed to acquire write lock on store".to_string())
            })
    }
}
