//! Optimistic write actions
//!
//! Each action mutates the store first, using temporary ids for records the
//! record API hasn't confirmed yet, then performs the remote write. On
//! failure the store is put back to the snapshot taken before the mutation
//! and the caller receives [`ActionOutcome::RolledBack`]. Multi-row writes
//! (spouse pairs) are all-or-nothing from the caller's point of view: rows
//! already written remotely are compensated before rolling back.
//!
//! Rollback re-installs the pre-mutation snapshot, so actions are expected to
//! run one at a time per store.

use crate::algorithm::planner::{PayloadRequest, build_relationship_payloads};
use crate::config::GraphConfig;
use crate::error::{FamilyError, Result};
use crate::models::person::{NewPerson, Person, PersonId};
use crate::models::relationship::{Relationship, RelationshipId, RelationshipPayload};
use crate::models::snapshot::Snapshot;
use crate::store::FamilyStore;
use log::{debug, warn};
use std::sync::Arc;
use std::sync::atomic::{AtomicI64, Ordering};

/// The remote record API the actions write through
pub trait RecordApi {
    /// Fetch every person and relationship
    fn fetch_snapshot(&self) -> Result<Snapshot>;

    /// Create a person; the API assigns the id
    fn create_person(&self, person: &NewPerson) -> Result<Person>;

    /// Update an existing person
    fn update_person(&self, person: &Person) -> Result<Person>;

    /// Delete a person (and, remotely, their relationships)
    fn delete_person(&self, person_id: PersonId) -> Result<()>;

    /// Create one relationship row; the API assigns the id
    fn create_relationship(&self, payload: &RelationshipPayload) -> Result<Relationship>;

    /// Delete one relationship row
    fn delete_relationship(&self, relationship_id: &RelationshipId) -> Result<()>;
}

/// Result of an optimistic action
#[derive(Debug)]
pub enum ActionOutcome<T> {
    /// The remote write succeeded and the store holds the confirmed records
    Committed(T),
    /// The remote write failed and the store was restored
    RolledBack {
        /// Why the write failed
        error: FamilyError,
        /// Snapshot the store now holds
        restored: Arc<Snapshot>,
    },
}

impl<T> ActionOutcome<T> {
    /// Whether the action was committed
    #[must_use]
    pub const fn is_committed(&self) -> bool {
        matches!(self, Self::Committed(_))
    }

    /// The committed value, if any
    #[must_use]
    pub fn committed(self) -> Option<T> {
        match self {
            Self::Committed(value) => Some(value),
            Self::RolledBack { .. } => None,
        }
    }

    /// Convert into a `Result`, discarding the restored snapshot
    pub fn into_result(self) -> Result<T> {
        match self {
            Self::Committed(value) => Ok(value),
            Self::RolledBack { error, .. } => Err(error),
        }
    }
}

/// Optimistic write actions over a store and a record API
pub struct FamilyActions<'a, A: RecordApi> {
    store: &'a FamilyStore,
    api: &'a A,
    config: GraphConfig,
    temp_counter: AtomicI64,
}

impl<'a, A: RecordApi> FamilyActions<'a, A> {
    /// Create actions with the default configuration
    #[must_use]
    pub fn new(store: &'a FamilyStore, api: &'a A) -> Self {
        Self::with_config(store, api, GraphConfig::default())
    }

    /// Create actions with a specific configuration
    #[must_use]
    pub fn with_config(store: &'a FamilyStore, api: &'a A, config: GraphConfig) -> Self {
        Self {
            store,
            api,
            config,
            temp_counter: AtomicI64::new(0),
        }
    }

    /// Replace the store's records with the API's current ones
    pub fn refresh(&self) -> Result<bool> {
        let snapshot = self.api.fetch_snapshot()?;
        self.store.replace(snapshot)
    }

    /// Create a person, shown locally under a negative temporary id until confirmed
    pub fn create_person(&self, person: NewPerson) -> Result<ActionOutcome<Person>> {
        let temp_id = -self.next_temp();
        let local = person.clone().into_person(temp_id);
        let previous = self.store.update(|snapshot| snapshot.people.push(local))?;

        match self.api.create_person(&person) {
            Ok(saved) => {
                let confirmed = saved.clone();
                self.store.update(|snapshot| {
                    if let Some(slot) = snapshot.people.iter_mut().find(|p| p.id == temp_id) {
                        *slot = confirmed;
                    }
                })?;
                Ok(ActionOutcome::Committed(saved))
            }
            Err(error) => self.roll_back(previous, error),
        }
    }

    /// Update a person's attributes
    pub fn update_person(&self, person: Person) -> Result<ActionOutcome<Person>> {
        let local = person.clone();
        let previous = self.store.update(|snapshot| {
            if let Some(slot) = snapshot.people.iter_mut().find(|p| p.id == local.id) {
                *slot = local;
            }
        })?;

        match self.api.update_person(&person) {
            Ok(saved) => {
                let confirmed = saved.clone();
                self.store.update(|snapshot| {
                    if let Some(slot) = snapshot.people.iter_mut().find(|p| p.id == confirmed.id) {
                        *slot = confirmed;
                    }
                })?;
                Ok(ActionOutcome::Committed(saved))
            }
            Err(error) => self.roll_back(previous, error),
        }
    }

    /// Delete a person together with every relationship touching them
    pub fn delete_person(&self, person_id: PersonId) -> Result<ActionOutcome<()>> {
        let previous = self
            .store
            .update(|snapshot| *snapshot = snapshot.without_person(person_id))?;

        match self.api.delete_person(person_id) {
            Ok(()) => Ok(ActionOutcome::Committed(())),
            Err(error) => self.roll_back(previous, error),
        }
    }

    /// Plan and create the rows for a relationship request.
    ///
    /// Invalid requests are returned as errors before anything is written.
    pub fn add_relationship(
        &self,
        request: &PayloadRequest,
    ) -> Result<ActionOutcome<Vec<Relationship>>> {
        let payloads = build_relationship_payloads(request)?;
        self.add_relationships(payloads)
    }

    /// Create a set of rows as one unit
    pub fn add_relationships(
        &self,
        payloads: Vec<RelationshipPayload>,
    ) -> Result<ActionOutcome<Vec<Relationship>>> {
        if payloads.is_empty() {
            return Ok(ActionOutcome::Committed(Vec::new()));
        }

        let temps: Vec<Relationship> = payloads
            .iter()
            .map(|payload| payload.clone().into_relationship(self.next_temp_relationship_id()))
            .collect();
        let local = temps.clone();
        let previous = self
            .store
            .update(|snapshot| snapshot.relationships.extend(local))?;

        let mut confirmed: Vec<Relationship> = Vec::with_capacity(payloads.len());
        for payload in &payloads {
            match self.api.create_relationship(payload) {
                Ok(saved) => confirmed.push(saved),
                Err(error) => {
                    self.compensate_created(&confirmed);
                    return self.roll_back(previous, error);
                }
            }
        }

        let replacements = confirmed.clone();
        self.store.update(|snapshot| {
            for (temp, saved) in temps.iter().zip(replacements) {
                if let Some(slot) = snapshot.relationships.iter_mut().find(|r| r.id == temp.id) {
                    *slot = saved;
                }
            }
        })?;

        Ok(ActionOutcome::Committed(confirmed))
    }

    /// Delete a relationship row. Deleting either row of a spouse pair
    /// deletes both.
    pub fn delete_relationship(
        &self,
        relationship_id: &RelationshipId,
    ) -> Result<ActionOutcome<Vec<RelationshipId>>> {
        let index = self.store.index()?;
        let Some(row) = index.relationships().iter().find(|r| &r.id == relationship_id) else {
            debug!("Relationship {relationship_id} is not in the local snapshot");
            return match self.api.delete_relationship(relationship_id) {
                Ok(()) => Ok(ActionOutcome::Committed(vec![relationship_id.clone()])),
                Err(error) => Ok(ActionOutcome::RolledBack {
                    error,
                    restored: self.store.snapshot()?,
                }),
            };
        };

        let rows: Vec<Relationship> = if row.kind.is_spouse() {
            index
                .spouse_edges_between(row.person1_id, row.person2_id)
                .into_iter()
                .cloned()
                .collect()
        } else {
            vec![row.clone()]
        };
        drop(index);

        let ids: Vec<RelationshipId> = rows.iter().map(|r| r.id.clone()).collect();
        let previous = self
            .store
            .update(|snapshot| snapshot.relationships.retain(|r| !ids.contains(&r.id)))?;

        let mut deleted: Vec<&Relationship> = Vec::with_capacity(rows.len());
        for row in &rows {
            if let Err(error) = self.api.delete_relationship(&row.id) {
                let restored = self.recreate_deleted(previous, &deleted);
                return self.roll_back(restored, error);
            }
            deleted.push(row);
        }

        Ok(ActionOutcome::Committed(ids))
    }

    fn roll_back<T>(
        &self,
        previous: Arc<Snapshot>,
        error: FamilyError,
    ) -> Result<ActionOutcome<T>> {
        warn!("Rolling back optimistic update: {error}");
        self.store.restore(Arc::clone(&previous))?;
        Ok(ActionOutcome::RolledBack {
            error,
            restored: previous,
        })
    }

    /// Undo remote creations of a partially written unit
    fn compensate_created(&self, created: &[Relationship]) {
        for row in created {
            if let Err(e) = self.api.delete_relationship(&row.id) {
                warn!("Failed to remove relationship {} after partial write: {e}", row.id);
            }
        }
    }

    /// Re-create rows already deleted remotely and point the rollback
    /// snapshot at their new ids
    fn recreate_deleted(
        &self,
        previous: Arc<Snapshot>,
        deleted: &[&Relationship],
    ) -> Arc<Snapshot> {
        if deleted.is_empty() {
            return previous;
        }

        let mut restored = Snapshot::clone(&previous);
        for row in deleted {
            let payload = RelationshipPayload {
                person1_id: row.person1_id,
                person2_id: row.person2_id,
                kind: row.kind.clone(),
            };
            match self.api.create_relationship(&payload) {
                Ok(saved) => {
                    if let Some(slot) = restored.relationships.iter_mut().find(|r| r.id == row.id) {
                        *slot = saved;
                    }
                }
                Err(e) => warn!(
                    "Failed to restore relationship {} after partial delete: {e}",
                    row.id
                ),
            }
        }
        Arc::new(restored)
    }

    fn next_temp(&self) -> i64 {
        self.temp_counter.fetch_add(1, Ordering::SeqCst) + 1
    }

    fn next_temp_relationship_id(&self) -> RelationshipId {
        RelationshipId::Text(format!("{}{}", self.config.temp_id_prefix, self.next_temp()))
    }
}
