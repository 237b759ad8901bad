//! In-memory record store
//!
//! The `InMemoryStore` keeps one collection in insertion order behind a
//! `tokio::sync::RwLock`. Readers clone what they need and release the lock
//! before any filtering or aggregation happens; writers hold the write lock
//! for the whole read-modify-write so concurrent updates are linearized.
//!
//! # Indexes
//!
//! Positions are indexed by record id, claim number and adjuster id. The
//! indexes are rebuilt after every mutation, which keeps them trivially
//! consistent with the vector at the cost of an O(n) pass per write.
//!
//! # Example
//!
//! ```rust,ignore
//! use infra_store::InMemoryStore;
//! use core_kernel::RecordStore;
//!
//! let store: InMemoryStore<TimeEntry> = InMemoryStore::new("time-entries");
//! store.append(entry).await?;
//! let on_claim = store.by_claim("CLM-2024-001234").await;
//! ```

use std::collections::HashMap;

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;
use tracing::{debug, instrument};

use core_kernel::{
    AdapterHealth, BulkMutator, DomainPort, HealthCheckResult, HealthCheckable, PortError, Record,
    RecordMutator, RecordStore, RemoveGuard,
};

/// Records plus their position indexes
#[derive(Debug)]
struct Collection<T> {
    records: Vec<T>,
    by_id: HashMap<String, usize>,
    by_claim: HashMap<String, Vec<usize>>,
    by_adjuster: HashMap<String, Vec<usize>>,
}

impl<T: Record> Collection<T> {
    fn empty() -> Self {
        Self {
            records: Vec::new(),
            by_id: HashMap::new(),
            by_claim: HashMap::new(),
            by_adjuster: HashMap::new(),
        }
    }

    fn reindex(&mut self) {
        self.by_id.clear();
        self.by_claim.clear();
        self.by_adjuster.clear();

        for (pos, record) in self.records.iter().enumerate() {
            self.by_id.insert(record.record_id().to_string(), pos);
            if let Some(claim) = record.claim_number() {
                self.by_claim.entry(claim.to_string()).or_default().push(pos);
            }
            if let Some(adjuster) = record.adjuster_id() {
                self.by_adjuster.entry(adjuster.to_string()).or_default().push(pos);
            }
        }
    }

    fn position(&self, id: &str) -> Result<usize, PortError> {
        self.by_id
            .get(id)
            .copied()
            .ok_or_else(|| PortError::not_found(T::ENTITY, id))
    }

    fn collect(&self, positions: Option<&Vec<usize>>) -> Vec<T> {
        positions
            .map(|ps| ps.iter().map(|&p| self.records[p].clone()).collect())
            .unwrap_or_default()
    }
}

/// Ordered, indexed, lock-protected collection of one record type
#[derive(Debug)]
pub struct InMemoryStore<T: Record> {
    name: &'static str,
    inner: RwLock<Collection<T>>,
}

impl<T: Record> InMemoryStore<T> {
    /// Creates an empty store
    ///
    /// `name` identifies the store in logs and health checks.
    pub fn new(name: &'static str) -> Self {
        Self {
            name,
            inner: RwLock::new(Collection::empty()),
        }
    }

    /// Creates a store holding `records` in the given order
    ///
    /// Fails with `Conflict` on the first duplicate id.
    pub fn with_records(name: &'static str, records: Vec<T>) -> Result<Self, PortError> {
        let mut collection = Collection::empty();
        for record in records {
            if collection.by_id.contains_key(record.record_id()) {
                return Err(duplicate::<T>(record.record_id()));
            }
            collection.by_id.insert(record.record_id().to_string(), collection.records.len());
            collection.records.push(record);
        }
        collection.reindex();

        Ok(Self {
            name,
            inner: RwLock::new(collection),
        })
    }

    /// Store name used in logs and health checks
    pub fn name(&self) -> &'static str {
        self.name
    }
}

fn duplicate<T: Record>(id: &str) -> PortError {
    PortError::conflict(format!("{} {} already exists", T::ENTITY, id))
}

impl<T: Record> DomainPort for InMemoryStore<T> {}

#[async_trait]
impl<T: Record> RecordStore<T> for InMemoryStore<T> {
    async fn snapshot(&self) -> Vec<T> {
        self.inner.read().await.records.clone()
    }

    async fn get(&self, id: &str) -> Result<T, PortError> {
        let collection = self.inner.read().await;
        let pos = collection.position(id)?;
        Ok(collection.records[pos].clone())
    }

    async fn by_claim(&self, claim_number: &str) -> Vec<T> {
        let collection = self.inner.read().await;
        collection.collect(collection.by_claim.get(claim_number))
    }

    async fn by_adjuster(&self, adjuster_id: &str) -> Vec<T> {
        let collection = self.inner.read().await;
        collection.collect(collection.by_adjuster.get(adjuster_id))
    }

    #[instrument(skip(self, record), fields(store = self.name, id = record.record_id()))]
    async fn append(&self, record: T) -> Result<T, PortError> {
        let mut collection = self.inner.write().await;
        if collection.by_id.contains_key(record.record_id()) {
            return Err(duplicate::<T>(record.record_id()));
        }
        collection.records.push(record.clone());
        collection.reindex();
        debug!(records = collection.records.len(), "record appended");
        Ok(record)
    }

    #[instrument(skip(self, record), fields(store = self.name, id = record.record_id()))]
    async fn replace(&self, record: T) -> Result<T, PortError> {
        let mut collection = self.inner.write().await;
        let pos = collection.position(record.record_id())?;
        collection.records[pos] = record.clone();
        collection.reindex();
        debug!("record replaced");
        Ok(record)
    }

    #[instrument(skip(self, mutator), fields(store = self.name))]
    async fn update_with(&self, id: &str, mutator: RecordMutator<T>) -> Result<T, PortError> {
        let mut collection = self.inner.write().await;
        let pos = collection.position(id)?;

        // Mutate a copy so a failing mutator leaves the stored record as it was
        let mut updated = collection.records[pos].clone();
        mutator(&mut updated)?;

        collection.records[pos] = updated.clone();
        collection.reindex();
        debug!("record updated");
        Ok(updated)
    }

    #[instrument(skip(self, ids, mutator), fields(store = self.name, requested = ids.len()))]
    async fn update_many(&self, ids: &[String], mutator: BulkMutator<T>) -> Vec<T> {
        let mut collection = self.inner.write().await;
        let mut changed = Vec::new();

        for id in ids {
            let Some(&pos) = collection.by_id.get(id.as_str()) else {
                debug!(%id, "skipping unknown id");
                continue;
            };
            if mutator(&mut collection.records[pos]) {
                changed.push(collection.records[pos].clone());
            }
        }

        if !changed.is_empty() {
            collection.reindex();
        }
        debug!(changed = changed.len(), "bulk update applied");
        changed
    }

    #[instrument(skip(self), fields(store = self.name))]
    async fn remove(&self, id: &str) -> Result<T, PortError> {
        let mut collection = self.inner.write().await;
        let pos = collection.position(id)?;
        let removed = collection.records.remove(pos);
        collection.reindex();
        debug!("record removed");
        Ok(removed)
    }

    #[instrument(skip(self, guard), fields(store = self.name))]
    async fn remove_if(
        &self,
        id: &str,
        guard: RemoveGuard<T>,
    ) -> Result<T, PortError> {
        let mut collection = self.inner.write().await;
        let pos = collection.position(id)?;
        guard(&collection.records[pos])?;
        let removed = collection.records.remove(pos);
        collection.reindex();
        debug!("record removed");
        Ok(removed)
    }

    async fn len(&self) -> usize {
        self.inner.read().await.records.len()
    }
}

#[async_trait]
impl<T: Record> HealthCheckable for InMemoryStore<T> {
    async fn health_check(&self) -> HealthCheckResult {
        let collection = self.inner.read().await;
        let consistent = collection.by_id.len() == collection.records.len();

        HealthCheckResult {
            adapter_id: format!("in-memory-{}", self.name),
            status: if consistent {
                AdapterHealth::Healthy
            } else {
                AdapterHealth::Degraded
            },
            records: collection.records.len(),
            message: (!consistent).then(|| "id index out of step with records".to_string()),
            checked_at: Utc::now(),
        }
    }
}
