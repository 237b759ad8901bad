//! Store port
//!
//! Domain code never touches storage directly. Handlers read cloned
//! snapshots through the `RecordStore` port and hand them to the pure
//! aggregation and filter functions; writes go back through the same port.
//!
//! ```text
//!   HTTP handler ──► RecordStore<T> ──► snapshot: Vec<T> ──► filter / aggregate
//!                          ▲
//!                          │ implemented by
//!                 ┌────────┴────────┐
//!                 │ InMemoryStore   │  (infra_store)
//!                 └─────────────────┘
//! ```
//!
//! Any implementation shared by concurrent request handlers must serialize
//! writers; `update_with` and `update_many` are the read-modify-write
//! primitives and must run under a single exclusive section.

use std::fmt;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Error type for port operations
#[derive(Debug, Error)]
pub enum PortError {
    /// The requested entity was not found
    #[error("Not found: {entity_type} with id {id}")]
    NotFound {
        entity_type: String,
        id: String,
    },

    /// A validation error occurred
    #[error("Validation error: {message}")]
    Validation {
        message: String,
        field: Option<String>,
    },

    /// The operation conflicts with existing data
    #[error("Conflict: {message}")]
    Conflict {
        message: String,
    },

    /// An internal error occurred
    #[error("Internal error: {message}")]
    Internal {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },
}

impl PortError {
    /// Creates a NotFound error
    pub fn not_found(entity_type: impl Into<String>, id: impl fmt::Display) -> Self {
        PortError::NotFound {
            entity_type: entity_type.into(),
            id: id.to_string(),
        }
    }

    /// Creates a Validation error
    pub fn validation(message: impl Into<String>) -> Self {
        PortError::Validation {
            message: message.into(),
            field: None,
        }
    }

    /// Creates a Validation error with field information
    pub fn validation_field(message: impl Into<String>, field: impl Into<String>) -> Self {
        PortError::Validation {
            message: message.into(),
            field: Some(field.into()),
        }
    }

    /// Creates a Conflict error
    pub fn conflict(message: impl Into<String>) -> Self {
        PortError::Conflict {
            message: message.into(),
        }
    }

    /// Creates an Internal error
    pub fn internal(message: impl Into<String>) -> Self {
        PortError::Internal {
            message: message.into(),
            source: None,
        }
    }

    /// Returns true if this error indicates the entity was not found
    pub fn is_not_found(&self) -> bool {
        matches!(self, PortError::NotFound { .. })
    }
}

/// Marker trait for all domain ports
///
/// All port traits extend this marker so they can be shared across
/// request handlers.
pub trait DomainPort: Send + Sync + 'static {}

/// A storable record
///
/// Every record has a unique string id. Records tied to a claim or an
/// adjuster expose those keys so stores can index them.
pub trait Record: Clone + Send + Sync + 'static {
    /// Human-readable entity name used in error messages
    const ENTITY: &'static str;

    /// Unique identifier of this record
    fn record_id(&self) -> &str;

    /// Claim number this record belongs to, if any
    fn claim_number(&self) -> Option<&str> {
        None
    }

    /// Adjuster this record belongs to, if any
    fn adjuster_id(&self) -> Option<&str> {
        None
    }
}

/// In-place mutation applied to a single record
///
/// Returning an error aborts the update and leaves the record untouched.
pub type RecordMutator<T> = Box<dyn FnOnce(&mut T) -> Result<(), PortError> + Send>;

/// Mutation applied to each record of a bulk update
///
/// Returns true when the record was changed.
pub type BulkMutator<T> = Box<dyn Fn(&mut T) -> bool + Send + Sync>;

/// Check run against the current record before it is removed
pub type RemoveGuard<T> = Box<dyn FnOnce(&T) -> Result<(), PortError> + Send>;

/// Ordered collection store for one record type
#[async_trait]
pub trait RecordStore<T: Record>: DomainPort {
    /// Returns every record in insertion order
    async fn snapshot(&self) -> Vec<T>;

    /// Returns the record with the given id
    async fn get(&self, id: &str) -> Result<T, PortError>;

    /// Returns every record belonging to a claim, in insertion order
    async fn by_claim(&self, claim_number: &str) -> Vec<T>;

    /// Returns every record belonging to an adjuster, in insertion order
    async fn by_adjuster(&self, adjuster_id: &str) -> Vec<T>;

    /// Appends a record; fails with `Conflict` when the id is taken
    async fn append(&self, record: T) -> Result<T, PortError>;

    /// Replaces the record that has the same id
    async fn replace(&self, record: T) -> Result<T, PortError>;

    /// Atomically mutates one record and returns its new state
    async fn update_with(&self, id: &str, mutator: RecordMutator<T>) -> Result<T, PortError>;

    /// Atomically mutates every listed record that exists; unknown ids are
    /// skipped. Returns the records the mutator reported as changed.
    async fn update_many(&self, ids: &[String], mutator: BulkMutator<T>) -> Vec<T>;

    /// Removes a record and returns it
    async fn remove(&self, id: &str) -> Result<T, PortError>;

    /// Removes a record only if `guard` accepts its current state
    async fn remove_if(
        &self,
        id: &str,
        guard: RemoveGuard<T>,
    ) -> Result<T, PortError>;

    /// Number of stored records
    async fn len(&self) -> usize;

    /// True when the store holds no records
    async fn is_empty(&self) -> bool {
        self.len().await == 0
    }
}

/// Health status for an adapter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AdapterHealth {
    /// Adapter is healthy and operational
    Healthy,
    /// Adapter is degraded but operational
    Degraded,
    /// Adapter is unhealthy and not operational
    Unhealthy,
}

/// Health check result for an adapter
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthCheckResult {
    /// Adapter identifier
    pub adapter_id: String,
    /// Current health status
    pub status: AdapterHealth,
    /// Number of records held by the adapter
    pub records: usize,
    /// Optional message with additional details
    pub message: Option<String>,
    /// Timestamp of the health check
    pub checked_at: chrono::DateTime<chrono::Utc>,
}

/// Trait for adapters that support health checks
#[async_trait]
pub trait HealthCheckable: Send + Sync {
    /// Performs a health check on the adapter
    async fn health_check(&self) -> HealthCheckResult;
}
