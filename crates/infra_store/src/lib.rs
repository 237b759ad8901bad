//! Storage Layer
//!
//! Implements the `RecordStore` port from `core_kernel` with in-memory,
//! lock-protected collections, and provides the demo data the API server
//! starts with.
//!
//! # Example
//!
//! ```rust,ignore
//! use infra_store::Stores;
//! use core_kernel::RecordStore;
//!
//! let stores = Stores::seeded(today)?;
//! let entries = stores.time_entries.by_claim("CLM-2024-001234").await;
//! ```

pub mod memory;
pub mod seed;
pub mod stores;

pub use memory::InMemoryStore;
pub use seed::SeedData;
pub use stores::{Sequence, Stores};
