//! State-store abstraction consumed by the transaction handlers.
//!
//! State is exposed as per-namespace capability traits, split into
//! read-only and read-write halves: production code depends only on the
//! traits, and tests substitute the in-memory implementation without a
//! mocking framework. The [`buffered`] overlay gives the handle phase
//! its all-or-nothing visibility boundary.

pub mod buffered;
pub mod memory;
pub mod store;

pub use buffered::{BufferedState, StagedMutations};
pub use memory::MemoryState;
pub use store::{
    ReadableAccountStore, ReadableState, ReadableTokenRelationStore, ReadableTokenStore,
    WritableAccountStore, WritableState, WritableTokenRelationStore, WritableTokenStore,
};
