//! Types exposed by the token transaction-processing core as part of
//! transaction execution and queries.
//!
//! Wire encodings and persistence formats are intentionally not defined
//! here; transport and storage are external collaborators and consume
//! these types through their own serialization layers.

pub mod entities;
pub mod primitives;
pub mod query;
pub mod response_code;
pub mod transaction;
