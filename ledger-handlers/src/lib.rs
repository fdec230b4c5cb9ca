//! Transaction and query handlers of the token transaction-processing
//! core.
//!
//! Every transaction passes through two phases. Pre-handle runs before
//! consensus ordering over a read-only snapshot: it derives the set of
//! signing keys a transaction requires and records early business-rule
//! failures on a [`context::PreHandleContext`]. Handle runs after
//! ordering, strictly one transaction at a time, and applies the state
//! mutation through writable stores. Both phases are deterministic for
//! a fixed transaction body and state snapshot, since every replica
//! repeats them independently.
//!
//! Business-rule failures are typed
//! [`Rejection`](ledger_types::response_code::Rejection)s carrying
//! stable response codes. Caller bugs (dispatching a handler with a
//! body of the wrong kind, constructing a response for a retired query)
//! are contract violations and panic.

pub mod context;
pub mod dispatch;
pub mod execution;
pub mod handlers;
pub mod queries;
pub mod validation;
