//! Capability traits for reading and writing ledger state.
//!
//! Each entity namespace gets its own read-only trait and a read-write
//! extension of it. Read views never mutate. Write views stage
//! mutations that are visible to subsequent reads through the same view
//! within one handle invocation; whether and when they become durable
//! is the caller's commit decision (see [`crate::buffered`]).

use ledger_types::entities::{Account, Token, TokenRelation};
use ledger_types::primitives::{AccountId, TokenId};

/// Read-only view over all three entity namespaces, the shape handlers
/// consume during pre-handle and query serving.
pub trait ReadableState:
    ReadableTokenStore + ReadableAccountStore + ReadableTokenRelationStore
{
}

impl<T: ReadableTokenStore + ReadableAccountStore + ReadableTokenRelationStore> ReadableState for T {}

/// Read-write view over all three entity namespaces, exclusively owned
/// by the in-progress handle invocation.
pub trait WritableState:
    WritableTokenStore + WritableAccountStore + WritableTokenRelationStore
{
}

impl<T: WritableTokenStore + WritableAccountStore + WritableTokenRelationStore> WritableState for T {}

/// Read-only view over the token namespace.
pub trait ReadableTokenStore {
    /// Look up a token by identifier. `None` when no such token exists.
    fn get_token(&self, token_id: TokenId) -> Option<Token>;
}

/// Read-write view over the token namespace.
pub trait WritableTokenStore: ReadableTokenStore {
    /// Stage a token under its own identifier, replacing any previous
    /// entry.
    fn put_token(&mut self, token: Token);
}

/// Read-only view over the account namespace.
pub trait ReadableAccountStore {
    /// Look up an account by identifier. `None` when no such account
    /// exists.
    fn get_account(&self, account_id: AccountId) -> Option<Account>;
}

/// Read-write view over the account namespace.
pub trait WritableAccountStore: ReadableAccountStore {
    /// Stage an account under its own identifier, replacing any previous
    /// entry.
    fn put_account(&mut self, account: Account);
}

/// Read-only view over the token-relation namespace, keyed by the
/// (account, token) pair.
pub trait ReadableTokenRelationStore {
    /// Look up the relation between an account and a token. `None` when
    /// the account is not associated with the token.
    fn get_relation(&self, account_id: AccountId, token_id: TokenId) -> Option<TokenRelation>;
}

/// Read-write view over the token-relation namespace.
pub trait WritableTokenRelationStore: ReadableTokenRelationStore {
    /// Stage a relation under its (account, token) key, replacing any
    /// previous entry.
    fn put_relation(&mut self, relation: TokenRelation);
}
