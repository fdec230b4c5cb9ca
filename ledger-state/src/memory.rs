//! In-memory ledger state.
//!
//! Implements every store capability over plain hash maps. This is the
//! state used by tests and by embeddings that keep the whole ledger in
//! memory; durable backends implement the same traits elsewhere.

use std::collections::HashMap;

use ledger_types::entities::{Account, Token, TokenRelation};
use ledger_types::primitives::{AccountId, TokenId};

use crate::store::{
    ReadableAccountStore, ReadableTokenRelationStore, ReadableTokenStore, WritableAccountStore,
    WritableTokenRelationStore, WritableTokenStore,
};

/// Hash-map backed ledger state covering all three entity namespaces.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemoryState {
    tokens: HashMap<TokenId, Token>,
    accounts: HashMap<AccountId, Account>,
    relations: HashMap<(AccountId, TokenId), TokenRelation>,
}

impl MemoryState {
    /// Empty state with no tokens, accounts or relations.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insertion of a token, for fixtures.
    pub fn with_token(mut self, token: Token) -> Self {
        self.put_token(token);
        self
    }

    /// Builder-style insertion of an account, for fixtures.
    pub fn with_account(mut self, account: Account) -> Self {
        self.put_account(account);
        self
    }

    /// Builder-style insertion of a relation, for fixtures.
    pub fn with_relation(mut self, relation: TokenRelation) -> Self {
        self.put_relation(relation);
        self
    }
}

impl ReadableTokenStore for MemoryState {
    fn get_token(&self, token_id: TokenId) -> Option<Token> {
        self.tokens.get(&token_id).cloned()
    }
}

impl WritableTokenStore for MemoryState {
    fn put_token(&mut self, token: Token) {
        self.tokens.insert(token.token_id, token);
    }
}

impl ReadableAccountStore for MemoryState {
    fn get_account(&self, account_id: AccountId) -> Option<Account> {
        self.accounts.get(&account_id).cloned()
    }
}

impl WritableAccountStore for MemoryState {
    fn put_account(&mut self, account: Account) {
        self.accounts.insert(account.account_id, account);
    }
}

impl ReadableTokenRelationStore for MemoryState {
    fn get_relation(&self, account_id: AccountId, token_id: TokenId) -> Option<TokenRelation> {
        self.relations.get(&(account_id, token_id)).cloned()
    }
}

impl WritableTokenRelationStore for MemoryState {
    fn put_relation(&mut self, relation: TokenRelation) {
        self.relations
            .insert((relation.account_id, relation.token_id), relation);
    }
}
