//! Buffered write overlay giving a handle invocation exclusive staged
//! mutations over a read-only base.
//!
//! Mutations are visible to reads through the overlay itself, so a
//! handler sees its own writes, but the base state is untouched until
//! the staged mutations are taken out of the overlay and applied in one
//! step. Dropping the overlay discards the staging area, which is how a
//! rejected transaction leaves no trace.

use std::collections::HashMap;

use ledger_types::entities::{Account, Token, TokenRelation};
use ledger_types::primitives::{AccountId, TokenId};

use crate::store::{
    ReadableAccountStore, ReadableTokenRelationStore, ReadableTokenStore, WritableAccountStore,
    WritableState, WritableTokenRelationStore, WritableTokenStore,
};

/// A staged read-write view over a read-only base state.
#[derive(Debug)]
pub struct BufferedState<'a, S> {
    base: &'a S,
    staged: StagedMutations,
}

impl<'a, S> BufferedState<'a, S> {
    /// A fresh overlay with nothing staged.
    pub fn new(base: &'a S) -> Self {
        BufferedState {
            base,
            staged: StagedMutations::default(),
        }
    }

    /// Whether any mutation has been staged.
    pub fn is_dirty(&self) -> bool {
        !self.staged.is_empty()
    }

    /// Take the staged mutations out of the overlay, releasing the
    /// borrow of the base. The result is applied to durable state with
    /// [`StagedMutations::apply`] on a successful outcome, or simply
    /// dropped on a rejection.
    pub fn into_mutations(self) -> StagedMutations {
        self.staged
    }
}

/// The complete set of mutations one transaction's handle phase staged.
#[derive(Debug, Clone, Default)]
pub struct StagedMutations {
    tokens: HashMap<TokenId, Token>,
    accounts: HashMap<AccountId, Account>,
    relations: HashMap<(AccountId, TokenId), TokenRelation>,
}

impl StagedMutations {
    /// Whether nothing was staged.
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty() && self.accounts.is_empty() && self.relations.is_empty()
    }

    /// Apply every staged entry to `target`. The transaction's
    /// mutations become visible all at once; a rejected transaction
    /// never reaches this point.
    pub fn apply(self, target: &mut impl WritableState) {
        for (_, token) in self.tokens {
            target.put_token(token);
        }
        for (_, account) in self.accounts {
            target.put_account(account);
        }
        for (_, relation) in self.relations {
            target.put_relation(relation);
        }
    }
}

impl<S: ReadableTokenStore> ReadableTokenStore for BufferedState<'_, S> {
    fn get_token(&self, token_id: TokenId) -> Option<Token> {
        self.staged
            .tokens
            .get(&token_id)
            .cloned()
            .or_else(|| self.base.get_token(token_id))
    }
}

impl<S: ReadableTokenStore> WritableTokenStore for BufferedState<'_, S> {
    fn put_token(&mut self, token: Token) {
        self.staged.tokens.insert(token.token_id, token);
    }
}

impl<S: ReadableAccountStore> ReadableAccountStore for BufferedState<'_, S> {
    fn get_account(&self, account_id: AccountId) -> Option<Account> {
        self.staged
            .accounts
            .get(&account_id)
            .cloned()
            .or_else(|| self.base.get_account(account_id))
    }
}

impl<S: ReadableAccountStore> WritableAccountStore for BufferedState<'_, S> {
    fn put_account(&mut self, account: Account) {
        self.staged.accounts.insert(account.account_id, account);
    }
}

impl<S: ReadableTokenRelationStore> ReadableTokenRelationStore for BufferedState<'_, S> {
    fn get_relation(&self, account_id: AccountId, token_id: TokenId) -> Option<TokenRelation> {
        self.staged
            .relations
            .get(&(account_id, token_id))
            .cloned()
            .or_else(|| self.base.get_relation(account_id, token_id))
    }
}

impl<S: ReadableTokenRelationStore> WritableTokenRelationStore for BufferedState<'_, S> {
    fn put_relation(&mut self, relation: TokenRelation) {
        self.staged
            .relations
            .insert((relation.account_id, relation.token_id), relation);
    }
}
