//! Transaction bodies: the tagged union of operations the core executes.
//!
//! Entity-reference fields are optional, mirroring their optionality on
//! the wire; a handler treats a missing reference as the corresponding
//! `INVALID_*_ID` business rejection, not as a caller bug.

use crate::primitives::{AccountId, TokenId};

/// The kind of a transaction, used by dispatch to select a handler.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash)]
pub enum TransactionKind {
    TokenMint,
    TokenBurn,
    TokenFreeze,
    TokenUnfreeze,
    TokenPause,
    TokenUnpause,
    TokenAirdrop,
    /// Retired operation; kept so old transactions keep a stable outcome.
    AddLiveHash,
    /// Retired operation; kept so old transactions keep a stable outcome.
    DeleteLiveHash,
}

/// Supply change (mint or burn) against a token's treasury.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct SupplyChange {
    /// The token whose supply is changed.
    pub token: Option<TokenId>,
    /// The unscaled amount to mint or burn.
    pub amount: u64,
}

/// Freeze or unfreeze a single account's relation to a token.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct RelationFreeze {
    /// The token whose relation is toggled.
    pub token: Option<TokenId>,
    /// The account whose relation is toggled.
    pub account: Option<AccountId>,
}

/// Pause or unpause all balance-affecting operations on a token.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct TokenPause {
    /// The token to pause or unpause.
    pub token: Option<TokenId>,
}

/// A single balance adjustment within a transfer list. Negative amounts
/// debit the account, positive amounts credit it.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct AccountAmount {
    /// The adjusted account.
    pub account: Option<AccountId>,
    /// The signed unscaled amount.
    pub amount: i64,
}

/// Balance movements of one token within an airdrop.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct TokenTransferList {
    /// The moved token.
    pub token: Option<TokenId>,
    /// The individual adjustments; must sum to zero.
    pub transfers: Vec<AccountAmount>,
}

/// Airdrop: token transfers where receivers are associated on demand.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct TokenAirdrop {
    /// One transfer list per moved token.
    pub transfers: Vec<TokenTransferList>,
}

/// Attach a live hash to an account. Retired.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct LiveHashChange {
    /// The account the live hash is attached to or removed from.
    pub account: Option<AccountId>,
    /// The hash bytes.
    pub hash: Vec<u8>,
}

/// The operation-specific payload of a transaction, keyed by operation
/// kind. New operation kinds are added as new variants, never by
/// extending existing ones.
#[derive(Debug, Clone, Eq, PartialEq)]
pub enum TransactionBody {
    TokenMint(SupplyChange),
    TokenBurn(SupplyChange),
    TokenFreeze(RelationFreeze),
    TokenUnfreeze(RelationFreeze),
    TokenPause(TokenPause),
    TokenUnpause(TokenPause),
    TokenAirdrop(TokenAirdrop),
    AddLiveHash(LiveHashChange),
    DeleteLiveHash(LiveHashChange),
}

impl TransactionBody {
    /// The operation kind of this body, the dispatch discriminant.
    pub fn kind(&self) -> TransactionKind {
        match self {
            TransactionBody::TokenMint(_) => TransactionKind::TokenMint,
            TransactionBody::TokenBurn(_) => TransactionKind::TokenBurn,
            TransactionBody::TokenFreeze(_) => TransactionKind::TokenFreeze,
            TransactionBody::TokenUnfreeze(_) => TransactionKind::TokenUnfreeze,
            TransactionBody::TokenPause(_) => TransactionKind::TokenPause,
            TransactionBody::TokenUnpause(_) => TransactionKind::TokenUnpause,
            TransactionBody::TokenAirdrop(_) => TransactionKind::TokenAirdrop,
            TransactionBody::AddLiveHash(_) => TransactionKind::AddLiveHash,
            TransactionBody::DeleteLiveHash(_) => TransactionKind::DeleteLiveHash,
        }
    }
}
