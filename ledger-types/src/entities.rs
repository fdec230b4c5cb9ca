//! Ledger entities as seen by the transaction-processing core.
//!
//! Entities are owned by the ledger state; reads hand out snapshots and
//! mutations only happen through writable stores during the handle
//! phase of an authorized handler.

use crate::primitives::{AccountId, Key, TokenAmount, TokenId};

/// A token and its administrative configuration.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Token {
    /// Identifier of the token.
    pub token_id: TokenId,
    /// The account holding minted supply and funding burns.
    pub treasury: AccountId,
    /// Whether the token is deleted. Checked before `paused`, so a token
    /// that is somehow both always rejects as deleted.
    pub deleted: bool,
    /// Whether balance-affecting operations on the token are paused.
    pub paused: bool,
    /// Key authorizing freeze/unfreeze of individual relations.
    pub freeze_key: Option<Key>,
    /// Key authorizing pause/unpause of the token.
    pub pause_key: Option<Key>,
    /// Key authorizing supply changes (mint/burn).
    pub supply_key: Option<Key>,
    /// Key authorizing balance wipes.
    pub wipe_key: Option<Key>,
    /// Key authorizing KYC grants/revocations on relations.
    pub kyc_key: Option<Key>,
    /// Current total supply across all relations.
    pub total_supply: TokenAmount,
    /// Number of decimals in the presentation of token amounts.
    pub decimals: u8,
}

impl Token {
    /// A token with the given id and treasury and no administrative keys.
    pub fn new(token_id: TokenId, treasury: AccountId) -> Self {
        Token {
            token_id,
            treasury,
            deleted: false,
            paused: false,
            freeze_key: None,
            pause_key: None,
            supply_key: None,
            wipe_key: None,
            kyc_key: None,
            total_supply: TokenAmount::default(),
            decimals: 0,
        }
    }
}

/// An account on the ledger.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Account {
    /// Identifier of the account.
    pub account_id: AccountId,
    /// The account's signing key.
    pub key: Key,
    /// Native ledger balance of the account.
    pub balance: u64,
    /// Whether the account is deleted.
    pub deleted: bool,
}

impl Account {
    /// An undeleted account with a zero balance.
    pub fn new(account_id: AccountId, key: Key) -> Self {
        Account {
            account_id,
            key,
            balance: 0,
            deleted: false,
        }
    }
}

/// The per-account association record for a token: the many-to-many
/// relation between accounts and tokens.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct TokenRelation {
    /// The account side of the relation.
    pub account_id: AccountId,
    /// The token side of the relation.
    pub token_id: TokenId,
    /// Whether the account is frozen for this token.
    pub frozen: bool,
    /// Whether the account has been granted KYC for this token.
    pub kyc_granted: bool,
    /// The account's balance of this token.
    pub balance: TokenAmount,
}

impl TokenRelation {
    /// A fresh unfrozen relation with a zero balance.
    pub fn new(account_id: AccountId, token_id: TokenId) -> Self {
        TokenRelation {
            account_id,
            token_id,
            frozen: false,
            kyc_granted: false,
            balance: TokenAmount::default(),
        }
    }
}
