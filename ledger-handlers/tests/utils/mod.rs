//! Shared fixtures for handler integration tests.
#![allow(dead_code)]

use ledger_state::MemoryState;
use ledger_types::entities::{Account, Token, TokenRelation};
use ledger_types::primitives::{AccountId, Key, TokenAmount, TokenId};

pub const PAYER: AccountId = AccountId(1);
pub const TREASURY: AccountId = AccountId(2);
pub const HOLDER: AccountId = AccountId(3);
pub const TOKEN: TokenId = TokenId(1001);

pub const PAYER_KEY: Key = Key([0xA1; 32]);
pub const TREASURY_KEY: Key = Key([0xA2; 32]);
pub const HOLDER_KEY: Key = Key([0xA3; 32]);
pub const FREEZE_KEY: Key = Key([0xF1; 32]);
pub const PAUSE_KEY: Key = Key([0xF2; 32]);
pub const SUPPLY_KEY: Key = Key([0xF3; 32]);

/// State with the payer, treasury and holder accounts but no tokens.
pub fn base_state() -> MemoryState {
    MemoryState::new()
        .with_account(Account::new(PAYER, PAYER_KEY))
        .with_account(Account::new(TREASURY, TREASURY_KEY))
        .with_account(Account::new(HOLDER, HOLDER_KEY))
}

/// A token with every administrative key configured and its treasury
/// relation holding `supply`.
pub fn token_with_all_keys(supply: u64) -> Token {
    Token {
        freeze_key: Some(FREEZE_KEY),
        pause_key: Some(PAUSE_KEY),
        supply_key: Some(SUPPLY_KEY),
        total_supply: TokenAmount(supply),
        ..Token::new(TOKEN, TREASURY)
    }
}

/// The treasury's relation to [`TOKEN`] with the given balance.
pub fn treasury_relation(balance: u64) -> TokenRelation {
    TokenRelation {
        balance: TokenAmount(balance),
        ..TokenRelation::new(TREASURY, TOKEN)
    }
}

/// [`base_state`] plus a fully keyed token and its treasury relation,
/// the common starting point of the happy-path scenarios.
pub fn state_with_token(supply: u64) -> MemoryState {
    base_state()
        .with_token(token_with_all_keys(supply))
        .with_relation(treasury_relation(supply))
}
