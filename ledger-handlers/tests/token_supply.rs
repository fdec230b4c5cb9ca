//! Mint and burn scenarios.

use ledger_handlers::execution::{execute_transaction, pre_handle_transaction};
use ledger_state::{BufferedState, ReadableTokenRelationStore, ReadableTokenStore};
use ledger_types::entities::Token;
use ledger_types::primitives::TokenAmount;
use ledger_types::response_code::ResponseCode;
use ledger_types::transaction::{SupplyChange, TransactionBody};

use crate::utils::{state_with_token, token_with_all_keys, PAYER, SUPPLY_KEY, TOKEN, TREASURY};

mod utils;

fn mint_body(amount: u64) -> TransactionBody {
    TransactionBody::TokenMint(SupplyChange {
        token: Some(TOKEN),
        amount,
    })
}

fn burn_body(amount: u64) -> TransactionBody {
    TransactionBody::TokenBurn(SupplyChange {
        token: Some(TOKEN),
        amount,
    })
}

/// Mint against a token with a supply key requires exactly that key.
#[test]
fn test_mint_pre_handle_requires_supply_key() {
    let state = state_with_token(0);

    let context = pre_handle_transaction(&mint_body(100), PAYER, &state);

    assert!(!context.failed());
    assert_eq!(context.required_keys(), &[SUPPLY_KEY]);
}

/// Mint and burn against a token with no supply key succeed with an
/// empty non-payer key set: no signature beyond the payer's is needed.
#[test]
fn test_supply_change_without_supply_key() {
    let token = Token {
        supply_key: None,
        ..token_with_all_keys(0)
    };
    let state = utils::base_state()
        .with_token(token)
        .with_relation(utils::treasury_relation(0));

    let context = pre_handle_transaction(&mint_body(100), PAYER, &state);
    assert!(!context.failed());
    assert!(context.required_keys().is_empty());

    let context = pre_handle_transaction(&burn_body(100), PAYER, &state);
    assert!(!context.failed());
    assert!(context.required_keys().is_empty());
}

/// Handle adjusts the total supply and the treasury relation balance.
#[test]
fn test_mint_then_burn_handle() {
    let mut state = state_with_token(0);

    let context = pre_handle_transaction(&mint_body(1000), PAYER, &state);
    let mut staged = BufferedState::new(&state);
    let outcome = execute_transaction(&context, &mint_body(1000), &mut staged);
    assert!(outcome.succeeded());
    staged.into_mutations().apply(&mut state);

    assert_eq!(
        state.get_token(TOKEN).unwrap().total_supply,
        TokenAmount(1000)
    );
    assert_eq!(
        state.get_relation(TREASURY, TOKEN).unwrap().balance,
        TokenAmount(1000)
    );

    let context = pre_handle_transaction(&burn_body(400), PAYER, &state);
    let mut staged = BufferedState::new(&state);
    let outcome = execute_transaction(&context, &burn_body(400), &mut staged);
    assert!(outcome.succeeded());
    staged.into_mutations().apply(&mut state);

    assert_eq!(
        state.get_token(TOKEN).unwrap().total_supply,
        TokenAmount(600)
    );
    assert_eq!(
        state.get_relation(TREASURY, TOKEN).unwrap().balance,
        TokenAmount(600)
    );
}

/// Zero amounts reject with the operation's own amount code.
#[test]
fn test_zero_amounts_reject() {
    let state = state_with_token(100);

    let context = pre_handle_transaction(&mint_body(0), PAYER, &state);
    let mut staged = BufferedState::new(&state);
    let outcome = execute_transaction(&context, &mint_body(0), &mut staged);
    assert_eq!(outcome.status, ResponseCode::InvalidTokenMintAmount);

    let context = pre_handle_transaction(&burn_body(0), PAYER, &state);
    let mut staged = BufferedState::new(&state);
    let outcome = execute_transaction(&context, &burn_body(0), &mut staged);
    assert_eq!(outcome.status, ResponseCode::InvalidTokenBurnAmount);
}

/// A mint that would overflow the total supply rejects and stages
/// nothing.
#[test]
fn test_mint_overflow_rejects() {
    let state = state_with_token(u64::MAX - 10);

    let context = pre_handle_transaction(&mint_body(11), PAYER, &state);
    let mut staged = BufferedState::new(&state);
    let outcome = execute_transaction(&context, &mint_body(11), &mut staged);

    assert_eq!(outcome.status, ResponseCode::InvalidTokenMintAmount);
    assert!(!staged.is_dirty());
}

/// A burn exceeding the treasury balance rejects with
/// `INSUFFICIENT_TOKEN_BALANCE` and leaves the supply unchanged.
#[test]
fn test_burn_insufficient_balance() {
    let state = state_with_token(100);

    let context = pre_handle_transaction(&burn_body(101), PAYER, &state);
    let mut staged = BufferedState::new(&state);
    let outcome = execute_transaction(&context, &burn_body(101), &mut staged);

    assert_eq!(outcome.status, ResponseCode::InsufficientTokenBalance);
    assert!(!staged.is_dirty());
    assert_eq!(
        state.get_token(TOKEN).unwrap().total_supply,
        TokenAmount(100)
    );
}

/// Supply changes against a paused token reject in both phases.
#[test]
fn test_supply_change_paused_token() {
    let token = Token {
        paused: true,
        ..token_with_all_keys(100)
    };
    let state = utils::base_state()
        .with_token(token)
        .with_relation(utils::treasury_relation(100));

    let context = pre_handle_transaction(&mint_body(10), PAYER, &state);
    assert_eq!(context.status(), ResponseCode::TokenIsPaused);

    // Even if pre-handle had passed, handle re-checks usability.
    let fresh = pre_handle_transaction(&mint_body(10), PAYER, &state_with_token(100));
    let mut staged = BufferedState::new(&state);
    let outcome = execute_transaction(&fresh, &mint_body(10), &mut staged);
    assert_eq!(outcome.status, ResponseCode::TokenIsPaused);
}
