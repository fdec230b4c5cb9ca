//! Handlers for pausing and unpausing a token.
//!
//! Pausing is idempotent in both directions: pausing a paused token and
//! unpausing an unpaused one succeed without effect. The paused state
//! only gates balance-affecting operations, never pause/unpause itself.

use ledger_state::{ReadableState, WritableState, WritableTokenStore};
use ledger_types::response_code::{Rejection, ResponseCode};
use ledger_types::transaction::{TokenPause, TransactionBody};

use crate::context::PreHandleContext;
use crate::handlers::TransactionHandler;
use crate::validation;

fn pre_handle_inner(
    op: &TokenPause,
    context: &mut PreHandleContext,
    state: &impl ReadableState,
) -> Result<(), Rejection> {
    let token_id = op.token.ok_or(Rejection(ResponseCode::InvalidTokenId))?;
    let token = validation::pausable_token(token_id, state)?;
    let pause_key = token
        .pause_key
        .ok_or(Rejection(ResponseCode::TokenHasNoPauseKey))?;
    context.require_key(pause_key);
    Ok(())
}

fn handle_inner(
    op: &TokenPause,
    paused: bool,
    state: &mut impl WritableState,
) -> Result<(), Rejection> {
    let token_id = op.token.ok_or(Rejection(ResponseCode::InvalidTokenId))?;
    let mut token = validation::pausable_token(token_id, state)?;
    token.paused = paused;
    state.put_token(token);
    Ok(())
}

/// Pauses all balance-affecting operations on a token.
#[derive(Debug, Clone, Copy, Default)]
pub struct TokenPauseHandler;

impl TokenPauseHandler {
    fn operation(body: &TransactionBody) -> &TokenPause {
        match body {
            TransactionBody::TokenPause(op) => op,
            other => panic!(
                "TokenPauseHandler invoked with {:?} transaction",
                other.kind()
            ),
        }
    }
}

impl TransactionHandler for TokenPauseHandler {
    fn pre_handle(
        &self,
        body: &TransactionBody,
        context: &mut PreHandleContext,
        state: &impl ReadableState,
    ) {
        let op = Self::operation(body);
        if let Err(rejection) = pre_handle_inner(op, context, state) {
            context.fail(rejection.code());
        }
    }

    fn handle(
        &self,
        body: &TransactionBody,
        state: &mut impl WritableState,
    ) -> Result<(), Rejection> {
        handle_inner(Self::operation(body), true, state)
    }
}

/// Lifts a token's pause again.
#[derive(Debug, Clone, Copy, Default)]
pub struct TokenUnpauseHandler;

impl TokenUnpauseHandler {
    fn operation(body: &TransactionBody) -> &TokenPause {
        match body {
            TransactionBody::TokenUnpause(op) => op,
            other => panic!(
                "TokenUnpauseHandler invoked with {:?} transaction",
                other.kind()
            ),
        }
    }
}

impl TransactionHandler for TokenUnpauseHandler {
    fn pre_handle(
        &self,
        body: &TransactionBody,
        context: &mut PreHandleContext,
        state: &impl ReadableState,
    ) {
        let op = Self::operation(body);
        if let Err(rejection) = pre_handle_inner(op, context, state) {
            context.fail(rejection.code());
        }
    }

    fn handle(
        &self,
        body: &TransactionBody,
        state: &mut impl WritableState,
    ) -> Result<(), Rejection> {
        handle_inner(Self::operation(body), false, state)
    }
}
