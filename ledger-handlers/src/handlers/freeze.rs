//! Handlers for freezing and unfreezing an account's token relation.

use ledger_state::{
    ReadableState, ReadableTokenRelationStore, WritableState, WritableTokenRelationStore,
};
use ledger_types::response_code::{Rejection, ResponseCode};
use ledger_types::transaction::{RelationFreeze, TransactionBody};

use crate::context::PreHandleContext;
use crate::handlers::TransactionHandler;
use crate::validation;

/// Error precedence for freeze/unfreeze: the token reference is checked
/// before the account reference, so `INVALID_TOKEN_ID` is reported when
/// both are bad.
fn pre_handle_inner(
    op: &RelationFreeze,
    context: &mut PreHandleContext,
    state: &impl ReadableState,
) -> Result<(), Rejection> {
    let token_id = op.token.ok_or(Rejection(ResponseCode::InvalidTokenId))?;
    let token = validation::usable_token(token_id, state)?;
    let freeze_key = token
        .freeze_key
        .ok_or(Rejection(ResponseCode::TokenHasNoFreezeKey))?;
    context.require_key(freeze_key);

    let account_id = op.account.ok_or(Rejection(ResponseCode::InvalidAccountId))?;
    validation::existing_account(account_id, state)?;
    Ok(())
}

/// Sets or clears the `frozen` flag on the (account, token) relation.
fn handle_inner(
    op: &RelationFreeze,
    frozen: bool,
    state: &mut impl WritableState,
) -> Result<(), Rejection> {
    let token_id = op.token.ok_or(Rejection(ResponseCode::InvalidTokenId))?;
    validation::usable_token(token_id, state)?;
    let account_id = op.account.ok_or(Rejection(ResponseCode::InvalidAccountId))?;
    validation::existing_account(account_id, state)?;

    let mut relation = state
        .get_relation(account_id, token_id)
        .ok_or(Rejection(ResponseCode::TokenNotAssociatedToAccount))?;
    relation.frozen = frozen;
    state.put_relation(relation);
    Ok(())
}

/// Freezes an account's relation to a token.
#[derive(Debug, Clone, Copy, Default)]
pub struct TokenFreezeHandler;

impl TokenFreezeHandler {
    fn operation(body: &TransactionBody) -> &RelationFreeze {
        match body {
            TransactionBody::TokenFreeze(op) => op,
            other => panic!(
                "TokenFreezeHandler invoked with {:?} transaction",
                other.kind()
            ),
        }
    }
}

impl TransactionHandler for TokenFreezeHandler {
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

/// Unfreezes an account's relation to a token.
#[derive(Debug, Clone, Copy, Default)]
pub struct TokenUnfreezeHandler;

impl TokenUnfreezeHandler {
    fn operation(body: &TransactionBody) -> &RelationFreeze {
        match body {
            TransactionBody::TokenUnfreeze(op) => op,
            other => panic!(
                "TokenUnfreezeHandler invoked with {:?} transaction",
                other.kind()
            ),
        }
    }
}

impl TransactionHandler for TokenUnfreezeHandler {
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
