//! Handler for token mint transactions.

use ledger_state::{
    ReadableState, ReadableTokenRelationStore, WritableState, WritableTokenRelationStore,
    WritableTokenStore,
};
use ledger_types::primitives::TokenAmount;
use ledger_types::response_code::{Rejection, ResponseCode};
use ledger_types::transaction::{SupplyChange, TransactionBody};

use crate::context::PreHandleContext;
use crate::handlers::TransactionHandler;
use crate::validation;

/// Mints new supply into the token's treasury.
#[derive(Debug, Clone, Copy, Default)]
pub struct TokenMintHandler;

impl TokenMintHandler {
    fn operation(body: &TransactionBody) -> &SupplyChange {
        match body {
            TransactionBody::TokenMint(op) => op,
            other => panic!(
                "TokenMintHandler invoked with {:?} transaction",
                other.kind()
            ),
        }
    }

    fn pre_handle_inner(
        op: &SupplyChange,
        context: &mut PreHandleContext,
        state: &impl ReadableState,
    ) -> Result<(), Rejection> {
        let token_id = op.token.ok_or(Rejection(ResponseCode::InvalidTokenId))?;
        let token = validation::usable_token(token_id, state)?;
        // A token without a supply key needs no signature beyond the
        // payer's; the mint is then authorized by payment alone.
        if let Some(supply_key) = token.supply_key {
            context.require_key(supply_key);
        }
        Ok(())
    }
}

impl TransactionHandler for TokenMintHandler {
    fn pre_handle(
        &self,
        body: &TransactionBody,
        context: &mut PreHandleContext,
        state: &impl ReadableState,
    ) {
        let op = Self::operation(body);
        if let Err(rejection) = Self::pre_handle_inner(op, context, state) {
            context.fail(rejection.code());
        }
    }

    fn handle(
        &self,
        body: &TransactionBody,
        state: &mut impl WritableState,
    ) -> Result<(), Rejection> {
        let op = Self::operation(body);
        let token_id = op.token.ok_or(Rejection(ResponseCode::InvalidTokenId))?;
        let mut token = validation::usable_token(token_id, state)?;

        if op.amount == 0 {
            return Err(Rejection(ResponseCode::InvalidTokenMintAmount));
        }
        let minted = TokenAmount(op.amount);
        let new_supply = token
            .total_supply
            .checked_add(minted)
            .ok_or(Rejection(ResponseCode::InvalidTokenMintAmount))?;

        let mut treasury_relation = state
            .get_relation(token.treasury, token_id)
            .ok_or(Rejection(ResponseCode::TokenNotAssociatedToAccount))?;
        let Some(new_balance) = treasury_relation.balance.checked_add(minted) else {
            // The treasury balance is bounded by the total supply, which
            // was just checked against overflow.
            panic!("treasury balance overflow minting {minted} of {token_id}");
        };

        token.total_supply = new_supply;
        treasury_relation.balance = new_balance;
        state.put_token(token);
        state.put_relation(treasury_relation);
        Ok(())
    }
}
