//! Handler for token burn transactions.

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

/// Burns supply out of the token's treasury.
#[derive(Debug, Clone, Copy, Default)]
pub struct TokenBurnHandler;

impl TokenBurnHandler {
    fn operation(body: &TransactionBody) -> &SupplyChange {
        match body {
            TransactionBody::TokenBurn(op) => op,
            other => panic!(
                "TokenBurnHandler invoked with {:?} transaction",
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
        // Same rule as mint: no supply key means no extra signature.
        if let Some(supply_key) = token.supply_key {
            context.require_key(supply_key);
        }
        Ok(())
    }
}

impl TransactionHandler for TokenBurnHandler {
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
            return Err(Rejection(ResponseCode::InvalidTokenBurnAmount));
        }
        let burned = TokenAmount(op.amount);

        let mut treasury_relation = state
            .get_relation(token.treasury, token_id)
            .ok_or(Rejection(ResponseCode::TokenNotAssociatedToAccount))?;
        let new_balance = treasury_relation
            .balance
            .checked_sub(burned)
            .ok_or(Rejection(ResponseCode::InsufficientTokenBalance))?;
        let Some(new_supply) = token.total_supply.checked_sub(burned) else {
            // The treasury balance is bounded by the total supply, so a
            // burn covered by the balance cannot underflow the supply.
            panic!("total supply underflow burning {burned} of {token_id}");
        };

        token.total_supply = new_supply;
        treasury_relation.balance = new_balance;
        state.put_token(token);
        state.put_relation(treasury_relation);
        Ok(())
    }
}
