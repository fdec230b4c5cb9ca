//! Handler for token airdrops.
//!
//! An airdrop is a set of per-token transfer lists where receivers do
//! not need to be associated with the token beforehand; the credit side
//! is associated on demand during handle.

use ledger_state::{
    ReadableState, ReadableTokenRelationStore, WritableState, WritableTokenRelationStore,
};
use ledger_types::entities::TokenRelation;
use ledger_types::primitives::TokenAmount;
use ledger_types::response_code::{Rejection, ResponseCode};
use ledger_types::transaction::{TokenAirdrop, TokenTransferList, TransactionBody};

use crate::context::PreHandleContext;
use crate::handlers::TransactionHandler;
use crate::validation;

/// Distributes token balances to receivers, associating them on demand.
#[derive(Debug, Clone, Copy, Default)]
pub struct TokenAirdropHandler;

impl TokenAirdropHandler {
    fn operation(body: &TransactionBody) -> &TokenAirdrop {
        match body {
            TransactionBody::TokenAirdrop(op) => op,
            other => panic!(
                "TokenAirdropHandler invoked with {:?} transaction",
                other.kind()
            ),
        }
    }

    /// Error precedence per transfer list: the structural zero-sum check
    /// first, then the token reference, then the account references in
    /// list order. Lists are processed in body order, so the first
    /// offending list determines the reported code.
    fn pre_handle_inner(
        op: &TokenAirdrop,
        context: &mut PreHandleContext,
        state: &impl ReadableState,
    ) -> Result<(), Rejection> {
        for list in &op.transfers {
            check_zero_sum(list)?;
            let token_id = list.token.ok_or(Rejection(ResponseCode::InvalidTokenId))?;
            validation::usable_token(token_id, state)?;
            for adjustment in &list.transfers {
                let account_id = adjustment
                    .account
                    .ok_or(Rejection(ResponseCode::InvalidAccountId))?;
                let account = validation::existing_account(account_id, state)?;
                // Only debited accounts must sign; receivers accept the
                // airdrop implicitly.
                if adjustment.amount < 0 {
                    context.require_key(account.key);
                }
            }
        }
        Ok(())
    }
}

fn check_zero_sum(list: &TokenTransferList) -> Result<(), Rejection> {
    let sum: i128 = list
        .transfers
        .iter()
        .map(|adjustment| i128::from(adjustment.amount))
        .sum();
    if sum != 0 {
        return Err(Rejection(ResponseCode::InvalidTransactionBody));
    }
    Ok(())
}

impl TransactionHandler for TokenAirdropHandler {
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
        for list in &op.transfers {
            check_zero_sum(list)?;
            let token_id = list.token.ok_or(Rejection(ResponseCode::InvalidTokenId))?;
            validation::usable_token(token_id, state)?;

            for adjustment in &list.transfers {
                let account_id = adjustment
                    .account
                    .ok_or(Rejection(ResponseCode::InvalidAccountId))?;
                validation::existing_account(account_id, state)?;

                let amount = TokenAmount(adjustment.amount.unsigned_abs());
                if adjustment.amount < 0 {
                    // Debits need an existing, unfrozen relation with
                    // enough balance.
                    let mut relation = state
                        .get_relation(account_id, token_id)
                        .ok_or(Rejection(ResponseCode::TokenNotAssociatedToAccount))?;
                    if relation.frozen {
                        return Err(Rejection(ResponseCode::AccountFrozenForToken));
                    }
                    relation.balance = relation
                        .balance
                        .checked_sub(amount)
                        .ok_or(Rejection(ResponseCode::InsufficientTokenBalance))?;
                    state.put_relation(relation);
                } else {
                    // Credits associate the receiver on demand.
                    let mut relation = state
                        .get_relation(account_id, token_id)
                        .unwrap_or_else(|| TokenRelation::new(account_id, token_id));
                    if relation.frozen {
                        return Err(Rejection(ResponseCode::AccountFrozenForToken));
                    }
                    // Adjustments apply in list order, so a credit can
                    // land before the debit covering it. A receiver
                    // balance past the representable range rejects
                    // rather than wraps.
                    relation.balance = relation
                        .balance
                        .checked_add(amount)
                        .ok_or(Rejection(ResponseCode::InsufficientTokenBalance))?;
                    state.put_relation(relation);
                }
            }
        }
        Ok(())
    }
}
