//! Routing of transaction bodies to their handlers.
//!
//! The handler set is closed: every [`TransactionKind`] maps to exactly
//! one handler, and adding an operation kind means adding a variant and
//! a dispatch arm here.

use ledger_state::{ReadableState, WritableState};
use ledger_types::response_code::Rejection;
use ledger_types::transaction::{TransactionBody, TransactionKind};

use crate::context::PreHandleContext;
use crate::handlers::{
    AddLiveHashHandler, DeleteLiveHashHandler, TokenAirdropHandler, TokenBurnHandler,
    TokenFreezeHandler, TokenMintHandler, TokenPauseHandler, TokenUnfreezeHandler,
    TokenUnpauseHandler, TransactionHandler,
};

/// Run the pre-handle phase of the handler matching the body's kind.
pub fn pre_handle(
    body: &TransactionBody,
    context: &mut PreHandleContext,
    state: &impl ReadableState,
) {
    match body.kind() {
        TransactionKind::TokenMint => TokenMintHandler.pre_handle(body, context, state),
        TransactionKind::TokenBurn => TokenBurnHandler.pre_handle(body, context, state),
        TransactionKind::TokenFreeze => TokenFreezeHandler.pre_handle(body, context, state),
        TransactionKind::TokenUnfreeze => TokenUnfreezeHandler.pre_handle(body, context, state),
        TransactionKind::TokenPause => TokenPauseHandler.pre_handle(body, context, state),
        TransactionKind::TokenUnpause => TokenUnpauseHandler.pre_handle(body, context, state),
        TransactionKind::TokenAirdrop => TokenAirdropHandler.pre_handle(body, context, state),
        TransactionKind::AddLiveHash => AddLiveHashHandler.pre_handle(body, context, state),
        TransactionKind::DeleteLiveHash => DeleteLiveHashHandler.pre_handle(body, context, state),
    }
}

/// Run the handle phase of the handler matching the body's kind.
pub fn handle(body: &TransactionBody, state: &mut impl WritableState) -> Result<(), Rejection> {
    match body.kind() {
        TransactionKind::TokenMint => TokenMintHandler.handle(body, state),
        TransactionKind::TokenBurn => TokenBurnHandler.handle(body, state),
        TransactionKind::TokenFreeze => TokenFreezeHandler.handle(body, state),
        TransactionKind::TokenUnfreeze => TokenUnfreezeHandler.handle(body, state),
        TransactionKind::TokenPause => TokenPauseHandler.handle(body, state),
        TransactionKind::TokenUnpause => TokenUnpauseHandler.handle(body, state),
        TransactionKind::TokenAirdrop => TokenAirdropHandler.handle(body, state),
        TransactionKind::AddLiveHash => AddLiveHashHandler.handle(body, state),
        TransactionKind::DeleteLiveHash => DeleteLiveHashHandler.handle(body, state),
    }
}
