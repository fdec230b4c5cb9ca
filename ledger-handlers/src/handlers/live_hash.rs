//! Handlers for the retired live-hash operations.
//!
//! Live hashes were removed from the protocol, but old transactions
//! must keep a stable, first-class outcome: both phases reject with
//! `NOT_SUPPORTED` as a business result, never as a crash, regardless
//! of how well-formed the body is.

use ledger_state::{ReadableState, WritableState};
use ledger_types::response_code::{Rejection, ResponseCode};
use ledger_types::transaction::TransactionBody;

use crate::context::PreHandleContext;
use crate::handlers::TransactionHandler;

/// Retired handler for attaching a live hash to an account.
#[derive(Debug, Clone, Copy, Default)]
pub struct AddLiveHashHandler;

impl TransactionHandler for AddLiveHashHandler {
    fn pre_handle(
        &self,
        body: &TransactionBody,
        context: &mut PreHandleContext,
        _state: &impl ReadableState,
    ) {
        let TransactionBody::AddLiveHash(_) = body else {
            panic!(
                "AddLiveHashHandler invoked with {:?} transaction",
                body.kind()
            );
        };
        context.fail(ResponseCode::NotSupported);
    }

    fn handle(
        &self,
        body: &TransactionBody,
        _state: &mut impl WritableState,
    ) -> Result<(), Rejection> {
        let TransactionBody::AddLiveHash(_) = body else {
            panic!(
                "AddLiveHashHandler invoked with {:?} transaction",
                body.kind()
            );
        };
        Err(Rejection(ResponseCode::NotSupported))
    }
}

/// Retired handler for removing a live hash from an account.
#[derive(Debug, Clone, Copy, Default)]
pub struct DeleteLiveHashHandler;

impl TransactionHandler for DeleteLiveHashHandler {
    fn pre_handle(
        &self,
        body: &TransactionBody,
        context: &mut PreHandleContext,
        _state: &impl ReadableState,
    ) {
        let TransactionBody::DeleteLiveHash(_) = body else {
            panic!(
                "DeleteLiveHashHandler invoked with {:?} transaction",
                body.kind()
            );
        };
        context.fail(ResponseCode::NotSupported);
    }

    fn handle(
        &self,
        body: &TransactionBody,
        _state: &mut impl WritableState,
    ) -> Result<(), Rejection> {
        let TransactionBody::DeleteLiveHash(_) = body else {
            panic!(
                "DeleteLiveHashHandler invoked with {:?} transaction",
                body.kind()
            );
        };
        Err(Rejection(ResponseCode::NotSupported))
    }
}
