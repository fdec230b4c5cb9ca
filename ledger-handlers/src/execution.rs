//! Execution driver for the two transaction phases.
//!
//! The state machine per transaction is
//! `received → pre-handled(success|failed) → handled(success|failed)`.
//! A transaction whose pre-handle failed may still be ordered by
//! consensus; its handle phase then short-circuits to the recorded
//! status without touching business logic, so the rejection still
//! consumes its place in the ordered stream and produces a permanent
//! record.

use ledger_state::{ReadableState, WritableState};
use ledger_types::primitives::AccountId;
use ledger_types::response_code::ResponseCode;
use ledger_types::transaction::TransactionBody;
use log::debug;

use crate::context::PreHandleContext;
use crate::dispatch;
use crate::validation;

/// The recorded outcome of one ordered transaction's handle phase.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct TransactionOutcome {
    /// The status written to the transaction record.
    pub status: ResponseCode,
}

impl TransactionOutcome {
    /// Whether the transaction's mutations should be committed.
    pub fn succeeded(self) -> bool {
        self.status == ResponseCode::Ok
    }
}

/// Pre-consensus evaluation of one transaction.
///
/// Resolves the payer, records its key, then runs the kind-specific
/// pre-handle. Performs no mutation, so evaluations of different
/// transactions may run concurrently over the same snapshot and may be
/// abandoned without side effects. Deterministic for a fixed body and
/// snapshot.
pub fn pre_handle_transaction(
    body: &TransactionBody,
    payer: AccountId,
    state: &impl ReadableState,
) -> PreHandleContext {
    let mut context = PreHandleContext::new(payer);
    match validation::existing_account(payer, state) {
        Ok(account) => context.set_payer_key(account.key),
        Err(rejection) => {
            debug!("pre-handle: payer {payer} rejected with {}", rejection.code());
            context.fail(rejection.code());
            return context;
        }
    }
    dispatch::pre_handle(body, &mut context, state);
    if context.failed() {
        debug!(
            "pre-handle: {:?} rejected with {}",
            body.kind(),
            context.status()
        );
    }
    context
}

/// Post-consensus execution of one ordered transaction.
///
/// Must be invoked in consensus order, one transaction at a time; the
/// writable state is exclusively owned by this invocation. On a non-OK
/// outcome the caller discards the staged mutations instead of
/// committing them, which keeps the visibility boundary all-or-nothing.
pub fn execute_transaction(
    context: &PreHandleContext,
    body: &TransactionBody,
    state: &mut impl WritableState,
) -> TransactionOutcome {
    // A failed pre-handle predetermines the recorded outcome.
    if context.failed() {
        debug!(
            "handle: {:?} short-circuits to pre-handle status {}",
            body.kind(),
            context.status()
        );
        return TransactionOutcome {
            status: context.status(),
        };
    }

    match dispatch::handle(body, state) {
        Ok(()) => TransactionOutcome {
            status: ResponseCode::Ok,
        },
        Err(rejection) => {
            debug!("handle: {:?} rejected with {}", body.kind(), rejection.code());
            TransactionOutcome {
                status: rejection.code(),
            }
        }
    }
}
