//! Per-operation transaction handlers.
//!
//! Each operation kind has one handler implementing
//! [`TransactionHandler`]. New operation kinds are added as new handler
//! types plus a dispatch arm, never by extending an existing handler.

use ledger_state::{ReadableState, WritableState};
use ledger_types::response_code::Rejection;
use ledger_types::transaction::TransactionBody;

use crate::context::PreHandleContext;

pub mod airdrop;
pub mod burn;
pub mod freeze;
pub mod live_hash;
pub mod mint;
pub mod pause;

pub use airdrop::TokenAirdropHandler;
pub use burn::TokenBurnHandler;
pub use freeze::{TokenFreezeHandler, TokenUnfreezeHandler};
pub use live_hash::{AddLiveHashHandler, DeleteLiveHashHandler};
pub use mint::TokenMintHandler;
pub use pause::{TokenPauseHandler, TokenUnpauseHandler};

/// The two-phase contract every transaction handler implements.
///
/// Both phases must be invoked with a body of the handler's own
/// operation kind; anything else is a dispatch bug and panics.
pub trait TransactionHandler {
    /// Pre-consensus phase: derive required signing keys and early
    /// business-rule failures from the body and a read-only snapshot.
    ///
    /// Never mutates state. Failures are recorded on the context via
    /// [`PreHandleContext::fail`], after which no further keys are
    /// collected.
    fn pre_handle(
        &self,
        body: &TransactionBody,
        context: &mut PreHandleContext,
        state: &impl ReadableState,
    );

    /// Post-consensus phase: apply the operation's state mutation.
    ///
    /// Runs strictly in consensus order, one transaction at a time. On
    /// a rejection the caller discards the staged mutations, so a
    /// failed handle leaves no trace in durable state.
    fn handle(
        &self,
        body: &TransactionBody,
        state: &mut impl WritableState,
    ) -> Result<(), Rejection>;
}
