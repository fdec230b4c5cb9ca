//! Per-transaction accumulator for the pre-handle phase.

use ledger_types::primitives::{AccountId, Key};
use ledger_types::response_code::ResponseCode;

/// Accumulates the payer key, the required non-payer keys and the first
/// business-rule failure of one transaction's pre-handle evaluation.
///
/// Created when pre-handle starts, consumed by the caller once the
/// result has been read back; never persisted. For a fixed transaction
/// body and state snapshot the resulting key set (members and order)
/// and status are identical across evaluations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreHandleContext {
    payer: AccountId,
    payer_key: Option<Key>,
    required_keys: Vec<Key>,
    status: ResponseCode,
}

impl PreHandleContext {
    /// A fresh context for a transaction paid for by `payer`, with no
    /// keys collected and a success status.
    pub fn new(payer: AccountId) -> Self {
        PreHandleContext {
            payer,
            payer_key: None,
            required_keys: Vec::new(),
            status: ResponseCode::Ok,
        }
    }

    /// The payer account of the transaction.
    pub fn payer(&self) -> AccountId {
        self.payer
    }

    /// Record the payer's signing key. Write-once: recording a second
    /// key is a caller bug and panics.
    pub fn set_payer_key(&mut self, key: Key) {
        assert!(
            self.payer_key.is_none(),
            "payer key recorded twice on pre-handle context"
        );
        self.payer_key = Some(key);
    }

    /// The payer key, if one has been recorded.
    pub fn payer_key(&self) -> Option<Key> {
        self.payer_key
    }

    /// Append a required non-payer key. Duplicates are suppressed and
    /// insertion order is preserved. No-op once the context has failed.
    pub fn require_key(&mut self, key: Key) {
        if self.failed() {
            return;
        }
        if !self.required_keys.contains(&key) {
            self.required_keys.push(key);
        }
    }

    /// The required non-payer keys in insertion order.
    pub fn required_keys(&self) -> &[Key] {
        &self.required_keys
    }

    /// Record a terminal business-rule failure. The first failure wins;
    /// later calls keep the originally recorded status.
    pub fn fail(&mut self, status: ResponseCode) {
        debug_assert_ne!(status, ResponseCode::Ok, "fail called with OK");
        if !self.failed() {
            self.status = status;
        }
    }

    /// Whether a failure has been recorded.
    pub fn failed(&self) -> bool {
        self.status != ResponseCode::Ok
    }

    /// The accumulated status, `OK` unless the context has failed.
    pub fn status(&self) -> ResponseCode {
        self.status
    }
}
