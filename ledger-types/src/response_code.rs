//! Stable response codes reported to clients and recorded in the
//! transaction record.

use std::fmt;

/// Outcome code of a transaction or query.
///
/// These codes are part of the externally observable protocol: clients
/// match on them, and the same failure reason must map to the same code
/// whether it is detected before or after consensus ordering. The
/// `Display` rendering is the stable wire name.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash)]
pub enum ResponseCode {
    /// The operation succeeded or has not failed yet.
    Ok,
    /// The referenced token does not exist.
    InvalidTokenId,
    /// The referenced account does not exist or is deleted.
    InvalidAccountId,
    /// The referenced token is deleted.
    TokenWasDeleted,
    /// Balance-affecting operations on the referenced token are paused.
    TokenIsPaused,
    /// The operation is retired and not supported by this node version.
    NotSupported,
    /// The token has no freeze key, so freeze/unfreeze cannot be authorized.
    TokenHasNoFreezeKey,
    /// The token has no pause key, so pause/unpause cannot be authorized.
    TokenHasNoPauseKey,
    /// No relation exists between the referenced account and token.
    TokenNotAssociatedToAccount,
    /// The relation between the referenced account and token is frozen.
    AccountFrozenForToken,
    /// The debited balance is smaller than the requested amount.
    InsufficientTokenBalance,
    /// The mint amount is zero or would overflow the total supply.
    InvalidTokenMintAmount,
    /// The burn amount is zero or exceeds the total supply.
    InvalidTokenBurnAmount,
    /// The transaction body is structurally invalid for its operation kind.
    InvalidTransactionBody,
}

impl ResponseCode {
    /// The stable wire name of the code.
    pub fn name(self) -> &'static str {
        match self {
            ResponseCode::Ok => "OK",
            ResponseCode::InvalidTokenId => "INVALID_TOKEN_ID",
            ResponseCode::InvalidAccountId => "INVALID_ACCOUNT_ID",
            ResponseCode::TokenWasDeleted => "TOKEN_WAS_DELETED",
            ResponseCode::TokenIsPaused => "TOKEN_IS_PAUSED",
            ResponseCode::NotSupported => "NOT_SUPPORTED",
            ResponseCode::TokenHasNoFreezeKey => "TOKEN_HAS_NO_FREEZE_KEY",
            ResponseCode::TokenHasNoPauseKey => "TOKEN_HAS_NO_PAUSE_KEY",
            ResponseCode::TokenNotAssociatedToAccount => "TOKEN_NOT_ASSOCIATED_TO_ACCOUNT",
            ResponseCode::AccountFrozenForToken => "ACCOUNT_FROZEN_FOR_TOKEN",
            ResponseCode::InsufficientTokenBalance => "INSUFFICIENT_TOKEN_BALANCE",
            ResponseCode::InvalidTokenMintAmount => "INVALID_TOKEN_MINT_AMOUNT",
            ResponseCode::InvalidTokenBurnAmount => "INVALID_TOKEN_BURN_AMOUNT",
            ResponseCode::InvalidTransactionBody => "INVALID_TRANSACTION_BODY",
        }
    }
}

impl fmt::Display for ResponseCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A business-rule rejection carrying a stable [`ResponseCode`].
///
/// Rejections are expected, recoverable outcomes, not defects. Caller
/// bugs (wrong-kind dispatch and the like) are contract violations and
/// panic instead of producing a rejection.
#[derive(Debug, Clone, Copy, Eq, PartialEq, thiserror::Error)]
#[error("transaction rejected: {0}")]
pub struct Rejection(pub ResponseCode);

impl Rejection {
    /// The response code recorded for this rejection.
    pub fn code(self) -> ResponseCode {
        self.0
    }
}

impl From<ResponseCode> for Rejection {
    fn from(code: ResponseCode) -> Self {
        Rejection(code)
    }
}
