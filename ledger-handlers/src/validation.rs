//! Shared usability validation.
//!
//! Every handler that dereferences a token or account before acting on
//! it goes through these helpers, so rejection semantics are identical
//! across handlers. Deleted is checked before paused, making the
//! selected code deterministic even for a token that is somehow both.

use ledger_state::{ReadableAccountStore, ReadableTokenStore};
use ledger_types::entities::{Account, Token};
use ledger_types::primitives::{AccountId, TokenId};
use ledger_types::response_code::{Rejection, ResponseCode};

/// Fetch a token and check it is fit for use.
///
/// Rejects with `INVALID_TOKEN_ID` when absent, `TOKEN_WAS_DELETED`
/// when deleted, `TOKEN_IS_PAUSED` when paused, in that order.
pub fn usable_token(
    token_id: TokenId,
    tokens: &dyn ReadableTokenStore,
) -> Result<Token, Rejection> {
    let token = tokens
        .get_token(token_id)
        .ok_or(Rejection(ResponseCode::InvalidTokenId))?;
    if token.deleted {
        return Err(Rejection(ResponseCode::TokenWasDeleted));
    }
    if token.paused {
        return Err(Rejection(ResponseCode::TokenIsPaused));
    }
    Ok(token)
}

/// Fetch a token for a pause/unpause operation.
///
/// Like [`usable_token`] but a paused token passes, otherwise an
/// already-paused token could never be unpaused.
pub fn pausable_token(
    token_id: TokenId,
    tokens: &dyn ReadableTokenStore,
) -> Result<Token, Rejection> {
    let token = tokens
        .get_token(token_id)
        .ok_or(Rejection(ResponseCode::InvalidTokenId))?;
    if token.deleted {
        return Err(Rejection(ResponseCode::TokenWasDeleted));
    }
    Ok(token)
}

/// Fetch an account, rejecting absent or deleted accounts with
/// `INVALID_ACCOUNT_ID`.
pub fn existing_account(
    account_id: AccountId,
    accounts: &dyn ReadableAccountStore,
) -> Result<Account, Rejection> {
    let account = accounts
        .get_account(account_id)
        .ok_or(Rejection(ResponseCode::InvalidAccountId))?;
    if account.deleted {
        return Err(Rejection(ResponseCode::InvalidAccountId));
    }
    Ok(account)
}

#[cfg(test)]
mod test {
    use super::*;
    use assert_matches::assert_matches;
    use ledger_state::MemoryState;
    use ledger_types::primitives::Key;

    const TOKEN: TokenId = TokenId(5);
    const TREASURY: AccountId = AccountId(1);

    fn token(deleted: bool, paused: bool) -> Token {
        Token {
            deleted,
            paused,
            ..Token::new(TOKEN, TREASURY)
        }
    }

    /// A present, undeleted, unpaused token is returned unchanged.
    #[test]
    fn test_usable_token_passes() {
        let state = MemoryState::new().with_token(token(false, false));
        let fetched = usable_token(TOKEN, &state).expect("token is usable");
        assert_eq!(fetched.token_id, TOKEN);
    }

    /// An absent token rejects before any flag check is reached.
    #[test]
    fn test_absent_token_rejects() {
        let state = MemoryState::new();
        assert_matches!(
            usable_token(TOKEN, &state),
            Err(Rejection(ResponseCode::InvalidTokenId))
        );
    }

    /// Deleted wins over paused, so the code is deterministic for a
    /// token carrying both flags.
    #[test]
    fn test_deleted_checked_before_paused() {
        let state = MemoryState::new().with_token(token(true, true));
        assert_matches!(
            usable_token(TOKEN, &state),
            Err(Rejection(ResponseCode::TokenWasDeleted))
        );

        let state = MemoryState::new().with_token(token(true, false));
        assert_matches!(
            usable_token(TOKEN, &state),
            Err(Rejection(ResponseCode::TokenWasDeleted))
        );

        let state = MemoryState::new().with_token(token(false, true));
        assert_matches!(
            usable_token(TOKEN, &state),
            Err(Rejection(ResponseCode::TokenIsPaused))
        );
    }

    /// The pausable flavour accepts a paused token but still rejects a
    /// deleted one.
    #[test]
    fn test_pausable_token_accepts_paused() {
        let state = MemoryState::new().with_token(token(false, true));
        assert!(pausable_token(TOKEN, &state).is_ok());

        let state = MemoryState::new().with_token(token(true, true));
        assert_matches!(
            pausable_token(TOKEN, &state),
            Err(Rejection(ResponseCode::TokenWasDeleted))
        );
    }

    /// Absent and deleted accounts both reject as invalid.
    #[test]
    fn test_existing_account() {
        let state = MemoryState::new();
        assert_matches!(
            existing_account(TREASURY, &state),
            Err(Rejection(ResponseCode::InvalidAccountId))
        );

        let mut account = Account::new(TREASURY, Key::from_byte(1));
        account.deleted = true;
        let state = MemoryState::new().with_account(account);
        assert_matches!(
            existing_account(TREASURY, &state),
            Err(Rejection(ResponseCode::InvalidAccountId))
        );

        let state = MemoryState::new().with_account(Account::new(TREASURY, Key::from_byte(1)));
        assert!(existing_account(TREASURY, &state).is_ok());
    }
}
