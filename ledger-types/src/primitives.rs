//! Identifier and amount primitives shared across the core.

use std::fmt;

/// Identifier of a token, unique within the token namespace.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash, Ord, PartialOrd)]
pub struct TokenId(pub u64);

impl fmt::Display for TokenId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "token-{}", self.0)
    }
}

/// Identifier of an account, unique within the account namespace.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash, Ord, PartialOrd)]
pub struct AccountId(pub u64);

impl fmt::Display for AccountId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "account-{}", self.0)
    }
}

/// A signing key required to authorize a transaction.
///
/// The core only collects required keys; signature verification against
/// them is an external collaborator.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash)]
pub struct Key(pub [u8; 32]);

impl Key {
    /// Convenience constructor filling the key material with a single byte,
    /// mainly useful for fixtures.
    pub fn from_byte(byte: u8) -> Self {
        Key([byte; 32])
    }
}

/// Token amount as an unscaled integer value. The numerical amount
/// represented is `value * 10^(-decimals)` for the owning token's
/// configured number of decimals.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash, Ord, PartialOrd, Default)]
pub struct TokenAmount(pub u64);

impl TokenAmount {
    /// Maximum representable token amount.
    pub const MAX: Self = Self(u64::MAX);

    /// Checked addition, `None` when the sum is not representable.
    pub fn checked_add(self, other: Self) -> Option<Self> {
        self.0.checked_add(other.0).map(Self)
    }

    /// Checked subtraction, `None` on underflow.
    pub fn checked_sub(self, other: Self) -> Option<Self> {
        self.0.checked_sub(other.0).map(Self)
    }
}

impl fmt::Display for TokenAmount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_token_amount_checked_arithmetic() {
        assert_eq!(
            TokenAmount(2).checked_add(TokenAmount(3)),
            Some(TokenAmount(5))
        );
        assert_eq!(TokenAmount::MAX.checked_add(TokenAmount(1)), None);
        assert_eq!(
            TokenAmount(3).checked_sub(TokenAmount(2)),
            Some(TokenAmount(1))
        );
        assert_eq!(TokenAmount(2).checked_sub(TokenAmount(3)), None);
    }
}
