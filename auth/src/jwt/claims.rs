use serde::Deserialize;
use serde::Serialize;

/// Claim set embedded in every issued token.
///
/// Deliberately minimal: the holder's username and a not-before bound.
/// There is no expiration claim; tokens stay valid for the life of the
/// signing secret.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Claims {
    /// Username the token was issued for
    pub user: String,

    /// Not before (Unix timestamp)
    pub nbf: i64,
}

impl Claims {
    /// Create claims for a username with an explicit not-before bound.
    pub fn new(user: impl Into<String>, nbf: i64) -> Self {
        Self {
            user: user.into(),
            nbf,
        }
    }

    /// Check whether the token is valid at the given timestamp.
    pub fn is_valid_at(&self, current_timestamp: i64) -> bool {
        self.nbf <= current_timestamp
    }
}
