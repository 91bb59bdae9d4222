//! The acting user and their granted capabilities.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// A capability that can be granted to a user.
///
/// Closed enumeration checked by set membership, not a string-keyed lookup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Authority {
    /// May edit records whose expiry window has passed.
    EditExpired,
    /// Superuser grant; implies every other authority.
    All,
}

/// The user on whose behalf a batch is being validated.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub username: String,
    #[serde(default)]
    pub authorities: BTreeSet<Authority>,
}

impl User {
    pub fn new(username: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            authorities: BTreeSet::new(),
        }
    }

    /// Grant an authority.
    #[must_use]
    pub fn with_authority(mut self, authority: Authority) -> Self {
        self.authorities.insert(authority);
        self
    }

    /// Returns true if the user holds the given authority, either directly
    /// or through the superuser grant.
    pub fn has_authority(&self, authority: Authority) -> bool {
        self.authorities.contains(&authority) || self.authorities.contains(&Authority::All)
    }
}
