//! Revoked token tracking

use dashmap::DashSet;

/// Set of explicitly revoked tokens
///
/// Built once at startup and handed to the token service by `Arc`; nothing
/// in the crate reaches for a shared global. Entries are the full formatted
/// token strings exactly as clients present them, so membership checks and
/// revocations use the same key.
#[derive(Debug, Default)]
pub struct RevocationSet {
    revoked: DashSet<String>,
}

impl RevocationSet {
    pub fn new() -> Self {
        Self {
            revoked: DashSet::new(),
        }
    }

    /// Record a token as revoked.
    ///
    /// The set itself accepts repeats; the validate-before-insert contract
    /// lives in the token service.
    pub fn insert(&self, token: &str) {
        self.revoked.insert(token.to_string());
    }

    pub fn contains(&self, token: &str) -> bool {
        self.revoked.contains(token)
    }

    pub fn len(&self) -> usize {
        self.revoked.len()
    }

    pub fn is_empty(&self) -> bool {
        self.revoked.is_empty()
    }

    /// Keep only the entries the predicate approves of.
    pub fn retain(&self, mut keep: impl FnMut(&str) -> bool) {
        self.revoked.retain(|token| keep(token));
    }
}
