//! Driving port for applying votes.

use async_trait::async_trait;

use crate::domain::{Error, VoteDirection, VoteTarget};

/// Driving port for the vote use-case.
///
/// Votes are not deduplicated per user: each call applies an unconditional
/// ±1 delta. A per-user vote ledger is a known gap, recorded in DESIGN.md.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait VoteCommand: Send + Sync {
    /// Apply one vote to the target and return the new stored count.
    /// Fails with not-found when the target entity does not exist.
    async fn apply(&self, target: VoteTarget, direction: VoteDirection) -> Result<i32, Error>;
}
