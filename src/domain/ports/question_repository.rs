//! Port for question persistence.

use async_trait::async_trait;

use crate::domain::{Question, QuestionId};

use super::define_port_error;

define_port_error! {
    /// Errors raised by question repository adapters.
    pub enum QuestionRepositoryError {
        /// Repository connection could not be established.
        Connection { message: String } =>
            "question repository connection failed: {message}",
        /// Query or mutation failed during execution.
        Query { message: String } =>
            "question repository query failed: {message}",
    }
}

/// Port for durable question storage.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait QuestionRepository: Send + Sync {
    /// Persist a new question.
    async fn insert(&self, question: &Question) -> Result<(), QuestionRepositoryError>;

    /// Fetch a question by id.
    async fn find_by_id(
        &self,
        id: &QuestionId,
    ) -> Result<Option<Question>, QuestionRepositoryError>;

    /// List all questions, newest first.
    async fn list_newest_first(&self) -> Result<Vec<Question>, QuestionRepositoryError>;

    /// Apply a signed delta to the vote counter as a single atomic
    /// storage-level increment and return the new total, or `None` when the
    /// question does not exist.
    ///
    /// Implementations must not use fetch-then-save semantics: two concurrent
    /// deltas against the same row must both be reflected.
    async fn increment_votes(
        &self,
        id: &QuestionId,
        delta: i32,
    ) -> Result<Option<i32>, QuestionRepositoryError>;
}
