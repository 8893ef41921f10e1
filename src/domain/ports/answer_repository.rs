//! Port for answer persistence.

use async_trait::async_trait;

use crate::domain::{Answer, AnswerId, QuestionId};

use super::define_port_error;

define_port_error! {
    /// Errors raised by answer repository adapters.
    pub enum AnswerRepositoryError {
        /// Repository connection could not be established.
        Connection { message: String } =>
            "answer repository connection failed: {message}",
        /// Query or mutation failed during execution.
        Query { message: String } =>
            "answer repository query failed: {message}",
    }
}

/// Port for durable answer storage.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait AnswerRepository: Send + Sync {
    /// Persist a new answer.
    async fn insert(&self, answer: &Answer) -> Result<(), AnswerRepositoryError>;

    /// Fetch an answer by id.
    async fn find_by_id(&self, id: &AnswerId) -> Result<Option<Answer>, AnswerRepositoryError>;

    /// List the answers for one question, oldest first.
    async fn list_for_question(
        &self,
        question_id: &QuestionId,
    ) -> Result<Vec<Answer>, AnswerRepositoryError>;

    /// Apply a signed delta to the vote counter as a single atomic
    /// storage-level increment and return the new total, or `None` when the
    /// answer does not exist. Same contract as the question counterpart: no
    /// fetch-then-save.
    async fn increment_votes(
        &self,
        id: &AnswerId,
        delta: i32,
    ) -> Result<Option<i32>, AnswerRepositoryError>;

    /// Mark an answer accepted and return the updated row, or `None` when
    /// the answer does not exist. Idempotent.
    async fn set_accepted(&self, id: &AnswerId) -> Result<Option<Answer>, AnswerRepositoryError>;
}
