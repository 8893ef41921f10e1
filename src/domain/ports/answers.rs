//! Driving ports for the answer use-cases.

use async_trait::async_trait;

use crate::domain::{Answer, AnswerId, Error, QuestionId, UserId};

/// Validated payload for posting an answer.
#[derive(Debug, Clone)]
pub struct NewAnswer {
    pub author_id: UserId,
    pub question_id: QuestionId,
    pub content: String,
}

/// Driving port for answer mutations.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait AnswerCommand: Send + Sync {
    /// Run the answer-creation workflow: persist the answer, then attempt
    /// the best-effort notification to the question author. Notification
    /// failure never fails this call.
    async fn create(&self, request: NewAnswer) -> Result<Answer, Error>;

    /// Mark an answer accepted. Only the parent question's author may do
    /// this; anyone else fails with forbidden.
    async fn accept(&self, caller: &UserId, answer_id: &AnswerId) -> Result<Answer, Error>;
}

/// Driving port for answer reads.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait AnswerQuery: Send + Sync {
    /// List the answers for one question, oldest first.
    async fn list_for_question(&self, question_id: &QuestionId) -> Result<Vec<Answer>, Error>;
}
