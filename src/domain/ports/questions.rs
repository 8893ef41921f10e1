//! Driving ports for the question use-cases.

use async_trait::async_trait;

use crate::domain::{Error, Question, QuestionId, UserId};

/// Validated payload for posting a question.
#[derive(Debug, Clone)]
pub struct NewQuestion {
    pub author_id: UserId,
    pub title: String,
    pub description: String,
    pub tags: Vec<String>,
}

/// Driving port for question mutations.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait QuestionCommand: Send + Sync {
    /// Persist a new question for an authenticated author.
    async fn create(&self, request: NewQuestion) -> Result<Question, Error>;
}

/// Driving port for question reads.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait QuestionQuery: Send + Sync {
    /// List all questions, newest first.
    async fn list(&self) -> Result<Vec<Question>, Error>;

    /// Fetch one question or fail with not-found.
    async fn get(&self, id: &QuestionId) -> Result<Question, Error>;
}
