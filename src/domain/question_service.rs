//! Question domain service.

use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::ports::{
    NewQuestion, QuestionCommand, QuestionQuery, QuestionRepository, QuestionRepositoryError,
};
use crate::domain::{Error, Question, QuestionId};

/// Question service implementing the driving ports.
#[derive(Clone)]
pub struct QuestionService<Q> {
    questions: Arc<Q>,
}

impl<Q> QuestionService<Q> {
    /// Create a new service over the question repository.
    pub fn new(questions: Arc<Q>) -> Self {
        Self { questions }
    }
}

pub(crate) fn map_repository_error(error: QuestionRepositoryError) -> Error {
    match error {
        QuestionRepositoryError::Connection { message } => {
            Error::service_unavailable(format!("question repository unavailable: {message}"))
        }
        QuestionRepositoryError::Query { message } => {
            Error::internal(format!("question repository error: {message}"))
        }
    }
}

#[async_trait]
impl<Q> QuestionCommand for QuestionService<Q>
where
    Q: QuestionRepository,
{
    async fn create(&self, request: NewQuestion) -> Result<Question, Error> {
        let NewQuestion {
            author_id,
            title,
            description,
            tags,
        } = request;
        let question = Question::post(author_id, title, description, tags);
        self.questions
            .insert(&question)
            .await
            .map_err(map_repository_error)?;
        Ok(question)
    }
}

#[async_trait]
impl<Q> QuestionQuery for QuestionService<Q>
where
    Q: QuestionRepository,
{
    async fn list(&self) -> Result<Vec<Question>, Error> {
        self.questions
            .list_newest_first()
            .await
            .map_err(map_repository_error)
    }

    async fn get(&self, id: &QuestionId) -> Result<Question, Error> {
        self.questions
            .find_by_id(id)
            .await
            .map_err(map_repository_error)?
            .ok_or_else(|| Error::not_found("question not found"))
    }
}
