//! Answer domain service.
//!
//! Implements the composed answer-creation workflow:
//! `Received -> Authenticated -> Persisted -> NotificationAttempted ->
//! Responded`. The notification is a best-effort secondary effect committed
//! after the primary write; the two are not transactional, so a crash between
//! them loses the notification (accepted, not retried).

use std::sync::Arc;

use async_trait::async_trait;
use tracing::warn;

use crate::domain::ports::{
    AnswerCommand, AnswerPostedNotifier, AnswerQuery, AnswerRepository, AnswerRepositoryError,
    NewAnswer, QuestionRepository,
};
use crate::domain::{Answer, AnswerId, Error, Question, QuestionId, UserId};

use super::question_service::map_repository_error as map_question_error;

/// Answer service implementing the driving ports.
#[derive(Clone)]
pub struct AnswerService<A, Q, N> {
    answers: Arc<A>,
    questions: Arc<Q>,
    notifier: Arc<N>,
}

impl<A, Q, N> AnswerService<A, Q, N> {
    /// Create a new service over the repositories and the notifier.
    pub fn new(answers: Arc<A>, questions: Arc<Q>, notifier: Arc<N>) -> Self {
        Self {
            answers,
            questions,
            notifier,
        }
    }
}

fn map_answer_error(error: AnswerRepositoryError) -> Error {
    match error {
        AnswerRepositoryError::Connection { message } => {
            Error::service_unavailable(format!("answer repository unavailable: {message}"))
        }
        AnswerRepositoryError::Query { message } => {
            Error::internal(format!("answer repository error: {message}"))
        }
    }
}

impl<A, Q, N> AnswerService<A, Q, N>
where
    A: AnswerRepository,
    Q: QuestionRepository,
    N: AnswerPostedNotifier,
{
    async fn parent_question(&self, question_id: &QuestionId) -> Result<Question, Error> {
        self.questions
            .find_by_id(question_id)
            .await
            .map_err(map_question_error)?
            .ok_or_else(|| Error::not_found("question not found"))
    }

    /// Fire the secondary effect. Failures are logged and swallowed: the
    /// answer is already durable and its response must not change.
    async fn attempt_notification(&self, question: &Question, answer: &Answer) {
        if let Err(error) = self.notifier.notify_on_answer(question, answer).await {
            warn!(
                %error,
                answer_id = %answer.id,
                question_id = %question.id,
                "answer notification failed; continuing"
            );
        }
    }
}

#[async_trait]
impl<A, Q, N> AnswerCommand for AnswerService<A, Q, N>
where
    A: AnswerRepository,
    Q: QuestionRepository,
    N: AnswerPostedNotifier,
{
    async fn create(&self, request: NewAnswer) -> Result<Answer, Error> {
        let NewAnswer {
            author_id,
            question_id,
            content,
        } = request;

        let question = self.parent_question(&question_id).await?;

        let answer = Answer::post(question_id, author_id, content);
        self.answers
            .insert(&answer)
            .await
            .map_err(map_answer_error)?;

        self.attempt_notification(&question, &answer).await;
        Ok(answer)
    }

    async fn accept(&self, caller: &UserId, answer_id: &AnswerId) -> Result<Answer, Error> {
        let answer = self
            .answers
            .find_by_id(answer_id)
            .await
            .map_err(map_answer_error)?
            .ok_or_else(|| Error::not_found("answer not found"))?;

        let question = self.parent_question(&answer.question_id).await?;
        if question.author_id != *caller {
            return Err(Error::forbidden(
                "only the question author may accept an answer",
            ));
        }

        self.answers
            .set_accepted(answer_id)
            .await
            .map_err(map_answer_error)?
            .ok_or_else(|| Error::not_found("answer not found"))
    }
}

#[async_trait]
impl<A, Q, N> AnswerQuery for AnswerService<A, Q, N>
where
    A: AnswerRepository,
    Q: QuestionRepository,
    N: AnswerPostedNotifier,
{
    async fn list_for_question(&self, question_id: &QuestionId) -> Result<Vec<Answer>, Error> {
        self.answers
            .list_for_question(question_id)
            .await
            .map_err(map_answer_error)
    }
}
