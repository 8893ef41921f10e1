//! Vote application service.
//!
//! Applies signed vote deltas to question and answer counters. The delta is
//! pushed down to the repository as a single atomic increment so two
//! concurrent votes against the same row are both reflected; their relative
//! order is unspecified. There is no per-user vote ledger: repeat votes from
//! the same caller each count (see DESIGN.md).

use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::ports::{
    AnswerRepository, AnswerRepositoryError, QuestionRepository, QuestionRepositoryError,
    VoteCommand,
};
use crate::domain::{Error, VoteDirection, VoteTarget};

/// Vote service implementing the driving port.
#[derive(Clone)]
pub struct VoteService<Q, A> {
    questions: Arc<Q>,
    answers: Arc<A>,
}

impl<Q, A> VoteService<Q, A> {
    /// Create a new service over the two counter-bearing repositories.
    pub fn new(questions: Arc<Q>, answers: Arc<A>) -> Self {
        Self { questions, answers }
    }
}

fn map_question_error(error: QuestionRepositoryError) -> Error {
    match error {
        QuestionRepositoryError::Connection { message } => {
            Error::service_unavailable(format!("question repository unavailable: {message}"))
        }
        QuestionRepositoryError::Query { message } => {
            Error::internal(format!("question repository error: {message}"))
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

#[async_trait]
impl<Q, A> VoteCommand for VoteService<Q, A>
where
    Q: QuestionRepository,
    A: AnswerRepository,
{
    async fn apply(&self, target: VoteTarget, direction: VoteDirection) -> Result<i32, Error> {
        let delta = direction.delta();
        let updated = match &target {
            VoteTarget::Question(id) => self
                .questions
                .increment_votes(id, delta)
                .await
                .map_err(map_question_error)?,
            VoteTarget::Answer(id) => self
                .answers
                .increment_votes(id, delta)
                .await
                .map_err(map_answer_error)?,
        };

        updated.ok_or_else(|| Error::not_found(format!("{} not found", target.kind())))
    }
}
