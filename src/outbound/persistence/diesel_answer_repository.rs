//! PostgreSQL-backed `AnswerRepository` implementation using Diesel ORM.

use async_trait::async_trait;
use diesel::prelude::*;
use diesel_async::RunQueryDsl;

use crate::domain::ports::{AnswerRepository, AnswerRepositoryError};
use crate::domain::{Answer, AnswerId, QuestionId, UserId};

use super::diesel_helpers::{map_basic_diesel_error, map_basic_pool_error};
use super::models::{AnswerRow, NewAnswerRow};
use super::pool::{DbPool, PoolError};
use super::schema::answers;

/// Diesel-backed implementation of the `AnswerRepository` port.
#[derive(Clone)]
pub struct DieselAnswerRepository {
    pool: DbPool,
}

impl DieselAnswerRepository {
    /// Create a new repository with the given connection pool.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

fn map_pool_error(error: PoolError) -> AnswerRepositoryError {
    map_basic_pool_error(error, AnswerRepositoryError::connection)
}

fn map_diesel_error(error: diesel::result::Error) -> AnswerRepositoryError {
    map_basic_diesel_error(
        error,
        AnswerRepositoryError::query,
        AnswerRepositoryError::connection,
    )
}

fn row_to_answer(row: AnswerRow) -> Answer {
    Answer {
        id: AnswerId::from_uuid(row.id),
        question_id: QuestionId::from_uuid(row.question_id),
        author_id: UserId::from_uuid(row.author_id),
        content: row.content,
        votes: row.votes,
        accepted: row.accepted,
        created_at: row.created_at,
    }
}

#[async_trait]
impl AnswerRepository for DieselAnswerRepository {
    async fn insert(&self, answer: &Answer) -> Result<(), AnswerRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let row = NewAnswerRow {
            id: *answer.id.as_uuid(),
            question_id: *answer.question_id.as_uuid(),
            author_id: *answer.author_id.as_uuid(),
            content: &answer.content,
            votes: answer.votes,
            accepted: answer.accepted,
            created_at: answer.created_at,
        };

        diesel::insert_into(answers::table)
            .values(&row)
            .execute(&mut conn)
            .await
            .map_err(map_diesel_error)?;
        Ok(())
    }

    async fn find_by_id(&self, id: &AnswerId) -> Result<Option<Answer>, AnswerRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let row = answers::table
            .find(id.as_uuid())
            .select(AnswerRow::as_select())
            .first::<AnswerRow>(&mut conn)
            .await
            .optional()
            .map_err(map_diesel_error)?;
        Ok(row.map(row_to_answer))
    }

    async fn list_for_question(
        &self,
        question_id: &QuestionId,
    ) -> Result<Vec<Answer>, AnswerRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let rows = answers::table
            .filter(answers::question_id.eq(question_id.as_uuid()))
            .order(answers::created_at.asc())
            .select(AnswerRow::as_select())
            .load::<AnswerRow>(&mut conn)
            .await
            .map_err(map_diesel_error)?;
        Ok(rows.into_iter().map(row_to_answer).collect())
    }

    async fn increment_votes(
        &self,
        id: &AnswerId,
        delta: i32,
    ) -> Result<Option<i32>, AnswerRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        // Single-statement increment so concurrent votes serialise in the
        // database rather than racing a read-modify-write.
        diesel::update(answers::table.find(id.as_uuid()))
            .set(answers::votes.eq(answers::votes + delta))
            .returning(answers::votes)
            .get_result::<i32>(&mut conn)
            .await
            .optional()
            .map_err(map_diesel_error)
    }

    async fn set_accepted(
        &self,
        id: &AnswerId,
    ) -> Result<Option<Answer>, AnswerRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        // Unconditional set keeps the operation idempotent.
        let row = diesel::update(answers::table.find(id.as_uuid()))
            .set(answers::accepted.eq(true))
            .returning(AnswerRow::as_returning())
            .get_result::<AnswerRow>(&mut conn)
            .await
            .optional()
            .map_err(map_diesel_error)?;
        Ok(row.map(row_to_answer))
    }
}
