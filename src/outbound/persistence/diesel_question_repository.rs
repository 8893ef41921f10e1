//! PostgreSQL-backed `QuestionRepository` implementation using Diesel ORM.

use async_trait::async_trait;
use diesel::prelude::*;
use diesel_async::RunQueryDsl;

use crate::domain::ports::{QuestionRepository, QuestionRepositoryError};
use crate::domain::{Question, QuestionId, UserId};

use super::diesel_helpers::{map_basic_diesel_error, map_basic_pool_error};
use super::models::{NewQuestionRow, QuestionRow};
use super::pool::{DbPool, PoolError};
use super::schema::questions;

/// Diesel-backed implementation of the `QuestionRepository` port.
#[derive(Clone)]
pub struct DieselQuestionRepository {
    pool: DbPool,
}

impl DieselQuestionRepository {
    /// Create a new repository with the given connection pool.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

fn map_pool_error(error: PoolError) -> QuestionRepositoryError {
    map_basic_pool_error(error, QuestionRepositoryError::connection)
}

fn map_diesel_error(error: diesel::result::Error) -> QuestionRepositoryError {
    map_basic_diesel_error(
        error,
        QuestionRepositoryError::query,
        QuestionRepositoryError::connection,
    )
}

fn row_to_question(row: QuestionRow) -> Question {
    Question {
        id: QuestionId::from_uuid(row.id),
        title: row.title,
        description: row.description,
        tags: row.tags,
        author_id: UserId::from_uuid(row.author_id),
        votes: row.votes,
        created_at: row.created_at,
    }
}

#[async_trait]
impl QuestionRepository for DieselQuestionRepository {
    async fn insert(&self, question: &Question) -> Result<(), QuestionRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let row = NewQuestionRow {
            id: *question.id.as_uuid(),
            title: &question.title,
            description: &question.description,
            tags: &question.tags,
            author_id: *question.author_id.as_uuid(),
            votes: question.votes,
            created_at: question.created_at,
        };

        diesel::insert_into(questions::table)
            .values(&row)
            .execute(&mut conn)
            .await
            .map_err(map_diesel_error)?;
        Ok(())
    }

    async fn find_by_id(
        &self,
        id: &QuestionId,
    ) -> Result<Option<Question>, QuestionRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let row = questions::table
            .find(id.as_uuid())
            .select(QuestionRow::as_select())
            .first::<QuestionRow>(&mut conn)
            .await
            .optional()
            .map_err(map_diesel_error)?;
        Ok(row.map(row_to_question))
    }

    async fn list_newest_first(&self) -> Result<Vec<Question>, QuestionRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let rows = questions::table
            .order(questions::created_at.desc())
            .select(QuestionRow::as_select())
            .load::<QuestionRow>(&mut conn)
            .await
            .map_err(map_diesel_error)?;
        Ok(rows.into_iter().map(row_to_question).collect())
    }

    async fn increment_votes(
        &self,
        id: &QuestionId,
        delta: i32,
    ) -> Result<Option<i32>, QuestionRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        // Single-statement increment so concurrent votes serialise in the
        // database rather than racing a read-modify-write.
        diesel::update(questions::table.find(id.as_uuid()))
            .set(questions::votes.eq(questions::votes + delta))
            .returning(questions::votes)
            .get_result::<i32>(&mut conn)
            .await
            .optional()
            .map_err(map_diesel_error)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use rstest::rstest;
    use uuid::Uuid;

    #[rstest]
    fn row_conversion_preserves_fields() {
        let id = Uuid::new_v4();
        let author = Uuid::new_v4();
        let question = row_to_question(QuestionRow {
            id,
            title: "How to center a div?".into(),
            description: "It refuses to center.".into(),
            tags: vec!["css".into(), "layout".into()],
            author_id: author,
            votes: -2,
            created_at: Utc::now(),
        });
        assert_eq!(question.id, QuestionId::from_uuid(id));
        assert_eq!(question.author_id, UserId::from_uuid(author));
        assert_eq!(question.votes, -2);
        assert_eq!(question.tags.len(), 2);
    }

    #[rstest]
    fn pool_errors_map_to_connection_errors() {
        let err = map_pool_error(PoolError::checkout("pool exhausted"));
        assert!(matches!(err, QuestionRepositoryError::Connection { .. }));
    }

    #[rstest]
    fn diesel_errors_map_to_query_errors() {
        let err = map_diesel_error(diesel::result::Error::NotFound);
        assert!(matches!(err, QuestionRepositoryError::Query { .. }));
    }
}
