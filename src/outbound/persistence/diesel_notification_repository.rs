//! PostgreSQL-backed `NotificationRepository` implementation using Diesel
//! ORM.

use async_trait::async_trait;
use diesel::prelude::*;
use diesel_async::RunQueryDsl;

use crate::domain::ports::{NotificationRepository, NotificationRepositoryError};
use crate::domain::{AnswerId, Notification, NotificationId, QuestionId, UserId};

use super::diesel_helpers::{map_basic_diesel_error, map_basic_pool_error};
use super::models::{NewNotificationRow, NotificationRow};
use super::pool::{DbPool, PoolError};
use super::schema::notifications;

/// Diesel-backed implementation of the `NotificationRepository` port.
#[derive(Clone)]
pub struct DieselNotificationRepository {
    pool: DbPool,
}

impl DieselNotificationRepository {
    /// Create a new repository with the given connection pool.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

fn map_pool_error(error: PoolError) -> NotificationRepositoryError {
    map_basic_pool_error(error, NotificationRepositoryError::connection)
}

fn map_diesel_error(error: diesel::result::Error) -> NotificationRepositoryError {
    map_basic_diesel_error(
        error,
        NotificationRepositoryError::query,
        NotificationRepositoryError::connection,
    )
}

fn row_to_notification(row: NotificationRow) -> Notification {
    Notification {
        id: NotificationId::from_uuid(row.id),
        recipient_id: UserId::from_uuid(row.recipient_id),
        question_id: QuestionId::from_uuid(row.question_id),
        answer_id: AnswerId::from_uuid(row.answer_id),
        message: row.message,
        is_read: row.is_read,
        created_at: row.created_at,
    }
}

#[async_trait]
impl NotificationRepository for DieselNotificationRepository {
    async fn insert(&self, notification: &Notification) -> Result<(), NotificationRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let row = NewNotificationRow {
            id: *notification.id.as_uuid(),
            recipient_id: *notification.recipient_id.as_uuid(),
            question_id: *notification.question_id.as_uuid(),
            answer_id: *notification.answer_id.as_uuid(),
            message: &notification.message,
            is_read: notification.is_read,
            created_at: notification.created_at,
        };

        diesel::insert_into(notifications::table)
            .values(&row)
            .execute(&mut conn)
            .await
            .map_err(map_diesel_error)?;
        Ok(())
    }

    async fn list_for_recipient(
        &self,
        recipient_id: &UserId,
    ) -> Result<Vec<Notification>, NotificationRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let rows = notifications::table
            .filter(notifications::recipient_id.eq(recipient_id.as_uuid()))
            .order(notifications::created_at.desc())
            .select(NotificationRow::as_select())
            .load::<NotificationRow>(&mut conn)
            .await
            .map_err(map_diesel_error)?;
        Ok(rows.into_iter().map(row_to_notification).collect())
    }

    async fn mark_read(
        &self,
        recipient_id: &UserId,
        id: &NotificationId,
    ) -> Result<Option<Notification>, NotificationRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        // The recipient is part of the predicate so foreign rows are never
        // updated; re-marking the recipient's own row stays idempotent.
        let row = diesel::update(
            notifications::table.filter(
                notifications::id
                    .eq(id.as_uuid())
                    .and(notifications::recipient_id.eq(recipient_id.as_uuid())),
            ),
        )
        .set(notifications::is_read.eq(true))
        .returning(NotificationRow::as_returning())
        .get_result::<NotificationRow>(&mut conn)
        .await
        .optional()
        .map_err(map_diesel_error)?;
        Ok(row.map(row_to_notification))
    }
}
