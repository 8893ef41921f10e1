//! Notification domain service.
//!
//! Owns the answer-notification decision rule and the recipient-facing
//! read/mark-read operations.

use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::ports::{
    AnswerPostedNotifier, NotificationCommand, NotificationQuery, NotificationRepository,
    NotificationRepositoryError,
};
use crate::domain::{Answer, Error, Notification, NotificationId, Question, UserId};

/// Notification service implementing the driving ports.
#[derive(Clone)]
pub struct NotificationService<N> {
    notifications: Arc<N>,
}

impl<N> NotificationService<N> {
    /// Create a new service over the notification repository.
    pub fn new(notifications: Arc<N>) -> Self {
        Self { notifications }
    }
}

fn map_repository_error(error: NotificationRepositoryError) -> Error {
    match error {
        NotificationRepositoryError::Connection { message } => {
            Error::service_unavailable(format!("notification repository unavailable: {message}"))
        }
        NotificationRepositoryError::Query { message } => {
            Error::internal(format!("notification repository error: {message}"))
        }
    }
}

#[async_trait]
impl<N> AnswerPostedNotifier for NotificationService<N>
where
    N: NotificationRepository,
{
    async fn notify_on_answer(
        &self,
        question: &Question,
        answer: &Answer,
    ) -> Result<Option<Notification>, Error> {
        if answer.author_id == question.author_id {
            return Ok(None);
        }

        let notification = Notification::for_answer(question, answer);
        self.notifications
            .insert(&notification)
            .await
            .map_err(map_repository_error)?;
        Ok(Some(notification))
    }
}

#[async_trait]
impl<N> NotificationQuery for NotificationService<N>
where
    N: NotificationRepository,
{
    async fn list(&self, recipient_id: &UserId) -> Result<Vec<Notification>, Error> {
        self.notifications
            .list_for_recipient(recipient_id)
            .await
            .map_err(map_repository_error)
    }
}

#[async_trait]
impl<N> NotificationCommand for NotificationService<N>
where
    N: NotificationRepository,
{
    async fn mark_read(
        &self,
        caller: &UserId,
        id: &NotificationId,
    ) -> Result<Notification, Error> {
        // The caller is part of the update predicate, so another recipient's
        // id reads as missing and the stored row stays untouched.
        self.notifications
            .mark_read(caller, id)
            .await
            .map_err(map_repository_error)?
            .ok_or_else(|| Error::not_found("notification not found"))
    }
}
