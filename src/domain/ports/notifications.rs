//! Driving ports for the notification use-cases.

use async_trait::async_trait;

use crate::domain::{Answer, Error, Notification, NotificationId, Question, UserId};

/// Secondary-effect port fired after an answer is durably created.
///
/// This is deliberately separate from [`NotificationCommand`]: the answer
/// workflow commits its primary write first and then invokes this port
/// fire-and-forget, logging any failure instead of propagating it.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait AnswerPostedNotifier: Send + Sync {
    /// Apply the decision rule: self-answers produce nothing; otherwise
    /// persist exactly one notification for the question author and return
    /// it.
    async fn notify_on_answer(
        &self,
        question: &Question,
        answer: &Answer,
    ) -> Result<Option<Notification>, Error>;
}

/// Driving port for a recipient reading their notifications.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait NotificationQuery: Send + Sync {
    /// List the caller's notifications, newest first.
    async fn list(&self, recipient_id: &UserId) -> Result<Vec<Notification>, Error>;
}

/// Driving port for a recipient mutating their notifications.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait NotificationCommand: Send + Sync {
    /// Mark one of the caller's notifications read. Idempotent: marking an
    /// already-read notification succeeds again. Notifications belonging to
    /// other recipients are reported as not found.
    async fn mark_read(
        &self,
        caller: &UserId,
        id: &NotificationId,
    ) -> Result<Notification, Error>;
}
