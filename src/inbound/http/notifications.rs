//! Notifications API handlers.
//!
//! ```text
//! GET /api/notifications
//! PATCH /api/notifications/{id}/read
//! ```
//!
//! Both routes act on the caller's own notifications only.

use actix_web::{patch, get, web};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::{AnswerId, Error, Notification, NotificationId, QuestionId};
use crate::inbound::http::ApiResult;
use crate::inbound::http::bearer::Identity;
use crate::inbound::http::state::HttpState;
use crate::inbound::http::validation::{FieldName, invalid_uuid_error};

const ID_FIELD: FieldName = FieldName::new("id");

/// Public view of a notification.
#[derive(Debug, Serialize, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct NotificationResponse {
    pub id: NotificationId,
    pub question_id: QuestionId,
    pub answer_id: AnswerId,
    pub message: String,
    pub is_read: bool,
    pub created_at: DateTime<Utc>,
}

impl From<Notification> for NotificationResponse {
    fn from(notification: Notification) -> Self {
        Self {
            id: notification.id,
            question_id: notification.question_id,
            answer_id: notification.answer_id,
            message: notification.message,
            is_read: notification.is_read,
            created_at: notification.created_at,
        }
    }
}

/// List the caller's notifications, newest first.
#[utoipa::path(
    get,
    path = "/api/notifications",
    responses(
        (status = 200, description = "Notifications, newest first", body = [NotificationResponse]),
        (status = 401, description = "Unauthorised", body = Error),
        (status = 500, description = "Internal server error", body = Error)
    ),
    tags = ["notifications"],
    operation_id = "listNotifications"
)]
#[get("")]
pub async fn list(
    state: web::Data<HttpState>,
    identity: Identity,
) -> ApiResult<web::Json<Vec<NotificationResponse>>> {
    let notifications = state.notifications_query.list(&identity.user_id).await?;
    Ok(web::Json(
        notifications
            .into_iter()
            .map(NotificationResponse::from)
            .collect(),
    ))
}

/// Mark one of the caller's notifications read. Idempotent.
#[utoipa::path(
    patch,
    path = "/api/notifications/{id}/read",
    params(("id" = String, Path, description = "Notification id")),
    responses(
        (status = 200, description = "Notification marked read", body = NotificationResponse),
        (status = 400, description = "Invalid id", body = Error),
        (status = 401, description = "Unauthorised", body = Error),
        (status = 404, description = "Not found", body = Error),
        (status = 500, description = "Internal server error", body = Error)
    ),
    tags = ["notifications"],
    operation_id = "markNotificationRead"
)]
#[patch("/{id}/read")]
pub async fn mark_read(
    state: web::Data<HttpState>,
    identity: Identity,
    path: web::Path<String>,
) -> ApiResult<web::Json<NotificationResponse>> {
    let raw = path.into_inner();
    let id = NotificationId::parse(&raw).map_err(|_| invalid_uuid_error(ID_FIELD, &raw))?;
    let notification = state.notifications.mark_read(&identity.user_id, &id).await?;
    Ok(web::Json(NotificationResponse::from(notification)))
}
