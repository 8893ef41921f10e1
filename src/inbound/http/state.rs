//! Shared HTTP adapter state.
//!
//! HTTP handlers accept this state via `actix_web::web::Data` so they only
//! depend on domain ports (use-cases) and remain testable without I/O.

use std::sync::Arc;

use crate::domain::ports::{
    AnswerCommand, AnswerQuery, AuthCommand, NotificationCommand, NotificationQuery,
    QuestionCommand, QuestionQuery, TokenService, UserProfileQuery, VoteCommand,
};

/// Dependency bundle for HTTP handlers.
///
/// `tokens` is consumed by the bearer-token extractor; everything else is a
/// use-case port dispatched to by exactly one handler group.
#[derive(Clone)]
pub struct HttpState {
    pub auth: Arc<dyn AuthCommand>,
    pub profile: Arc<dyn UserProfileQuery>,
    pub questions: Arc<dyn QuestionCommand>,
    pub questions_query: Arc<dyn QuestionQuery>,
    pub answers: Arc<dyn AnswerCommand>,
    pub answers_query: Arc<dyn AnswerQuery>,
    pub votes: Arc<dyn VoteCommand>,
    pub notifications: Arc<dyn NotificationCommand>,
    pub notifications_query: Arc<dyn NotificationQuery>,
    pub tokens: Arc<dyn TokenService>,
}
