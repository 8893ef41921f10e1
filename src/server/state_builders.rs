//! Construction of the HTTP dependency bundle from configuration.

use std::sync::Arc;

use actix_web::web;

use crate::domain::ports::{AnswerCommand, AuthCommand, NotificationCommand, QuestionCommand};
use crate::domain::{
    AnswerService, AuthService, NotificationService, QuestionService, VoteService,
};
use crate::inbound::http::state::HttpState;
use crate::outbound::auth::{Argon2PasswordHasher, JwtTokenService};
use crate::outbound::persistence::{
    DieselAnswerRepository, DieselNotificationRepository, DieselQuestionRepository,
    DieselUserRepository,
};

use super::config::ServerConfig;

/// Wire the Diesel repositories and domain services into the shared
/// [`HttpState`] consumed by the handlers.
pub(crate) fn build_http_state(config: &ServerConfig) -> web::Data<HttpState> {
    let users = Arc::new(DieselUserRepository::new(config.db_pool.clone()));
    let questions = Arc::new(DieselQuestionRepository::new(config.db_pool.clone()));
    let answers = Arc::new(DieselAnswerRepository::new(config.db_pool.clone()));
    let notifications = Arc::new(DieselNotificationRepository::new(config.db_pool.clone()));

    let tokens = Arc::new(JwtTokenService::new(&config.jwt_secret, config.token_ttl));
    let hasher = Arc::new(Argon2PasswordHasher::default());

    let auth = Arc::new(AuthService::new(users, hasher, Arc::clone(&tokens)));
    let question_service = Arc::new(QuestionService::new(Arc::clone(&questions)));
    let notification_service = Arc::new(NotificationService::new(notifications));
    let answer_service = Arc::new(AnswerService::new(
        Arc::clone(&answers),
        Arc::clone(&questions),
        Arc::clone(&notification_service),
    ));
    let vote_service = Arc::new(VoteService::new(questions, answers));

    web::Data::new(HttpState {
        auth: auth.clone() as Arc<dyn AuthCommand>,
        profile: auth,
        questions: question_service.clone() as Arc<dyn QuestionCommand>,
        questions_query: question_service,
        answers: answer_service.clone() as Arc<dyn AnswerCommand>,
        answers_query: answer_service,
        votes: vote_service,
        notifications: notification_service.clone() as Arc<dyn NotificationCommand>,
        notifications_query: notification_service,
        tokens,
    })
}
