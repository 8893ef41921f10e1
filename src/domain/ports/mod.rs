//! Domain ports.
//!
//! Driven ports (repositories, token service, password hasher) speak in their
//! own `thiserror` enums; driving ports (the use-case traits handlers depend
//! on) speak in the transport-agnostic domain [`Error`](crate::domain::Error).
//! All ports carry `mockall` automocks for tests.

mod macros;

pub mod answer_repository;
pub mod answers;
pub mod auth;
pub mod notification_repository;
pub mod notifications;
pub mod password_hasher;
pub mod question_repository;
pub mod questions;
pub mod token_service;
pub mod user_repository;
pub mod votes;

pub(crate) use macros::define_port_error;

pub use answer_repository::{AnswerRepository, AnswerRepositoryError};
pub use answers::{AnswerCommand, AnswerQuery, NewAnswer};
pub use auth::{AuthCommand, AuthenticatedUser, UserProfileQuery};
pub use notification_repository::{NotificationRepository, NotificationRepositoryError};
pub use notifications::{AnswerPostedNotifier, NotificationCommand, NotificationQuery};
pub use password_hasher::{PasswordHasher, PasswordHasherError};
pub use question_repository::{QuestionRepository, QuestionRepositoryError};
pub use questions::{NewQuestion, QuestionCommand, QuestionQuery};
pub use token_service::{AuthClaims, TokenService, TokenServiceError};
pub use user_repository::{UserRepository, UserRepositoryError};
pub use votes::VoteCommand;

#[cfg(test)]
pub use answer_repository::MockAnswerRepository;
#[cfg(test)]
pub use answers::{MockAnswerCommand, MockAnswerQuery};
#[cfg(test)]
pub use auth::{MockAuthCommand, MockUserProfileQuery};
#[cfg(test)]
pub use notification_repository::MockNotificationRepository;
#[cfg(test)]
pub use notifications::{MockAnswerPostedNotifier, MockNotificationCommand, MockNotificationQuery};
#[cfg(test)]
pub use password_hasher::MockPasswordHasher;
#[cfg(test)]
pub use question_repository::MockQuestionRepository;
#[cfg(test)]
pub use questions::{MockQuestionCommand, MockQuestionQuery};
#[cfg(test)]
pub use token_service::MockTokenService;
#[cfg(test)]
pub use user_repository::MockUserRepository;
#[cfg(test)]
pub use votes::MockVoteCommand;
