//! Domain model and services.
//!
//! Entities are plain structs with their invariants enforced at construction.
//! `ports` declares the traits the domain depends on (driven) and exposes
//! (driving); the `*_service` modules implement the driving ports on top of
//! the driven ones. Nothing in this tree knows about HTTP or Postgres.

pub mod answer;
pub mod answer_service;
pub mod auth_service;
pub mod error;
pub mod ids;
pub mod notification;
pub mod notification_service;
pub mod ports;
pub mod question;
pub mod question_service;
pub mod user;
pub mod vote;
pub mod vote_service;

pub use self::answer::Answer;
pub use self::answer_service::AnswerService;
pub use self::auth_service::AuthService;
pub use self::error::{Error, ErrorCode};
pub use self::ids::{AnswerId, NotificationId, ParseIdError, QuestionId, UserId};
pub use self::notification::{ANSWER_NOTIFICATION_MESSAGE, Notification};
pub use self::notification_service::NotificationService;
pub use self::question::Question;
pub use self::question_service::QuestionService;
pub use self::user::{
    CredentialsValidationError, LoginCredentials, PasswordHash, Role, User, Username,
    UsernameValidationError,
};
pub use self::vote::{VoteDirection, VoteTarget};
pub use self::vote_service::VoteService;

/// Convenient API result alias.
pub type ApiResult<T> = Result<T, Error>;
