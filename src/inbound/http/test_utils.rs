//! Helpers shared by HTTP handler tests.

use std::sync::Arc;

use crate::domain::ports::{
    MockAnswerCommand, MockAnswerQuery, MockAuthCommand, MockNotificationCommand,
    MockNotificationQuery, MockQuestionCommand, MockQuestionQuery, MockTokenService,
    MockUserProfileQuery, MockVoteCommand,
};
use crate::domain::ports::{AuthClaims, TokenServiceError};
use crate::domain::{Role, UserId};
use crate::inbound::http::state::HttpState;

/// Mock bundle for assembling an [`HttpState`] in tests. Unset mocks panic
/// when called, so each test only configures the ports it exercises.
#[derive(Default)]
pub(crate) struct TestPorts {
    pub auth: MockAuthCommand,
    pub profile: MockUserProfileQuery,
    pub questions: MockQuestionCommand,
    pub questions_query: MockQuestionQuery,
    pub answers: MockAnswerCommand,
    pub answers_query: MockAnswerQuery,
    pub votes: MockVoteCommand,
    pub notifications: MockNotificationCommand,
    pub notifications_query: MockNotificationQuery,
    pub tokens: MockTokenService,
}

impl TestPorts {
    pub(crate) fn into_state(self) -> HttpState {
        HttpState {
            auth: Arc::new(self.auth),
            profile: Arc::new(self.profile),
            questions: Arc::new(self.questions),
            questions_query: Arc::new(self.questions_query),
            answers: Arc::new(self.answers),
            answers_query: Arc::new(self.answers_query),
            votes: Arc::new(self.votes),
            notifications: Arc::new(self.notifications),
            notifications_query: Arc::new(self.notifications_query),
            tokens: Arc::new(self.tokens),
        }
    }

    /// Accept any token as `caller` with the user role.
    pub(crate) fn with_verified_caller(mut self, caller: UserId) -> Self {
        self.tokens.expect_verify().returning(move |_| {
            Ok(AuthClaims {
                user_id: caller,
                role: Role::User,
            })
        });
        self
    }

    /// Reject every presented token.
    pub(crate) fn with_rejected_tokens(mut self) -> Self {
        self.tokens
            .expect_verify()
            .returning(|_| Err(TokenServiceError::invalid("signature mismatch")));
        self
    }
}

/// Authorization header for a protected-route test request.
pub(crate) fn bearer_header() -> (&'static str, &'static str) {
    ("Authorization", "Bearer test-token")
}
