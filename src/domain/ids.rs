//! Strongly typed entity identifiers.
//!
//! Each collection gets its own identifier newtype so handler and repository
//! signatures cannot mix up, say, a question id and an answer id. All ids are
//! UUID v4 and serialise as plain strings.

use std::fmt;

use uuid::Uuid;

/// Error returned when parsing an identifier from a string.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{entity} id must be a valid UUID")]
pub struct ParseIdError {
    entity: &'static str,
}

macro_rules! define_entity_id {
    (
        $(#[$outer:meta])*
        $name:ident => $entity:literal
    ) => {
        $(#[$outer])*
        #[derive(
            Debug,
            Clone,
            Copy,
            PartialEq,
            Eq,
            Hash,
            serde::Serialize,
            serde::Deserialize,
            utoipa::ToSchema,
        )]
        #[serde(transparent)]
        pub struct $name(Uuid);

        impl $name {
            /// Generate a new random identifier.
            pub fn random() -> Self {
                Self(Uuid::new_v4())
            }

            /// Wrap an existing UUID, e.g. one read back from storage.
            pub fn from_uuid(id: Uuid) -> Self {
                Self(id)
            }

            /// Parse an identifier from its canonical string form.
            pub fn parse(raw: &str) -> Result<Self, ParseIdError> {
                Uuid::parse_str(raw)
                    .map(Self)
                    .map_err(|_| ParseIdError { entity: $entity })
            }

            /// Access the underlying UUID.
            pub fn as_uuid(&self) -> &Uuid {
                &self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl From<Uuid> for $name {
            fn from(id: Uuid) -> Self {
                Self(id)
            }
        }
    };
}

define_entity_id! {
    /// Stable identifier for a registered user.
    UserId => "user"
}

define_entity_id! {
    /// Stable identifier for a question.
    QuestionId => "question"
}

define_entity_id! {
    /// Stable identifier for an answer.
    AnswerId => "answer"
}

define_entity_id! {
    /// Stable identifier for a notification.
    NotificationId => "notification"
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn parse_round_trips_canonical_form() {
        let id = QuestionId::random();
        let parsed = QuestionId::parse(&id.to_string()).expect("canonical form parses");
        assert_eq!(parsed, id);
    }

    #[rstest]
    #[case("")]
    #[case("not-a-uuid")]
    #[case("3fa85f64-5717-4562-b3fc")]
    fn parse_rejects_invalid_input(#[case] raw: &str) {
        let err = UserId::parse(raw).expect_err("invalid input rejected");
        assert_eq!(err.to_string(), "user id must be a valid UUID");
    }

    #[rstest]
    fn serialises_as_plain_string() {
        let id = AnswerId::random();
        let json = serde_json::to_value(id).expect("serialises");
        assert_eq!(json, serde_json::json!(id.to_string()));
    }
}
