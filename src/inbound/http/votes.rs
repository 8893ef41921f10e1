//! Shared vote request/response shapes.
//!
//! Both vote endpoints accept the same body, `{"direction":"upvote"}` or
//! `{"direction":"downvote"}`, and return the updated counter as
//! `{"votes":n}`.

use serde::{Deserialize, Serialize};

use crate::domain::{Error, VoteDirection};
use crate::inbound::http::validation::{FieldName, invalid_value_error};

const DIRECTION_FIELD: FieldName = FieldName::new("direction");

/// Request body for `POST .../vote`.
#[derive(Deserialize, Serialize, utoipa::ToSchema)]
pub struct VoteRequest {
    /// `"upvote"` or `"downvote"`.
    #[schema(example = "upvote")]
    pub direction: String,
}

impl VoteRequest {
    /// Parse the direction, rejecting anything but the two canonical values.
    pub fn direction(&self) -> Result<VoteDirection, Error> {
        self.direction.parse().map_err(|_| {
            invalid_value_error(
                DIRECTION_FIELD,
                &self.direction,
                "\"upvote\" or \"downvote\"",
            )
        })
    }
}

/// Response body for both vote endpoints.
#[derive(Debug, Serialize, Deserialize, utoipa::ToSchema)]
pub struct VoteResponse {
    /// The stored counter after this vote landed.
    pub votes: i32,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ErrorCode;
    use rstest::rstest;

    #[rstest]
    #[case("upvote", VoteDirection::Upvote)]
    #[case("downvote", VoteDirection::Downvote)]
    fn accepts_canonical_directions(#[case] raw: &str, #[case] expected: VoteDirection) {
        let request = VoteRequest {
            direction: raw.into(),
        };
        assert_eq!(request.direction().expect("valid direction"), expected);
    }

    #[rstest]
    #[case("up")]
    #[case("Upvote")]
    #[case("")]
    fn rejects_unknown_directions(#[case] raw: &str) {
        let request = VoteRequest {
            direction: raw.into(),
        };
        let error = request.direction().expect_err("invalid direction");
        assert_eq!(error.code(), ErrorCode::InvalidRequest);
    }
}
