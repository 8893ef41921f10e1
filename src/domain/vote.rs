//! Vote primitives.
//!
//! Both vote endpoints share one canonical payload shape,
//! `{"direction": "upvote" | "downvote"}`, applied uniformly to questions
//! and answers.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::ids::{AnswerId, QuestionId};

/// Direction of a single vote.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum VoteDirection {
    Upvote,
    Downvote,
}

impl VoteDirection {
    /// Signed delta applied to the stored counter.
    pub fn delta(self) -> i32 {
        match self {
            VoteDirection::Upvote => 1,
            VoteDirection::Downvote => -1,
        }
    }
}

impl fmt::Display for VoteDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            VoteDirection::Upvote => f.write_str("upvote"),
            VoteDirection::Downvote => f.write_str("downvote"),
        }
    }
}

impl FromStr for VoteDirection {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "upvote" => Ok(VoteDirection::Upvote),
            "downvote" => Ok(VoteDirection::Downvote),
            other => Err(format!("unknown vote direction: {other}")),
        }
    }
}

/// Entity a vote is applied to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VoteTarget {
    Question(QuestionId),
    Answer(AnswerId),
}

impl VoteTarget {
    /// Noun used in not-found messages.
    pub fn kind(&self) -> &'static str {
        match self {
            VoteTarget::Question(_) => "question",
            VoteTarget::Answer(_) => "answer",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("upvote", VoteDirection::Upvote, 1)]
    #[case("downvote", VoteDirection::Downvote, -1)]
    fn direction_parses_and_maps_to_delta(
        #[case] raw: &str,
        #[case] expected: VoteDirection,
        #[case] delta: i32,
    ) {
        let direction: VoteDirection = raw.parse().expect("known direction");
        assert_eq!(direction, expected);
        assert_eq!(direction.delta(), delta);
        assert_eq!(direction.to_string(), raw);
    }

    #[rstest]
    #[case("up")]
    #[case("UPVOTE")]
    #[case("")]
    fn direction_rejects_unknown_values(#[case] raw: &str) {
        assert!(raw.parse::<VoteDirection>().is_err());
    }
}
