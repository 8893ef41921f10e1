//! Answer model.

use chrono::{DateTime, Utc};

use super::ids::{AnswerId, QuestionId, UserId};

/// An answer posted against an existing question.
#[derive(Debug, Clone, PartialEq)]
pub struct Answer {
    pub id: AnswerId,
    pub question_id: QuestionId,
    pub author_id: UserId,
    pub content: String,
    pub votes: i32,
    pub accepted: bool,
    pub created_at: DateTime<Utc>,
}

impl Answer {
    /// Build a fresh answer. Votes start at zero and the answer is not
    /// accepted.
    pub fn post(question_id: QuestionId, author_id: UserId, content: String) -> Self {
        Self {
            id: AnswerId::random(),
            question_id,
            author_id,
            content,
            votes: 0,
            accepted: false,
            created_at: Utc::now(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn post_starts_unaccepted_with_zero_votes() {
        let answer = Answer::post(QuestionId::random(), UserId::random(), "Use flexbox.".into());
        assert_eq!(answer.votes, 0);
        assert!(!answer.accepted);
    }
}
