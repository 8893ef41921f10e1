//! Question model.

use chrono::{DateTime, Utc};

use super::ids::{QuestionId, UserId};

/// A question posted by a registered user.
///
/// The `votes` counter is mutated exclusively through the vote service via an
/// atomic storage-level increment; it may go negative, there is no floor.
#[derive(Debug, Clone, PartialEq)]
pub struct Question {
    pub id: QuestionId,
    pub title: String,
    pub description: String,
    pub tags: Vec<String>,
    pub author_id: UserId,
    pub votes: i32,
    pub created_at: DateTime<Utc>,
}

impl Question {
    /// Build a fresh question for the given author. Votes start at zero.
    pub fn post(
        author_id: UserId,
        title: String,
        description: String,
        tags: Vec<String>,
    ) -> Self {
        Self {
            id: QuestionId::random(),
            title,
            description,
            tags,
            author_id,
            votes: 0,
            created_at: Utc::now(),
        }
    }
}
