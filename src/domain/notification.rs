//! Notification model.
//!
//! A notification is created exactly once per answer-creation event where the
//! answerer is not the question's author, and is mutated only by its
//! recipient marking it read. References are point-in-time: there is no
//! cascade delete, so a notification may outlive the entities it points at.

use chrono::{DateTime, Utc};

use super::answer::Answer;
use super::ids::{AnswerId, NotificationId, QuestionId, UserId};
use super::question::Question;

/// Message attached to every answer notification.
pub const ANSWER_NOTIFICATION_MESSAGE: &str = "Your question has a new answer!";

/// A persisted notification for a single recipient.
#[derive(Debug, Clone, PartialEq)]
pub struct Notification {
    pub id: NotificationId,
    pub recipient_id: UserId,
    pub question_id: QuestionId,
    pub answer_id: AnswerId,
    pub message: String,
    pub is_read: bool,
    pub created_at: DateTime<Utc>,
}

impl Notification {
    /// Build the notification announcing `answer` to the author of
    /// `question`. The caller is responsible for the decision rule; this
    /// constructor only assembles the record.
    pub fn for_answer(question: &Question, answer: &Answer) -> Self {
        Self {
            id: NotificationId::random(),
            recipient_id: question.author_id,
            question_id: question.id,
            answer_id: answer.id,
            message: ANSWER_NOTIFICATION_MESSAGE.to_owned(),
            is_read: false,
            created_at: Utc::now(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn for_answer_targets_question_author() {
        let question = Question::post(
            UserId::random(),
            "Q".into(),
            "Body".into(),
            Vec::new(),
        );
        let answer = Answer::post(question.id, UserId::random(), "A".into());

        let notification = Notification::for_answer(&question, &answer);

        assert_eq!(notification.recipient_id, question.author_id);
        assert_eq!(notification.question_id, question.id);
        assert_eq!(notification.answer_id, answer.id);
        assert_eq!(notification.message, ANSWER_NOTIFICATION_MESSAGE);
        assert!(!notification.is_read);
    }
}
