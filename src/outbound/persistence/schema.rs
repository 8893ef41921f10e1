//! Diesel table definitions for the PostgreSQL schema.
//!
//! These definitions must match the database migrations exactly. They are
//! used by Diesel for compile-time query validation and type-safe SQL
//! generation. When migrations change the schema, regenerate this file with
//! `diesel print-schema` or update it by hand.

diesel::table! {
    /// Registered user accounts.
    users (id) {
        /// Primary key: UUID v4 identifier.
        id -> Uuid,
        /// Unique handle chosen at registration.
        username -> Varchar,
        /// Argon2 hash in PHC string format.
        password_hash -> Text,
        /// Authorisation role (`user` or `admin`).
        role -> Varchar,
        /// Record creation timestamp.
        created_at -> Timestamptz,
    }
}

diesel::table! {
    /// Questions posted by users.
    questions (id) {
        id -> Uuid,
        title -> Text,
        description -> Text,
        tags -> Array<Text>,
        author_id -> Uuid,
        /// Signed vote counter; mutated only by atomic increments.
        votes -> Int4,
        created_at -> Timestamptz,
    }
}

diesel::table! {
    /// Answers posted against questions.
    answers (id) {
        id -> Uuid,
        question_id -> Uuid,
        author_id -> Uuid,
        content -> Text,
        votes -> Int4,
        accepted -> Bool,
        created_at -> Timestamptz,
    }
}

diesel::table! {
    /// Per-recipient answer notifications.
    notifications (id) {
        id -> Uuid,
        recipient_id -> Uuid,
        question_id -> Uuid,
        answer_id -> Uuid,
        message -> Text,
        is_read -> Bool,
        created_at -> Timestamptz,
    }
}

diesel::joinable!(questions -> users (author_id));
diesel::joinable!(answers -> questions (question_id));
diesel::joinable!(notifications -> answers (answer_id));

diesel::allow_tables_to_appear_in_same_query!(users, questions, answers, notifications);
