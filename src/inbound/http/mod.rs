//! HTTP inbound adapter exposing REST endpoints.

pub mod answers;
pub mod auth;
pub mod bearer;
pub mod error;
pub mod health;
pub mod notifications;
pub mod questions;
pub mod state;
#[cfg(test)]
pub mod test_utils;
pub mod validation;
pub mod votes;

pub use error::ApiResult;
