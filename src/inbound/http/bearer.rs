//! Bearer-token request extractor.
//!
//! Handlers for protected routes take an [`Identity`] argument; extraction
//! verifies the `Authorization: Bearer <token>` header against the token
//! service before the handler body runs, so no side effect precedes
//! authentication.

use actix_web::dev::Payload;
use actix_web::http::header::AUTHORIZATION;
use actix_web::{FromRequest, HttpRequest, web};
use futures_util::future::{Ready, ready};

use crate::domain::ports::AuthClaims;
use crate::domain::{Error, Role, UserId};
use crate::inbound::http::state::HttpState;

/// Verified caller identity for a protected route.
#[derive(Debug, Clone, Copy)]
pub struct Identity {
    pub user_id: UserId,
    pub role: Role,
}

impl From<AuthClaims> for Identity {
    fn from(claims: AuthClaims) -> Self {
        Self {
            user_id: claims.user_id,
            role: claims.role,
        }
    }
}

fn identity_from_request(req: &HttpRequest) -> Result<Identity, Error> {
    let state = req
        .app_data::<web::Data<HttpState>>()
        .ok_or_else(|| Error::internal("http state not configured"))?;

    let header = req
        .headers()
        .get(AUTHORIZATION)
        .ok_or_else(|| Error::unauthorized("missing bearer token"))?;
    let header = header
        .to_str()
        .map_err(|_| Error::unauthorized("malformed authorization header"))?;
    let token = header
        .strip_prefix("Bearer ")
        .ok_or_else(|| Error::unauthorized("authorization header must use the Bearer scheme"))?;

    let claims = state
        .tokens
        .verify(token)
        .map_err(|error| Error::unauthorized(error.to_string()))?;
    Ok(Identity::from(claims))
}

impl FromRequest for Identity {
    type Error = Error;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        ready(identity_from_request(req))
    }
}
