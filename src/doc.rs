//! OpenAPI documentation configuration.
//!
//! [`ApiDoc`] generates the OpenAPI specification for the REST API. It
//! registers every HTTP endpoint from the inbound layer, the request and
//! response schemas, and the bearer-token security scheme. Swagger UI serves
//! the document in debug builds.

use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::{Modify, OpenApi};

use crate::domain::{Error, ErrorCode, Role};
use crate::domain::ids::{AnswerId, NotificationId, QuestionId, UserId};
use crate::inbound::http::answers::{AnswerRequest, AnswerResponse};
use crate::inbound::http::auth::{AuthResponse, CredentialsRequest, UserResponse};
use crate::inbound::http::notifications::NotificationResponse;
use crate::inbound::http::questions::{QuestionRequest, QuestionResponse};
use crate::inbound::http::votes::{VoteRequest, VoteResponse};

/// Enrich the generated document with the bearer-token security scheme.
struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        let components = openapi
            .components
            .get_or_insert_with(utoipa::openapi::Components::default);

        components.add_security_scheme(
            "BearerToken",
            SecurityScheme::Http(
                HttpBuilder::new()
                    .scheme(HttpAuthScheme::Bearer)
                    .bearer_format("JWT")
                    .description(Some(
                        "Token issued by POST /api/auth/register or /api/auth/login.",
                    ))
                    .build(),
            ),
        );
    }
}

/// OpenAPI document for the REST API.
/// Swagger UI is enabled in debug builds only and used by tooling.
#[derive(OpenApi)]
#[openapi(
    modifiers(&SecurityAddon),
    info(
        title = "StackIt backend API",
        description = "HTTP interface for questions, answers, votes, and notifications."
    ),
    servers(
        (url = "/", description = "Relative to the deployment base URL")
    ),
    security(("BearerToken" = [])),
    paths(
        crate::inbound::http::auth::register,
        crate::inbound::http::auth::login,
        crate::inbound::http::auth::profile,
        crate::inbound::http::questions::create,
        crate::inbound::http::questions::list,
        crate::inbound::http::questions::get_by_id,
        crate::inbound::http::questions::vote,
        crate::inbound::http::answers::list,
        crate::inbound::http::answers::create,
        crate::inbound::http::answers::vote,
        crate::inbound::http::answers::accept,
        crate::inbound::http::notifications::list,
        crate::inbound::http::notifications::mark_read,
        crate::inbound::http::health::ready,
        crate::inbound::http::health::live,
    ),
    components(schemas(
        Error,
        ErrorCode,
        Role,
        UserId,
        QuestionId,
        AnswerId,
        NotificationId,
        CredentialsRequest,
        UserResponse,
        AuthResponse,
        QuestionRequest,
        QuestionResponse,
        AnswerRequest,
        AnswerResponse,
        NotificationResponse,
        VoteRequest,
        VoteResponse,
    )),
    tags(
        (name = "auth", description = "Registration, login, and profile access"),
        (name = "questions", description = "Posting, browsing, and voting on questions"),
        (name = "answers", description = "Posting, voting on, and accepting answers"),
        (name = "notifications", description = "Per-user notification feed"),
        (name = "health", description = "Endpoints for health checks")
    )
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    use super::*;
    use utoipa::OpenApi;
    use utoipa::openapi::RefOr;
    use utoipa::openapi::schema::Schema;

    /// Assert that an Object schema contains a field with the given name.
    fn assert_object_schema_has_field(schema: &RefOr<Schema>, field: &str) {
        match schema {
            RefOr::T(Schema::Object(obj)) => {
                assert!(
                    obj.properties.contains_key(field),
                    "schema should have field '{field}'"
                );
            }
            _ => panic!("expected Object schema"),
        }
    }

    #[test]
    fn openapi_error_schema_has_required_fields() {
        let doc = ApiDoc::openapi();
        let schemas = &doc.components.as_ref().expect("components").schemas;
        let error_schema = schemas.get("Error").expect("Error schema");

        assert_object_schema_has_field(error_schema, "code");
        assert_object_schema_has_field(error_schema, "message");
    }

    #[test]
    fn openapi_registers_all_endpoints() {
        let doc = ApiDoc::openapi();
        let paths = &doc.paths.paths;

        for path in [
            "/api/auth/register",
            "/api/auth/login",
            "/api/auth/profile",
            "/api/questions",
            "/api/questions/{id}",
            "/api/questions/{id}/vote",
            "/api/answers",
            "/api/answers/{questionId}",
            "/api/answers/{id}/vote",
            "/api/answers/{id}/accept",
            "/api/notifications",
            "/api/notifications/{id}/read",
            "/health/ready",
            "/health/live",
        ] {
            assert!(paths.contains_key(path), "missing path '{path}'");
        }
    }
}
