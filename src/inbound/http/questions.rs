//! Questions API handlers.
//!
//! ```text
//! GET /api/questions
//! GET /api/questions/{id}
//! POST /api/questions {"title":"...","description":"...","tags":["css"]}
//! POST /api/questions/{id}/vote {"direction":"upvote"}
//! ```

use actix_web::{HttpResponse, get, post, web};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::ports::NewQuestion;
use crate::domain::{Error, Question, QuestionId, UserId, VoteTarget};
use crate::inbound::http::ApiResult;
use crate::inbound::http::bearer::Identity;
use crate::inbound::http::state::HttpState;
use crate::inbound::http::validation::{FieldName, invalid_uuid_error, missing_field_error};
use crate::inbound::http::votes::{VoteRequest, VoteResponse};

const ID_FIELD: FieldName = FieldName::new("id");

/// Request body for `POST /api/questions`.
#[derive(Deserialize, Serialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct QuestionRequest {
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub tags: Vec<String>,
}

impl QuestionRequest {
    fn into_new_question(self, author_id: UserId) -> Result<NewQuestion, Error> {
        if self.title.trim().is_empty() {
            return Err(missing_field_error(FieldName::new("title")));
        }
        if self.description.trim().is_empty() {
            return Err(missing_field_error(FieldName::new("description")));
        }
        Ok(NewQuestion {
            author_id,
            title: self.title,
            description: self.description,
            tags: self.tags,
        })
    }
}

/// Public view of a question.
#[derive(Debug, Serialize, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct QuestionResponse {
    pub id: QuestionId,
    pub title: String,
    pub description: String,
    pub tags: Vec<String>,
    pub author_id: UserId,
    pub votes: i32,
    pub created_at: DateTime<Utc>,
}

impl From<Question> for QuestionResponse {
    fn from(question: Question) -> Self {
        Self {
            id: question.id,
            title: question.title,
            description: question.description,
            tags: question.tags,
            author_id: question.author_id,
            votes: question.votes,
            created_at: question.created_at,
        }
    }
}

fn parse_question_id(raw: &str) -> Result<QuestionId, Error> {
    QuestionId::parse(raw).map_err(|_| invalid_uuid_error(ID_FIELD, raw))
}

/// Post a new question.
#[utoipa::path(
    post,
    path = "/api/questions",
    request_body = QuestionRequest,
    responses(
        (status = 201, description = "Question created", body = QuestionResponse),
        (status = 400, description = "Invalid request", body = Error),
        (status = 401, description = "Unauthorised", body = Error),
        (status = 500, description = "Internal server error", body = Error)
    ),
    tags = ["questions"],
    operation_id = "createQuestion"
)]
#[post("")]
pub async fn create(
    state: web::Data<HttpState>,
    identity: Identity,
    payload: web::Json<QuestionRequest>,
) -> ApiResult<HttpResponse> {
    let request = payload.into_inner().into_new_question(identity.user_id)?;
    let question = state.questions.create(request).await?;
    Ok(HttpResponse::Created().json(QuestionResponse::from(question)))
}

/// List all questions, newest first.
#[utoipa::path(
    get,
    path = "/api/questions",
    responses(
        (status = 200, description = "Questions, newest first", body = [QuestionResponse]),
        (status = 500, description = "Internal server error", body = Error)
    ),
    tags = ["questions"],
    operation_id = "listQuestions",
    security([])
)]
#[get("")]
pub async fn list(state: web::Data<HttpState>) -> ApiResult<web::Json<Vec<QuestionResponse>>> {
    let questions = state.questions_query.list().await?;
    Ok(web::Json(
        questions.into_iter().map(QuestionResponse::from).collect(),
    ))
}

/// Fetch a single question.
#[utoipa::path(
    get,
    path = "/api/questions/{id}",
    params(("id" = String, Path, description = "Question id")),
    responses(
        (status = 200, description = "Question", body = QuestionResponse),
        (status = 400, description = "Invalid id", body = Error),
        (status = 404, description = "Not found", body = Error),
        (status = 500, description = "Internal server error", body = Error)
    ),
    tags = ["questions"],
    operation_id = "getQuestion",
    security([])
)]
#[get("/{id}")]
pub async fn get_by_id(
    state: web::Data<HttpState>,
    path: web::Path<String>,
) -> ApiResult<web::Json<QuestionResponse>> {
    let id = parse_question_id(&path.into_inner())?;
    let question = state.questions_query.get(&id).await?;
    Ok(web::Json(QuestionResponse::from(question)))
}

/// Apply one vote to a question.
#[utoipa::path(
    post,
    path = "/api/questions/{id}/vote",
    params(("id" = String, Path, description = "Question id")),
    request_body = VoteRequest,
    responses(
        (status = 200, description = "Updated counter", body = VoteResponse),
        (status = 400, description = "Invalid request", body = Error),
        (status = 401, description = "Unauthorised", body = Error),
        (status = 404, description = "Not found", body = Error),
        (status = 500, description = "Internal server error", body = Error)
    ),
    tags = ["questions"],
    operation_id = "voteQuestion"
)]
#[post("/{id}/vote")]
pub async fn vote(
    state: web::Data<HttpState>,
    _identity: Identity,
    path: web::Path<String>,
    payload: web::Json<VoteRequest>,
) -> ApiResult<web::Json<VoteResponse>> {
    let id = parse_question_id(&path.into_inner())?;
    let direction = payload.direction()?;
    let votes = state
        .votes
        .apply(VoteTarget::Question(id), direction)
        .await?;
    Ok(web::Json(VoteResponse { votes }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::VoteDirection;
    use crate::inbound::http::test_utils::{TestPorts, bearer_header};
    use actix_web::http::StatusCode;
    use actix_web::{App, test as actix_test};
    use serde_json::{Value, json};

    fn test_app(
        state: HttpState,
    ) -> App<
        impl actix_web::dev::ServiceFactory<
                actix_web::dev::ServiceRequest,
                Config = (),
                Response = actix_web::dev::ServiceResponse,
                Error = actix_web::Error,
                InitError = (),
            >,
    > {
        App::new().app_data(web::Data::new(state)).service(
            web::scope("/api/questions")
                .service(create)
                .service(list)
                .service(get_by_id)
                .service(vote),
        )
    }

    fn sample_question(author: UserId) -> Question {
        Question::post(
            author,
            "How to center a div?".into(),
            "It refuses to center.".into(),
            vec!["css".into()],
        )
    }

    #[actix_web::test]
    async fn create_uses_token_identity_as_author() {
        let caller = UserId::random();
        let mut ports = TestPorts::default().with_verified_caller(caller);
        ports
            .questions
            .expect_create()
            .withf(move |request: &NewQuestion| request.author_id == caller)
            .times(1)
            .return_once(move |request| {
                Ok(Question::post(
                    request.author_id,
                    request.title,
                    request.description,
                    request.tags,
                ))
            });
        let app = actix_test::init_service(test_app(ports.into_state())).await;

        let response = actix_test::call_service(
            &app,
            actix_test::TestRequest::post()
                .uri("/api/questions")
                .insert_header(bearer_header())
                .set_json(json!({
                    "title": "How to center a div?",
                    "description": "It refuses to center.",
                    "tags": ["css"]
                }))
                .to_request(),
        )
        .await;
        assert_eq!(response.status(), StatusCode::CREATED);
        let value: Value = actix_test::read_body_json(response).await;
        assert_eq!(value.get("votes"), Some(&Value::from(0)));
        assert_eq!(
            value.get("authorId"),
            Some(&Value::from(caller.to_string()))
        );
    }

    #[actix_web::test]
    async fn create_without_token_is_unauthorized() {
        let app = actix_test::init_service(test_app(TestPorts::default().into_state())).await;
        let response = actix_test::call_service(
            &app,
            actix_test::TestRequest::post()
                .uri("/api/questions")
                .set_json(json!({ "title": "t", "description": "d" }))
                .to_request(),
        )
        .await;
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    }

    #[actix_web::test]
    async fn create_rejects_blank_title() {
        let caller = UserId::random();
        let app = actix_test::init_service(test_app(
            TestPorts::default().with_verified_caller(caller).into_state(),
        ))
        .await;
        let response = actix_test::call_service(
            &app,
            actix_test::TestRequest::post()
                .uri("/api/questions")
                .insert_header(bearer_header())
                .set_json(json!({ "title": "  ", "description": "d" }))
                .to_request(),
        )
        .await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let value: Value = actix_test::read_body_json(response).await;
        assert_eq!(
            value.get("details").and_then(|d| d.get("field")),
            Some(&Value::from("title"))
        );
    }

    #[actix_web::test]
    async fn get_with_malformed_id_is_bad_request() {
        let app = actix_test::init_service(test_app(TestPorts::default().into_state())).await;
        let response = actix_test::call_service(
            &app,
            actix_test::TestRequest::get()
                .uri("/api/questions/not-a-uuid")
                .to_request(),
        )
        .await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let value: Value = actix_test::read_body_json(response).await;
        assert_eq!(
            value.get("details").and_then(|d| d.get("code")),
            Some(&Value::from("invalid_uuid"))
        );
    }

    #[actix_web::test]
    async fn list_serialises_camel_case() {
        let question = sample_question(UserId::random());
        let mut ports = TestPorts::default();
        ports
            .questions_query
            .expect_list()
            .times(1)
            .return_once(move || Ok(vec![question]));
        let app = actix_test::init_service(test_app(ports.into_state())).await;

        let response = actix_test::call_service(
            &app,
            actix_test::TestRequest::get()
                .uri("/api/questions")
                .to_request(),
        )
        .await;
        assert_eq!(response.status(), StatusCode::OK);
        let value: Value = actix_test::read_body_json(response).await;
        let first = &value.as_array().expect("array")[0];
        assert!(first.get("createdAt").is_some());
        assert!(first.get("created_at").is_none());
    }

    #[actix_web::test]
    async fn vote_returns_updated_counter() {
        let caller = UserId::random();
        let id = QuestionId::random();
        let mut ports = TestPorts::default().with_verified_caller(caller);
        ports
            .votes
            .expect_apply()
            .withf(move |target, direction| {
                matches!(target, VoteTarget::Question(q) if *q == id)
                    && *direction == VoteDirection::Upvote
            })
            .times(1)
            .return_once(|_, _| Ok(4));
        let app = actix_test::init_service(test_app(ports.into_state())).await;

        let response = actix_test::call_service(
            &app,
            actix_test::TestRequest::post()
                .uri(&format!("/api/questions/{id}/vote"))
                .insert_header(bearer_header())
                .set_json(json!({ "direction": "upvote" }))
                .to_request(),
        )
        .await;
        assert_eq!(response.status(), StatusCode::OK);
        let value: Value = actix_test::read_body_json(response).await;
        assert_eq!(value.get("votes"), Some(&Value::from(4)));
    }

    #[actix_web::test]
    async fn vote_rejects_unknown_direction() {
        let caller = UserId::random();
        let id = QuestionId::random();
        let app = actix_test::init_service(test_app(
            TestPorts::default().with_verified_caller(caller).into_state(),
        ))
        .await;
        let response = actix_test::call_service(
            &app,
            actix_test::TestRequest::post()
                .uri(&format!("/api/questions/{id}/vote"))
                .insert_header(bearer_header())
                .set_json(json!({ "direction": "sideways" }))
                .to_request(),
        )
        .await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let value: Value = actix_test::read_body_json(response).await;
        assert_eq!(
            value.get("details").and_then(|d| d.get("value")),
            Some(&Value::from("sideways"))
        );
    }
}
