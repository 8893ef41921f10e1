//! Answers API handlers.
//!
//! ```text
//! GET /api/answers?questionId=...
//! POST /api/answers/{questionId} {"content":"..."}
//! POST /api/answers/{id}/vote {"direction":"downvote"}
//! POST /api/answers/{id}/accept
//! ```

use actix_web::{HttpResponse, get, post, web};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::ports::NewAnswer;
use crate::domain::{Answer, AnswerId, Error, QuestionId, UserId, VoteTarget};
use crate::inbound::http::ApiResult;
use crate::inbound::http::bearer::Identity;
use crate::inbound::http::state::HttpState;
use crate::inbound::http::validation::{FieldName, invalid_uuid_error, missing_field_error};
use crate::inbound::http::votes::{VoteRequest, VoteResponse};

const ID_FIELD: FieldName = FieldName::new("id");
const QUESTION_ID_FIELD: FieldName = FieldName::new("questionId");

/// Request body for `POST /api/answers/{questionId}`.
#[derive(Deserialize, Serialize, utoipa::ToSchema)]
pub struct AnswerRequest {
    pub content: String,
}

/// Query parameters for `GET /api/answers`.
#[derive(Deserialize, utoipa::IntoParams)]
#[serde(rename_all = "camelCase")]
pub struct AnswerListQuery {
    /// Question whose answers are requested. Required.
    pub question_id: Option<String>,
}

/// Public view of an answer.
#[derive(Debug, Serialize, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AnswerResponse {
    pub id: AnswerId,
    pub question_id: QuestionId,
    pub author_id: UserId,
    pub content: String,
    pub votes: i32,
    pub accepted: bool,
    pub created_at: DateTime<Utc>,
}

impl From<Answer> for AnswerResponse {
    fn from(answer: Answer) -> Self {
        Self {
            id: answer.id,
            question_id: answer.question_id,
            author_id: answer.author_id,
            content: answer.content,
            votes: answer.votes,
            accepted: answer.accepted,
            created_at: answer.created_at,
        }
    }
}

fn parse_answer_id(raw: &str) -> Result<AnswerId, Error> {
    AnswerId::parse(raw).map_err(|_| invalid_uuid_error(ID_FIELD, raw))
}

fn parse_question_id(raw: &str, field: FieldName) -> Result<QuestionId, Error> {
    QuestionId::parse(raw).map_err(|_| invalid_uuid_error(field, raw))
}

/// List the answers for one question, oldest first.
#[utoipa::path(
    get,
    path = "/api/answers",
    params(AnswerListQuery),
    responses(
        (status = 200, description = "Answers, oldest first", body = [AnswerResponse]),
        (status = 400, description = "Missing or invalid questionId", body = Error),
        (status = 500, description = "Internal server error", body = Error)
    ),
    tags = ["answers"],
    operation_id = "listAnswers",
    security([])
)]
#[get("")]
pub async fn list(
    state: web::Data<HttpState>,
    query: web::Query<AnswerListQuery>,
) -> ApiResult<web::Json<Vec<AnswerResponse>>> {
    let raw = query
        .into_inner()
        .question_id
        .ok_or_else(|| missing_field_error(QUESTION_ID_FIELD))?;
    let question_id = parse_question_id(&raw, QUESTION_ID_FIELD)?;
    let answers = state.answers_query.list_for_question(&question_id).await?;
    Ok(web::Json(
        answers.into_iter().map(AnswerResponse::from).collect(),
    ))
}

/// Post an answer against an existing question.
#[utoipa::path(
    post,
    path = "/api/answers/{questionId}",
    params(("questionId" = String, Path, description = "Parent question id")),
    request_body = AnswerRequest,
    responses(
        (status = 201, description = "Answer created", body = AnswerResponse),
        (status = 400, description = "Invalid request", body = Error),
        (status = 401, description = "Unauthorised", body = Error),
        (status = 404, description = "Question not found", body = Error),
        (status = 500, description = "Internal server error", body = Error)
    ),
    tags = ["answers"],
    operation_id = "createAnswer"
)]
#[post("/{question_id}")]
pub async fn create(
    state: web::Data<HttpState>,
    identity: Identity,
    path: web::Path<String>,
    payload: web::Json<AnswerRequest>,
) -> ApiResult<HttpResponse> {
    let question_id = parse_question_id(&path.into_inner(), QUESTION_ID_FIELD)?;
    let payload = payload.into_inner();
    if payload.content.trim().is_empty() {
        return Err(missing_field_error(FieldName::new("content")));
    }
    let answer = state
        .answers
        .create(NewAnswer {
            author_id: identity.user_id,
            question_id,
            content: payload.content,
        })
        .await?;
    Ok(HttpResponse::Created().json(AnswerResponse::from(answer)))
}

/// Apply one vote to an answer.
#[utoipa::path(
    post,
    path = "/api/answers/{id}/vote",
    params(("id" = String, Path, description = "Answer id")),
    request_body = VoteRequest,
    responses(
        (status = 200, description = "Updated counter", body = VoteResponse),
        (status = 400, description = "Invalid request", body = Error),
        (status = 401, description = "Unauthorised", body = Error),
        (status = 404, description = "Not found", body = Error),
        (status = 500, description = "Internal server error", body = Error)
    ),
    tags = ["answers"],
    operation_id = "voteAnswer"
)]
#[post("/{id}/vote")]
pub async fn vote(
    state: web::Data<HttpState>,
    _identity: Identity,
    path: web::Path<String>,
    payload: web::Json<VoteRequest>,
) -> ApiResult<web::Json<VoteResponse>> {
    let id = parse_answer_id(&path.into_inner())?;
    let direction = payload.direction()?;
    let votes = state.votes.apply(VoteTarget::Answer(id), direction).await?;
    Ok(web::Json(VoteResponse { votes }))
}

/// Accept an answer. Restricted to the parent question's author.
#[utoipa::path(
    post,
    path = "/api/answers/{id}/accept",
    params(("id" = String, Path, description = "Answer id")),
    responses(
        (status = 200, description = "Answer accepted", body = AnswerResponse),
        (status = 400, description = "Invalid id", body = Error),
        (status = 401, description = "Unauthorised", body = Error),
        (status = 403, description = "Caller is not the question author", body = Error),
        (status = 404, description = "Not found", body = Error),
        (status = 500, description = "Internal server error", body = Error)
    ),
    tags = ["answers"],
    operation_id = "acceptAnswer"
)]
#[post("/{id}/accept")]
pub async fn accept(
    state: web::Data<HttpState>,
    identity: Identity,
    path: web::Path<String>,
) -> ApiResult<web::Json<AnswerResponse>> {
    let id = parse_answer_id(&path.into_inner())?;
    let answer = state.answers.accept(&identity.user_id, &id).await?;
    Ok(web::Json(AnswerResponse::from(answer)))
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
            web::scope("/api/answers")
                .service(list)
                .service(vote)
                .service(accept)
                .service(create),
        )
    }

    #[actix_web::test]
    async fn list_without_question_id_is_bad_request() {
        let app = actix_test::init_service(test_app(TestPorts::default().into_state())).await;
        let response = actix_test::call_service(
            &app,
            actix_test::TestRequest::get().uri("/api/answers").to_request(),
        )
        .await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let value: Value = actix_test::read_body_json(response).await;
        assert_eq!(
            value.get("details").and_then(|d| d.get("field")),
            Some(&Value::from("questionId"))
        );
        assert_eq!(
            value.get("details").and_then(|d| d.get("code")),
            Some(&Value::from("missing_field"))
        );
    }

    #[actix_web::test]
    async fn list_returns_answers_for_question() {
        let question_id = QuestionId::random();
        let answer = Answer::post(question_id, UserId::random(), "Use flexbox.".into());
        let mut ports = TestPorts::default();
        ports
            .answers_query
            .expect_list_for_question()
            .withf(move |id| *id == question_id)
            .times(1)
            .return_once(move |_| Ok(vec![answer]));
        let app = actix_test::init_service(test_app(ports.into_state())).await;

        let response = actix_test::call_service(
            &app,
            actix_test::TestRequest::get()
                .uri(&format!("/api/answers?questionId={question_id}"))
                .to_request(),
        )
        .await;
        assert_eq!(response.status(), StatusCode::OK);
        let value: Value = actix_test::read_body_json(response).await;
        let first = &value.as_array().expect("array")[0];
        assert_eq!(first.get("accepted"), Some(&Value::from(false)));
        assert!(first.get("questionId").is_some());
    }

    #[actix_web::test]
    async fn create_posts_answer_as_token_identity() {
        let caller = UserId::random();
        let question_id = QuestionId::random();
        let mut ports = TestPorts::default().with_verified_caller(caller);
        ports
            .answers
            .expect_create()
            .withf(move |request: &NewAnswer| {
                request.author_id == caller && request.question_id == question_id
            })
            .times(1)
            .return_once(|request| {
                Ok(Answer::post(
                    request.question_id,
                    request.author_id,
                    request.content,
                ))
            });
        let app = actix_test::init_service(test_app(ports.into_state())).await;

        let response = actix_test::call_service(
            &app,
            actix_test::TestRequest::post()
                .uri(&format!("/api/answers/{question_id}"))
                .insert_header(bearer_header())
                .set_json(json!({ "content": "Use flexbox." }))
                .to_request(),
        )
        .await;
        assert_eq!(response.status(), StatusCode::CREATED);
        let value: Value = actix_test::read_body_json(response).await;
        assert_eq!(value.get("content"), Some(&Value::from("Use flexbox.")));
        assert_eq!(value.get("votes"), Some(&Value::from(0)));
    }

    #[actix_web::test]
    async fn create_against_missing_question_is_not_found() {
        let caller = UserId::random();
        let question_id = QuestionId::random();
        let mut ports = TestPorts::default().with_verified_caller(caller);
        ports
            .answers
            .expect_create()
            .times(1)
            .return_once(|_| Err(Error::not_found("question not found")));
        let app = actix_test::init_service(test_app(ports.into_state())).await;

        let response = actix_test::call_service(
            &app,
            actix_test::TestRequest::post()
                .uri(&format!("/api/answers/{question_id}"))
                .insert_header(bearer_header())
                .set_json(json!({ "content": "Too late." }))
                .to_request(),
        )
        .await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[actix_web::test]
    async fn create_rejects_blank_content() {
        let caller = UserId::random();
        let app = actix_test::init_service(test_app(
            TestPorts::default().with_verified_caller(caller).into_state(),
        ))
        .await;
        let response = actix_test::call_service(
            &app,
            actix_test::TestRequest::post()
                .uri(&format!("/api/answers/{}", QuestionId::random()))
                .insert_header(bearer_header())
                .set_json(json!({ "content": "   " }))
                .to_request(),
        )
        .await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[actix_web::test]
    async fn vote_applies_downvote_to_answer() {
        let caller = UserId::random();
        let id = AnswerId::random();
        let mut ports = TestPorts::default().with_verified_caller(caller);
        ports
            .votes
            .expect_apply()
            .withf(move |target, direction| {
                matches!(target, VoteTarget::Answer(a) if *a == id)
                    && *direction == VoteDirection::Downvote
            })
            .times(1)
            .return_once(|_, _| Ok(-1));
        let app = actix_test::init_service(test_app(ports.into_state())).await;

        let response = actix_test::call_service(
            &app,
            actix_test::TestRequest::post()
                .uri(&format!("/api/answers/{id}/vote"))
                .insert_header(bearer_header())
                .set_json(json!({ "direction": "downvote" }))
                .to_request(),
        )
        .await;
        assert_eq!(response.status(), StatusCode::OK);
        let value: Value = actix_test::read_body_json(response).await;
        assert_eq!(value.get("votes"), Some(&Value::from(-1)));
    }

    #[actix_web::test]
    async fn accept_by_non_author_is_forbidden() {
        let caller = UserId::random();
        let id = AnswerId::random();
        let mut ports = TestPorts::default().with_verified_caller(caller);
        ports.answers.expect_accept().times(1).return_once(|_, _| {
            Err(Error::forbidden(
                "only the question author may accept an answer",
            ))
        });
        let app = actix_test::init_service(test_app(ports.into_state())).await;

        let response = actix_test::call_service(
            &app,
            actix_test::TestRequest::post()
                .uri(&format!("/api/answers/{id}/accept"))
                .insert_header(bearer_header())
                .to_request(),
        )
        .await;
        assert_eq!(response.status(), StatusCode::FORBIDDEN);
    }

    #[actix_web::test]
    async fn accept_returns_accepted_answer() {
        let caller = UserId::random();
        let id = AnswerId::random();
        let mut ports = TestPorts::default().with_verified_caller(caller);
        ports
            .answers
            .expect_accept()
            .withf(move |user, answer| *user == caller && *answer == id)
            .times(1)
            .return_once(move |_, answer_id| {
                let mut answer =
                    Answer::post(QuestionId::random(), UserId::random(), "A".into());
                answer.id = *answer_id;
                answer.accepted = true;
                Ok(answer)
            });
        let app = actix_test::init_service(test_app(ports.into_state())).await;

        let response = actix_test::call_service(
            &app,
            actix_test::TestRequest::post()
                .uri(&format!("/api/answers/{id}/accept"))
                .insert_header(bearer_header())
                .to_request(),
        )
        .await;
        assert_eq!(response.status(), StatusCode::OK);
        let value: Value = actix_test::read_body_json(response).await;
        assert_eq!(value.get("accepted"), Some(&Value::from(true)));
    }
}
