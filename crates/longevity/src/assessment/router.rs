use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, State},
    http::{header, HeaderValue, StatusCode},
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use serde_json::json;
use tracing::error;

use super::domain::Submission;
use super::questionnaire::questions;
use super::repository::{MailSender, SubmissionRepository};
use super::service::AssessmentService;

pub const SUBMIT_PATH: &str = "/api/v1/assessments";
pub const PREVIEW_PATH: &str = "/api/v1/assessments/preview";
pub const QUESTIONNAIRE_PATH: &str = "/api/v1/questionnaire";

const ALLOWED_HEADERS: &str = "authorization, x-client-info, apikey, content-type";

/// Router builder exposing the notification endpoint and its companions.
pub fn assessment_router<R, M>(service: Arc<AssessmentService<R, M>>) -> Router
where
    R: SubmissionRepository + 'static,
    M: MailSender + 'static,
{
    Router::new()
        .route(
            SUBMIT_PATH,
            post(submit_handler::<R, M>).options(preflight_handler),
        )
        .route(
            PREVIEW_PATH,
            post(preview_handler::<R, M>).options(preflight_handler),
        )
        .route(
            QUESTIONNAIRE_PATH,
            get(questionnaire_handler).options(preflight_handler),
        )
        .with_state(service)
}

pub(crate) async fn preflight_handler() -> Response {
    with_cors(StatusCode::OK.into_response())
}

pub(crate) async fn submit_handler<R, M>(
    State(service): State<Arc<AssessmentService<R, M>>>,
    payload: Result<Json<Submission>, JsonRejection>,
) -> Response
where
    R: SubmissionRepository + 'static,
    M: MailSender + 'static,
{
    let submission = match payload {
        Ok(Json(submission)) => submission,
        Err(rejection) => return failure(rejection.body_text()),
    };

    match service.submit(submission).await {
        Ok(receipt) => {
            let mut payload = json!({
                "success": true,
                "longevityScore": receipt.longevity_score,
            });
            if let Some(email_id) = receipt.email_id {
                payload["emailId"] = json!(email_id);
            }
            with_cors((StatusCode::OK, Json(payload)).into_response())
        }
        Err(err) => {
            error!(error = %err, "assessment submission failed");
            failure(err.to_string())
        }
    }
}

pub(crate) async fn preview_handler<R, M>(
    State(service): State<Arc<AssessmentService<R, M>>>,
    payload: Result<Json<Submission>, JsonRejection>,
) -> Response
where
    R: SubmissionRepository + 'static,
    M: MailSender + 'static,
{
    match payload {
        Ok(Json(submission)) => {
            let view = service.preview(&submission);
            with_cors((StatusCode::OK, Json(view)).into_response())
        }
        Err(rejection) => failure(rejection.body_text()),
    }
}

pub(crate) async fn questionnaire_handler() -> Response {
    with_cors((StatusCode::OK, Json(questions())).into_response())
}

fn failure(message: String) -> Response {
    let payload = json!({ "error": message });
    with_cors((StatusCode::INTERNAL_SERVER_ERROR, Json(payload)).into_response())
}

fn with_cors(mut response: Response) -> Response {
    let headers = response.headers_mut();
    headers.insert(
        header::ACCESS_CONTROL_ALLOW_ORIGIN,
        HeaderValue::from_static("*"),
    );
    headers.insert(
        header::ACCESS_CONTROL_ALLOW_HEADERS,
        HeaderValue::from_static(ALLOWED_HEADERS),
    );
    response
}
