use crate::infra::AppState;
use axum::http::{header, StatusCode};
use axum::response::IntoResponse;
use axum::Extension;
use axum::Json;
use longevity::assessment::{assessment_router, AssessmentService, MailSender, SubmissionRepository};
use serde_json::json;
use std::sync::Arc;

pub(crate) fn with_assessment_routes<R, M>(service: Arc<AssessmentService<R, M>>) -> axum::Router
where
    R: SubmissionRepository + 'static,
    M: MailSender + 'static,
{
    assessment_router(service)
        .route("/health", axum::routing::get(healthcheck))
        .route("/ready", axum::routing::get(readiness_endpoint))
        .route("/metrics", axum::routing::get(metrics_endpoint))
}

pub(crate) async fn healthcheck() -> Json<serde_json::Value> {
    Json(json!({ "status": "ok" }))
}

pub(crate) async fn readiness_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    let ready = state.readiness.load(std::sync::atomic::Ordering::Relaxed);
    let status = if ready {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    let payload = if ready {
        json!({ "status": "ready" })
    } else {
        json!({ "status": "initializing" })
    };

    (status, Json(payload))
}

pub(crate) async fn metrics_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "text/plain; version=0.0.4")],
        state.metrics.render(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infra::{InMemorySubmissionRepository, OutboxMailer};
    use axum::body::Body;
    use axum::http::Request;
    use longevity::assessment::{ids, Answers, AssessmentConfig, Submission};
    use metrics_exporter_prometheus::PrometheusBuilder;
    use std::sync::atomic::{AtomicBool, Ordering};
    use tower::ServiceExt;

    fn app_state(ready: bool) -> AppState {
        let recorder = PrometheusBuilder::new().build_recorder();
        AppState {
            readiness: Arc::new(AtomicBool::new(ready)),
            metrics: Arc::new(recorder.handle()),
        }
    }

    fn app(
        state: AppState,
    ) -> (axum::Router, Arc<InMemorySubmissionRepository>, Arc<OutboxMailer>) {
        let repository = Arc::new(InMemorySubmissionRepository::default());
        let mailer = Arc::new(OutboxMailer::default());
        let service = Arc::new(AssessmentService::new(
            repository.clone(),
            mailer.clone(),
            AssessmentConfig::default(),
        ));
        let router = with_assessment_routes(service).layer(Extension(state));
        (router, repository, mailer)
    }

    async fn body_json(response: axum::response::Response) -> serde_json::Value {
        let bytes = axum::body::to_bytes(response.into_body(), 64 * 1024)
            .await
            .expect("read body");
        serde_json::from_slice(&bytes).expect("json payload")
    }

    #[tokio::test]
    async fn health_reports_ok() {
        let Json(body) = healthcheck().await;
        assert_eq!(body["status"], "ok");
    }

    #[tokio::test]
    async fn readiness_tracks_flag() {
        let state = app_state(false);
        let (router, _, _) = app(state.clone());

        let response = router
            .clone()
            .oneshot(Request::get("/ready").body(Body::empty()).expect("request"))
            .await
            .expect("route executes");
        assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);
        assert_eq!(body_json(response).await["status"], "initializing");

        state.readiness.store(true, Ordering::Release);
        let response = router
            .oneshot(Request::get("/ready").body(Body::empty()).expect("request"))
            .await
            .expect("route executes");
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn metrics_are_plain_text() {
        let (router, _, _) = app(app_state(true));

        let response = router
            .oneshot(Request::get("/metrics").body(Body::empty()).expect("request"))
            .await
            .expect("route executes");

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            response.headers()[header::CONTENT_TYPE],
            "text/plain; version=0.0.4"
        );
    }

    #[tokio::test]
    async fn submissions_land_in_store_and_outbox() {
        let (router, repository, mailer) = app(app_state(true));
        let submission = Submission {
            first_name: "Ada".to_string(),
            last_name: None,
            email: "ada@example.com".to_string(),
            answers: Answers::new().with(ids::STRESS_LEVEL, 5u8),
        };

        let response = router
            .oneshot(
                Request::post("/api/v1/assessments")
                    .header(header::CONTENT_TYPE, "application/json")
                    .body(Body::from(
                        serde_json::to_vec(&submission).expect("serializes"),
                    ))
                    .expect("request"),
            )
            .await
            .expect("route executes");

        assert_eq!(response.status(), StatusCode::OK);
        let payload = body_json(response).await;
        assert_eq!(payload["longevityScore"], 34);
        assert_eq!(payload["emailId"], "outbox-000001");
        assert_eq!(repository.submissions().len(), 1);
        assert_eq!(mailer.messages()[0].to, vec!["ada@example.com".to_string()]);
    }
}
