//! # API REST
//!
//! REST API implementation for acuity.
//!
//! Handles:
//! - HTTP endpoints with axum
//! - OpenAPI/Swagger documentation
//! - REST-specific concerns (JSON serialization, CORS)
//!
//! Uses `api-shared` for common types and utilities.

#![warn(rust_2018_idioms)]

use axum::{
    extract::State,
    http::{HeaderValue, StatusCode},
    response::Json,
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use acuity_core::{
    calculate_severity_score, severity_trend_with_threshold, validate_trend_threshold,
    validate_vital_signs, vitals_report, CoreConfig, VitalSigns,
};
use api_shared::convert::normal_ranges_res;
use api_shared::{pb, ApiResponse, HealthService, SeverityApiResponse, ValidationApiResponse};

/// Application state for the REST API server
///
/// Holds the configuration resolved at startup. The engine itself is stateless.
#[derive(Clone, Default)]
pub struct AppState {
    cfg: Arc<CoreConfig>,
}

impl AppState {
    pub fn new(cfg: Arc<CoreConfig>) -> Self {
        Self { cfg }
    }
}

#[derive(OpenApi)]
#[openapi(
    paths(
        health,
        calculate_severity,
        validate_vitals,
        severity_trend,
        report,
        normal_ranges,
    ),
    components(schemas(
        pb::HealthRes,
        pb::VitalSignsReq,
        pb::SubScore,
        pb::SeverityRes,
        pb::ValidationRes,
        pb::SeverityTrendReq,
        pb::SeverityTrendRes,
        pb::DisplayHints,
        pb::VitalReading,
        pb::VitalsReportRes,
        pb::NormalRangeRes,
        pb::NormalRangesRes,
        SeverityApiResponse,
        ValidationApiResponse,
    ))
)]
pub struct ApiDoc;

/// Build the CORS layer from the configured origin list.
///
/// An empty list means no restriction was configured and every origin is allowed. Origins that
/// are not valid header values are skipped with a warning.
pub fn cors_layer(origins: &[String]) -> CorsLayer {
    if origins.is_empty() {
        return CorsLayer::permissive();
    }

    let allowed: Vec<HeaderValue> = origins
        .iter()
        .filter_map(|origin| match HeaderValue::from_str(origin) {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!("ignoring invalid CORS origin: {}", origin);
                None
            }
        })
        .collect();

    CorsLayer::new()
        .allow_origin(AllowOrigin::list(allowed))
        .allow_methods(Any)
        .allow_headers(Any)
}

/// Assemble the REST router with Swagger UI and CORS.
pub fn router(state: AppState, cors_origins: &[String]) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/vitals/calculate-severity", post(calculate_severity))
        .route("/vitals/validate", post(validate_vitals))
        .route("/vitals/trend", post(severity_trend))
        .route("/vitals/report", post(report))
        .route("/vitals/normal-ranges", get(normal_ranges))
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .layer(cors_layer(cors_origins))
        .with_state(state)
}

#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Health check response", body = pb::HealthRes)
    )
)]
/// Health check endpoint for the REST API
///
/// Used for monitoring and load balancer health checks.
#[axum::debug_handler]
async fn health(State(_state): State<AppState>) -> Json<pb::HealthRes> {
    Json(HealthService::check_health())
}

#[utoipa::path(
    post,
    path = "/vitals/calculate-severity",
    request_body = pb::VitalSignsReq,
    responses(
        (status = 200, description = "Severity score for the supplied vitals", body = SeverityApiResponse)
    )
)]
/// Stateless severity score calculation
///
/// Missing vitals count as "not measured" and never cause an error.
#[axum::debug_handler]
async fn calculate_severity(
    State(_state): State<AppState>,
    Json(req): Json<pb::VitalSignsReq>,
) -> Json<ApiResponse<pb::SeverityRes>> {
    let vitals = VitalSigns::from(req);
    let result = calculate_severity_score(&vitals);
    Json(ApiResponse::ok(pb::SeverityRes::from(&result)))
}

#[utoipa::path(
    post,
    path = "/vitals/validate",
    request_body = pb::VitalSignsReq,
    responses(
        (status = 200, description = "Plausibility check of the supplied vitals", body = ValidationApiResponse)
    )
)]
/// Validate that vital sign values are within plausible instrument ranges
///
/// Always answers `200`; an implausible reading is reported in `data.errors`.
#[axum::debug_handler]
async fn validate_vitals(
    State(_state): State<AppState>,
    Json(req): Json<pb::VitalSignsReq>,
) -> Json<ApiResponse<pb::ValidationRes>> {
    let vitals = VitalSigns::from(req);
    Json(ApiResponse::ok(validate_vital_signs(&vitals).into()))
}

#[utoipa::path(
    post,
    path = "/vitals/trend",
    request_body = pb::SeverityTrendReq,
    responses(
        (status = 200, description = "Trend between two scores", body = pb::SeverityTrendRes),
        (status = 400, description = "Bad request")
    )
)]
/// Compare a previous and a current severity score
///
/// Uses the configured threshold unless the request carries its own.
///
/// # Errors
/// Returns `400 Bad Request` if:
/// - the supplied threshold is negative or not finite.
#[axum::debug_handler]
async fn severity_trend(
    State(state): State<AppState>,
    Json(req): Json<pb::SeverityTrendReq>,
) -> Result<Json<pb::SeverityTrendRes>, (StatusCode, &'static str)> {
    let threshold = match req.threshold {
        Some(t) => match validate_trend_threshold(t) {
            Ok(t) => t,
            Err(e) => {
                tracing::error!("Severity trend error: {:?}", e);
                return Err((StatusCode::BAD_REQUEST, "Invalid trend threshold"));
            }
        },
        None => state.cfg.trend_threshold(),
    };

    let trend = severity_trend_with_threshold(req.previous, req.current, threshold);
    Ok(Json(trend.into()))
}

#[utoipa::path(
    post,
    path = "/vitals/report",
    request_body = pb::VitalSignsReq,
    responses(
        (status = 200, description = "Severity, validation and per-vital breakdown", body = pb::VitalsReportRes)
    )
)]
/// Full vitals report for the patient report screen
#[axum::debug_handler]
async fn report(
    State(_state): State<AppState>,
    Json(req): Json<pb::VitalSignsReq>,
) -> Json<pb::VitalsReportRes> {
    let vitals = VitalSigns::from(req);
    Json(pb::VitalsReportRes::from(&vitals_report(&vitals)))
}

#[utoipa::path(
    get,
    path = "/vitals/normal-ranges",
    responses(
        (status = 200, description = "Reference range for every vital sign", body = pb::NormalRangesRes)
    )
)]
#[axum::debug_handler]
async fn normal_ranges(State(_state): State<AppState>) -> Json<pb::NormalRangesRes> {
    Json(normal_ranges_res())
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::{header, Request};
    use http_body_util::BodyExt;
    use serde_json::Value;
    use tower::ServiceExt;

    fn app() -> Router {
        router(AppState::default(), &[])
    }

    async fn send(req: Request<Body>) -> (StatusCode, Value) {
        let res = app().oneshot(req).await.expect("router response");
        let status = res.status();
        let bytes = res
            .into_body()
            .collect()
            .await
            .expect("read body")
            .to_bytes();
        let json = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap_or(Value::Null)
        };
        (status, json)
    }

    fn post_json(uri: &str, body: &str) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .expect("request")
    }

    #[tokio::test]
    async fn health_is_ok() {
        let req = Request::builder()
            .uri("/health")
            .body(Body::empty())
            .expect("request");
        let (status, json) = send(req).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["ok"], true);
    }

    #[tokio::test]
    async fn calculate_severity_wraps_result_in_envelope() {
        let body = r#"{"heartRate":112,"spo2":88,"respRate":28,"temperature":39.2,"bpSystolic":180,"bpDiastolic":110}"#;
        let (status, json) = send(post_json("/vitals/calculate-severity", body)).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["success"], true);
        assert_eq!(json["message"], "OK");
        assert_eq!(json["data"]["score"], 10);
        assert_eq!(json["data"]["condition"], "Critical");
        assert_eq!(json["data"]["wardRecommendation"], "ICU");
        assert_eq!(json["data"]["urgency"], "immediate");
        assert_eq!(json["data"]["percentage"], 100);
    }

    #[tokio::test]
    async fn empty_vitals_score_recovering() {
        let (status, json) = send(post_json("/vitals/calculate-severity", "{}")).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["data"]["score"], 0);
        assert_eq!(json["data"]["condition"], "Recovering");
        assert_eq!(json["data"]["riskFactors"], Value::Array(vec![]));
    }

    #[tokio::test]
    async fn validate_reports_cross_field_error() {
        let body = r#"{"bpSystolic":80,"bpDiastolic":95}"#;
        let (status, json) = send(post_json("/vitals/validate", body)).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["data"]["valid"], false);
        assert_eq!(
            json["data"]["errors"][0],
            "Systolic BP should be greater than or equal to diastolic BP"
        );
    }

    #[tokio::test]
    async fn trend_defaults_and_overrides_threshold() {
        let (_, json) = send(post_json("/vitals/trend", r#"{"previous":8,"current":5}"#)).await;
        assert_eq!(json["trend"], "improving");

        let (_, json) = send(post_json(
            "/vitals/trend",
            r#"{"previous":5,"current":6,"threshold":2}"#,
        ))
        .await;
        assert_eq!(json["trend"], "stable");
    }

    #[tokio::test]
    async fn trend_rejects_negative_threshold() {
        let (status, _) = send(post_json(
            "/vitals/trend",
            r#"{"previous":5,"current":6,"threshold":-1}"#,
        ))
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn report_lists_supplied_readings() {
        let (status, json) = send(post_json("/vitals/report", r#"{"spo2":91}"#)).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["readings"][0]["vital"], "spo2");
        assert_eq!(json["readings"][0]["deviation"], "low");
        assert_eq!(json["severity"]["score"], 1);
    }

    #[tokio::test]
    async fn normal_ranges_are_listed() {
        let req = Request::builder()
            .uri("/vitals/normal-ranges")
            .body(Body::empty())
            .expect("request");
        let (status, json) = send(req).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["ranges"][0]["label"], "Heart Rate");
        assert_eq!(json["ranges"][0]["min"], 60.0);
    }

    async fn allow_origin_for(cors_origins: &[String], origin: &str) -> Option<String> {
        let req = Request::builder()
            .uri("/health")
            .header(header::ORIGIN, origin)
            .body(Body::empty())
            .expect("request");
        let res = router(AppState::default(), cors_origins)
            .oneshot(req)
            .await
            .expect("router response");
        assert_eq!(res.status(), StatusCode::OK);
        res.headers()
            .get(header::ACCESS_CONTROL_ALLOW_ORIGIN)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string)
    }

    #[tokio::test]
    async fn cors_allow_list_echoes_only_configured_origins() {
        // The malformed entry is skipped instead of failing startup.
        let origins = vec!["http://a.example".to_string(), "bad\norigin".to_string()];

        assert_eq!(
            allow_origin_for(&origins, "http://a.example").await.as_deref(),
            Some("http://a.example")
        );
        assert_eq!(allow_origin_for(&origins, "http://b.example").await, None);
    }

    #[tokio::test]
    async fn cors_without_configured_origins_allows_any() {
        assert_eq!(
            allow_origin_for(&[], "http://b.example").await.as_deref(),
            Some("*")
        );
    }
}
