//! HTTP boundary for the SEO analyzer.
//!
//! One operation: `POST /analyze` with `{"url": "..."}` returns the
//! analysis as camelCase JSON. The handler never propagates a fault to the
//! client as anything other than a structured error body: missing input is
//! a 400, an error-marked analysis is a 500, and every error body carries
//! the metadata block with the request timestamp and a zero duration.

use std::sync::Arc;

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use serde::{Deserialize, Serialize};
use tower_http::cors::CorsLayer;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use ranklens_core::{AnalysisResult, SeoAnalyzer, interpret};

#[derive(Clone)]
struct AppState {
    analyzer: Arc<SeoAnalyzer>,
}

#[derive(Debug, Deserialize)]
struct AnalyzeRequest {
    url: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct MetadataBody {
    analyzed_at: String,
    analysis_duration: f64,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct ErrorBody {
    error: String,
    metadata: MetadataBody,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct ContentBody {
    readability_score: f64,
    readability_interpretation: &'static str,
    word_count: usize,
    heading_distribution: serde_json::Value,
    content_tags: serde_json::Value,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct TechnicalBody {
    title: Option<String>,
    meta_description: Option<String>,
    canonical: Option<String>,
    mobile_friendly: bool,
    ssl: bool,
    structured_data: bool,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct LinksBody {
    internal_count: usize,
    external_count: usize,
    total_count: usize,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct PerformanceBody {
    total_resources: usize,
    total_size: usize,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct AnalyzeResponse {
    url: String,
    keywords: Vec<String>,
    content: ContentBody,
    technical: TechnicalBody,
    links: LinksBody,
    performance: PerformanceBody,
    metadata: MetadataBody,
}

impl AnalyzeResponse {
    fn from_result(result: &AnalysisResult) -> Self {
        Self {
            url: result.url.clone(),
            keywords: result.keywords.clone(),
            content: ContentBody {
                readability_score: result.content.readability.unwrap_or(0.0),
                readability_interpretation: interpret(result.content.readability),
                word_count: result.content.word_count,
                heading_distribution: serde_json::to_value(&result.content.headings)
                    .unwrap_or_default(),
                content_tags: serde_json::to_value(&result.content.tags).unwrap_or_default(),
            },
            technical: TechnicalBody {
                title: result.technical.title.clone(),
                meta_description: result.technical.meta_description.clone(),
                canonical: result.technical.canonical.clone(),
                mobile_friendly: result.technical.mobile_friendly,
                ssl: result.technical.ssl,
                structured_data: result.technical.structured_data,
            },
            links: LinksBody {
                internal_count: result.links.internal_count(),
                external_count: result.links.external_count(),
                total_count: result.links.total_count(),
            },
            performance: PerformanceBody {
                total_resources: result.performance.total_resources,
                total_size: result.performance.total_size,
            },
            metadata: MetadataBody {
                analyzed_at: result.metadata.analyzed_at.clone(),
                analysis_duration: result.metadata.duration_seconds,
            },
        }
    }
}

fn error_response(status: StatusCode, message: &str, analyzed_at: &str) -> Response {
    let body = ErrorBody {
        error: message.to_string(),
        metadata: MetadataBody {
            analyzed_at: analyzed_at.to_string(),
            analysis_duration: 0.0,
        },
    };
    (status, Json(body)).into_response()
}

async fn analyze_handler(State(state): State<AppState>, Json(req): Json<AnalyzeRequest>) -> Response {
    let Some(url) = req.url.filter(|u| !u.is_empty()) else {
        return error_response(StatusCode::BAD_REQUEST, "No URL provided", &now());
    };

    let result = state.analyzer.analyze(&url).await;

    if let Some(err) = &result.error {
        error!(url = %url, error = %err, "analysis failed");
        return error_response(
            StatusCode::INTERNAL_SERVER_ERROR,
            err,
            &result.metadata.analyzed_at,
        );
    }

    (StatusCode::OK, Json(AnalyzeResponse::from_result(&result))).into_response()
}

async fn health_handler() -> &'static str {
    "ok"
}

fn now() -> String {
    time::OffsetDateTime::now_utc()
        .format(&time::format_description::well_known::Rfc3339)
        .unwrap_or_default()
}

fn router(state: AppState) -> Router {
    Router::new()
        .route("/analyze", post(analyze_handler))
        .route("/health", get(health_handler))
        .layer(CorsLayer::permissive())
        .with_state(state)
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let state = AppState { analyzer: Arc::new(SeoAnalyzer::new()) };
    let app = router(state);

    let port: u16 = std::env::var("PORT")
        .ok()
        .and_then(|p| p.parse().ok())
        .unwrap_or(8080);
    let addr = std::net::SocketAddr::from(([0, 0, 0, 0], port));

    info!(%addr, "ranklens server listening");

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .expect("failed to bind listener");
    axum::serve(listener, app).await.expect("server error");
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::Request;
    use tower::ServiceExt;

    fn test_state() -> AppState {
        AppState { analyzer: Arc::new(SeoAnalyzer::new()) }
    }

    async fn body_json(response: Response) -> serde_json::Value {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn test_health() {
        let response = router(test_state())
            .oneshot(Request::get("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_missing_url_is_400() {
        let response = router(test_state())
            .oneshot(
                Request::post("/analyze")
                    .header("content-type", "application/json")
                    .body(Body::from("{}"))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let json = body_json(response).await;
        assert_eq!(json["error"], "No URL provided");
        assert_eq!(json["metadata"]["analysisDuration"], 0.0);
        assert!(json["metadata"]["analyzedAt"].is_string());
    }

    #[tokio::test]
    async fn test_unfetchable_url_is_500() {
        let response = router(test_state())
            .oneshot(
                Request::post("/analyze")
                    .header("content-type", "application/json")
                    .body(Body::from(r#"{"url": "not-a-url"}"#))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let json = body_json(response).await;
        assert!(json["error"].as_str().unwrap().contains("Invalid URL"));
        assert_eq!(json["metadata"]["analysisDuration"], 0.0);
    }

    #[test]
    fn test_response_mapping() {
        let html = std::fs::read_to_string("../../tests/fixtures/blog.html").unwrap();
        let result = SeoAnalyzer::new().analyze_html("https://bakerlog.example.com/sourdough-schedule", &html);
        let response = AnalyzeResponse::from_result(&result);

        assert_eq!(response.links.total_count, 5);
        assert_ne!(response.content.readability_interpretation, "Unable to calculate");
        let json = serde_json::to_value(&response).unwrap();
        assert!(json["content"]["readabilityInterpretation"].is_string());
        assert!(json["technical"]["mobileFriendly"].as_bool().unwrap());
    }
}
