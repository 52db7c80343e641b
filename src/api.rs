use crate::engine::SearchEngine;
use crate::error::Error;
use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Json, Response},
    routing::get,
    Router,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

// ========== Request/Response Types ==========

#[derive(Debug, Deserialize)]
pub struct SearchRequest {
    /// Absent when the caller sent no `query` parameter at all; that is the
    /// one invalid input a typed handler can still receive.
    #[serde(default)]
    pub query: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct SearchResponse {
    pub query: String,
    pub matched_terms: Vec<String>,
    pub locations: Vec<String>,
    pub total: usize,
}

#[derive(Debug, Serialize)]
pub struct StatsResponse {
    pub total_documents: usize,
    pub total_tokens: usize,
    pub avg_docs_per_token: f64,
}

#[derive(Debug, Serialize)]
pub struct ApiResponse<T> {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl<T> ApiResponse<T> {
    fn success(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            message: None,
        }
    }

    fn error(message: String) -> ApiResponse<()> {
        ApiResponse {
            success: false,
            data: None,
            message: Some(message),
        }
    }
}

// ========== Error Handling ==========

struct AppError(anyhow::Error);

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = match self.0.downcast_ref::<Error>() {
            Some(Error::InvalidQuery(_)) => StatusCode::BAD_REQUEST,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        };
        let message = format!("{:#}", self.0);
        tracing::error!("API error: {}", message);

        (status, Json(ApiResponse::<()>::error(message))).into_response()
    }
}

impl<E> From<E> for AppError
where
    E: Into<anyhow::Error>,
{
    fn from(err: E) -> Self {
        Self(err.into())
    }
}

// ========== Handlers ==========

async fn health_check() -> impl IntoResponse {
    Json(ApiResponse::success("OK"))
}

async fn search(
    State(engine): State<Arc<SearchEngine>>,
    Query(req): Query<SearchRequest>,
) -> Result<impl IntoResponse, AppError> {
    let query = req
        .query
        .ok_or_else(|| Error::InvalidQuery("missing `query` parameter".to_string()))?;

    let result = engine.search(&query);

    let response = SearchResponse {
        query,
        total: result.locations.len(),
        matched_terms: result.matched_terms,
        locations: result.locations,
    };

    Ok(Json(ApiResponse::success(response)))
}

async fn get_stats(State(engine): State<Arc<SearchEngine>>) -> impl IntoResponse {
    let stats = engine.stats();

    Json(ApiResponse::success(StatsResponse {
        total_documents: stats.total_documents,
        total_tokens: stats.total_tokens,
        avg_docs_per_token: stats.avg_docs_per_token,
    }))
}

// ========== Router ==========

pub fn create_router(engine: Arc<SearchEngine>) -> Router {
    Router::new()
        .route("/health", get(health_check))
        .route("/search", get(search))
        .route("/stats", get(get_stats))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(engine)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::IndexBuilder;
    use axum::body::Body;
    use axum::http::Request;
    use tower::util::ServiceExt;

    async fn response_body(response: Response) -> serde_json::Value {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    fn sample_engine() -> Arc<SearchEngine> {
        let mut builder = IndexBuilder::new();
        builder.ingest("Message-ID: <1.JavaMail.x@y>\n\nHello World", "pathA");
        builder.ingest("Message-ID: <2.JavaMail.x@y>\n\nHello there", "pathB");
        Arc::new(SearchEngine::new(builder.finish()))
    }

    async fn call(router: Router, uri: &str) -> Response {
        router
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap()
    }

    #[tokio::test]
    async fn test_search_endpoint() {
        let router = create_router(sample_engine());
        let response = call(router, "/search?query=hel").await;
        assert_eq!(response.status(), StatusCode::OK);

        let body = response_body(response).await;
        assert_eq!(body["success"], true);
        assert_eq!(body["data"]["total"], 2);
        assert_eq!(body["data"]["matched_terms"][0], "hello");
    }

    #[tokio::test]
    async fn test_missing_query_is_bad_request() {
        let router = create_router(sample_engine());
        let response = call(router, "/search").await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let body = response_body(response).await;
        assert_eq!(body["success"], false);
    }

    #[tokio::test]
    async fn test_stats_endpoint() {
        let router = create_router(sample_engine());
        let response = call(router, "/stats").await;
        assert_eq!(response.status(), StatusCode::OK);

        let body = response_body(response).await;
        assert_eq!(body["data"]["total_documents"], 2);
    }
}
