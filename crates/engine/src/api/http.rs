//! HTTP routes.
//!
//! Every route answers `OPTIONS` itself, and every response (errors and
//! preflights included) carries the JSON content type and the permissive
//! CORS headers the storefront relies on.

use std::collections::HashMap;
use std::future::Future;
use std::sync::Arc;

use axum::{
    extract::{Query, State},
    http::{header, HeaderValue, StatusCode},
    response::IntoResponse,
    routing::get,
    Json, Router,
};
use reviewproxy_domain::{Pagination, RatingSummary, ShapedResponse};
use serde_json::json;
use tower_http::set_header::SetResponseHeaderLayer;
use tracing::Instrument;

use super::ApiError;
use crate::app::App;
use crate::infrastructure::correlation::CorrelationId;

const PRODUCT_EXAMPLE: &str = "?product_id=1104270388";
const COUNT_EXAMPLE: &str = "?internal_id=684657414";
const REVIEWS_EXAMPLE: &str = "?internal_id=684657414&per_page=10&page=1";

/// Create all HTTP routes.
pub fn routes() -> Router<Arc<App>> {
    Router::new()
        .route("/api/health", get(health).options(preflight))
        .route("/get-product-id", get(get_product).options(preflight))
        .route("/get-product-count", get(get_product_count).options(preflight))
        .route("/get-product-reviews", get(get_product_reviews).options(preflight))
        .fallback(not_found)
        .layer(SetResponseHeaderLayer::overriding(
            header::ACCESS_CONTROL_ALLOW_ORIGIN,
            HeaderValue::from_static("*"),
        ))
        .layer(SetResponseHeaderLayer::overriding(
            header::ACCESS_CONTROL_ALLOW_HEADERS,
            HeaderValue::from_static("Content-Type"),
        ))
        .layer(SetResponseHeaderLayer::overriding(
            header::CONTENT_TYPE,
            HeaderValue::from_static("application/json"),
        ))
}

async fn health() -> Json<serde_json::Value> {
    Json(json!({ "status": "ok" }))
}

async fn preflight() -> StatusCode {
    StatusCode::OK
}

async fn not_found() -> impl IntoResponse {
    (StatusCode::NOT_FOUND, Json(json!({ "error": "Not found" })))
}

// =============================================================================
// Storefront endpoints
// =============================================================================

async fn get_product(
    State(app): State<Arc<App>>,
    Query(params): Query<HashMap<String, String>>,
) -> Result<Json<serde_json::Value>, ApiError> {
    traced("get_product", async move {
        let mut required = RequiredParams::new(&params);
        let product_id = required.take("product_id");
        required.check(PRODUCT_EXAMPLE)?;

        let product = app.use_cases.product.execute(product_id).await?;
        Ok::<_, ApiError>(Json(product))
    })
    .await
}

async fn get_product_count(
    State(app): State<Arc<App>>,
    Query(params): Query<HashMap<String, String>>,
) -> Result<Json<RatingSummary>, ApiError> {
    traced("get_product_count", async move {
        let mut required = RequiredParams::new(&params);
        let internal_id = required.take("internal_id");
        required.check(COUNT_EXAMPLE)?;

        let summary = app.use_cases.ratings.execute(internal_id).await?;
        Ok::<_, ApiError>(Json(summary))
    })
    .await
}

async fn get_product_reviews(
    State(app): State<Arc<App>>,
    Query(params): Query<HashMap<String, String>>,
) -> Result<Json<ShapedResponse>, ApiError> {
    traced("get_product_reviews", async move {
        let mut required = RequiredParams::new(&params);
        let internal_id = required.take("internal_id");
        let per_page = required.take("per_page");
        let page = required.take("page");
        required.check(REVIEWS_EXAMPLE)?;

        let pagination = Pagination::new(per_page, page);
        let listing = app.use_cases.reviews.execute(internal_id, pagination).await?;
        Ok::<_, ApiError>(Json(listing))
    })
    .await
}

// =============================================================================
// Helpers
// =============================================================================

/// Runs a handler body inside a span tagged with a fresh correlation id and
/// logs its error, if any, before the error becomes a response.
async fn traced<T>(
    operation: &'static str,
    handler: impl Future<Output = Result<T, ApiError>>,
) -> Result<T, ApiError> {
    let span = CorrelationId::generate().request_span(operation);

    async move {
        let result = handler.await;
        match &result {
            Ok(_) => tracing::debug!("Request completed"),
            Err(e) => e.log(),
        }
        result
    }
    .instrument(span)
    .await
}

/// Collects required query parameters, remembering every one that is absent
/// or blank so they can all be reported at once.
struct RequiredParams<'a> {
    params: &'a HashMap<String, String>,
    missing: Vec<&'static str>,
}

impl<'a> RequiredParams<'a> {
    fn new(params: &'a HashMap<String, String>) -> Self {
        Self {
            params,
            missing: Vec::new(),
        }
    }

    fn take(&mut self, name: &'static str) -> String {
        match self.params.get(name).filter(|value| !value.trim().is_empty()) {
            Some(value) => value.clone(),
            None => {
                self.missing.push(name);
                String::new()
            }
        }
    }

    fn check(self, example: &'static str) -> Result<(), ApiError> {
        if self.missing.is_empty() {
            Ok(())
        } else {
            Err(ApiError::MissingParameters {
                missing: self.missing,
                example,
            })
        }
    }
}
