//! Judge.me REST API client

use async_trait::async_trait;
use reqwest::Client;
use reviewproxy_domain::{RawReview, Rating};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use std::time::Duration;

use crate::infrastructure::config::JudgeMeConfig;
use crate::infrastructure::ports::{ReviewQuery, ReviewsPort, UpstreamError};

/// Judge.me's placeholder product id for lookups by external id.
const LOOKUP_BY_EXTERNAL_ID: &str = "-1";

/// Client for the Judge.me v1 API, authenticated by shop token.
#[derive(Clone)]
pub struct JudgeMeClient {
    client: Client,
    base_url: String,
    api_token: String,
    shop_domain: String,
}

impl JudgeMeClient {
    pub fn new(config: &JudgeMeConfig) -> Self {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .unwrap_or_else(|_| Client::new());

        Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            api_token: config.api_token.clone(),
            shop_domain: config.shop_domain.clone(),
        }
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, &str)],
    ) -> Result<T, UpstreamError> {
        tracing::debug!(path, ?query, "Calling Judge.me");

        let response = self
            .client
            .get(format!("{}{}", self.base_url, path))
            .query(&[
                ("api_token", self.api_token.as_str()),
                ("shop_domain", self.shop_domain.as_str()),
            ])
            .query(query)
            .send()
            .await
            .map_err(|e| UpstreamError::RequestFailed(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(UpstreamError::Status {
                status: status.as_u16(),
                reason: status
                    .canonical_reason()
                    .unwrap_or("Unknown status")
                    .to_string(),
            });
        }

        response
            .json()
            .await
            .map_err(|e| UpstreamError::InvalidResponse(e.to_string()))
    }
}

#[async_trait]
impl ReviewsPort for JudgeMeClient {
    async fn get_product(&self, external_id: String) -> Result<serde_json::Value, UpstreamError> {
        self.get_json(
            &format!("/products/{LOOKUP_BY_EXTERNAL_ID}"),
            &[("external_id", external_id.as_str())],
        )
        .await
    }

    async fn count_reviews(
        &self,
        product_id: String,
        rating: Option<Rating>,
    ) -> Result<u64, UpstreamError> {
        let stars = rating.map(|r| r.to_string());
        let mut query = vec![("product_id", product_id.as_str())];
        if let Some(stars) = stars.as_deref() {
            query.push(("rating", stars));
        }

        let response: CountResponse = self.get_json("/reviews/count", &query).await?;
        Ok(response.count)
    }

    async fn list_reviews(&self, query: ReviewQuery) -> Result<Vec<RawReview>, UpstreamError> {
        let mut params = Vec::with_capacity(3);
        if let Some(internal_id) = query.internal_id.as_deref() {
            params.push(("internal_id", internal_id));
        }
        params.push(("per_page", query.pagination.per_page()));
        params.push(("page", query.pagination.page()));

        let response: ReviewsResponse = self.get_json("/reviews", &params).await?;
        Ok(response.reviews)
    }
}

// =============================================================================
// Judge.me API Types
// =============================================================================

#[derive(Debug, Deserialize)]
struct CountResponse {
    count: u64,
}

#[derive(Debug, Deserialize)]
struct ReviewsResponse {
    #[serde(default)]
    reviews: Vec<RawReview>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use reviewproxy_domain::Pagination;
    use serde_json::json;
    use wiremock::matchers::{method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn client_for(server: &MockServer) -> JudgeMeClient {
        JudgeMeClient::new(&JudgeMeConfig {
            base_url: server.uri(),
            api_token: "test-token".to_string(),
            shop_domain: "example.myshopify.com".to_string(),
            timeout_secs: 5,
        })
    }

    fn review_json(id: u64, published: bool) -> serde_json::Value {
        json!({
            "id": id,
            "rating": 4,
            "published": published,
            "reviewer": { "name": "John Smith", "email": "john@example.com" }
        })
    }

    #[tokio::test]
    async fn count_sends_credentials_product_and_rating() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/reviews/count"))
            .and(query_param("api_token", "test-token"))
            .and(query_param("shop_domain", "example.myshopify.com"))
            .and(query_param("product_id", "684657414"))
            .and(query_param("rating", "3"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "count": 7 })))
            .expect(1)
            .mount(&server)
            .await;

        let count = client_for(&server)
            .count_reviews("684657414".to_string(), Some(Rating::new(3).unwrap()))
            .await
            .unwrap();

        assert_eq!(count, 7);
    }

    #[tokio::test]
    async fn total_count_omits_rating() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/reviews/count"))
            .and(query_param("product_id", "684657414"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "count": 42 })))
            .mount(&server)
            .await;

        let count = client_for(&server)
            .count_reviews("684657414".to_string(), None)
            .await
            .unwrap();
        assert_eq!(count, 42);

        let requests = server.received_requests().await.unwrap();
        assert!(requests[0].url.query_pairs().all(|(key, _)| key != "rating"));
    }

    #[tokio::test]
    async fn lists_product_scoped_reviews() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/reviews"))
            .and(query_param("internal_id", "684657414"))
            .and(query_param("per_page", "10"))
            .and(query_param("page", "2"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "current_page": 2,
                "per_page": 10,
                "reviews": [review_json(1, true), review_json(2, false)]
            })))
            .mount(&server)
            .await;

        let query = ReviewQuery::for_product("684657414", Pagination::new("10", "2"));
        let reviews = client_for(&server).list_reviews(query).await.unwrap();

        let ids: Vec<u64> = reviews.iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![1, 2]);
    }

    #[tokio::test]
    async fn general_listing_has_no_product_scope() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/reviews"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "reviews": [review_json(5, false)]
            })))
            .mount(&server)
            .await;

        let query = ReviewQuery::general(Pagination::new("5", "1"));
        let reviews = client_for(&server).list_reviews(query).await.unwrap();
        assert_eq!(reviews.len(), 1);

        let requests = server.received_requests().await.unwrap();
        assert!(requests[0]
            .url
            .query_pairs()
            .all(|(key, _)| key != "internal_id"));
    }

    #[tokio::test]
    async fn product_lookup_returns_upstream_json_verbatim() {
        let server = MockServer::start().await;
        let product = json!({
            "product": { "id": 5, "external_id": 1104270388, "title": "Mug", "handle": "mug" }
        });
        Mock::given(method("GET"))
            .and(path("/products/-1"))
            .and(query_param("external_id", "1104270388"))
            .respond_with(ResponseTemplate::new(200).set_body_json(product.clone()))
            .mount(&server)
            .await;

        let body = client_for(&server)
            .get_product("1104270388".to_string())
            .await
            .unwrap();
        assert_eq!(body, product);
    }

    #[tokio::test]
    async fn non_success_status_is_reported_with_reason() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(404))
            .mount(&server)
            .await;

        let err = client_for(&server)
            .get_product("missing".to_string())
            .await
            .unwrap_err();

        assert!(matches!(err, UpstreamError::Status { status: 404, .. }));
        assert_eq!(err.to_string(), "Judge.me API error: Not Found");
    }

    #[tokio::test]
    async fn malformed_body_is_invalid_response() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
            .mount(&server)
            .await;

        let err = client_for(&server)
            .count_reviews("1".to_string(), None)
            .await
            .unwrap_err();

        assert!(matches!(err, UpstreamError::InvalidResponse(_)));
    }

    #[tokio::test]
    async fn unreachable_upstream_is_request_failure() {
        let client = JudgeMeClient::new(&JudgeMeConfig {
            base_url: "http://127.0.0.1:1".to_string(),
            api_token: "test-token".to_string(),
            shop_domain: "example.myshopify.com".to_string(),
            timeout_secs: 1,
        });

        let err = client.count_reviews("1".to_string(), None).await.unwrap_err();
        assert!(matches!(err, UpstreamError::RequestFailed(_)));
    }
}
