// SPDX-License-Identifier: MIT

//! Production [`Api`] implementation over HTTP.
//!
//! Talks JSON to the service's `/resumenes` resource. The client is
//! built without an overall request timeout: regenerate legitimately
//! runs for minutes while the server re-ingests its feeds, so only the
//! connection attempt itself is bounded.

use std::time::Duration;

use serde::de::DeserializeOwned;
use tracing::debug;

use brief_core::{Draft, SummaryRecord};

use super::api::{classify, Api, ApiError, ApiFuture, ApiResult};

/// How long to wait for a TCP connection before giving up.
const CONNECT_TIMEOUT: Duration = Duration::from_secs(10);

/// HTTP client for the summary service.
pub struct HttpApi {
    base_url: String,
    client: reqwest::Client,
}

impl HttpApi {
    /// Create a client for the service at `base_url`.
    pub fn new(base_url: impl Into<String>) -> ApiResult<Self> {
        let client = reqwest::Client::builder()
            .connect_timeout(CONNECT_TIMEOUT)
            .build()
            .map_err(|e| ApiError::TransportFailure(e.to_string()))?;

        let base_url = base_url.into();
        Ok(HttpApi {
            base_url: base_url.trim_end_matches('/').to_string(),
            client,
        })
    }

    /// The configured base URL, without a trailing slash.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

fn transport(e: reqwest::Error) -> ApiError {
    ApiError::TransportFailure(e.to_string())
}

/// Pass successful responses through; classify everything else.
async fn expect_success(
    response: reqwest::Response,
    id: Option<u64>,
) -> ApiResult<reqwest::Response> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    let body = response.text().await.unwrap_or_default();
    debug!(status = status.as_u16(), "request failed");
    Err(classify(status.as_u16(), &body, id))
}

/// Decode a successful response body, treating malformed payloads as
/// server failures rather than propagating shapeless data.
async fn decode_json<T: DeserializeOwned>(response: reqwest::Response) -> ApiResult<T> {
    let status = response.status().as_u16();
    let body = response.text().await.map_err(transport)?;
    serde_json::from_str(&body).map_err(|e| ApiError::ServerFailure {
        status,
        message: format!("malformed response body: {e}"),
    })
}

impl Api for HttpApi {
    fn list(&self) -> ApiFuture<'_, Vec<SummaryRecord>> {
        Box::pin(async move {
            debug!("GET /resumenes");
            let response = self
                .client
                .get(self.url("/resumenes"))
                .send()
                .await
                .map_err(transport)?;
            decode_json(expect_success(response, None).await?).await
        })
    }

    fn get(&self, id: u64) -> ApiFuture<'_, SummaryRecord> {
        Box::pin(async move {
            debug!(id, "GET /resumenes/{{id}}");
            let response = self
                .client
                .get(self.url(&format!("/resumenes/{id}")))
                .send()
                .await
                .map_err(transport)?;
            decode_json(expect_success(response, Some(id)).await?).await
        })
    }

    fn create(&self, draft: Draft) -> ApiFuture<'_, SummaryRecord> {
        Box::pin(async move {
            debug!("POST /resumenes");
            let response = self
                .client
                .post(self.url("/resumenes"))
                .json(&draft)
                .send()
                .await
                .map_err(transport)?;
            decode_json(expect_success(response, None).await?).await
        })
    }

    fn update(&self, id: u64, draft: Draft) -> ApiFuture<'_, SummaryRecord> {
        Box::pin(async move {
            debug!(id, "PUT /resumenes/{{id}}");
            let response = self
                .client
                .put(self.url(&format!("/resumenes/{id}")))
                .json(&draft)
                .send()
                .await
                .map_err(transport)?;
            decode_json(expect_success(response, Some(id)).await?).await
        })
    }

    fn delete(&self, id: u64) -> ApiFuture<'_, ()> {
        Box::pin(async move {
            debug!(id, "DELETE /resumenes/{{id}}");
            let response = self
                .client
                .delete(self.url(&format!("/resumenes/{id}")))
                .send()
                .await
                .map_err(transport)?;
            expect_success(response, Some(id)).await?;
            Ok(())
        })
    }

    fn regenerate(&self) -> ApiFuture<'_, ()> {
        Box::pin(async move {
            debug!("POST /resumenes/refresh");
            let response = self
                .client
                .post(self.url("/resumenes/refresh"))
                .send()
                .await
                .map_err(transport)?;
            expect_success(response, None).await?;
            Ok(())
        })
    }
}

#[cfg(test)]
#[path = "http_tests.rs"]
mod tests;
