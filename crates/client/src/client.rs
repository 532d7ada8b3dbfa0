//! Shared HTTP transport for the resource clients.
//!
//! Every server response travels in the envelope `{code, data, message}`;
//! code 200 is success, anything else is surfaced as [`ApiError::Api`].
//! The body is read as text first and decoded with `serde_json`, so a
//! bounded preview of unparsable payloads can be logged.

use std::time::Duration;

use reqwest::{Method, RequestBuilder};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::config::Settings;
use crate::error::ApiError;

const SUCCESS_CODE: i64 = 200;
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

#[derive(Debug, Deserialize)]
#[serde(bound(deserialize = "T: DeserializeOwned"))]
struct Envelope<T> {
    code: i64,
    #[serde(default)]
    data: Option<T>,
    #[serde(default)]
    message: String,
}

/// Handle to the admin API. Cheap to clone; resource modules borrow it
/// per call.
#[derive(Debug, Clone)]
pub struct AdminClient {
    http: reqwest::Client,
    base_url: String,
}

impl AdminClient {
    pub fn new(settings: &Settings) -> Result<Self, ApiError> {
        let http = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()?;
        Ok(Self::with_http(http, &settings.api.base_url))
    }

    /// Wrap an existing reqwest client, e.g. one carrying auth headers.
    pub fn with_http(http: reqwest::Client, base_url: &str) -> Self {
        Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    fn request(&self, method: Method, path: &str) -> RequestBuilder {
        self.http.request(method, self.url(path))
    }

    pub(crate) async fn get<Q, T>(&self, path: &str, query: &Q) -> Result<T, ApiError>
    where
        Q: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        self.dispatch(self.request(Method::GET, path).query(query))
            .await
    }

    pub(crate) async fn get_one<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        self.dispatch(self.request(Method::GET, path)).await
    }

    pub(crate) async fn post<B: Serialize + ?Sized>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<(), ApiError> {
        self.dispatch_unit(self.request(Method::POST, path).json(body))
            .await
    }

    pub(crate) async fn post_multipart<T: DeserializeOwned>(
        &self,
        path: &str,
        form: reqwest::multipart::Form,
    ) -> Result<T, ApiError> {
        self.dispatch(self.request(Method::POST, path).multipart(form))
            .await
    }

    pub(crate) async fn patch<B: Serialize + ?Sized>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<(), ApiError> {
        self.dispatch_unit(self.request(Method::PATCH, path).json(body))
            .await
    }

    pub(crate) async fn delete<B: Serialize + ?Sized>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<(), ApiError> {
        self.dispatch_unit(self.request(Method::DELETE, path).json(body))
            .await
    }

    /// State-transition actions dispatch as a bare PUT.
    pub(crate) async fn put_empty(&self, path: &str) -> Result<(), ApiError> {
        self.dispatch_unit(self.request(Method::PUT, path)).await
    }

    async fn dispatch<T: DeserializeOwned>(&self, req: RequestBuilder) -> Result<T, ApiError> {
        let env = self.roundtrip::<T>(req).await?;
        env.data.ok_or(ApiError::MissingData)
    }

    async fn dispatch_unit(&self, req: RequestBuilder) -> Result<(), ApiError> {
        self.roundtrip::<serde_json::Value>(req).await.map(|_| ())
    }

    async fn roundtrip<T: DeserializeOwned>(
        &self,
        req: RequestBuilder,
    ) -> Result<Envelope<T>, ApiError> {
        let req = req.build()?;
        tracing::debug!(method = %req.method(), url = %req.url(), "dispatching admin api request");

        let resp = self.http.execute(req).await?;
        let status = resp.status();
        let body = resp.text().await?;

        if !status.is_success() {
            tracing::error!(%status, "admin api request failed");
            // The server reports failures as HTTP 400 with a regular
            // envelope; surface its message when one is there.
            if let Ok(env) = serde_json::from_str::<Envelope<serde_json::Value>>(&body) {
                return Err(ApiError::Api {
                    code: env.code,
                    message: env.message,
                });
            }
            return Err(ApiError::Status { status, body });
        }

        let env: Envelope<T> = serde_json::from_str(&body).map_err(|source| {
            let preview: String = body.chars().take(200).collect();
            tracing::error!(error = %source, preview = %preview, "failed to decode admin api response");
            ApiError::Decode { source, preview }
        })?;

        if env.code != SUCCESS_CODE {
            return Err(ApiError::Api {
                code: env.code,
                message: env.message,
            });
        }
        Ok(env)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_client() -> AdminClient {
        AdminClient::with_http(reqwest::Client::new(), "http://localhost:8088/")
    }

    #[test]
    fn test_base_url_trailing_slash_is_trimmed() {
        let client = test_client();
        assert_eq!(client.url("/api/order"), "http://localhost:8088/api/order");
    }

    #[test]
    fn test_request_carries_method_and_url() {
        let client = test_client();
        let req = client
            .request(Method::PATCH, "/api/order/42")
            .build()
            .unwrap();
        assert_eq!(req.method(), Method::PATCH);
        assert_eq!(req.url().as_str(), "http://localhost:8088/api/order/42");
    }

    #[test]
    fn test_query_params_are_appended() {
        let client = test_client();
        let req = client
            .request(Method::GET, "/api/order")
            .query(&[("pageNum", "1"), ("pageSize", "10")])
            .build()
            .unwrap();
        assert_eq!(
            req.url().as_str(),
            "http://localhost:8088/api/order?pageNum=1&pageSize=10"
        );
    }

    #[test]
    fn test_success_envelope_decodes() {
        let env: Envelope<serde_json::Value> =
            serde_json::from_str(r#"{"code":200,"data":{"total":0},"message":"ok"}"#).unwrap();
        assert_eq!(env.code, 200);
        assert!(env.data.is_some());
    }

    #[test]
    fn test_failure_envelope_keeps_message() {
        let env: Envelope<serde_json::Value> =
            serde_json::from_str(r#"{"code":400,"data":null,"message":"获取订单列表失败"}"#)
                .unwrap();
        assert_eq!(env.code, 400);
        assert!(env.data.is_none());
        assert_eq!(env.message, "获取订单列表失败");
    }
}
