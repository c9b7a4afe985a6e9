//! HTTP client for the elearn REST API.
//!
//! Every request carries the stored bearer token when one is present, and a
//! 401 on any call clears the session and forces navigation to the login
//! route before the error reaches the caller. Non-OK statuses are
//! normalized into [`ApiError`]; transport failures propagate as the
//! underlying `reqwest` error. No retries, no timeouts.

use std::sync::Arc;

use anyhow::{Context, Result};
use reqwest::header::CONTENT_TYPE;
use reqwest::{Method, Response, StatusCode, multipart};
use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::guard::{LOGIN_ROUTE, Navigator};
use crate::session::SessionStore;

mod endpoints;
mod error;
pub mod types;

pub use error::{ApiError, ApiErrorKind};

/// API client with uniform auth and error handling.
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
    store: Arc<dyn SessionStore>,
    navigator: Arc<dyn Navigator>,
}

impl ApiClient {
    /// Creates a client for the API at `base_url` (no trailing slash).
    pub fn new(
        base_url: impl Into<String>,
        store: Arc<dyn SessionStore>,
        navigator: Arc<dyn Navigator>,
    ) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.into(),
            store,
            navigator,
        }
    }

    /// Returns the configured base URL.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Issues `method` against `<base><endpoint>` and interprets the status.
    ///
    /// Returns the raw response for the caller to decode. The session store
    /// is read per call, so a token refreshed or cleared by a concurrent
    /// call is picked up on the next request.
    ///
    /// # Errors
    /// Returns an error if the operation fails.
    pub async fn request<B>(
        &self,
        method: Method,
        endpoint: &str,
        body: Option<&B>,
    ) -> Result<Response>
    where
        B: Serialize + ?Sized,
    {
        let url = format!("{}{}", self.base_url, endpoint);

        let mut builder = self
            .http
            .request(method.clone(), &url)
            .header(CONTENT_TYPE, "application/json");
        if let Some(token) = self.store.load().token() {
            builder = builder.bearer_auth(token);
        }
        if let Some(body) = body {
            builder = builder.json(body);
        }

        let response = builder
            .send()
            .await
            .with_context(|| format!("{method} {url} failed"))?;

        self.interpret_status(response).await
    }

    /// GET `endpoint` and decode the JSON body.
    ///
    /// # Errors
    /// Returns an error if the operation fails.
    pub async fn get<T: DeserializeOwned>(&self, endpoint: &str) -> Result<T> {
        let response = self.request(Method::GET, endpoint, None::<&()>).await?;
        Self::decode(endpoint, response).await
    }

    /// POST a JSON `body` to `endpoint` and decode the JSON response.
    ///
    /// # Errors
    /// Returns an error if the operation fails.
    pub async fn post<T, B>(&self, endpoint: &str, body: &B) -> Result<T>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        let response = self.request(Method::POST, endpoint, Some(body)).await?;
        Self::decode(endpoint, response).await
    }

    /// PUT a JSON `body` to `endpoint` and decode the JSON response.
    ///
    /// # Errors
    /// Returns an error if the operation fails.
    pub async fn put<T, B>(&self, endpoint: &str, body: &B) -> Result<T>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        let response = self.request(Method::PUT, endpoint, Some(body)).await?;
        Self::decode(endpoint, response).await
    }

    /// DELETE `endpoint` (no body) and decode the JSON response.
    ///
    /// # Errors
    /// Returns an error if the operation fails.
    pub async fn delete<T: DeserializeOwned>(&self, endpoint: &str) -> Result<T> {
        let response = self.request(Method::DELETE, endpoint, None::<&()>).await?;
        Self::decode(endpoint, response).await
    }

    /// Sends a multipart `form` to `endpoint` and decodes the JSON response.
    ///
    /// No Content-Type header is set here: reqwest attaches the multipart
    /// one with the form boundary, which a hand-set header would break.
    /// Auth and status handling match [`ApiClient::request`].
    ///
    /// # Errors
    /// Returns an error if the operation fails.
    pub async fn upload<T: DeserializeOwned>(
        &self,
        endpoint: &str,
        form: multipart::Form,
        method: Method,
    ) -> Result<T> {
        let url = format!("{}{}", self.base_url, endpoint);

        let mut builder = self.http.request(method.clone(), &url);
        if let Some(token) = self.store.load().token() {
            builder = builder.bearer_auth(token);
        }

        let response = builder
            .multipart(form)
            .send()
            .await
            .with_context(|| format!("{method} {url} failed"))?;

        let response = self.interpret_status(response).await?;
        Self::decode(endpoint, response).await
    }

    /// Uniform status interpretation for every call.
    ///
    /// 401 invalidates the session and redirects to login unconditionally,
    /// whether or not the caller handles the returned error.
    async fn interpret_status(&self, response: Response) -> Result<Response> {
        let status = response.status();

        if status == StatusCode::UNAUTHORIZED {
            tracing::debug!("received 401, clearing session");
            self.store.clear();
            self.navigator.replace(LOGIN_ROUTE);
            return Err(ApiError::session_expired().into());
        }

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ApiError::http_status(status.as_u16(), &body).into());
        }

        Ok(response)
    }

    async fn decode<T: DeserializeOwned>(endpoint: &str, response: Response) -> Result<T> {
        response
            .json::<T>()
            .await
            .map_err(|e| ApiError::decode(endpoint, e).into())
    }
}
