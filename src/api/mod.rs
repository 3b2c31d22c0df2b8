//! Inventory API Bindings
//!
//! HTTP/JSON access to the backend, organized by resource. All
//! authenticated traffic goes through [`ApiClient`], which owns the
//! bearer header and the 401 invalidation path: a rejected token is
//! cleared and the app is sent back to the login view before any body
//! reaches a caller.

mod analytics;
mod auth;
mod dashboard;
mod items;
mod notifications;

pub use dashboard::{load_dashboard, DashboardLoadError};

use leptos::prelude::*;
use percent_encoding::{utf8_percent_encode, NON_ALPHANUMERIC};
use serde::de::DeserializeOwned;
use serde::Serialize;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{Headers, RequestInit, Response};

use crate::context::Route;
use crate::error::{ApiError, ApiResult};
use crate::session::Session;

pub const DEFAULT_API_BASE: &str = "http://localhost:5060";

#[derive(Clone)]
pub struct ApiClient {
    session: Session,
    base_url: String,
    set_route: WriteSignal<Route>,
}

impl ApiClient {
    pub fn new(session: Session, base_url: impl Into<String>, set_route: WriteSignal<Route>) -> Self {
        ApiClient {
            session,
            base_url: base_url.into(),
            set_route,
        }
    }

    /// Abort-with-redirect when no token is present. Data views call
    /// this on entry, before issuing their fetch set.
    pub fn require_session(&self) -> ApiResult<()> {
        if self.session.token().is_none() {
            self.redirect_to_login();
            return Err(ApiError::AuthMissing);
        }
        Ok(())
    }

    /// Clear the session and return to the login view. Unconditional,
    /// no server round-trip.
    pub fn sign_out(&self) {
        self.session.clear();
        self.redirect_to_login();
    }

    fn redirect_to_login(&self) {
        self.set_route.set(Route::Login);
    }

    /// Authenticated request, JSON body parsed into `T`.
    async fn request<T: DeserializeOwned>(&self, method: &str, path: &str) -> ApiResult<T> {
        let response = self.send(method, path, None).await?;
        parse_json(&response).await
    }

    /// Authenticated request with a JSON body.
    async fn request_with_body<B: Serialize, T: DeserializeOwned>(
        &self,
        method: &str,
        path: &str,
        body: &B,
    ) -> ApiResult<T> {
        let body = serde_json::to_string(body)
            .map_err(|e| ApiError::MalformedResponse(e.to_string()))?;
        let response = self.send(method, path, Some(body)).await?;
        parse_json(&response).await
    }

    /// Authenticated request whose response body is ignored. Deletes may
    /// answer 200-with-message or a bare 204.
    async fn request_no_content(&self, method: &str, path: &str) -> ApiResult<()> {
        self.send(method, path, None).await.map(|_| ())
    }

    /// Unauthenticated request (login/register); a 401 here means bad
    /// credentials, never session loss.
    async fn request_public<B: Serialize, T: DeserializeOwned>(
        &self,
        method: &str,
        path: &str,
        body: &B,
    ) -> ApiResult<T> {
        let body = serde_json::to_string(body)
            .map_err(|e| ApiError::MalformedResponse(e.to_string()))?;
        let response = self.dispatch(method, path, Some(body), None).await?;
        parse_json(&response).await
    }

    async fn send(&self, method: &str, path: &str, body: Option<String>) -> ApiResult<Response> {
        let Some(token) = self.session.token() else {
            self.redirect_to_login();
            return Err(ApiError::AuthMissing);
        };
        self.dispatch(method, path, body, Some(token.as_str())).await
    }

    async fn dispatch(
        &self,
        method: &str,
        path: &str,
        body: Option<String>,
        token: Option<&str>,
    ) -> ApiResult<Response> {
        let headers = Headers::new().map_err(js_error)?;
        headers
            .set("Content-Type", "application/json")
            .map_err(js_error)?;
        if let Some(token) = token {
            headers
                .set("Authorization", &format!("Bearer {}", token))
                .map_err(js_error)?;
        }

        let init = RequestInit::new();
        init.set_method(method);
        init.set_headers(&headers.into());
        if let Some(body) = body {
            init.set_body(&JsValue::from_str(&body));
        }

        let url = format!("{}{}", self.base_url, path);
        let window = web_sys::window().ok_or_else(|| ApiError::Network("no window".into()))?;
        let fetched = JsFuture::from(window.fetch_with_str_and_init(&url, &init))
            .await
            .map_err(js_error)?;
        let response: Response = fetched.dyn_into().map_err(js_error)?;

        let status = response.status();
        if !(200..300).contains(&status) {
            let error = if token.is_some() {
                ApiError::from_status(status)
            } else {
                ApiError::RequestFailed(status)
            };
            if error == ApiError::AuthExpired {
                web_sys::console::warn_1(
                    &format!("[API] {} {} rejected with 401, clearing session", method, path).into(),
                );
                self.session.clear();
                self.redirect_to_login();
            }
            return Err(error);
        }
        Ok(response)
    }
}

async fn parse_json<T: DeserializeOwned>(response: &Response) -> ApiResult<T> {
    let promise = response.json().map_err(js_error)?;
    let value = JsFuture::from(promise).await.map_err(js_error)?;
    serde_wasm_bindgen::from_value(value).map_err(|e| ApiError::MalformedResponse(e.to_string()))
}

fn js_error(value: JsValue) -> ApiError {
    ApiError::Network(format!("{:?}", value))
}

/// Server-issued ids go into URL paths; escape anything unsafe.
fn encode_path_segment(raw: &str) -> String {
    utf8_percent_encode(raw, NON_ALPHANUMERIC).to_string()
}
