//! Auth Endpoints
//!
//! Login and registration. These are the only unauthenticated calls.

use super::ApiClient;
use crate::error::ApiResult;
use crate::models::{Credentials, ServerMessage, TokenResponse};

impl ApiClient {
    /// POST /api/login. A successful login writes the token; the caller
    /// decides where to navigate.
    pub async fn login(&self, credentials: &Credentials) -> ApiResult<()> {
        let response: TokenResponse = self
            .request_public("POST", "/api/login", credentials)
            .await?;
        self.session.store(&response.token);
        Ok(())
    }

    /// POST /api/register. Does not sign the user in.
    pub async fn register(&self, credentials: &Credentials) -> ApiResult<ServerMessage> {
        self.request_public("POST", "/api/register", credentials).await
    }
}
