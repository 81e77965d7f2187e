//! `GET /api/v4/users/me`: who does this token belong to.

use reqwest::header::AUTHORIZATION;
use tracing::{info, instrument};

use super::{IdentityError, PlatformClient, Principal};

const USERS_ME_PATH: &str = "/api/v4/users/me";

impl PlatformClient {
    /// Resolves the user the access token belongs to.
    ///
    /// # Errors
    ///
    /// Returns [`IdentityError::HttpStatus`] with the response body on any
    /// non-success status, [`IdentityError::Decode`] if the body has no `id`,
    /// and transport variants for network failures and timeouts.
    #[instrument(skip(self), fields(server = %self.server))]
    pub async fn resolve_identity(&self) -> Result<Principal, IdentityError> {
        let url = self.server.endpoint(USERS_ME_PATH);

        let response = self
            .client
            .inner()
            .get(&url)
            .header(AUTHORIZATION, self.token.bearer())
            .send()
            .await
            .map_err(|e| IdentityError::from_reqwest(&url, e))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(IdentityError::http_status(status.as_u16(), body));
        }

        let principal: Principal = response
            .json()
            .await
            .map_err(|source| IdentityError::Decode { source })?;

        info!(user_id = %principal.id, "identity resolved");
        Ok(principal)
    }
}
