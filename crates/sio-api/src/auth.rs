use sio_core::responses::{LoginRequest, LoginResponse};

use crate::{ApiError, CoachClient, http::check_response, require_non_blank};

impl CoachClient {
    /// Exchange credentials for a bearer token via `POST /auth/login`.
    ///
    /// The token is returned, not stored: persisting it is the caller's job.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] if the request fails, the credentials are
    /// rejected, or the response carries no token.
    pub async fn login(&self, email: &str, password: &str) -> Result<String, ApiError> {
        require_non_blank("email", email)?;
        require_non_blank("password", password)?;

        let body = LoginRequest {
            email: email.trim().to_string(),
            password: password.to_string(),
        };
        let resp = check_response(self.post("/auth/login").json(&body).send().await?).await?;
        let data: LoginResponse = resp.json().await?;
        if data.token.trim().is_empty() {
            return Err(ApiError::Parse("no valid token received".into()));
        }
        Ok(data.token)
    }
}
