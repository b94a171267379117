//! Account resource: register, login, and the admin user listing.
//!
//! Login is email-only; the API defines no credential beyond that. Success
//! is a `User` record with an id, anything else is an error.

use avp_core::entities::User;

use crate::{PortalClient, error::ApiError, http::check_response};

#[derive(serde::Serialize)]
struct RegisterRequest<'a> {
    name: &'a str,
    email: &'a str,
}

#[derive(serde::Serialize)]
struct LoginRequest<'a> {
    email: &'a str,
}

impl PortalClient {
    /// Create an account via `POST /api/register`.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] if the request fails, the server rejects it, or
    /// the response is not a `User` record.
    pub async fn register(&self, name: &str, email: &str) -> Result<User, ApiError> {
        let resp = self
            .http()
            .post(self.endpoint("/api/register"))
            .json(&RegisterRequest { name, email })
            .send()
            .await?;
        let resp = check_response(resp).await?;
        Ok(resp.json().await?)
    }

    /// Look up an account by email via `POST /api/login`.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] if the request fails, the server rejects it, or
    /// the response is not a `User` record.
    pub async fn login(&self, email: &str) -> Result<User, ApiError> {
        let resp = self
            .http()
            .post(self.endpoint("/api/login"))
            .json(&LoginRequest { email })
            .send()
            .await?;
        let resp = check_response(resp).await?;
        Ok(resp.json().await?)
    }

    /// Fetch every registered user via `GET /api/users` (admin view).
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] if the request fails or the response cannot be
    /// parsed.
    pub async fn list_users(&self) -> Result<Vec<User>, ApiError> {
        let resp = self.http().get(self.endpoint("/api/users")).send().await?;
        let resp = check_response(resp).await?;
        Ok(resp.json().await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn register_body_has_name_and_email() {
        let body = serde_json::to_value(RegisterRequest {
            name: "A",
            email: "a@x.com",
        })
        .unwrap();
        assert_eq!(body, serde_json::json!({"name": "A", "email": "a@x.com"}));
    }

    #[test]
    fn login_body_is_email_only() {
        let body = serde_json::to_value(LoginRequest { email: "a@x.com" }).unwrap();
        assert_eq!(body, serde_json::json!({"email": "a@x.com"}));
    }

    #[test]
    fn parse_user_response() {
        let user: User =
            serde_json::from_str(r#"{"id": 1, "name": "A", "email": "a@x.com"}"#).unwrap();
        assert_eq!(user.id, 1);
        assert_eq!(user.name, "A");
    }

    #[test]
    fn response_without_id_is_rejected() {
        let result: Result<User, _> = serde_json::from_str(r#"{"error": "unknown email"}"#);
        assert!(result.is_err());
    }
}
