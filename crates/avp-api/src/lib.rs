//! # avp-api
//!
//! HTTP gateway to the portal REST API.
//!
//! One module per server resource:
//! - `users` (`/api/register`, `/api/login`, `/api/users`)
//! - `projects` (`/api/projects`)
//! - `payments` (`/api/payments`)
//! - `upload` (`/api/upload`, multipart)
//!
//! All operations return explicit results; create operations carry an
//! `Idempotency-Key` header so a double submission cannot produce duplicate
//! records. The [`PortalBackend`] trait mirrors the operation set so
//! controllers can run against a test double.

pub mod payments;
pub mod projects;
pub mod upload;
pub mod users;

mod error;
mod http;

pub use error::ApiError;
pub use payments::{NewPayment, PaymentPatch};
pub use projects::{NewProject, ProjectPatch};
pub use upload::FileRef;

use avp_core::entities::{Payment, Project, User};

/// HTTP client for the portal REST API.
pub struct PortalClient {
    http: reqwest::Client,
    base_url: String,
}

impl PortalClient {
    /// Create a client for the API at `base_url` with a per-request timeout.
    ///
    /// # Panics
    ///
    /// Panics if the underlying `reqwest::Client` fails to build.
    #[must_use]
    pub fn new(base_url: &str, timeout_secs: u64) -> Self {
        Self {
            http: reqwest::Client::builder()
                .user_agent("avportal/0.1")
                .timeout(std::time::Duration::from_secs(timeout_secs))
                .build()
                .expect("reqwest client should build"),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// The configured API base URL (no trailing slash).
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub(crate) fn endpoint(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }

    pub(crate) fn http(&self) -> &reqwest::Client {
        &self.http
    }

    /// Fresh idempotency key for a create operation.
    pub(crate) fn idempotency_key() -> String {
        uuid::Uuid::new_v4().to_string()
    }
}

/// The full gateway operation set.
///
/// [`PortalClient`] is the production implementation; controllers take a
/// generic backend so their call ordering and reload behavior can be
/// asserted against a recording double.
pub trait PortalBackend {
    fn register(
        &self,
        name: &str,
        email: &str,
    ) -> impl Future<Output = Result<User, ApiError>> + Send;
    fn login(&self, email: &str) -> impl Future<Output = Result<User, ApiError>> + Send;
    fn list_users(&self) -> impl Future<Output = Result<Vec<User>, ApiError>> + Send;
    fn list_projects(
        &self,
        student_id: Option<i64>,
    ) -> impl Future<Output = Result<Vec<Project>, ApiError>> + Send;
    fn create_project(
        &self,
        request: &NewProject,
    ) -> impl Future<Output = Result<(), ApiError>> + Send;
    fn patch_project(
        &self,
        id: i64,
        patch: &ProjectPatch,
    ) -> impl Future<Output = Result<(), ApiError>> + Send;
    fn list_payments(
        &self,
        student_id: Option<i64>,
    ) -> impl Future<Output = Result<Vec<Payment>, ApiError>> + Send;
    fn create_payment(
        &self,
        request: &NewPayment,
    ) -> impl Future<Output = Result<(), ApiError>> + Send;
    fn patch_payment(
        &self,
        id: i64,
        patch: &PaymentPatch,
    ) -> impl Future<Output = Result<(), ApiError>> + Send;
    fn upload(
        &self,
        file_name: &str,
        bytes: Vec<u8>,
    ) -> impl Future<Output = Result<FileRef, ApiError>> + Send;
}

impl PortalBackend for PortalClient {
    async fn register(&self, name: &str, email: &str) -> Result<User, ApiError> {
        Self::register(self, name, email).await
    }

    async fn login(&self, email: &str) -> Result<User, ApiError> {
        Self::login(self, email).await
    }

    async fn list_users(&self) -> Result<Vec<User>, ApiError> {
        Self::list_users(self).await
    }

    async fn list_projects(&self, student_id: Option<i64>) -> Result<Vec<Project>, ApiError> {
        Self::list_projects(self, student_id).await
    }

    async fn create_project(&self, request: &NewProject) -> Result<(), ApiError> {
        Self::create_project(self, request).await
    }

    async fn patch_project(&self, id: i64, patch: &ProjectPatch) -> Result<(), ApiError> {
        Self::patch_project(self, id, patch).await
    }

    async fn list_payments(&self, student_id: Option<i64>) -> Result<Vec<Payment>, ApiError> {
        Self::list_payments(self, student_id).await
    }

    async fn create_payment(&self, request: &NewPayment) -> Result<(), ApiError> {
        Self::create_payment(self, request).await
    }

    async fn patch_payment(&self, id: i64, patch: &PaymentPatch) -> Result<(), ApiError> {
        Self::patch_payment(self, id, patch).await
    }

    async fn upload(&self, file_name: &str, bytes: Vec<u8>) -> Result<FileRef, ApiError> {
        Self::upload(self, file_name, bytes).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn base_url_trailing_slash_is_trimmed() {
        let client = PortalClient::new("http://localhost:8000/", 10);
        assert_eq!(client.base_url(), "http://localhost:8000");
        assert_eq!(client.endpoint("/api/projects"), "http://localhost:8000/api/projects");
    }

    #[test]
    fn idempotency_keys_are_unique() {
        let a = PortalClient::idempotency_key();
        let b = PortalClient::idempotency_key();
        assert_ne!(a, b);
        assert_eq!(a.len(), 36);
    }
}
