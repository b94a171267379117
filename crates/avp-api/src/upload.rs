//! File upload resource.
//!
//! Single-file multipart upload returning the reference URL used by project
//! and payment create calls. Uploads always complete before the dependent
//! create is issued; that ordering lives in the controllers.

use serde::{Deserialize, Serialize};

use crate::{PortalClient, error::ApiError, http::check_response};

/// Reference to an uploaded file, as returned by `POST /api/upload`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct FileRef {
    pub url: String,
}

impl PortalClient {
    /// Upload a file via `POST /api/upload` (multipart, field `file`).
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] if the request fails, the server rejects it, or
    /// the response carries no URL.
    pub async fn upload(&self, file_name: &str, bytes: Vec<u8>) -> Result<FileRef, ApiError> {
        let part = reqwest::multipart::Part::bytes(bytes).file_name(file_name.to_string());
        let form = reqwest::multipart::Form::new().part("file", part);

        let resp = self
            .http()
            .post(self.endpoint("/api/upload"))
            .multipart(form)
            .send()
            .await?;
        let resp = check_response(resp).await?;

        let file_ref: FileRef = resp.json().await?;
        if file_ref.url.is_empty() {
            return Err(ApiError::Parse("upload response carried an empty url".into()));
        }
        Ok(file_ref)
    }
}
