//! Project resource: listing, creation, and partial updates.

use avp_core::entities::Project;
use avp_core::enums::{ProjectStatus, Technology};
use serde::Serialize;

use crate::{PortalClient, error::ApiError, http::check_response};

/// Body for `POST /api/projects`.
///
/// `fileUrl` is omitted from the JSON entirely when no reference file was
/// uploaded, matching what the server expects.
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct NewProject {
    pub student_id: i64,
    pub title: String,
    pub technology: Technology,
    pub description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file_url: Option<String>,
}

/// Partial body for `PATCH /api/projects/:id`.
///
/// Only the fields that are set get serialized, so a status change never
/// resubmits remarks and a remark edit never touches status.
#[derive(Debug, Clone, Default, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ProjectPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<ProjectStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub admin_remarks: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub deliverables: Option<Vec<String>>,
}

impl ProjectPatch {
    /// Patch carrying only a status change.
    #[must_use]
    pub fn with_status(status: ProjectStatus) -> Self {
        Self {
            status: Some(status),
            ..Self::default()
        }
    }

    /// Patch carrying only an admin remark.
    #[must_use]
    pub fn with_remarks(remarks: impl Into<String>) -> Self {
        Self {
            admin_remarks: Some(remarks.into()),
            ..Self::default()
        }
    }

    /// Patch replacing the deliverables list.
    #[must_use]
    pub fn with_deliverables(deliverables: Vec<String>) -> Self {
        Self {
            deliverables: Some(deliverables),
            ..Self::default()
        }
    }
}

impl PortalClient {
    /// Fetch projects via `GET /api/projects`, optionally filtered to one
    /// student. No filter is the admin path: every project comes back.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] if the request fails or the response cannot be
    /// parsed.
    pub async fn list_projects(&self, student_id: Option<i64>) -> Result<Vec<Project>, ApiError> {
        let url = match student_id {
            Some(id) => self.endpoint(&format!("/api/projects?studentId={id}")),
            None => self.endpoint("/api/projects"),
        };
        let resp = check_response(self.http().get(url).send().await?).await?;
        Ok(resp.json().await?)
    }

    /// Create a project request via `POST /api/projects`.
    ///
    /// Sends an `Idempotency-Key` header so a double submission cannot
    /// create duplicate records.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] if the request fails or the server rejects it.
    pub async fn create_project(&self, request: &NewProject) -> Result<(), ApiError> {
        let resp = self
            .http()
            .post(self.endpoint("/api/projects"))
            .header("Idempotency-Key", Self::idempotency_key())
            .json(request)
            .send()
            .await?;
        check_response(resp).await?;
        Ok(())
    }

    /// Apply a partial update via `PATCH /api/projects/:id`.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] if the request fails or the server rejects it.
    pub async fn patch_project(&self, id: i64, patch: &ProjectPatch) -> Result<(), ApiError> {
        let resp = self
            .http()
            .patch(self.endpoint(&format!("/api/projects/{id}")))
            .json(patch)
            .send()
            .await?;
        check_response(resp).await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn new_project_without_file_omits_file_url() {
        let request = NewProject {
            student_id: 1,
            title: "T".into(),
            technology: Technology::Web,
            description: "D".into(),
            file_url: None,
        };
        let body = serde_json::to_value(&request).unwrap();
        assert_eq!(
            body,
            serde_json::json!({
                "studentId": 1,
                "title": "T",
                "technology": "Web",
                "description": "D"
            })
        );
    }

    #[test]
    fn new_project_with_file_includes_file_url() {
        let request = NewProject {
            student_id: 1,
            title: "T".into(),
            technology: Technology::AiMl,
            description: String::new(),
            file_url: Some("http://localhost:8000/files/ref.pdf".into()),
        };
        let body = serde_json::to_value(&request).unwrap();
        assert_eq!(body["fileUrl"], "http://localhost:8000/files/ref.pdf");
        assert_eq!(body["technology"], "AI/ML");
    }

    #[test]
    fn status_patch_carries_only_status() {
        let patch = ProjectPatch::with_status(ProjectStatus::InReview);
        let body = serde_json::to_value(&patch).unwrap();
        assert_eq!(body, serde_json::json!({"status": "In Review"}));
    }

    #[test]
    fn remark_patch_carries_only_remarks() {
        let patch = ProjectPatch::with_remarks("needs a report draft");
        let body = serde_json::to_value(&patch).unwrap();
        assert_eq!(body, serde_json::json!({"adminRemarks": "needs a report draft"}));
    }

    #[test]
    fn deliverables_patch_replaces_whole_list() {
        let patch = ProjectPatch::with_deliverables(vec!["u1".into(), "u2".into()]);
        let body = serde_json::to_value(&patch).unwrap();
        assert_eq!(body, serde_json::json!({"deliverables": ["u1", "u2"]}));
    }

    #[test]
    fn parse_project_list_fixture() {
        const FIXTURE: &str = r#"[
            {
                "id": 1,
                "studentId": 1,
                "title": "T",
                "technology": "Web",
                "description": "D",
                "status": "Requested"
            },
            {
                "id": 2,
                "studentId": 4,
                "title": "Attendance System",
                "technology": "Android",
                "description": "",
                "status": "Completed",
                "paymentStatus": "verified",
                "deliverables": ["http://localhost:8000/files/final.zip"]
            }
        ]"#;

        let projects: Vec<Project> = serde_json::from_str(FIXTURE).unwrap();
        assert_eq!(projects.len(), 2);
        assert_eq!(projects[0].status, ProjectStatus::Requested);
        assert_eq!(projects[0].payment_status, "pending");
        assert_eq!(projects[1].deliverables.len(), 1);
        assert!(projects[1].payment_verified());
    }
}
