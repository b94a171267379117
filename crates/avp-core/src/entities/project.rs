use serde::{Deserialize, Serialize};

use crate::enums::{ProjectStatus, Technology};

fn default_payment_status() -> String {
    "pending".to_string()
}

/// A requested final-year project.
///
/// Created by a student submission; status, remarks, and deliverables are
/// mutated only through admin operations. The `deliverables` list is
/// append-only from this client's perspective.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub id: i64,
    pub student_id: i64,
    pub title: String,
    pub technology: Technology,
    #[serde(default)]
    pub description: String,
    /// Reference file uploaded alongside the request, if any.
    #[serde(default)]
    pub file_url: Option<String>,
    pub status: ProjectStatus,
    /// Free-form payment state as reported by the server ("verified",
    /// "pending", ...). Rendered as a badge, never interpreted beyond
    /// string comparison.
    #[serde(default = "default_payment_status")]
    pub payment_status: String,
    #[serde(default)]
    pub deliverables: Vec<String>,
    #[serde(default)]
    pub admin_remarks: Option<String>,
}

impl Project {
    /// Whether the server has marked this project's payment as verified.
    #[must_use]
    pub fn payment_verified(&self) -> bool {
        self.payment_status == "verified"
    }
}
