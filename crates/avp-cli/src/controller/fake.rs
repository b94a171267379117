//! In-memory portal backend for controller tests.
//!
//! Records every call in order and applies patches from their serialized
//! JSON bodies, so assertions see exactly what would have gone over the
//! wire.

use std::sync::Mutex;

use avp_api::{ApiError, FileRef, NewPayment, NewProject, PaymentPatch, PortalBackend, ProjectPatch};
use avp_core::entities::{Payment, Project, User};
use avp_core::enums::ProjectStatus;

#[derive(Default, Clone)]
pub struct FakeState {
    pub calls: Vec<String>,
    pub users: Vec<User>,
    pub projects: Vec<Project>,
    pub payments: Vec<Payment>,
    pub project_patches: Vec<serde_json::Value>,
    pub next_id: i64,
    pub fail_users: bool,
}

#[derive(Default)]
pub struct FakePortal {
    state: Mutex<FakeState>,
}

impl FakePortal {
    pub fn calls(&self) -> Vec<String> {
        self.state.lock().expect("state lock").calls.clone()
    }

    pub fn calls_of(&self, name: &str) -> usize {
        self.calls().iter().filter(|c| c.starts_with(name)).count()
    }

    pub fn snapshot(&self) -> FakeState {
        self.state.lock().expect("state lock").clone()
    }

    pub fn last_project_patch(&self) -> Option<serde_json::Value> {
        self.state
            .lock()
            .expect("state lock")
            .project_patches
            .last()
            .cloned()
    }

    pub fn seed_project(&self, id: i64, student_id: i64, status: ProjectStatus) {
        self.state.lock().expect("state lock").projects.push(Project {
            id,
            student_id,
            title: format!("project-{id}"),
            technology: avp_core::enums::Technology::Web,
            description: String::new(),
            file_url: None,
            status,
            payment_status: "pending".into(),
            deliverables: Vec::new(),
            admin_remarks: None,
        });
    }

    pub fn seed_payment(&self, id: i64, student_id: i64, amount: f64, verified: bool) {
        self.state.lock().expect("state lock").payments.push(Payment {
            id,
            student_id,
            amount,
            payment_proof_url: None,
            verified,
            verified_by: verified.then(|| "admin".to_string()),
            verified_date: None,
        });
    }

    pub fn set_project_remark(&self, id: i64, text: &str) {
        let mut state = self.state.lock().expect("state lock");
        if let Some(project) = state.projects.iter_mut().find(|p| p.id == id) {
            project.admin_remarks = Some(text.to_string());
        }
    }

    pub fn push_deliverable(&self, id: i64, url: &str) {
        let mut state = self.state.lock().expect("state lock");
        if let Some(project) = state.projects.iter_mut().find(|p| p.id == id) {
            project.deliverables.push(url.to_string());
        }
    }

    pub fn clear_projects(&self) {
        self.state.lock().expect("state lock").projects.clear();
    }

    pub fn fail_user_listing(&self) {
        self.state.lock().expect("state lock").fail_users = true;
    }

    fn record(&self, call: impl Into<String>) {
        self.state.lock().expect("state lock").calls.push(call.into());
    }

    fn allocate_id(&self) -> i64 {
        let mut state = self.state.lock().expect("state lock");
        state.next_id += 1;
        state.next_id
    }
}

fn rejection(status: u16, message: &str) -> ApiError {
    ApiError::Api {
        status,
        message: message.to_string(),
    }
}

impl PortalBackend for FakePortal {
    async fn register(&self, name: &str, email: &str) -> Result<User, ApiError> {
        self.record("register");
        let user = User {
            id: self.allocate_id(),
            name: name.to_string(),
            email: email.to_string(),
        };
        self.state.lock().expect("state lock").users.push(user.clone());
        Ok(user)
    }

    async fn login(&self, email: &str) -> Result<User, ApiError> {
        self.record("login");
        self.state
            .lock()
            .expect("state lock")
            .users
            .iter()
            .find(|u| u.email == email)
            .cloned()
            .ok_or_else(|| rejection(404, "unknown email"))
    }

    async fn list_users(&self) -> Result<Vec<User>, ApiError> {
        self.record("list_users");
        let state = self.state.lock().expect("state lock");
        if state.fail_users {
            return Err(rejection(500, "user listing unavailable"));
        }
        Ok(state.users.clone())
    }

    async fn list_projects(&self, student_id: Option<i64>) -> Result<Vec<Project>, ApiError> {
        self.record("list_projects");
        let state = self.state.lock().expect("state lock");
        Ok(state
            .projects
            .iter()
            .filter(|p| student_id.is_none_or(|id| p.student_id == id))
            .cloned()
            .collect())
    }

    async fn create_project(&self, request: &NewProject) -> Result<(), ApiError> {
        self.record("create_project");
        let id = self.allocate_id();
        self.state.lock().expect("state lock").projects.push(Project {
            id,
            student_id: request.student_id,
            title: request.title.clone(),
            technology: request.technology,
            description: request.description.clone(),
            file_url: request.file_url.clone(),
            status: ProjectStatus::Requested,
            payment_status: "pending".into(),
            deliverables: Vec::new(),
            admin_remarks: None,
        });
        Ok(())
    }

    async fn patch_project(&self, id: i64, patch: &ProjectPatch) -> Result<(), ApiError> {
        self.record("patch_project");
        let body = serde_json::to_value(patch).expect("patch serializes");

        let mut state = self.state.lock().expect("state lock");
        state.project_patches.push(body.clone());
        let project = state
            .projects
            .iter_mut()
            .find(|p| p.id == id)
            .ok_or_else(|| rejection(404, "unknown project"))?;

        if let Some(status) = body.get("status") {
            project.status =
                serde_json::from_value(status.clone()).expect("status value is valid");
        }
        if let Some(remarks) = body.get("adminRemarks") {
            project.admin_remarks = Some(remarks.as_str().unwrap_or_default().to_string());
        }
        if let Some(deliverables) = body.get("deliverables") {
            project.deliverables =
                serde_json::from_value(deliverables.clone()).expect("deliverables are strings");
        }
        Ok(())
    }

    async fn list_payments(&self, student_id: Option<i64>) -> Result<Vec<Payment>, ApiError> {
        self.record("list_payments");
        let state = self.state.lock().expect("state lock");
        Ok(state
            .payments
            .iter()
            .filter(|p| student_id.is_none_or(|id| p.student_id == id))
            .cloned()
            .collect())
    }

    async fn create_payment(&self, request: &NewPayment) -> Result<(), ApiError> {
        self.record("create_payment");
        let id = self.allocate_id();
        self.state.lock().expect("state lock").payments.push(Payment {
            id,
            student_id: request.student_id,
            amount: request.amount,
            payment_proof_url: request.payment_proof_url.clone(),
            verified: false,
            verified_by: None,
            verified_date: None,
        });
        Ok(())
    }

    async fn patch_payment(&self, id: i64, patch: &PaymentPatch) -> Result<(), ApiError> {
        self.record("patch_payment");
        let body = serde_json::to_value(patch).expect("patch serializes");

        let mut state = self.state.lock().expect("state lock");
        let payment = state
            .payments
            .iter_mut()
            .find(|p| p.id == id)
            .ok_or_else(|| rejection(404, "unknown payment"))?;

        payment.verified = body["verified"].as_bool().unwrap_or(payment.verified);
        payment.verified_by = body
            .get("verifiedBy")
            .and_then(|v| v.as_str())
            .map(ToString::to_string);
        payment.verified_date = body
            .get("verifiedDate")
            .cloned()
            .and_then(|v| serde_json::from_value(v).ok());
        Ok(())
    }

    async fn upload(&self, file_name: &str, _bytes: Vec<u8>) -> Result<FileRef, ApiError> {
        self.record(format!("upload:{file_name}"));
        Ok(FileRef {
            url: format!("http://files.test/{file_name}"),
        })
    }
}
