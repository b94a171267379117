//! Student dashboard controller.

use avp_api::{NewPayment, NewProject, PortalBackend};
use avp_core::entities::{Payment, Project, User};
use avp_core::enums::Technology;
use avp_core::errors::CoreError;
use avp_core::responses::DashboardView;

use super::Attachment;

/// Fields of the project request form.
#[derive(Debug, Clone)]
pub struct ProjectForm {
    pub title: String,
    pub technology: Technology,
    pub description: String,
}

/// State behind the student view: the signed-in student plus their fetched
/// collections.
pub struct Dashboard {
    student: User,
    pub projects: Vec<Project>,
    pub payments: Vec<Payment>,
}

impl Dashboard {
    #[must_use]
    pub fn new(student: User) -> Self {
        Self {
            student,
            projects: Vec::new(),
            payments: Vec::new(),
        }
    }

    /// Fetch both collections for this student and replace local state
    /// wholesale. Nothing is merged; the server's answer is the state.
    ///
    /// # Errors
    ///
    /// Returns the gateway error unchanged; local state keeps its previous
    /// (stale) contents in that case.
    pub async fn load<B: PortalBackend>(&mut self, api: &B) -> anyhow::Result<()> {
        let projects = api.list_projects(Some(self.student.id)).await?;
        let payments = api.list_payments(Some(self.student.id)).await?;
        self.projects = projects;
        self.payments = payments;
        Ok(())
    }

    /// Submit a project request.
    ///
    /// The optional reference file is uploaded first; its returned URL is
    /// threaded into the create call. Afterwards both collections are
    /// reloaded exactly once.
    ///
    /// # Errors
    ///
    /// Fails on empty titles before any network call, and otherwise
    /// propagates gateway errors.
    pub async fn submit_project<B: PortalBackend>(
        &mut self,
        api: &B,
        form: ProjectForm,
        attachment: Option<Attachment>,
    ) -> anyhow::Result<()> {
        if form.title.trim().is_empty() {
            return Err(CoreError::Validation("project title must not be empty".into()).into());
        }

        let file_url = match attachment {
            Some(file) => Some(api.upload(&file.file_name, file.bytes).await?.url),
            None => None,
        };

        api.create_project(&NewProject {
            student_id: self.student.id,
            title: form.title,
            technology: form.technology,
            description: form.description,
            file_url,
        })
        .await?;

        self.load(api).await
    }

    /// Record a manual payment, optionally uploading proof first.
    ///
    /// # Errors
    ///
    /// Rejects negative or non-finite amounts before any network call, and
    /// otherwise propagates gateway errors.
    pub async fn make_payment<B: PortalBackend>(
        &mut self,
        api: &B,
        amount: f64,
        proof: Option<Attachment>,
    ) -> anyhow::Result<()> {
        if !amount.is_finite() || amount < 0.0 {
            return Err(
                CoreError::Validation(format!("amount must be a non-negative number, got {amount}"))
                    .into(),
            );
        }

        let payment_proof_url = match proof {
            Some(file) => Some(api.upload(&file.file_name, file.bytes).await?.url),
            None => None,
        };

        api.create_payment(&NewPayment {
            student_id: self.student.id,
            amount,
            payment_proof_url,
        })
        .await?;

        self.load(api).await
    }

    /// Snapshot the current state for rendering.
    #[must_use]
    pub fn view(&self) -> DashboardView {
        DashboardView {
            student: self.student.clone(),
            projects: self.projects.clone(),
            payments: self.payments.clone(),
        }
    }
}
