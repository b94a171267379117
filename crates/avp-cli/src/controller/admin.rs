//! Admin panel controller.

use avp_api::{PaymentPatch, PortalBackend, ProjectPatch};
use avp_core::entities::{Payment, Project, User};
use avp_core::enums::ProjectStatus;
use avp_core::errors::CoreError;
use avp_core::responses::AdminOverview;
use chrono::{DateTime, Utc};

use super::Attachment;

/// Verifier label recorded on payment verifications.
const VERIFIER: &str = "admin";

/// State behind the admin view: every collection, unfiltered.
#[derive(Default)]
pub struct AdminPanel {
    pub users: Vec<User>,
    pub projects: Vec<Project>,
    pub payments: Vec<Payment>,
}

impl AdminPanel {
    /// Fetch all three collections and replace local state wholesale.
    ///
    /// A failing user listing degrades to an empty list instead of taking
    /// down the whole panel; projects and payments are required.
    ///
    /// # Errors
    ///
    /// Propagates gateway errors from the project and payment listings.
    pub async fn load<B: PortalBackend>(&mut self, api: &B) -> anyhow::Result<()> {
        let users = api.list_users().await.unwrap_or_else(|error| {
            tracing::warn!(%error, "user listing failed; continuing without it");
            Vec::new()
        });
        let projects = api.list_projects(None).await?;
        let payments = api.list_payments(None).await?;
        self.users = users;
        self.projects = projects;
        self.payments = payments;
        Ok(())
    }

    /// Mark a payment verified. The flag flips exactly once; verifying an
    /// already-verified payment is refused without a network call.
    ///
    /// # Errors
    ///
    /// Fails when the payment is unknown or already verified, and otherwise
    /// propagates gateway errors.
    pub async fn verify_payment<B: PortalBackend>(
        &mut self,
        api: &B,
        id: i64,
        now: DateTime<Utc>,
    ) -> anyhow::Result<()> {
        let payment = self
            .payments
            .iter()
            .find(|p| p.id == id)
            .ok_or(CoreError::NotFound {
                entity_type: "payment",
                id,
            })?;
        if payment.verified {
            return Err(CoreError::Validation(format!("payment {id} is already verified")).into());
        }

        api.patch_payment(id, &PaymentPatch::verification(VERIFIER, now))
            .await?;
        self.load(api).await
    }

    /// Move a project to a newly selected status.
    ///
    /// Sends exactly the requested status; remarks are untouched (editing
    /// them is a separate operation).
    ///
    /// # Errors
    ///
    /// Fails when the project is unknown or the transition is not allowed,
    /// and otherwise propagates gateway errors.
    pub async fn update_status<B: PortalBackend>(
        &mut self,
        api: &B,
        id: i64,
        status: ProjectStatus,
    ) -> anyhow::Result<()> {
        let project = self
            .projects
            .iter()
            .find(|p| p.id == id)
            .ok_or(CoreError::NotFound {
                entity_type: "project",
                id,
            })?;
        if !project.status.can_transition_to(status) {
            return Err(CoreError::InvalidTransition {
                entity_type: "project",
                id,
                from: project.status.to_string(),
                to: status.to_string(),
            }
            .into());
        }

        api.patch_project(id, &ProjectPatch::with_status(status))
            .await?;
        self.load(api).await
    }

    /// Set the admin remark on a project.
    ///
    /// # Errors
    ///
    /// Fails when the project is unknown, and otherwise propagates gateway
    /// errors.
    pub async fn set_remark<B: PortalBackend>(
        &mut self,
        api: &B,
        id: i64,
        remark: &str,
    ) -> anyhow::Result<()> {
        if !self.projects.iter().any(|p| p.id == id) {
            return Err(CoreError::NotFound {
                entity_type: "project",
                id,
            }
            .into());
        }

        api.patch_project(id, &ProjectPatch::with_remarks(remark))
            .await?;
        self.load(api).await
    }

    /// Upload a deliverable and append its URL to a project's deliverables.
    ///
    /// The project is re-fetched right before the read-modify-write so the
    /// reconstructed list is as fresh as this client can make it; every
    /// previously recorded reference is preserved.
    ///
    /// # Errors
    ///
    /// Fails when the project is unknown, and otherwise propagates gateway
    /// errors.
    pub async fn attach_deliverable<B: PortalBackend>(
        &mut self,
        api: &B,
        project_id: i64,
        attachment: Attachment,
    ) -> anyhow::Result<()> {
        if !self.projects.iter().any(|p| p.id == project_id) {
            return Err(CoreError::NotFound {
                entity_type: "project",
                id: project_id,
            }
            .into());
        }

        let url = api.upload(&attachment.file_name, attachment.bytes).await?.url;

        // Fresh read shrinks the window in which a concurrent append could
        // be lost; a true atomic append needs the server.
        let current = api.list_projects(None).await?;
        let project = current
            .iter()
            .find(|p| p.id == project_id)
            .ok_or(CoreError::NotFound {
                entity_type: "project",
                id: project_id,
            })?;

        let mut deliverables = project.deliverables.clone();
        deliverables.push(url);
        api.patch_project(project_id, &ProjectPatch::with_deliverables(deliverables))
            .await?;
        self.load(api).await
    }

    /// Snapshot the current state for rendering.
    #[must_use]
    pub fn view(&self) -> AdminOverview {
        AdminOverview {
            users: self.users.clone(),
            projects: self.projects.clone(),
            payments: self.payments.clone(),
        }
    }
}
