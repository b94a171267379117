use clap::Subcommand;

/// Admin panel commands.
///
/// The client exposes these openly; gating who may call them is the
/// server's job.
#[derive(Clone, Debug, Subcommand)]
pub enum AdminCommands {
    /// Every user, project, and payment, unfiltered.
    Overview,
    /// Mark a payment verified. Irreversible.
    VerifyPayment {
        /// Payment id.
        id: i64,
    },
    /// Move a project to a new status.
    SetStatus {
        /// Project id.
        id: i64,
        /// New status: requested, in-review, in-development, completed.
        status: String,
    },
    /// Set the admin remark on a project.
    Remark {
        /// Project id.
        id: i64,
        /// Remark text shown to the student.
        #[arg(long)]
        text: String,
    },
    /// Upload a deliverable and attach it to a project.
    Attach {
        /// Project id.
        project_id: i64,
        /// File to upload.
        #[arg(long)]
        file: String,
    },
}
