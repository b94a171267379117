use clap::Subcommand;

use crate::cli::subcommands::{AdminCommands, AuthCommands, PaymentCommands, ProjectCommands};

/// Top-level command tree.
#[derive(Clone, Debug, Subcommand)]
pub enum Commands {
    /// Account and session management.
    Auth {
        #[command(subcommand)]
        action: AuthCommands,
    },
    /// Student view: your projects and payments in one screen.
    Dashboard,
    /// Project requests.
    Project {
        #[command(subcommand)]
        action: ProjectCommands,
    },
    /// Manual payments and proofs.
    Payment {
        #[command(subcommand)]
        action: PaymentCommands,
    },
    /// Admin panel: verification, status updates, deliverables.
    Admin {
        #[command(subcommand)]
        action: AdminCommands,
    },
    /// About A&V TechSolutions: services, technologies, contact.
    Info,
}
