use clap::{Args, Subcommand};

/// Account and session commands.
#[derive(Clone, Debug, Subcommand)]
pub enum AuthCommands {
    /// Create an account and log in.
    Register(AuthRegisterArgs),
    /// Log in with a registered email.
    Login(AuthLoginArgs),
    /// Clear the stored session.
    Logout,
    /// Show who is logged in and when the session expires.
    Status,
}

/// Arguments for `avp auth register`.
#[derive(Clone, Debug, Args)]
pub struct AuthRegisterArgs {
    /// Full name.
    #[arg(long)]
    pub name: String,
    /// Email address.
    #[arg(long)]
    pub email: String,
}

/// Arguments for `avp auth login`.
#[derive(Clone, Debug, Args)]
pub struct AuthLoginArgs {
    /// Email address used at registration.
    #[arg(long)]
    pub email: String,
}
