mod admin;
mod auth;
mod payment;
mod project;

pub use admin::AdminCommands;
pub use auth::{AuthCommands, AuthLoginArgs, AuthRegisterArgs};
pub use payment::PaymentCommands;
pub use project::ProjectCommands;
