//! Entity structs for the portal domain objects.
//!
//! All records are owned by the external server; the client holds transient
//! copies that are discarded and re-fetched after every mutation. Field names
//! follow the server's JSON wire format (camelCase, `paymentProofURL`).

mod payment;
mod project;
mod session;
mod user;

pub use payment::Payment;
pub use project::Project;
pub use session::StoredSession;
pub use user::User;
