use serde::{Deserialize, Serialize};

/// A registered student account.
///
/// Created once via `/api/register` and looked up by email on login; the
/// client never mutates or deletes it.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct User {
    pub id: i64,
    pub name: String,
    pub email: String,
}
