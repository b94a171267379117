use thiserror::Error;

#[derive(Debug, Error)]
pub enum SessionError {
    #[error("not logged in: run `avp auth login` first")]
    NotLoggedIn,

    #[error("session expired: run `avp auth login` again")]
    Expired,

    #[error("session store error: {0}")]
    StoreError(String),
}
