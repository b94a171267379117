use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A manual payment recorded by a student, awaiting admin verification.
///
/// The `verified` flag flips exactly once (false to true); no operation in
/// this client can reverse it.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Payment {
    pub id: i64,
    pub student_id: i64,
    pub amount: f64,
    /// Uploaded proof (screenshot, transaction record), if any.
    #[serde(default, rename = "paymentProofURL")]
    pub payment_proof_url: Option<String>,
    #[serde(default)]
    pub verified: bool,
    #[serde(default)]
    pub verified_by: Option<String>,
    #[serde(default)]
    pub verified_date: Option<DateTime<Utc>>,
}
