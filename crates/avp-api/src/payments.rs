//! Payment resource: listing, creation, and verification.

use avp_core::entities::Payment;
use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::{PortalClient, error::ApiError, http::check_response};

/// Body for `POST /api/payments`.
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct NewPayment {
    pub student_id: i64,
    pub amount: f64,
    #[serde(skip_serializing_if = "Option::is_none", rename = "paymentProofURL")]
    pub payment_proof_url: Option<String>,
}

/// Body for `PATCH /api/payments/:id`.
///
/// The only constructor is [`PaymentPatch::verification`], which always sets
/// `verified: true`. The flag is monotonic: this client has no way to send
/// `verified: false`.
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PaymentPatch {
    verified: bool,
    verified_by: String,
    verified_date: DateTime<Utc>,
}

impl PaymentPatch {
    /// Verification patch: `verified: true` with the verifier label and
    /// timestamp.
    #[must_use]
    pub fn verification(verified_by: impl Into<String>, at: DateTime<Utc>) -> Self {
        Self {
            verified: true,
            verified_by: verified_by.into(),
            verified_date: at,
        }
    }
}

impl PortalClient {
    /// Fetch payments via `GET /api/payments`, optionally filtered to one
    /// student. No filter is the admin path.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] if the request fails or the response cannot be
    /// parsed.
    pub async fn list_payments(&self, student_id: Option<i64>) -> Result<Vec<Payment>, ApiError> {
        let url = match student_id {
            Some(id) => self.endpoint(&format!("/api/payments?studentId={id}")),
            None => self.endpoint("/api/payments"),
        };
        let resp = check_response(self.http().get(url).send().await?).await?;
        Ok(resp.json().await?)
    }

    /// Record a manual payment via `POST /api/payments`.
    ///
    /// Sends an `Idempotency-Key` header so a double submission cannot
    /// create duplicate records.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] if the request fails or the server rejects it.
    pub async fn create_payment(&self, request: &NewPayment) -> Result<(), ApiError> {
        let resp = self
            .http()
            .post(self.endpoint("/api/payments"))
            .header("Idempotency-Key", Self::idempotency_key())
            .json(request)
            .send()
            .await?;
        check_response(resp).await?;
        Ok(())
    }

    /// Mark a payment verified via `PATCH /api/payments/:id`.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] if the request fails or the server rejects it.
    pub async fn patch_payment(&self, id: i64, patch: &PaymentPatch) -> Result<(), ApiError> {
        let resp = self
            .http()
            .patch(self.endpoint(&format!("/api/payments/{id}")))
            .json(patch)
            .send()
            .await?;
        check_response(resp).await?;
        Ok(())
    }
}
