//! Payment processing behind a trait seam
//!
//! The service's only external collaborator. [`PaymentProcessor`] is the
//! interface the checkout handler talks to; [`stripe::StripeProcessor`] is
//! the production implementation and tests substitute their own double.

pub mod stripe;

use async_trait::async_trait;
use thiserror::Error;

/// A one-time charge to submit to the processor.
///
/// Amounts are integers in minor currency units; the source token is the
/// opaque single-use identifier supplied by the client, forwarded unmodified.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChargeRequest {
    pub amount: u64,
    pub currency: String,
    pub source_token: String,
    pub description: String,
    pub receipt_email: String,
}

/// What the processor reports back for a successful charge
#[derive(Debug, Clone)]
pub struct ChargeReceipt {
    /// Processor-side identifier for the charge
    pub charge_id: String,
    /// Last four digits of the card that was charged
    pub card_last4: String,
}

/// Errors from the payment collaborator
#[derive(Debug, Error)]
pub enum ProcessorError {
    /// The processor rejected the charge; message passed through verbatim
    #[error("{message}")]
    Declined { message: String },

    /// The outbound request itself failed
    #[error("payment request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// The processor answered with something we could not interpret
    #[error("unexpected processor response: {0}")]
    Malformed(String),
}

/// Interface to the external payment processor.
///
/// One call per request, awaited before a response is produced. No retries,
/// no deduplication of resubmitted charges.
#[async_trait]
pub trait PaymentProcessor: Send + Sync {
    async fn charge(&self, request: &ChargeRequest) -> Result<ChargeReceipt, ProcessorError>;
}
