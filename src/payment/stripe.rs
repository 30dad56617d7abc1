//! Stripe implementation of the payment processor
//!
//! A single form-encoded POST to the charges endpoint per request. The
//! secret key and API base come from [`CheckoutConfig`]; pointing `api_base`
//! at a local stub is how the integration tests exercise this client without
//! the network.

use async_trait::async_trait;
use serde::Deserialize;

use super::{ChargeReceipt, ChargeRequest, PaymentProcessor, ProcessorError};
use crate::config::CheckoutConfig;

/// Charges client backed by the Stripe HTTP API
pub struct StripeProcessor {
    client: reqwest::Client,
    secret_key: String,
    api_base: String,
}

impl StripeProcessor {
    pub fn new(config: &CheckoutConfig) -> Self {
        Self {
            client: reqwest::Client::new(),
            secret_key: config.secret_key.clone(),
            api_base: config.api_base.trim_end_matches('/').to_string(),
        }
    }

    fn charges_url(&self) -> String {
        format!("{}/v1/charges", self.api_base)
    }
}

#[async_trait]
impl PaymentProcessor for StripeProcessor {
    async fn charge(&self, request: &ChargeRequest) -> Result<ChargeReceipt, ProcessorError> {
        let params = [
            ("amount", request.amount.to_string()),
            ("currency", request.currency.clone()),
            ("source", request.source_token.clone()),
            ("description", request.description.clone()),
            ("receipt_email", request.receipt_email.clone()),
        ];

        let response = self
            .client
            .post(self.charges_url())
            .bearer_auth(&self.secret_key)
            .form(&params)
            .send()
            .await?;

        if response.status().is_success() {
            let charge: ChargeObject = response
                .json()
                .await
                .map_err(|e| ProcessorError::Malformed(e.to_string()))?;
            let card_last4 = charge
                .payment_method_details
                .and_then(|d| d.card)
                .map(|c| c.last4)
                .ok_or_else(|| {
                    ProcessorError::Malformed("charge response missing card details".to_string())
                })?;
            Ok(ChargeReceipt {
                charge_id: charge.id,
                card_last4,
            })
        } else {
            let status = response.status();
            let body: ApiErrorBody = response
                .json()
                .await
                .map_err(|e| ProcessorError::Malformed(e.to_string()))?;
            let message = body
                .error
                .message
                .unwrap_or_else(|| format!("charge request failed with status {status}"));
            Err(ProcessorError::Declined { message })
        }
    }
}

// Just the slices of the Stripe wire format this client reads.

#[derive(Debug, Deserialize)]
struct ChargeObject {
    id: String,
    payment_method_details: Option<PaymentMethodDetails>,
}

#[derive(Debug, Deserialize)]
struct PaymentMethodDetails {
    card: Option<CardDetails>,
}

#[derive(Debug, Deserialize)]
struct CardDetails {
    last4: String,
}

#[derive(Debug, Deserialize)]
struct ApiErrorBody {
    error: ApiError,
}

#[derive(Debug, Deserialize)]
struct ApiError {
    message: Option<String>,
}
