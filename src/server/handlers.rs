//! HTTP handlers for the checkout flow
//!
//! One POST handler does the whole request: decode the form, validate the
//! token, price the order, charge it, render the outcome. Each step is a call
//! into a separately tested layer; this module only sequences them.

use axum::extract::{Form, State};
use axum::http::{Method, StatusCode};
use axum::response::{Html, IntoResponse, Response};
use std::sync::Arc;
use tracing::{error, info};

use crate::config::CheckoutConfig;
use crate::core::error::{ChargeError, ChargeResult};
use crate::core::order::{BasketType, OrderForm};
use crate::core::pricing::{parse_quantity, price, validate_payment_token};
use crate::payment::{ChargeRequest, PaymentProcessor};
use crate::server::render;

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<CheckoutConfig>,
    pub processor: Arc<dyn PaymentProcessor>,
}

impl AppState {
    pub fn new(config: CheckoutConfig, processor: impl PaymentProcessor + 'static) -> Self {
        Self {
            config: Arc::new(config),
            processor: Arc::new(processor),
        }
    }
}

/// `POST /charge` — price the submitted order and charge it
pub async fn charge_card(
    State(state): State<AppState>,
    Form(form): Form<OrderForm>,
) -> Response {
    match process_order(&state, &form).await {
        Ok(page) => (StatusCode::OK, Html(page)).into_response(),
        Err(err) => {
            error!(code = err.error_code(), "charge request failed: {err}");
            err.into_page(&state.config.form_url)
        }
    }
}

/// Fallback for any verb other than POST on the charge route.
///
/// Short-circuits before the pricing engine or the processor is touched.
pub async fn method_not_allowed(method: Method) -> ChargeError {
    ChargeError::MethodNotAllowed {
        method: method.to_string(),
    }
}

/// Validate → price → charge, returning the success page body
async fn process_order(state: &AppState, form: &OrderForm) -> ChargeResult<String> {
    validate_payment_token(&form.stripe_token)?;

    let basket: BasketType = form.basket_type.parse()?;
    let quantity = parse_quantity(&form.quantity);
    let amount = price(basket, quantity, Some(&form.promo_code));

    let request = ChargeRequest {
        amount,
        currency: state.config.currency.clone(),
        source_token: form.stripe_token.clone(),
        description: form.charge_description(basket, quantity),
        receipt_email: form.email.clone(),
    };
    let receipt = state.processor.charge(&request).await?;

    info!(
        charge_id = %receipt.charge_id,
        amount,
        basket = %basket,
        quantity,
        "charge succeeded"
    );

    Ok(render::success_page(
        &form.contact_name,
        amount,
        &receipt.card_last4,
        &form.email,
    ))
}
