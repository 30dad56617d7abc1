//! # Basket Checkout
//!
//! A small checkout service for fruit basket orders. It accepts a URL-encoded
//! order form, prices it (fixed tier table, quantity, optional promo code),
//! submits a one-time charge to a payment processor, and answers with an HTML
//! fragment describing the outcome.
//!
//! ## Architecture
//!
//! - **Validation & Pricing** ([`core`]): pure, synchronous business rules —
//!   basket tiers, quantity parsing, promo handling, token presence.
//! - **Payment** ([`payment`]): the one external collaborator, behind the
//!   [`payment::PaymentProcessor`] trait so tests can swap in a double.
//! - **Server** ([`server`]): the axum shell that decodes the form, drives
//!   the core, and renders one of two HTML templates.
//!
//! The processor secret is injected through [`config::CheckoutConfig`] by the
//! caller at construction time; nothing in the library reads ambient process
//! state.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use basket_checkout::prelude::*;
//!
//! let config = CheckoutConfig::new("sk_test_...");
//! let processor = StripeProcessor::new(&config);
//! let app = build_router(AppState::new(config, processor));
//!
//! let listener = tokio::net::TcpListener::bind("0.0.0.0:8080").await?;
//! axum::serve(listener, app).await?;
//! ```

pub mod config;
pub mod core;
pub mod payment;
pub mod server;

/// Re-exports of commonly used types and traits
pub mod prelude {
    // === Core ===
    pub use crate::core::{
        error::{ChargeError, ChargeResult},
        order::{BasketType, OrderForm},
        pricing::{compute_amount, parse_quantity, price, validate_payment_token, PROMO_CODE},
    };

    // === Config ===
    pub use crate::config::CheckoutConfig;

    // === Payment ===
    pub use crate::payment::{
        stripe::StripeProcessor, ChargeReceipt, ChargeRequest, PaymentProcessor, ProcessorError,
    };

    // === Server ===
    pub use crate::server::{build_router, AppState};

    // === External dependencies ===
    pub use anyhow::Result;
    pub use async_trait::async_trait;
}
