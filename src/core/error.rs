//! Typed error handling for the checkout flow
//!
//! Every way a charge request can terminate without a successful payment is a
//! variant of [`ChargeError`]. All four are terminal for the current request:
//! nothing is retried internally.
//!
//! [`ChargeError::MethodNotAllowed`] and [`ChargeError::MissingToken`]
//! short-circuit before any external call is made and render as plain-text
//! rejections. [`ChargeError::InvalidBasketType`] and
//! [`ChargeError::Processor`] surface after the pricing or payment step and
//! render as the failure HTML page with the error message embedded verbatim.

use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};
use std::fmt;

use crate::payment::ProcessorError;
use crate::server::render;

/// The error type for a single charge request
#[derive(Debug)]
pub enum ChargeError {
    /// The request used an HTTP verb other than POST
    MethodNotAllowed { method: String },

    /// No payment token was supplied with the form
    MissingToken,

    /// The basket selection is not one of the known tiers
    InvalidBasketType { value: String },

    /// The external payment call failed; the message comes from the processor
    Processor(ProcessorError),
}

impl fmt::Display for ChargeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ChargeError::MethodNotAllowed { method } => {
                write!(f, "Method {} not allowed", method)
            }
            ChargeError::MissingToken => {
                write!(f, "Missing Stripe token. Please try again.")
            }
            ChargeError::InvalidBasketType { value } => {
                write!(f, "Invalid basket type '{}'", value)
            }
            ChargeError::Processor(e) => write!(f, "{}", e),
        }
    }
}

impl std::error::Error for ChargeError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ChargeError::Processor(e) => Some(e),
            _ => None,
        }
    }
}

impl ChargeError {
    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            ChargeError::MethodNotAllowed { .. } => StatusCode::METHOD_NOT_ALLOWED,
            ChargeError::MissingToken => StatusCode::BAD_REQUEST,
            ChargeError::InvalidBasketType { .. } => StatusCode::INTERNAL_SERVER_ERROR,
            ChargeError::Processor(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Get the error code for this error
    pub fn error_code(&self) -> &'static str {
        match self {
            ChargeError::MethodNotAllowed { .. } => "METHOD_NOT_ALLOWED",
            ChargeError::MissingToken => "MISSING_TOKEN",
            ChargeError::InvalidBasketType { .. } => "INVALID_BASKET_TYPE",
            ChargeError::Processor(_) => "PROCESSOR_ERROR",
        }
    }

    /// True when the error is raised before the payment collaborator is called
    pub fn short_circuits(&self) -> bool {
        matches!(
            self,
            ChargeError::MethodNotAllowed { .. } | ChargeError::MissingToken
        )
    }

    /// Render this error as the response for the current request.
    ///
    /// `form_url` is where the failure page links back to; short-circuit
    /// errors render as plain text and ignore it.
    pub fn into_page(self, form_url: &str) -> Response {
        let status = self.status_code();
        match self {
            ChargeError::MethodNotAllowed { .. } => {
                (status, "Method Not Allowed").into_response()
            }
            ChargeError::MissingToken => (status, self.to_string()).into_response(),
            ChargeError::InvalidBasketType { .. } | ChargeError::Processor(_) => {
                let body = render::failure_page(&self.to_string(), form_url);
                (status, Html(body)).into_response()
            }
        }
    }
}

impl IntoResponse for ChargeError {
    /// Renders with the default form link; handlers that know the configured
    /// form URL call [`ChargeError::into_page`] directly.
    fn into_response(self) -> Response {
        self.into_page("/")
    }
}

impl From<ProcessorError> for ChargeError {
    fn from(err: ProcessorError) -> Self {
        ChargeError::Processor(err)
    }
}

/// A specialized Result type for checkout operations
pub type ChargeResult<T> = Result<T, ChargeError>;
