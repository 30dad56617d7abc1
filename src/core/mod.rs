//! Business core: request errors, the order value object, and pricing
//!
//! Everything in here is pure and synchronous. The HTTP shell in
//! [`crate::server`] decodes requests into these types and the payment layer
//! in [`crate::payment`] consumes the amounts they produce.

pub mod error;
pub mod order;
pub mod pricing;

pub use error::{ChargeError, ChargeResult};
pub use order::{BasketType, OrderForm};
