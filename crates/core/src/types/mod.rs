//! Core types for Coffee Delivery.
//!
//! This module provides type-safe wrappers for common domain concepts.

pub mod id;
pub mod money;
pub mod payment;

pub use id::*;
pub use money::{CurrencyCode, Money};
pub use payment::{ParsePaymentMethodError, PaymentMethod};
