//! Trait abstractions for dependency injection and testability.
//!
//! This module provides trait-based abstractions for core functionality,
//! enabling dependency injection, mocking, and better testability.
//!
//! # Traits
//!
//! - [`StoreApi`] - Storefront auth endpoints (OTP, register, login)
//! - [`SessionVault`] - Session record storage and retrieval

pub mod session_vault;
pub mod store_api;

pub use session_vault::{SessionVault, SessionVaultError};
pub use store_api::StoreApi;
