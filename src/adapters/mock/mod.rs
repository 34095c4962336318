//! Mock implementations for testing.
//!
//! This module provides mock implementations of the trait abstractions,
//! enabling unit testing without network dependencies or file system access.
//!
//! # Available Mocks
//!
//! - [`MockStoreApi`] - Storefront API with configurable responses and a call log
//! - [`InMemorySessionVault`] - In-memory session storage

pub mod session_vault;
pub mod store_api;

pub use session_vault::InMemorySessionVault;
pub use store_api::{ApiCall, MockStoreApi};
