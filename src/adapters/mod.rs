//! Concrete implementations of trait abstractions.
//!
//! This module provides production-ready adapters that wrap existing code
//! and implement the traits defined in `crate::traits`. These adapters enable
//! dependency injection and testability while maintaining the same functionality.
//!
//! # Adapters
//!
//! - [`FileSessionVault`] - File-based session storage
//!
//! # Mock Implementations
//!
//! The [`mock`] submodule provides test doubles:
//! - [`mock::MockStoreApi`] - Storefront API with configurable responses
//! - [`mock::InMemorySessionVault`] - In-memory session storage

pub mod file_session;
pub mod mock;

pub use file_session::FileSessionVault;
pub use mock::{ApiCall, InMemorySessionVault, MockStoreApi};
