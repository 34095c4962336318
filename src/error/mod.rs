//! Unified error handling architecture for Vastra.
//!
//! This module provides:
//!
//! - **Error Categories**: High-level classification for handling decisions
//! - **Unified Error Type**: `VastraError` consolidates the domain error types
//!
//! # Example
//!
//! ```ignore
//! use vastra::error::VastraError;
//!
//! match api.send_otp(&identifier).await {
//!     Ok(()) => {}
//!     Err(e) => {
//!         let err = VastraError::from(e);
//!         eprintln!("Error: {}", err.user_message());
//!         if err.is_retryable() {
//!             eprintln!("Hint: {}", err.recovery_hint());
//!         }
//!     }
//! }
//! ```
//!
//! # Error Categories
//!
//! Errors are categorized to enable consistent handling:
//!
//! | Category | Description | Retryable |
//! |----------|-------------|-----------|
//! | Network | Connection, DNS, timeout | Yes |
//! | Auth | Bad credentials, expired session | No |
//! | Server | Backend errors (5xx) | Yes |
//! | User | User action required | No |
//! | System | OS/filesystem errors | No |

mod category;
mod vastra_error;

pub use category::ErrorCategory;
pub use vastra_error::VastraError;
