//! Vastra TUI - A terminal client for the Vastra Villa storefront
//!
//! This library exposes modules for use in integration tests.

pub mod adapters;
pub mod app;
pub mod auth;
pub mod config;
pub mod error;
pub mod traits;
pub mod ui;
