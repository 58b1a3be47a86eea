//! Infrastructure layer.
//!
//! Configuration loading, logging setup and runtime wiring. No business logic.
//!
//! - [`bootstrap`] - Composition root for runtime wiring
//! - [`config`] - Configuration loading and validation

pub mod bootstrap;
pub mod config;
