//! MROSC console service library crate.
//!
//! # Purpose
//! Exposes the console API surface, session extraction, configuration and
//! record storage for use by the binary and tests.
pub mod api;
pub mod app;
pub mod config;
pub mod observability;
pub mod session;
pub mod store;

#[cfg(test)]
mod test_env;
