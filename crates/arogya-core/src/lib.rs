//! Core types and trait definitions for the Arogya appointment service.
//!
//! This crate is deliberately free of HTTP and database dependencies.
//! All other crates depend on it; it depends on nothing proprietary.

pub mod appointment;
pub mod error;
pub mod notify;
pub mod response;
pub mod store;
pub mod validate;

pub use error::{Error, Result};
