//! Typed property access for motorlink controllers.
//!
//! This is the "just works" layer. Hand a [`PropertyClient`] a bus
//! implementation and read or write endpoints with their compile-time
//! types; each operation is exactly one blocking bus transaction.

pub mod client;
pub mod error;

pub use client::PropertyClient;
pub use error::{ClientError, Result};
