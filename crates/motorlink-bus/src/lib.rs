//! Bus transaction boundary for motorlink.
//!
//! The protocol core never touches hardware. It talks to a
//! [`BusTransaction`] implementation supplied by the embedding
//! application: one blocking call per full request/response exchange.
//! This crate defines that seam, the device addressing scheme, and a
//! concrete Linux `/dev/i2c-*` adapter.

pub mod addr;
pub mod error;
pub mod traits;

#[cfg(target_os = "linux")]
pub mod linux;

pub use addr::{DeviceSelector, BASE_ADDRESS, MAX_DEVICES};
pub use error::{BusOpenError, Result, SelectorError, TransactionError};
pub use traits::BusTransaction;

#[cfg(target_os = "linux")]
pub use linux::LinuxI2cBus;
