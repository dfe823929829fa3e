//! In-process simulated motorlink controller.
//!
//! [`SimulatedController`] implements the bus boundary from the device
//! side: it parses request frames, enforces address and protocol-tag
//! matching, and serves a kind-checked property store. Integration
//! tests and the CLI's `--sim` mode drive the real client and framing
//! code against it without hardware.

pub mod controller;

pub use controller::SimulatedController;
