//! Generated endpoint table for motorlink controllers.
//!
//! The identifier→type bindings here mirror the property set of the
//! currently flashed firmware. They are produced from the controller's
//! interface definition, not written by hand: after flashing new
//! firmware, regenerate `endpoints.rs` and re-run the test suite, since
//! the bindings are assumed fixed at compile time.
//!
//! [`PROTOCOL_TAG`] travels in every request and must match the value
//! baked into the firmware; a stale tag makes the device reject every
//! request, observed by callers as ordinary transaction failures.

pub mod catalog;
pub mod endpoints;

pub use catalog::{find, get, Access, EndpointInfo};
pub use endpoints::{CATALOG, PROTOCOL_TAG};
