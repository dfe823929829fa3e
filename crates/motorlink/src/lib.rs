//! Typed property access for motor controllers on a shared I2C bus.
//!
//! motorlink reads and writes named, typed properties exposed by up to
//! eight controllers on one bus, over a compact request/response
//! protocol. The embedding application supplies the bus driver; this
//! crate supplies the framing, marshaling and the generated endpoint
//! table.
//!
//! # Crate Structure
//!
//! - [`bus`] — Bus transaction boundary (trait, addressing, Linux I2C)
//! - [`wire`] — Little-endian marshaling and request framing
//! - [`endpoints`] — Generated identifier→type table and catalog
//! - [`client`] — Typed property read/write client
//! - [`sim`] — Simulated controller (behind `sim` feature)

/// Re-export bus types.
pub mod bus {
    pub use motorlink_bus::*;
}

/// Re-export wire types.
pub mod wire {
    pub use motorlink_wire::*;
}

/// Re-export the generated endpoint table.
pub mod endpoints {
    pub use motorlink_endpoints::*;
}

/// Re-export client types.
pub mod client {
    pub use motorlink_client::*;
}

/// Re-export the simulated controller (requires `sim` feature).
#[cfg(feature = "sim")]
pub mod sim {
    pub use motorlink_sim::*;
}

/// Create a client stamped with the generated protocol tag.
pub fn client_with_defaults<B: motorlink_bus::BusTransaction>(
    bus: B,
) -> motorlink_client::PropertyClient<B> {
    motorlink_client::PropertyClient::new(bus, motorlink_endpoints::PROTOCOL_TAG)
}
