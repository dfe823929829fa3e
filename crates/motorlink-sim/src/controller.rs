use std::collections::HashMap;

use bytes::BytesMut;
use tracing::debug;

use motorlink_bus::{BusTransaction, DeviceSelector, Result, TransactionError};
use motorlink_endpoints::endpoints::{SerialNumber, VbusVoltage};
use motorlink_endpoints::{CATALOG, PROTOCOL_TAG};
use motorlink_wire::{decode_request, Property, Value, ValueKind};

struct Slot {
    value: Value,
    writable: bool,
}

/// A controller on the simulated bus.
///
/// Behaves like the firmware side of the protocol: every malformed,
/// misaddressed, mistagged or otherwise unserviceable request is
/// answered with the same flat transaction failure the real device
/// produces, with the reason visible only in debug logs.
pub struct SimulatedController {
    selector: DeviceSelector,
    tag: u16,
    store: HashMap<u16, Slot>,
    exchanges: usize,
}

impl SimulatedController {
    /// An empty controller strapped to `selector`, expecting `tag`.
    pub fn new(selector: DeviceSelector, tag: u16) -> Self {
        Self {
            selector,
            tag,
            store: HashMap::new(),
            exchanges: 0,
        }
    }

    /// A controller serving every generated endpoint with bench-plausible
    /// values and the generated protocol tag.
    pub fn with_catalog_defaults(selector: DeviceSelector) -> Self {
        let mut sim = Self::new(selector, PROTOCOL_TAG);
        for entry in CATALOG {
            sim.set(entry.id, zero_value(entry.kind), entry.access.is_writable());
        }
        sim.set(VbusVoltage::ID, Value::Float32(24.0), false);
        sim.set(SerialNumber::ID, Value::Uint64(0x3853_3042_3533), false);
        sim
    }

    /// Add or replace an endpoint.
    pub fn set(&mut self, property_id: u16, value: Value, writable: bool) {
        self.store.insert(property_id, Slot { value, writable });
    }

    /// Builder-style [`set`](Self::set).
    pub fn with_endpoint(mut self, property_id: u16, value: Value, writable: bool) -> Self {
        self.set(property_id, value, writable);
        self
    }

    /// Current value of an endpoint, if present.
    pub fn value(&self, property_id: u16) -> Option<Value> {
        self.store.get(&property_id).map(|slot| slot.value)
    }

    /// Number of exchanges attempted against this controller.
    pub fn exchanges(&self) -> usize {
        self.exchanges
    }

    fn serve_read(&mut self, property_id: u16, rx: &mut [u8]) -> Result<()> {
        let slot = match self.store.get(&property_id) {
            Some(slot) => slot,
            None => {
                debug!(property_id, "read of unknown endpoint");
                return Err(TransactionError);
            }
        };
        if rx.len() != slot.value.width() {
            debug!(
                property_id,
                requested = rx.len(),
                width = slot.value.width(),
                "read length does not match endpoint width"
            );
            return Err(TransactionError);
        }
        let mut encoded = BytesMut::with_capacity(rx.len());
        slot.value.encode_le(&mut encoded);
        rx.copy_from_slice(&encoded);
        Ok(())
    }

    fn serve_write(&mut self, property_id: u16, raw: &[u8]) -> Result<()> {
        let slot = match self.store.get_mut(&property_id) {
            Some(slot) => slot,
            None => {
                debug!(property_id, "write to unknown endpoint");
                return Err(TransactionError);
            }
        };
        if !slot.writable {
            debug!(property_id, "write to read-only endpoint");
            return Err(TransactionError);
        }
        let value = match Value::decode_le(slot.value.kind(), raw) {
            Ok(value) => value,
            Err(err) => {
                debug!(property_id, %err, "write payload does not match endpoint width");
                return Err(TransactionError);
            }
        };
        slot.value = value;
        Ok(())
    }
}

impl BusTransaction for SimulatedController {
    fn transaction(&mut self, address: u8, tx: &[u8], rx: &mut [u8]) -> Result<()> {
        self.exchanges += 1;

        if address != self.selector.bus_address() {
            debug!(
                address,
                expected = self.selector.bus_address(),
                "address does not match straps"
            );
            return Err(TransactionError);
        }

        let frame = match decode_request(tx) {
            Ok(frame) => frame,
            Err(err) => {
                debug!(%err, "malformed request frame");
                return Err(TransactionError);
            }
        };

        if frame.tag != self.tag {
            debug!(
                got = frame.tag,
                expected = self.tag,
                "protocol tag mismatch, rejecting request"
            );
            return Err(TransactionError);
        }

        if frame.is_write() {
            if !rx.is_empty() {
                debug!("write request with inbound phase");
                return Err(TransactionError);
            }
            self.serve_write(frame.property_id, frame.value)
        } else {
            self.serve_read(frame.property_id, rx)
        }
    }
}

fn zero_value(kind: ValueKind) -> Value {
    match kind {
        ValueKind::Uint8 => Value::Uint8(0),
        ValueKind::Uint16 => Value::Uint16(0),
        ValueKind::Uint32 => Value::Uint32(0),
        ValueKind::Uint64 => Value::Uint64(0),
        ValueKind::Int8 => Value::Int8(0),
        ValueKind::Int16 => Value::Int16(0),
        ValueKind::Int32 => Value::Int32(0),
        ValueKind::Int64 => Value::Int64(0),
        ValueKind::Float32 => Value::Float32(0.0),
    }
}
