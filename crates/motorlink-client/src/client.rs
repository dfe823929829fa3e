use bytes::BytesMut;
use tracing::debug;

use motorlink_bus::{BusTransaction, DeviceSelector};
use motorlink_wire::{
    decode_response, encode_read_request, encode_write_request, encode_write_request_dyn,
    write_request_len, write_request_len_for, Property, Value, ValueKind, WireValue,
    MAX_VALUE_WIDTH, READ_REQUEST_LEN,
};

use crate::error::Result;

/// Typed property access to controllers on one bus.
///
/// Owns its bus handle, so the borrow checker already serializes calls
/// through one client. Every request buffer is built fresh per call and
/// dropped with it; nothing is cached between transactions. No retries:
/// a failed exchange surfaces immediately as
/// [`ClientError::Transaction`](crate::ClientError::Transaction).
pub struct PropertyClient<B> {
    bus: B,
    tag: u16,
}

impl<B: BusTransaction> PropertyClient<B> {
    /// Create a client that stamps `tag` into every request.
    ///
    /// The tag must match the one baked into the device firmware; use
    /// the generated `PROTOCOL_TAG` unless deliberately testing a
    /// mismatch.
    pub fn new(bus: B, tag: u16) -> Self {
        Self { bus, tag }
    }

    /// The protocol tag stamped into requests.
    pub fn tag(&self) -> u16 {
        self.tag
    }

    /// Borrow the underlying bus.
    pub fn bus_mut(&mut self) -> &mut B {
        &mut self.bus
    }

    /// Consume the client, returning the bus.
    pub fn into_bus(self) -> B {
        self.bus
    }

    /// Read property `P` from `device`.
    ///
    /// One transaction: a 4-byte read request out, exactly
    /// `P::Value::WIDTH` bytes back. On failure no value is produced.
    pub fn read<P: Property>(&mut self, device: DeviceSelector) -> Result<P::Value> {
        let mut request = BytesMut::with_capacity(READ_REQUEST_LEN);
        encode_read_request(&mut request, P::ID, self.tag);

        let mut response = [0u8; MAX_VALUE_WIDTH];
        let response = &mut response[..P::Value::WIDTH];
        self.bus
            .transaction(device.bus_address(), &request, response)?;

        let value = decode_response::<P::Value>(response)?;
        debug!(property = P::NAME, %device, value = ?value, "read property");
        Ok(value)
    }

    /// Perform the read transaction for `P` and discard the response.
    ///
    /// The device still serves the full value; only decoding is
    /// skipped. Useful to confirm an endpoint answers without caring
    /// what it says.
    pub fn probe<P: Property>(&mut self, device: DeviceSelector) -> Result<()> {
        let mut request = BytesMut::with_capacity(READ_REQUEST_LEN);
        encode_read_request(&mut request, P::ID, self.tag);

        let mut response = [0u8; MAX_VALUE_WIDTH];
        self.bus.transaction(
            device.bus_address(),
            &request,
            &mut response[..P::Value::WIDTH],
        )?;
        debug!(property = P::NAME, %device, "probed property");
        Ok(())
    }

    /// Write `value` to property `P` on `device`.
    ///
    /// One transaction with no inbound phase; the bus verdict is
    /// returned verbatim.
    pub fn write<P: Property>(&mut self, device: DeviceSelector, value: P::Value) -> Result<()> {
        let mut request = BytesMut::with_capacity(write_request_len::<P::Value>());
        encode_write_request(&mut request, P::ID, value, self.tag);

        self.bus
            .transaction(device.bus_address(), &request, &mut [])?;
        debug!(property = P::NAME, %device, value = ?value, "wrote property");
        Ok(())
    }

    /// Read an endpoint selected at runtime by identifier and kind.
    pub fn read_dyn(
        &mut self,
        device: DeviceSelector,
        property_id: u16,
        kind: ValueKind,
    ) -> Result<Value> {
        let mut request = BytesMut::with_capacity(READ_REQUEST_LEN);
        encode_read_request(&mut request, property_id, self.tag);

        let mut response = [0u8; MAX_VALUE_WIDTH];
        let response = &mut response[..kind.width()];
        self.bus
            .transaction(device.bus_address(), &request, response)?;

        let value = Value::decode_le(kind, response)?;
        debug!(property_id, %device, %value, "read property");
        Ok(value)
    }

    /// Perform the read transaction for a runtime-selected endpoint and
    /// discard the response.
    pub fn probe_dyn(
        &mut self,
        device: DeviceSelector,
        property_id: u16,
        kind: ValueKind,
    ) -> Result<()> {
        let mut request = BytesMut::with_capacity(READ_REQUEST_LEN);
        encode_read_request(&mut request, property_id, self.tag);

        let mut response = [0u8; MAX_VALUE_WIDTH];
        self.bus
            .transaction(device.bus_address(), &request, &mut response[..kind.width()])?;
        debug!(property_id, %device, "probed property");
        Ok(())
    }

    /// Write an endpoint selected at runtime.
    pub fn write_dyn(
        &mut self,
        device: DeviceSelector,
        property_id: u16,
        value: &Value,
    ) -> Result<()> {
        let mut request = BytesMut::with_capacity(write_request_len_for(value.kind()));
        encode_write_request_dyn(&mut request, property_id, value, self.tag);

        self.bus
            .transaction(device.bus_address(), &request, &mut [])?;
        debug!(property_id, %device, %value, "wrote property");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use motorlink_bus::TransactionError;

    use super::*;
    use crate::error::ClientError;

    struct Scratch;

    impl Property for Scratch {
        const ID: u16 = 0x0042;
        const NAME: &'static str = "scratch";
        type Value = u32;
    }

    /// Test double that captures one exchange and plays back a canned
    /// response.
    struct ScriptedBus {
        address: Option<u8>,
        tx: Vec<u8>,
        rx_requested: Option<usize>,
        response: Vec<u8>,
        fail: bool,
    }

    impl ScriptedBus {
        fn respond_with(response: &[u8]) -> Self {
            Self {
                address: None,
                tx: Vec::new(),
                rx_requested: None,
                response: response.to_vec(),
                fail: false,
            }
        }

        fn failing() -> Self {
            let mut bus = Self::respond_with(&[]);
            bus.fail = true;
            bus
        }
    }

    impl BusTransaction for ScriptedBus {
        fn transaction(
            &mut self,
            address: u8,
            tx: &[u8],
            rx: &mut [u8],
        ) -> motorlink_bus::Result<()> {
            self.address = Some(address);
            self.tx = tx.to_vec();
            self.rx_requested = Some(rx.len());
            if self.fail {
                return Err(TransactionError);
            }
            let n = rx.len().min(self.response.len());
            rx[..n].copy_from_slice(&self.response[..n]);
            Ok(())
        }
    }

    fn device(selector: u8) -> DeviceSelector {
        DeviceSelector::new(selector).expect("selector should be in range")
    }

    #[test]
    fn write_emits_reference_frame() {
        let mut client = PropertyClient::new(ScriptedBus::respond_with(&[]), 0xBEEF);
        client.write::<Scratch>(device(0), 10_000).unwrap();

        let bus = client.into_bus();
        assert_eq!(bus.address, Some(0x68));
        assert_eq!(bus.tx, [0x42, 0x00, 0x10, 0x27, 0x00, 0x00, 0xEF, 0xBE]);
        assert_eq!(bus.rx_requested, Some(0));
    }

    #[test]
    fn read_emits_reference_frame_and_decodes() {
        let mut client =
            PropertyClient::new(ScriptedBus::respond_with(&[0x10, 0x27, 0x00, 0x00]), 0xBEEF);
        let value = client.read::<Scratch>(device(0)).unwrap();
        assert_eq!(value, 10_000);

        let bus = client.into_bus();
        assert_eq!(bus.tx, [0x42, 0x00, 0xEF, 0xBE]);
        assert_eq!(bus.rx_requested, Some(4));
    }

    #[test]
    fn device_selector_shifts_bus_address() {
        let mut client = PropertyClient::new(ScriptedBus::respond_with(&[0; 4]), 0xBEEF);
        client.read::<Scratch>(device(5)).unwrap();
        assert_eq!(client.into_bus().address, Some(0x68 | 5));
    }

    #[test]
    fn read_failure_short_circuits() {
        let mut client = PropertyClient::new(ScriptedBus::failing(), 0xBEEF);
        let result = client.read::<Scratch>(device(0));
        assert!(matches!(result, Err(ClientError::Transaction(_))));
    }

    #[test]
    fn write_failure_is_returned_verbatim() {
        let mut client = PropertyClient::new(ScriptedBus::failing(), 0xBEEF);
        let result = client.write::<Scratch>(device(0), 1);
        assert!(matches!(result, Err(ClientError::Transaction(_))));
    }

    #[test]
    fn probe_requests_full_width_and_reports_success() {
        let mut client =
            PropertyClient::new(ScriptedBus::respond_with(&[0xAA, 0xBB, 0xCC, 0xDD]), 0xBEEF);
        client.probe::<Scratch>(device(0)).unwrap();

        let bus = client.into_bus();
        assert_eq!(bus.tx, [0x42, 0x00, 0xEF, 0xBE]);
        assert_eq!(bus.rx_requested, Some(4));
    }

    #[test]
    fn dyn_operations_match_typed_ones() {
        let mut typed =
            PropertyClient::new(ScriptedBus::respond_with(&[0x10, 0x27, 0x00, 0x00]), 0xBEEF);
        typed.read::<Scratch>(device(2)).unwrap();
        let typed_bus = typed.into_bus();

        let mut dynamic =
            PropertyClient::new(ScriptedBus::respond_with(&[0x10, 0x27, 0x00, 0x00]), 0xBEEF);
        let value = dynamic
            .read_dyn(device(2), Scratch::ID, ValueKind::Uint32)
            .unwrap();
        let dyn_bus = dynamic.into_bus();

        assert_eq!(value, Value::Uint32(10_000));
        assert_eq!(typed_bus.tx, dyn_bus.tx);
        assert_eq!(typed_bus.address, dyn_bus.address);
        assert_eq!(typed_bus.rx_requested, dyn_bus.rx_requested);

        let mut typed = PropertyClient::new(ScriptedBus::respond_with(&[]), 0xBEEF);
        typed.write::<Scratch>(device(2), 10_000).unwrap();
        let mut dynamic = PropertyClient::new(ScriptedBus::respond_with(&[]), 0xBEEF);
        dynamic
            .write_dyn(device(2), Scratch::ID, &Value::Uint32(10_000))
            .unwrap();
        assert_eq!(typed.into_bus().tx, dynamic.into_bus().tx);
    }

    #[test]
    fn tag_override_lands_in_frame() {
        let mut client = PropertyClient::new(ScriptedBus::respond_with(&[0; 4]), 0x1234);
        assert_eq!(client.tag(), 0x1234);
        client.read::<Scratch>(device(0)).unwrap();
        let tx = client.into_bus().tx;
        assert_eq!(&tx[tx.len() - 2..], &[0x34, 0x12]);
    }
}
