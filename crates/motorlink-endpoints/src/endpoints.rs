//! Endpoint definitions for the controller firmware interface.
//!
//! @generated from firmware interface definition v0.5.1 — do not edit.
//! Regenerate after flashing new firmware, then re-run the test suite.

use motorlink_wire::{Property, ValueKind};

use crate::catalog::{Access, EndpointInfo};

/// Compatibility tag of the interface definition this table was
/// generated from. Checked by the device against every request.
pub const PROTOCOL_TAG: u16 = 0x4F1C;

macro_rules! endpoints {
    ($( $(#[$doc:meta])* $marker:ident, $name:literal, $id:literal, $ty:ty, $kind:ident, $access:ident; )*) => {
        $(
            $(#[$doc])*
            pub struct $marker;

            impl Property for $marker {
                const ID: u16 = $id;
                const NAME: &'static str = $name;
                type Value = $ty;
            }
        )*

        /// Every generated endpoint, ordered by identifier.
        pub const CATALOG: &[EndpointInfo] = &[
            $(
                EndpointInfo {
                    id: $id,
                    name: $name,
                    kind: ValueKind::$kind,
                    access: Access::$access,
                },
            )*
        ];
    };
}

endpoints! {
    /// DC bus voltage in volts.
    VbusVoltage, "vbus_voltage", 0x0001, f32, Float32, ReadOnly;
    /// Device serial number.
    SerialNumber, "serial_number", 0x0002, u64, Uint64, ReadOnly;
    /// Hardware revision, major part.
    HwVersionMajor, "hw_version_major", 0x0003, u8, Uint8, ReadOnly;
    /// Hardware revision, minor part.
    HwVersionMinor, "hw_version_minor", 0x0004, u8, Uint8, ReadOnly;
    /// Firmware revision, major part.
    FwVersionMajor, "fw_version_major", 0x0005, u8, Uint8, ReadOnly;
    /// Firmware revision, minor part.
    FwVersionMinor, "fw_version_minor", 0x0006, u8, Uint8, ReadOnly;
    /// Scratch register wired to nothing; exists for link checks.
    TestProperty, "test_property", 0x0007, u32, Uint32, ReadWrite;

    /// Axis 0 sticky error flags.
    Axis0Error, "axis0.error", 0x0020, u16, Uint16, ReadOnly;
    /// Axis 0 current state machine state.
    Axis0CurrentState, "axis0.current_state", 0x0021, u32, Uint32, ReadOnly;
    /// Axis 0 requested state machine state.
    Axis0RequestedState, "axis0.requested_state", 0x0022, u32, Uint32, ReadWrite;
    /// Axis 0 board temperature in centidegrees Celsius.
    Axis0Temperature, "axis0.temperature", 0x0023, i16, Int16, ReadOnly;
    /// Axis 0 raw encoder count.
    Axis0EncoderShadowCount, "axis0.encoder.shadow_count", 0x0024, i32, Int32, ReadOnly;
    /// Axis 0 estimated position in encoder counts.
    Axis0PosEstimate, "axis0.encoder.pos_estimate", 0x0025, f32, Float32, ReadOnly;
    /// Axis 0 estimated velocity in counts/s.
    Axis0VelEstimate, "axis0.encoder.vel_estimate", 0x0026, f32, Float32, ReadOnly;
    /// Axis 0 position setpoint in encoder counts.
    Axis0PosSetpoint, "axis0.controller.pos_setpoint", 0x0027, f32, Float32, ReadWrite;
    /// Axis 0 velocity setpoint in counts/s.
    Axis0VelSetpoint, "axis0.controller.vel_setpoint", 0x0028, f32, Float32, ReadWrite;
    /// Axis 0 current setpoint in amps.
    Axis0CurrentSetpoint, "axis0.controller.current_setpoint", 0x0029, f32, Float32, ReadWrite;

    /// Axis 1 sticky error flags.
    Axis1Error, "axis1.error", 0x0040, u16, Uint16, ReadOnly;
    /// Axis 1 current state machine state.
    Axis1CurrentState, "axis1.current_state", 0x0041, u32, Uint32, ReadOnly;
    /// Axis 1 requested state machine state.
    Axis1RequestedState, "axis1.requested_state", 0x0042, u32, Uint32, ReadWrite;
    /// Axis 1 board temperature in centidegrees Celsius.
    Axis1Temperature, "axis1.temperature", 0x0043, i16, Int16, ReadOnly;
    /// Axis 1 raw encoder count.
    Axis1EncoderShadowCount, "axis1.encoder.shadow_count", 0x0044, i32, Int32, ReadOnly;
    /// Axis 1 estimated position in encoder counts.
    Axis1PosEstimate, "axis1.encoder.pos_estimate", 0x0045, f32, Float32, ReadOnly;
    /// Axis 1 estimated velocity in counts/s.
    Axis1VelEstimate, "axis1.encoder.vel_estimate", 0x0046, f32, Float32, ReadOnly;
    /// Axis 1 position setpoint in encoder counts.
    Axis1PosSetpoint, "axis1.controller.pos_setpoint", 0x0047, f32, Float32, ReadWrite;
    /// Axis 1 velocity setpoint in counts/s.
    Axis1VelSetpoint, "axis1.controller.vel_setpoint", 0x0048, f32, Float32, ReadWrite;
    /// Axis 1 current setpoint in amps.
    Axis1CurrentSetpoint, "axis1.controller.current_setpoint", 0x0049, f32, Float32, ReadWrite;
}

#[cfg(test)]
mod tests {
    use motorlink_wire::WireValue;

    use super::*;

    #[test]
    fn catalog_ids_are_sorted_and_unique() {
        for pair in CATALOG.windows(2) {
            assert!(
                pair[0].id < pair[1].id,
                "catalog out of order at id {:#06x}",
                pair[1].id
            );
        }
    }

    #[test]
    fn catalog_names_are_unique() {
        let mut names: Vec<&str> = CATALOG.iter().map(|e| e.name).collect();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), CATALOG.len());
    }

    #[test]
    fn marker_bindings_match_catalog_rows() {
        let vbus = CATALOG.iter().find(|e| e.id == VbusVoltage::ID).unwrap();
        assert_eq!(vbus.name, VbusVoltage::NAME);
        assert_eq!(
            vbus.kind,
            <<VbusVoltage as Property>::Value as WireValue>::KIND
        );

        let serial = CATALOG.iter().find(|e| e.id == SerialNumber::ID).unwrap();
        assert_eq!(
            serial.kind.width(),
            <<SerialNumber as Property>::Value as WireValue>::WIDTH
        );

        let state = CATALOG
            .iter()
            .find(|e| e.id == Axis1RequestedState::ID)
            .unwrap();
        assert_eq!(
            state.kind,
            <<Axis1RequestedState as Property>::Value as WireValue>::KIND
        );
        assert!(state.access.is_writable());
    }
}
