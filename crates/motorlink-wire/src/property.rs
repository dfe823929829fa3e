use crate::value::WireValue;

/// Compile-time binding between a property identifier and its value type.
///
/// Implementations are marker types, normally generated into
/// `motorlink-endpoints` from the device's interface definition. The
/// binding is fixed at compile time; if the firmware's property set
/// changes, the table is regenerated and dependents re-validated.
///
/// ```
/// use motorlink_wire::Property;
///
/// struct BusVoltage;
///
/// impl Property for BusVoltage {
///     const ID: u16 = 0x0001;
///     const NAME: &'static str = "bus_voltage";
///     type Value = f32;
/// }
/// ```
pub trait Property {
    /// The property identifier sent in every request.
    const ID: u16;
    /// Human-readable endpoint name, for diagnostics.
    const NAME: &'static str;
    /// The value type this property marshals as.
    type Value: WireValue;
}
