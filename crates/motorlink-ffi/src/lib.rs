//! motorlink-ffi: C-ABI exports for motorlink property access.
//!
//! The embedding application provides the bus driver as a function
//! pointer ([`MlBusTransactionFn`]); motorlink does the framing and
//! marshaling. One exported read/write pair per supported scalar kind.

mod bus;
mod types;

use std::panic::AssertUnwindSafe;

use motorlink_bus::DeviceSelector;
use motorlink_client::PropertyClient;
use motorlink_wire::{Value, ValueKind};

use crate::bus::ExternBus;
pub use crate::bus::MlBusTransactionFn;
pub use crate::types::{
    MlResult, ML_ERR_INTERNAL, ML_ERR_INVALID_ARGUMENT, ML_ERR_TRANSACTION, ML_OK,
};

fn ffi_boundary(f: impl FnOnce() -> MlResult) -> MlResult {
    match std::panic::catch_unwind(AssertUnwindSafe(f)) {
        Ok(result) => result,
        Err(_) => MlResult::Internal,
    }
}

macro_rules! export_property_access {
    ($( $read_name:ident, $write_name:ident, $ty:ty, $variant:ident; )*) => {$(
        /// Read a property from the controller selected by `device`.
        ///
        /// A null `out` still performs the full exchange and reports
        /// success; only the decode is skipped.
        ///
        /// # Safety
        ///
        /// `bus` must honor the [`MlBusTransactionFn`] contract, and
        /// `out` must be null or point at a writable value.
        #[no_mangle]
        pub unsafe extern "C" fn $read_name(
            bus: Option<MlBusTransactionFn>,
            device: u8,
            property_id: u16,
            tag: u16,
            out: *mut $ty,
        ) -> MlResult {
            ffi_boundary(|| {
                let Some(bus) = bus else {
                    return MlResult::InvalidArgument;
                };
                let Some(device) = DeviceSelector::new(device) else {
                    return MlResult::InvalidArgument;
                };
                let mut client = PropertyClient::new(ExternBus(bus), tag);
                match client.read_dyn(device, property_id, ValueKind::$variant) {
                    Ok(Value::$variant(value)) => {
                        if !out.is_null() {
                            // SAFETY: caller guarantees `out` is writable.
                            unsafe { *out = value };
                        }
                        MlResult::Ok
                    }
                    Ok(_) => MlResult::Internal,
                    Err(_) => MlResult::Transaction,
                }
            })
        }

        /// Write a property on the controller selected by `device`.
        ///
        /// # Safety
        ///
        /// `bus` must honor the [`MlBusTransactionFn`] contract.
        #[no_mangle]
        pub unsafe extern "C" fn $write_name(
            bus: Option<MlBusTransactionFn>,
            device: u8,
            property_id: u16,
            tag: u16,
            value: $ty,
        ) -> MlResult {
            ffi_boundary(|| {
                let Some(bus) = bus else {
                    return MlResult::InvalidArgument;
                };
                let Some(device) = DeviceSelector::new(device) else {
                    return MlResult::InvalidArgument;
                };
                let mut client = PropertyClient::new(ExternBus(bus), tag);
                match client.write_dyn(device, property_id, &Value::$variant(value)) {
                    Ok(()) => MlResult::Ok,
                    Err(_) => MlResult::Transaction,
                }
            })
        }
    )*};
}

export_property_access! {
    ml_read_u8, ml_write_u8, u8, Uint8;
    ml_read_u16, ml_write_u16, u16, Uint16;
    ml_read_u32, ml_write_u32, u32, Uint32;
    ml_read_u64, ml_write_u64, u64, Uint64;
    ml_read_i8, ml_write_i8, i8, Int8;
    ml_read_i16, ml_write_i16, i16, Int16;
    ml_read_i32, ml_write_i32, i32, Int32;
    ml_read_i64, ml_write_i64, i64, Int64;
    ml_read_f32, ml_write_f32, f32, Float32;
}
