use motorlink_bus::{BusTransaction, Result, TransactionError};

/// Host-provided bus transaction primitive with C linkage.
///
/// The contract matches [`BusTransaction`]: one call is one full
/// exchange (start; address+write and the outbound bytes if `tx_len`
/// is non-zero; a repeated start if both phases run; address+read and
/// exactly `rx_len` inbound bytes if `rx_len` is non-zero; stop).
/// A null buffer with length 0 skips that phase. Returns `true` only
/// if every byte moved as requested.
pub type MlBusTransactionFn = unsafe extern "C" fn(
    address: u8,
    tx: *const u8,
    tx_len: usize,
    rx: *mut u8,
    rx_len: usize,
) -> bool;

/// Adapter making a host function pointer usable as a bus.
pub(crate) struct ExternBus(pub(crate) MlBusTransactionFn);

impl BusTransaction for ExternBus {
    fn transaction(&mut self, address: u8, tx: &[u8], rx: &mut [u8]) -> Result<()> {
        let tx_ptr = if tx.is_empty() {
            std::ptr::null()
        } else {
            tx.as_ptr()
        };
        let rx_ptr = if rx.is_empty() {
            std::ptr::null_mut()
        } else {
            rx.as_mut_ptr()
        };

        // SAFETY: the pointers are valid for their lengths for the whole
        // call; the host promises to write at most `rx_len` bytes.
        let complete = unsafe { (self.0)(address, tx_ptr, tx.len(), rx_ptr, rx.len()) };
        if complete {
            Ok(())
        } else {
            Err(TransactionError)
        }
    }
}
