use crate::error::Result;

/// One blocking request/response exchange with a device on the bus.
///
/// A call performs the following sequence:
/// 1. generate a start condition
/// 2. if `tx` is non-empty: send the 7-bit address with write intent,
///    then every byte of `tx`
/// 3. if both `tx` and `rx` are non-empty, generate a repeated start
/// 4. if `rx` is non-empty: send the address with read intent and read
///    exactly `rx.len()` bytes into `rx`
/// 5. send a stop condition
///
/// An empty buffer skips its phase entirely. Implementations own all
/// timing, clocking, arbitration and timeout behavior; there are no
/// retries at this layer. Serializing concurrent access to one physical
/// bus is the embedding application's responsibility.
pub trait BusTransaction {
    /// Perform one full exchange with the device at `address`.
    ///
    /// Returns `Err` unless every requested byte was transmitted and
    /// received. On failure the contents of `rx` are unspecified.
    fn transaction(&mut self, address: u8, tx: &[u8], rx: &mut [u8]) -> Result<()>;
}

impl<B: BusTransaction + ?Sized> BusTransaction for &mut B {
    fn transaction(&mut self, address: u8, tx: &[u8], rx: &mut [u8]) -> Result<()> {
        (**self).transaction(address, tx, rx)
    }
}

impl<B: BusTransaction + ?Sized> BusTransaction for Box<B> {
    fn transaction(&mut self, address: u8, tx: &[u8], rx: &mut [u8]) -> Result<()> {
        (**self).transaction(address, tx, rx)
    }
}
