use std::fs::{File, OpenOptions};
use std::os::fd::AsRawFd;
use std::path::{Path, PathBuf};

use tracing::{debug, trace};

use crate::error::{BusOpenError, Result, TransactionError};
use crate::traits::BusTransaction;

const I2C_RDWR: libc::c_ulong = 0x0707;
const I2C_M_RD: u16 = 0x0001;

/// Mirror of the kernel's `struct i2c_msg`.
#[repr(C)]
struct I2cMsg {
    addr: u16,
    flags: u16,
    len: u16,
    buf: *mut u8,
}

/// Mirror of the kernel's `struct i2c_rdwr_ioctl_data`.
#[repr(C)]
struct I2cRdwrIoctlData {
    msgs: *mut I2cMsg,
    nmsgs: u32,
}

/// `/dev/i2c-*` bus adapter using the kernel's combined-transfer ioctl.
///
/// A write+read exchange is submitted as one `I2C_RDWR` message pair,
/// so the kernel controller driver issues the repeated start between
/// the phases and the stop condition after the last message.
pub struct LinuxI2cBus {
    file: File,
    path: PathBuf,
}

impl LinuxI2cBus {
    /// Open an I2C adapter device, e.g. `/dev/i2c-1`.
    pub fn open(path: impl AsRef<Path>) -> std::result::Result<Self, BusOpenError> {
        let path = path.as_ref().to_path_buf();
        let file = OpenOptions::new()
            .read(true)
            .write(true)
            .open(&path)
            .map_err(|source| BusOpenError {
                path: path.clone(),
                source,
            })?;
        debug!(path = %path.display(), "opened i2c adapter");
        Ok(Self { file, path })
    }

    /// The adapter device path.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl BusTransaction for LinuxI2cBus {
    fn transaction(&mut self, address: u8, tx: &[u8], rx: &mut [u8]) -> Result<()> {
        if tx.len() > u16::MAX as usize || rx.len() > u16::MAX as usize {
            debug!(tx_len = tx.len(), rx_len = rx.len(), "transfer exceeds i2c_msg length");
            return Err(TransactionError);
        }

        let mut msgs = [
            I2cMsg {
                addr: 0,
                flags: 0,
                len: 0,
                buf: std::ptr::null_mut(),
            },
            I2cMsg {
                addr: 0,
                flags: 0,
                len: 0,
                buf: std::ptr::null_mut(),
            },
        ];
        let mut nmsgs = 0usize;

        if !tx.is_empty() {
            msgs[nmsgs] = I2cMsg {
                addr: u16::from(address),
                flags: 0,
                len: tx.len() as u16,
                buf: tx.as_ptr().cast_mut(),
            };
            nmsgs += 1;
        }
        if !rx.is_empty() {
            msgs[nmsgs] = I2cMsg {
                addr: u16::from(address),
                flags: I2C_M_RD,
                len: rx.len() as u16,
                buf: rx.as_mut_ptr(),
            };
            nmsgs += 1;
        }
        if nmsgs == 0 {
            return Ok(());
        }

        let mut data = I2cRdwrIoctlData {
            msgs: msgs.as_mut_ptr(),
            nmsgs: nmsgs as u32,
        };

        // SAFETY: `data.msgs` points at `nmsgs` initialized messages whose
        // buffers stay borrowed (and therefore live) for the whole call;
        // the kernel writes at most `len` bytes into the read message.
        let rc = unsafe { libc::ioctl(self.file.as_raw_fd(), I2C_RDWR, &mut data) };
        if rc != nmsgs as libc::c_int {
            let errno = std::io::Error::last_os_error();
            debug!(
                address,
                tx_len = tx.len(),
                rx_len = rx.len(),
                %errno,
                "i2c transaction failed"
            );
            return Err(TransactionError);
        }

        trace!(address, tx_len = tx.len(), rx_len = rx.len(), "i2c transaction complete");
        Ok(())
    }
}
