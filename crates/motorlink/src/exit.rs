use std::fmt;

use motorlink_client::ClientError;

// Exit code constants, sysexits-flavored.
pub const SUCCESS: i32 = 0;
#[allow(dead_code)]
pub const FAILURE: i32 = 1;
pub const BUS_ERROR: i32 = 3;
pub const DATA_INVALID: i32 = 60;
pub const USAGE: i32 = 64;
#[allow(dead_code)]
pub const INTERNAL: i32 = 125;

pub type CliResult<T> = Result<T, CliError>;

#[derive(Debug)]
pub struct CliError {
    pub code: i32,
    pub message: String,
}

impl CliError {
    pub fn new(code: i32, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for CliError {}

pub fn client_error(context: &str, err: ClientError) -> CliError {
    let code = match err {
        ClientError::Transaction(_) => BUS_ERROR,
        ClientError::Response(_) => DATA_INVALID,
    };
    CliError::new(code, format!("{context}: {err}"))
}

#[cfg(target_os = "linux")]
pub fn open_error(err: motorlink_bus::BusOpenError) -> CliError {
    let code = match err.source.kind() {
        std::io::ErrorKind::NotFound | std::io::ErrorKind::PermissionDenied => USAGE,
        _ => INTERNAL,
    };
    CliError::new(code, err.to_string())
}
