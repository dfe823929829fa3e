use std::path::PathBuf;

use clap::{Args, Subcommand};

use motorlink_bus::{BusTransaction, DeviceSelector};
use motorlink_client::PropertyClient;
use motorlink_endpoints::{find, EndpointInfo, PROTOCOL_TAG};
use motorlink_sim::SimulatedController;

use crate::exit::{CliError, CliResult, USAGE};
use crate::output::OutputFormat;

pub mod list;
pub mod probe;
pub mod read;
pub mod version;
pub mod watch;
pub mod write;

#[derive(Subcommand, Debug)]
pub enum Command {
    /// List the generated endpoint catalog.
    List(ListArgs),
    /// Read a property once.
    Read(ReadArgs),
    /// Write a property.
    Write(WriteArgs),
    /// Perform a read transaction, discarding the value.
    Probe(ProbeArgs),
    /// Poll a property at an interval until interrupted.
    Watch(WatchArgs),
    /// Show version and protocol information.
    Version(VersionArgs),
}

pub fn run(command: Command, format: OutputFormat) -> CliResult<i32> {
    match command {
        Command::List(args) => list::run(args, format),
        Command::Read(args) => read::run(args, format),
        Command::Write(args) => write::run(args, format),
        Command::Probe(args) => probe::run(args, format),
        Command::Watch(args) => watch::run(args, format),
        Command::Version(args) => version::run(args, format),
    }
}

/// Bus selection shared by every command that talks to a device.
#[derive(Args, Debug)]
pub struct BusArgs {
    /// I2C adapter device, e.g. /dev/i2c-1 (Linux only).
    #[arg(long, value_name = "PATH", conflicts_with = "sim")]
    pub bus: Option<PathBuf>,

    /// Talk to an in-process simulated controller instead of hardware.
    #[arg(long)]
    pub sim: bool,

    /// Device selector strap value (0-7).
    #[arg(long, short = 'd', default_value = "0")]
    pub device: u8,

    /// Protocol tag override, e.g. 0x4f1c. Default: the generated tag.
    #[arg(long, value_name = "TAG")]
    pub tag: Option<String>,
}

#[derive(Args, Debug, Default)]
pub struct ListArgs {}

#[derive(Args, Debug)]
pub struct ReadArgs {
    /// Endpoint name (see `motorlink list`).
    pub property: String,

    #[command(flatten)]
    pub bus: BusArgs,
}

#[derive(Args, Debug)]
pub struct WriteArgs {
    /// Endpoint name (see `motorlink list`).
    pub property: String,

    /// Value literal, parsed as the endpoint's type.
    pub value: String,

    #[command(flatten)]
    pub bus: BusArgs,
}

#[derive(Args, Debug)]
pub struct ProbeArgs {
    /// Endpoint name (see `motorlink list`).
    pub property: String,

    #[command(flatten)]
    pub bus: BusArgs,
}

#[derive(Args, Debug)]
pub struct WatchArgs {
    /// Endpoint name (see `motorlink list`).
    pub property: String,

    /// Sampling interval (e.g. 1s, 250ms).
    #[arg(long, default_value = "1s")]
    pub interval: String,

    /// Stop after this many samples.
    #[arg(long)]
    pub count: Option<u64>,

    #[command(flatten)]
    pub bus: BusArgs,
}

#[derive(Args, Debug, Default)]
pub struct VersionArgs {}

pub(crate) fn lookup(property: &str) -> CliResult<&'static EndpointInfo> {
    find(property).ok_or_else(|| {
        CliError::new(
            USAGE,
            format!("unknown property: {property} (try `motorlink list`)"),
        )
    })
}

pub(crate) fn selector(args: &BusArgs) -> CliResult<DeviceSelector> {
    DeviceSelector::new(args.device).ok_or_else(|| {
        CliError::new(
            USAGE,
            format!("device selector out of range (got {}, max 7)", args.device),
        )
    })
}

pub(crate) fn resolve_tag(args: &BusArgs) -> CliResult<u16> {
    match &args.tag {
        None => Ok(PROTOCOL_TAG),
        Some(text) => parse_tag(text)
            .ok_or_else(|| CliError::new(USAGE, format!("invalid protocol tag: {text}"))),
    }
}

fn parse_tag(text: &str) -> Option<u16> {
    let text = text.trim();
    if let Some(hex) = text.strip_prefix("0x").or_else(|| text.strip_prefix("0X")) {
        u16::from_str_radix(hex, 16).ok()
    } else {
        text.parse().ok()
    }
}

/// Open the selected bus and wrap it in a client.
pub(crate) fn connect(args: &BusArgs) -> CliResult<PropertyClient<Box<dyn BusTransaction>>> {
    let tag = resolve_tag(args)?;
    let device = selector(args)?;

    let bus: Box<dyn BusTransaction> = if args.sim {
        Box::new(SimulatedController::with_catalog_defaults(device))
    } else if let Some(path) = &args.bus {
        open_hardware(path)?
    } else {
        return Err(CliError::new(
            USAGE,
            "select a bus with --bus <PATH> or --sim",
        ));
    };

    Ok(PropertyClient::new(bus, tag))
}

#[cfg(target_os = "linux")]
fn open_hardware(path: &std::path::Path) -> CliResult<Box<dyn BusTransaction>> {
    let bus = motorlink_bus::LinuxI2cBus::open(path).map_err(crate::exit::open_error)?;
    Ok(Box::new(bus))
}

#[cfg(not(target_os = "linux"))]
fn open_hardware(_path: &std::path::Path) -> CliResult<Box<dyn BusTransaction>> {
    Err(CliError::new(
        USAGE,
        "--bus requires Linux; use --sim on this platform",
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_tag_accepts_hex_and_decimal() {
        assert_eq!(parse_tag("0x4f1c"), Some(0x4F1C));
        assert_eq!(parse_tag("0XBEEF"), Some(0xBEEF));
        assert_eq!(parse_tag("10000"), Some(10_000));
        assert_eq!(parse_tag(" 7 "), Some(7));
    }

    #[test]
    fn parse_tag_rejects_garbage() {
        assert_eq!(parse_tag("0x"), None);
        assert_eq!(parse_tag("0x10000"), None);
        assert_eq!(parse_tag("70000"), None);
        assert_eq!(parse_tag("beef"), None);
    }

    #[test]
    fn lookup_reports_unknown_properties_as_usage_errors() {
        let err = lookup("no_such_endpoint").expect_err("lookup should fail");
        assert_eq!(err.code, USAGE);
    }
}
