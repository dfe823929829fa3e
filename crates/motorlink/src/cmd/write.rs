use motorlink_wire::Value;

use crate::cmd::{connect, lookup, selector, WriteArgs};
use crate::exit::{client_error, CliError, CliResult, DATA_INVALID, SUCCESS, USAGE};
use crate::output::{print_status, OutputFormat};

pub fn run(args: WriteArgs, format: OutputFormat) -> CliResult<i32> {
    let entry = lookup(&args.property)?;
    if !entry.access.is_writable() {
        return Err(CliError::new(
            USAGE,
            format!("{} is read-only", entry.name),
        ));
    }

    let value = Value::parse(entry.kind, &args.value)
        .map_err(|err| CliError::new(DATA_INVALID, err.to_string()))?;

    let device = selector(&args.bus)?;
    let mut client = connect(&args.bus)?;
    client
        .write_dyn(device, entry.id, &value)
        .map_err(|err| client_error("write failed", err))?;

    print_status(entry, device, format);
    Ok(SUCCESS)
}
