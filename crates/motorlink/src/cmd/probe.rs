use crate::cmd::{connect, lookup, selector, ProbeArgs};
use crate::exit::{client_error, CliResult, SUCCESS};
use crate::output::{print_status, OutputFormat};

pub fn run(args: ProbeArgs, format: OutputFormat) -> CliResult<i32> {
    let entry = lookup(&args.property)?;
    let device = selector(&args.bus)?;
    let mut client = connect(&args.bus)?;

    client
        .probe_dyn(device, entry.id, entry.kind)
        .map_err(|err| client_error("probe failed", err))?;

    print_status(entry, device, format);
    Ok(SUCCESS)
}
