use crate::cmd::{connect, lookup, selector, ReadArgs};
use crate::exit::{client_error, CliResult, SUCCESS};
use crate::output::{print_value, OutputFormat};

pub fn run(args: ReadArgs, format: OutputFormat) -> CliResult<i32> {
    let entry = lookup(&args.property)?;
    let device = selector(&args.bus)?;
    let mut client = connect(&args.bus)?;

    let value = client
        .read_dyn(device, entry.id, entry.kind)
        .map_err(|err| client_error("read failed", err))?;

    print_value(entry, device, value, format);
    Ok(SUCCESS)
}
