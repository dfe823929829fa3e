use crate::cmd::ListArgs;
use crate::exit::{CliResult, SUCCESS};
use crate::output::{print_catalog, OutputFormat};

pub fn run(_args: ListArgs, format: OutputFormat) -> CliResult<i32> {
    print_catalog(format);
    Ok(SUCCESS)
}
