use motorlink_endpoints::{CATALOG, PROTOCOL_TAG};
use serde::Serialize;

use crate::cmd::VersionArgs;
use crate::exit::{CliResult, SUCCESS};
use crate::output::OutputFormat;

#[derive(Serialize)]
struct VersionOutput {
    name: &'static str,
    version: &'static str,
    protocol_tag: u16,
    endpoints: usize,
}

pub fn run(_args: VersionArgs, format: OutputFormat) -> CliResult<i32> {
    match format {
        OutputFormat::Json => {
            let out = VersionOutput {
                name: "motorlink",
                version: env!("CARGO_PKG_VERSION"),
                protocol_tag: PROTOCOL_TAG,
                endpoints: CATALOG.len(),
            };
            println!(
                "{}",
                serde_json::to_string(&out).unwrap_or_else(|_| "{}".to_string())
            );
        }
        OutputFormat::Table | OutputFormat::Pretty => {
            println!(
                "motorlink {} (protocol tag {:#06x}, {} endpoints)",
                env!("CARGO_PKG_VERSION"),
                PROTOCOL_TAG,
                CATALOG.len()
            );
        }
    }
    Ok(SUCCESS)
}
