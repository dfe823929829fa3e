use std::io::IsTerminal;

use clap::ValueEnum;
use comfy_table::{presets::UTF8_FULL, ContentArrangement, Table};
use motorlink_bus::DeviceSelector;
use motorlink_endpoints::{EndpointInfo, CATALOG};
use motorlink_wire::Value;
use serde::Serialize;

#[derive(Clone, Debug, Copy, ValueEnum)]
pub enum OutputFormat {
    Json,
    Table,
    Pretty,
}

impl OutputFormat {
    pub fn default_for_stdout() -> Self {
        if std::io::stdout().is_terminal() {
            Self::Table
        } else {
            Self::Json
        }
    }
}

#[derive(Serialize)]
struct ValueOutput<'a> {
    property: &'a str,
    id: u16,
    device: u8,
    #[serde(rename = "type")]
    kind: &'a str,
    value: Value,
}

/// Print one read-back value.
pub fn print_value(
    entry: &EndpointInfo,
    device: DeviceSelector,
    value: Value,
    format: OutputFormat,
) {
    match format {
        OutputFormat::Json => {
            let out = ValueOutput {
                property: entry.name,
                id: entry.id,
                device: device.get(),
                kind: entry.kind.as_str(),
                value,
            };
            println!(
                "{}",
                serde_json::to_string(&out).unwrap_or_else(|_| "{}".to_string())
            );
        }
        OutputFormat::Table => {
            let mut table = Table::new();
            table
                .load_preset(UTF8_FULL)
                .set_content_arrangement(ContentArrangement::Dynamic)
                .set_header(vec!["PROPERTY", "ID", "DEVICE", "TYPE", "VALUE"])
                .add_row(vec![
                    entry.name.to_string(),
                    format!("{:#06x}", entry.id),
                    device.to_string(),
                    entry.kind.to_string(),
                    value.to_string(),
                ]);
            println!("{table}");
        }
        OutputFormat::Pretty => {
            println!("{} = {value}", entry.name);
        }
    }
}

/// Print the full endpoint catalog.
pub fn print_catalog(format: OutputFormat) {
    match format {
        OutputFormat::Json => {
            println!(
                "{}",
                serde_json::to_string(CATALOG).unwrap_or_else(|_| "[]".to_string())
            );
        }
        OutputFormat::Table => {
            let mut table = Table::new();
            table
                .load_preset(UTF8_FULL)
                .set_content_arrangement(ContentArrangement::Dynamic)
                .set_header(vec!["ID", "PROPERTY", "TYPE", "ACCESS"]);
            for entry in CATALOG {
                table.add_row(vec![
                    format!("{:#06x}", entry.id),
                    entry.name.to_string(),
                    entry.kind.to_string(),
                    entry.access.as_str().to_string(),
                ]);
            }
            println!("{table}");
        }
        OutputFormat::Pretty => {
            for entry in CATALOG {
                println!(
                    "{:#06x}  {:<36} {:>4}  {}",
                    entry.id,
                    entry.name,
                    entry.kind.as_str(),
                    entry.access.as_str()
                );
            }
        }
    }
}

#[derive(Serialize)]
struct StatusOutput<'a> {
    status: &'a str,
    property: &'a str,
    device: u8,
}

/// Print a write/probe confirmation.
pub fn print_status(entry: &EndpointInfo, device: DeviceSelector, format: OutputFormat) {
    match format {
        OutputFormat::Json => {
            let out = StatusOutput {
                status: "ok",
                property: entry.name,
                device: device.get(),
            };
            println!(
                "{}",
                serde_json::to_string(&out).unwrap_or_else(|_| "{}".to_string())
            );
        }
        OutputFormat::Table | OutputFormat::Pretty => {
            println!("ok: {}", entry.name);
        }
    }
}
