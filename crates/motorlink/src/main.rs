mod cmd;
mod exit;
mod logging;
mod output;

use clap::Parser;

use crate::cmd::Command;
use crate::logging::{init_logging, LogFormat, LogLevel};
use crate::output::OutputFormat;

#[derive(Parser, Debug)]
#[command(name = "motorlink", version, about = "Motor controller property bus CLI")]
struct Cli {
    /// Output format.
    #[arg(long, value_name = "FORMAT", global = true)]
    format: Option<OutputFormat>,

    /// Log output format (stderr).
    #[arg(long, value_name = "FORMAT", default_value = "text", global = true)]
    log_format: LogFormat,

    /// Minimum log level (stderr).
    #[arg(long, value_name = "LEVEL", default_value = "warn", global = true)]
    log_level: LogLevel,

    #[command(subcommand)]
    command: Command,
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.log_format, cli.log_level);

    let format = cli.format.unwrap_or_else(OutputFormat::default_for_stdout);
    let result = cmd::run(cli.command, format);

    match result {
        Ok(code) => std::process::exit(code),
        Err(err) => {
            eprintln!("error: {err}");
            std::process::exit(err.code);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_read_subcommand() {
        let cli = Cli::try_parse_from(["motorlink", "read", "vbus_voltage", "--sim"])
            .expect("read args should parse");
        assert!(matches!(cli.command, Command::Read(_)));
    }

    #[test]
    fn parses_write_with_device_selector() {
        let cli = Cli::try_parse_from([
            "motorlink",
            "write",
            "axis0.controller.vel_setpoint",
            "10000",
            "--sim",
            "--device",
            "3",
        ])
        .expect("write args should parse");

        match cli.command {
            Command::Write(args) => assert_eq!(args.bus.device, 3),
            other => panic!("expected write command, got {other:?}"),
        }
    }

    #[test]
    fn rejects_bus_and_sim_together() {
        let err = Cli::try_parse_from([
            "motorlink",
            "read",
            "vbus_voltage",
            "--sim",
            "--bus",
            "/dev/i2c-1",
        ])
        .expect_err("conflicting bus args should fail");
        assert_eq!(err.kind(), clap::error::ErrorKind::ArgumentConflict);
    }

    #[test]
    fn parses_watch_interval() {
        let cli = Cli::try_parse_from([
            "motorlink",
            "watch",
            "axis0.encoder.vel_estimate",
            "--sim",
            "--interval",
            "250ms",
        ])
        .expect("watch args should parse");
        assert!(matches!(cli.command, Command::Watch(_)));
    }
}
