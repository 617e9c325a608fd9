//! Main entry point for the pidsock tool
use clap::Parser;

use pidsock::cli::args::{Cli, OutputFormatArg, ReportCommand};
use pidsock::error::ScanError;
use pidsock::formats::traits::{OutputDestination, OutputFormat, OutputWriter};
use pidsock::plugins::plugin_trait::{ScanContext, SocketReport};
use pidsock::plugins::{TcpReportPlugin, UdpReportPlugin};

fn main() {
    // clap's own usage errors exit 2; this tool's contract is exit 1
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            let _ = e.print();
            std::process::exit(1);
        }
    };

    env_logger::Builder::new()
        .filter_level(if cli.verbose {
            log::LevelFilter::Debug
        } else {
            log::LevelFilter::Warn
        })
        .init();

    if let Err(e) = run(&cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run(cli: &Cli) -> Result<(), ScanError> {
    let context = ScanContext::new(cli.pid);

    // Default report is tcp, matching the original tool
    let plugin: Box<dyn SocketReport> = match cli.report {
        Some(ReportCommand::Udp) => Box::new(UdpReportPlugin),
        Some(ReportCommand::Tcp) | None => Box::new(TcpReportPlugin),
    };
    log::debug!("running {} report for pid {}", plugin.name(), cli.pid);

    let output = plugin.run(&context)?;

    let output_format = match cli.format {
        OutputFormatArg::Text => OutputFormat::Text,
        OutputFormatArg::Csv => OutputFormat::Csv,
        OutputFormatArg::Json => OutputFormat::Json,
        OutputFormatArg::Jsonl => OutputFormat::Jsonl,
    };
    let output_dest = match &cli.output {
        Some(path) => OutputDestination::File(path.clone()),
        None => OutputDestination::Stdout,
    };

    let output_writer = OutputWriter::new(output_format, output_dest);
    output_writer.write_report(&output)?;

    Ok(())
}
