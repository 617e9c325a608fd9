//! Output format traits for the socket correlation tool
use crate::error::ScanError;
use crate::plugins::plugin_trait::ReportOutput;
use crate::report::{TcpReport, UdpReport};

/// Trait for output formatters
pub trait OutputFormatter {
    fn format_tcp(&self, report: &TcpReport) -> Result<String, ScanError>;
    fn format_udp(&self, report: &UdpReport) -> Result<String, ScanError>;
}

/// Enum for output format types
#[derive(Debug, Clone, PartialEq)]
pub enum OutputFormat {
    Text,
    Csv,
    Json,
    Jsonl,
}

/// Enum for output destination
#[derive(Debug, Clone)]
pub enum OutputDestination {
    Stdout,
    File(std::path::PathBuf),
}

/// Output writer that combines format and destination
pub struct OutputWriter {
    formatter: Box<dyn OutputFormatter>,
    destination: OutputDestination,
}

impl OutputWriter {
    /// Create a new output writer
    pub fn new(format: OutputFormat, destination: OutputDestination) -> Self {
        let formatter: Box<dyn OutputFormatter> = match format {
            OutputFormat::Text => Box::new(crate::formats::text::TextFormatter),
            OutputFormat::Csv => Box::new(crate::formats::csv::CsvFormatter),
            OutputFormat::Json => Box::new(crate::formats::json::JsonFormatter),
            OutputFormat::Jsonl => Box::new(crate::formats::jsonl::JsonlFormatter),
        };

        Self {
            formatter,
            destination,
        }
    }

    /// Write a report to the configured destination
    pub fn write_report(&self, output: &ReportOutput) -> Result<(), ScanError> {
        let content = match output {
            ReportOutput::Tcp(report) => self.formatter.format_tcp(report)?,
            ReportOutput::Udp(report) => self.formatter.format_udp(report)?,
        };

        match &self.destination {
            OutputDestination::Stdout => {
                println!("{}", content);
            }
            OutputDestination::File(path) => {
                std::fs::write(path, content)?;
            }
        }

        Ok(())
    }
}
