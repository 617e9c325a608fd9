//! JSONL (JSON Lines) output formatter for the socket correlation tool
use crate::error::ScanError;
use crate::formats::traits::OutputFormatter;
use crate::report::{TcpReport, UdpReport};

/// JSONL formatter that outputs data as JSON objects, one per line
pub struct JsonlFormatter;

impl OutputFormatter for JsonlFormatter {
    fn format_tcp(&self, report: &TcpReport) -> Result<String, ScanError> {
        let mut output = String::new();

        for row in &report.remotes {
            let line = serde_json::to_string(row)?;
            output.push_str(&line);
            output.push('\n');
        }

        Ok(output)
    }

    fn format_udp(&self, report: &UdpReport) -> Result<String, ScanError> {
        let mut output = String::new();

        for entry in &report.entries {
            let line = serde_json::to_string(entry)?;
            output.push_str(&line);
            output.push('\n');
        }

        Ok(output)
    }
}
