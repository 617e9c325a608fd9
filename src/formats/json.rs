//! JSON output formatter for the socket correlation tool
use serde::Serialize;

use crate::error::ScanError;
use crate::formats::traits::OutputFormatter;
use crate::report::{TcpReport, UdpReport};

#[derive(Serialize)]
struct OutputWrapper<T: Serialize> {
    report: String,
    timestamp: String,
    count: usize,
    results: T,
}

/// JSON formatter that outputs data in JSON format with metadata
pub struct JsonFormatter;

impl OutputFormatter for JsonFormatter {
    fn format_tcp(&self, report: &TcpReport) -> Result<String, ScanError> {
        let wrapper = OutputWrapper {
            report: "tcp".to_string(),
            timestamp: chrono::Utc::now().to_rfc3339(),
            count: report.remotes.len(),
            results: report,
        };

        let json = serde_json::to_string_pretty(&wrapper)?;
        Ok(json)
    }

    fn format_udp(&self, report: &UdpReport) -> Result<String, ScanError> {
        let wrapper = OutputWrapper {
            report: "udp".to_string(),
            timestamp: chrono::Utc::now().to_rfc3339(),
            count: report.entries.len(),
            results: report,
        };

        let json = serde_json::to_string_pretty(&wrapper)?;
        Ok(json)
    }
}
