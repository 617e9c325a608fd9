//! Plain-text output formatter, the tool's default rendering
use std::fmt::Write;

use crate::error::ScanError;
use crate::formats::traits::OutputFormatter;
use crate::report::{TcpReport, UdpReport};

/// Text formatter producing the classic netstat-style listing
pub struct TextFormatter;

impl OutputFormatter for TextFormatter {
    fn format_tcp(&self, report: &TcpReport) -> Result<String, ScanError> {
        let mut out = String::new();

        for row in &report.remotes {
            // write! into a String cannot fail
            let _ = writeln!(out, "{:6} {}", row.sockets, row.remote_ip);
        }
        let _ = writeln!(out, "Total sockets: {}", report.total_sockets);

        Ok(out)
    }

    fn format_udp(&self, report: &UdpReport) -> Result<String, ScanError> {
        let mut out = String::new();

        let _ = writeln!(out, "Total UDP IPv4 sockets: {}\n", report.entries.len());

        let _ = writeln!(out, "Counts per local UDP port:");
        for row in &report.ports {
            let _ = writeln!(out, "{:4}  port {}", row.sockets, row.local_port);
        }

        let _ = writeln!(out, "\nDetailed entries:");
        for entry in &report.entries {
            let _ = writeln!(out, "{} -> {}", entry.local, entry.remote);
        }

        Ok(out)
    }
}
