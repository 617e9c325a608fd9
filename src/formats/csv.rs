//! CSV output formatter for the socket correlation tool
use csv::Writer;

use crate::error::ScanError;
use crate::formats::traits::OutputFormatter;
use crate::report::{TcpReport, UdpReport};

/// CSV formatter that outputs data in comma-separated values format
pub struct CsvFormatter;

impl OutputFormatter for CsvFormatter {
    fn format_tcp(&self, report: &TcpReport) -> Result<String, ScanError> {
        let mut wtr = Writer::from_writer(vec![]);

        // Write header
        wtr.write_record(["remote_ip", "sockets", "total_sockets"])?;

        // Write data rows; the system-wide total repeats per row so each row
        // is self-contained
        for row in &report.remotes {
            wtr.write_record(&[
                row.remote_ip.to_string(),
                row.sockets.to_string(),
                report.total_sockets.to_string(),
            ])?;
        }

        wtr.flush()?;
        let data = wtr.into_inner()?;
        Ok(String::from_utf8(data)?)
    }

    fn format_udp(&self, report: &UdpReport) -> Result<String, ScanError> {
        let mut wtr = Writer::from_writer(vec![]);

        // Write header
        wtr.write_record([
            "local_ip",
            "local_port",
            "remote_ip",
            "remote_port",
            "inode",
        ])?;

        // Write data rows in table-scan order
        for entry in &report.entries {
            wtr.write_record(&[
                entry.local.ip.to_string(),
                entry.local.port.to_string(),
                entry.remote.ip.to_string(),
                entry.remote.port.to_string(),
                entry.inode.to_string(),
            ])?;
        }

        wtr.flush()?;
        let data = wtr.into_inner()?;
        Ok(String::from_utf8(data)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::report::RemoteCount;
    use std::net::Ipv4Addr;

    #[test]
    fn tcp_rows_carry_the_total() {
        let report = TcpReport {
            remotes: vec![RemoteCount {
                remote_ip: Ipv4Addr::new(1, 2, 3, 4),
                sockets: 2,
            }],
            total_sockets: 9,
        };

        let out = CsvFormatter.format_tcp(&report).unwrap();
        assert_eq!(out, "remote_ip,sockets,total_sockets\n1.2.3.4,2,9\n");
    }

    #[test]
    fn udp_with_no_entries_is_header_only() {
        let out = CsvFormatter.format_udp(&UdpReport::default()).unwrap();
        assert_eq!(out, "local_ip,local_port,remote_ip,remote_port,inode\n");
    }
}
