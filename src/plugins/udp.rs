//! UDP report plugin - lists a process's sockets grouped by local port
use crate::error::ScanError;
use crate::net::table::{read_table, Protocol};
use crate::net::ConnectionTable;
use crate::plugins::plugin_trait::{ReportOutput, ScanContext, SocketReport};
use crate::proc::{scan_fds, ProcessSocketSet};
use crate::report::{PortCount, UdpReport};

pub struct UdpReportPlugin;

impl SocketReport for UdpReportPlugin {
    fn name(&self) -> &str {
        "udp"
    }

    fn description(&self) -> &str {
        "List UDP sockets grouped by local port"
    }

    fn run(&self, context: &ScanContext) -> Result<ReportOutput, ScanError> {
        let inodes = scan_fds(context.pid, &context.proc_root)?;
        if inodes.is_empty() {
            // No sockets at all: report zero records without touching the table
            return Ok(ReportOutput::Udp(UdpReport::default()));
        }
        let table = read_table(&context.table_path(Protocol::Udp))?;
        Ok(ReportOutput::Udp(aggregate(&inodes, &table)))
    }
}

/// Collect the table rows whose inode belongs to the process, in table-scan
/// order, then derive per-local-port counts sorted descending (stable, so
/// ties keep first-seen order). The detail list itself is never reordered.
pub fn aggregate(inodes: &ProcessSocketSet, table: &ConnectionTable) -> UdpReport {
    let entries: Vec<_> = table
        .records()
        .iter()
        .filter(|r| inodes.contains(&r.inode))
        .cloned()
        .collect();

    let mut ports: Vec<PortCount> = Vec::new();
    for entry in &entries {
        match ports.iter_mut().find(|p| p.local_port == entry.local.port) {
            Some(row) => row.sockets += 1,
            None => ports.push(PortCount {
                local_port: entry.local.port,
                sockets: 1,
            }),
        }
    }
    ports.sort_by(|a, b| b.sockets.cmp(&a.sockets));

    UdpReport { ports, entries }
}
