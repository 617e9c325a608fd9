//! TCP report plugin - counts a process's sockets per remote IP
use crate::error::ScanError;
use crate::net::table::{read_table, Protocol};
use crate::net::ConnectionTable;
use crate::plugins::plugin_trait::{ReportOutput, ScanContext, SocketReport};
use crate::proc::{scan_fds, ProcessSocketSet};
use crate::report::{RemoteCount, TcpReport};

pub struct TcpReportPlugin;

impl SocketReport for TcpReportPlugin {
    fn name(&self) -> &str {
        "tcp"
    }

    fn description(&self) -> &str {
        "Count TCP sockets per remote IP"
    }

    fn run(&self, context: &ScanContext) -> Result<ReportOutput, ScanError> {
        let inodes = scan_fds(context.pid, &context.proc_root)?;
        // The table is read even when the process holds no sockets: the
        // system-wide total is reported either way.
        let table = read_table(&context.table_path(Protocol::Tcp))?;
        Ok(ReportOutput::Tcp(aggregate(&inodes, &table)))
    }
}

/// Join the process's socket inodes against the TCP table and count per
/// remote IP, port ignored. Inodes with no table entry belong to some other
/// protocol family and contribute nothing. Rows are sorted by count
/// descending; the sort is stable, so ties keep first-seen order.
pub fn aggregate(inodes: &ProcessSocketSet, table: &ConnectionTable) -> TcpReport {
    let by_inode = table.by_inode();

    let mut remotes: Vec<RemoteCount> = Vec::new();
    for inode in inodes {
        let record = match by_inode.get(inode) {
            Some(record) => record,
            None => continue,
        };
        match remotes.iter_mut().find(|r| r.remote_ip == record.remote.ip) {
            Some(row) => row.sockets += 1,
            None => remotes.push(RemoteCount {
                remote_ip: record.remote.ip,
                sockets: 1,
            }),
        }
    }
    remotes.sort_by(|a, b| b.sockets.cmp(&a.sockets));

    TcpReport {
        remotes,
        total_sockets: table.len(),
    }
}
