//! Report plugin trait for the socket correlation tool
use std::path::{Path, PathBuf};

use crate::error::ScanError;
use crate::net::table::Protocol;
use crate::report::{TcpReport, UdpReport};

/// Where one snapshot comes from: the target process and the proc
/// filesystem root. The root is a parameter so tests can point the scan at a
/// synthetic tree; the CLI always uses /proc.
pub struct ScanContext {
    pub pid: u32,
    pub proc_root: PathBuf,
}

impl ScanContext {
    pub fn new(pid: u32) -> Self {
        Self {
            pid,
            proc_root: PathBuf::from("/proc"),
        }
    }

    pub fn with_proc_root(pid: u32, proc_root: &Path) -> Self {
        Self {
            pid,
            proc_root: proc_root.to_path_buf(),
        }
    }

    /// Path of one protocol's connection table.
    pub fn table_path(&self, protocol: Protocol) -> PathBuf {
        self.proc_root.join("net").join(protocol.table_name())
    }
}

/// Output from report plugins
pub enum ReportOutput {
    Tcp(TcpReport),
    Udp(UdpReport),
}

/// Trait that all socket report plugins implement
pub trait SocketReport {
    /// Get the name of the report
    fn name(&self) -> &str;

    /// Get a description of what the report shows
    fn description(&self) -> &str;

    /// Take one snapshot and produce the aggregated report
    fn run(&self, context: &ScanContext) -> Result<ReportOutput, ScanError>;
}
