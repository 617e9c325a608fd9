//! Aggregate result types shared by the report plugins and formatters
use std::net::Ipv4Addr;

use serde::Serialize;

use crate::net::ConnectionRecord;

/// Number of a process's TCP sockets connected to one remote IP, port
/// ignored.
#[derive(Debug, Serialize, Clone, PartialEq, Eq)]
pub struct RemoteCount {
    pub remote_ip: Ipv4Addr,
    pub sockets: usize,
}

/// TCP-mode result: per-remote-IP socket counts for the target process.
///
/// `total_sockets` is the number of rows in the system-wide table, not the
/// number belonging to the target process. The asymmetry is intentional: it
/// is a scale indicator for the whole host, reported alongside the
/// per-process breakdown.
#[derive(Debug, Serialize, Clone, Default, PartialEq, Eq)]
pub struct TcpReport {
    pub remotes: Vec<RemoteCount>,
    pub total_sockets: usize,
}

/// Number of a process's UDP sockets bound to one local port.
#[derive(Debug, Serialize, Clone, PartialEq, Eq)]
pub struct PortCount {
    pub local_port: u16,
    pub sockets: usize,
}

/// UDP-mode result: per-local-port counts plus the full matched-record list.
/// `entries` preserves table-scan order for detailed display.
#[derive(Debug, Serialize, Clone, Default, PartialEq, Eq)]
pub struct UdpReport {
    pub ports: Vec<PortCount>,
    pub entries: Vec<ConnectionRecord>,
}
