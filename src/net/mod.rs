//! Data model for kernel connection-table snapshots
use std::collections::HashMap;
use std::net::Ipv4Addr;

use serde::Serialize;

pub mod addr;
pub mod table;

/// Kernel socket inode, the join key between a process's fd table and the
/// global per-protocol connection tables. Only unique at a point in time;
/// inodes are reused after socket close.
pub type SocketInode = u64;

/// One side of a connection: IPv4 address plus port.
#[derive(Debug, Serialize, Clone, Copy, PartialEq, Eq)]
pub struct EndpointAddress {
    pub ip: Ipv4Addr,
    pub port: u16,
}

impl std::fmt::Display for EndpointAddress {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}:{}", self.ip, self.port)
    }
}

/// One row of a connection table. The protocol is implied by which table the
/// record came from and is not stored here.
#[derive(Debug, Serialize, Clone, PartialEq, Eq)]
pub struct ConnectionRecord {
    pub local: EndpointAddress,
    pub remote: EndpointAddress,
    pub inode: SocketInode,
}

/// One protocol's connection table, parsed from a single snapshot read.
/// Records are kept in table-scan order; built once, read-only thereafter.
#[derive(Debug, Default, Clone)]
pub struct ConnectionTable {
    records: Vec<ConnectionRecord>,
}

impl ConnectionTable {
    pub fn new(records: Vec<ConnectionRecord>) -> Self {
        Self { records }
    }

    /// All parsed rows, in table-scan order.
    pub fn records(&self) -> &[ConnectionRecord] {
        &self.records
    }

    /// Inode lookup view. The kernel does not duplicate an inode within one
    /// table, so last-write-wins collapsing loses nothing.
    pub fn by_inode(&self) -> HashMap<SocketInode, &ConnectionRecord> {
        self.records.iter().map(|r| (r.inode, r)).collect()
    }

    /// Number of rows parsed from the table, system-wide.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
