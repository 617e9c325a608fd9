//! Reader for the kernel's per-protocol connection tables
use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use crate::error::ScanError;
use crate::net::{addr, ConnectionRecord, ConnectionTable};

/// Field ordinals after whitespace-splitting a /proc/net/{tcp,udp} row.
/// These match the kernel's table layout: sl, local_address, rem_address,
/// st, tx_queue:rx_queue, tr:tm->when, retrnsmt, uid, timeout, inode, ...
const LOCAL_ADDR_FIELD: usize = 1;
const REMOTE_ADDR_FIELD: usize = 2;
const INODE_FIELD: usize = 9;
const MIN_FIELDS: usize = 10;

/// IPv4 protocols with a /proc/net connection table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Protocol {
    Tcp,
    Udp,
}

impl Protocol {
    /// Table file name under /proc/net.
    pub fn table_name(&self) -> &'static str {
        match self {
            Protocol::Tcp => "tcp",
            Protocol::Udp => "udp",
        }
    }
}

/// Read and parse one protocol's connection table into a fresh snapshot.
///
/// The first line is the column header and is discarded. Rows with fewer than
/// the required field count, or with unparseable address/inode tokens, are
/// skipped rather than failing the whole snapshot. A missing table file is a
/// normal condition (protocol disabled, sandboxed /proc) and yields an empty
/// table; any other I/O failure propagates.
pub fn read_table(path: &Path) -> Result<ConnectionTable, ScanError> {
    let contents = match fs::read_to_string(path) {
        Ok(c) => c,
        Err(e) if e.kind() == ErrorKind::NotFound => return Ok(ConnectionTable::default()),
        Err(e) => return Err(e.into()),
    };

    let mut records = Vec::new();
    for line in contents.lines().skip(1) {
        let fields: Vec<&str> = line.split_whitespace().collect();
        if fields.len() < MIN_FIELDS {
            continue;
        }

        let local = match addr::decode(fields[LOCAL_ADDR_FIELD]) {
            Ok(ep) => ep,
            Err(e) => {
                log::debug!("skipping row in {}: {}", path.display(), e);
                continue;
            }
        };
        let remote = match addr::decode(fields[REMOTE_ADDR_FIELD]) {
            Ok(ep) => ep,
            Err(e) => {
                log::debug!("skipping row in {}: {}", path.display(), e);
                continue;
            }
        };
        let inode = match fields[INODE_FIELD].parse() {
            Ok(inode) => inode,
            Err(_) => {
                log::debug!(
                    "skipping row in {}: bad inode {:?}",
                    path.display(),
                    fields[INODE_FIELD]
                );
                continue;
            }
        };

        records.push(ConnectionRecord {
            local,
            remote,
            inode,
        });
    }

    Ok(ConnectionTable::new(records))
}
