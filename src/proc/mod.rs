//! Enumeration of a process's socket-backed file descriptors
use std::collections::BTreeSet;
use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use crate::error::ScanError;
use crate::net::SocketInode;

/// Set of socket inodes held open by one process at snapshot time. Ordered so
/// that downstream aggregation iterates deterministically.
pub type ProcessSocketSet = BTreeSet<SocketInode>;

/// Collect the socket inodes behind a process's open file descriptors.
///
/// Walks `<proc_root>/<pid>/fd` and resolves each entry's symlink target.
/// Targets of the form `socket:[<digits>]` contribute their inode; pipes,
/// regular files, terminals and dangling links are ignored. A descriptor that
/// vanishes between listing and readlink (the process is closing fds under
/// us) is skipped, as is one we lack permission to resolve. An absent fd
/// directory means the process itself does not exist, which is fatal.
pub fn scan_fds(pid: u32, proc_root: &Path) -> Result<ProcessSocketSet, ScanError> {
    let fd_dir = proc_root.join(pid.to_string()).join("fd");

    let entries = match fs::read_dir(&fd_dir) {
        Ok(entries) => entries,
        Err(e) if e.kind() == ErrorKind::NotFound => return Err(ScanError::ProcessNotFound(pid)),
        Err(e) => return Err(e.into()),
    };

    let mut inodes = ProcessSocketSet::new();
    for entry in entries {
        let entry = match entry {
            Ok(entry) => entry,
            Err(_) => continue,
        };
        let target = match fs::read_link(entry.path()) {
            Ok(target) => target,
            Err(e) => {
                log::debug!("skipping fd {}: {}", entry.path().display(), e);
                continue;
            }
        };
        if let Some(inode) = socket_inode(&target.to_string_lossy()) {
            inodes.insert(inode);
        }
    }

    Ok(inodes)
}

/// Parse an fd symlink target against the fixed `socket:[<digits>]` grammar.
pub fn socket_inode(target: &str) -> Option<SocketInode> {
    let digits = target.strip_prefix("socket:[")?.strip_suffix(']')?;
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    digits.parse().ok()
}
