//! Full-pipeline tests over a synthetic proc root
use std::fs;
use std::os::unix::fs::symlink;
use std::path::Path;

use pidsock::error::ScanError;
use pidsock::plugins::plugin_trait::{ReportOutput, ScanContext, SocketReport};
use pidsock::plugins::{TcpReportPlugin, UdpReportPlugin};

const TABLE_HEADER: &str = "  sl  local_address rem_address   st tx_queue rx_queue tr tm->when retrnsmt   uid  timeout inode";

/// Lay out `<root>/<pid>/fd` symlinks and `<root>/net/<table>` contents.
fn fake_proc(root: &Path, pid: u32, fd_targets: &[&str], table: &str, rows: &[String]) {
    let fd_dir = root.join(pid.to_string()).join("fd");
    fs::create_dir_all(&fd_dir).unwrap();
    for (i, target) in fd_targets.iter().enumerate() {
        symlink(target, fd_dir.join(i.to_string())).unwrap();
    }

    let net_dir = root.join("net");
    fs::create_dir_all(&net_dir).unwrap();
    let mut contents = String::from(TABLE_HEADER);
    for row in rows {
        contents.push('\n');
        contents.push_str(row);
    }
    contents.push('\n');
    fs::write(net_dir.join(table), contents).unwrap();
}

fn table_row(local: &str, remote: &str, inode: u64) -> String {
    format!(
        "   0: {} {} 01 00000000:00000000 00:00000000 00000000  1000        0 {} 1 0000000000000000 20 4 30 10 -1",
        local, remote, inode
    )
}

#[test]
fn tcp_report_counts_per_remote_ip() {
    let root = tempfile::tempdir().unwrap();
    // two sockets to 10.1.2.3, one to 8.8.8.8, one row owned by another process
    fake_proc(
        root.path(),
        42,
        &["socket:[100]", "socket:[101]", "socket:[102]", "pipe:[9]"],
        "tcp",
        &[
            table_row("0100007F:A000", "0302010A:0050", 100),
            table_row("0100007F:A001", "0302010A:01BB", 101),
            table_row("0100007F:A002", "08080808:0035", 102),
            table_row("0100007F:A003", "08080808:0035", 999),
        ],
    );

    let context = ScanContext::with_proc_root(42, root.path());
    let report = match TcpReportPlugin.run(&context).unwrap() {
        ReportOutput::Tcp(report) => report,
        _ => panic!("expected TCP output"),
    };

    assert_eq!(report.total_sockets, 4);
    assert_eq!(report.remotes.len(), 2);
    assert_eq!(report.remotes[0].remote_ip.octets(), [10, 1, 2, 3]);
    assert_eq!(report.remotes[0].sockets, 2);
    assert_eq!(report.remotes[1].remote_ip.octets(), [8, 8, 8, 8]);
    assert_eq!(report.remotes[1].sockets, 1);
}

#[test]
fn udp_report_keeps_scan_order_detail() {
    let root = tempfile::tempdir().unwrap();
    fake_proc(
        root.path(),
        42,
        &["socket:[200]", "socket:[201]"],
        "udp",
        &[
            table_row("00000000:14E9", "00000000:0000", 201),
            table_row("00000000:14E9", "00000000:0000", 555),
            table_row("0100007F:0044", "0200007F:0043", 200),
        ],
    );

    let context = ScanContext::with_proc_root(42, root.path());
    let report = match UdpReportPlugin.run(&context).unwrap() {
        ReportOutput::Udp(report) => report,
        _ => panic!("expected UDP output"),
    };

    // scan order: inode 201 first, then 200; 555 belongs to another process
    let inodes: Vec<u64> = report.entries.iter().map(|e| e.inode).collect();
    assert_eq!(inodes, vec![201, 200]);
    assert_eq!(report.entries[0].local.port, 5353);
    assert_eq!(report.entries[1].local.port, 68);
    assert_eq!(report.ports.len(), 2);
}

#[test]
fn missing_tcp_table_reports_zero_total() {
    let root = tempfile::tempdir().unwrap();
    let fd_dir = root.path().join("42").join("fd");
    fs::create_dir_all(&fd_dir).unwrap();
    symlink("socket:[100]", fd_dir.join("0")).unwrap();

    let context = ScanContext::with_proc_root(42, root.path());
    match TcpReportPlugin.run(&context).unwrap() {
        ReportOutput::Tcp(report) => {
            assert!(report.remotes.is_empty());
            assert_eq!(report.total_sockets, 0);
        }
        _ => panic!("expected TCP output"),
    }
}

#[test]
fn unknown_pid_fails_with_process_not_found() {
    let root = tempfile::tempdir().unwrap();
    fs::create_dir_all(root.path().join("net")).unwrap();

    let context = ScanContext::with_proc_root(1234, root.path());
    match TcpReportPlugin.run(&context) {
        Err(ScanError::ProcessNotFound(1234)) => {}
        _ => panic!("expected ProcessNotFound"),
    }
}

#[test]
fn pipeline_is_idempotent_for_an_unchanged_snapshot() {
    let root = tempfile::tempdir().unwrap();
    fake_proc(
        root.path(),
        42,
        &["socket:[100]", "socket:[101]"],
        "tcp",
        &[
            table_row("0100007F:A000", "0302010A:0050", 100),
            table_row("0100007F:A001", "04030201:0050", 101),
        ],
    );

    let context = ScanContext::with_proc_root(42, root.path());
    let first = match TcpReportPlugin.run(&context).unwrap() {
        ReportOutput::Tcp(report) => report,
        _ => panic!("expected TCP output"),
    };
    let second = match TcpReportPlugin.run(&context).unwrap() {
        ReportOutput::Tcp(report) => report,
        _ => panic!("expected TCP output"),
    };
    assert_eq!(first, second);
}
