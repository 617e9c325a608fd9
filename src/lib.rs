//! Library crate for pidsock, a per-process socket correlation tool

pub mod error;
pub mod net;
pub mod proc;
pub mod report;

// CLI modules
pub mod cli {
    pub mod args;
}

// Report plugin modules
pub mod plugins {
    pub mod plugin_trait;
    pub mod tcp;
    pub mod udp;

    pub use tcp::TcpReportPlugin;
    pub use udp::UdpReportPlugin;
}

// Format modules
pub mod formats {
    pub mod csv;
    pub mod json;
    pub mod jsonl;
    pub mod text;
    pub mod traits;
}
