//! Command-line argument parsing for the socket correlation tool
use clap::{Parser, Subcommand, ValueEnum};

#[derive(Parser)]
#[command(name = "pidsock")]
#[command(about = "Per-process socket correlation tool", long_about = None)]
pub struct Cli {
    /// Target process ID
    #[arg(value_name = "PID")]
    pub pid: u32,

    /// Report to run
    #[command(subcommand)]
    pub report: Option<ReportCommand>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "text")]
    pub format: OutputFormatArg,

    /// Output file (default: stdout)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<std::path::PathBuf>,

    /// Enable verbose output (skipped rows, skipped descriptors)
    #[arg(short, long)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum ReportCommand {
    /// Count TCP sockets per remote IP
    Tcp,

    /// List UDP sockets grouped by local port
    Udp,
}

#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, ValueEnum)]
pub enum OutputFormatArg {
    Text,
    Csv,
    Json,
    Jsonl,
}
