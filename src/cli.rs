//! Command-line arguments for the link simulator.

use std::path::PathBuf;

use clap::Parser;

use crate::config::LinkConfig;
use crate::error::SimError;

/// Simulates a single bottleneck link serving packets from arrival traces and
/// reports packet loss and average queueing delay.
#[derive(Parser, Debug, Clone)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Buffer capacity, in packets
    #[arg(value_name = "BUFFER")]
    pub buffer_capacity: usize,

    /// Link bandwidth, in Mbit/s
    #[arg(value_name = "BANDWIDTH")]
    pub bandwidth_mbps: u64,

    /// Trace files of `<arrival-time> <size-in-bytes>` lines, read in order
    #[arg(value_name = "TRACE")]
    pub traces: Vec<PathBuf>,

    /// Verbose level
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl Cli {
    pub fn link_config(&self) -> Result<LinkConfig, SimError> {
        LinkConfig::from_megabits(self.buffer_capacity, self.bandwidth_mbps)
    }
}
