//! Error type shared by trace ingestion, configuration and the simulation engine.

use std::path::PathBuf;
use thiserror::Error;
use validator::ValidationErrors;

#[derive(Debug, Error)]
pub enum SimError {
    /// A raw category code outside Arrival/Departure/Dropped.
    #[error("invalid packet event category {0}")]
    InvalidCategory(u8),

    #[error("invalid event time {0}: must be finite and non-negative")]
    InvalidTime(f64),

    #[error("invalid packet size 0: must be positive")]
    InvalidSize,

    /// A trace line that does not parse into a time/size pair.
    #[error("{source_name}:{line}: malformed trace record: {reason}")]
    MalformedTrace {
        source_name: String,
        line: usize,
        reason: String,
    },

    #[error("failed to read trace {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid configuration: {0}")]
    InvalidConfig(#[from] ValidationErrors),

    /// The engine popped a departure but no packet is waiting to be served.
    #[error("departure for packet {0} with an empty buffer")]
    EmptyBuffer(u64),
}
