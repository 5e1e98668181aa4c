//! Discrete-event simulation of a single bottleneck link (e.g. a WLAN access
//! point) fed by packet arrival traces, reporting loss rate and average
//! queueing delay under a finite drop-tail buffer.

pub mod cli;
pub mod config;
pub mod error;
pub mod helpers;
pub mod logging;
pub mod queues;
pub mod stats;

pub use config::LinkConfig;
pub use error::SimError;
pub use queues::bottleneck::BottleneckLink;
pub use queues::event::{Category, Event};
pub use queues::trace_generator::TraceGenerator;
pub use stats::{Report, SimulationStats};

/// Loads every trace in order and runs the link to completion.
pub fn simulate<P: AsRef<std::path::Path>>(config: LinkConfig, traces: &[P]) -> Result<Report, SimError> {
    let arrivals = TraceGenerator::from_files(traces)?.into_arrivals();
    BottleneckLink::with_arrivals(config, arrivals).run()
}
