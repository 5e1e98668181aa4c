use std::fmt;

/// Running counters owned by the engine for the duration of a run.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SimulationStats {
    pub time: f64,
    pub queueing_delay: f64,
    pub packets_in: u64,
    pub packets_out: u64,
    pub packets_lost: u64,
}

impl SimulationStats {
    pub fn report(&self) -> Report {
        Report::from(self)
    }
}

/// Final QoS figures. Ratios with a zero denominator are reported as 0.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Report {
    pub time: f64,
    pub packets_in: u64,
    pub packets_out: u64,
    pub packets_lost: u64,
    pub loss_percentage: f64,
    pub average_queueing_delay: f64,
}

impl<'a> From<&'a SimulationStats> for Report {
    fn from(stats: &'a SimulationStats) -> Self {
        let loss_percentage = if stats.packets_in == 0 {
            0.
        } else {
            stats.packets_lost as f64 / stats.packets_in as f64 * 100.
        };
        let average_queueing_delay = if stats.packets_out == 0 {
            0.
        } else {
            stats.queueing_delay / stats.packets_out as f64
        };
        Report {
            time: stats.time,
            packets_in: stats.packets_in,
            packets_out: stats.packets_out,
            packets_lost: stats.packets_lost,
            loss_percentage,
            average_queueing_delay,
        }
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "time = {:.6}", self.time)?;
        writeln!(f, "packets_in = {}", self.packets_in)?;
        writeln!(f, "packets_out = {}", self.packets_out)?;
        writeln!(f, "packets_lost = {}", self.packets_lost)?;
        writeln!(f, "lost_packets = {:.6}%", self.loss_percentage)?;
        write!(f, "Average queueing delay = {:.6} seconds", self.average_queueing_delay)
    }
}
