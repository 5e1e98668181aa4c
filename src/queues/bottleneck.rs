use ordered_float::NotNan;
use std::collections::HashSet;

use tracing::{debug, info, trace};

use crate::config::LinkConfig;
use crate::error::SimError;
use crate::queues::drop_tail::DropTailBuffer;
use crate::queues::event::{Category, Event};
use crate::queues::pending::PendingEvents;
use crate::stats::{Report, SimulationStats};

/// A single link serving packets first-come-first-served out of a drop-tail buffer.
///
/// Arrivals are loaded once; `step` then pops one event at a time and may push
/// derived events (a drop, or the departure of the buffer head) back into the
/// same pending structure. The run is over when nothing is pending.
pub struct BottleneckLink {
    config: LinkConfig,
    pending: PendingEvents,
    buffer: DropTailBuffer,
    // Buffered packets whose departure has already been generated.
    scheduled: HashSet<u64>,
    stats: SimulationStats,
}

impl BottleneckLink {
    pub fn new(config: LinkConfig) -> Self {
        BottleneckLink {
            config,
            pending: PendingEvents::new(),
            buffer: DropTailBuffer::new(config.buffer_capacity),
            scheduled: HashSet::new(),
            stats: SimulationStats::default(),
        }
    }

    pub fn with_arrivals<I>(config: LinkConfig, arrivals: I) -> Self where I: IntoIterator<Item = Event> {
        let mut ret = BottleneckLink::new(config);
        ret.load(arrivals);
        ret
    }

    pub fn load<I>(&mut self, arrivals: I) where I: IntoIterator<Item = Event> {
        self.pending.extend(arrivals);
    }

    /// Processes the next pending event and returns it, or `None` once drained.
    pub fn step(&mut self) -> Result<Option<Event>, SimError> {
        let event = match self.pending.extract_min() {
            Some(e) => e,
            None => return Ok(None),
        };
        debug!(id = event.get_id(), category = ?event.get_category(), time = event.get_time(),
               clock = self.stats.time, "event");

        match event.get_category() {
            Category::Arrival | Category::Dropped => self.handle(&event)?,
            Category::Departure => self.depart(&event)?,
        }
        self.schedule_head()?;

        Ok(Some(event))
    }

    pub fn run(&mut self) -> Result<Report, SimError> {
        info!(capacity = self.config.buffer_capacity, bandwidth_bps = self.config.bandwidth_bps,
              pending = self.pending.len(), "starting simulation");
        while self.step()?.is_some() {}

        let report = self.stats.report();
        info!(time = report.time, packets_in = report.packets_in, packets_out = report.packets_out,
              packets_lost = report.packets_lost, "simulation finished");
        Ok(report)
    }

    fn now(&self) -> Result<NotNan<f64>, SimError> {
        NotNan::new(self.stats.time).map_err(|_| SimError::InvalidTime(self.stats.time))
    }

    // Arrival and Dropped handling, shared by the main loop and the drain performed
    // during a transmission.
    fn handle(&mut self, event: &Event) -> Result<(), SimError> {
        match event.get_category() {
            Category::Arrival => {
                self.stats.packets_in += 1;
                if self.buffer.has_space() {
                    self.buffer.admit(event.clone());
                } else {
                    // A drop is observed now, not at the packet's own arrival time.
                    let dropped = event.derive(self.now()?, Category::Dropped);
                    self.pending.insert(dropped);
                }
            },
            Category::Dropped => {
                self.stats.packets_lost += 1;
            },
            Category::Departure => unreachable!("departures are never handled out of order"),
        }
        Ok(())
    }

    fn depart(&mut self, event: &Event) -> Result<(), SimError> {
        let head_time = match self.buffer.peek_head() {
            Some(head) => head.get_time(),
            None => return Err(SimError::EmptyBuffer(event.get_id())),
        };

        self.stats.packets_out += 1;
        self.stats.queueing_delay += self.stats.time - head_time;
        self.stats.time += self.config.transmission_delay(event.get_size());
        if !self.stats.time.is_finite() {
            return Err(SimError::InvalidTime(self.stats.time));
        }

        // Whatever arrived or was dropped while the packet was on the link.
        loop {
            let due = match self.pending.peek_min() {
                Some(next) => next.get_category() != Category::Departure && next.get_time() <= self.stats.time,
                None => false,
            };
            if !due {
                break;
            }
            if let Some(next) = self.pending.extract_min() {
                trace!(id = next.get_id(), category = ?next.get_category(), time = next.get_time(), "during transmission");
                self.handle(&next)?;
            }
        }

        if let Some(served) = self.buffer.serve_head() {
            self.scheduled.remove(&served.get_id());
        }
        Ok(())
    }

    fn schedule_head(&mut self) -> Result<(), SimError> {
        let head = match self.buffer.peek_head() {
            Some(head) => head.clone(),
            None => return Ok(()),
        };

        // Link idle: jump to the head's arrival unless something happens first.
        let nothing_before_head = match self.pending.peek_min() {
            Some(next) => next.get_time() >= head.get_time(),
            None => true,
        };
        if self.stats.time < head.get_time() && nothing_before_head {
            self.stats.time = head.get_time();
        }

        if self.stats.time >= head.get_time() && self.scheduled.insert(head.get_id()) {
            let departure = head.derive(self.now()?, Category::Departure);
            self.pending.insert(departure);
        }
        Ok(())
    }

    pub fn clock(&self) -> f64 {
        self.stats.time
    }

    pub fn stats(&self) -> &SimulationStats {
        &self.stats
    }

    pub fn buffered(&self) -> usize {
        self.buffer.len()
    }

    pub fn space_left(&self) -> usize {
        self.buffer.space_left()
    }

    pub fn capacity(&self) -> usize {
        self.buffer.capacity()
    }

    pub fn pending(&self) -> usize {
        self.pending.len()
    }

    /// Departures generated but not yet processed; never more than one.
    pub fn outstanding_departures(&self) -> usize {
        self.scheduled.len()
    }

    pub fn is_done(&self) -> bool {
        self.pending.is_empty()
    }
}
