use ordered_float::NotNan;

use crate::error::SimError;

/// What happened to a packet. The declaration order is the tie-break rank used
/// when two events share a timestamp: arrivals are seen before departures,
/// departures before drops.
#[derive(PartialEq, Eq, PartialOrd, Ord, Clone, Copy, Debug, Hash)]
pub enum Category {
    Arrival = 0,
    Departure = 1,
    Dropped = 2,
}

impl Category {
    pub fn rank(self) -> u8 {
        self as u8
    }
}

impl TryFrom<u8> for Category {
    type Error = SimError;

    fn try_from(code: u8) -> Result<Self, SimError> {
        match code {
            0 => Ok(Category::Arrival),
            1 => Ok(Category::Departure),
            2 => Ok(Category::Dropped),
            other => Err(SimError::InvalidCategory(other)),
        }
    }
}

#[derive(PartialEq, Clone, Debug)]
pub struct Event {
    id: u64,
    size: u64,
    time: NotNan<f64>,
    category: Category,
}

impl Event {
    pub fn new (id: u64, time: f64, size: u64, category: Category) -> Result<Self, SimError> {
        if !time.is_finite() || time < 0. {
            return Err(SimError::InvalidTime(time));
        }
        if size == 0 {
            return Err(SimError::InvalidSize);
        }
        let time = NotNan::new(time).map_err(|_| SimError::InvalidTime(time))?;
        Ok(Event { id, size, time, category })
    }

    pub fn arrival (id: u64, time: f64, size: u64) -> Result<Self, SimError> {
        Event::new(id, time, size, Category::Arrival)
    }

    /// Same packet, new category, observed at `time`.
    pub fn derive (&self, time: NotNan<f64>, category: Category) -> Self {
        Event { time, category, ..self.clone() }
    }

    pub fn get_id(&self) -> u64 {
        self.id
    }

    pub fn get_size(&self) -> u64 {
        self.size
    }

    pub fn get_time(&self) -> f64 {
        self.time.into_inner()
    }

    pub fn time_key(&self) -> NotNan<f64> {
        self.time
    }

    pub fn get_category(&self) -> Category {
        self.category
    }
}
