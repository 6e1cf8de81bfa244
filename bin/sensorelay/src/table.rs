use std::ops::Range;
use std::sync::Arc;

use log::trace;
use tokio::sync::Mutex;

use crate::{Error, Result};

#[derive(Clone, Debug, PartialEq)]
pub struct Reading {
    pub name: &'static str,
    pub server_id: u32,
    pub value: f64,
}

impl Reading {
    const fn new(name: &'static str, server_id: u32) -> Self {
        Self {
            name,
            server_id,
            value: 0.0,
        }
    }
}

/// Which poller owns a slice of the table.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Source {
    SenseHat,
    Airrohr,
}

impl Source {
    pub const fn range(self) -> Range<usize> {
        match self {
            Source::SenseHat => 0..3,
            Source::Airrohr => 3..9,
        }
    }
}

/// Current readings keyed by Domoticz device index.
///
/// Rows and their server ids are fixed at construction; pollers only ever
/// update values through a [`TableWriter`] bound to their [`Source`].
#[derive(Clone)]
pub struct Table {
    readings: Arc<Mutex<Vec<Reading>>>,
}

impl Table {
    pub fn new() -> Self {
        let readings = vec![
            Reading::new("temp_sh", 78),
            Reading::new("humidity_sh", 91),
            Reading::new("pressure_sh", 89),
            Reading::new("part1_sds011", 55),
            Reading::new("part2_sds011", 56),
            Reading::new("temp_dht", 77),
            Reading::new("humidity_dht", 90),
            Reading::new("pressure_bmp", 87),
            Reading::new("temp_bmp", 74),
        ];

        Self {
            readings: Arc::new(Mutex::new(readings)),
        }
    }

    pub fn writer(&self, source: Source) -> TableWriter {
        TableWriter {
            readings: self.readings.clone(),
            range: source.range(),
        }
    }

    pub async fn snapshot(&self) -> Vec<Reading> {
        self.readings.lock().await.clone()
    }
}

impl Default for Table {
    fn default() -> Self {
        Self::new()
    }
}

pub struct TableWriter {
    readings: Arc<Mutex<Vec<Reading>>>,
    range: Range<usize>,
}

impl TableWriter {
    /// Rounds `values` and stores them into the writer's rows, in order.
    /// Nothing is written unless exactly one value per row is given.
    pub async fn write(&self, values: &[f64]) -> Result<()> {
        if values.len() != self.range.len() {
            return Err(Error::ValueCount {
                expected: self.range.len(),
                actual: values.len(),
            });
        }

        let mut readings = self.readings.lock().await;

        for (reading, value) in readings[self.range.clone()].iter_mut().zip(values) {
            reading.value = round_to_hundredths(*value);
            trace!("{} = {}", reading.name, reading.value);
        }

        Ok(())
    }
}

/// Rounds half away from zero to two decimal places.
pub fn round_to_hundredths(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
