use std::path::PathBuf;
use std::time::Duration;

const REMOTE_DATA_URL: &str = "http://192.168.42.39/data.json";
const DOMOTICZ_URL: &str = "http://192.168.42.31:8080";
const IIO_DEVICES: &str = "/sys/bus/iio/devices";

pub const USAGE: &str = "wrong number of parameters. Needed is cycle time in seconds";

/// What the publisher does when one update of a batch fails.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum BatchPolicy {
    /// Drop the rest of the batch until the next cycle.
    #[default]
    AbortBatch,
    /// Keep sending the remaining rows.
    ContinueOnError,
}

#[derive(Clone, Debug)]
pub struct Config {
    pub cycle_time: Duration,
    pub remote_url: String,
    pub domoticz_url: String,
    pub iio_root: PathBuf,
    pub batch_policy: BatchPolicy,
}

impl Config {
    pub fn new(cycle_time: Duration) -> Self {
        Self {
            cycle_time,
            remote_url: REMOTE_DATA_URL.to_string(),
            domoticz_url: DOMOTICZ_URL.to_string(),
            iio_root: PathBuf::from(IIO_DEVICES),
            batch_policy: BatchPolicy::default(),
        }
    }
}

/// Expects `[program, cycle_time_seconds]` with a positive whole number of
/// seconds.
pub fn cycle_time_from_args(args: &[String]) -> Option<Duration> {
    match args {
        [_, seconds] => match seconds.parse::<u64>() {
            Ok(0) | Err(_) => None,
            Ok(seconds) => Some(Duration::from_secs(seconds)),
        },
        _ => None,
    }
}
