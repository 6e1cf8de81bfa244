use std::fmt;

#[derive(Debug)]
pub enum Error {
    SenseHat(sensehat::Error),
    Airrohr(airrohr::Error),
    Domoticz(domoticz::Error),
    Io(std::io::Error),
    ValueCount { expected: usize, actual: usize },
    Undelivered { failed: usize, total: usize },
}

impl From<sensehat::Error> for Error {
    fn from(err: sensehat::Error) -> Self {
        Self::SenseHat(err)
    }
}

impl From<airrohr::Error> for Error {
    fn from(err: airrohr::Error) -> Self {
        Self::Airrohr(err)
    }
}

impl From<domoticz::Error> for Error {
    fn from(err: domoticz::Error) -> Self {
        Self::Domoticz(err)
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err)
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::SenseHat(err) => write!(f, "sense hat error: {err}"),
            Self::Airrohr(err) => write!(f, "airrohr error: {err}"),
            Self::Domoticz(err) => write!(f, "domoticz error: {err}"),
            Self::Io(err) => write!(f, "io error: {err}"),
            Self::ValueCount { expected, actual } => {
                write!(f, "expected {expected} values, got {actual}")
            }
            Self::Undelivered { failed, total } => {
                write!(f, "{failed} of {total} readings were not delivered")
            }
        }
    }
}

impl std::error::Error for Error {}
