use std::fmt;
use std::num::ParseFloatError;

#[derive(Debug)]
pub enum Error {
    Io(std::io::Error),
    DeviceNotFound(&'static str),
    InvalidValue(String, ParseFloatError),
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err)
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(err) => write!(f, "io error: {err}"),
            Self::DeviceNotFound(name) => write!(f, "iio device {name} not found"),
            Self::InvalidValue(file, err) => write!(f, "invalid value in {file}: {err}"),
        }
    }
}

impl std::error::Error for Error {}
