mod client;
pub use client::Client;

mod data;
pub use data::{DataJson, SensorDataValue, MEASUREMENTS};

mod error;
pub use error::Error;

pub type Result<T> = std::result::Result<T, Error>;
