mod client;
pub use client::{udevice_url, Client};

mod error;
pub use error::Error;

pub type Result<T> = std::result::Result<T, Error>;
