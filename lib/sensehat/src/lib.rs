mod channel;

mod error;
pub use error::Error;

mod sense_hat;
pub use sense_hat::SenseHat;

pub type Result<T> = std::result::Result<T, Error>;
