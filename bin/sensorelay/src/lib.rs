mod config;
pub use config::{cycle_time_from_args, BatchPolicy, Config, USAGE};

mod error;
pub use error::Error;

mod local;
pub use local::{Board, LocalPoller};

mod pid_file;
pub use pid_file::{pid_file_name, write_pid_file};

mod publisher;
pub use publisher::{DeviceUpdater, Publisher};

mod remote;
pub use remote::{DataSource, RemotePoller};

mod table;
pub use table::{round_to_hundredths, Reading, Source, Table, TableWriter};

pub type ErasedError = Box<dyn std::error::Error + Send + Sync>;
pub type Result<T> = std::result::Result<T, Error>;
