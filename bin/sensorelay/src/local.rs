use std::time::Duration;

use log::info;
use sensehat::SenseHat;
use tokio::time;
use tokio_util::sync::CancellationToken;

use crate::{Result, TableWriter};

/// Locally attached sensor board.
#[cfg_attr(test, mockall::automock)]
pub trait Board {
    fn temperature(&self) -> Result<f64>;
    fn humidity(&self) -> Result<f64>;
    fn pressure(&self) -> Result<f64>;
}

impl Board for SenseHat {
    fn temperature(&self) -> Result<f64> {
        Ok(SenseHat::temperature(self)?)
    }

    fn humidity(&self) -> Result<f64> {
        Ok(SenseHat::humidity(self)?)
    }

    fn pressure(&self) -> Result<f64> {
        Ok(SenseHat::pressure(self)?)
    }
}

pub struct LocalPoller<B> {
    board: B,
    writer: TableWriter,
}

impl<B: Board> LocalPoller<B> {
    pub fn new(board: B, writer: TableWriter) -> Self {
        Self { board, writer }
    }

    /// Polls until `shutdown` is cancelled. A board read failure ends the
    /// lane with an error.
    pub async fn run(self, cycle_time: Duration, shutdown: CancellationToken) -> Result<()> {
        loop {
            self.poll().await?;

            tokio::select! {
                biased;
                _ = shutdown.cancelled() => break,
                _ = time::sleep(cycle_time) => {}
            }
        }

        info!("sense hat poller stopped");
        Ok(())
    }

    pub async fn poll(&self) -> Result<()> {
        let values = [
            self.board.temperature()?,
            self.board.humidity()?,
            self.board.pressure()?,
        ];

        self.writer.write(&values).await?;
        info!("sensor data from SenseHat read");

        Ok(())
    }
}
