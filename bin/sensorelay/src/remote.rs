use std::time::Duration;

use airrohr::DataJson;
use async_trait::async_trait;
use log::{error, info};
use tokio::time;
use tokio_util::sync::CancellationToken;

use crate::{Result, TableWriter};

/// Network sensor serving a `data.json` document.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait DataSource {
    async fn fetch(&self) -> Result<Vec<u8>>;
}

#[async_trait]
impl DataSource for airrohr::Client {
    async fn fetch(&self) -> Result<Vec<u8>> {
        Ok(self.download().await?)
    }
}

pub struct RemotePoller<S> {
    source: S,
    writer: TableWriter,
}

impl<S: DataSource> RemotePoller<S> {
    pub fn new(source: S, writer: TableWriter) -> Self {
        Self { source, writer }
    }

    /// Polls until `shutdown` is cancelled. Failed cycles are logged and
    /// leave the previous values in place.
    pub async fn run(self, cycle_time: Duration, shutdown: CancellationToken) -> Result<()> {
        loop {
            tokio::select! {
                biased;
                _ = shutdown.cancelled() => break,
                _ = self.cycle() => {}
            }

            tokio::select! {
                biased;
                _ = shutdown.cancelled() => break,
                _ = time::sleep(cycle_time) => {}
            }
        }

        info!("ESP8266 poller stopped");
        Ok(())
    }

    pub async fn cycle(&self) {
        match self.poll().await {
            Ok(()) => info!("sensor data from ESP8266 read"),
            Err(err) => error!("collecting sensor data from ESP8266 failed: {err}"),
        }
    }

    pub async fn poll(&self) -> Result<()> {
        let body = self.source.fetch().await?;
        let values = DataJson::parse(&body)?.measurements()?;

        self.writer.write(&values).await
    }
}
