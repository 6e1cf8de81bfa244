use std::time::Duration;

use async_trait::async_trait;
use log::{debug, error, info};
use tokio::time;
use tokio_util::sync::CancellationToken;

use crate::{BatchPolicy, Error, Result, Table};

/// Home-automation server accepting one value per virtual device.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait DeviceUpdater {
    async fn update_device(&self, server_id: u32, value: f64) -> Result<()>;
}

#[async_trait]
impl DeviceUpdater for domoticz::Client {
    async fn update_device(&self, server_id: u32, value: f64) -> Result<()> {
        Ok(domoticz::Client::update_device(self, server_id, value).await?)
    }
}

pub struct Publisher<U> {
    table: Table,
    updater: U,
    policy: BatchPolicy,
}

impl<U: DeviceUpdater> Publisher<U> {
    pub fn new(table: Table, updater: U, policy: BatchPolicy) -> Self {
        Self {
            table,
            updater,
            policy,
        }
    }

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

        info!("domoticz publisher stopped");
        Ok(())
    }

    pub async fn cycle(&self) {
        match self.publish().await {
            Ok(()) => info!("data sent to domoticz"),
            Err(err) => error!("sending sensor data to Domoticz failed: {err}"),
        }
    }

    /// Sends every row of the table, in order, with the values current at
    /// the start of the batch.
    pub async fn publish(&self) -> Result<()> {
        let readings = self.table.snapshot().await;
        let total = readings.len();
        let mut failed = 0;

        for reading in readings {
            debug!("{} idx={} svalue={}", reading.name, reading.server_id, reading.value);

            let result = self
                .updater
                .update_device(reading.server_id, reading.value)
                .await;

            match (result, self.policy) {
                (Ok(()), _) => (),
                (Err(err), BatchPolicy::AbortBatch) => return Err(err),
                (Err(err), BatchPolicy::ContinueOnError) => {
                    error!("unable to update {}: {err}", reading.name);
                    failed += 1;
                }
            }
        }

        if failed > 0 {
            Err(Error::Undelivered { failed, total })
        } else {
            Ok(())
        }
    }
}
