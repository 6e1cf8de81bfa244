use sensorelay::{
    cycle_time_from_args, write_pid_file, Config, ErasedError, LocalPoller, Publisher,
    RemotePoller, Result, Source, Table, USAGE,
};

use std::process;

use log::info;
use sensehat::SenseHat;
use tokio::signal::unix::{signal, SignalKind};
use tokio_util::sync::CancellationToken;

const VERSION: &str = env!("CARGO_PKG_VERSION");

#[tokio::main(flavor = "current_thread")]
async fn main() -> std::result::Result<(), ErasedError> {
    pretty_env_logger::init_timed();

    let args: Vec<String> = std::env::args().collect();
    let cycle_time = match cycle_time_from_args(&args) {
        Some(cycle_time) => cycle_time,
        None => {
            println!("{USAGE}");
            process::exit(0);
        }
    };

    let pid_file = write_pid_file(&args)?;
    info!("sensorelay version {VERSION}, pid file {}", pid_file.display());

    let config = Config::new(cycle_time);
    let table = Table::new();

    let sense_hat = SenseHat::discover(&config.iio_root)?;
    let airrohr = airrohr::Client::new(config.remote_url.as_str())?;
    let domoticz = domoticz::Client::new(config.domoticz_url.as_str())?;

    let local = LocalPoller::new(sense_hat, table.writer(Source::SenseHat));
    let remote = RemotePoller::new(airrohr, table.writer(Source::Airrohr));
    let publisher = Publisher::new(table, domoticz, config.batch_policy);

    let shutdown = CancellationToken::new();

    info!("starting the scheduler, cycle time {:?}", config.cycle_time);

    tokio::try_join!(
        publisher.run(config.cycle_time, shutdown.clone()),
        local.run(config.cycle_time, shutdown.clone()),
        remote.run(config.cycle_time, shutdown.clone()),
        wait_for_shutdown(shutdown),
    )?;

    Ok(())
}

async fn wait_for_shutdown(shutdown: CancellationToken) -> Result<()> {
    let mut sigterm = signal(SignalKind::terminate())?;

    tokio::select! {
        _ = sigterm.recv() => info!("got SIGTERM, exiting..."),
        _ = tokio::signal::ctrl_c() => info!("got SIGINT, exiting..."),
    }

    shutdown.cancel();
    Ok(())
}
