use std::path::{Path, PathBuf};

use log::debug;

use crate::channel::{find_device, read_channel};
use crate::Result;

const HUMIDITY_SENSOR: &str = "hts221";
const PRESSURE_SENSOR: &str = "lps25h";

/// Sense HAT environmental sensors as exposed by the kernel IIO drivers
/// (`hts221` for humidity and temperature, `lps25h` for pressure).
#[derive(Clone, Debug)]
pub struct SenseHat {
    humidity_sensor: PathBuf,
    pressure_sensor: PathBuf,
}

impl SenseHat {
    /// Looks the sensors up under an IIO devices directory, usually
    /// `/sys/bus/iio/devices`.
    pub fn discover(root: impl AsRef<Path>) -> Result<Self> {
        let root = root.as_ref();

        let humidity_sensor = find_device(root, HUMIDITY_SENSOR)?;
        let pressure_sensor = find_device(root, PRESSURE_SENSOR)?;

        debug!(
            "sense hat: humidity at {}, pressure at {}",
            humidity_sensor.display(),
            pressure_sensor.display()
        );

        Ok(Self {
            humidity_sensor,
            pressure_sensor,
        })
    }

    /// Temperature in °C, taken from the humidity sensor.
    pub fn temperature(&self) -> Result<f64> {
        let millidegrees = read_channel(&self.humidity_sensor, "temp")?;
        Ok(millidegrees / 1000.0)
    }

    /// Relative humidity in %.
    pub fn humidity(&self) -> Result<f64> {
        let millipercent = read_channel(&self.humidity_sensor, "humidityrelative")?;
        Ok(millipercent / 1000.0)
    }

    /// Barometric pressure in millibar.
    pub fn pressure(&self) -> Result<f64> {
        let kilopascal = read_channel(&self.pressure_sensor, "pressure")?;
        Ok(kilopascal * 10.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Error;

    use std::fs;

    fn fake_iio_root(test_name: &str) -> PathBuf {
        let root = std::env::temp_dir().join(format!(
            "sensehat-{test_name}-{pid}",
            pid = std::process::id()
        ));
        let _ = fs::remove_dir_all(&root);
        fs::create_dir_all(&root).unwrap();
        root
    }

    fn fake_device(root: &Path, dir: &str, files: &[(&str, &str)]) {
        let device = root.join(dir);
        fs::create_dir_all(&device).unwrap();

        for (name, content) in files {
            fs::write(device.join(name), format!("{content}\n")).unwrap();
        }
    }

    #[test]
    fn test_read_sensors() {
        let root = fake_iio_root("read");

        fake_device(&root, "iio:device0", &[("name", "lsm9ds1_accel")]);
        fake_device(
            &root,
            "iio:device1",
            &[
                ("name", "hts221"),
                ("in_temp_raw", "-200"),
                ("in_temp_offset", "12000"),
                ("in_temp_scale", "2"),
                ("in_humidityrelative_raw", "1500"),
                ("in_humidityrelative_offset", "500"),
                ("in_humidityrelative_scale", "20"),
            ],
        );
        fake_device(
            &root,
            "iio:device2",
            &[
                ("name", "lps25h"),
                ("in_pressure_raw", "4150000"),
                ("in_pressure_scale", "0.000024414"),
            ],
        );

        let sense_hat = SenseHat::discover(&root).unwrap();

        assert_eq!(sense_hat.temperature().unwrap(), 23.6);
        assert_eq!(sense_hat.humidity().unwrap(), 40.0);

        let pressure = sense_hat.pressure().unwrap();
        assert!((pressure - 1013.181).abs() < 0.001, "{pressure}");

        fs::remove_dir_all(root).unwrap();
    }

    #[test]
    fn test_missing_device() {
        let root = fake_iio_root("missing");

        fake_device(&root, "iio:device0", &[("name", "hts221")]);

        let err = SenseHat::discover(&root).unwrap_err();
        assert!(matches!(err, Error::DeviceNotFound("lps25h")));

        fs::remove_dir_all(root).unwrap();
    }

    #[test]
    fn test_missing_raw_value() {
        let root = fake_iio_root("raw");

        fake_device(&root, "iio:device0", &[("name", "hts221")]);
        fake_device(&root, "iio:device1", &[("name", "lps25h")]);

        let sense_hat = SenseHat::discover(&root).unwrap();
        assert!(matches!(sense_hat.temperature(), Err(Error::Io(_))));

        fs::remove_dir_all(root).unwrap();
    }
}
