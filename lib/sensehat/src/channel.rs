use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use log::trace;

use crate::{Error, Result};

pub fn find_device(root: &Path, name: &'static str) -> Result<PathBuf> {
    for entry in fs::read_dir(root)? {
        let path = entry?.path();

        match fs::read_to_string(path.join("name")) {
            Ok(device_name) if device_name.trim() == name => {
                trace!("found {name} at {}", path.display());
                return Ok(path);
            }
            _ => continue,
        }
    }

    Err(Error::DeviceNotFound(name))
}

/// Reads a processed IIO channel: `(raw + offset) * scale`.
///
/// Drivers that don't expose `offset` or `scale` for a channel get 0 and 1.
pub fn read_channel(device: &Path, channel: &str) -> Result<f64> {
    let raw = read_value(device, &format!("in_{channel}_raw"))?;
    let offset = read_optional_value(device, &format!("in_{channel}_offset"))?.unwrap_or(0.0);
    let scale = read_optional_value(device, &format!("in_{channel}_scale"))?.unwrap_or(1.0);

    Ok((raw + offset) * scale)
}

fn read_value(device: &Path, file: &str) -> Result<f64> {
    let content = fs::read_to_string(device.join(file))?;
    parse_value(file, &content)
}

fn read_optional_value(device: &Path, file: &str) -> Result<Option<f64>> {
    match fs::read_to_string(device.join(file)) {
        Ok(content) => parse_value(file, &content).map(Some),
        Err(err) if err.kind() == ErrorKind::NotFound => Ok(None),
        Err(err) => Err(err.into()),
    }
}

fn parse_value(file: &str, content: &str) -> Result<f64> {
    content
        .trim()
        .parse()
        .map_err(|err| Error::InvalidValue(file.to_string(), err))
}
